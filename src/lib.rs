#![cfg(target_arch = "wasm32")]
use sonic_canvas_core::{initialize, AudioToggle, DemoConfig, DspReady, InteractionController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod webgl;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sonic-canvas starting");

    let config = DemoConfig::default();

    // The two subsystems share nothing; either may fail without the other.
    if let Err(e) = init_visualizer(&config) {
        log::error!("visualizer init error: {:?}", e);
    }
    spawn_local(async move {
        if let Err(e) = init_audio(&config).await {
            log::error!("audio init error: {:?}", e);
        }
    });
    Ok(())
}

fn init_visualizer(config: &DemoConfig) -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, config.canvas_id)?;
    let query = window.location().search().unwrap_or_default();
    let knobs = config.knobs_from_query(&query);
    frame::start_visualizer(&document, canvas, knobs, config.track_window_resize)
}

async fn init_audio(config: &DemoConfig) -> anyhow::Result<()> {
    let (_window, document) = dom::window_document()?;
    let button = events::ToggleButton(dom::element_by_id(&document, config.button_id)?);
    let factory = audio::WebDspFactory::new()?;

    // The button stays disabled if the voice never comes up.
    let DspReady { voice, descriptors } =
        initialize(&factory, &button, config.dsp_unit, config.dsp_voice_mode).await?;

    let controller = Rc::new(RefCell::new(InteractionController::new(
        voice,
        descriptors,
        config,
    )));
    events::wire_pointer_handlers(&document, controller);

    let toggle = Rc::new(RefCell::new(AudioToggle::new(
        audio::WebAudioTransport::new(factory.context().clone()),
    )));
    events::wire_toggle_button(&button.0, toggle);
    Ok(())
}
