use crate::dom;
use crate::webgl::{CanvasSurface, WebGl};
use sonic_canvas_core::{
    render_loop, FrameRequester, RenderLoop, ShaderKnobs, ShaderVisualizer, FRAGMENT_SHADER_SRC,
    VERTEX_SHADER_SRC, WEBGL_UNSUPPORTED_TEXT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ShaderLoop = RenderLoop<ShaderVisualizer<WebGl>, AnimationFrames>;

/// `requestAnimationFrame` re-arming the one callback stored in `slot`.
pub struct AnimationFrames {
    slot: FrameCallback,
}

impl FrameRequester for AnimationFrames {
    fn request_frame(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.slot.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame: {:?}", e);
            }
        }
    }
}

/// Start the shader background on `canvas`. Compile or link failures are
/// logged and leave the canvas untouched; a missing WebGL context replaces the
/// page with a fallback message.
pub fn start_visualizer(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    knobs: ShaderKnobs,
    track_window_resize: bool,
) -> anyhow::Result<()> {
    let Some(gl) = WebGl::from_canvas(&canvas)? else {
        log::error!("WebGL not supported");
        dom::replace_body_text(document, WEBGL_UNSUPPORTED_TEXT);
        return Ok(());
    };

    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let shader_loop: Rc<RefCell<Option<ShaderLoop>>> = Rc::new(RefCell::new(None));

    let loop_tick = shader_loop.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(l) = loop_tick.borrow_mut().as_mut() {
            l.on_frame(timestamp_ms);
        }
    }) as Box<dyn FnMut(f64)>));

    let mut surface = CanvasSurface(canvas);
    let requester = AnimationFrames { slot };
    let started = render_loop::run(
        gl,
        &mut surface,
        VERTEX_SHADER_SRC,
        FRAGMENT_SHADER_SRC,
        knobs,
        requester,
    )?;
    *shader_loop.borrow_mut() = Some(started);

    if track_window_resize {
        wire_refit_on_resize(shader_loop, surface);
    }
    Ok(())
}

fn wire_refit_on_resize(shader_loop: Rc<RefCell<Option<ShaderLoop>>>, mut surface: CanvasSurface) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();
    dom::add_listener(target, "resize", move |_: web::Event| {
        if let Some(l) = shader_loop.borrow_mut().as_mut() {
            l.sink_mut().refit(&mut surface);
        }
    });
}
