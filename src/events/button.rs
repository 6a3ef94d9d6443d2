use crate::audio::WebAudioTransport;
use sonic_canvas_core::{AudioToggle, ToggleControl};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedToggle = Rc<RefCell<AudioToggle<WebAudioTransport>>>;

pub struct ToggleButton(pub web::HtmlButtonElement);

impl ToggleControl for ToggleButton {
    fn set_enabled(&self, enabled: bool) {
        self.0.set_disabled(!enabled);
    }
}

/// Click toggles suspend/resume. The label flips immediately; when the
/// browser settles the transition the label is re-synced, which reverts it if
/// the transition was rejected.
pub fn wire_toggle_button(button: &web::HtmlButtonElement, toggle: SharedToggle) {
    button.set_text_content(Some(toggle.borrow().label()));

    let button_click = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        // Release the borrow before awaiting.
        let started = toggle.borrow_mut().toggle();
        let Some((req, pending)) = started else {
            return;
        };
        button_click.set_text_content(Some(req.label));

        let toggle = toggle.clone();
        let button = button_click.clone();
        spawn_local(async move {
            let result = JsFuture::from(pending).await;
            if let Err(e) = &result {
                log::warn!("[audio] {:?} rejected: {:?}", req.op, e);
            }
            let mut t = toggle.borrow_mut();
            t.settle(result.is_ok());
            button.set_text_content(Some(t.label()));
        });
    }) as Box<dyn FnMut()>);
    button.set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}
