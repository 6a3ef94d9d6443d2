use crate::audio::DspVoice;
use crate::dom;
use sonic_canvas_core::InteractionController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedController = Rc<RefCell<InteractionController<DspVoice>>>;

fn forward(controller: &SharedController, client_x: i32, client_y: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let (w, h) = dom::viewport_size(&window);
    controller
        .borrow_mut()
        .on_pointer_move(client_x as f32, client_y as f32, w, h);
}

fn forward_first_touch(controller: &SharedController, ev: &web::TouchEvent) {
    if let Some(touch) = ev.touches().get(0) {
        forward(controller, touch.client_x(), touch.client_y());
    }
}

/// Mouse and touch movement anywhere on the page drive the DSP parameters.
pub fn wire_pointer_handlers(document: &web::Document, controller: SharedController) {
    let target: &web::EventTarget = document.as_ref();

    let c = controller.clone();
    dom::add_listener(target, "mousemove", move |ev: web::MouseEvent| {
        forward(&c, ev.client_x(), ev.client_y());
    });

    let c = controller.clone();
    dom::add_listener(target, "touchmove", move |ev: web::TouchEvent| {
        forward_first_touch(&c, &ev);
    });

    // A tap sets the parameters right away, without waiting for movement.
    dom::add_listener(target, "touchstart", move |ev: web::TouchEvent| {
        forward_first_touch(&controller, &ev);
    });
}
