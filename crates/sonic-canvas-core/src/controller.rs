use crate::config::{AxisBinding, DemoConfig};
use crate::mapping::round_to_hundredths;
use crate::params::DescriptorTable;
use crate::pointer::PointerPosition;

/// Anything that accepts parameter writes by address (the DSP voice).
pub trait ParamSink {
    fn set_param_value(&self, address: &str, value: f32);
}

impl<T: ParamSink + ?Sized> ParamSink for std::rc::Rc<T> {
    fn set_param_value(&self, address: &str, value: f32) {
        (**self).set_param_value(address, value)
    }
}

/// Owns the pointer state and forwards mapped values to the DSP voice.
pub struct InteractionController<S: ParamSink> {
    sink: S,
    pointer: PointerPosition,
    x_axis: AxisBinding,
    y_axis: AxisBinding,
    descriptors: DescriptorTable,
    clamp_to_descriptors: bool,
}

impl<S: ParamSink> InteractionController<S> {
    pub fn new(sink: S, descriptors: DescriptorTable, config: &DemoConfig) -> Self {
        Self {
            sink,
            pointer: PointerPosition::default(),
            x_axis: config.x_axis.clone(),
            y_axis: config.y_axis.clone(),
            descriptors,
            clamp_to_descriptors: config.clamp_to_descriptors,
        }
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Target values for the current pointer position, in (x, y) axis order.
    pub fn targets(&self) -> [(&'static str, f32); 2] {
        [
            self.target(&self.x_axis, self.pointer.x()),
            self.target(&self.y_axis, self.pointer.y()),
        ]
    }

    fn target(&self, axis: &AxisBinding, normalized: f32) -> (&'static str, f32) {
        // Rounded before clamping so a declared bound is never overshot.
        let value = round_to_hundredths(axis.range.map(normalized));
        if self.clamp_to_descriptors {
            return (axis.address, self.descriptors.clamp(axis.address, value));
        }
        (axis.address, value)
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        if !self
            .pointer
            .update(client_x, client_y, viewport_width, viewport_height)
        {
            return;
        }
        for (address, value) in self.targets() {
            log::debug!("[dsp] {} = {:.2}", address, value);
            self.sink.set_param_value(address, value);
        }
    }
}
