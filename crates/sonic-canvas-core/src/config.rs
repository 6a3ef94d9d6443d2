use crate::constants::*;
use crate::mapping::ParamRange;

/// One pointer axis bound to a DSP parameter address.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisBinding {
    pub address: &'static str,
    pub range: ParamRange,
}

/// Four static shader inputs (`u_a`..`u_d`), intended in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderKnobs {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Default for ShaderKnobs {
    fn default() -> Self {
        let [a, b, c, d] = DEFAULT_SHADER_KNOBS;
        Self { a, b, c, d }
    }
}

impl ShaderKnobs {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Override knobs from a URL query string such as `?a=0.2&c=0.9`.
    /// Missing, malformed or non-finite entries keep their current value;
    /// accepted values are clamped to [0, 1].
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = raw.trim().parse::<f32>() else {
                continue;
            };
            if !value.is_finite() {
                continue;
            }
            let value = value.clamp(0.0, 1.0);
            match key {
                "a" => self.a = value,
                "b" => self.b = value,
                "c" => self.c = value,
                "d" => self.d = value,
                _ => {}
            }
        }
        self
    }
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub button_id: &'static str,
    pub canvas_id: &'static str,
    pub dsp_unit: &'static str,
    pub dsp_voice_mode: u32,
    pub x_axis: AxisBinding,
    pub y_axis: AxisBinding,
    pub knobs: ShaderKnobs,
    /// Clamp pointer-mapped values to the DSP's own declared ranges.
    pub clamp_to_descriptors: bool,
    /// Re-fit the canvas and `u_resolution` on window resize.
    pub track_window_resize: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            button_id: BUTTON_ID,
            canvas_id: CANVAS_ID,
            dsp_unit: DSP_UNIT_NAME,
            dsp_voice_mode: DSP_VOICE_MODE,
            x_axis: AxisBinding {
                address: CUTOFF_ADDRESS,
                range: CUTOFF_RANGE,
            },
            y_axis: AxisBinding {
                address: FREQUENCY_ADDRESS,
                range: FREQUENCY_RANGE,
            },
            knobs: ShaderKnobs::default(),
            clamp_to_descriptors: true,
            track_window_resize: false,
        }
    }
}

impl DemoConfig {
    pub fn knobs_from_query(&self, query: &str) -> ShaderKnobs {
        self.knobs.with_query(query)
    }
}
