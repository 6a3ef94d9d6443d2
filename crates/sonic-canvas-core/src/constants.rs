use crate::mapping::ParamRange;

// Fixed page, DSP and shader constants shared by the web frontend and tests.

// Page elements
pub const BUTTON_ID: &str = "button-dsp";
pub const CANVAS_ID: &str = "webgl";

// Externally compiled DSP unit
pub const DSP_UNIT_NAME: &str = "sounds";
pub const DSP_VOICE_MODE: u32 = 0; // 0 = monophonic node

// Parameter addresses exposed by the DSP unit
pub const CUTOFF_ADDRESS: &str = "/sounds/Cutoff";
pub const FREQUENCY_ADDRESS: &str = "/sounds/Frequency";

// Pointer x drives cutoff, pointer y drives frequency
pub const CUTOFF_RANGE: ParamRange = ParamRange::new(200.0, 2400.0);
pub const FREQUENCY_RANGE: ParamRange = ParamRange::new(40.0, 160.0);

// Toggle button labels
pub const LABEL_ACTIVATE: &str = "Activate Sound";
pub const LABEL_DEACTIVATE: &str = "Deactivate Sound";

pub const WEBGL_UNSUPPORTED_TEXT: &str = "WebGL is not supported by your browser.";

// Shader interface
pub const ATTR_VERTEX_POSITION: &str = "aVertexPosition";
pub const U_TIME: &str = "u_time";
pub const U_RESOLUTION: &str = "u_resolution";
pub const U_A: &str = "u_a";
pub const U_B: &str = "u_b";
pub const U_C: &str = "u_c";
pub const U_D: &str = "u_d";

pub const DEFAULT_SHADER_KNOBS: [f32; 4] = [0.5, 0.5, 0.5, 0.5];

/// Full clip-space square as a 4-vertex triangle strip (x, y pairs).
pub const QUAD_VERTICES: [f32; 8] = [
    -1.0, 1.0, //
    1.0, 1.0, //
    -1.0, -1.0, //
    1.0, -1.0,
];
pub const QUAD_VERTEX_COUNT: i32 = 4;
pub const QUAD_COMPONENTS: i32 = 2;

// Animation frame timestamps arrive in milliseconds
pub const MS_TO_SECONDS: f64 = 0.001;
