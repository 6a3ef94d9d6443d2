use crate::config::ShaderKnobs;
use crate::constants::{MS_TO_SECONDS, QUAD_COMPONENTS, QUAD_VERTEX_COUNT};
use crate::error::ShaderError;
use crate::shader::{create_program, init_buffers, GlApi, ProgramInfo};
use crate::surface::{resize_to_display_size, DisplaySurface};

/// Schedules exactly one future frame callback per call.
pub trait FrameRequester {
    fn request_frame(&mut self);
}

/// Something drawn once per display frame.
pub trait FrameSink {
    fn render(&mut self, seconds: f32);
}

/// Compiled program, quad buffer and resolved locations for the shader
/// background.
pub struct ShaderVisualizer<G: GlApi> {
    gl: G,
    info: ProgramInfo<G>,
    _quad: G::Buffer,
    resolution: (u32, u32),
}

impl<G: GlApi> ShaderVisualizer<G> {
    /// Compile, link, upload the quad, fit the surface, bind the vertex
    /// attribute and set the static uniforms. Nothing is drawn here. A
    /// failure after linking deletes the program again.
    pub fn setup<S: DisplaySurface + ?Sized>(
        gl: G,
        surface: &mut S,
        vertex_source: &str,
        fragment_source: &str,
        knobs: ShaderKnobs,
    ) -> Result<Self, ShaderError> {
        let program = create_program(&gl, vertex_source, fragment_source)?;
        let info = ProgramInfo::resolve(&gl, program)?;
        let quad = match init_buffers(&gl) {
            Ok(quad) => quad,
            Err(e) => {
                gl.delete_program(&info.program);
                return Err(e);
            }
        };

        resize_to_display_size(surface);
        let (w, h) = surface.backing_size();
        gl.viewport(0, 0, w as i32, h as i32);

        gl.bind_array_buffer(&quad);
        gl.vertex_attrib_pointer_f32(info.vertex_position, QUAD_COMPONENTS);
        gl.enable_vertex_attrib_array(info.vertex_position);

        gl.use_program(&info.program);

        let ShaderKnobs { a, b, c, d } = knobs;
        for (loc, value) in info.knobs.iter().zip([a, b, c, d]) {
            gl.uniform1f(loc.as_ref(), value);
        }
        gl.uniform2f(info.resolution.as_ref(), w as f32, h as f32);

        Ok(Self {
            gl,
            info,
            _quad: quad,
            resolution: (w, h),
        })
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    /// Re-fit after the display size changed; updates the viewport and
    /// `u_resolution` only when the backing store actually changed.
    pub fn refit<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !resize_to_display_size(surface) {
            return false;
        }
        let (w, h) = surface.backing_size();
        self.gl.viewport(0, 0, w as i32, h as i32);
        self.gl
            .uniform2f(self.info.resolution.as_ref(), w as f32, h as f32);
        self.resolution = (w, h);
        true
    }

    pub fn draw(&self, seconds: f32) {
        self.gl.uniform1f(self.info.time.as_ref(), seconds);
        self.gl.clear_color_buffer();
        self.gl.draw_triangle_strip(0, QUAD_VERTEX_COUNT);
    }
}

impl<G: GlApi> FrameSink for ShaderVisualizer<G> {
    fn render(&mut self, seconds: f32) {
        self.draw(seconds);
    }
}

/// Single-flight frame chain: each completed frame arms exactly one more.
pub struct RenderLoop<F: FrameSink, R: FrameRequester> {
    sink: F,
    requester: R,
    frames: u64,
    started: bool,
}

impl<F: FrameSink, R: FrameRequester> RenderLoop<F, R> {
    pub fn new(sink: F, requester: R) -> Self {
        Self {
            sink,
            requester,
            frames: 0,
            started: false,
        }
    }

    /// Arm the first frame. Starting twice would fork the chain, so later
    /// calls are ignored.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.requester.request_frame();
    }

    pub fn on_frame(&mut self, timestamp_ms: f64) {
        let seconds = (timestamp_ms * MS_TO_SECONDS) as f32;
        self.sink.render(seconds);
        self.frames += 1;
        self.requester.request_frame();
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut F {
        &mut self.sink
    }
}

/// Set up the visualizer and start its frame chain.
pub fn run<G, S, R>(
    gl: G,
    surface: &mut S,
    vertex_source: &str,
    fragment_source: &str,
    knobs: ShaderKnobs,
    requester: R,
) -> Result<RenderLoop<ShaderVisualizer<G>, R>, ShaderError>
where
    G: GlApi,
    S: DisplaySurface + ?Sized,
    R: FrameRequester,
{
    let visualizer = ShaderVisualizer::setup(gl, surface, vertex_source, fragment_source, knobs)?;
    let mut render_loop = RenderLoop::new(visualizer, requester);
    render_loop.start();
    Ok(render_loop)
}
