use anyhow::anyhow;
use sonic_canvas_core::{DisplaySurface, GlApi, ShaderStage};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

/// WebGL 1 context behind the core `GlApi` seam.
pub struct WebGl(pub GL);

impl WebGl {
    /// `Ok(None)` means the browser has no WebGL support for this canvas.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> anyhow::Result<Option<Self>> {
        let Some(ctx) = canvas
            .get_context("webgl")
            .map_err(|e| anyhow!("getContext: {:?}", e))?
        else {
            return Ok(None);
        };
        let gl = ctx
            .dyn_into::<GL>()
            .map_err(|e| anyhow!("not a WebGL context: {:?}", e))?;
        Ok(Some(Self(gl)))
    }
}

impl GlApi for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        self.0.create_shader(kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.0.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.0.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.0
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.0.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.0.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.0.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.0.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.0.link_program(program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.0
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.0.get_program_info_log(program).unwrap_or_default()
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.0.delete_program(Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.0.use_program(Some(program));
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.0.create_buffer()
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.0.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        self.0
            .buffer_data_with_u8_array(GL::ARRAY_BUFFER, data, GL::STATIC_DRAW);
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.0.get_attrib_location(program, name)).ok()
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32) {
        self.0
            .vertex_attrib_pointer_with_i32(index, size, GL::FLOAT, false, 0, 0);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.0.enable_vertex_attrib_array(index);
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.0.get_uniform_location(program, name)
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, x: f32) {
        self.0.uniform1f(location, x);
    }

    fn uniform2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        self.0.uniform2f(location, x, y);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.0.viewport(x, y, width, height);
    }

    fn clear_color_buffer(&self) {
        self.0.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.0.draw_arrays(GL::TRIANGLE_STRIP, first, count);
    }
}

/// Canvas element sized by CSS, with a separately sized drawing buffer.
pub struct CanvasSurface(pub HtmlCanvasElement);

impl DisplaySurface for CanvasSurface {
    fn display_size(&self) -> (u32, u32) {
        (
            self.0.client_width().max(0) as u32,
            self.0.client_height().max(0) as u32,
        )
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.0.width(), self.0.height())
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.0.set_width(width);
        self.0.set_height(height);
    }
}
