//! Shader compilation, program linking and the full-screen quad.
//!
//! Everything is written against [`GlApi`], the small slice of a WebGL 1
//! context the visualizer needs, so the browser binding and the recording
//! context used in tests share one code path.

use crate::constants::*;
use crate::error::ShaderError;
use std::fmt;
use std::rc::Rc;

pub static VERTEX_SHADER_SRC: &str = include_str!("../shaders/fullscreen.vert");
pub static FRAGMENT_SHADER_SRC: &str = include_str!("../shaders/palette.frag");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub trait GlApi {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    /// Upload to the currently bound `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn array_buffer_data(&self, data: &[u8]);

    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    /// Float attribute with `size` components, tightly packed, offset 0.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn uniform1f(&self, location: Option<&Self::UniformLocation>, x: f32);
    fn uniform2f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color_buffer(&self);
    fn draw_triangle_strip(&self, first: i32, count: i32);
}

/// Shared context handle, so a caller can keep using a context it handed over.
impl<G: GlApi + ?Sized> GlApi for Rc<G> {
    type Shader = G::Shader;
    type Program = G::Program;
    type Buffer = G::Buffer;
    type UniformLocation = G::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader> {
        (**self).create_shader(stage)
    }
    fn shader_source(&self, shader: &Self::Shader, source: &str) {
        (**self).shader_source(shader, source)
    }
    fn compile_shader(&self, shader: &Self::Shader) {
        (**self).compile_shader(shader)
    }
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool {
        (**self).shader_compile_status(shader)
    }
    fn shader_info_log(&self, shader: &Self::Shader) -> String {
        (**self).shader_info_log(shader)
    }
    fn delete_shader(&self, shader: &Self::Shader) {
        (**self).delete_shader(shader)
    }
    fn create_program(&self) -> Option<Self::Program> {
        (**self).create_program()
    }
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader) {
        (**self).attach_shader(program, shader)
    }
    fn link_program(&self, program: &Self::Program) {
        (**self).link_program(program)
    }
    fn program_link_status(&self, program: &Self::Program) -> bool {
        (**self).program_link_status(program)
    }
    fn program_info_log(&self, program: &Self::Program) -> String {
        (**self).program_info_log(program)
    }
    fn delete_program(&self, program: &Self::Program) {
        (**self).delete_program(program)
    }
    fn use_program(&self, program: &Self::Program) {
        (**self).use_program(program)
    }
    fn create_buffer(&self) -> Option<Self::Buffer> {
        (**self).create_buffer()
    }
    fn bind_array_buffer(&self, buffer: &Self::Buffer) {
        (**self).bind_array_buffer(buffer)
    }
    fn array_buffer_data(&self, data: &[u8]) {
        (**self).array_buffer_data(data)
    }
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32> {
        (**self).attrib_location(program, name)
    }
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32) {
        (**self).vertex_attrib_pointer_f32(index, size)
    }
    fn enable_vertex_attrib_array(&self, index: u32) {
        (**self).enable_vertex_attrib_array(index)
    }
    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        (**self).uniform_location(program, name)
    }
    fn uniform1f(&self, location: Option<&Self::UniformLocation>, x: f32) {
        (**self).uniform1f(location, x)
    }
    fn uniform2f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32) {
        (**self).uniform2f(location, x, y)
    }
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        (**self).viewport(x, y, width, height)
    }
    fn clear_color_buffer(&self) {
        (**self).clear_color_buffer()
    }
    fn draw_triangle_strip(&self, first: i32, count: i32) {
        (**self).draw_triangle_strip(first, count)
    }
}

/// Compile one stage. On failure the info log is reported, the shader object
/// is deleted and nothing is returned for linking.
pub fn compile_shader<G: GlApi>(
    gl: &G,
    source: &str,
    stage: ShaderStage,
) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(ShaderError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if !gl.shader_compile_status(&shader) {
        let log = gl.shader_info_log(&shader);
        gl.delete_shader(&shader);
        let err = ShaderError::Compile { stage, log };
        log::error!("{}", err);
        return Err(err);
    }
    Ok(shader)
}

/// Compile both stages and link them. Linking is never attempted unless both
/// stages compiled. On success the stage objects are flagged for deletion so
/// they go away with the program.
pub fn create_program<G: GlApi>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<G::Program, ShaderError> {
    let vs = compile_shader(gl, vertex_source, ShaderStage::Vertex)?;
    let fs = match compile_shader(gl, fragment_source, ShaderStage::Fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(&vs);
            return Err(e);
        }
    };

    let Some(program) = gl.create_program() else {
        gl.delete_shader(&vs);
        gl.delete_shader(&fs);
        return Err(ShaderError::CreateProgram);
    };
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    if !gl.program_link_status(&program) {
        let log = gl.program_info_log(&program);
        gl.delete_program(&program);
        gl.delete_shader(&vs);
        gl.delete_shader(&fs);
        let err = ShaderError::Link { log };
        log::error!("{}", err);
        return Err(err);
    }
    gl.delete_shader(&vs);
    gl.delete_shader(&fs);
    Ok(program)
}

/// Upload the full-screen triangle-strip quad.
pub fn init_buffers<G: GlApi>(gl: &G) -> Result<G::Buffer, ShaderError> {
    let buffer = gl.create_buffer().ok_or(ShaderError::CreateBuffer)?;
    gl.bind_array_buffer(&buffer);
    gl.array_buffer_data(bytemuck::cast_slice(&QUAD_VERTICES));
    Ok(buffer)
}

/// Linked program plus every location it is driven through, resolved once.
/// Resolution failure deletes the program.
pub struct ProgramInfo<G: GlApi> {
    pub program: G::Program,
    pub vertex_position: u32,
    pub time: Option<G::UniformLocation>,
    pub resolution: Option<G::UniformLocation>,
    pub knobs: [Option<G::UniformLocation>; 4],
}

impl<G: GlApi> ProgramInfo<G> {
    pub fn resolve(gl: &G, program: G::Program) -> Result<Self, ShaderError> {
        let Some(vertex_position) = gl.attrib_location(&program, ATTR_VERTEX_POSITION) else {
            gl.delete_program(&program);
            return Err(ShaderError::MissingAttribute(ATTR_VERTEX_POSITION));
        };
        let time = gl.uniform_location(&program, U_TIME);
        let resolution = gl.uniform_location(&program, U_RESOLUTION);
        let knobs = [U_A, U_B, U_C, U_D].map(|name| gl.uniform_location(&program, name));
        Ok(Self {
            program,
            vertex_position,
            time,
            resolution,
            knobs,
        })
    }
}
