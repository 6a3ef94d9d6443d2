// Recording fakes for the core seams (GL, frames, surface, DSP, audio context).
#![allow(dead_code)]

use sonic_canvas_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage),
    CompileShader(ShaderStage),
    DeleteShader(ShaderStage),
    CreateProgram,
    AttachShader(ShaderStage),
    LinkProgram,
    DeleteProgram,
    UseProgram,
    CreateBuffer,
    BindArrayBuffer,
    ArrayBufferData(Vec<f32>),
    VertexAttribPointer { index: u32, size: i32 },
    EnableVertexAttribArray(u32),
    Uniform1f(String, f32),
    Uniform2f(String, f32, f32),
    Viewport(i32, i32, i32, i32),
    Clear,
    DrawTriangleStrip(i32, i32),
}

#[derive(Default)]
pub struct FakeGl {
    pub calls: RefCell<Vec<GlCall>>,
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_buffer: bool,
    pub missing_attribute: bool,
}

impl FakeGl {
    pub fn failing_compile(stage: ShaderStage) -> Self {
        Self {
            fail_compile: Some(stage),
            ..Self::default()
        }
    }

    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    pub fn failing_buffer() -> Self {
        Self {
            fail_buffer: true,
            ..Self::default()
        }
    }

    pub fn without_attribute() -> Self {
        Self {
            missing_attribute: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }

    fn push(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[derive(Clone, Debug)]
pub struct FakeShader(pub ShaderStage);

impl GlApi for FakeGl {
    type Shader = FakeShader;
    type Program = ();
    type Buffer = ();
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<FakeShader> {
        self.push(GlCall::CreateShader(stage));
        Some(FakeShader(stage))
    }

    fn shader_source(&self, _shader: &FakeShader, _source: &str) {}

    fn compile_shader(&self, shader: &FakeShader) {
        self.push(GlCall::CompileShader(shader.0));
    }

    fn shader_compile_status(&self, shader: &FakeShader) -> bool {
        self.fail_compile != Some(shader.0)
    }

    fn shader_info_log(&self, shader: &FakeShader) -> String {
        format!("ERROR: 0:1: {} stage rejected", shader.0)
    }

    fn delete_shader(&self, shader: &FakeShader) {
        self.push(GlCall::DeleteShader(shader.0));
    }

    fn create_program(&self) -> Option<()> {
        self.push(GlCall::CreateProgram);
        Some(())
    }

    fn attach_shader(&self, _program: &(), shader: &FakeShader) {
        self.push(GlCall::AttachShader(shader.0));
    }

    fn link_program(&self, _program: &()) {
        self.push(GlCall::LinkProgram);
    }

    fn program_link_status(&self, _program: &()) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: &()) -> String {
        "varyings mismatch".to_string()
    }

    fn delete_program(&self, _program: &()) {
        self.push(GlCall::DeleteProgram);
    }

    fn use_program(&self, _program: &()) {
        self.push(GlCall::UseProgram);
    }

    fn create_buffer(&self) -> Option<()> {
        self.push(GlCall::CreateBuffer);
        (!self.fail_buffer).then_some(())
    }

    fn bind_array_buffer(&self, _buffer: &()) {
        self.push(GlCall::BindArrayBuffer);
    }

    fn array_buffer_data(&self, data: &[u8]) {
        let floats: Vec<f32> = data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        self.push(GlCall::ArrayBufferData(floats));
    }

    fn attrib_location(&self, _program: &(), _name: &str) -> Option<u32> {
        (!self.missing_attribute).then_some(0)
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32) {
        self.push(GlCall::VertexAttribPointer { index, size });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(GlCall::EnableVertexAttribArray(index));
    }

    fn uniform_location(&self, _program: &(), name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn uniform1f(&self, location: Option<&String>, x: f32) {
        if let Some(name) = location {
            self.push(GlCall::Uniform1f(name.clone(), x));
        }
    }

    fn uniform2f(&self, location: Option<&String>, x: f32, y: f32) {
        if let Some(name) = location {
            self.push(GlCall::Uniform2f(name.clone(), x, y));
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.push(GlCall::Viewport(x, y, width, height));
    }

    fn clear_color_buffer(&self) {
        self.push(GlCall::Clear);
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.push(GlCall::DrawTriangleStrip(first, count));
    }
}

/// Counts frame requests; the count is shared so tests can read it while
/// the render loop owns the requester.
#[derive(Clone, Default)]
pub struct CountingFrames {
    pub requests: Rc<Cell<u64>>,
}

impl FrameRequester for CountingFrames {
    fn request_frame(&mut self) {
        self.requests.set(self.requests.get() + 1);
    }
}

pub struct FakeSurface {
    pub display: (u32, u32),
    pub backing: (u32, u32),
    pub resizes: u32,
}

impl FakeSurface {
    pub fn new(display: (u32, u32), backing: (u32, u32)) -> Self {
        Self {
            display,
            backing,
            resizes: 0,
        }
    }
}

impl DisplaySurface for FakeSurface {
    fn display_size(&self) -> (u32, u32) {
        self.display
    }
    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.resizes += 1;
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub writes: RefCell<Vec<(String, f32)>>,
}

impl RecordingSink {
    pub fn last(&self, address: &str) -> Option<f32> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(a, _)| a == address)
            .map(|(_, v)| *v)
    }
}

impl ParamSink for RecordingSink {
    fn set_param_value(&self, address: &str, value: f32) {
        self.writes.borrow_mut().push((address.to_string(), value));
    }
}

/// Audio context whose transitions either apply on call or wait for
/// `complete()`; `Pending` is the op that was started.
pub struct FakeTransport {
    pub state: Cell<AudioState>,
    pub deferred: bool,
    pub started: RefCell<Vec<ToggleOp>>,
}

impl FakeTransport {
    pub fn immediate() -> Self {
        Self {
            state: Cell::new(AudioState::Suspended),
            deferred: false,
            started: RefCell::new(Vec::new()),
        }
    }

    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::immediate()
        }
    }

    pub fn complete(&self, op: ToggleOp) {
        self.state.set(op.target());
    }

    fn start(&self, op: ToggleOp) -> ToggleOp {
        self.started.borrow_mut().push(op);
        if !self.deferred {
            self.complete(op);
        }
        op
    }
}

impl AudioTransport for FakeTransport {
    type Pending = ToggleOp;

    fn state(&self) -> AudioState {
        self.state.get()
    }
    fn suspend(&self) -> ToggleOp {
        self.start(ToggleOp::Suspend)
    }
    fn resume(&self) -> ToggleOp {
        self.start(ToggleOp::Resume)
    }
}

/// Shared, ordered record of what the start-up path did.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub struct FakeButton {
    pub log: EventLog,
    pub enabled: Cell<bool>,
}

impl FakeButton {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            enabled: Cell::new(true),
        }
    }
}

impl ToggleControl for FakeButton {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        let event = if enabled { "enable" } else { "disable" };
        self.log.borrow_mut().push(event.to_string());
    }
}

/// DSP factory returning a `RecordingSink` voice, or nothing, or errors.
pub struct FakeFactory {
    pub log: EventLog,
    pub node_available: bool,
    pub connect_fails: bool,
    pub descriptors: Option<Vec<ParamDescriptor>>,
}

impl FakeFactory {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            node_available: true,
            connect_fails: false,
            descriptors: Some(Vec::new()),
        }
    }
}

impl DspFactory for FakeFactory {
    type Voice = RecordingSink;

    async fn create(&self, unit: &str, _voice_mode: u32) -> Result<Option<RecordingSink>, AudioError> {
        self.log.borrow_mut().push(format!("create {unit}"));
        Ok(self.node_available.then(RecordingSink::default))
    }

    fn connect(&self, _voice: &RecordingSink) -> Result<(), AudioError> {
        self.log.borrow_mut().push("connect".to_string());
        if self.connect_fails {
            return Err(AudioError::Context("connect: no destination".to_string()));
        }
        Ok(())
    }

    fn descriptors(&self, _voice: &RecordingSink) -> Result<Vec<ParamDescriptor>, AudioError> {
        self.descriptors
            .clone()
            .ok_or_else(|| AudioError::Descriptor("not an array".to_string()))
    }
}
