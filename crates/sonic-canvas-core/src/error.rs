use crate::shader::ShaderStage;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ShaderError {
    #[error("could not allocate a {0} shader object")]
    CreateShader(ShaderStage),
    #[error("an error occurred compiling the {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("could not allocate a program object")]
    CreateProgram,
    #[error("unable to initialize the shader program: {log}")]
    Link { log: String },
    #[error("could not allocate a vertex buffer")]
    CreateBuffer,
    #[error("vertex attribute `{0}` is not active in the linked program")]
    MissingAttribute(&'static str),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("DSP unit `{unit}` not compiled or not found")]
    DspUnavailable { unit: String },
    #[error("audio context error: {0}")]
    Context(String),
    #[error("could not read parameter descriptors: {0}")]
    Descriptor(String),
}
