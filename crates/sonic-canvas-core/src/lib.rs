pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod init;
pub mod mapping;
pub mod params;
pub mod pointer;
pub mod render_loop;
pub mod shader;
pub mod surface;
pub mod toggle;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use init::*;
pub use mapping::*;
pub use params::*;
pub use pointer::*;
pub use render_loop::*;
pub use shader::*;
pub use surface::*;
pub use toggle::*;
