pub mod button;
pub mod pointer;

pub use button::*;
pub use pointer::*;
