//! Rendering module
//!
//! Builds triangle lists from the simulation state. Presenting them (window,
//! GPU surface) is the platform's job.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::Frame;
pub use vertex::Vertex;
