//! Domain models for the FertiSense platform

pub mod crop;
pub mod recommendation;
pub mod sensor;

pub use crop::*;
pub use recommendation::*;
pub use sensor::*;
