//! HTTP handlers for the FertiSense backend

pub mod crops;
pub mod health;
pub mod readings;
pub mod recommendation;

pub use crops::*;
pub use health::*;
pub use readings::*;
pub use recommendation::*;
