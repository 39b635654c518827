//! Shared types and domain logic for the FertiSense platform
//!
//! This crate contains the pure core of the system: the crop catalog
//! lookup, the dose adjustment engine, and the tolerant numeric
//! normalization used wherever external values enter the core. It has
//! no I/O and no async; the backend crate wires it to HTTP and files.

pub mod catalog;
pub mod models;
pub mod numeric;
pub mod types;

pub use catalog::*;
pub use models::*;
pub use numeric::*;
pub use types::*;
