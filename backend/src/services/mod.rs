//! Business logic services for the FertiSense backend

pub mod catalog;
pub mod recommendation;

pub use catalog::CatalogService;
pub use recommendation::RecommendationService;
