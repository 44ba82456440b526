pub mod error;
pub mod model;
pub mod scoring;
pub mod service;

pub use error::TasteDeciderError;
pub use model::{TasteCategory, TasteResult};
pub use service::{TasteEngine, TasteEngineApi};
