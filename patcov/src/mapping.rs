//! The portable secret-mapping document: types and loader.

mod loader;
mod model;

pub use loader::{load_mapping, MappingError};
pub use model::{SecretMapping, ValuePattern};
