pub mod adapter;
pub mod config;
pub mod engines;
pub mod error;
pub mod import_data;
pub mod response;
pub mod test_data;
pub mod transform;

pub use adapter::{MorphologyAdapter, TuftsAdapter};
pub use config::AdapterConfig;
pub use error::{ConfigError, Error};
pub use import_data::{FeatureImporter, ImportData};
pub use test_data::WordTestData;
pub use transform::transform;
