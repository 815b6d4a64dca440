pub mod artifact;
pub mod cid;
pub mod config;
pub mod error;
pub mod fs;
pub mod importer;
pub mod output;
pub mod process;
pub mod record;
pub mod step;

pub use config::ImporterConfig;
pub use error::{ImportError, Result};
pub use importer::Importer;
pub use step::StepEnv;
