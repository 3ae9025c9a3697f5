//! Populate configuration records from environment variables.
//!
//! A record is a struct of `String` fields. Each field reads the variable
//! named by its `#[field(env = "...")]` annotation, or its own identifier
//! when there is none.
//!
//! ```no_run
//! use envbind::EnvRecord;
//!
//! #[derive(Debug, EnvRecord)]
//! #[allow(non_snake_case)]
//! struct Vars {
//!     #[field(env = "APP_ENV")]
//!     environment: String,
//!     DB_NAME: String,
//! }
//!
//! // Preloads ./app.env, then exits with a report if anything is missing
//! let vars = Vars::load(&["./app.env"]);
//! println!("{}", vars.environment);
//! ```

pub mod docs;
pub mod error;
pub mod field;
pub mod loader;
pub mod source;

// Re-export main types
pub use error::{EnvError, LoadErrors};
pub use field::FieldSpec;
pub use loader::{load, load_from, load_or_exit};
pub use source::{EnvSource, ProcessEnv};

// Re-export macro
pub use envbind_macros::EnvRecord;

/// A record whose fields are populated from environment variables
///
/// Usually derived. A manual implementation lists its fields in `FIELDS` and
/// builds itself from values given in that same order.
pub trait EnvRecord: Sized {
    /// Every field in declaration order
    const FIELDS: &'static [FieldSpec];

    /// Build the record from one value per entry of [`Self::FIELDS`], in order
    fn from_values(values: Vec<String>) -> Self;

    /// Load from the environment, printing a report and exiting the process on missing variables
    fn load(sources: &[&str]) -> Self {
        loader::load_or_exit(sources)
    }

    /// Load from the environment, returning errors instead of exiting
    fn try_load(sources: &[&str]) -> Result<Self, LoadErrors> {
        loader::load(sources)
    }

    /// Load from an arbitrary source without reading dotenv files
    fn from_source(env: &impl EnvSource) -> Result<Self, LoadErrors> {
        loader::load_from(env)
    }
}
