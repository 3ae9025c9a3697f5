use colored::Colorize;
use std::path::PathBuf;
use thiserror::Error;

/// Header written before the diagnostic lines of a failed load
pub const REPORT_HEADER: &str = "Errors loading environment variables:";

/// Final line written before the process exits on a failed load
pub const ABORT_MESSAGE: &str = "Aborting due to missing env vars";

/// A single problem found while loading a record
#[derive(Debug, Error)]
pub enum EnvError {
    /// The resolved key is unset or empty
    #[error("has no `{key}` environment variable defined to populate into `{field}` instance field")]
    MissingVariable { key: String, field: String },

    /// A dotenv source could not be read or parsed
    #[error("failed to load dotenv source `{}`: {source}", .path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl EnvError {
    pub fn missing(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingVariable {
            key: key.into(),
            field: field.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingVariable { .. })
    }
}

/// Every error collected during one load, in the order it was found
#[derive(Debug, Error)]
#[error("{} error(s) loading environment variables{}", .errors.len(), summary(.errors))]
pub struct LoadErrors {
    errors: Vec<EnvError>,
}

impl LoadErrors {
    pub(crate) fn new(errors: Vec<EnvError>) -> Self {
        Self { errors }
    }

    // never empty: only built from a failed load
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvError> {
        self.errors.iter()
    }

    /// Keys of every missing variable
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter_map(|e| match e {
            EnvError::MissingVariable { key, .. } => Some(key.as_str()),
            EnvError::Dotenv { .. } => None,
        })
    }

    /// The dotenv failure that was surfaced alongside missing variables, if any
    pub fn dotenv_error(&self) -> Option<&EnvError> {
        self.errors.iter().find(|e| !e.is_missing())
    }

    /// Render the header and one ` - ` line per error
    pub fn report(&self) -> String {
        let mut lines = Vec::with_capacity(self.errors.len() + 1);
        lines.push(REPORT_HEADER.bold().to_string());
        for error in &self.errors {
            lines.push(format!(" {} {}", "-".red().bold(), error));
        }
        lines.join("\n")
    }
}

fn summary(errors: &[EnvError]) -> String {
    errors.iter().map(|e| format!("; {}", e)).collect()
}

impl IntoIterator for LoadErrors {
    type Item = EnvError;
    type IntoIter = std::vec::IntoIter<EnvError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a LoadErrors {
    type Item = &'a EnvError;
    type IntoIter = std::slice::Iter<'a, EnvError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
