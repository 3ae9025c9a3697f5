//! Loading records from the environment.
//!
//! [`load`] preloads dotenv sources into the process environment, then
//! resolves every field of the record against it. A failed preload is only
//! reported when at least one variable is also missing; on its own it is
//! logged at debug level and discarded.
//!
//! The process environment is shared and unsynchronised. Concurrent calls to
//! [`load`], or to `std::env::set_var` from other threads, race with each
//! other. Use [`load_from`] with an owned map when that matters.

use crate::error::{EnvError, LoadErrors, ABORT_MESSAGE};
use crate::source::{EnvSource, ProcessEnv};
use crate::EnvRecord;
use colored::Colorize;
use std::path::Path;
use std::process;

/// Dotenv file tried when no sources are given
pub const DEFAULT_DOTENV: &str = ".env";

/// Merge dotenv sources into the process environment, in order
///
/// Stops at the first source that fails. Variables already set are never
/// overwritten. With no sources, [`DEFAULT_DOTENV`] in the current directory
/// is tried.
pub fn preload(sources: &[&str]) -> Result<(), EnvError> {
    if sources.is_empty() {
        return preload_file(Path::new(DEFAULT_DOTENV));
    }
    for source in sources {
        preload_file(Path::new(source))?;
    }
    Ok(())
}

fn preload_file(path: &Path) -> Result<(), EnvError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded dotenv source");
            Ok(())
        }
        Err(source) => Err(EnvError::Dotenv {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read every field of `T` in declaration order
///
/// Always yields one value per field; missing ones are empty and have a
/// matching entry in the error list.
fn resolve<T: EnvRecord>(env: &impl EnvSource) -> (Vec<String>, Vec<EnvError>) {
    let mut values = Vec::with_capacity(T::FIELDS.len());
    let mut errors = Vec::new();

    for spec in T::FIELDS {
        let value = env.var(spec.key).unwrap_or_default();
        if value.is_empty() {
            tracing::warn!(key = spec.key, field = spec.field, "environment variable is not set");
            errors.push(EnvError::missing(spec.key, spec.field));
        } else {
            tracing::debug!(key = spec.key, field = spec.field, "resolved environment variable");
        }
        values.push(value);
    }

    (values, errors)
}

/// Populate `T` from an arbitrary source, without touching dotenv files
pub fn load_from<T: EnvRecord>(env: &impl EnvSource) -> Result<T, LoadErrors> {
    let (values, errors) = resolve::<T>(env);
    if errors.is_empty() {
        Ok(T::from_values(values))
    } else {
        Err(LoadErrors::new(errors))
    }
}

/// Preload `sources` and populate `T` from the process environment
///
/// Every missing variable is collected before returning. The preload error, if
/// any, is appended after them.
pub fn load<T: EnvRecord>(sources: &[&str]) -> Result<T, LoadErrors> {
    let preloaded = preload(sources);
    let (values, mut errors) = resolve::<T>(&ProcessEnv);

    if errors.is_empty() {
        if let Err(e) = preloaded {
            tracing::debug!(error = %e, "dotenv preload failed, all variables resolved anyway");
        }
        return Ok(T::from_values(values));
    }

    if let Err(e) = preloaded {
        errors.push(e);
    }
    Err(LoadErrors::new(errors))
}

/// Like [`load`], but prints the report to stderr and exits with status 1 on failure
pub fn load_or_exit<T: EnvRecord>(sources: &[&str]) -> T {
    match load(sources) {
        Ok(record) => record,
        Err(errors) => exit_with_report(&errors),
    }
}

/// Print the report for `errors` followed by the abort line, then exit
pub fn exit_with_report(errors: &LoadErrors) -> ! {
    eprintln!("{}", errors.report());
    eprintln!("{}", ABORT_MESSAGE.red().bold());
    process::exit(1)
}
