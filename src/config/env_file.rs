//! `.env` file loading.
//!
//! Seeds the process environment from a `KEY=VALUE` file before
//! [`Config::load`](super::Config::load) runs. Variables already present in
//! the environment are left untouched.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Load an env file into the process environment.
///
/// With `None`, searches for `.env` in the current directory and its
/// ancestors; not finding one is fine and yields `Ok(None)`. With an explicit
/// path, the file must exist.
///
/// Mutates the process environment: call before spawning threads.
///
/// # Errors
///
/// Returns [`Error::EnvFile`](crate::error::Error::EnvFile) if the file cannot
/// be read or contains a malformed line.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}
