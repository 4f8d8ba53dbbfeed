//! Loading YAML configuration files.
//!
//! A configuration file must contain exactly one YAML document whose root is
//! a mapping. Anchors and aliases are resolved by the parser; `<<` merge keys
//! are applied before the document is flattened.

use crate::env_set::EnvSet;
use crate::error::{ConvertError, Result};
use crate::flatten::{flatten, kind_of};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, instrument};

/// Parse YAML text into the root mapping of a configuration document.
///
/// `origin` is only used to label parse errors.
///
/// # Returns
///
/// * `Ok(Mapping)` - The document root
/// * `Err(ConvertError::Parse)` - Invalid YAML, or more than one document
/// * `Err(ConvertError::NotAMapping)` - The root is a scalar, a list, or empty
pub fn parse_document(src: &str, origin: &Path) -> Result<Mapping> {
    let parse_error = |source| ConvertError::Parse {
        path: origin.to_path_buf(),
        source,
    };

    let mut document: Value = serde_yaml::from_str(src).map_err(parse_error)?;
    document.apply_merge().map_err(parse_error)?;

    match document {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ConvertError::NotAMapping {
            found: kind_of(&other),
        }),
    }
}

/// Read, parse and flatten one configuration file.
#[instrument(level = "warn", skip_all, fields(file = %path.display()))]
pub fn load_file(path: &Path) -> Result<EnvSet> {
    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let env = parse_document(&content, path)
        .and_then(|mapping| flatten(&mapping, &[]))
        .map_err(|err| err.in_file(path))?;

    debug!(entries = env.len(), "flattened configuration file");
    Ok(env)
}

/// Load every file in order and merge the results; later files win.
///
/// The first failure aborts the whole run.
pub fn load_files<P: AsRef<Path>>(files: &[P]) -> Result<EnvSet> {
    let mut merged = EnvSet::new();
    for file in files {
        let file = file.as_ref();
        let env = load_file(file)?;
        for name in merged.merge(env) {
            debug!(name = %name, file = %file.display(), "overriding value from an earlier file");
        }
    }
    Ok(merged)
}
