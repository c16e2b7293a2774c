//! Loading the desired property set from CLI inputs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use props_core::PropertySet;

use crate::error::{CliError, Result};

/// Builds the desired set from an optional properties file plus `--set`
/// pairs. The pairs are applied last, so they override file entries.
pub fn load_desired(file: Option<&Path>, sets: &[String]) -> Result<PropertySet> {
    let mut desired = PropertySet::new();

    if let Some(path) = file {
        for (key, value) in read_properties_file(path)? {
            desired.insert(key, value)?;
        }
    }

    for pair in sets {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            CliError::user(format!("--set '{}' is not of the form KEY=VALUE", pair))
        })?;
        desired.insert(key, value)?;
    }

    if desired.is_empty() {
        return Err(CliError::user(
            "no desired properties given; use --set or --properties",
        ));
    }

    Ok(desired)
}

/// Reads a flat string-to-string map from a TOML or JSON file, detected
/// by extension.
fn read_properties_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::user(format!(
            "cannot read properties file {}: {}",
            path.display(),
            e
        ))
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let map: BTreeMap<String, String> = match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            CliError::user(format!(
                "failed to parse TOML properties at {}: {}",
                path.display(),
                e
            ))
        })?,
        "json" => serde_json::from_str(&content).map_err(|e| {
            CliError::user(format!(
                "failed to parse JSON properties at {}: {}",
                path.display(),
                e
            ))
        })?,
        other => {
            return Err(CliError::user(format!(
                "unsupported properties file format '{}' for {} (expected .toml or .json)",
                other,
                path.display()
            )));
        }
    };

    Ok(map.into_iter().collect())
}
