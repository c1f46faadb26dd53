use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ModelError;

/// Named numeric inputs supplied to a model before it is created.
///
/// Parameters are read-only once built. They can be collected from
/// `(name, value)` pairs or loaded from a flat TOML or JSON table:
///
/// ```
/// use variant_core::Parameters;
///
/// let parameters = Parameters::from_toml_str("a = 1.0\nb = 2").unwrap();
/// assert_eq!(parameters.get("b").unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, f64>);

/// Errors that can occur when loading parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML parameters: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported parameter file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingParameter`] if no parameter has that name.
    pub fn get(&self, name: &str) -> Result<f64, ModelError> {
        self.value(name).ok_or_else(|| ModelError::MissingParameter {
            name: name.to_owned(),
        })
    }

    /// Returns the value of a parameter, or `None` if it is absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Parses parameters from a flat TOML table of numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a table of numbers.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses parameters from a flat JSON object of numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not an object of numbers.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads parameters from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read, or its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());

        let parameters = match extension {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::debug!(path = %path.display(), count = parameters.len(), "loaded parameters");
        Ok(parameters)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Parameters {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
