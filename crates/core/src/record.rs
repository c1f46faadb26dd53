use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ModelBase, Parameters, Variables};

/// Errors that can occur when saving or loading a [`Record`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{name}` is not finite and cannot be stored")]
    NonFinite { name: String },
}

/// The externally visible state of a model, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub parameters: Parameters,
    pub variables: Variables,
    pub solved: bool,
}

impl Record {
    /// Captures a model's parameters, variables, and solved flag.
    pub fn capture<M: ModelBase + ?Sized>(model: &M) -> Self {
        Self {
            parameters: model.parameters().clone(),
            variables: model.variables().clone(),
            solved: model.is_solved(),
        }
    }

    /// Writes the record as pretty-printed JSON.
    ///
    /// JSON has no representation for NaN or infinity, so every parameter and
    /// variable must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NonFinite`] naming the first non-finite entry, or
    /// an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        if let Some((name, _)) = self
            .parameters
            .iter()
            .chain(self.variables.iter())
            .find(|(_, value)| !value.is_finite())
        {
            return Err(StoreError::NonFinite {
                name: name.to_owned(),
            });
        }

        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "saved record");
        Ok(())
    }

    /// Reads a record written by [`save`](Record::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid record.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
