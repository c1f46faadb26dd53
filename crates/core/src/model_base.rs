use thiserror::Error;

use crate::{Parameters, Variables};

/// Errors raised by a model's lifecycle operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("missing parameter `{name}`")]
    MissingParameter { name: String },

    #[error("model has not been created")]
    NotCreated,

    #[error("missing variable `{name}`")]
    MissingVariable { name: String },
}

/// The lifecycle shared by every parameterized model.
///
/// A model is constructed with its [`Parameters`] already populated, then
/// driven through three stages in order:
///
/// 1. [`create`](ModelBase::create) reads the parameters it needs into its
///    own state.
/// 2. [`solve`](ModelBase::solve) does the model's work and marks it solved.
/// 3. [`process`](ModelBase::process) publishes results into
///    [`Variables`].
///
/// `solve` does not gate `process`, but `process` may depend on state set up
/// by `create` and must fail with [`ModelError::NotCreated`] when it is
/// missing. Use [`lifecycle::run`](crate::lifecycle::run) to run all three.
pub trait ModelBase {
    /// Returns the read-only input parameters.
    fn parameters(&self) -> &Parameters;

    /// Returns the published output variables.
    fn variables(&self) -> &Variables;

    /// Returns the output variables for writing.
    fn variables_mut(&mut self) -> &mut Variables;

    /// Returns `true` once [`solve`](ModelBase::solve) has run.
    fn is_solved(&self) -> bool;

    /// Copies the required parameters into model state.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingParameter`] if a required parameter is absent.
    fn create(&mut self) -> Result<(), ModelError>;

    /// Solves the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be solved.
    fn solve(&mut self) -> Result<(), ModelError>;

    /// Writes the model's results into its variables.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotCreated`] if `create` has not run.
    fn process(&mut self) -> Result<(), ModelError>;

    /// Returns the model's functional, if `process` has published one.
    fn functional(&self) -> Option<f64> {
        self.variables().functional()
    }
}
