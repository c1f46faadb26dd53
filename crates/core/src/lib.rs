//! Core traits and types for parameterized model studies.
//!
//! A model receives read-only named [`Parameters`], runs its lifecycle
//! (`create`, `solve`, `process`), and publishes named [`Variables`]:
//!
//! - [`ModelBase`] — the lifecycle capability set shared by all models
//! - [`lifecycle`] — runs the stages in order and reports the failing stage
//! - [`Model`] — a deterministic callable, implemented by [`Evaluator`] so
//!   lifecycle models can be driven like any other function of their inputs
//! - [`Population`] — evaluates a batch of parameter sets
//! - [`Record`] — persists a model's visible state as JSON

pub mod lifecycle;

mod model;
mod model_base;
mod parameters;
mod population;
mod record;
mod variables;

pub use lifecycle::{Evaluator, LifecycleError, Stage};
pub use model::{Model, Snapshot};
pub use model_base::{ModelBase, ModelError};
pub use parameters::{ConfigError, Parameters};
pub use population::{Candidate, Failure, Population, PopulationError};
pub use record::{Record, StoreError};
pub use variables::Variables;
