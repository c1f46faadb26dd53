//! Runs a model through its lifecycle.
//!
//! [`run`] drives any [`ModelBase`] through `create`, `solve`, and `process`
//! in that order and stops at the first failure, reporting which [`Stage`]
//! failed and for which model type.
//!
//! [`Evaluator`] wraps a model factory so the whole lifecycle can be called
//! as a [`Model`] from [`Parameters`] to [`Variables`].

use std::{any::type_name, fmt};

use thiserror::Error;

use crate::{Model, ModelBase, ModelError, Parameters, Variables};

/// A lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    Solve,
    Process,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Solve => "solve",
            Self::Process => "process",
        };
        f.write_str(name)
    }
}

/// A lifecycle failure with the stage and model type that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("model `{model}` failed during {stage}: {source}")]
pub struct LifecycleError {
    /// The stage that failed.
    pub stage: Stage,

    /// Short type name of the failing model.
    pub model: &'static str,

    /// The underlying model error.
    #[source]
    pub source: ModelError,
}

/// Runs `create`, `solve`, and `process` on the model, in order.
///
/// # Errors
///
/// Returns a [`LifecycleError`] for the first stage that fails. Later stages
/// are not run.
pub fn run<M: ModelBase>(model: &mut M) -> Result<(), LifecycleError> {
    run_stage(model, Stage::Create, M::create)?;
    run_stage(model, Stage::Solve, M::solve)?;
    run_stage(model, Stage::Process, M::process)
}

fn run_stage<M, F>(model: &mut M, stage: Stage, op: F) -> Result<(), LifecycleError>
where
    M: ModelBase,
    F: FnOnce(&mut M) -> Result<(), ModelError>,
{
    let name = short_type_name::<M>();
    tracing::debug!(model = name, %stage, "running stage");

    op(model).map_err(|source| {
        tracing::warn!(model = name, %stage, error = %source, "stage failed");
        LifecycleError {
            stage,
            model: name,
            source,
        }
    })
}

/// Returns the type's own name without module path or generic arguments.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Calls a lifecycle model as a function of its parameters.
///
/// Each call builds a fresh model from the factory, runs its full lifecycle,
/// and returns the published variables.
///
/// ```
/// use variant_core::{Evaluator, Model, ModelBase, ModelError, Parameters, Variables};
///
/// struct Echo {
///     parameters: Parameters,
///     variables: Variables,
/// }
///
/// impl ModelBase for Echo {
///     fn parameters(&self) -> &Parameters { &self.parameters }
///     fn variables(&self) -> &Variables { &self.variables }
///     fn variables_mut(&mut self) -> &mut Variables { &mut self.variables }
///     fn is_solved(&self) -> bool { true }
///     fn create(&mut self) -> Result<(), ModelError> { Ok(()) }
///     fn solve(&mut self) -> Result<(), ModelError> { Ok(()) }
///     fn process(&mut self) -> Result<(), ModelError> {
///         let x = self.parameters.get("x")?;
///         self.variables.set_functional(x);
///         Ok(())
///     }
/// }
///
/// let echo = Evaluator::new(|parameters| Echo { parameters, variables: Variables::new() });
/// let variables = echo.call(&Parameters::from([("x", 3.0)])).unwrap();
/// assert_eq!(variables.functional(), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<F> {
    factory: F,
}

impl<F> Evaluator<F> {
    /// Creates an evaluator from a model factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<M, F> Model for Evaluator<F>
where
    M: ModelBase,
    F: Fn(Parameters) -> M,
{
    type Input = Parameters;
    type Output = Variables;
    type Error = LifecycleError;

    fn call(&self, input: &Parameters) -> Result<Variables, LifecycleError> {
        let mut model = (self.factory)(input.clone());
        run(&mut model)?;
        Ok(model.variables().clone())
    }
}
