use std::error::Error as StdError;

use thiserror::Error;

use crate::{Model, Parameters, Snapshot, Variables};

/// Errors recorded for a parameter set that could not be evaluated.
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model output has no `_functional` variable")]
    MissingFunctional,

    #[error("model published a NaN functional")]
    NanFunctional,
}

/// A successfully evaluated parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The functional published by the model.
    pub functional: f64,

    /// The parameters and the variables they produced.
    pub snapshot: Snapshot<Parameters, Variables>,
}

/// A parameter set that could not be evaluated.
#[derive(Debug)]
pub struct Failure {
    /// Position of the parameter set in the evaluated batch.
    pub index: usize,

    pub error: PopulationError,
}

/// The outcome of evaluating a batch of parameter sets.
///
/// Evaluation never aborts early: each parameter set becomes either a
/// [`Candidate`] or a [`Failure`]. Candidates never carry a NaN functional.
#[derive(Debug, Default)]
pub struct Population {
    candidates: Vec<Candidate>,
    failures: Vec<Failure>,
}

impl Population {
    /// Evaluates every parameter set with the given model.
    pub fn evaluate<M, I>(model: &M, sets: I) -> Self
    where
        M: Model<Input = Parameters, Output = Variables>,
        I: IntoIterator<Item = Parameters>,
    {
        let mut population = Self::default();

        for (index, parameters) in sets.into_iter().enumerate() {
            match evaluate_one(model, parameters) {
                Ok(candidate) => population.candidates.push(candidate),
                Err(error) => {
                    tracing::warn!(index, %error, "parameter set failed");
                    population.failures.push(Failure { index, error });
                }
            }
        }

        tracing::info!(
            candidates = population.candidates.len(),
            failures = population.failures.len(),
            "evaluated population"
        );
        population
    }

    /// Returns the successfully evaluated candidates, in input order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the failed parameter sets, in input order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the candidate with the smallest functional.
    ///
    /// Ties go to the earliest candidate. Returns `None` if nothing evaluated
    /// successfully.
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .min_by(|a, b| a.functional.total_cmp(&b.functional))
    }
}

fn evaluate_one<M>(model: &M, parameters: Parameters) -> Result<Candidate, PopulationError>
where
    M: Model<Input = Parameters, Output = Variables>,
{
    let variables = model
        .call(&parameters)
        .map_err(|e| PopulationError::Model(Box::new(e)))?;
    let functional = variables
        .functional()
        .ok_or(PopulationError::MissingFunctional)?;
    if functional.is_nan() {
        return Err(PopulationError::NanFunctional);
    }

    Ok(Candidate {
        functional,
        snapshot: Snapshot::new(parameters, variables),
    })
}
