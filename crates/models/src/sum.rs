use variant_core::{ModelBase, ModelError, Parameters, Variables};

/// The five terms copied from parameters by `create`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Terms {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
}

impl Terms {
    fn read(parameters: &Parameters) -> Result<Self, ModelError> {
        Ok(Self {
            a: parameters.get("a")?,
            b: parameters.get("b")?,
            c: parameters.get("c")?,
            d: parameters.get("d")?,
            e: parameters.get("e")?,
        })
    }

    fn sum(&self) -> f64 {
        self.a + self.b + self.c + self.d + self.e
    }
}

/// A model whose functional is the sum of the parameters `a` through `e`.
///
/// After a full lifecycle the sum is published twice, under [`SumModel::OUTPUT`]
/// and under [`Variables::FUNCTIONAL`]; both always hold the same value.
#[derive(Debug, Clone)]
pub struct SumModel {
    parameters: Parameters,
    variables: Variables,
    terms: Option<Terms>,
    solved: bool,
}

impl SumModel {
    /// Name of the model-specific output variable.
    pub const OUTPUT: &'static str = "Func1";

    /// Creates an un-created, unsolved model over the given parameters.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            variables: Variables::new(),
            terms: None,
            solved: false,
        }
    }
}

impl ModelBase for SumModel {
    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn variables(&self) -> &Variables {
        &self.variables
    }

    fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    /// Copies `a` through `e` into the model.
    ///
    /// Nothing is copied unless all five are present.
    fn create(&mut self) -> Result<(), ModelError> {
        self.terms = Some(Terms::read(&self.parameters)?);
        Ok(())
    }

    fn solve(&mut self) -> Result<(), ModelError> {
        self.solved = true;
        Ok(())
    }

    fn process(&mut self) -> Result<(), ModelError> {
        let terms = self.terms.ok_or(ModelError::NotCreated)?;

        let sum = terms.sum();
        tracing::debug!(sum, "publishing sum");

        self.variables.insert(Self::OUTPUT, sum);
        let func1 = self.variables.get(Self::OUTPUT)?;
        self.variables.set_functional(func1);
        Ok(())
    }
}
