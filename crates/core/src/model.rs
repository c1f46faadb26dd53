/// A deterministic callable from a typed input to a typed output.
///
/// [`Evaluator`](crate::Evaluator) implements this for lifecycle models,
/// mapping [`Parameters`](crate::Parameters) to
/// [`Variables`](crate::Variables). Because a call always produces the same
/// result for the same input, batch evaluation can treat each call on its own.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// An input paired with the output a model produced for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Pairs an input with the output it produced.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
