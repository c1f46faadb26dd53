//! Concrete models for the variant framework.
//!
//! - [`SumModel`] — publishes the sum of the parameters `a` through `e`

mod sum;

pub use sum::SumModel;
