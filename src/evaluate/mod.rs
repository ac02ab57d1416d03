//! Criterion evaluation: verdict types, the evaluator, and per-criterion
//! roll-ups.

mod rollup;
mod runner;
mod verdict;

pub use rollup::{rollup, CriterionResult};
pub use runner::Evaluator;
pub use verdict::{Outcome, SkipKind, Status, Verdict, VerdictScope};
