//! Decision entity, lifecycle transitions and input validation.

pub mod decision;
pub mod error;
pub mod id;
pub mod validate;

pub use decision::{
    Decision, DecisionData, DecisionOption, DecisionUpdate, Evaluation, EvaluationResult, Status,
};
pub use error::CoreError;
pub use validate::{validate_decision, validate_evaluation};
