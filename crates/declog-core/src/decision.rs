use crate::error::CoreError;
use crate::id::{generate_id, today};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a decision. Only ever advances
/// `Pending -> Executed -> Evaluated`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pending,
    Executed,
    Evaluated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Executed => "EXECUTED",
            Self::Evaluated => "EVALUATED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "EXECUTED" => Ok(Self::Executed),
            "EVALUATED" => Ok(Self::Evaluated),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// Outcome assessment of an executed decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationResult {
    Positive,
    Negative,
    Neutral,
}

impl EvaluationResult {
    pub const ALL: [EvaluationResult; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(Self::Positive),
            "NEGATIVE" => Ok(Self::Negative),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(CoreError::InvalidResult(s.to_string())),
        }
    }
}

/// A named alternative considered for a decision.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl DecisionOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub learnings: String,
    pub evaluated_at: String,
}

/// Loosely-typed decision record: user input before construction, or a
/// persisted record read back from storage. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DecisionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DecisionOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}

/// Partial edit of a decision. `None` keeps the current value.
///
/// `status`, `evaluation` and the id are not editable here; the lifecycle
/// fields only change through the transition methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionUpdate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub context: Option<String>,
    pub options: Option<Vec<DecisionOption>>,
    pub chosen: Option<String>,
}

impl DecisionUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.context.is_none()
            && self.options.is_none()
            && self.chosen.is_none()
    }
}

/// A journaled decision.
///
/// Serializes to exactly the persisted record shape; `evaluation` is
/// written as `null` until the decision is evaluated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Decision {
    id: String,
    title: String,
    date: String,
    context: String,
    options: Vec<DecisionOption>,
    chosen: String,
    status: Status,
    evaluation: Option<Evaluation>,
}

/// Empty strings count as absent, matching how records are filled in.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Decision {
    /// Build a decision from a (possibly partial) record, filling defaults:
    /// a fresh id, today's date, empty text/lists, `Pending`, no evaluation.
    pub fn from_data(data: DecisionData) -> Self {
        Self {
            id: non_empty(data.id).unwrap_or_else(generate_id),
            title: data.title.unwrap_or_default(),
            date: non_empty(data.date).unwrap_or_else(today),
            context: data.context.unwrap_or_default(),
            options: data.options.unwrap_or_default(),
            chosen: data.chosen.unwrap_or_default(),
            status: data.status.unwrap_or_default(),
            evaluation: data.evaluation,
        }
    }

    /// Plain record form with every field populated.
    pub fn to_data(&self) -> DecisionData {
        DecisionData {
            id: Some(self.id.clone()),
            title: Some(self.title.clone()),
            date: Some(self.date.clone()),
            context: Some(self.context.clone()),
            options: Some(self.options.clone()),
            chosen: Some(self.chosen.clone()),
            status: Some(self.status),
            evaluation: self.evaluation.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn chosen(&self) -> &str {
        &self.chosen
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn can_execute(&self) -> bool {
        self.status == Status::Pending
    }

    pub fn can_evaluate(&self) -> bool {
        self.status == Status::Executed
    }

    /// `Pending -> Executed`. Leaves the decision untouched on failure.
    pub fn mark_as_executed(&mut self) -> Result<(), CoreError> {
        if !self.can_execute() {
            return Err(CoreError::InvalidTransition {
                action: "executed",
                status: self.status,
            });
        }
        self.status = Status::Executed;
        Ok(())
    }

    /// `Executed -> Evaluated`, stamping the evaluation with today's date.
    pub fn evaluate(
        &mut self,
        result: EvaluationResult,
        learnings: impl Into<String>,
    ) -> Result<(), CoreError> {
        if !self.can_evaluate() {
            return Err(CoreError::InvalidTransition {
                action: "evaluated",
                status: self.status,
            });
        }
        self.evaluation = Some(Evaluation {
            result,
            learnings: learnings.into(),
            evaluated_at: today(),
        });
        self.status = Status::Evaluated;
        Ok(())
    }

    /// The record this decision would have after `update`, for validation
    /// before anything is applied.
    pub fn merged(&self, update: &DecisionUpdate) -> DecisionData {
        let mut data = self.to_data();
        if let Some(title) = &update.title {
            data.title = Some(title.clone());
        }
        if let Some(date) = &update.date {
            data.date = Some(date.clone());
        }
        if let Some(context) = &update.context {
            data.context = Some(context.clone());
        }
        if let Some(options) = &update.options {
            data.options = Some(options.clone());
        }
        if let Some(chosen) = &update.chosen {
            data.chosen = Some(chosen.clone());
        }
        data
    }

    /// Overwrite every field set in `update`; the rest are retained.
    pub fn apply(&mut self, update: DecisionUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(context) = update.context {
            self.context = context;
        }
        if let Some(options) = update.options {
            self.options = options;
        }
        if let Some(chosen) = update.chosen {
            self.chosen = chosen;
        }
    }
}
