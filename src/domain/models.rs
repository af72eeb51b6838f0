use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

/// Failure that still carries the command's payload, e.g. a rejected submission.
#[derive(Serialize)]
pub struct JsonRejected<T: Serialize> {
    pub ok: bool,
    pub error: ErrorBody,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Resolved value of a single field.
///
/// Serialized untagged so that summaries and drafts read like plain JSON
/// (`"Yes"`, `[..]`, `10000`, `2.5`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Choice(String),
    Choices(Vec<String>),
    Integer(u64),
    Decimal(f64),
    Text(String),
    Files(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Choice {
        options: Vec<String>,
    },
    MultiChoice {
        options: Vec<String>,
    },
    Amount {
        precision: Precision,
        unit: String,
    },
    Text,
    Files {
        accept: Vec<String>,
        multiple: bool,
    },
}

/// Visibility predicate. Single level: `field` is never conditional itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Visibility {
    Always,
    When { field: String, equals: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub visible_when: Visibility,
    /// Value used while the predicate is false. Falls back to the initial value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_default: Option<FieldValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Sum the section's integer amounts into a summary total.
    pub aggregate: bool,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Blocking: amount must be positive whenever its field is visible.
    PositiveWhenActive { field: String, message: String },
    /// Warning: amount is zero.
    WarnWhenZero { field: String, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub title: String,
    pub sections: Vec<Section>,
    pub rules: Vec<Rule>,
}

/// Collaborator-side raw values as read from a draft file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

/// Every schema field resolved to a value; hidden fields carry their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Submission {
    pub confirmed: bool,
    pub values: BTreeMap<String, FieldValue>,
    pub hidden: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    Unsubmitted,
    Validating,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    pub id: String,
    pub label: String,
    pub value: FieldValue,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    pub id: String,
    pub title: String,
    pub entries: Vec<SummaryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub sections: Vec<SummarySection>,
    pub values: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Accepted {
        reference: String,
        warnings: Vec<Issue>,
        summary: Summary,
    },
    Rejected {
        result: ValidationResult,
    },
}

#[derive(Serialize)]
pub struct SummaryReport {
    pub summary: Summary,
    pub lines: Vec<String>,
}

#[derive(Serialize)]
pub struct VisibilityItem {
    pub section: String,
    pub field: String,
    pub visible: bool,
}

#[derive(Serialize)]
pub struct SubmitReport {
    pub state: SubmitState,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Frozen snapshot; present only once accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
}
