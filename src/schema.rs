use crate::domain::models::{Field, FieldKind, FieldValue, Precision, Rule, Schema, Visibility};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field {field} expects {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    #[error("field {0} does not accept negative amounts")]
    NegativeAmount(String),
    #[error("field {0} accepts whole numbers only")]
    FractionalAmount(String),
    #[error("field {0} is out of range for a whole-number amount")]
    AmountOutOfRange(String),
    #[error("field {field} has no option {option:?}")]
    InvalidOption { field: String, option: String },
    #[error("field {field} does not accept file {file:?} (allowed: {allowed})")]
    DisallowedFileType {
        field: String,
        file: String,
        allowed: String,
    },
    #[error("field {0} accepts a single file")]
    TooManyFiles(String),
    #[error("duplicate field id: {0}")]
    DuplicateField(String),
    #[error("field {field} is gated on unknown field {gate}")]
    UnknownGate { field: String, gate: String },
    #[error("field {field} is gated on {gate}, which is itself conditional")]
    ChainedGate { field: String, gate: String },
    #[error("gate {gate} has no option {sentinel:?}")]
    InvalidSentinel { gate: String, sentinel: String },
    #[error("rule references {0}, which is not an amount field")]
    InvalidRule(String),
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::UnknownField(_) => "UNKNOWN_FIELD",
            FormError::TypeMismatch { .. }
            | FormError::NegativeAmount(_)
            | FormError::FractionalAmount(_)
            | FormError::AmountOutOfRange(_)
            | FormError::InvalidOption { .. }
            | FormError::DisallowedFileType { .. }
            | FormError::TooManyFiles(_) => "INVALID_VALUE",
            FormError::DuplicateField(_)
            | FormError::UnknownGate { .. }
            | FormError::ChainedGate { .. }
            | FormError::InvalidSentinel { .. }
            | FormError::InvalidRule(_) => "SCHEMA",
        }
    }
}

pub fn fields(schema: &Schema) -> impl Iterator<Item = &Field> {
    schema.sections.iter().flat_map(|s| s.fields.iter())
}

pub fn field<'a>(schema: &'a Schema, id: &str) -> Result<&'a Field, FormError> {
    fields(schema)
        .find(|f| f.id == id)
        .ok_or_else(|| FormError::UnknownField(id.to_string()))
}

/// Value a visible field takes before the collaborator supplies one.
pub fn initial_value(field: &Field) -> FieldValue {
    match &field.kind {
        FieldKind::Choice { options } => {
            FieldValue::Choice(options.first().cloned().unwrap_or_default())
        }
        FieldKind::MultiChoice { .. } => FieldValue::Choices(vec![]),
        FieldKind::Amount {
            precision: Precision::Integer,
            ..
        } => FieldValue::Integer(0),
        FieldKind::Amount {
            precision: Precision::Decimal,
            ..
        } => FieldValue::Decimal(0.0),
        FieldKind::Text => FieldValue::Text(String::new()),
        FieldKind::Files { .. } => FieldValue::Files(vec![]),
    }
}

/// Value a field takes while its visibility predicate is false.
pub fn hidden_value(field: &Field) -> FieldValue {
    field
        .hidden_default
        .clone()
        .unwrap_or_else(|| initial_value(field))
}

pub fn check(schema: &Schema) -> Result<(), FormError> {
    let mut seen = HashSet::new();
    for f in fields(schema) {
        if !seen.insert(f.id.as_str()) {
            return Err(FormError::DuplicateField(f.id.clone()));
        }
    }

    for f in fields(schema) {
        let Visibility::When {
            field: gate_id,
            equals,
        } = &f.visible_when
        else {
            continue;
        };
        let gate = field(schema, gate_id).map_err(|_| FormError::UnknownGate {
            field: f.id.clone(),
            gate: gate_id.clone(),
        })?;
        if gate.visible_when != Visibility::Always {
            return Err(FormError::ChainedGate {
                field: f.id.clone(),
                gate: gate_id.clone(),
            });
        }
        let offers_sentinel = match &gate.kind {
            FieldKind::Choice { options } => options.iter().any(|o| o == equals),
            _ => false,
        };
        if !offers_sentinel {
            return Err(FormError::InvalidSentinel {
                gate: gate_id.clone(),
                sentinel: equals.clone(),
            });
        }
    }

    for rule in &schema.rules {
        let id = match rule {
            Rule::PositiveWhenActive { field, .. } | Rule::WarnWhenZero { field, .. } => field,
        };
        let target = field(schema, id).map_err(|_| FormError::InvalidRule(id.clone()))?;
        if !matches!(target.kind, FieldKind::Amount { .. }) {
            return Err(FormError::InvalidRule(id.clone()));
        }
    }
    Ok(())
}
