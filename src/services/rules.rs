use crate::domain::constants::CONFIRMATION_REQUIRED;
use crate::domain::models::{FieldValue, Issue, Rule, Schema, Submission, ValidationResult};

fn is_zero(value: Option<&FieldValue>) -> bool {
    match value {
        Some(FieldValue::Integer(n)) => *n == 0,
        Some(FieldValue::Decimal(x)) => *x == 0.0,
        _ => false,
    }
}

/// Runs the schema's rule table over a resolved submission.
///
/// A missing confirmation is reported alone; nothing else is evaluated.
pub fn validate(schema: &Schema, submission: &Submission) -> ValidationResult {
    let mut result = ValidationResult::default();
    if !submission.confirmed {
        result.errors.push(Issue {
            field: None,
            message: CONFIRMATION_REQUIRED.to_string(),
        });
        return result;
    }

    for rule in &schema.rules {
        match rule {
            Rule::PositiveWhenActive { field, message } => {
                let active = !submission.hidden.contains(field);
                if active && is_zero(submission.values.get(field)) {
                    result.errors.push(Issue {
                        field: Some(field.clone()),
                        message: message.clone(),
                    });
                }
            }
            Rule::WarnWhenZero { field, message } => {
                if is_zero(submission.values.get(field)) {
                    result.warnings.push(Issue {
                        field: Some(field.clone()),
                        message: message.clone(),
                    });
                }
            }
        }
    }
    result
}

pub fn is_blocked(result: &ValidationResult) -> bool {
    !result.errors.is_empty()
}
