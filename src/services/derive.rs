use crate::domain::models::{Draft, Field, FieldKind, FieldValue, Precision, Schema, Submission};
use crate::schema::{self, hidden_value, initial_value, FormError};
use crate::services::visibility::is_visible;
use serde_json::Value;
use std::collections::BTreeMap;

fn mismatch(field: &Field, expected: &'static str) -> FormError {
    FormError::TypeMismatch {
        field: field.id.clone(),
        expected,
    }
}

fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn normalize_decimal(field: &Field, precision: Precision, n: f64) -> Result<FieldValue, FormError> {
    if !n.is_finite() {
        return Err(mismatch(field, "a number"));
    }
    if n < 0.0 {
        return Err(FormError::NegativeAmount(field.id.clone()));
    }
    match precision {
        Precision::Decimal => Ok(FieldValue::Decimal(n)),
        Precision::Integer if n.fract() != 0.0 => {
            Err(FormError::FractionalAmount(field.id.clone()))
        }
        // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows.
        Precision::Integer if n >= u64::MAX as f64 => {
            Err(FormError::AmountOutOfRange(field.id.clone()))
        }
        Precision::Integer => Ok(FieldValue::Integer(n as u64)),
    }
}

/// Checks a value against the field's declared type and constraints.
///
/// Returns the canonical form: multi-choice sets in option order, amounts in
/// the field's precision, choice/text strings in the field's variant.
pub fn normalize(field: &Field, value: FieldValue) -> Result<FieldValue, FormError> {
    match (&field.kind, value) {
        (FieldKind::Choice { options }, FieldValue::Choice(s) | FieldValue::Text(s)) => {
            if options.contains(&s) {
                Ok(FieldValue::Choice(s))
            } else {
                Err(FormError::InvalidOption {
                    field: field.id.clone(),
                    option: s,
                })
            }
        }
        (FieldKind::Choice { .. }, _) => Err(mismatch(field, "one option")),
        (FieldKind::MultiChoice { options }, FieldValue::Choices(picked)) => {
            if let Some(bad) = picked.iter().find(|p| !options.contains(p)) {
                return Err(FormError::InvalidOption {
                    field: field.id.clone(),
                    option: bad.clone(),
                });
            }
            Ok(FieldValue::Choices(
                options
                    .iter()
                    .filter(|o| picked.contains(o))
                    .cloned()
                    .collect(),
            ))
        }
        (FieldKind::MultiChoice { .. }, _) => Err(mismatch(field, "a list of options")),
        (FieldKind::Amount { precision, .. }, FieldValue::Integer(n)) => match precision {
            Precision::Integer => Ok(FieldValue::Integer(n)),
            Precision::Decimal => Ok(FieldValue::Decimal(n as f64)),
        },
        (FieldKind::Amount { precision, .. }, FieldValue::Decimal(n)) => {
            normalize_decimal(field, *precision, n)
        }
        (FieldKind::Amount { .. }, _) => Err(mismatch(field, "a number")),
        (FieldKind::Text, FieldValue::Text(s) | FieldValue::Choice(s)) => Ok(FieldValue::Text(s)),
        (FieldKind::Text, _) => Err(mismatch(field, "text")),
        (FieldKind::Files { accept, multiple }, FieldValue::Files(names)) => {
            if !multiple && names.len() > 1 {
                return Err(FormError::TooManyFiles(field.id.clone()));
            }
            for name in &names {
                let allowed = extension(name)
                    .map(|ext| accept.iter().any(|a| *a == ext))
                    .unwrap_or(false);
                if !allowed {
                    return Err(FormError::DisallowedFileType {
                        field: field.id.clone(),
                        file: name.clone(),
                        allowed: accept.join(", "),
                    });
                }
            }
            Ok(FieldValue::Files(names))
        }
        (FieldKind::Files { .. }, _) => Err(mismatch(field, "a list of file names")),
    }
}

fn string_list(field: &Field, items: &[Value], expected: &'static str) -> Result<Vec<String>, FormError> {
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(|| mismatch(field, expected)))
        .collect()
}

/// Converts a raw JSON draft value into a checked field value.
pub fn coerce_json(field: &Field, raw: &Value) -> Result<FieldValue, FormError> {
    let value = match (&field.kind, raw) {
        (FieldKind::Choice { .. }, Value::String(s)) => FieldValue::Choice(s.clone()),
        (FieldKind::Choice { .. }, _) => return Err(mismatch(field, "one option")),
        (FieldKind::MultiChoice { .. }, Value::Array(items)) => {
            FieldValue::Choices(string_list(field, items, "a list of options")?)
        }
        (FieldKind::MultiChoice { .. }, _) => return Err(mismatch(field, "a list of options")),
        (FieldKind::Amount { .. }, Value::Number(n)) => match n.as_u64() {
            Some(u) => FieldValue::Integer(u),
            None => FieldValue::Decimal(n.as_f64().ok_or_else(|| mismatch(field, "a number"))?),
        },
        (FieldKind::Amount { .. }, _) => return Err(mismatch(field, "a number")),
        (FieldKind::Text, Value::String(s)) => FieldValue::Text(s.clone()),
        (FieldKind::Text, _) => return Err(mismatch(field, "text")),
        (FieldKind::Files { .. }, Value::Array(items)) => {
            FieldValue::Files(string_list(field, items, "a list of file names")?)
        }
        (FieldKind::Files { .. }, Value::String(s)) => FieldValue::Files(vec![s.clone()]),
        (FieldKind::Files { .. }, _) => return Err(mismatch(field, "a list of file names")),
    };
    normalize(field, value)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a command-line `id=value` right-hand side for the given field.
pub fn parse_cli(field: &Field, raw: &str) -> Result<FieldValue, FormError> {
    let value = match &field.kind {
        FieldKind::Choice { .. } => FieldValue::Choice(raw.to_string()),
        FieldKind::MultiChoice { .. } => FieldValue::Choices(split_list(raw)),
        FieldKind::Amount { .. } => match raw.trim().parse::<u64>() {
            Ok(n) => FieldValue::Integer(n),
            Err(_) => FieldValue::Decimal(
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| mismatch(field, "a number"))?,
            ),
        },
        FieldKind::Text => FieldValue::Text(raw.to_string()),
        FieldKind::Files { .. } => FieldValue::Files(split_list(raw)),
    };
    normalize(field, value)
}

/// Resolves every schema field from already-checked values.
///
/// Visible fields take their set value or their initial value; hidden fields
/// take their hidden default and are recorded in `hidden`.
pub fn resolve_submission(
    schema: &Schema,
    values: &BTreeMap<String, FieldValue>,
    confirmed: bool,
) -> Submission {
    let mut submission = Submission {
        confirmed,
        ..Submission::default()
    };
    for f in schema::fields(schema) {
        let resolved = if is_visible(schema, f, values) {
            values.get(&f.id).cloned().unwrap_or_else(|| initial_value(f))
        } else {
            submission.hidden.insert(f.id.clone());
            hidden_value(f)
        };
        submission.values.insert(f.id.clone(), resolved);
    }
    submission
}

/// Checks raw draft values against the schema without resolving visibility.
pub fn checked_values(
    schema: &Schema,
    draft: &Draft,
) -> Result<BTreeMap<String, FieldValue>, FormError> {
    let mut values = BTreeMap::new();
    for (id, raw) in &draft.values {
        let f = schema::field(schema, id)?;
        if raw.is_null() {
            continue;
        }
        values.insert(id.clone(), coerce_json(f, raw)?);
    }
    Ok(values)
}

/// Pure derivation of a submission from raw draft values; called once per interaction.
pub fn derive_submission(schema: &Schema, draft: &Draft) -> Result<Submission, FormError> {
    let values = checked_values(schema, draft)?;
    Ok(resolve_submission(schema, &values, draft.confirm))
}
