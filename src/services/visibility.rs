use crate::domain::models::{Field, FieldValue, Schema, Visibility};
use crate::schema::{self, initial_value};
use std::collections::BTreeMap;

/// Evaluates a field's predicate against the current values.
///
/// One level of lookup: the gate's current value, or its initial value when
/// the collaborator has not set it yet.
pub fn is_visible(schema: &Schema, field: &Field, values: &BTreeMap<String, FieldValue>) -> bool {
    match &field.visible_when {
        Visibility::Always => true,
        Visibility::When {
            field: gate_id,
            equals,
        } => {
            let current = match values.get(gate_id) {
                Some(v) => v.clone(),
                None => match schema::field(schema, gate_id) {
                    Ok(gate) => initial_value(gate),
                    Err(_) => return false,
                },
            };
            matches!(current, FieldValue::Choice(ref c) if c == equals)
        }
    }
}
