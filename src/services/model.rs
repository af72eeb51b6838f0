use crate::domain::models::{
    Draft, FieldValue, Outcome, Schema, SubmitState, Submission, Summary, ValidationResult,
};
use crate::schema::{self, FormError};
use crate::services::derive::{checked_values, normalize, resolve_submission};
use crate::services::{rules, summary, visibility};
use std::collections::BTreeMap;

/// Schema plus the current session's values.
///
/// State moves `unsubmitted -> validating -> accepted | rejected`; any edit
/// returns it to `unsubmitted` so a rejected form can be fixed and resubmitted.
#[derive(Debug, Clone)]
pub struct FormModel {
    schema: Schema,
    values: BTreeMap<String, FieldValue>,
    confirmed: bool,
    state: SubmitState,
    finalized: Option<Submission>,
}

impl FormModel {
    pub fn new(schema: Schema) -> Result<Self, FormError> {
        schema::check(&schema)?;
        Ok(Self {
            schema,
            values: BTreeMap::new(),
            confirmed: false,
            state: SubmitState::Unsubmitted,
            finalized: None,
        })
    }

    pub fn from_draft(schema: Schema, draft: &Draft) -> Result<Self, FormError> {
        let mut model = Self::new(schema)?;
        model.values = checked_values(&model.schema, draft)?;
        model.confirmed = draft.confirm;
        Ok(model)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Snapshot frozen by the last accepted submission.
    pub fn finalized(&self) -> Option<&Submission> {
        self.finalized.as_ref()
    }

    fn touch(&mut self) {
        if self.state != SubmitState::Unsubmitted {
            tracing::debug!(from = ?self.state, "edit reopens submission");
        }
        self.state = SubmitState::Unsubmitted;
        self.finalized = None;
    }

    /// Records a value after checking it against the field's type; on error
    /// the model is unchanged.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) -> Result<(), FormError> {
        let field = schema::field(&self.schema, field_id)?;
        let value = normalize(field, value)?;
        tracing::debug!(field = field_id, value = ?value, "set value");
        self.values.insert(field_id.to_string(), value);
        self.touch();
        Ok(())
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
        self.touch();
    }

    pub fn is_visible(&self, field_id: &str) -> Result<bool, FormError> {
        let field = schema::field(&self.schema, field_id)?;
        Ok(visibility::is_visible(&self.schema, field, &self.values))
    }

    pub fn submission(&self) -> Submission {
        resolve_submission(&self.schema, &self.values, self.confirmed)
    }

    pub fn validate(&self) -> ValidationResult {
        rules::validate(&self.schema, &self.submission())
    }

    pub fn summarize(&self) -> Summary {
        summary::summarize(&self.schema, &self.submission())
    }

    /// Raw draft equivalent of the current values, for handing back to the collaborator.
    pub fn to_draft(&self) -> anyhow::Result<Draft> {
        let mut values = BTreeMap::new();
        for (id, v) in &self.values {
            values.insert(id.clone(), serde_json::to_value(v)?);
        }
        Ok(Draft {
            confirm: self.confirmed,
            values,
        })
    }

    pub fn submit(&mut self) -> anyhow::Result<Outcome> {
        self.state = SubmitState::Validating;
        let snapshot = self.submission();
        let result = self.validate();

        if rules::is_blocked(&result) {
            tracing::info!(errors = result.errors.len(), "submission rejected");
            self.state = SubmitState::Rejected;
            self.finalized = None;
            return Ok(Outcome::Rejected { result });
        }

        let reference = summary::reference(&snapshot)?;
        let summary = summary::summarize(&self.schema, &snapshot);
        tracing::info!(
            reference = %reference,
            warnings = result.warnings.len(),
            "submission accepted"
        );
        self.state = SubmitState::Accepted;
        self.finalized = Some(snapshot);
        Ok(Outcome::Accepted {
            reference,
            warnings: result.warnings,
            summary,
        })
    }
}
