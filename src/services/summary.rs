use crate::domain::models::{
    FieldValue, Schema, Submission, Summary, SummaryEntry, SummarySection,
};
use sha2::{Digest, Sha256};

pub fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Choice(s) | FieldValue::Text(s) => s.clone(),
        FieldValue::Integer(n) => n.to_string(),
        // Debug keeps the fractional part on whole decimals ("12.0").
        FieldValue::Decimal(x) => format!("{:?}", x),
        FieldValue::Choices(items) | FieldValue::Files(items) => format!("[{}]", items.join(", ")),
    }
}

/// Read-only record of every field, hidden ones at their defaults.
pub fn summarize(schema: &Schema, submission: &Submission) -> Summary {
    let sections = schema
        .sections
        .iter()
        .map(|section| {
            let entries: Vec<SummaryEntry> = section
                .fields
                .iter()
                .filter_map(|f| {
                    submission.values.get(&f.id).map(|v| SummaryEntry {
                        id: f.id.clone(),
                        label: f.label.clone(),
                        value: v.clone(),
                        active: !submission.hidden.contains(&f.id),
                    })
                })
                .collect();
            let total = section.aggregate.then(|| {
                entries
                    .iter()
                    .map(|e| match e.value {
                        FieldValue::Integer(n) => n,
                        _ => 0,
                    })
                    .fold(0u64, u64::saturating_add)
            });
            SummarySection {
                id: section.id.clone(),
                title: section.title.clone(),
                entries,
                total,
            }
        })
        .collect();

    Summary {
        sections,
        values: submission.values.clone(),
    }
}

/// Stable short reference for an accepted submission snapshot.
pub fn reference(submission: &Submission) -> anyhow::Result<String> {
    let canonical = serde_json::to_string(&submission.values)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());
    Ok(format!("ESG-{}", &digest[..16]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::*;
    use crate::domain::models::Draft;
    use crate::esg::{confirmation_lines, esg_declaration};
    use crate::services::derive::derive_submission;
    use serde_json::json;

    fn submission(values: serde_json::Value) -> Submission {
        let draft: Draft =
            serde_json::from_value(json!({"confirm": true, "values": values})).unwrap();
        derive_submission(&esg_declaration(), &draft).unwrap()
    }

    #[test]
    fn summary_includes_hidden_fields_with_defaults() {
        let schema = esg_declaration();
        let s = summarize(&schema, &submission(json!({"renewable_invested": "No"})));
        let env = &s.sections[0];
        let amount = env
            .entries
            .iter()
            .find(|e| e.id == RENEWABLE_AMOUNT)
            .unwrap();
        assert!(!amount.active);
        assert_eq!(amount.value, FieldValue::Integer(0));
        assert_eq!(s.values[EXCISE_CODE], FieldValue::Text(String::new()));
        assert_eq!(env.total, None);
    }

    #[test]
    fn governance_section_totals_ttc_items() {
        let schema = esg_declaration();
        let s = summarize(
            &schema,
            &submission(json!({
                "ttc_income_tax": 1000,
                "ttc_paye": 2000,
                "ttc_vat": 3000,
                "ttc_nssf": 4000,
                "ttc_upload": ["ttc.xlsx"]
            })),
        );
        let governance = s.sections.iter().find(|x| x.id == "governance").unwrap();
        assert_eq!(governance.total, Some(10000));
    }

    #[test]
    fn confirmation_lines_render_resolved_values() {
        let schema = esg_declaration();
        let s = summarize(
            &schema,
            &submission(json!({
                "renewable_invested": "Yes",
                "renewable_amount": 5000000,
                "asset_types": ["Wind", "Solar"],
                "plastic_use": "Yes",
                "plastic_amount": 12.5,
                "excise_code": "EXC-77",
                "training_certified": "NITA-U"
            })),
        );
        let lines = confirmation_lines(&s, "UGX");
        assert_eq!(
            lines[0],
            "Renewable energy investment: 5000000 UGX, assets: [Solar, Wind], VAT-exempt: Yes"
        );
        assert_eq!(lines[1], "Plastic use/imported: 12.5 kg/tonnes, Excise code: EXC-77");
        assert_eq!(lines[3], "Training expenditure: 0 UGX, Certified by: NITA-U");
        assert_eq!(lines[4], "TTC uploaded: No");
        assert_eq!(lines[6], "TTC total (UGX): 0");
    }

    #[test]
    fn whole_decimals_keep_their_fraction() {
        assert_eq!(display_value(&FieldValue::Decimal(12.0)), "12.0");
        assert_eq!(display_value(&FieldValue::Decimal(0.0)), "0.0");
        assert_eq!(display_value(&FieldValue::Decimal(2.25)), "2.25");
        assert_eq!(display_value(&FieldValue::Integer(12)), "12");

        let schema = esg_declaration();
        let s = summarize(
            &schema,
            &submission(json!({"plastic_use": "Yes", "plastic_amount": 12.0})),
        );
        let lines = confirmation_lines(&s, "UGX");
        assert_eq!(lines[1], "Plastic use/imported: 12.0 kg/tonnes, Excise code: ");
    }

    #[test]
    fn reference_is_deterministic_and_value_sensitive() {
        let a = submission(json!({"training_spend": 10}));
        let b = submission(json!({"training_spend": 10}));
        let c = submission(json!({"training_spend": 11}));
        let ra = reference(&a).unwrap();
        assert_eq!(ra, reference(&b).unwrap());
        assert_ne!(ra, reference(&c).unwrap());
        assert!(ra.starts_with("ESG-"));
        assert_eq!(ra.len(), 20);
    }
}
