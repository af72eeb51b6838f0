//! The ESG declaration: sections, fields, visibility table and rule table.
//!
//! Adding a field is a data change here; the services interpret the table.

use crate::domain::constants::*;
use crate::domain::models::{
    Field, FieldKind, FieldValue, Precision, Rule, Schema, Section, Summary, Visibility,
};
use crate::services::summary::display_value;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn field(id: &str, label: &str, kind: FieldKind) -> Field {
    Field {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        visible_when: Visibility::Always,
        hidden_default: None,
    }
}

fn gated(mut f: Field, gate: &str) -> Field {
    f.visible_when = Visibility::When {
        field: gate.to_string(),
        equals: YES.to_string(),
    };
    f
}

fn yes_no(id: &str, label: &str) -> Field {
    field(
        id,
        label,
        FieldKind::Choice {
            options: strings(&[NO, YES]),
        },
    )
}

fn amount(id: &str, label: &str, precision: Precision, unit: &str) -> Field {
    field(
        id,
        label,
        FieldKind::Amount {
            precision,
            unit: unit.to_string(),
        },
    )
}

fn ugx(id: &str, label: &str) -> Field {
    amount(id, label, Precision::Integer, DEFAULT_CURRENCY)
}

fn files(id: &str, label: &str, accept: &[&str], multiple: bool) -> Field {
    field(
        id,
        label,
        FieldKind::Files {
            accept: strings(accept),
            multiple,
        },
    )
}

pub fn esg_declaration() -> Schema {
    let mut vat_exempt = gated(
        field(
            VAT_EXEMPT,
            "VAT-exempt?",
            FieldKind::Choice {
                options: strings(&[YES, NO]),
            },
        ),
        RENEWABLE_INVESTED,
    );
    vat_exempt.hidden_default = Some(FieldValue::Choice(NO.to_string()));

    let environmental = Section {
        id: "environmental".to_string(),
        title: "Environmental Data".to_string(),
        aggregate: false,
        fields: vec![
            yes_no(
                RENEWABLE_INVESTED,
                "Did your company invest in renewable energy this year?",
            ),
            gated(
                field(
                    ASSET_TYPES,
                    "Asset type (select all that apply)",
                    FieldKind::MultiChoice {
                        options: strings(&ASSET_OPTIONS),
                    },
                ),
                RENEWABLE_INVESTED,
            ),
            gated(
                ugx(RENEWABLE_AMOUNT, "Total investment amount (UGX)"),
                RENEWABLE_INVESTED,
            ),
            vat_exempt,
            gated(
                files(
                    RENEWABLE_INVOICE,
                    "Invoice or import certificate (PDF/JPG/PNG)",
                    &DOCUMENT_TYPES,
                    false,
                ),
                RENEWABLE_INVESTED,
            ),
            yes_no(
                PLASTIC_USE,
                "Did your company import or manufacture plastic packaging?",
            ),
            gated(
                amount(
                    PLASTIC_AMOUNT,
                    "Plastic material used/imported (kg or tonnes)",
                    Precision::Decimal,
                    "kg/tonnes",
                ),
                PLASTIC_USE,
            ),
            gated(
                field(EXCISE_CODE, "Excise duty code used", FieldKind::Text),
                PLASTIC_USE,
            ),
            gated(
                files(
                    PLASTIC_REPORT,
                    "Customs or packaging report (PDF/JPG/PNG)",
                    &DOCUMENT_TYPES,
                    false,
                ),
                PLASTIC_USE,
            ),
        ],
    };

    let social = Section {
        id: "social".to_string(),
        title: "Social Data".to_string(),
        aggregate: false,
        fields: vec![
            amount(
                DISABILITY_EMPLOYEES,
                "Number of full-time employees with certified disabilities",
                Precision::Integer,
                "employees",
            ),
            files(
                NCPD_CERTIFICATES,
                "NCPD certificates (multiple allowed, PDF/JPG/PNG)",
                &DOCUMENT_TYPES,
                true,
            ),
            ugx(TRAINING_SPEND, "Total annual training expenditure (UGX)"),
            field(
                TRAINING_CERTIFIED,
                "Was training certified by",
                FieldKind::Choice {
                    options: strings(&CERTIFIER_OPTIONS),
                },
            ),
            files(
                TRAINING_RECEIPTS,
                "Provider TIN or receipts (multiple allowed, PDF/JPG/PNG)",
                &DOCUMENT_TYPES,
                true,
            ),
        ],
    };

    let governance = Section {
        id: "governance".to_string(),
        title: "Governance Data: Total Tax Contribution (Large Taxpayers Only)".to_string(),
        aggregate: true,
        fields: vec![
            files(
                TTC_UPLOAD,
                "Completed Form TTC-01 (Excel/PDF)",
                &TTC_FORM_TYPES,
                false,
            ),
            ugx(TTC_INCOME_TAX, "Corporate Income Tax (UGX)"),
            ugx(TTC_PAYE, "PAYE (UGX)"),
            ugx(TTC_VAT, "VAT (UGX)"),
            ugx(TTC_WITHHOLDING, "Withholding Tax (UGX)"),
            ugx(TTC_EXCISE, "Excise Duty (UGX)"),
            ugx(TTC_NSSF, "NSSF Contributions (UGX)"),
        ],
    };

    let rules = vec![
        Rule::PositiveWhenActive {
            field: RENEWABLE_AMOUNT.to_string(),
            message: RENEWABLE_AMOUNT_REQUIRED.to_string(),
        },
        Rule::PositiveWhenActive {
            field: PLASTIC_AMOUNT.to_string(),
            message: PLASTIC_AMOUNT_REQUIRED.to_string(),
        },
        Rule::WarnWhenZero {
            field: DISABILITY_EMPLOYEES.to_string(),
            message: ZERO_DISABILITY_EMPLOYEES.to_string(),
        },
        Rule::WarnWhenZero {
            field: TRAINING_SPEND.to_string(),
            message: ZERO_TRAINING_SPEND.to_string(),
        },
    ];

    Schema {
        title: "URA eTax ESG Data Declaration".to_string(),
        sections: vec![environmental, social, governance],
        rules,
    }
}

fn show(summary: &Summary, id: &str) -> String {
    summary
        .values
        .get(id)
        .map(display_value)
        .unwrap_or_default()
}

fn has_files(summary: &Summary, id: &str) -> bool {
    matches!(summary.values.get(id), Some(FieldValue::Files(f)) if !f.is_empty())
}

/// Human confirmation view shown after an accepted submission.
pub fn confirmation_lines(summary: &Summary, currency: &str) -> Vec<String> {
    let ttc_total = summary
        .sections
        .iter()
        .find(|s| s.id == "governance")
        .and_then(|s| s.total)
        .unwrap_or(0);
    vec![
        format!(
            "Renewable energy investment: {} {}, assets: {}, VAT-exempt: {}",
            show(summary, RENEWABLE_AMOUNT),
            currency,
            show(summary, ASSET_TYPES),
            show(summary, VAT_EXEMPT)
        ),
        format!(
            "Plastic use/imported: {} kg/tonnes, Excise code: {}",
            show(summary, PLASTIC_AMOUNT),
            show(summary, EXCISE_CODE)
        ),
        format!(
            "Disability-inclusive employees: {}",
            show(summary, DISABILITY_EMPLOYEES)
        ),
        format!(
            "Training expenditure: {} {}, Certified by: {}",
            show(summary, TRAINING_SPEND),
            currency,
            show(summary, TRAINING_CERTIFIED)
        ),
        format!(
            "TTC uploaded: {}",
            if has_files(summary, TTC_UPLOAD) { YES } else { NO }
        ),
        format!(
            "TTC Breakdown ({}): Income Tax={}, PAYE={}, VAT={}, Withholding Tax={}, Excise={}, NSSF={}",
            currency,
            show(summary, TTC_INCOME_TAX),
            show(summary, TTC_PAYE),
            show(summary, TTC_VAT),
            show(summary, TTC_WITHHOLDING),
            show(summary, TTC_EXCISE),
            show(summary, TTC_NSSF)
        ),
        format!("TTC total ({}): {}", currency, ttc_total),
    ]
}
