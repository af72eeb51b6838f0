mod common;

use common::{valid_draft, TestEnv};
use serde_json::{json, Value};
use std::fs;

#[test]
fn valid_declaration_submits_with_defaults_for_hidden_fields() {
    let env = TestEnv::new();
    let path = env.write_draft("draft.json", &valid_draft());

    let validate = env.run_json(&["validate", &path]);
    assert_eq!(validate["ok"], true);
    assert_eq!(validate["data"]["errors"].as_array().unwrap().len(), 0);
    assert_eq!(validate["data"]["warnings"].as_array().unwrap().len(), 0);

    let submit = env.run_json(&["submit", &path]);
    assert_eq!(submit["ok"], true);
    assert_eq!(submit["data"]["state"], "accepted");
    let outcome = &submit["data"]["outcome"];
    assert_eq!(outcome["status"], "accepted");
    assert!(outcome["reference"].as_str().unwrap().starts_with("ESG-"));

    let values = &outcome["summary"]["values"];
    assert_eq!(values["renewable_amount"], 0);
    assert_eq!(values["asset_types"], json!([]));
    assert_eq!(values["plastic_amount"].as_f64(), Some(0.0));
    assert_eq!(values["excise_code"], "");
    assert_eq!(values["vat_exempt"], "No");
}

#[test]
fn activated_zero_amount_blocks_submission() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["values"]["renewable_invested"] = json!("Yes");
    draft["values"]["renewable_amount"] = json!(0);
    let path = env.write_draft("draft.json", &draft);

    let validate = env.run_json(&["validate", &path]);
    assert_eq!(validate["ok"], false);
    let errors = validate["data"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "renewable_amount");

    let rejected = env.run_json_failure(&["submit", &path]);
    assert_eq!(rejected["ok"], false);
    assert_eq!(rejected["error"]["code"], "SUBMISSION_REJECTED");
    assert_eq!(rejected["data"]["state"], "rejected");
    assert_eq!(
        rejected["data"]["outcome"]["result"]["errors"][0]["message"],
        "Renewable energy investment amount must be greater than zero."
    );
}

#[test]
fn unconfirmed_submit_reports_rejection_code() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["confirm"] = json!(false);
    let path = env.write_draft("draft.json", &draft);

    let out = env
        .cmd()
        .args(["--json", "submit", path.as_str()])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let rejected: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rejected["ok"], false);
    assert_eq!(rejected["error"]["code"], "SUBMISSION_REJECTED");
    assert_eq!(
        rejected["error"]["message"],
        "submission rejected with 1 blocking error(s)"
    );
    assert!(rejected["data"].get("submission").is_none());
}

#[test]
fn plastic_gate_activates_dependents() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["values"]["plastic_use"] = json!("Yes");
    let path = env.write_draft("draft.json", &draft);

    let vis = env.run_json(&["visibility", &path]);
    let items = vis["data"].as_array().unwrap();
    let visible = |id: &str| -> bool {
        items
            .iter()
            .find(|i| i["field"] == id)
            .map(|i| i["visible"] == true)
            .unwrap_or(false)
    };
    assert!(visible("plastic_amount"));
    assert!(visible("excise_code"));
    assert!(!visible("renewable_amount"));
    assert!(visible("ttc_nssf"));

    let validate = env.run_json(&["validate", &path]);
    assert_eq!(validate["data"]["errors"][0]["field"], "plastic_amount");
}

#[test]
fn fill_then_submit_cycle() {
    let env = TestEnv::new();
    let out = env.work.join("filled.json");
    let out_str = out.to_str().unwrap();

    let fill = env.run_json(&[
        "fill",
        "--set",
        "renewable_invested=Yes",
        "--set",
        "asset_types=Wind,Solar",
        "--set",
        "renewable_amount=2500000",
        "--set",
        "renewable_invoice=invoice.pdf",
        "--set",
        "disability_employees=3",
        "--set",
        "training_spend=40000",
        "--set",
        "training_certified=NITA-U",
        "--confirm",
        "--out",
        out_str,
    ]);
    assert_eq!(fill["ok"], true);

    let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["confirm"], true);
    assert_eq!(written["values"]["asset_types"], json!(["Solar", "Wind"]));
    assert_eq!(written["values"]["renewable_amount"], 2500000);

    let export = env.work.join("export/summary.json");
    let submit = env.run_json(&["submit", out_str, "--export", export.to_str().unwrap()]);
    assert_eq!(submit["ok"], true);
    let lines = submit["data"]["lines"].as_array().unwrap();
    assert_eq!(
        lines[0],
        "Renewable energy investment: 2500000 UGX, assets: [Solar, Wind], VAT-exempt: Yes"
    );
    assert_eq!(lines[3], "Training expenditure: 40000 UGX, Certified by: NITA-U");

    let exported: Value = serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(exported["state"], "accepted");
    assert_eq!(
        exported["outcome"]["reference"],
        submit["data"]["outcome"]["reference"]
    );
    assert_eq!(exported["submission"]["confirmed"], true);
}

#[test]
fn fill_rejects_negative_amount() {
    let env = TestEnv::new();
    let err = env.run_json_failure(&["fill", "--set", "training_spend=-5"]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "INVALID_VALUE");
    let msg = err["error"]["message"].as_str().unwrap_or("");
    assert!(msg.contains("does not accept negative amounts"));
}

#[test]
fn unknown_field_in_draft_is_reported() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["values"]["carbon_credits"] = json!(10);
    let path = env.write_draft("draft.json", &draft);
    let err = env.run_json_failure(&["summarize", &path]);
    assert_eq!(err["error"]["code"], "UNKNOWN_FIELD");
}

#[test]
fn disallowed_attachment_type_is_rejected() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["values"]["ncpd_certificates"] = json!(["cert.pdf", "cert.docx"]);
    let path = env.write_draft("draft.json", &draft);
    let err = env.run_json_failure(&["validate", &path]);
    assert_eq!(err["error"]["code"], "INVALID_VALUE");
}

#[test]
fn config_currency_flows_into_summary_lines() {
    let env = TestEnv::new();
    env.write_config("[general]\ncurrency = \"USh\"\n");
    let path = env.write_draft("draft.json", &valid_draft());
    let summary = env.run_json(&["summarize", &path]);
    let lines = summary["data"]["lines"].as_array().unwrap();
    assert_eq!(lines[2], "Disability-inclusive employees: 5");
    assert_eq!(lines[3], "Training expenditure: 10000 USh, Certified by: None");
}

#[test]
fn explicit_missing_config_is_a_config_error() {
    let env = TestEnv::new();
    let missing = env.home.join("nope.toml");
    let err = env.run_json_failure(&["--config", missing.to_str().unwrap(), "schema"]);
    assert_eq!(err["error"]["code"], "CONFIG");
}

#[test]
fn malformed_draft_is_reported() {
    let env = TestEnv::new();
    let path = env.work.join("broken.json");
    fs::write(&path, "{not json").unwrap();
    let err = env.run_json_failure(&["validate", path.to_str().unwrap()]);
    assert_eq!(err["error"]["code"], "INVALID_DRAFT");
}

#[test]
fn governance_total_is_summed() {
    let env = TestEnv::new();
    let mut draft = valid_draft();
    draft["values"]["ttc_income_tax"] = json!(1000000);
    draft["values"]["ttc_paye"] = json!(250000);
    draft["values"]["ttc_upload"] = json!("ttc-01.xlsx");
    let path = env.write_draft("draft.json", &draft);

    let summary = env.run_json(&["summarize", &path]);
    let sections = summary["data"]["summary"]["sections"].as_array().unwrap();
    let governance = sections.iter().find(|s| s["id"] == "governance").unwrap();
    assert_eq!(governance["total"], 1250000);
    let lines = summary["data"]["lines"].as_array().unwrap();
    assert_eq!(lines[4], "TTC uploaded: Yes");
}
