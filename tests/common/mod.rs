#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("esgform");
        cmd.env("HOME", &self.home)
            .env_remove("ESGFORM_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_draft(&self, name: &str, draft: &Value) -> String {
        let path = self.work.join(name);
        fs::write(
            &path,
            serde_json::to_string_pretty(draft).expect("serialize draft"),
        )
        .expect("write draft");
        path.to_str().expect("draft path utf8").to_string()
    }

    pub fn write_config(&self, body: &str) {
        let path = self.home.join(".config/esgform/config.toml");
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Confirmed declaration with no activated sections and no warnings.
pub fn valid_draft() -> Value {
    json!({
        "confirm": true,
        "values": {
            "renewable_invested": "No",
            "plastic_use": "No",
            "disability_employees": 5,
            "training_spend": 10000,
            "ttc_income_tax": 0,
            "ttc_paye": 0,
            "ttc_vat": 0,
            "ttc_withholding": 0,
            "ttc_excise": 0,
            "ttc_nssf": 0
        }
    })
}
