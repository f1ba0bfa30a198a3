use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mbti-tips").expect("binary built");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Pre-seeds the persistence slot, bypassing `select`.
    #[allow(dead_code)]
    pub fn write_state(&self, body: &str) {
        let dir = self.home.join(".config/mbti-tips");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("state.json"), body).expect("write state file");
    }

    /// Writes the optional config file.
    #[allow(dead_code)]
    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/mbti-tips");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config file");
    }
}
