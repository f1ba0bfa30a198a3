use serde_json::Value;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn select_persists_and_show_restores_it() {
    let env = TestEnv::new();

    let selected = env.run_json(&["select", "infp"]);
    assert_eq!(selected["ok"], true);
    assert_eq!(selected["data"]["name"], "INFP");

    let raw = fs::read_to_string(env.home.join(".config/mbti-tips/state.json"))
        .expect("state slot written");
    let state: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(state["selected"], "INFP");

    let shown = env.run_json(&["show"]);
    assert_eq!(shown["data"]["name"], "INFP");
    assert_eq!(shown["data"]["title"], "The Mediator");
}

#[test]
fn unrecognized_saved_code_leaves_state_unset() {
    let env = TestEnv::new();
    env.write_state(r#"{"selected": "XOXO"}"#);

    let shown = env.run_json(&["show"]);
    assert_eq!(shown["ok"], true);
    assert_eq!(shown["data"], Value::Null);
}

#[test]
fn corrupt_state_file_behaves_like_a_fresh_start() {
    let env = TestEnv::new();
    env.write_state("not json at all {");

    let shown = env.run_json(&["show"]);
    assert_eq!(shown["ok"], true);
    assert_eq!(shown["data"], Value::Null);
}

#[test]
fn match_follows_the_tier_precedence() {
    let env = TestEnv::new();

    let best = env.run_json(&["match", "INTJ", "ENFP"]);
    assert_eq!(best["data"]["tier"], "best");
    assert_eq!(best["data"]["overlap"], 1);
    assert_eq!(best["data"]["label"], "Perfect match");

    let good = env.run_json(&["match", "INTJ", "ENTJ"]);
    assert_eq!(good["data"]["tier"], "good");

    let bad = env.run_json(&["match", "INTJ", "ESFP"]);
    assert_eq!(bad["data"]["tier"], "bad");

    let neutral = env.run_json(&["match", "INTJ", "ISTJ"]);
    assert_eq!(neutral["data"]["tier"], "neutral");
}

#[test]
fn self_match_has_full_overlap() {
    let env = TestEnv::new();
    let result = env.run_json(&["match", "ESFJ", "ESFJ"]);
    assert_eq!(result["data"]["overlap"], 4);
    assert_eq!(result["data"]["tier"], "neutral");
}

#[test]
fn compare_carries_both_records_and_the_result() {
    let env = TestEnv::new();
    let report = env.run_json(&["compare", "ENTP", "INFJ"]);
    assert_eq!(report["data"]["left"]["name"], "ENTP");
    assert_eq!(report["data"]["right"]["name"], "INFJ");
    assert_eq!(report["data"]["result"]["tier"], "best");
}

#[test]
fn unknown_tip_category_yields_an_empty_list() {
    let env = TestEnv::new();
    let tips = env.run_json(&["tips", "ISTP", "--category", "astrology"]);
    assert_eq!(tips["ok"], true);
    assert_eq!(tips["data"]["category"], "astrology");
    assert_eq!(tips["data"]["tips"].as_array().unwrap().len(), 0);
}

#[test]
fn analysis_is_complete_for_every_listed_type() {
    let env = TestEnv::new();
    let list = env.run_json(&["list"]);
    let items = list["data"].as_array().expect("list array");
    assert_eq!(items.len(), 16);

    for item in items {
        let code = item["code"].as_str().unwrap();
        let analysis = env.run_json(&["analysis", code]);
        let deep = &analysis["data"]["deep_analysis"];
        for field in ["psychology", "growth", "career", "stress"] {
            assert!(
                !deep[field].as_str().unwrap().is_empty(),
                "{} has empty {}",
                code,
                field
            );
        }
    }
}

#[test]
fn card_uses_the_group_gradient_and_configured_circles() {
    let env = TestEnv::new();

    let card = env.run_json(&["card", "INFJ"]);
    assert_eq!(card["data"]["background"]["group"], "diplomat");
    assert_eq!(card["data"]["background"]["from"], "#1e8449");
    assert_eq!(card["data"]["canvas_size"], 1080);
    assert_eq!(card["data"]["circles"].as_array().unwrap().len(), 25);

    let ops = card["data"]["ops"].as_array().unwrap();
    assert_eq!(ops[0]["text"], "MBTI Compatibility & Tips");
    assert_eq!(ops[1]["text"], "🌙");
    assert_eq!(ops[2]["text"], "INFJ");

    // Render knobs come from the config file.
    env.write_config("[render]\ncircle_count = 5\n");
    let small = env.run_json(&["card", "INFJ"]);
    assert_eq!(small["data"]["circles"].as_array().unwrap().len(), 5);
    assert_eq!(small["data"]["background"]["from"], "#1e8449");
}

#[test]
fn share_text_includes_matches_and_url() {
    let env = TestEnv::new();
    let share = env.run_json(&["share", "ESTP"]);
    let text = share["data"].as_str().unwrap();
    assert!(text.contains("ESTP"));
    assert!(text.contains("The Entrepreneur"));
    assert!(text.contains("ISTJ"));
    assert!(text.contains("https://swp1234.github.io/mbti-tips/"));
}

#[test]
fn unknown_type_returns_the_error_envelope() {
    let env = TestEnv::new();
    let mut cmd = env.cmd();
    let out = cmd
        .args(["--json", "match", "ABCD", "INTJ"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "UNKNOWN_TYPE");
    let msg = err["error"]["message"].as_str().unwrap_or("");
    assert!(msg.contains("unknown type code"));
}

#[test]
fn audit_log_records_selection_events() {
    let env = TestEnv::new();
    env.run_json(&["select", "ENFJ"]);
    env.run_json(&["analysis", "ENFJ"]);

    let log = fs::read_to_string(env.home.join(".config/mbti-tips/audit.jsonl"))
        .expect("audit log written");
    let actions: Vec<String> = log
        .lines()
        .map(|l| serde_json::from_str::<Value>(l).unwrap()["action"]
            .as_str()
            .unwrap()
            .to_string())
        .collect();
    assert_eq!(actions, vec!["select", "analysis"]);
}
