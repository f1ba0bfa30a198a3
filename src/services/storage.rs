//! Local persistence: the saved selection slot and the audit log.

use crate::domain::models::SavedState;
use std::path::PathBuf;

/// Append-only JSONL event log. Best effort: a missing HOME or unwritable
/// file never fails the command that triggered the event.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/mbti-tips/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": now_unix(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn now_unix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

fn state_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/mbti-tips/state.json"))
}

/// Reads the persistence slot. Missing or unreadable state is treated as "no
/// selection yet"; validation against the catalog happens at the call site.
pub fn load_state() -> SavedState {
    let Ok(p) = state_path() else {
        return SavedState::default();
    };
    if !p.exists() {
        return SavedState::default();
    }
    std::fs::read_to_string(p)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Written on every successful `select`.
pub fn save_state(state: &SavedState) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(state)?)?;
    Ok(())
}
