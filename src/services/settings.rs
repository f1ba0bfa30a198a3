//! Optional user config, `~/.config/mbti-tips/config.toml`.
//!
//! Every knob has a default; a missing file means stock settings.

use crate::domain::constants::DEFAULT_TIP_CATEGORY;
use serde::Deserialize;
use std::path::PathBuf;

fn default_circle_count() -> u32 {
    25
}

fn default_canvas_size() -> u32 {
    1080
}

fn default_max_line_units() -> u32 {
    38
}

fn default_gate_seconds() -> u64 {
    5
}

fn default_category() -> String {
    DEFAULT_TIP_CATEGORY.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderSettings {
    #[serde(default = "default_circle_count")]
    pub circle_count: u32,
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    #[serde(default = "default_max_line_units")]
    pub max_line_units: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            circle_count: default_circle_count(),
            canvas_size: default_canvas_size(),
            max_line_units: default_max_line_units(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GateSettings {
    #[serde(default = "default_gate_seconds")]
    pub seconds: u64,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            seconds: default_gate_seconds(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TipsSettings {
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for TipsSettings {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub gate: GateSettings,
    #[serde(default)]
    pub tips: TipsSettings,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/mbti-tips/config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
