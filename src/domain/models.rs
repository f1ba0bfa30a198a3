use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrOut {
    pub ok: bool,
    pub error: ErrBody,
}

#[derive(Serialize)]
pub struct ErrBody {
    pub code: String,
    pub message: String,
}

/// One catalog entry. Immutable after load; every field is required so a
/// successful parse guarantees a complete record.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeRecord {
    pub icon: String,
    pub name: String,
    pub title: String,
    pub description: String,
    /// Kept as a plain string (validated at load) so the planner's
    /// unknown-group error path stays reachable for hand-edited catalogs.
    pub group: String,
    pub traits: TraitSet,
    pub compatibility: Compatibility,
    pub tips: TipSet,
    pub deep_analysis: DeepAnalysis,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TraitSet {
    pub energy: String,
    pub mind: String,
    pub nature: String,
    pub tactic: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Compatibility {
    pub best: Vec<String>,
    pub good: Vec<String>,
    pub bad: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TipSet {
    pub love: Vec<String>,
    pub work: Vec<String>,
    pub friendship: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeepAnalysis {
    pub psychology: String,
    pub growth: String,
    pub career: String,
    pub stress: String,
}

/// Compatibility tier between two codes, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Best,
    Good,
    Bad,
    Neutral,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Best => "Perfect match",
            Tier::Good => "Great match",
            Tier::Bad => "Tricky match",
            Tier::Neutral => "Neutral match",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Best => "💕",
            Tier::Good => "😊",
            Tier::Bad => "⚡",
            Tier::Neutral => "🤝",
        }
    }

    pub fn describe(self, selected: &str, other: &str) -> String {
        match self {
            Tier::Best => format!(
                "{} and {} are a natural match — instinctive understanding with enough difference to stay interesting.",
                selected, other
            ),
            Tier::Good => format!(
                "{} and {} get along well — the friction that exists is the productive kind.",
                selected, other
            ),
            Tier::Bad => format!(
                "{} and {} clash by default — workable, but both sides have to translate.",
                selected, other
            ),
            Tier::Neutral => format!(
                "{} and {} are a neutral pairing — chemistry depends on the people, not the letters.",
                selected, other
            ),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct CompatibilityResult {
    pub selected: String,
    pub other: String,
    pub tier: Tier,
    pub overlap: u8,
    pub label: String,
    pub emoji: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct CompareReport {
    pub left: TypeRecord,
    pub right: TypeRecord,
    pub result: CompatibilityResult,
}

#[derive(Serialize)]
pub struct TipsView {
    pub code: String,
    pub category: String,
    pub tips: Vec<String>,
}

#[derive(Serialize)]
pub struct AnalysisView {
    pub code: String,
    pub name: String,
    pub title: String,
    pub deep_analysis: DeepAnalysis,
}

#[derive(Serialize)]
pub struct ListItem {
    pub code: String,
    pub name: String,
    pub title: String,
    pub group: String,
}

/// Per-invocation selection state, rebuilt at startup from the persistence
/// slot. Saved codes the catalog does not recognize are dropped here.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub selected: Option<String>,
    pub category: String,
    pub compare: Option<String>,
}

/// The one persisted slot: the last successfully selected code.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SavedState {
    pub selected: Option<String>,
}

// --- summary card layout plan ---

#[derive(Debug, Serialize)]
pub struct LayoutPlan {
    pub canvas_size: u32,
    pub background: GradientSpec,
    pub circles: Vec<CircleSpec>,
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Serialize)]
pub struct GradientSpec {
    pub group: String,
    pub from: String,
    pub to: String,
}

/// Decorative only; positions are pseudo-random and carry no meaning.
#[derive(Debug, Serialize)]
pub struct CircleSpec {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

/// One text instruction for the external rasterizer. `font` and `color` are
/// tokens resolved by the drawing side, not pixel values.
#[derive(Debug, Serialize)]
pub struct DrawOp {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub font: String,
    pub color: String,
}
