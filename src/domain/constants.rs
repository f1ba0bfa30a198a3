//! Stable constants shared across the catalog, classifier and planner.

/// Number of type records the catalog must carry, no more, no less.
pub const TYPE_COUNT: usize = 16;

/// Valid letters per code position (axis 0..4).
pub const CODE_AXES: [[char; 2]; 4] = [['E', 'I'], ['N', 'S'], ['T', 'F'], ['J', 'P']];

/// The four temperament groups, used only to pick a color token.
pub const GROUP_NAMES: [&str; 4] = ["analyst", "diplomat", "sentinel", "explorer"];

/// Tip categories the catalog carries. Unknown categories resolve to no tips.
pub const TIP_CATEGORIES: [&str; 3] = ["love", "work", "friendship"];

/// Category shown when the user has not picked one.
pub const DEFAULT_TIP_CATEGORY: &str = "love";

/// Canonical app URL, embedded in share text and the summary card.
pub const SHARE_URL: &str = "https://swp1234.github.io/mbti-tips/";
