//! Content resolution: contextual tips, deep analysis, share text.

use crate::catalog::{Catalog, CatalogError};
use crate::domain::constants::SHARE_URL;
use crate::domain::models::{DeepAnalysis, TypeRecord};

/// Tips for a category. Unknown categories are not an error — they resolve to
/// no tips, so a stale or mistyped category renders an empty list.
pub fn tips_for<'a>(record: &'a TypeRecord, category: &str) -> &'a [String] {
    match category {
        "love" => &record.tips.love,
        "work" => &record.tips.work,
        "friendship" => &record.tips.friendship,
        _ => &[],
    }
}

/// Deep-analysis payload. Every catalog entry carries all four fields, so this
/// only fails when the code itself is unknown.
pub fn deep_analysis_for<'a>(
    catalog: &'a Catalog,
    code: &str,
) -> Result<&'a DeepAnalysis, CatalogError> {
    Ok(&catalog.lookup(code)?.deep_analysis)
}

/// The share message the shell hands to the platform share sheet or clipboard.
pub fn share_text(record: &TypeRecord) -> String {
    let best = record.compatibility.best.join(", ");
    let bad = if record.compatibility.bad.is_empty() {
        "none".to_string()
    } else {
        record.compatibility.bad.join(", ")
    };
    format!(
        "🧩 I'm {} ({})!\n\n💕 My best matches: {}\n⚡ Handle with care: {}\n\nCheck your own MBTI match 👇\n{}",
        record.name, record.title, best, bad, SHARE_URL
    )
}
