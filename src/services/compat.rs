//! Compatibility classification between two type codes.

use crate::catalog::{Catalog, CatalogError};
use crate::domain::models::{CompatibilityResult, Tier};

/// Positional agreement between two codes: how many of the four axis letters
/// match exactly. Purely structural — the display trait strings play no part.
pub fn trait_overlap(selected: &str, other: &str) -> u8 {
    selected
        .chars()
        .zip(other.chars())
        .filter(|(a, b)| a == b)
        .count() as u8
}

/// Classifies `other` against `selected`'s compatibility sets.
///
/// Precedence is fixed: best, then good, then bad, then neutral. The sets are
/// validated disjoint at load, but evaluation order still decides the outcome
/// if a hand-edited catalog ever lists a code twice.
pub fn classify(
    catalog: &Catalog,
    selected: &str,
    other: &str,
) -> Result<CompatibilityResult, CatalogError> {
    let record = catalog.lookup(selected)?;
    catalog.lookup(other)?;

    let compat = &record.compatibility;
    let tier = if compat.best.iter().any(|c| c == other) {
        Tier::Best
    } else if compat.good.iter().any(|c| c == other) {
        Tier::Good
    } else if compat.bad.iter().any(|c| c == other) {
        Tier::Bad
    } else {
        Tier::Neutral
    };

    Ok(CompatibilityResult {
        selected: selected.to_string(),
        other: other.to_string(),
        tier,
        overlap: trait_overlap(selected, other),
        label: tier.label().to_string(),
        emoji: tier.emoji().to_string(),
        description: tier.describe(selected, other),
    })
}
