use crate::domain::constants::{CODE_AXES, GROUP_NAMES, TIP_CATEGORIES, TYPE_COUNT};
use crate::domain::models::TypeRecord;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The full 16-type catalog, embedded at compile time and loaded once at
/// startup. Nothing mutates a record after `load` returns.
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Deserialize)]
pub struct Catalog {
    types: BTreeMap<String, TypeRecord>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("unknown type code: {0}")]
    UnknownType(String),
    #[error("unknown group: {0}")]
    UnknownGroup(String),
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// Stable machine code for the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::UnknownType(_) => "UNKNOWN_TYPE",
            CatalogError::UnknownGroup(_) => "UNKNOWN_GROUP",
            CatalogError::Invalid(_) => "INVALID_CATALOG",
        }
    }
}

/// Trim and uppercase user input before lookup; `intj` and `INTJ` are the
/// same selection.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

fn is_valid_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    chars.len() == CODE_AXES.len()
        && chars
            .iter()
            .zip(CODE_AXES.iter())
            .all(|(c, axis)| axis.contains(c))
}

impl Catalog {
    pub fn load() -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn lookup(&self, code: &str) -> Result<&TypeRecord, CatalogError> {
        self.types
            .get(code)
            .ok_or_else(|| CatalogError::UnknownType(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.types.contains_key(code)
    }

    /// Codes in stable (alphabetical) order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &TypeRecord)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Enforces the fixed-enumeration invariants: exactly 16 well-formed
    /// codes, known groups, compatibility lists that reference real codes,
    /// stay disjoint and never include the type itself, and fully populated
    /// tips and deep-analysis text.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.types.len() != TYPE_COUNT {
            return Err(CatalogError::Invalid(format!(
                "expected {} types, found {}",
                TYPE_COUNT,
                self.types.len()
            )));
        }

        for (code, rec) in &self.types {
            if !is_valid_code(code) {
                return Err(CatalogError::Invalid(format!("malformed code: {}", code)));
            }
            if !GROUP_NAMES.contains(&rec.group.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "{}: unknown group {}",
                    code, rec.group
                )));
            }

            let sets = [
                ("best", &rec.compatibility.best),
                ("good", &rec.compatibility.good),
                ("bad", &rec.compatibility.bad),
            ];
            let mut seen: Vec<&str> = Vec::new();
            for (set_name, set) in sets {
                for peer in set {
                    if !self.types.contains_key(peer) {
                        return Err(CatalogError::Invalid(format!(
                            "{}: {} set references unknown code {}",
                            code, set_name, peer
                        )));
                    }
                    if peer == code {
                        return Err(CatalogError::Invalid(format!(
                            "{}: {} set contains the type itself",
                            code, set_name
                        )));
                    }
                    if seen.contains(&peer.as_str()) {
                        return Err(CatalogError::Invalid(format!(
                            "{}: {} appears in more than one compatibility set",
                            code, peer
                        )));
                    }
                    seen.push(peer.as_str());
                }
            }

            let tip_lists = TIP_CATEGORIES
                .iter()
                .zip([&rec.tips.love, &rec.tips.work, &rec.tips.friendship]);
            for (category, tips) in tip_lists {
                if tips.is_empty() || tips.iter().any(|t| t.trim().is_empty()) {
                    return Err(CatalogError::Invalid(format!(
                        "{}: empty {} tips",
                        code, category
                    )));
                }
            }

            let deep = &rec.deep_analysis;
            let fields = [
                ("psychology", &deep.psychology),
                ("growth", &deep.growth),
                ("career", &deep.career),
                ("stress", &deep.stress),
            ];
            for (field, text) in fields {
                if text.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "{}: empty deep_analysis.{}",
                        code, field
                    )));
                }
            }
        }
        Ok(())
    }
}
