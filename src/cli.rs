use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mbti-tips", version, about = "MBTI compatibility & tips CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the 16 types
    List,
    /// Pick a type and remember it
    Select {
        code: String,
    },
    /// Show a type (defaults to the saved selection)
    Show {
        code: Option<String>,
    },
    /// Classify the compatibility of two types
    Match {
        code: String,
        other: String,
    },
    /// Side-by-side view of two types plus their classification
    Compare {
        code: String,
        other: String,
    },
    /// Contextual tips for a type
    Tips {
        code: Option<String>,
        #[arg(long, help = "Tip category (love, work, friendship)")]
        category: Option<String>,
    },
    /// Deep analysis (behind the countdown in interactive mode)
    Analysis {
        code: Option<String>,
    },
    /// Summary-card draw plan for the rasterizer
    Card {
        code: Option<String>,
    },
    /// Shareable result text
    Share {
        code: Option<String>,
    },
    /// Check the embedded catalog against its invariants
    Validate,
}
