use crate::catalog::{normalize_code, Catalog};
use crate::cli::{Cli, Commands};
use crate::domain::models::{
    AnalysisView, CompareReport, ListItem, SavedState, SelectionState, TipsView, TypeRecord,
};
use crate::services::compat::classify;
use crate::services::content::{deep_analysis_for, share_text, tips_for};
use crate::services::layout::plan_summary;
use crate::services::output::{print_none, print_one, print_out};
use crate::services::settings::Settings;
use crate::services::storage::{audit, save_state};

pub fn handle_commands(
    cli: &Cli,
    catalog: &Catalog,
    settings: &Settings,
    mut state: SelectionState,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List => {
            let items: Vec<ListItem> = catalog
                .records()
                .map(|(code, rec)| ListItem {
                    code: code.to_string(),
                    name: rec.name.clone(),
                    title: rec.title.clone(),
                    group: rec.group.clone(),
                })
                .collect();
            print_out(cli.json, &items, |t| {
                format!("{}\t{}\t{}", t.code, t.title, t.group)
            })?;
        }
        Commands::Select { code } => {
            let code = normalize_code(code);
            let record = catalog.lookup(&code)?;
            state.selected = Some(code.clone());
            save_state(&SavedState {
                selected: state.selected.clone(),
            })?;
            audit("select", serde_json::json!({ "code": code }));
            print_one(cli.json, record.clone(), record_summary)?;
        }
        Commands::Show { code } => match resolve_code(catalog, code.as_deref(), &state) {
            Some(code) => {
                let record = catalog.lookup(&code)?;
                print_one(cli.json, record.clone(), record_summary)?;
            }
            None => print_none(cli.json, "no type selected")?,
        },
        Commands::Match { code, other } => {
            let code = normalize_code(code);
            let other = normalize_code(other);
            let result = classify(catalog, &code, &other)?;
            print_one(cli.json, result, |r| {
                format!(
                    "{} {}\n{} × {} — trait overlap {}/4\n{}",
                    r.emoji, r.label, r.selected, r.other, r.overlap, r.description
                )
            })?;
        }
        Commands::Compare { code, other } => {
            let code = normalize_code(code);
            state.compare = Some(normalize_code(other));
            let other = state.compare.clone().unwrap_or_default();
            let left = catalog.lookup(&code)?.clone();
            let right = catalog.lookup(&other)?.clone();
            let result = classify(catalog, &code, &other)?;
            let report = CompareReport {
                left,
                right,
                result,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "{} {} — {}\n{} {} — {}\n\n{} {} (overlap {}/4)\n{}",
                    r.left.icon,
                    r.left.name,
                    r.left.title,
                    r.right.icon,
                    r.right.name,
                    r.right.title,
                    r.result.emoji,
                    r.result.label,
                    r.result.overlap,
                    r.result.description
                )
            })?;
        }
        Commands::Tips { code, category } => {
            if let Some(category) = category {
                state.category = category.clone();
            }
            match resolve_code(catalog, code.as_deref(), &state) {
                Some(code) => {
                    let record = catalog.lookup(&code)?;
                    let view = TipsView {
                        code: code.clone(),
                        category: state.category.clone(),
                        tips: tips_for(record, &state.category).to_vec(),
                    };
                    print_one(cli.json, view, |v| {
                        v.tips
                            .iter()
                            .map(|tip| format!("- {}", tip))
                            .collect::<Vec<_>>()
                            .join("\n")
                    })?;
                }
                None => print_none(cli.json, "no type selected")?,
            }
        }
        Commands::Analysis { code } => match resolve_code(catalog, code.as_deref(), &state) {
            Some(code) => {
                let record = catalog.lookup(&code)?;
                let deep = deep_analysis_for(catalog, &code)?;
                if !cli.json {
                    countdown(settings.gate.seconds);
                }
                audit("analysis", serde_json::json!({ "code": code }));
                let view = AnalysisView {
                    code: code.clone(),
                    name: record.name.clone(),
                    title: record.title.clone(),
                    deep_analysis: deep.clone(),
                };
                print_one(cli.json, view, |v| {
                    format!(
                        "🧠 Psychology\n{}\n\n🌱 Growth\n{}\n\n💼 Career\n{}\n\n⚡ Stress\n{}",
                        v.deep_analysis.psychology,
                        v.deep_analysis.growth,
                        v.deep_analysis.career,
                        v.deep_analysis.stress
                    )
                })?;
            }
            None => print_none(cli.json, "no type selected")?,
        },
        Commands::Card { code } => match resolve_code(catalog, code.as_deref(), &state) {
            Some(code) => {
                let record = catalog.lookup(&code)?;
                let plan = plan_summary(record, &settings.render, &mut rand::thread_rng())?;
                audit("card", serde_json::json!({ "code": code }));
                print_one(cli.json, plan, |p| {
                    let mut out = format!(
                        "card {}x{} — gradient {} → {} ({}), {} circles",
                        p.canvas_size,
                        p.canvas_size,
                        p.background.from,
                        p.background.to,
                        p.background.group,
                        p.circles.len()
                    );
                    for op in &p.ops {
                        out.push_str(&format!("\n  y={:>4} [{}] {}", op.y, op.font, op.text));
                    }
                    out
                })?;
            }
            None => print_none(cli.json, "no type selected")?,
        },
        Commands::Share { code } => match resolve_code(catalog, code.as_deref(), &state) {
            Some(code) => {
                let record = catalog.lookup(&code)?;
                audit("share", serde_json::json!({ "code": code }));
                print_one(cli.json, share_text(record), |t| t.clone())?;
            }
            None => print_none(cli.json, "no type selected")?,
        },
        Commands::Validate => {
            catalog.validate()?;
            print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
        }
    }

    Ok(())
}

/// Explicit argument wins over the saved selection; both are catalog-checked.
fn resolve_code(catalog: &Catalog, arg: Option<&str>, state: &SelectionState) -> Option<String> {
    match arg {
        Some(raw) => Some(normalize_code(raw)),
        None => state
            .selected
            .clone()
            .filter(|code| catalog.contains(code)),
    }
}

fn record_summary(record: &TypeRecord) -> String {
    format!(
        "{} {} — {}\n{}\n\nenergy: {}\nmind: {}\nnature: {}\ntactic: {}\n\n💕 best: {}\n😊 good: {}\n⚡ bad: {}",
        record.icon,
        record.name,
        record.title,
        record.description,
        record.traits.energy,
        record.traits.mind,
        record.traits.nature,
        record.traits.tactic,
        record.compatibility.best.join(", "),
        record.compatibility.good.join(", "),
        record.compatibility.bad.join(", ")
    )
}

/// The interstitial gate: a fixed countdown before the deep-analysis payload.
/// Machine-readable output skips it; the duration itself is config-owned.
fn countdown(seconds: u64) {
    for remaining in (1..=seconds).rev() {
        println!("unlocking deep analysis in {}...", remaining);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
}
