//! Summary-card layout planning.
//!
//! Produces a fully specified draw plan for an external rasterizer: a square
//! canvas, a group-keyed background gradient, decorative circles, and text
//! instructions in a fixed order. The circles are the only non-deterministic
//! part and carry no meaning.

use crate::catalog::CatalogError;
use crate::domain::constants::SHARE_URL;
use crate::domain::models::{CircleSpec, DrawOp, GradientSpec, LayoutPlan, TypeRecord};
use crate::services::settings::RenderSettings;
use rand::Rng;

/// Fixed group → gradient mapping. Unknown groups can only come from a
/// hand-edited catalog that skipped validation.
pub fn palette(group: &str) -> Result<(&'static str, &'static str), CatalogError> {
    match group {
        "analyst" => Ok(("#6a0dad", "#9b59b6")),
        "diplomat" => Ok(("#1e8449", "#2ecc71")),
        "sentinel" => Ok(("#1a5276", "#3498db")),
        "explorer" => Ok(("#b9770e", "#f1c40f")),
        other => Err(CatalogError::UnknownGroup(other.to_string())),
    }
}

/// Greedy word wrap against an injected measurement function (the rasterizer
/// knows real glyph widths; the default measure is character count). A single
/// word wider than `max_units` gets its own line rather than being split.
pub fn wrap_text(text: &str, max_units: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if measure(&candidate) <= max_units || line.is_empty() {
            line = candidate;
        } else {
            lines.push(line);
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn measure_chars(text: &str) -> u32 {
    text.chars().count() as u32
}

fn at(size: u32, frac: f32) -> u32 {
    (size as f32 * frac) as u32
}

fn text_op(text: impl Into<String>, x: u32, y: u32, font: &str, color: &str) -> DrawOp {
    DrawOp {
        text: text.into(),
        x,
        y,
        font: font.to_string(),
        color: color.to_string(),
    }
}

fn decorative_circles<R: Rng>(rng: &mut R, count: u32, size: u32) -> Vec<CircleSpec> {
    let min_radius = (size / 54).max(1);
    let max_radius = (size / 9).max(min_radius + 1);
    (0..count)
        .map(|_| CircleSpec {
            x: rng.gen_range(0..size),
            y: rng.gen_range(0..size),
            radius: rng.gen_range(min_radius..=max_radius),
        })
        .collect()
}

/// Plans the shareable summary card for one type record.
///
/// Text ops come out in a fixed order: heading, icon, name, quoted title,
/// wrapped description, best-match line, call to action, branding.
pub fn plan_summary<R: Rng>(
    record: &TypeRecord,
    render: &RenderSettings,
    rng: &mut R,
) -> Result<LayoutPlan, CatalogError> {
    let (from, to) = palette(&record.group)?;
    let size = render.canvas_size;
    let cx = size / 2;

    let mut ops = vec![
        text_op("MBTI Compatibility & Tips", cx, at(size, 0.10), "heading", "muted"),
        text_op(record.icon.as_str(), cx, at(size, 0.28), "icon", "ink"),
        text_op(record.name.as_str(), cx, at(size, 0.40), "name", "ink"),
        text_op(format!("“{}”", record.title), cx, at(size, 0.46), "title", "accent"),
    ];

    let desc_top = at(size, 0.54);
    let line_step = at(size, 0.04);
    let lines = wrap_text(&record.description, render.max_line_units, measure_chars);
    let line_count = lines.len() as u32;
    for (i, line) in lines.into_iter().enumerate() {
        ops.push(text_op(line, cx, desc_top + i as u32 * line_step, "body", "ink"));
    }

    let best_y = desc_top + line_count * line_step + at(size, 0.04);
    ops.push(text_op(
        format!("💕 Best match: {}", record.compatibility.best.join(", ")),
        cx,
        best_y,
        "body",
        "ink",
    ));
    ops.push(text_op(
        "What's your match? Find out 👇",
        cx,
        best_y + line_step,
        "body",
        "accent",
    ));
    ops.push(text_op(SHARE_URL, cx, at(size, 0.95), "footnote", "muted"));

    Ok(LayoutPlan {
        canvas_size: size,
        background: GradientSpec {
            group: record.group.clone(),
            from: from.to_string(),
            to: to.to_string(),
        },
        circles: decorative_circles(rng, render.circle_count, size),
        ops,
    })
}
