//! JSON/text output helpers for the command layer.

use crate::domain::models::{ErrBody, ErrOut, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Neutral success with no payload, for no-op paths (nothing selected yet).
pub fn print_none(json: bool, note: &str) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: serde_json::Value::Null
            })?
        );
    } else {
        println!("{}", note);
    }
    Ok(())
}

/// Failure envelope; the caller decides the exit code.
pub fn print_err(json: bool, code: &str, message: &str) {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(&ErrOut {
            ok: false,
            error: ErrBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }) {
            println!("{}", body);
        }
    } else {
        eprintln!("error: {}", message);
    }
}
