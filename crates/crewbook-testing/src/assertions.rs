//! Assertions over the `{"badge": .., "content": ..}` envelope.

use anyhow::{Context, Result};
use serde_json::Value;

/// Id of a freshly created row (`content.id`).
pub fn created_id(json: &Value) -> Result<i64> {
    json["content"]["id"]
        .as_i64()
        .context("Expected 'content.id' in JSON")
}

/// Assert the badge level, e.g. `success` or `info`.
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}

/// Rows of the table at `content.<key>`; tables serialize as arrays of objects.
pub fn table_rows<'a>(json: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    json["content"][key]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", key))
}

/// Assert the number of rows in the table at `content.<key>`.
pub fn assert_table_rows(json: &Value, key: &str, expected: usize) -> Result<()> {
    let rows = table_rows(json, key)?;
    if rows.len() != expected {
        anyhow::bail!("Expected {} rows in {}, got {}", expected, key, rows.len());
    }
    Ok(())
}

/// Assert the error envelope kind, e.g. `duplicate` or `validation`.
pub fn assert_error_kind(json: &Value, expected: &str) -> Result<()> {
    let kind = json["content"]["kind"]
        .as_str()
        .context("Expected 'content.kind' in JSON")?;
    if kind != expected {
        anyhow::bail!("Expected error kind {}, got {}", expected, kind);
    }
    Ok(())
}
