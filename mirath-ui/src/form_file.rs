//! Filling the in-memory form from a TOML file and `--set id=value` flags.

use std::{fs, path::Path};

use anyhow::{Context, bail};
use mirath_core::form::{ControlId, ControlKind, FormControls};
use tracing::warn;

/// Applies one `id = value` entry, the way a user would fill the control.
///
/// Checkboxes take a boolean (`true`/`false`, also accepted as text); every
/// other control takes its text as typed. Unknown ids are skipped with a
/// warning.
pub fn apply_entry(
    form: &mut dyn FormControls,
    key: &str,
    value: &toml::Value,
) -> anyhow::Result<()> {
    let Some(id) = ControlId::parse(key) else {
        warn!(control = key, "ignoring unknown control");
        return Ok(());
    };

    match (id.kind(), value) {
        (ControlKind::Checkbox, toml::Value::Boolean(checked)) => form.set_checked(id, *checked),
        (ControlKind::Checkbox, toml::Value::String(text)) => {
            form.set_checked(id, parse_flag(key, text)?)
        }
        (ControlKind::Checkbox, other) => {
            bail!("control '{key}' is a checkbox; expected true or false, got {other}")
        }
        (_, toml::Value::String(text)) => form.set_value(id, text),
        (_, toml::Value::Integer(n)) => form.set_value(id, &n.to_string()),
        (_, toml::Value::Float(x)) => form.set_value(id, &x.to_string()),
        (_, other) => bail!("control '{key}' expects text or a number, got {other}"),
    }
    Ok(())
}

fn parse_flag(
    key: &str,
    text: &str,
) -> anyhow::Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" | "" => Ok(false),
        _ => bail!("control '{key}' is a checkbox; expected true or false, got '{text}'"),
    }
}

/// Applies every top-level entry of a TOML document.
pub fn apply_toml(
    form: &mut dyn FormControls,
    raw: &str,
) -> anyhow::Result<()> {
    let table: toml::Table = toml::from_str(raw).context("invalid form file")?;
    for (key, value) in &table {
        apply_entry(form, key, value)?;
    }
    Ok(())
}

pub fn apply_file(
    form: &mut dyn FormControls,
    path: &Path,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read form file '{}'", path.display()))?;
    apply_toml(form, &raw).with_context(|| format!("in '{}'", path.display()))
}

/// Applies an `id=value` assignment from the command line.
pub fn apply_assignment(
    form: &mut dyn FormControls,
    assignment: &str,
) -> anyhow::Result<()> {
    let Some((key, value)) = assignment.split_once('=') else {
        bail!("expected id=value, got '{assignment}'");
    };
    apply_entry(form, key.trim(), &toml::Value::String(value.to_string()))
}
