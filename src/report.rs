//! Writes the human-readable comparison report.

use std::io::{
    self,
    Write,
};

use serde_json::Value;

use crate::arb::ArbFile;
use crate::diff::KeyDiff;

/// Write both report sections.
///
/// Each section starts with `Missing in <name>:` followed by one
/// `- <key>: <value>` line per missing key, with the value taken from the
/// file that has the key.
pub fn write_report<W: Write>(
    out: &mut W,
    base: &ArbFile,
    target: &ArbFile,
    diff: &KeyDiff,
) -> io::Result<()> {
    let (base_label, target_label) = section_labels(base, target);
    write_section(out, &target_label, base, &diff.missing_in_target)?;
    writeln!(out)?;
    write_section(out, &base_label, target, &diff.missing_in_base)?;
    out.flush()
}

/// Header labels for `(base, target)`.
///
/// Uses `ArbFile::display_name` unless both files share it (e.g. the same
/// `@@locale`), then the file names, then the full paths.
#[must_use]
pub fn section_labels(base: &ArbFile, target: &ArbFile) -> (String, String) {
    let (base_name, target_name) = (base.display_name(), target.display_name());
    if base_name != target_name {
        return (base_name, target_name);
    }

    let (base_file, target_file) = (file_name(base), file_name(target));
    if base_file != target_file {
        return (base_file, target_file);
    }

    (base.path().display().to_string(), target.path().display().to_string())
}

/// File name of the ARB file, or the whole path if it has none
fn file_name(file: &ArbFile) -> String {
    file.path().file_name().map_or_else(
        || file.path().display().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}

/// Write one section of the report.
fn write_section<W: Write>(
    out: &mut W,
    missing_from: &str,
    source: &ArbFile,
    keys: &[String],
) -> io::Result<()> {
    writeln!(out, "Missing in {missing_from}:")?;
    for key in keys {
        let value = source.get(key).map(format_value).unwrap_or_default();
        writeln!(out, "- {key}: {value}")?;
    }
    Ok(())
}

/// Strings are printed as-is, anything else as compact JSON.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
