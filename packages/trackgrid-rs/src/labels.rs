//! ROI labeltable parsing and merging.
//!
//! AFNI atlases carry their ROI names in a NIML labeltable, dumped as text
//! by `3dinfo -labeltable`. Rows are `"index" "label"` pairs wrapped in
//! markup tags. Merging appends selected ROIs from a second network onto a
//! primary network, renumbering them past the primary's highest index so a
//! combined network file can be fed back to 3dTrackID.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::{GridError, Result};

/// One `<index> <label>` row of a labeltable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub index: i64,
    pub label: String,
}

/// A labeltable held sorted by ascending ROI index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    rows: Vec<LabelRow>,
}

impl LabelTable {
    /// Parse `3dinfo -labeltable` output.
    ///
    /// Markup tags are stripped, quoted tokens are unquoted, and each
    /// remaining non-blank line must read `<index> <label...>`. Rows come
    /// back sorted by index; duplicate indices are an error.
    pub fn parse(text: &str) -> Result<Self> {
        let tag_re = Regex::new(r"<[^>]*>")
            .map_err(|e| GridError::LabelTableError(format!("invalid tag pattern: {}", e)))?;
        let clean = tag_re.replace_all(text, "");

        let mut rows: Vec<LabelRow> = Vec::new();
        let mut seen: HashSet<i64> = HashSet::new();
        for raw in clean.lines() {
            let mut parts = raw.split_whitespace().map(|t| t.trim_matches('"'));
            let first = match parts.next() {
                Some(t) => t,
                None => continue,
            };
            let index: i64 = first.parse().map_err(|_| {
                GridError::LabelTableError(format!("'{}' is not an integer ROI index", first))
            })?;
            let label = parts.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                return Err(GridError::LabelTableError(format!(
                    "row for index {} has no label",
                    index
                )));
            }
            if !seen.insert(index) {
                return Err(GridError::LabelTableError(format!(
                    "duplicate ROI index {}",
                    index
                )));
            }
            rows.push(LabelRow { index, label });
        }
        rows.sort_by_key(|r| r.index);
        Ok(LabelTable { rows })
    }

    /// Rows in ascending index order (appended rows last).
    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest ROI index in the table, if any.
    pub fn max_index(&self) -> Option<i64> {
        self.rows.iter().map(|r| r.index).max()
    }

    /// Render as `.1D` text: one `<index> <label>` line per row.
    pub fn to_1d_string(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&format!("{} {}\n", row.index, row.label));
        }
        out
    }
}

/// Append selected ROIs from `secondary` onto `primary`.
///
/// Each selected index must exist in the secondary table; its label is
/// appended with a fresh index `max(primary) + 1 + position`, so appended
/// rows keep the caller's order. One row is appended per selected index.
/// An empty selection, or no secondary table at all, returns the primary
/// unchanged.
pub fn merge(
    primary: &LabelTable,
    secondary: Option<&LabelTable>,
    selected: &[i64],
) -> Result<LabelTable> {
    let mut merged = primary.clone();
    let secondary = match secondary {
        Some(s) if !selected.is_empty() => s,
        _ => return Ok(merged),
    };

    let max_index = match primary.max_index() {
        Some(m) => m,
        None => {
            return Err(GridError::LabelTableError(
                "primary label table is empty; appended ROIs cannot be renumbered".to_string(),
            ))
        }
    };

    let by_index: HashMap<i64, &LabelRow> =
        secondary.rows().iter().map(|r| (r.index, r)).collect();

    for (offset, &index) in selected.iter().enumerate() {
        let row = by_index.get(&index).ok_or(GridError::RoiNotFound(index))?;
        merged.rows.push(LabelRow {
            index: max_index + 1 + offset as i64,
            label: row.label.clone(),
        });
    }
    Ok(merged)
}

/// Merge two labeltable dumps into `.1D` text in one call.
pub fn merge_labeltables(
    primary_text: &str,
    secondary_text: Option<&str>,
    selected: &[i64],
) -> Result<String> {
    let primary = LabelTable::parse(primary_text)?;
    let secondary = match secondary_text {
        Some(text) => Some(LabelTable::parse(text)?),
        None => None,
    };
    let merged = merge(&primary, secondary.as_ref(), selected)?;
    Ok(merged.to_1d_string())
}
