//! Parser for `.grid` files written by AFNI's 3dTrackID.
//!
//! A grid file interleaves comment lines with whitespace-separated data:
//!
//! ```text
//! # 3          # Number of network ROIs
//! # 19         # Number of grid matrices
//! # WITH_ROI_LABELS
//! precuneus   hippocampus   insula
//! 1   2   3
//! # NT
//! 0.0   21.0   0.0
//! 21.0   0.0   9.0
//! 0.0   9.0   0.0
//! # fNT
//! ...
//! ```
//!
//! Every comment line contributes a name candidate: the text after the last
//! `# ` on the line. The first three candidates are file preamble; the rest
//! name the matrices in order. The first two non-comment lines carry the ROI
//! labels and the ROI integer indices; both are dropped from the numeric body
//! before it is reshaped into consecutive square matrices.

use crate::error::{GridError, Result};
use crate::matrix::Matrix;

/// Marker that starts a comment line.
const COMMENT_MARKER: char = '#';
/// Separator preceding the name payload on a comment line.
const NAME_SEPARATOR: &str = "# ";

/// Leading comment-derived name candidates that belong to the file preamble.
pub const STRUCTURAL_HEADER_LINES: usize = 3;
/// Leading non-comment rows (ROI labels, ROI indices) excluded from the body.
pub const BODY_HEADER_ROWS: usize = 2;
/// Absolute 0-based line index of the ROI label row.
pub const ROI_LABEL_LINE: usize = 3;

/// Parsed contents of one 3dTrackID grid file.
#[derive(Debug, Clone)]
pub struct GridFile {
    /// Matrix names in file order (NT, fNT, ...)
    pub names: Vec<String>,
    /// Square matrices in the same order as `names`
    pub matrices: Vec<Matrix>,
    /// ROI labels from the header row, in column order
    pub roi_labels: Vec<String>,
}

impl GridFile {
    /// Number of ROIs (matrix side length).
    pub fn n_rois(&self) -> usize {
        self.roi_labels.len()
    }

    /// Number of matrices in the file.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

/// Parse the full text of a grid file into named square matrices.
///
/// The body must tokenize into rows of uniform width W, and after dropping
/// the two header rows the remaining row count must be an exact multiple of
/// W. Ragged rows, non-numeric tokens, leftover rows and name/matrix count
/// mismatches are all hard errors rather than silent truncation.
pub fn parse_grid(content: &str) -> Result<GridFile> {
    // Name candidates from comment lines, and tokenized data rows with
    // 1-based line numbers kept for error reporting.
    let mut candidates: Vec<String> = Vec::new();
    let mut rows: Vec<(usize, Vec<&str>)> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(COMMENT_MARKER) {
            candidates.push(name_candidate(line));
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if let Some((first_no, first)) = rows.first() {
            if tokens.len() != first.len() {
                return Err(GridError::ParseError(format!(
                    "line {} has {} columns but line {} has {}",
                    idx + 1,
                    tokens.len(),
                    first_no,
                    first.len()
                )));
            }
        }
        rows.push((idx + 1, tokens));
    }

    let roi_labels = roi_label_row(content)?;

    if rows.len() <= BODY_HEADER_ROWS {
        return Err(GridError::ParseError(format!(
            "expected numeric data after {} header rows, found only {} data lines",
            BODY_HEADER_ROWS,
            rows.len()
        )));
    }
    let width = rows[0].1.len();

    if roi_labels.len() != width {
        return Err(GridError::ParseError(format!(
            "ROI label row names {} ROIs but data rows have {} columns",
            roi_labels.len(),
            width
        )));
    }

    // Numeric body: everything after the ROI label and ROI index rows
    let body = &rows[BODY_HEADER_ROWS..];
    let mut values = Vec::with_capacity(body.len() * width);
    for (line_no, tokens) in body {
        for token in tokens {
            let value: f64 = token.parse().map_err(|_| {
                GridError::ParseError(format!("line {}: '{}' is not a number", line_no, token))
            })?;
            values.push(value);
        }
    }

    let n_rows = body.len();
    if n_rows % width != 0 {
        return Err(GridError::ParseError(format!(
            "{} data rows do not divide into {}x{} matrices; grid body is truncated or corrupt",
            n_rows, width, width
        )));
    }
    let n_matrices = n_rows / width;

    let names: Vec<String> = candidates
        .into_iter()
        .skip(STRUCTURAL_HEADER_LINES)
        .collect();
    if names.len() != n_matrices {
        return Err(GridError::ParseError(format!(
            "found {} matrix names but {} matrices of data",
            names.len(),
            n_matrices
        )));
    }

    let mut matrices = Vec::with_capacity(n_matrices);
    for chunk in values.chunks(width * width) {
        matrices.push(Matrix::from_flat(width, chunk.to_vec())?);
    }

    log::info!(
        "Parsed grid: {} matrices of {}x{} ({} ROIs)",
        n_matrices,
        width,
        width,
        roi_labels.len()
    );
    log::debug!("Matrix names: {:?}", names);

    Ok(GridFile {
        names,
        matrices,
        roi_labels,
    })
}

/// Name candidate carried by a comment line: the text after the last `# `.
///
/// Preamble lines look like `# 3          # Number of network ROIs`, so
/// splitting at the last separator keeps the human-readable payload.
fn name_candidate(line: &str) -> String {
    match line.rsplit_once(NAME_SEPARATOR) {
        Some((_, payload)) => payload.trim().to_string(),
        None => line.trim().trim_start_matches(COMMENT_MARKER).trim().to_string(),
    }
}

/// ROI labels from the fixed header position.
fn roi_label_row(content: &str) -> Result<Vec<String>> {
    let line = content.lines().nth(ROI_LABEL_LINE).ok_or_else(|| {
        GridError::ParseError(format!(
            "file ends before line {}, which should carry the ROI labels",
            ROI_LABEL_LINE + 1
        ))
    })?;
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Err(GridError::ParseError(format!(
            "line {} should carry the ROI labels, found {}",
            ROI_LABEL_LINE + 1,
            if trimmed.is_empty() {
                "a blank line"
            } else {
                "a comment"
            }
        )));
    }
    Ok(trimmed.split_whitespace().map(str::to_string).collect())
}
