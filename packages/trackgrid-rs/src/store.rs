//! Named-matrix store: build, augment, persist and export grid matrices.
//!
//! A store holds the matrices of one grid file keyed by statistic name, in
//! parse order. It persists as a single binary blob per session directory
//! (`all_data.bin`) and exports individual statistics as CSV.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::matrix::Matrix;
use crate::parser::GridFile;
use crate::stats;

/// File name of the persisted store inside a session's csv directory.
pub const STORE_FILENAME: &str = "all_data.bin";
/// File name of the ROI label list written alongside the store.
pub const ROI_LABELS_FILENAME: &str = "roi_labels.txt";

/// Magic number for store files: "TGRID"
const MAGIC: &[u8; 5] = b"TGRID";

/// Current format version (increment when format changes)
const FORMAT_VERSION: u32 = 1;

/// Ordered collection of named square matrices from one grid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixStore {
    entries: Vec<(String, Matrix)>,
}

impl MatrixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed grid file, keeping parse order.
    pub fn from_grid(grid: &GridFile) -> Result<Self> {
        let mut store = Self::new();
        for (name, matrix) in grid.names.iter().zip(&grid.matrices) {
            store.insert(name.clone(), matrix.clone())?;
        }
        Ok(store)
    }

    /// Append a named matrix. Names must be unique within the store.
    pub fn insert(&mut self, name: String, matrix: Matrix) -> Result<()> {
        if self.get(&name).is_some() {
            return Err(GridError::InvalidParameter(format!(
                "matrix '{}' already present in store",
                name
            )));
        }
        self.entries.push((name, matrix));
        Ok(())
    }

    /// Matrix for a statistic name, if stored.
    pub fn get(&self, name: &str) -> Option<&Matrix> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, m)| m)
    }

    /// Statistic names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the binarized structural connectivity matrix from the first
    /// stored matrix (NT in 3dTrackID output) and append it as `SC_bin`.
    pub fn augment_binary(&mut self) -> Result<()> {
        if self.get(stats::SC_BIN).is_some() {
            return Err(GridError::InvalidParameter(format!(
                "matrix '{}' already present in store",
                stats::SC_BIN
            )));
        }
        let binarized = match self.entries.first() {
            Some((_, m)) => m.binarized(),
            None => {
                return Err(GridError::InvalidParameter(
                    "cannot derive SC_bin from an empty store".to_string(),
                ))
            }
        };
        self.entries.push((stats::SC_BIN.to_string(), binarized));
        Ok(())
    }

    /// Save the store to a file.
    ///
    /// # Format
    /// ```text
    /// [Header]
    /// - Magic: "TGRID" (5 bytes)
    /// - Version: u32 (4 bytes, little endian)
    /// - Checksum: u64 (8 bytes, little endian, FNV-1a of the data)
    /// [Data]
    /// - Bincode-serialized entries
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = bincode::serialize(self)
            .map_err(|e| GridError::SerializationError(e.to_string()))?;

        let mut file = File::create(path)?;
        file.write_all(MAGIC)?;
        file.write_all(&FORMAT_VERSION.to_le_bytes())?;
        file.write_all(&calculate_checksum(&data).to_le_bytes())?;
        file.write_all(&data)?;
        Ok(())
    }

    /// Load a store from a file, verifying magic, version and checksum.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GridError::FileNotFound(path.display().to_string()));
        }
        let mut file = File::open(path)?;

        let mut magic = [0u8; 5];
        file.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(GridError::InvalidMagic(magic));
        }

        let mut version_bytes = [0u8; 4];
        file.read_exact(&mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != FORMAT_VERSION {
            return Err(GridError::VersionMismatch {
                found: version,
                expected: FORMAT_VERSION,
            });
        }

        let mut checksum_bytes = [0u8; 8];
        file.read_exact(&mut checksum_bytes)?;
        let expected_checksum = u64::from_le_bytes(checksum_bytes);

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        if calculate_checksum(&data) != expected_checksum {
            return Err(GridError::ChecksumMismatch);
        }

        bincode::deserialize(&data).map_err(|e| GridError::DeserializationError(e.to_string()))
    }

    /// Export one statistic as `<name>.csv` in `dir` and return the path.
    ///
    /// The diagonal is zeroed on a working copy before writing; the stored
    /// matrix keeps its original values. Cells follow the statistic's
    /// formatting rule, comma-separated with no header row.
    pub fn export_csv<P: AsRef<Path>>(&self, stat_name: &str, dir: P) -> Result<PathBuf> {
        let matrix = self
            .get(stat_name)
            .ok_or_else(|| GridError::StatNotFound(stat_name.to_string()))?;

        let mut working = matrix.clone();
        working.zero_diagonal();
        let format = stats::csv_format(stat_name);

        let path = dir.as_ref().join(format!("{}.csv", stat_name));
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        for row in working.rows() {
            let cells: Vec<String> = row.iter().map(|&v| format.format_value(v)).collect();
            writeln!(writer, "{}", cells.join(","))?;
        }
        writer.flush()?;

        log::debug!("Wrote {} ({}x{})", path.display(), working.dim(), working.dim());
        Ok(path)
    }
}

/// Write the ROI label list as plain text, one label per line.
pub fn write_roi_labels<P: AsRef<Path>>(dir: P, labels: &[String]) -> Result<PathBuf> {
    let path = dir.as_ref().join(ROI_LABELS_FILENAME);
    let mut out = String::with_capacity(labels.iter().map(|l| l.len() + 1).sum());
    for label in labels {
        out.push_str(label);
        out.push('\n');
    }
    std::fs::write(&path, out)?;
    Ok(path)
}

/// FNV-1a hash of the serialized payload.
fn calculate_checksum(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
