//! Connectivity statistic definitions for 3dTrackID grid matrices.

use serde::Serialize;

/// Name of the derived binarized structural connectivity matrix.
pub const SC_BIN: &str = "SC_bin";

/// CSV cell formatting applied to a statistic on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvFormat {
    /// Truncating integer, no decimal point.
    Integer,
    /// Fixed two decimal places.
    Fixed2,
    /// Shortest round-trip float formatting.
    Float,
}

impl CsvFormat {
    /// Render one matrix value as a CSV cell.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            CsvFormat::Integer => format!("{}", value as i64),
            CsvFormat::Fixed2 => format!("{:.2}", value),
            CsvFormat::Float => format!("{}", value),
        }
    }
}

/// Complete statistic metadata
/// Note: Only Serialize is derived since static references can't be deserialized
#[derive(Debug, Clone, Serialize)]
pub struct StatMetadata {
    pub name: &'static str,
    /// Formatting rule for CSV export cells
    pub format: CsvFormat,
    /// Whether this toolkit derives the matrix rather than reading it from the grid
    pub derived: bool,
    pub description: &'static str,
}

impl StatMetadata {
    /// Look up a statistic by name
    pub fn from_name(name: &str) -> Option<&'static StatMetadata> {
        STAT_REGISTRY.iter().find(|s| s.name == name)
    }

    /// All known statistics in grid order, derived matrices last
    pub fn all() -> impl Iterator<Item = &'static StatMetadata> {
        STAT_REGISTRY.iter()
    }
}

/// CSV formatting rule for a statistic name.
///
/// Names outside the registry fall back to float formatting, so stores built
/// from grids with unrecognized matrices still export.
pub fn csv_format(name: &str) -> CsvFormat {
    match StatMetadata::from_name(name) {
        Some(s) => s.format,
        None => CsvFormat::Float,
    }
}

/// All registered statistic names, in registry order.
pub fn names() -> Vec<&'static str> {
    STAT_REGISTRY.iter().map(|s| s.name).collect()
}

// =============================================================================
// STATISTIC DEFINITIONS
// =============================================================================

/// Every statistic 3dTrackID writes into a .grid file, in the order the
/// matrices appear, plus the derived SC_bin matrix appended on conversion.
pub const STAT_REGISTRY: &[StatMetadata] = &[
    StatMetadata {
        name: "NT",
        format: CsvFormat::Float,
        derived: false,
        description: "Number of tracts in the bundle connecting the ROI pair",
    },
    StatMetadata {
        name: "fNT",
        format: CsvFormat::Float,
        derived: false,
        description: "Fractional number of tracts, normalized by the total tract count",
    },
    StatMetadata {
        name: "PV",
        format: CsvFormat::Float,
        derived: false,
        description: "Physical volume of the connecting bundle in mm^3",
    },
    StatMetadata {
        name: "fNV",
        format: CsvFormat::Float,
        derived: false,
        description: "Fractional number of bundle voxels, normalized by the network total",
    },
    StatMetadata {
        name: "NV",
        format: CsvFormat::Float,
        derived: false,
        description: "Number of voxels in the connecting bundle",
    },
    StatMetadata {
        name: "BL",
        format: CsvFormat::Fixed2,
        derived: false,
        description: "Mean bundle length in mm",
    },
    StatMetadata {
        name: "sBL",
        format: CsvFormat::Fixed2,
        derived: false,
        description: "Standard deviation of bundle length in mm",
    },
    StatMetadata {
        name: "NTpTarVol",
        format: CsvFormat::Float,
        derived: false,
        description: "Tract count per unit target volume",
    },
    StatMetadata {
        name: "NTpTarSA",
        format: CsvFormat::Float,
        derived: false,
        description: "Tract count per unit target surface area",
    },
    StatMetadata {
        name: "NTpTarSAFA",
        format: CsvFormat::Float,
        derived: false,
        description: "Tract count per unit target surface area bordering suprathreshold FA",
    },
    StatMetadata {
        name: "FA",
        format: CsvFormat::Float,
        derived: false,
        description: "Mean fractional anisotropy along the bundle",
    },
    StatMetadata {
        name: "sFA",
        format: CsvFormat::Float,
        derived: false,
        description: "Standard deviation of fractional anisotropy along the bundle",
    },
    StatMetadata {
        name: "MD",
        format: CsvFormat::Float,
        derived: false,
        description: "Mean diffusivity along the bundle",
    },
    StatMetadata {
        name: "sMD",
        format: CsvFormat::Float,
        derived: false,
        description: "Standard deviation of mean diffusivity along the bundle",
    },
    StatMetadata {
        name: "L1",
        format: CsvFormat::Float,
        derived: false,
        description: "Mean principal (axial) diffusivity along the bundle",
    },
    StatMetadata {
        name: "sL1",
        format: CsvFormat::Float,
        derived: false,
        description: "Standard deviation of principal diffusivity along the bundle",
    },
    StatMetadata {
        name: "RD",
        format: CsvFormat::Float,
        derived: false,
        description: "Mean radial diffusivity along the bundle",
    },
    StatMetadata {
        name: "sRD",
        format: CsvFormat::Float,
        derived: false,
        description: "Standard deviation of radial diffusivity along the bundle",
    },
    StatMetadata {
        name: SC_BIN,
        format: CsvFormat::Integer,
        derived: true,
        description: "Binarized structural connectivity: 1 where any tract connects the pair",
    },
];

// =============================================================================
// TESTS
// =============================================================================
