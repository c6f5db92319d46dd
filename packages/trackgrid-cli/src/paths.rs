//! Directory layout of the DWI tractography share.
//!
//! Subject data lives under `<root>/Projects/DWI/<subject>/track/<mode>/`,
//! one two-digit session directory per scan, each with a `csv/` working
//! directory holding the persisted matrix store and its CSV exports.

use std::path::{Path, PathBuf};

use crate::cli::TrackMode;

/// Environment variable overriding the data share root.
pub const DATA_ROOT_ENV_VAR: &str = "NEU_DIR";
/// Share mount point on macOS hosts.
pub const MACOS_DATA_ROOT: &str = "/Volumes/Shares/NEU";
/// Share mount point on Linux hosts.
pub const LINUX_DATA_ROOT: &str = "/shares/NEU";

/// Which csv working directory inside a session to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvDirVariant {
    Standard,
    Reformat,
    Alphabetical,
}

impl CsvDirVariant {
    pub fn from_flags(reformat: bool, alphabetical: bool) -> Self {
        if reformat {
            CsvDirVariant::Reformat
        } else if alphabetical {
            CsvDirVariant::Alphabetical
        } else {
            CsvDirVariant::Standard
        }
    }
}

/// Resolve the data share root.
///
/// An explicit path (`--root` or `$NEU_DIR`) always wins; otherwise the
/// platform's share mount is used. Hosts other than Linux and macOS have no
/// mount convention and are rejected before any work happens.
pub fn resolve_data_root(explicit: Option<&str>) -> Result<PathBuf, String> {
    if let Some(root) = explicit {
        return Ok(PathBuf::from(root));
    }
    if cfg!(target_os = "macos") {
        Ok(PathBuf::from(MACOS_DATA_ROOT))
    } else if cfg!(target_os = "linux") {
        Ok(PathBuf::from(LINUX_DATA_ROOT))
    } else {
        Err(format!(
            "Unsupported platform '{}': no data share mount known. Pass --root or set ${}",
            std::env::consts::OS,
            DATA_ROOT_ENV_VAR
        ))
    }
}

/// Track directory for one subject and tracking mode.
pub fn track_dir(root: &Path, subject: &str, mode: TrackMode) -> PathBuf {
    root.join("Projects")
        .join("DWI")
        .join(subject)
        .join("track")
        .join(mode.dir_name())
}

/// Two-digit session directories under a track directory, sorted.
pub fn session_dirs(track_dir: &Path) -> Result<Vec<PathBuf>, String> {
    let pattern = track_dir.join("[0-9][0-9]");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| format!("Non-UTF-8 path: {}", track_dir.display()))?;

    let paths =
        glob::glob(pattern).map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_dir() {
                    dirs.push(path);
                }
            }
            Err(e) => {
                eprintln!("Warning: glob error: {}", e);
            }
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// CSV working directory inside one session directory.
pub fn csv_dir(session_dir: &Path, variant: CsvDirVariant) -> PathBuf {
    let base = session_dir.join("csv");
    match variant {
        CsvDirVariant::Standard => base,
        CsvDirVariant::Reformat => base.join("reformat"),
        CsvDirVariant::Alphabetical => base.join("alphabetical"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_root_wins() {
        let root = resolve_data_root(Some("/data/override")).unwrap();
        assert_eq!(root, PathBuf::from("/data/override"));
    }

    #[test]
    fn test_track_dir_layout() {
        let dir = track_dir(Path::new("/shares/NEU"), "subj01", TrackMode::Prob);
        assert_eq!(
            dir,
            PathBuf::from("/shares/NEU/Projects/DWI/subj01/track/prob")
        );
        let dir = track_dir(Path::new("/shares/NEU"), "subj01", TrackMode::Det);
        assert!(dir.ends_with("track/det"));
    }

    #[test]
    fn test_session_dirs_matches_two_digit_names_only() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("01")).unwrap();
        fs::create_dir(tmp.path().join("02")).unwrap();
        fs::create_dir(tmp.path().join("3")).unwrap();
        fs::create_dir(tmp.path().join("abc")).unwrap();
        fs::create_dir(tmp.path().join("010")).unwrap();
        fs::write(tmp.path().join("99"), "a file, not a session").unwrap();

        let dirs = session_dirs(tmp.path()).unwrap();
        let names: Vec<&str> = dirs
            .iter()
            .filter_map(|d| d.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["01", "02"]);
    }

    #[test]
    fn test_session_dirs_empty_when_track_dir_missing() {
        let dirs = session_dirs(Path::new("/nonexistent_dir_12345")).unwrap();
        assert!(dirs.is_empty());
    }

    #[test]
    fn test_csv_dir_variants() {
        let session = Path::new("/data/track/prob/01");
        assert_eq!(
            csv_dir(session, CsvDirVariant::Standard),
            PathBuf::from("/data/track/prob/01/csv")
        );
        assert_eq!(
            csv_dir(session, CsvDirVariant::Reformat),
            PathBuf::from("/data/track/prob/01/csv/reformat")
        );
        assert_eq!(
            csv_dir(session, CsvDirVariant::Alphabetical),
            PathBuf::from("/data/track/prob/01/csv/alphabetical")
        );
    }

    #[test]
    fn test_csv_dir_variant_from_flags() {
        assert_eq!(CsvDirVariant::from_flags(false, false), CsvDirVariant::Standard);
        assert_eq!(CsvDirVariant::from_flags(true, false), CsvDirVariant::Reformat);
        assert_eq!(CsvDirVariant::from_flags(false, true), CsvDirVariant::Alphabetical);
    }
}
