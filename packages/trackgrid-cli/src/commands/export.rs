use std::time::Instant;

use trackgrid_rs::{stats, store, MatrixStore, StatMetadata};

use crate::cli::ExportArgs;
use crate::exit_codes;
use crate::paths::{self, CsvDirVariant};

pub fn execute(args: ExportArgs) -> i32 {
    if let Err(msg) = validate_stat_names(&args.stats) {
        eprintln!("Error: {}", msg);
        return exit_codes::INPUT_ERROR;
    }

    // Unsupported hosts stop here, before any filesystem work
    let root = match paths::resolve_data_root(args.root.as_deref()) {
        Ok(r) => r,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::UNSUPPORTED_PLATFORM;
        }
    };

    let track_dir = paths::track_dir(&root, &args.subject, args.mode);
    if !track_dir.is_dir() {
        eprintln!("Error: Track directory not found: {}", track_dir.display());
        return exit_codes::INPUT_ERROR;
    }

    let sessions = match paths::session_dirs(&track_dir) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };
    if sessions.is_empty() {
        eprintln!(
            "Error: No session directories under {}",
            track_dir.display()
        );
        return exit_codes::INPUT_ERROR;
    }

    let variant = CsvDirVariant::from_flags(args.reformat, args.alphabetical);

    let mut written = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;
    let start_time = Instant::now();

    for session in &sessions {
        let wdir = paths::csv_dir(session, variant);
        let store_path = wdir.join(store::STORE_FILENAME);

        // A session without a converted store is reported and skipped, so
        // one missing directory never aborts its siblings
        if !store_path.is_file() {
            eprintln!("Missing store: {} (skipping)", store_path.display());
            skipped += 1;
            continue;
        }

        eprintln!("Working on {}...", wdir.display());

        let data = match MatrixStore::load(&store_path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("  Error loading {}: {}", store_path.display(), e);
                failed += args.stats.len();
                continue;
            }
        };

        for stat in &args.stats {
            match data.export_csv(stat, &wdir) {
                Ok(path) => {
                    log::info!("Wrote {}", path.display());
                    written += 1;
                }
                Err(e) => {
                    eprintln!("  Error: {}", e);
                    failed += 1;
                }
            }
        }
    }

    let elapsed = start_time.elapsed();
    eprintln!(
        "Export complete: {} written, {} failed, {} session(s) skipped, {:.1}s",
        written,
        failed,
        skipped,
        elapsed.as_secs_f64()
    );

    if failed == 0 {
        exit_codes::SUCCESS
    } else if written > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::EXECUTION_ERROR
    }
}

fn validate_stat_names(names: &[String]) -> Result<(), String> {
    for name in names {
        if StatMetadata::from_name(name).is_none() {
            return Err(format!(
                "Unknown statistic '{}'. Valid statistics: {}",
                name,
                stats::names().join(", ")
            ));
        }
    }
    Ok(())
}
