use std::path::Path;

use trackgrid_rs::{parse_grid, store, MatrixStore};

use crate::cli::ConvertArgs;
use crate::exit_codes;

pub fn execute(args: ConvertArgs) -> i32 {
    let grid_path = Path::new(&args.grid_file);
    if !grid_path.is_file() {
        eprintln!("Error: Grid file not found: {}", args.grid_file);
        return exit_codes::INPUT_ERROR;
    }

    let content = match std::fs::read_to_string(grid_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", args.grid_file, e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let grid = match parse_grid(&content) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let mut data = match MatrixStore::from_grid(&grid) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    };
    if let Err(e) = data.augment_binary() {
        eprintln!("Error: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    let out_dir = Path::new(&args.out_dir);
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        eprintln!(
            "Error: Failed to create output directory '{}': {}",
            args.out_dir, e
        );
        return exit_codes::EXECUTION_ERROR;
    }

    let store_path = out_dir.join(store::STORE_FILENAME);
    if let Err(e) = data.save(&store_path) {
        eprintln!("Error: Failed to write store: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }
    if let Err(e) = store::write_roi_labels(out_dir, &grid.roi_labels) {
        eprintln!("Error: Failed to write ROI labels: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    eprintln!(
        "Converted {} matrices of {}x{} into {}",
        data.len(),
        grid.n_rois(),
        grid.n_rois(),
        store_path.display()
    );
    log::info!("Matrices: {}", data.names().join(", "));

    exit_codes::SUCCESS
}
