use std::path::Path;

use serde::Serialize;

use trackgrid_rs::parse_grid;

use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::output;

#[derive(Serialize)]
struct ValidateOutput {
    file: String,
    exists: bool,
    valid: bool,
    n_matrices: Option<usize>,
    n_rois: Option<usize>,
    matrix_names: Option<Vec<String>>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let path = Path::new(&args.grid_file);
    let exists = path.is_file();

    let mut result = ValidateOutput {
        file: args.grid_file.clone(),
        exists,
        valid: false,
        n_matrices: None,
        n_rois: None,
        matrix_names: None,
        error: None,
    };

    if !exists {
        result.error = Some(format!("Grid file not found: {}", args.grid_file));
    } else {
        match std::fs::read_to_string(path) {
            Err(e) => {
                result.error = Some(format!("Failed to read '{}': {}", args.grid_file, e));
            }
            Ok(content) => match parse_grid(&content) {
                Err(e) => {
                    result.error = Some(e.to_string());
                }
                Ok(grid) => {
                    result.valid = true;
                    result.n_matrices = Some(grid.len());
                    result.n_rois = Some(grid.n_rois());
                    result.matrix_names = Some(grid.names.clone());
                }
            },
        }
    }

    if args.json {
        match output::to_json(&result) {
            Ok(json) => {
                if let Err(e) = output::write_stdout(&json) {
                    eprintln!("Error: {}", e);
                    return exit_codes::EXECUTION_ERROR;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return exit_codes::EXECUTION_ERROR;
            }
        }
    } else if let Some(ref err) = result.error {
        eprintln!("Error: {}", err);
    } else {
        println!(
            "File '{}' is a valid grid: {} matrices, {} ROIs",
            args.grid_file,
            result.n_matrices.unwrap_or(0),
            result.n_rois.unwrap_or(0)
        );
    }

    if result.error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
