use trackgrid_rs::merge_labeltables;

use crate::cli::LabelsArgs;
use crate::exit_codes;

pub fn execute(args: LabelsArgs) -> i32 {
    // Merge fully before touching the output path, so a failed merge never
    // leaves a partial file behind
    let merged = match merge_labeltables(
        &args.labeltable,
        args.append.as_deref(),
        &args.append_indices,
    ) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    };

    if let Err(e) = std::fs::write(&args.out_file, &merged) {
        eprintln!("Error: Failed to write '{}': {}", args.out_file, e);
        return exit_codes::EXECUTION_ERROR;
    }

    eprintln!(
        "Wrote {} ROI(s) to {}",
        merged.lines().count(),
        args.out_file
    );
    exit_codes::SUCCESS
}
