use trackgrid_rs::StatMetadata;

use crate::cli::StatsArgs;
use crate::exit_codes;
use crate::output;

pub fn execute(args: StatsArgs) -> i32 {
    let all: Vec<&'static StatMetadata> = StatMetadata::all().collect();

    if args.json {
        match output::to_json(&all) {
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
    } else {
        println!("Known connectivity statistics:\n");
        println!("  {:<12} {:<9} {:<9} Description", "Name", "Format", "Source");
        println!("  {}", "-".repeat(78));
        for s in &all {
            let source = if s.derived { "derived" } else { "grid" };
            println!(
                "  {:<12} {:<9} {:<9} {}",
                s.name,
                format!("{:?}", s.format),
                source,
                s.description
            );
        }
        println!();
        println!("BL and sBL export with two decimals, SC_bin as bare integers.");
    }

    exit_codes::SUCCESS
}
