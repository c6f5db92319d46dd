use serde::Serialize;

use trackgrid_rs::store::STORE_FILENAME;

use crate::cli::InfoArgs;
use crate::exit_codes;
use crate::output;
use crate::paths;

#[derive(Serialize)]
struct InfoOutput {
    cli_version: String,
    platform: String,
    arch: String,
    data_root: Option<String>,
    data_root_exists: bool,
    data_root_error: Option<String>,
    store_filename: &'static str,
}

pub fn execute(args: InfoArgs) -> i32 {
    let (data_root, data_root_error) = match paths::resolve_data_root(args.root.as_deref()) {
        Ok(root) => (Some(root), None),
        Err(msg) => (None, Some(msg)),
    };

    let info = InfoOutput {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        platform: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        data_root: data_root.as_ref().map(|p| p.display().to_string()),
        data_root_exists: data_root.as_ref().map(|p| p.is_dir()).unwrap_or(false),
        data_root_error,
        store_filename: STORE_FILENAME,
    };

    if args.json {
        match output::to_json(&info) {
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
        println!("trackgrid CLI v{}", info.cli_version);
        println!("Platform: {} ({})", info.platform, info.arch);
        println!();
        match (&info.data_root, &info.data_root_error) {
            (Some(root), _) => {
                let state = if info.data_root_exists {
                    "mounted"
                } else {
                    "not mounted"
                };
                println!("Data root: {} ({})", root, state);
            }
            (None, Some(err)) => println!("Data root: unavailable ({})", err),
            (None, None) => {}
        }
        println!("Store file: {}", info.store_filename);
        println!(
            "Override: --root or ${}",
            paths::DATA_ROOT_ENV_VAR
        );
    }

    exit_codes::SUCCESS
}
