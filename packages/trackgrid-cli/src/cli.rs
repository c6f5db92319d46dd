use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "trackgrid",
    version,
    about = "AFNI 3dTrackID grid-matrix extraction tool",
    long_about = "Parse .grid connectivity matrices written by 3dTrackID, persist them as\n\
                  per-session binary stores, and export per-statistic CSV matrices across\n\
                  a subject's tractography sessions. Also merges ROI labeltables ahead of\n\
                  combined-network tracking runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a .grid file and persist its matrices as a binary store
    Convert(ConvertArgs),
    /// Export statistics from per-session stores as CSV matrices
    Export(ExportArgs),
    /// Merge ROI labeltables into one renumbered .1D network file
    Labels(LabelsArgs),
    /// List the known connectivity statistics
    Stats(StatsArgs),
    /// Show platform and data-root information
    Info(InfoArgs),
    /// Validate a .grid file without writing anything
    Validate(ValidateArgs),
}

/// Tractography mode directories under a subject's track/ tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrackMode {
    /// Probabilistic tracking output
    Prob,
    /// Deterministic tracking output
    Det,
}

impl TrackMode {
    pub fn dir_name(&self) -> &'static str {
        match self {
            TrackMode::Prob => "prob",
            TrackMode::Det => "det",
        }
    }
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the .grid file to parse
    pub grid_file: String,

    /// Directory that receives the store and ROI label list
    pub out_dir: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Subject code (directory name under Projects/DWI)
    pub subject: String,

    /// Statistic names to export (e.g. NT FA SC_bin)
    #[arg(required = true)]
    pub stats: Vec<String>,

    /// Tractography mode
    #[arg(short, long, value_enum, default_value_t = TrackMode::Prob)]
    pub mode: TrackMode,

    /// Export from the csv/reformat working directories
    #[arg(short, long, conflicts_with = "alphabetical")]
    pub reformat: bool,

    /// Export from the csv/alphabetical working directories
    #[arg(short, long)]
    pub alphabetical: bool,

    /// Data share root (defaults to the platform's share mount)
    #[arg(long, env = "NEU_DIR")]
    pub root: Option<String>,
}

#[derive(Args)]
pub struct LabelsArgs {
    /// Labeltable of the base network, as dumped by `3dinfo -labeltable`
    pub labeltable: String,

    /// Path of the merged .1D file to write
    pub out_file: String,

    /// ROI indices to pick from the append table, in renumbering order
    #[arg(value_name = "APPEND_INDEX")]
    pub append_indices: Vec<i64>,

    /// Labeltable of the network to append ROIs from
    #[arg(short, long)]
    pub append: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Data share root (defaults to the platform's share mount)
    #[arg(long, env = "NEU_DIR")]
    pub root: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the .grid file to check
    pub grid_file: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
