use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hashtag_plots::ChartStyle;

mod alternative_reduce;
mod visualize;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Font family for chart text, use eg. "Noto Sans" for hashtags in
    /// non-Latin scripts.
    #[arg(long, global = true, default_value = "sans-serif")]
    font: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Plot daily tweet counts per hashtag using individual mapping output
    /// files.
    AlternativeReduce {
        /// List of hashtags to plot (e.g., "#coronavirus" "#코로나바이러스").
        #[arg(long, required = true, num_args = 1..)]
        hashtags: Vec<String>,

        /// Folder containing individual mapping output files.
        #[arg(long = "input_folder", default_value = "outputs")]
        input_folder: PathBuf,

        /// Output PNG file name, generated from the hashtags if not given.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Bar graph of the top 10 values under a key in a mapping file.
    Visualize {
        /// Mapping file to read.
        #[arg(long = "input_path")]
        input_path: PathBuf,

        /// Top-level key whose values are shown.
        #[arg(long)]
        key: String,

        /// Normalize values by the totals in the `_all` mapping.
        #[arg(long)]
        percent: bool,

        /// Output PNG file name.
        #[arg(long, default_value = "bargraph.png")]
        output: PathBuf,
    },
}

use Commands::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();

    let style = ChartStyle { font: cli.font };
    log::info!("Using font: {}", style.font);

    match cli.command {
        AlternativeReduce {
            hashtags,
            input_folder,
            output,
        } => alternative_reduce::run(hashtags, input_folder, output, &style),

        Visualize {
            input_path,
            key,
            percent,
            output,
        } => visualize::run(input_path, key, percent, output, &style),
    }
}
