//! Command implementations for the HPA CLI.
//!
//! Provides subcommands that generate the synthetic plant dataset and run
//! the regression, charting and forecasting steps over it.

use clap::Subcommand;
use std::path::PathBuf;

pub mod pipeline;

#[derive(Subcommand)]
pub enum Command {
    /// Generate the dataset, charts and forecast summary
    Run {
        /// Directory that receives every output file
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Only generate and save the synthetic dataset
    Generate {
        /// Directory that receives the workbook and its CSV companion
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Chart, fit and forecast from an existing dataset file
    Analyze {
        /// CSV dataset previously written by `generate` or `run`
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Directory that receives charts and the summary
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Run {
            output_dir: PathBuf::from("."),
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Run { output_dir } => {
            pipeline::run_pipeline(&output_dir)?;
        }
        Command::Generate { output_dir } => {
            pipeline::run_generate(&output_dir)?;
        }
        Command::Analyze { input, output_dir } => {
            pipeline::run_analyze(&input, &output_dir)?;
        }
    }
    Ok(())
}
