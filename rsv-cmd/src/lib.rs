//! Command implementations for the RSV coverage CLI.
//!
//! Provides subcommands for listing filter options, exporting the
//! long-format coverage table and rendering the coverage chart to SVG.

use clap::{Args, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod export;
pub mod options;
pub mod plot;
pub mod source;

pub use export::ExportFormat;

/// An age group, a demographic dimension and optionally a set of groups.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Age group, e.g. "60+"
    #[arg(short = 'a', long)]
    pub age_group: String,

    /// Demographic dimension, e.g. "Race and Ethnicity"
    #[arg(short = 'd', long)]
    pub demographic_level: String,

    /// Population group to include (repeatable); all available groups when omitted
    #[arg(short = 'g', long = "group")]
    pub groups: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the age groups and demographic dimensions in the source file
    Options,

    /// List the population groups available for an age group and dimension
    Groups {
        /// Age group, e.g. "60+"
        #[arg(short = 'a', long)]
        age_group: String,

        /// Demographic dimension, e.g. "Sex"
        #[arg(short = 'd', long)]
        demographic_level: String,
    },

    /// Write the long-format (week, group, coverage) table for a selection
    Reshape {
        #[command(flatten)]
        selection: Selection,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Render the coverage line chart for a selection to SVG
    Plot {
        #[command(flatten)]
        selection: Selection,

        /// Output SVG path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 900)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 500)]
        height: u32,
    },
}

pub fn run(csv_path: &Path, command: Command) -> anyhow::Result<()> {
    let table = source::load(csv_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Options => options::write_options(table, &mut out),
        Command::Groups {
            age_group,
            demographic_level,
        } => options::write_groups(table, &age_group, &demographic_level, &mut out),
        Command::Reshape {
            selection,
            format,
            output,
        } => {
            let filter = source::resolve(table, selection);
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)?;
                    export::run_export(table, &filter, format, file)?;
                    log::info!("Wrote coverage table to {}", path.display());
                    Ok(())
                }
                None => export::run_export(table, &filter, format, &mut out),
            }
        }
        Command::Plot {
            selection,
            output,
            width,
            height,
        } => {
            let filter = source::resolve(table, selection);
            if plot::run_plot(table, &filter, &output, (width, height))? {
                writeln!(out, "Wrote {}", output.display())?;
            }
            Ok(())
        }
    }
}
