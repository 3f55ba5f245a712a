use clap::{Parser, Subcommand};

/// Gauge measurement CLI
#[derive(Parser)]
#[command(name = "gauge")]
#[command(version, about = "Unit-aware quantity tooling", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print sample cross-unit equality checks
    Demo {
        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Convert a value between two units of the same domain
    Convert {
        /// The numeric value to convert
        value: f64,

        /// The unit the value is expressed in
        #[arg(value_name = "FROM")]
        from: String,

        /// The unit to convert to
        #[arg(value_name = "TO")]
        to: String,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Check whether two quantities denote the same measure
    Compare {
        /// The first value
        value_a: f64,

        /// The first value's unit
        unit_a: String,

        /// The second value
        value_b: f64,

        /// The second value's unit
        unit_b: String,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// List the known units and their base-unit factors
    Units {
        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
}
