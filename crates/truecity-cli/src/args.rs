use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for truecity-cli
#[derive(Debug, Parser)]
#[command(
    name = "truecity",
    version,
    about = "Browse country/region/city location trees and build stored location values"
)]
pub struct CliArgs {
    /// Base of the location tree: an http(s) URL or a local directory
    /// (default: the sample tree bundled with truecity-core)
    #[arg(short = 'b', long = "base", global = true)]
    pub base: Option<String>,

    /// JSON file with localized strings, e.g. {"unknownregion": "Región desconocida"}
    #[arg(short = 'm', long = "messages", global = true)]
    pub messages: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the regions of a country, in display order
    Regions {
        /// Country code (e.g. CO)
        country: String,
    },

    /// List the cities of a region, in display order
    Cities {
        /// Country code (e.g. CO)
        country: String,
        /// Region code (e.g. ANT)
        region: String,
    },

    /// Run a selection and print the stored value
    Select {
        /// Country preselected in the form
        #[arg(long)]
        country: String,

        /// Display name of the country (defaults to the code)
        #[arg(long)]
        country_name: Option<String>,

        /// Region code to pick after the country loads
        #[arg(long)]
        region: Option<String>,

        /// City code to pick after the region loads
        #[arg(long)]
        city: Option<String>,

        /// Previously stored value to restore first
        #[arg(long)]
        seed: Option<String>,
    },

    /// Show what the host stores for a submitted value
    Decode {
        /// Stored value JSON
        value: String,
    },

    /// Build the static location tree from the countries+states+cities dump
    #[cfg(feature = "builder")]
    Build {
        /// Path to countries+states+cities.json(.gz)
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Output directory (countries/ and regions/ are created inside)
        #[arg(short = 'o', long = "out")]
        out: PathBuf,
    },
}
