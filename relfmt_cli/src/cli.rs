use clap::{Parser, Subcommand};
use relfmt_core::utils::color::Rgba;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relfmt")]
#[command(about = "Relative timestamps and color helpers", long_about = None)]
pub struct Cli {
    /// Enable debug logging (same as RELFMT_DEBUG=1; overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.relfmt/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe how long ago a timestamp was ("3 days ago")
    Ago {
        /// RFC 3339, local "YYYY-MM-DD[ HH:MM[:SS]]", or epoch milliseconds
        when: String,

        /// Use this instead of the current time
        #[arg(long, value_name = "WHEN")]
        now: Option<String>,

        /// 12h, 24h or a strftime pattern; overrides the config file
        #[arg(long, value_name = "FORMAT")]
        time_format: Option<String>,
    },

    /// Color helpers
    #[command(subcommand)]
    Color(ColorCommand),

    /// Show or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ColorCommand {
    /// Darken dark colors, lighten light ones
    Highlight {
        color: Rgba,
        #[arg(long)]
        factor: Option<f32>,
    },

    /// Increase brightness
    Lighter {
        color: Rgba,
        #[arg(long)]
        factor: Option<f32>,
    },

    /// Decrease brightness
    Darker {
        color: Rgba,
        #[arg(long)]
        factor: Option<f32>,
    },

    /// Average of two colors
    Mix { a: Rgba, b: Rgba },

    /// Channel-wise difference a - b
    Diff { a: Rgba, b: Rgba },

    /// WCAG contrast ratio
    Contrast { a: Rgba, b: Rgba },

    /// Push SOURCE away from AGAINST when they are hard to tell apart
    Adjust {
        source: Rgba,
        against: Rgba,
        #[arg(long)]
        threshold: Option<f32>,
    },

    /// Whether the color counts as dark
    IsDark { color: Rgba },

    /// Replace the alpha channel
    Alpha { color: Rgba, alpha: f32 },

    /// WCAG relative luminance
    Luminance { color: Rgba },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
