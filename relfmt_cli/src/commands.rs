//! Command execution for the relfmt CLI.
//!
//! Output goes to the supplied writer so commands can be driven from tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use relfmt_core::utils::color::{self, Rgba};
use relfmt_core::utils::config::Config;
use relfmt_core::utils::error::ResultExt;
use relfmt_core::utils::locale::TimeFormat;
use relfmt_core::utils::time::{parse_timestamp, FixedClock, RelativeTimeFormatter};

use crate::cli::{Cli, ColorCommand, Command, ConfigCommand};
use crate::ui::theme::ColorTheme;

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Command::Ago {
            when,
            now,
            time_format,
        } => run_ago(config_path, when, now.as_deref(), time_format.as_deref(), out),
        Command::Color(command) => run_color(config_path, command, out),
        Command::Config(command) => run_config(config_path, command, out),
    }
}

fn config_file(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(Config::get_config_path)
}

/// An explicit `--config` must exist and be valid; the default location
/// falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path).with_file_context(&path.display().to_string()),
        None => Ok(Config::load_or_default()),
    }
}

fn run_ago<W: Write>(
    config_path: Option<&Path>,
    when: &str,
    now: Option<&str>,
    time_format: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let past = parse_timestamp(when)?;
    let now = match now {
        Some(now) => parse_timestamp(now).context("invalid --now")?,
        None => Local::now(),
    };
    let time_format = match time_format {
        Some(format) => format
            .parse::<TimeFormat>()
            .with_config_context("--time-format")?,
        None => load_config(config_path)?
            .resolve_time_format()
            .with_config_context("time_format")?,
    };
    tracing::debug!(%past, %now, %time_format, "formatting relative time");

    let formatter = RelativeTimeFormatter::new(FixedClock(now), time_format);
    writeln!(out, "{}", ColorTheme::value().apply_to(formatter.format(&past)))?;
    Ok(())
}

fn run_color<W: Write>(config_path: Option<&Path>, command: &ColorCommand, out: &mut W) -> Result<()> {
    let factor_or_default = |factor: Option<f32>| -> Result<f32> {
        let factor = match factor {
            Some(factor) => factor,
            None => load_config(config_path)?.highlight_factor,
        };
        if factor.is_nan() || factor <= 0.0 {
            bail!("factor must be positive, got {}", factor);
        }
        Ok(factor)
    };

    match command {
        ColorCommand::Highlight { color, factor } => {
            let factor = factor_or_default(*factor)?;
            print_color(out, color::highlight(*color, factor))
        }
        ColorCommand::Lighter { color, factor } => {
            let factor = factor_or_default(*factor)?;
            print_color(out, color.lighter(factor))
        }
        ColorCommand::Darker { color, factor } => {
            let factor = factor_or_default(*factor)?;
            print_color(out, color.darker(factor))
        }
        ColorCommand::Mix { a, b } => print_color(out, color::middle(*a, *b)),
        ColorCommand::Diff { a, b } => print_color(out, color::difference(*a, *b)),
        ColorCommand::Contrast { a, b } => {
            let ratio = color::contrast(*a, *b);
            writeln!(out, "{}", ColorTheme::value().apply_to(format!("{:.2}:1", ratio)))?;
            Ok(())
        }
        ColorCommand::Adjust {
            source,
            against,
            threshold,
        } => {
            let threshold = match threshold {
                Some(threshold) => *threshold,
                None => load_config(config_path)?.contrast_threshold,
            };
            if threshold.is_nan() || threshold < 1.0 {
                bail!("threshold must be at least 1, got {}", threshold);
            }
            print_color(out, color::adjust_contrast_with(*source, *against, threshold))
        }
        ColorCommand::IsDark { color } => {
            writeln!(out, "{}", ColorTheme::value().apply_to(color::is_dark(*color)))?;
            Ok(())
        }
        ColorCommand::Alpha { color, alpha } => {
            if !(0.0..=1.0).contains(alpha) {
                bail!("alpha must be between 0 and 1, got {}", alpha);
            }
            print_color(out, color::adjust_alpha(*color, *alpha))
        }
        ColorCommand::Luminance { color } => {
            let luminance = color::relative_luminance(*color);
            writeln!(out, "{}", ColorTheme::value().apply_to(format!("{:.4}", luminance)))?;
            Ok(())
        }
    }
}

fn print_color<W: Write>(out: &mut W, color: Rgba) -> Result<()> {
    writeln!(out, "{}", ColorTheme::color_line(color))?;
    Ok(())
}

fn run_config<W: Write>(config_path: Option<&Path>, command: &ConfigCommand, out: &mut W) -> Result<()> {
    let path = config_file(config_path);
    match command {
        ConfigCommand::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommand::Show => {
            let config = load_config(config_path)?;
            let resolved = config.resolve_time_format()?;
            write!(out, "{}", serde_yaml::to_string(&config)?)?;
            writeln!(
                out,
                "{} {}",
                ColorTheme::label().apply_to("# resolved time format:"),
                ColorTheme::dim().apply_to(resolved)
            )?;
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default()
                .save_to_file(&path)
                .with_file_context(&path.display().to_string())?;
            writeln!(
                out,
                "{} {}",
                ColorTheme::success().apply_to("wrote"),
                path.display()
            )?;
        }
    }
    Ok(())
}
