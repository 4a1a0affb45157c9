// Library exports for the relfmt CLI, used by the binary and its tests

pub mod cli;
pub mod commands;
pub mod ui;

pub use cli::Cli;
pub use commands::run;
