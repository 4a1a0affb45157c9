use clap::Parser;
use relfmt_cli::ui::theme::ColorTheme;
use relfmt_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    relfmt_core::utils::logger::init_logging(cli.debug);

    let stdout = std::io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("{} {:#}", ColorTheme::error().apply_to("error:"), e);
        std::process::exit(1);
    }
}
