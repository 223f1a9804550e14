use std::io::{self, BufWriter, Write};

use clap::Parser;
use color_eyre::Result;
use statphys::cli::{self, Cli};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cli::run(cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
