// src/bin/cli.rs
use halo_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    halo_scrape::logger::init();

    let cmd = cli::parse_args(std::env::args().skip(1))?;
    cli::run(&cmd)?;
    Ok(())
}
