use anyhow::Result;
use clap::Parser;
use perkladar_cli::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    perkladar_cli::logging::init(cli.data.verbose, cli.data.quiet);

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute(&cli.data)
}
