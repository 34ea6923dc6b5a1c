// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Three-rotor cipher machine", long_about = None)]
pub struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt or decrypt text (same operation)
    Encode(cmd::encode::EncodeArgs),

    /// List the rotors and reflectors that can be selected
    Catalog(cmd::catalog::CatalogArgs),

    /// Print the canonical settings line and id for a machine
    Key(cmd::key::KeyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args),
        Commands::Key(args) => cmd::key::run(args),
    }
}
