use clap::Args;
use enigma_core::settings::format::{config_id_hex, settings_line};
use enigma_core::Catalog;

use crate::cmd::machine::MachineArgs;

#[derive(Args)]
pub struct KeyArgs {
    #[command(flatten)]
    pub machine: MachineArgs,
}

pub fn run(args: KeyArgs) -> anyhow::Result<()> {
    let cfg = args.machine.config(&Catalog::historical())?;
    println!("{}", settings_line(&cfg));
    println!("id={}", config_id_hex(&cfg));
    Ok(())
}
