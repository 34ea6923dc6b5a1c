use clap::Args;
use enigma_core::settings::format::config_id_hex;
use enigma_core::{Catalog, Engine};
use tracing::{debug, info};

use crate::cmd::machine::MachineArgs;
use crate::io::text::input_text;

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Text to process; read from stdin when omitted
    #[arg(long)]
    pub text: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let catalog = Catalog::historical();
    let cfg = args.machine.config(&catalog)?;
    let text = input_text(args.text)?;
    debug!(text = %text, "processing text");

    let mut engine = Engine::new(&cfg)?;
    let out = engine.encode(&text);
    println!("{out}");

    info!(
        letters = engine.stats.encoded,
        skipped = engine.stats.skipped,
        end_positions = %engine.positions(),
        stepping = %engine.stepping(),
        plugboard = %engine.plugboard().spec(),
        config_id = %config_id_hex(&cfg),
        "encode ok"
    );
    Ok(())
}
