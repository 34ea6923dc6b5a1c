use clap::Args;
use enigma_core::Catalog;

#[derive(Args)]
pub struct CatalogArgs {
    /// Print only names, one per line
    #[arg(long)]
    pub names: bool,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = Catalog::historical();

    for r in catalog.rotors() {
        if args.names {
            println!("{}", r.name);
        } else {
            println!("rotor     {:<5} {} notch={}", r.name, r.wiring, r.notch);
        }
    }
    for r in catalog.reflectors() {
        if args.names {
            println!("{}", r.name);
        } else {
            println!("reflector {:<5} {}", r.name, r.wiring);
        }
    }
    Ok(())
}
