// crates/enigma-cli/src/cmd/machine.rs
//
// Machine selection flags shared by `encode` and `key`.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use enigma_core::settings::format::parse_settings_line;
use enigma_core::{Catalog, MachineConfig, SteppingMode};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Stepping {
    /// A rotor moves its left neighbour when it lands on a notch (no double step).
    Carry,
    /// Real machine pawls, including the middle rotor double step.
    Historical,
}

impl From<Stepping> for SteppingMode {
    fn from(s: Stepping) -> Self {
        match s {
            Stepping::Carry => SteppingMode::Carry,
            Stepping::Historical => SteppingMode::Historical,
        }
    }
}

#[derive(Args, Debug)]
pub struct MachineArgs {
    /// Rotors left (slow) to right (fast), comma separated
    #[arg(long, default_value = "I,II,III")]
    pub rotors: String,

    /// Starting rotor positions, left to right
    #[arg(long, default_value = "AAA")]
    pub offsets: String,

    /// Ring settings, left to right
    #[arg(long, default_value = "BBB")]
    pub rings: String,

    /// Reflector name
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long, default_value = "")]
    pub plugboard: String,

    #[arg(long, value_enum, default_value_t = Stepping::Carry)]
    pub stepping: Stepping,

    /// Full settings line "ROTORS|OFFSETS|RINGS|REFLECTOR|STEPPING[|PAIRS]".
    /// Overrides every other machine flag.
    #[arg(long)]
    pub key: Option<String>,
}

impl MachineArgs {
    pub fn config(&self, catalog: &Catalog) -> Result<MachineConfig> {
        if let Some(line) = self.key.as_deref() {
            return parse_settings_line(catalog, line)
                .with_context(|| format!("parse --key {line:?}"));
        }

        let names: Vec<&str> = self
            .rotors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let [l, m, r]: [&str; 3] = names
            .as_slice()
            .try_into()
            .map_err(|_| anyhow::anyhow!("--rotors needs exactly 3 names, got {:?}", self.rotors))?;

        catalog
            .machine(
                [l, m, r],
                &self.offsets,
                &self.rings,
                &self.reflector,
                &self.plugboard,
                self.stepping.into(),
            )
            .context("machine settings")
    }
}
