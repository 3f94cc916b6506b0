// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Types command - list PDU type codes.

use clap::Args;

use crate::common::Result;
use discodec::{PduFactory, PduType, ProtocolVersion};

/// List the PDU types known to a protocol version.
#[derive(Args, Clone, Debug)]
pub struct TypesCmd {
    /// Protocol version number (6 or 7)
    #[arg(short, long, value_name = "VERSION", default_value_t = 7)]
    protocol: u8,

    /// Also list type codes that have no decoder
    #[arg(long)]
    all: bool,
}

impl TypesCmd {
    pub fn run(self) -> Result<()> {
        let version = ProtocolVersion::try_from(self.protocol)?;

        println!("=== {version} ===");
        if self.all {
            for &pdu_type in PduType::ALL {
                let code = pdu_type.to_int();
                let marker = if PduFactory::is_supported(code, version) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {code:>3}  {pdu_type}");
            }
        } else {
            for pdu_type in PduFactory::supported_types(version) {
                println!("  {:>3}  {pdu_type}", pdu_type.to_int());
            }
        }
        Ok(())
    }
}
