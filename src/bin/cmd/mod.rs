// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod frames;
mod inspect;
mod types;

pub use frames::FramesCmd;
pub use inspect::InspectCmd;
pub use types::TypesCmd;
