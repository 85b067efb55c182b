//! Workspace registry: human-readable program names to deployed program ids
//!
//! Resolution checks a per-program environment override first so a smoke run
//! can target a fresh deployment without rebuilding, then falls back to the
//! ids the programs declare.

use crate::{Result, SdkError};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Name the staking farm program is registered under
pub const STAKING_FARM: &str = "stakingfarmproject";

const STAKING_FARM_ID: Pubkey =
    solana_sdk::pubkey!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub struct Workspace;

impl Workspace {
    /// Resolve a program name to its deployed id.
    ///
    /// An environment variable named `<NAME>_PROGRAM_ID` (name upper-cased,
    /// non-alphanumerics mapped to `_`) overrides the built-in table.
    pub fn resolve(name: &str) -> Result<Pubkey> {
        let var = program_id_env_key(name);
        if let Ok(value) = std::env::var(&var) {
            return Pubkey::from_str(&value)
                .map_err(|_| SdkError::InvalidProgramId { var, value });
        }

        match name {
            STAKING_FARM => Ok(STAKING_FARM_ID),
            other => Err(SdkError::UnknownProgram(other.to_string())),
        }
    }
}

/// Environment variable that overrides the registry entry for `name`
pub fn program_id_env_key(name: &str) -> String {
    let mut key: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    key.push_str("_PROGRAM_ID");
    key
}
