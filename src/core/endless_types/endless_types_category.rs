// src/core/endless_types/endless_types_category.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::core::error::EstimatorError;

/// Anzeige-Gruppierung einer Aktion. Hat kein Gewicht in der Berechnung.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Transfer,
    Contract,
    Nft,
    Defi,
    Governance,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 5] = [
        ActionCategory::Transfer,
        ActionCategory::Contract,
        ActionCategory::Nft,
        ActionCategory::Defi,
        ActionCategory::Governance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Transfer => "transfer",
            ActionCategory::Contract => "contract",
            ActionCategory::Nft => "nft",
            ActionCategory::Defi => "defi",
            ActionCategory::Governance => "governance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActionCategory::Transfer => "Token transfers, sends, and basic value movements",
            ActionCategory::Contract => "Smart contract deployments, calls, and interactions",
            ActionCategory::Nft => "NFT minting, transfers, and marketplace operations",
            ActionCategory::Defi => "DeFi operations: staking, swaps, liquidity, lending",
            ActionCategory::Governance => "DAO proposals, voting, and governance actions",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionCategory {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EstimatorError::ParseError(format!("Unknown category: {}", s)))
    }
}
