use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::domain::Chain;

/// Static description of one discovery tab: how many tokens it lists
/// and which chain its batch is generated for.
pub struct TabSpec {
    pub label: &'static str,
    pub count: usize,
    pub chain: Chain,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default,
)]
pub enum Tab {
    #[default]
    NewPairs,
    FinalStretch,
    Migrated,
}

impl Tab {
    pub fn spec(&self) -> &'static TabSpec {
        match self {
            Self::NewPairs => &NEW_PAIRS,
            Self::FinalStretch => &FINAL_STRETCH,
            Self::Migrated => &MIGRATED,
        }
    }
}

pub const NEW_PAIRS: TabSpec = TabSpec {
    label: "New pairs",
    count: 15,
    chain: Chain::Base,
};

pub const FINAL_STRETCH: TabSpec = TabSpec {
    label: "Final Stretch",
    count: 10,
    chain: Chain::Ethereum,
};

pub const MIGRATED: TabSpec = TabSpec {
    label: "Migrated",
    count: 5,
    chain: Chain::Base,
};
