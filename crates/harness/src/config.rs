use ruminion_core::Card;
use serde::{Deserialize, Serialize};

/// The card effects the harness knows how to fabricate states for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetCard {
    Adventurer,
    Smithy,
    Village,
    CouncilRoom,
}

impl TargetCard {
    pub const fn all() -> [TargetCard; 4] {
        [
            TargetCard::Adventurer,
            TargetCard::Smithy,
            TargetCard::Village,
            TargetCard::CouncilRoom,
        ]
    }

    pub fn card(self) -> Card {
        match self {
            TargetCard::Adventurer => Card::Adventurer,
            TargetCard::Smithy => Card::Smithy,
            TargetCard::Village => Card::Village,
            TargetCard::CouncilRoom => Card::CouncilRoom,
        }
    }

    pub fn label(self) -> &'static str {
        self.card().label()
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "adventurer" => Some(Self::Adventurer),
            "smithy" => Some(Self::Smithy),
            "village" => Some(Self::Village),
            "council_room" | "council-room" | "councilroom" => Some(Self::CouncilRoom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub seed: u64,
    pub iterations: u32,
    pub debug_window: u32,
    pub players: usize,
    pub deck_bound: usize,
    pub hand_bound: usize,
    pub played_bound: usize,
    pub counter_bound: i32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: 1542,
            iterations: 10_000,
            debug_window: 5,
            players: 4,
            deck_bound: 500,
            hand_bound: 500,
            played_bound: 500,
            counter_bound: 1000,
        }
    }
}
