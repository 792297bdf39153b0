use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Curse,
    Estate,
    Duchy,
    Province,
    Copper,
    Silver,
    Gold,
    Adventurer,
    CouncilRoom,
    Feast,
    Gardens,
    Mine,
    Remodel,
    Smithy,
    Village,
    Baron,
    GreatHall,
    Minion,
    Steward,
    Tribute,
    Ambassador,
    Cutpurse,
    Embargo,
    Outpost,
    Salvager,
    SeaHag,
    TreasureMap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Curse,
    Victory,
    Treasure,
    Action,
}

impl Card {
    pub const fn all() -> [Card; 27] {
        [
            Card::Curse,
            Card::Estate,
            Card::Duchy,
            Card::Province,
            Card::Copper,
            Card::Silver,
            Card::Gold,
            Card::Adventurer,
            Card::CouncilRoom,
            Card::Feast,
            Card::Gardens,
            Card::Mine,
            Card::Remodel,
            Card::Smithy,
            Card::Village,
            Card::Baron,
            Card::GreatHall,
            Card::Minion,
            Card::Steward,
            Card::Tribute,
            Card::Ambassador,
            Card::Cutpurse,
            Card::Embargo,
            Card::Outpost,
            Card::Salvager,
            Card::SeaHag,
            Card::TreasureMap,
        ]
    }

    pub fn kind(self) -> CardKind {
        match self {
            Card::Curse => CardKind::Curse,
            Card::Estate | Card::Duchy | Card::Province | Card::Gardens => CardKind::Victory,
            Card::Copper | Card::Silver | Card::Gold => CardKind::Treasure,
            _ => CardKind::Action,
        }
    }

    pub fn is_treasure(self) -> bool {
        self.kind() == CardKind::Treasure
    }

    pub fn treasure_value(self) -> i32 {
        match self {
            Card::Copper => 1,
            Card::Silver => 2,
            Card::Gold => 3,
            _ => 0,
        }
    }

    pub fn cost(self) -> i32 {
        match self {
            Card::Curse | Card::Copper => 0,
            Card::Estate | Card::Embargo => 2,
            Card::Silver | Card::Village | Card::GreatHall | Card::Steward | Card::Ambassador => 3,
            Card::Feast
            | Card::Gardens
            | Card::Remodel
            | Card::Smithy
            | Card::Baron
            | Card::Cutpurse
            | Card::Salvager
            | Card::SeaHag
            | Card::TreasureMap => 4,
            Card::Duchy | Card::CouncilRoom | Card::Mine | Card::Minion | Card::Tribute
            | Card::Outpost => 5,
            Card::Gold | Card::Adventurer => 6,
            Card::Province => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Card::Curse => "curse",
            Card::Estate => "estate",
            Card::Duchy => "duchy",
            Card::Province => "province",
            Card::Copper => "copper",
            Card::Silver => "silver",
            Card::Gold => "gold",
            Card::Adventurer => "adventurer",
            Card::CouncilRoom => "council_room",
            Card::Feast => "feast",
            Card::Gardens => "gardens",
            Card::Mine => "mine",
            Card::Remodel => "remodel",
            Card::Smithy => "smithy",
            Card::Village => "village",
            Card::Baron => "baron",
            Card::GreatHall => "great_hall",
            Card::Minion => "minion",
            Card::Steward => "steward",
            Card::Tribute => "tribute",
            Card::Ambassador => "ambassador",
            Card::Cutpurse => "cutpurse",
            Card::Embargo => "embargo",
            Card::Outpost => "outpost",
            Card::Salvager => "salvager",
            Card::SeaHag => "sea_hag",
            Card::TreasureMap => "treasure_map",
        }
    }
}
