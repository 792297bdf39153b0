use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    DeckReshuffled { player: usize, count: usize },
    CardDrawn { player: usize, card: Card },
    CardRevealed { player: usize, card: Card },
    CardSetAside { player: usize, card: Card },
    CardPlayed { player: usize, card: Card },
    ActionsGained { amount: i32, total: i32 },
    BuysGained { amount: i32, total: i32 },
    CoinsGained { amount: i32, total: i32 },
    TurnEnded { player: usize, next: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
