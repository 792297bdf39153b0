use crate::{Card, CardKind, Event, EventBus, GameState, RngState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("player count {0} is out of range")]
    InvalidPlayerCount(usize),
    #[error("no such player: {0}")]
    NoSuchPlayer(usize),
    #[error("hand index {index} out of range for player {player}")]
    HandIndexOutOfRange { player: usize, index: usize },
    #[error("{0:?} is not a playable card")]
    NotPlayable(Card),
    #[error("no effect implemented for {0:?}")]
    UnsupportedCard(Card),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: Card,
    pub drawn: Vec<Card>,
    pub set_aside: Vec<Card>,
    pub other_draws: usize,
}

impl GameState {
    pub fn play_card(
        &mut self,
        player: usize,
        hand_index: usize,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<PlayOutcome, EngineError> {
        let hand_len = self
            .players
            .get(player)
            .map(|p| p.hand.len())
            .ok_or(EngineError::NoSuchPlayer(player))?;
        if hand_index >= hand_len {
            return Err(EngineError::HandIndexOutOfRange {
                player,
                index: hand_index,
            });
        }
        let card = self.players[player].hand[hand_index];
        ensure_playable(card)?;
        self.players[player].hand.remove(hand_index);
        self.played.push(card);
        events.push(Event::CardPlayed { player, card });

        let mut outcome = PlayOutcome {
            card,
            drawn: Vec::new(),
            set_aside: Vec::new(),
            other_draws: 0,
        };
        match card {
            Card::Smithy => {
                outcome.drawn = self.draw_cards(player, 3, rng, events);
            }
            Card::Village => {
                outcome.drawn = self.draw_cards(player, 1, rng, events);
                self.gain_actions(2, events);
            }
            Card::CouncilRoom => {
                outcome.drawn = self.draw_cards(player, 4, rng, events);
                self.gain_buys(1, events);
                for other in 0..self.players.len() {
                    if other == player {
                        continue;
                    }
                    outcome.other_draws += self.draw_cards(other, 1, rng, events).len();
                }
            }
            Card::Adventurer => {
                self.dig_for_treasure(player, 2, rng, events, &mut outcome);
            }
            Card::Copper | Card::Silver | Card::Gold => {
                self.gain_coins(card.treasure_value(), events);
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Reveal from the player's own deck until `wanted` treasures surfaced or
    /// the deck and discard both ran out. Treasures go to hand, the rest is
    /// set aside and discarded afterwards so a mid-dig reshuffle cannot
    /// reveal the same card twice.
    fn dig_for_treasure(
        &mut self,
        player: usize,
        wanted: usize,
        rng: &mut RngState,
        events: &mut EventBus,
        outcome: &mut PlayOutcome,
    ) {
        let mut found = 0;
        let mut set_aside = Vec::new();
        while found < wanted {
            let Some(card) = self.next_from_deck(player, rng, events) else {
                break;
            };
            events.push(Event::CardRevealed { player, card });
            if card.is_treasure() {
                self.players[player].hand.push(card);
                events.push(Event::CardDrawn { player, card });
                outcome.drawn.push(card);
                found += 1;
            } else {
                events.push(Event::CardSetAside { player, card });
                set_aside.push(card);
            }
        }
        self.players[player].deck.discard(set_aside.clone());
        outcome.set_aside = set_aside;
    }

    fn gain_actions(&mut self, amount: i32, events: &mut EventBus) {
        self.actions = self.actions.saturating_add(amount);
        events.push(Event::ActionsGained {
            amount,
            total: self.actions,
        });
    }

    fn gain_buys(&mut self, amount: i32, events: &mut EventBus) {
        self.buys = self.buys.saturating_add(amount);
        events.push(Event::BuysGained {
            amount,
            total: self.buys,
        });
    }

    fn gain_coins(&mut self, amount: i32, events: &mut EventBus) {
        self.coins = self.coins.saturating_add(amount);
        events.push(Event::CoinsGained {
            amount,
            total: self.coins,
        });
    }
}

fn ensure_playable(card: Card) -> Result<(), EngineError> {
    match card {
        Card::Smithy | Card::Village | Card::CouncilRoom | Card::Adventurer => Ok(()),
        card if card.is_treasure() => Ok(()),
        card if card.kind() == CardKind::Action => Err(EngineError::UnsupportedCard(card)),
        card => Err(EngineError::NotPlayable(card)),
    }
}
