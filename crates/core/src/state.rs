use crate::{Card, Deck, EngineError, Event, EventBus, RngState};
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

const TURN_DRAW: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub deck: Deck,
    pub hand: Vec<Card>,
}

impl PlayerState {
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.deck.total_len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    pub whose_turn: usize,
    pub actions: i32,
    pub buys: i32,
    pub coins: i32,
    pub played: Vec<Card>,
}

impl GameState {
    pub fn new_game(
        player_count: usize,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<Self, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount(player_count));
        }
        let mut state = Self {
            players: Vec::with_capacity(player_count),
            whose_turn: 0,
            actions: 1,
            buys: 1,
            coins: 0,
            played: Vec::new(),
        };
        for _ in 0..player_count {
            let mut deck = Deck::starting();
            deck.shuffle(rng);
            state.players.push(PlayerState {
                deck,
                hand: Vec::new(),
            });
        }
        for player in 0..player_count {
            state.draw_cards(player, TURN_DRAW, rng, events);
        }
        Ok(state)
    }

    pub fn draw_card(
        &mut self,
        player: usize,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Option<Card> {
        let card = self.next_from_deck(player, rng, events)?;
        self.players[player].hand.push(card);
        events.push(Event::CardDrawn { player, card });
        Some(card)
    }

    pub fn draw_cards(
        &mut self,
        player: usize,
        count: usize,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw_card(player, rng, events) {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Take the top card of a player's draw pile, reshuffling the discard
    /// pile in first if the draw pile ran dry. `None` when both are empty.
    pub(crate) fn next_from_deck(
        &mut self,
        player: usize,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Option<Card> {
        let deck = &mut self.players.get_mut(player)?.deck;
        if deck.draw.is_empty() {
            deck.reshuffle_discard(rng);
            if deck.draw.is_empty() {
                return None;
            }
            events.push(Event::DeckReshuffled {
                player,
                count: deck.draw.len(),
            });
        }
        deck.draw.pop()
    }

    pub fn total_cards(&self, player: usize) -> usize {
        self.players
            .get(player)
            .map(PlayerState::total_cards)
            .unwrap_or(0)
    }

    pub fn end_turn(&mut self, rng: &mut RngState, events: &mut EventBus) {
        if self.players.is_empty() {
            return;
        }
        let player = self.whose_turn % self.players.len();
        let played = std::mem::take(&mut self.played);
        if let Some(current) = self.players.get_mut(player) {
            let hand = std::mem::take(&mut current.hand);
            current.deck.discard(hand);
            current.deck.discard(played);
        }
        let next = (player + 1) % self.players.len();
        self.whose_turn = next;
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
        self.draw_cards(next, TURN_DRAW, rng, events);
        events.push(Event::TurnEnded { player, next });
    }
}
