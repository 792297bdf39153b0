use crate::{HarnessConfig, TargetCard};
use ruminion_core::{Card, Deck, GameState, PlayerState, RngState};

/// One fabricated fixture: a state satisfying the target card's
/// precondition, the acting player, and where the card sits in their hand.
#[derive(Debug, Clone)]
pub struct GeneratedCase {
    pub state: GameState,
    pub player: usize,
    pub hand_index: usize,
    pub attempts: u32,
}

/// Rejection-sampling constructor. Every pile and counter is uniformly
/// random within the configured bounds; only the acting player, the card
/// placement, and the card's numeric precondition are forced. Retries until
/// the precondition holds and reports how many attempts that took.
pub fn generate_case(
    card: TargetCard,
    config: &HarnessConfig,
    rng: &mut RngState,
) -> GeneratedCase {
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        let player_count = config.players.max(1);
        let player = rng.next_below(player_count as u64) as usize;
        let mut state = GameState {
            players: Vec::with_capacity(player_count),
            whose_turn: player,
            actions: random_counter(rng, config.counter_bound),
            buys: random_counter(rng, config.counter_bound),
            coins: random_counter(rng, config.counter_bound),
            played: random_pile(rng, config.played_bound),
        };
        for _ in 0..player_count {
            state.players.push(PlayerState {
                deck: Deck {
                    draw: random_pile(rng, config.deck_bound),
                    discard: random_pile(rng, config.deck_bound),
                },
                hand: random_pile(rng, config.hand_bound),
            });
        }
        let hand_len = state.players[player].hand.len();
        let hand_index = if hand_len == 0 {
            state.players[player].hand.push(card.card());
            0
        } else {
            let index = rng.next_below(hand_len as u64) as usize;
            state.players[player].hand[index] = card.card();
            index
        };
        if !precondition_holds(card, &state, player) {
            continue;
        }
        return GeneratedCase {
            state,
            player,
            hand_index,
            attempts,
        };
    }
}

/// Whether the player has enough material in deck plus discard for the
/// card's effect to resolve fully.
pub fn precondition_holds(card: TargetCard, state: &GameState, player: usize) -> bool {
    let Some(target) = state.players.get(player) else {
        return false;
    };
    match card {
        TargetCard::Adventurer => count_treasures(&target.deck) >= 2,
        TargetCard::Smithy => target.deck.total_len() >= 3,
        TargetCard::Village => target.deck.total_len() >= 1,
        TargetCard::CouncilRoom => target.deck.total_len() >= 4,
    }
}

fn count_treasures(deck: &Deck) -> usize {
    deck.draw
        .iter()
        .chain(deck.discard.iter())
        .filter(|card| card.is_treasure())
        .count()
}

fn random_card(rng: &mut RngState) -> Card {
    let cards = Card::all();
    cards[rng.next_below(cards.len() as u64) as usize]
}

fn random_pile(rng: &mut RngState, bound: usize) -> Vec<Card> {
    let len = rng.next_below(bound as u64) as usize;
    let mut pile = Vec::with_capacity(len);
    for _ in 0..len {
        pile.push(random_card(rng));
    }
    pile
}

fn random_counter(rng: &mut RngState, bound: i32) -> i32 {
    rng.next_below(bound.max(1) as u64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HarnessConfig {
        HarnessConfig {
            deck_bound: 12,
            hand_bound: 8,
            played_bound: 6,
            counter_bound: 50,
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn generated_cases_satisfy_their_preconditions() {
        let config = small_config();
        for card in TargetCard::all() {
            let mut rng = RngState::from_seed(config.seed);
            for _ in 0..200 {
                let case = generate_case(card, &config, &mut rng);
                assert!(precondition_holds(card, &case.state, case.player));
                assert!(case.player < config.players);
                assert_eq!(case.state.players.len(), config.players);
                assert_eq!(
                    case.state.players[case.player].hand[case.hand_index],
                    card.card()
                );
                assert!(case.attempts >= 1);
            }
        }
    }

    #[test]
    fn generated_piles_respect_bounds() {
        let config = small_config();
        let mut rng = RngState::from_seed(99);
        for _ in 0..200 {
            let case = generate_case(TargetCard::Smithy, &config, &mut rng);
            for player in &case.state.players {
                assert!(player.deck.draw.len() < config.deck_bound);
                assert!(player.deck.discard.len() < config.deck_bound);
                // the forced card may have been pushed into an empty hand
                assert!(player.hand.len() <= config.hand_bound);
            }
            assert!(case.state.played.len() < config.played_bound);
            assert!(case.state.actions >= 0 && case.state.actions < config.counter_bound);
        }
    }

    #[test]
    fn acting_player_takes_the_turn_marker() {
        let config = small_config();
        let mut rng = RngState::from_seed(4);
        for _ in 0..50 {
            let case = generate_case(TargetCard::Village, &config, &mut rng);
            assert_eq!(case.state.whose_turn, case.player);
        }
    }
}
