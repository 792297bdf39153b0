use ruminion_core::{
    Card, Deck, EngineError, Event, EventBus, GameState, PlayerState, RngState,
};

// Draw piles pop from the back: the last element is the next card drawn.
fn player(draw: Vec<Card>, discard: Vec<Card>, hand: Vec<Card>) -> PlayerState {
    PlayerState {
        deck: Deck { draw, discard },
        hand,
    }
}

fn state_with(players: Vec<PlayerState>) -> GameState {
    GameState {
        players,
        whose_turn: 0,
        actions: 1,
        buys: 1,
        coins: 0,
        played: Vec::new(),
    }
}

#[test]
fn new_game_deals_five_per_player() {
    let mut rng = RngState::from_seed(7);
    let mut events = EventBus::default();
    let state = GameState::new_game(4, &mut rng, &mut events).unwrap();
    assert_eq!(state.players.len(), 4);
    for player in &state.players {
        assert_eq!(player.hand.len(), 5);
        assert_eq!(player.deck.draw.len(), 5);
        assert!(player.deck.discard.is_empty());
        assert_eq!(player.total_cards(), 10);
    }
    assert_eq!(state.whose_turn, 0);
    assert_eq!(state.actions, 1);
    assert_eq!(state.buys, 1);
    assert_eq!(state.coins, 0);
    assert!(state.played.is_empty());
}

#[test]
fn new_game_rejects_bad_player_counts() {
    let mut rng = RngState::from_seed(7);
    let mut events = EventBus::default();
    assert!(matches!(
        GameState::new_game(1, &mut rng, &mut events),
        Err(EngineError::InvalidPlayerCount(1))
    ));
    assert!(matches!(
        GameState::new_game(5, &mut rng, &mut events),
        Err(EngineError::InvalidPlayerCount(5))
    ));
}

#[test]
fn smithy_draws_three_into_hand() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(
            vec![Card::Duchy, Card::Estate, Card::Copper, Card::Silver],
            vec![],
            vec![Card::Smithy, Card::Copper],
        ),
        player(vec![Card::Gold], vec![], vec![]),
    ]);
    let pre_total = state.total_cards(0);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(outcome.drawn, vec![Card::Silver, Card::Copper, Card::Estate]);
    assert_eq!(state.players[0].hand.len(), 4);
    assert_eq!(state.players[0].deck.draw, vec![Card::Duchy]);
    assert_eq!(state.played, vec![Card::Smithy]);
    assert_eq!(state.total_cards(0) + state.played.len(), pre_total);
    assert_eq!(state.players[1].hand.len(), 0);
    assert_eq!(state.actions, 1);
    assert_eq!(state.buys, 1);
}

#[test]
fn village_draws_one_and_grants_two_actions() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![Card::Copper], vec![], vec![Card::Village]),
        player(vec![], vec![], vec![]),
    ]);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(outcome.drawn, vec![Card::Copper]);
    assert_eq!(state.players[0].hand, vec![Card::Copper]);
    assert_eq!(state.actions, 3);
    assert_eq!(state.played, vec![Card::Village]);
}

#[test]
fn council_room_draws_four_grants_buy_and_feeds_others() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(
            vec![Card::Copper, Card::Copper, Card::Estate, Card::Silver, Card::Gold],
            vec![],
            vec![Card::CouncilRoom],
        ),
        player(vec![Card::Duchy], vec![], vec![]),
        player(vec![], vec![], vec![]),
    ]);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(outcome.drawn.len(), 4);
    assert_eq!(outcome.other_draws, 1);
    assert_eq!(state.players[0].hand.len(), 4);
    assert_eq!(state.buys, 2);
    assert_eq!(state.players[1].hand, vec![Card::Duchy]);
    assert!(state.players[2].hand.is_empty());
    assert_eq!(state.played, vec![Card::CouncilRoom]);
}

#[test]
fn adventurer_keeps_treasures_and_discards_the_rest() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(
            vec![Card::Duchy, Card::Silver, Card::Estate, Card::Copper, Card::Estate],
            vec![],
            vec![Card::Adventurer, Card::Curse],
        ),
        player(vec![], vec![], vec![]),
    ]);
    let pre_total = state.total_cards(0);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(outcome.drawn, vec![Card::Copper, Card::Silver]);
    assert_eq!(outcome.set_aside, vec![Card::Estate, Card::Estate]);
    let hand = &state.players[0].hand;
    assert_eq!(hand.len(), 3);
    assert!(hand[hand.len() - 1].is_treasure());
    assert!(hand[hand.len() - 2].is_treasure());
    assert_eq!(state.players[0].deck.draw, vec![Card::Duchy]);
    assert_eq!(state.players[0].deck.discard, vec![Card::Estate, Card::Estate]);
    assert_eq!(state.played, vec![Card::Adventurer]);
    assert_eq!(state.total_cards(0) + state.played.len(), pre_total);
}

#[test]
fn adventurer_reshuffles_discard_while_digging() {
    let mut rng = RngState::from_seed(3);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![], vec![Card::Gold, Card::Gold], vec![Card::Adventurer]),
        player(vec![], vec![], vec![]),
    ]);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(outcome.drawn, vec![Card::Gold, Card::Gold]);
    assert_eq!(state.players[0].hand, vec![Card::Gold, Card::Gold]);
    assert!(state.players[0].deck.draw.is_empty());
    assert!(state.players[0].deck.discard.is_empty());
}

#[test]
fn adventurer_stops_when_piles_run_out() {
    let mut rng = RngState::from_seed(3);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![Card::Estate], vec![Card::Curse], vec![Card::Adventurer]),
        player(vec![], vec![], vec![]),
    ]);
    let outcome = state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert!(outcome.drawn.is_empty());
    assert_eq!(outcome.set_aside.len(), 2);
    assert!(state.players[0].hand.is_empty());
    assert_eq!(state.players[0].deck.discard.len(), 2);
    assert!(state.players[0].deck.draw.is_empty());
}

#[test]
fn treasure_plays_add_coins() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![], vec![], vec![Card::Gold, Card::Copper]),
        player(vec![], vec![], vec![]),
    ]);
    state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(state.coins, 3);
    state.play_card(0, 0, &mut rng, &mut events).unwrap();
    assert_eq!(state.coins, 4);
    assert_eq!(state.played, vec![Card::Gold, Card::Copper]);
    assert!(state.players[0].hand.is_empty());
}

#[test]
fn draw_card_reshuffles_or_gives_up() {
    let mut rng = RngState::from_seed(9);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![], vec![Card::Silver], vec![]),
        player(vec![], vec![], vec![]),
    ]);
    assert_eq!(state.draw_card(0, &mut rng, &mut events), Some(Card::Silver));
    assert_eq!(state.draw_card(0, &mut rng, &mut events), None);
    assert_eq!(state.draw_card(1, &mut rng, &mut events), None);
}

#[test]
fn end_turn_collects_hand_and_played_then_redeals() {
    let mut rng = RngState::from_seed(5);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![], vec![], vec![Card::Copper, Card::Estate]),
        player(
            vec![Card::Copper, Card::Copper, Card::Estate, Card::Silver, Card::Gold, Card::Duchy],
            vec![],
            vec![],
        ),
    ]);
    state.played.push(Card::Smithy);
    state.actions = 4;
    state.coins = 7;
    state.end_turn(&mut rng, &mut events);
    assert_eq!(state.whose_turn, 1);
    assert!(state.players[0].hand.is_empty());
    assert_eq!(state.players[0].deck.discard.len(), 3);
    assert!(state.played.is_empty());
    assert_eq!(state.players[1].hand.len(), 5);
    assert_eq!(state.actions, 1);
    assert_eq!(state.buys, 1);
    assert_eq!(state.coins, 0);
}

#[test]
fn unplayable_cards_leave_state_untouched() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(vec![Card::Copper], vec![], vec![Card::Feast, Card::Estate]),
        player(vec![], vec![], vec![]),
    ]);
    let snapshot = state.clone();
    assert!(matches!(
        state.play_card(0, 0, &mut rng, &mut events),
        Err(EngineError::UnsupportedCard(Card::Feast))
    ));
    assert!(matches!(
        state.play_card(0, 1, &mut rng, &mut events),
        Err(EngineError::NotPlayable(Card::Estate))
    ));
    assert!(matches!(
        state.play_card(0, 9, &mut rng, &mut events),
        Err(EngineError::HandIndexOutOfRange { player: 0, index: 9 })
    ));
    assert!(matches!(
        state.play_card(4, 0, &mut rng, &mut events),
        Err(EngineError::NoSuchPlayer(4))
    ));
    assert_eq!(state, snapshot);
}

#[test]
fn play_card_reports_events() {
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let mut state = state_with(vec![
        player(
            vec![Card::Copper, Card::Silver, Card::Gold],
            vec![],
            vec![Card::Smithy],
        ),
        player(vec![], vec![], vec![]),
    ]);
    state.play_card(0, 0, &mut rng, &mut events).unwrap();
    let seen: Vec<Event> = events.drain().collect();
    assert_eq!(
        seen[0],
        Event::CardPlayed {
            player: 0,
            card: Card::Smithy
        }
    );
    let draws = seen
        .iter()
        .filter(|event| matches!(event, Event::CardDrawn { .. }))
        .count();
    assert_eq!(draws, 3);
}
