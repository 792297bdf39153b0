use crate::TargetCard;
use ruminion_core::{GameState, PlayerState};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One evaluated assertion. Failures are recorded, never raised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Check {
    pub label: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Diff a before/after snapshot pair against the card's expected deltas.
/// Every check is independent so a report can show exactly what diverged.
pub fn check_card(
    card: TargetCard,
    pre: &GameState,
    post: &GameState,
    player: usize,
) -> Vec<Check> {
    let (Some(pre_player), Some(post_player)) =
        (pre.players.get(player), post.players.get(player))
    else {
        return vec![Check {
            label: "acting player in range".to_string(),
            passed: false,
            expected: format!("player {player} present in both snapshots"),
            actual: "missing".to_string(),
        }];
    };

    let hand_delta = post_player.hand.len() as i64 - pre_player.hand.len() as i64;
    let played_delta = post.played.len() as i64 - pre.played.len() as i64;
    let pre_total = (pre_player.total_cards() + pre.played.len()) as i64;
    let post_total = (post_player.total_cards() + post.played.len()) as i64;

    let mut checks = vec![
        expect_eq("hand size delta", expected_hand_delta(card), hand_delta),
        expect_eq("played pile delta", 1, played_delta),
        newly_played(card, pre, post),
        expect_eq("player card total", pre_total, post_total),
        expect_eq(
            "actions delta",
            expected_actions_delta(card),
            i64::from(post.actions) - i64::from(pre.actions),
        ),
        expect_eq(
            "buys delta",
            expected_buys_delta(card),
            i64::from(post.buys) - i64::from(pre.buys),
        ),
        expect_eq(
            "coins delta",
            0,
            i64::from(post.coins) - i64::from(pre.coins),
        ),
    ];

    match card {
        TargetCard::Adventurer => checks.push(treasures_on_top(post_player)),
        TargetCard::CouncilRoom => {
            for (other, (pre_other, post_other)) in
                pre.players.iter().zip(post.players.iter()).enumerate()
            {
                if other == player {
                    continue;
                }
                let expected = i64::from(pre_other.deck.total_len() > 0);
                let delta = post_other.hand.len() as i64 - pre_other.hand.len() as i64;
                checks.push(expect_eq(&format!("player {other} hand delta"), expected, delta));
                checks.push(expect_eq(
                    &format!("player {other} card total"),
                    pre_other.total_cards() as i64,
                    post_other.total_cards() as i64,
                ));
            }
        }
        _ => {}
    }
    if card != TargetCard::CouncilRoom {
        checks.push(others_untouched(pre, post, player));
    }
    checks
}

fn expected_hand_delta(card: TargetCard) -> i64 {
    match card {
        TargetCard::Adventurer => 1,
        TargetCard::Smithy => 2,
        TargetCard::Village => 0,
        TargetCard::CouncilRoom => 3,
    }
}

fn expected_actions_delta(card: TargetCard) -> i64 {
    match card {
        TargetCard::Village => 2,
        _ => 0,
    }
}

fn expected_buys_delta(card: TargetCard) -> i64 {
    match card {
        TargetCard::CouncilRoom => 1,
        _ => 0,
    }
}

fn expect_eq<T: PartialEq + Display>(label: &str, expected: T, actual: T) -> Check {
    Check {
        label: label.to_string(),
        passed: expected == actual,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn newly_played(card: TargetCard, pre: &GameState, post: &GameState) -> Check {
    let actual = post
        .played
        .get(pre.played.len())
        .map(|played| played.label())
        .unwrap_or("none");
    Check {
        label: "newly played card".to_string(),
        passed: actual == card.label(),
        expected: card.label().to_string(),
        actual: actual.to_string(),
    }
}

fn treasures_on_top(player_state: &PlayerState) -> Check {
    let hand = &player_state.hand;
    let passed = hand.len() >= 2
        && hand[hand.len() - 1].is_treasure()
        && hand[hand.len() - 2].is_treasure();
    let top: Vec<&str> = hand.iter().rev().take(2).map(|card| card.label()).collect();
    Check {
        label: "last two hand cards are treasures".to_string(),
        passed,
        expected: "two treasures".to_string(),
        actual: if top.is_empty() {
            "empty hand".to_string()
        } else {
            top.join(", ")
        },
    }
}

fn others_untouched(pre: &GameState, post: &GameState, player: usize) -> Check {
    let mut changed = Vec::new();
    for (other, (pre_other, post_other)) in
        pre.players.iter().zip(post.players.iter()).enumerate()
    {
        if other == player {
            continue;
        }
        if pre_other != post_other {
            changed.push(other.to_string());
        }
    }
    Check {
        label: "other players untouched".to_string(),
        passed: changed.is_empty(),
        expected: "no changes".to_string(),
        actual: if changed.is_empty() {
            "no changes".to_string()
        } else {
            format!("players {} changed", changed.join(", "))
        },
    }
}
