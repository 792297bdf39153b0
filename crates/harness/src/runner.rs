use crate::{check_card, generate_case, CardReport, CaseRecord, Check, HarnessConfig, SuiteReport, TargetCard};
use ruminion_core::{EventBus, RngState};
use std::collections::BTreeMap;

/// Tracks the verbose capture window. The first failing iteration is
/// captured in full, then the next `window` iterations are captured
/// whether they pass or fail. Everything after that is only counted.
struct DebugWindow {
    first_failure: Option<u32>,
    remaining: u32,
}

impl DebugWindow {
    fn new() -> Self {
        Self {
            first_failure: None,
            remaining: 0,
        }
    }

    fn observe(&mut self, iteration: u32, passed: bool, window: u32) -> bool {
        if self.first_failure.is_none() {
            if passed {
                return false;
            }
            self.first_failure = Some(iteration);
            self.remaining = window;
            return true;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return true;
        }
        false
    }
}

/// Run the full generate/play/check loop for one card. The RNG is
/// reseeded from the configured seed so each card's stream is
/// reproducible on its own.
pub fn run_card(card: TargetCard, config: &HarnessConfig) -> CardReport {
    let mut rng = RngState::from_seed(config.seed);
    let mut events = EventBus::default();
    let mut window = DebugWindow::new();
    let mut passes = 0u64;
    let mut failures = 0u64;
    let mut generation_attempts = 0u64;
    let mut failed_checks: BTreeMap<String, u64> = BTreeMap::new();
    let mut captured = Vec::new();

    for iteration in 0..config.iterations {
        let case = generate_case(card, config, &mut rng);
        generation_attempts += u64::from(case.attempts);
        let pre = case.state.clone();
        let mut post = case.state;
        let checks = match post.play_card(case.player, case.hand_index, &mut rng, &mut events) {
            Ok(_) => check_card(card, &pre, &post, case.player),
            Err(err) => vec![Check {
                label: "effect applied".to_string(),
                passed: false,
                expected: "ok".to_string(),
                actual: err.to_string(),
            }],
        };
        let drained: Vec<_> = events.drain().collect();
        let passed = checks.iter().all(|check| check.passed);
        if passed {
            passes += 1;
        } else {
            failures += 1;
            for check in checks.iter().filter(|check| !check.passed) {
                *failed_checks.entry(check.label.clone()).or_insert(0) += 1;
            }
        }
        if window.observe(iteration, passed, config.debug_window) {
            captured.push(CaseRecord {
                iteration,
                player: case.player,
                hand_index: case.hand_index,
                attempts: case.attempts,
                passed,
                checks,
                events: drained,
            });
        }
    }

    CardReport {
        card: card.label().to_string(),
        seed: config.seed,
        iterations: config.iterations,
        generation_attempts,
        passes,
        failures,
        first_failure: window.first_failure,
        failed_checks,
        captured,
    }
}

pub fn run_suite(cards: &[TargetCard], config: &HarnessConfig) -> SuiteReport {
    let reports = cards.iter().map(|card| run_card(*card, config)).collect();
    SuiteReport::from_cards(config.seed, config.iterations, reports)
}
