use crate::{Check, HarnessError};
use ruminion_core::Event;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Verbose capture of a single iteration: the fixture coordinates, every
/// evaluated check, and the engine events the effect produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseRecord {
    pub iteration: u32,
    pub player: usize,
    pub hand_index: usize,
    pub attempts: u32,
    pub passed: bool,
    pub checks: Vec<Check>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardReport {
    pub card: String,
    pub seed: u64,
    pub iterations: u32,
    pub generation_attempts: u64,
    pub passes: u64,
    pub failures: u64,
    #[serde(default)]
    pub first_failure: Option<u32>,
    #[serde(default)]
    pub failed_checks: BTreeMap<String, u64>,
    #[serde(default)]
    pub captured: Vec<CaseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteReport {
    pub seed: u64,
    pub iterations: u32,
    pub cards: Vec<CardReport>,
    pub total_passes: u64,
    pub total_failures: u64,
}

impl SuiteReport {
    pub fn from_cards(seed: u64, iterations: u32, cards: Vec<CardReport>) -> Self {
        let total_passes = cards.iter().map(|card| card.passes).sum();
        let total_failures = cards.iter().map(|card| card.failures).sum();
        Self {
            seed,
            iterations,
            cards,
            total_passes,
            total_failures,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.total_failures == 0
    }

    pub fn summary_line(&self) -> String {
        format!(
            "generated {} cases, {} passed, {} failed",
            self.total_passes + self.total_failures,
            self.total_passes,
            self.total_failures
        )
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "random card effect testing, seed = {}, iterations per card = {}",
                self.seed, self.iterations
            ),
            String::new(),
        ];
        for card in &self.cards {
            lines.push(format!("== {} ==", card.card));
            lines.push(format!(
                "generated {} cases ({} generation attempts), {} passed, {} failed",
                card.passes + card.failures,
                card.generation_attempts,
                card.passes,
                card.failures
            ));
            if let Some(first) = card.first_failure {
                lines.push(format!("first failure at iteration {first}"));
            }
            if !card.failed_checks.is_empty() {
                lines.push("failing checks:".to_string());
                for (label, count) in &card.failed_checks {
                    lines.push(format!("  {label}: {count}"));
                }
            }
            for case in &card.captured {
                lines.push(format!(
                    "case #{} player {} hand_index {} attempts {} [{}]",
                    case.iteration,
                    case.player,
                    case.hand_index,
                    case.attempts,
                    if case.passed { "ok" } else { "FAILED" }
                ));
                for check in &case.checks {
                    lines.push(format!(
                        "  {}: expected {}, actual {} [{}]",
                        check.label,
                        check.expected,
                        check.actual,
                        if check.passed { "ok" } else { "FAILED" }
                    ));
                }
                lines.push(format!("  events: {}", case.events.len()));
            }
            lines.push(String::new());
        }
        lines.push(format!("== summary: {} ==", self.summary_line()));
        lines.join("\n")
    }
}

pub fn write_json(path: &Path, report: &SuiteReport) -> Result<(), HarnessError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &SuiteReport) -> Result<(), HarnessError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
