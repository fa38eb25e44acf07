//! Monte Carlo driver: deal fresh hands until a stop rule is satisfied.
//!
//! Every trial builds a new [`Deck`], shuffles it and deals one [`Hand`].
//! Trial `i` (0-based) seeds its deck with `base_seed + i`, so a run is fully
//! reproducible from its seed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::deck::Deck;
use crate::errors::SimulationError;
use crate::hand::Hand;
use crate::logger::{HitRecord, HitSink};

/// Classification a simulation counts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    Pair,
    TwoPair,
    Trip,
    FullHouse,
    Quad,
    Straight,
    Flush,
}

impl Target {
    pub const ALL: [Target; 7] = [
        Target::Pair,
        Target::TwoPair,
        Target::Trip,
        Target::FullHouse,
        Target::Quad,
        Target::Straight,
        Target::Flush,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Pair => "pair",
            Target::TwoPair => "two-pair",
            Target::Trip => "trip",
            Target::FullHouse => "full-house",
            Target::Quad => "quad",
            Target::Straight => "straight",
            Target::Flush => "flush",
        }
    }

    /// Evaluates the matching predicate. `Straight` sorts the hand.
    pub fn matches(&self, hand: &mut Hand) -> bool {
        match self {
            Target::Pair => hand.is_pair(),
            Target::TwoPair => hand.is_two_pair(),
            Target::Trip => hand.is_trip(),
            Target::FullHouse => hand.is_full_house(),
            Target::Quad => hand.is_quad(),
            Target::Straight => hand.is_straight(),
            Target::Flush => hand.is_flush(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Target::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| format!("Unknown target: {}", s))
    }
}

/// When a run ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopRule {
    /// Exactly this many trials.
    Trials(u64),
    /// Until the target has occurred this many times.
    Hits(u64),
    /// Until the first occurrence.
    FirstHit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub target: Target,
    pub stop: StopRule,
    /// Base seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Upper bound on trials for `Hits` and `FirstHit` runs.
    pub max_trials: Option<u64>,
}

impl SimulationConfig {
    pub fn new(target: Target, stop: StopRule) -> Self {
        Self {
            target,
            stop,
            seed: None,
            max_trials: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_trials(mut self, max_trials: u64) -> Self {
        self.max_trials = Some(max_trials);
        self
    }
}

/// The first hand that satisfied the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstHit {
    pub trial: u64,
    pub hand: Hand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub target: Target,
    pub stop: StopRule,
    pub seed: u64,
    pub trials: u64,
    pub hits: u64,
    /// False when `max_trials` ended the run before its stop rule.
    pub completed: bool,
    pub first_hit: Option<FirstHit>,
}

impl SimulationReport {
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 / self.trials as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        100.0 * self.probability()
    }

    pub fn trials_per_hit(&self) -> Option<f64> {
        (self.hits > 0).then(|| self.trials as f64 / self.hits as f64)
    }
}

fn stop_reached(stop: StopRule, trials: u64, hits: u64) -> bool {
    match stop {
        StopRule::Trials(n) => trials >= n,
        StopRule::Hits(n) => hits >= n,
        StopRule::FirstHit => hits >= 1,
    }
}

/// Runs the simulation described by `config`, forwarding every hit to `sink`.
///
/// # Errors
///
/// Returns [`SimulationError::ZeroTrials`] / [`SimulationError::ZeroHits`] for
/// empty stop rules, and [`SimulationError::Record`] when the sink fails.
pub fn simulate(
    config: &SimulationConfig,
    mut sink: Option<&mut dyn HitSink>,
) -> Result<SimulationReport, SimulationError> {
    match config.stop {
        StopRule::Trials(0) => return Err(SimulationError::ZeroTrials),
        StopRule::Hits(0) => return Err(SimulationError::ZeroHits),
        _ => {}
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let cap = match config.stop {
        StopRule::Trials(_) => None,
        StopRule::Hits(_) | StopRule::FirstHit => config.max_trials,
    };

    let mut trials = 0u64;
    let mut hits = 0u64;
    let mut first_hit = None;
    let mut completed = true;

    info!(classification = %config.target, seed = base_seed, "simulation started");

    while !stop_reached(config.stop, trials, hits) {
        if cap.is_some_and(|max| trials >= max) {
            completed = false;
            break;
        }

        let seed = base_seed.wrapping_add(trials);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let mut hand = Hand::deal(&mut deck)?;
        trials += 1;
        trace!(trial = trials, hand = %hand, "dealt");

        if !config.target.matches(&mut hand) {
            continue;
        }
        hits += 1;
        debug!(trial = trials, hits, hand = %hand, "target hit");

        if let Some(s) = sink.as_deref_mut() {
            let record = HitRecord {
                trial: trials,
                seed,
                target: config.target,
                cards: hand.cards().to_vec(),
                ts: None,
            };
            s.record(&record)
                .map_err(|e| SimulationError::Record(e.to_string()))?;
        }
        if first_hit.is_none() {
            first_hit = Some(FirstHit {
                trial: trials,
                hand,
            });
        }
    }

    let report = SimulationReport {
        target: config.target,
        stop: config.stop,
        seed: base_seed,
        trials,
        hits,
        completed,
        first_hit,
    };
    info!(
        trials = report.trials,
        hits = report.hits,
        completed = report.completed,
        "simulation finished"
    );
    Ok(report)
}
