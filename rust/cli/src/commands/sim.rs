//! Simulation command handler for Monte Carlo probability estimates.
//!
//! Runs the engine's trial loop in one of three modes and reports the result:
//!
//! - `--trials N`: fixed number of trials, prints the hit percentage
//! - `--hits N`: run until N hits, prints the percentage and trials per hit
//! - `--first`: run until the first hit, prints the trial number and hand
//!
//! With none of them, the configured trial count is used.
//!
//! # Examples
//!
//! ```no_run
//! use pokersim_cli::commands::sim::{handle_sim_command, SimOptions};
//! use pokersim_cli::config::Config;
//! use pokersim_engine::simulation::Target;
//! use std::io;
//!
//! let opts = SimOptions {
//!     target: Some(Target::Straight),
//!     trials: Some(100_000),
//!     seed: Some(42),
//!     ..SimOptions::default()
//! };
//! handle_sim_command(&opts, &Config::default(), &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_percentage};
use crate::ui;
use pokersim_engine::logger::{HitLogger, HitSink};
use pokersim_engine::simulation::{simulate, SimulationConfig, SimulationReport, StopRule, Target};
use std::io::Write;

/// Command-line overrides for a simulation run. `None` falls back to config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimOptions {
    pub target: Option<Target>,
    pub trials: Option<u64>,
    pub hits: Option<u64>,
    pub first: bool,
    pub seed: Option<u64>,
    pub max_trials: Option<u64>,
    pub output: Option<String>,
}

impl SimOptions {
    fn stop_rule(&self, cfg: &Config) -> StopRule {
        if self.first {
            StopRule::FirstHit
        } else if let Some(n) = self.hits {
            StopRule::Hits(n)
        } else {
            StopRule::Trials(self.trials.unwrap_or(cfg.trials))
        }
    }
}

/// Handle the simulate command.
///
/// # Arguments
///
/// * `opts` - Flags given on the command line
/// * `cfg` - Resolved configuration supplying defaults
/// * `out` - Output stream for the report
/// * `err` - Output stream for warnings and errors
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_sim_command(
    opts: &SimOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut sim = SimulationConfig::new(opts.target.unwrap_or(cfg.target), opts.stop_rule(cfg));
    sim.seed = opts.seed.or(cfg.seed);
    sim.max_trials = opts.max_trials.or(cfg.max_trials);

    let mut logger = match opts.output.as_deref() {
        Some(p) => Some(HitLogger::create(p).map_err(|e| {
            CliError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open {}: {}", p, e),
            ))
        })?),
        None => None,
    };

    tracing::debug!(?sim, "running simulation");
    let report = simulate(&sim, logger.as_mut().map(|l| l as &mut dyn HitSink))?;

    if let Some(l) = logger.as_mut() {
        l.flush()?;
    }

    write_report(&report, out)?;

    if let (Some(l), Some(p)) = (&logger, &opts.output) {
        writeln!(out, "Recorded: {} hits to {}", l.written(), p)?;
    }

    if !report.completed {
        ui::display_warning(
            err,
            &format!(
                "stopped after {} trials before the run finished (--max-trials)",
                report.trials
            ),
        )?;
    }
    Ok(())
}

fn write_report(report: &SimulationReport, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Target: {}", report.target)?;
    writeln!(out, "Seed: {}", report.seed)?;

    if report.stop == StopRule::FirstHit {
        match &report.first_hit {
            Some(hit) => writeln!(
                out,
                "Found {} on trial {}: {}",
                report.target,
                hit.trial,
                format_cards(hit.hand.cards())
            )?,
            None => writeln!(out, "No {} in {} trials", report.target, report.trials)?,
        }
        return Ok(());
    }

    writeln!(out, "Trials: {}", report.trials)?;
    writeln!(out, "Hits: {}", report.hits)?;
    writeln!(out, "Probability: {}", format_percentage(report.percentage()))?;
    if let StopRule::Hits(_) = report.stop {
        match report.trials_per_hit() {
            Some(tph) => writeln!(out, "Trials per hit: {:.2}", tph)?,
            None => writeln!(out, "Trials per hit: n/a")?,
        }
    }
    Ok(())
}
