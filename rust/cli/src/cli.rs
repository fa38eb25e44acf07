//! Command-line argument definitions for the `pokersim` binary.

use clap::{Parser, Subcommand, ValueEnum};
use pokersim_engine::simulation::Target;

#[derive(Parser, Debug)]
#[command(
    name = "pokersim",
    version,
    about = "Five-card poker hand classification and Monte Carlo probability estimates"
)]
pub struct PokersimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal hands repeatedly and count how often a target hand appears
    #[command(alias = "sim")]
    Simulate {
        /// Hand classification to count (defaults to the configured target)
        #[arg(long, value_enum)]
        target: Option<TargetArg>,
        /// Run exactly N trials and print the percentage of hits
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), conflicts_with_all = ["hits", "first"])]
        trials: Option<u64>,
        /// Run until the target has appeared N times
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), conflicts_with = "first")]
        hits: Option<u64>,
        /// Stop at the first occurrence and print the hand
        #[arg(long)]
        first: bool,
        /// Base RNG seed (trial i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Give up after N trials when running with --hits or --first
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_trials: Option<u64>,
        /// Append every hit to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Shuffle a fresh deck, deal one hand and classify it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify five cards given as rank+suit, e.g. `A♠ 10♥`
    Classify {
        #[arg(num_args = 5, required = true, value_name = "CARD")]
        cards: Vec<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

/// Target hand for the `simulate` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Pair,
    TwoPair,
    Trip,
    FullHouse,
    Quad,
    Straight,
    Flush,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Pair => Target::Pair,
            TargetArg::TwoPair => Target::TwoPair,
            TargetArg::Trip => Target::Trip,
            TargetArg::FullHouse => Target::FullHouse,
            TargetArg::Quad => Target::Quad,
            TargetArg::Straight => Target::Straight,
            TargetArg::Flush => Target::Flush,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_enum_names_match_engine_names() {
        for arg in TargetArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, Target::from(*arg).as_str());
        }
    }

    #[test]
    fn sim_alias_and_equals_syntax() {
        let cli =
            PokersimCli::try_parse_from(["pokersim", "sim", "--target=straight", "--trials=10"])
                .unwrap();
        match cli.cmd {
            Commands::Simulate { target, trials, .. } => {
                assert_eq!(target, Some(TargetArg::Straight));
                assert_eq!(trials, Some(10));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn stop_flags_are_mutually_exclusive() {
        assert!(
            PokersimCli::try_parse_from(["pokersim", "simulate", "--trials", "5", "--hits", "2"])
                .is_err()
        );
        assert!(
            PokersimCli::try_parse_from(["pokersim", "simulate", "--hits", "2", "--first"])
                .is_err()
        );
    }

    #[test]
    fn zero_trials_rejected_by_parser() {
        assert!(PokersimCli::try_parse_from(["pokersim", "simulate", "--trials", "0"]).is_err());
    }

    #[test]
    fn classify_requires_five_cards() {
        assert!(PokersimCli::try_parse_from(["pokersim", "classify", "A♠", "K♠"]).is_err());
        assert!(
            PokersimCli::try_parse_from(["pokersim", "classify", "A♠", "K♠", "Q♠", "J♠", "10♠"])
                .is_ok()
        );
    }
}
