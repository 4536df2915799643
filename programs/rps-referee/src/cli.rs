//! Command-line arguments

use clap::Parser;
use rps_logic::{MatchConfig, Move, Picker, ScriptedPicker, SeededRng};

/// Referee a best-of-N Rock-Paper-Scissors-Bomb match against the computer
#[derive(Parser, Debug)]
#[command(name = "rps-referee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of rounds in the match
    #[arg(short, long, default_value = "3")]
    pub rounds: u32,

    /// Seed for the opponent; drawn at random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Script the opponent's moves instead of picking at random
    #[arg(long, value_delimiter = ',', conflicts_with = "seed")]
    pub bot_moves: Option<Vec<Move>>,

    /// Print one JSON object per round instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn match_config(&self) -> rps_logic::Result<MatchConfig> {
        MatchConfig::new(self.rounds)
    }

    /// Build the opponent, returning it with the seed it was given
    pub fn opponent(&self) -> (Box<dyn Picker>, Option<u64>) {
        if let Some(moves) = &self.bot_moves {
            return (Box::new(ScriptedPicker::new(moves.iter().copied())), None);
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        (Box::new(SeededRng::new(seed)), Some(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rps-referee"]).unwrap();
        assert_eq!(cli.rounds, 3);
        assert_eq!(cli.seed, None);
        assert!(cli.bot_moves.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_bot_moves_parse() {
        let cli = Cli::try_parse_from(["rps-referee", "--bot-moves", "rock,Bomb,scissor"]).unwrap();
        assert_eq!(cli.bot_moves, Some(vec![Move::Rock, Move::Bomb, Move::Scissors]));
        let (_, seed) = cli.opponent();
        assert_eq!(seed, None);
    }

    #[test]
    fn test_bad_bot_move_rejected() {
        assert!(Cli::try_parse_from(["rps-referee", "--bot-moves", "rock,lizard"]).is_err());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let cli = Cli::try_parse_from(["rps-referee", "-r", "0"]).unwrap();
        assert!(cli.match_config().is_err());
    }

    #[test]
    fn test_seed_is_reported() {
        let cli = Cli::try_parse_from(["rps-referee", "--seed", "17"]).unwrap();
        let (_, seed) = cli.opponent();
        assert_eq!(seed, Some(17));
    }
}
