//! The interactive match loop

use std::io::{BufRead, Write};

use anyhow::Context;
use rps_logic::{play_turn, rules_text, MatchResult, MatchState};

use crate::cli::Cli;
use crate::render;

/// Play one match, reading a move per round from `input`
///
/// EOF and undecodable lines are played as input and waste their rounds;
/// only I/O failures end the match early.
pub fn play<R: BufRead, W: Write>(cli: &Cli, mut input: R, mut out: W) -> anyhow::Result<()> {
    let config = cli.match_config().context("invalid match length")?;
    let (mut opponent, seed) = cli.opponent();
    if let Some(seed) = seed {
        log::info!("opponent seed {}", seed);
    }

    if !cli.json {
        writeln!(out, "{}", rules_text(&config))?;
    }

    let mut state = MatchState::new(&config);
    let mut turns = Vec::with_capacity(config.max_rounds() as usize);
    let mut buf = Vec::new();

    while !state.is_over() {
        if !cli.json {
            write!(out, "\nEnter your move: ")?;
            out.flush().context("failed to flush prompt")?;
        }

        buf.clear();
        // EOF leaves the buffer empty
        input.read_until(b'\n', &mut buf).context("failed to read move")?;
        let line = String::from_utf8_lossy(&buf);

        let report = play_turn(&line, &mut state, opponent.as_mut());
        if cli.json {
            let json = serde_json::to_string(&report).context("failed to encode round")?;
            writeln!(out, "{json}")?;
        } else {
            writeln!(out, "{}", render::turn(&report))?;
        }
        turns.push(report);
    }

    let result = MatchResult::new(turns, &state);
    log::info!(
        "match over after {} rounds: {} ({}-{})",
        state.rounds_played(),
        result.verdict,
        result.user_score,
        result.bot_score
    );

    if cli.json {
        let json = serde_json::to_string(&result).context("failed to encode match result")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "\n{}", render::game_over(result.verdict))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn run(args: &[&str], input: &[u8]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("rps-referee").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        play(&cli, Cursor::new(input.to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scripted_match() {
        let out = run(&["--bot-moves", "scissors,rock,paper"], b"rock\nrock\nrock\n");

        assert!(out.starts_with("Rock-Paper-Scissors-Plus rules:\n- Best of 3 rounds"));
        assert_eq!(out.matches("Enter your move: ").count(), 3);
        assert!(out.contains("Round 1\nYou played: rock\nBot played: scissors\nWinner: user"));
        assert!(out.contains("Round 2\nYou played: rock\nBot played: rock\nWinner: draw"));
        assert!(out.contains("Round 3\nYou played: rock\nBot played: paper\nWinner: bot"));
        assert!(out.contains("Score: You 1, Bot 1"));
        assert!(out.ends_with("=== GAME OVER ===\nIt's a draw!\n"));
    }

    #[test]
    fn test_undecodable_line_wastes_round() {
        let out = run(&["--bot-moves", "scissors,rock,rock"], b"rock\n\xff\xfe\npaper\n");

        assert!(out.contains("Round 2\nInvalid move. Round wasted."));
        assert!(out.contains("Round 3\nYou played: paper\nBot played: rock\nWinner: user"));
        assert!(out.ends_with("=== GAME OVER ===\nYou win!\n"));
    }

    #[test]
    fn test_early_eof_wastes_remaining_rounds() {
        let out = run(&["--bot-moves", "rock", "-r", "3"], b"paper");

        assert!(out.contains("Round 1\nYou played: paper\nBot played: rock\nWinner: user"));
        assert!(out.contains("Round 2\nNo move provided. Round wasted."));
        assert!(out.contains("Round 3\nNo move provided. Round wasted."));
        assert!(out.ends_with("=== GAME OVER ===\nYou win!\n"));
    }

    #[test]
    fn test_json_output() {
        let out = run(&["--json", "--bot-moves", "paper,rock", "-r", "2"], b"scissors\nbomb\n");
        let lines: Vec<serde_json::Value> =
            out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["kind"], "resolved");
        assert_eq!(lines[0]["winner"], "user");
        assert_eq!(lines[1]["user_move"], "bomb");
        assert_eq!(lines[1]["user_score"], 2);
        assert_eq!(lines[2]["verdict"], "user");
        assert_eq!(lines[2]["turns"].as_array().unwrap().len(), 2);
        assert!(!out.contains("Enter your move"));
    }

    #[test]
    fn test_zero_rounds_is_an_error() {
        let cli = Cli::try_parse_from(["rps-referee", "-r", "0"]).unwrap();
        let mut out = Vec::new();
        assert!(play(&cli, Cursor::new(Vec::new()), &mut out).is_err());
        assert!(out.is_empty());
    }
}
