//! Text output for the terminal

use rps_logic::{TurnReport, Verdict};

pub fn turn(report: &TurnReport) -> String {
    match report {
        TurnReport::Wasted { round, reason } => {
            format!("Round {round}\n{}. Round wasted.", capitalize(reason.as_str()))
        }
        TurnReport::Resolved {
            round,
            user_move,
            bot_move,
            winner,
            user_score,
            bot_score,
        } => format!(
            "Round {round}\n\
             You played: {user_move}\n\
             Bot played: {bot_move}\n\
             Winner: {winner}\n\
             Score: You {user_score}, Bot {bot_score}"
        ),
    }
}

pub fn game_over(verdict: Verdict) -> String {
    let line = match verdict {
        Verdict::User => "You win!",
        Verdict::Bot => "Bot wins!",
        Verdict::Draw => "It's a draw!",
    };
    format!("=== GAME OVER ===\n{line}")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
