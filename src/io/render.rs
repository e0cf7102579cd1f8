//! Text for every screen the game prints.
//!
//! Functions here are pure: they build strings from game values and leave
//! writing to the caller.

use crate::core::{Move, Player, Seat};
use crate::rules::{MatchResult, RuleTable};

pub const GAME_TITLE: &str = "Rock, Paper, Scissors, Lizard, Spock";

pub const NAME_PROMPT: &str = "Please enter your name to get started: ";
pub const INVALID_NAME: &str = "That is not valid input.";
pub const MOVE_PROMPT: &str = "Choose from: (R)OCK, (P)APER, (SC)ISSORS, (L)IZARD, or (SP)OCK:";
pub const INVALID_MOVE: &str = "Sorry, invalid choice.";
pub const HISTORY_PROMPT: &str = "Enter 'h' to see history of past moves, or press 'enter' to continue.";
pub const INVALID_HISTORY: &str = "Sorry, invalid input! Please enter 'h' or press 'enter'.";
pub const REPLAY_PROMPT: &str = "Would you like to play again? (y/n)";
pub const INVALID_REPLAY: &str = "Invalid input!";
pub const CONTINUE_PROMPT: &str = "Press 'enter' to continue";

/// English word for small counts, digits otherwise.
#[must_use]
pub fn count_word(n: u32) -> String {
    const WORDS: [&str; 10] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    match n {
        1..=10 => WORDS[n as usize - 1].to_string(),
        _ => n.to_string(),
    }
}

#[must_use]
pub fn welcome(name: &str) -> String {
    format!("Hi, {}!\n\nWelcome to {}.", name, GAME_TITLE)
}

/// One line per move listing what it beats, then the match length.
#[must_use]
pub fn rules(round_limit: u32) -> String {
    let mut lines = vec![String::new()];
    for m in RuleTable::DISPLAY_ORDER {
        let [a, b] = RuleTable::defeats(m);
        lines.push(format!("{} beats {} and {}", m.shout(), a.shout(), b.shout()));
    }
    lines.push(String::new());
    let unit = if round_limit == 1 { "round" } else { "rounds" };
    lines.push(format!(
        "You will be playing best of {} {} against Computer. Best of luck!",
        count_word(round_limit),
        unit
    ));
    lines.join("\n")
}

#[must_use]
pub fn round_header(round: u32, round_limit: u32) -> String {
    format!("Round {} of {}\n", round, round_limit)
}

/// `stage` is "Current" or "Final".
#[must_use]
pub fn scoreboard(stage: &str, human: &Player, computer: &Player) -> String {
    format!(
        "{} Scoreboard: \n{}: {}\n{}: {}\n",
        stage,
        human.name(),
        human.score(),
        computer.name(),
        computer.score()
    )
}

#[must_use]
pub fn round_reveal(human_name: &str, human: Move, computer: Move, winner: Option<Seat>) -> String {
    let verdict = match winner {
        Some(Seat::Human) => format!("{} won the round!", human_name),
        Some(Seat::Computer) => "Computer won the round!".to_string(),
        None => "That's a tie!".to_string(),
    };
    format!(
        "\nYou chose: {}\nThe computer chose: {}\n\n{}",
        human.shout(),
        computer.shout(),
        verdict
    )
}

/// `<name>'s past <k> moves: a, b, c`
#[must_use]
pub fn past_moves(player: &Player, window: usize) -> String {
    let recent = player.recent_moves(window);
    let listed: Vec<&str> = recent.iter().map(|m| m.name()).collect();
    format!("{}'s past {} moves: {}", player.name(), recent.len(), listed.join(", "))
}

#[must_use]
pub fn match_winner(human_name: &str, result: MatchResult) -> String {
    match result {
        MatchResult::Winner(Seat::Computer) => "Computer won the match! GG!\n".to_string(),
        MatchResult::Winner(Seat::Human) => format!("{} won the match! Strong work!\n", human_name),
        MatchResult::Tie => "The match was a tie! Great game!\n".to_string(),
    }
}

#[must_use]
pub fn goodbye(name: &str) -> String {
    format!("\nThanks for playing {}. Goodbye, {}!", GAME_TITLE, name)
}
