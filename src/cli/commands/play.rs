//! Play command - interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    Error,
    cli::{
        config::EngineArgs,
        output::{describe, render_board},
    },
    tictactoe::{GameSession, MoveOutcome, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the AI")]
pub struct PlayArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// A line typed at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Cell(usize),
    Quit,
}

/// Accepts `q`, a cell index `0-8`, or `row col` counted from 1
fn parse_input(line: &str) -> std::result::Result<Input, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Input::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [index] => index
            .parse::<usize>()
            .map(Input::Cell)
            .map_err(|_| format!("'{index}' is not a cell number")),
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("bad row '{row}'"))?;
            let col: usize = col.parse().map_err(|_| format!("bad column '{col}'"))?;
            if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
                return Err("row and column must be between 1 and 3".to_string());
            }
            Ok(Input::Cell((row - 1) * 3 + (col - 1)))
        }
        _ => Err("enter a cell 0-8, a 'row col' pair, or q to quit".to_string()),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn report_ai<W: Write>(out: &mut W, outcome: &MoveOutcome) -> Result<()> {
    writeln!(out, "AI plays {}", outcome.position)?;
    Ok(())
}

/// Play one game. Returns `false` if the user quit or input ended.
fn play_one<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    session.reset();
    if session.to_move() == Some(Side::Ai) {
        let outcome = session.play_ai()?;
        report_ai(out, &outcome)?;
    }

    while session.to_move().is_some() {
        write!(out, "\n{}\nYour move: ", render_board(session.board()))?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let position = match parse_input(&line) {
            Ok(Input::Quit) => return Ok(false),
            Ok(Input::Cell(position)) => position,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match session.play_player(position) {
            Ok(turn) => {
                if let Some(ai) = &turn.ai {
                    report_ai(out, ai)?;
                }
            }
            Err(err @ Error::InvalidMove { .. }) => {
                debug!(%err, "rejected player move");
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(
        out,
        "\n{}\n{}",
        render_board(session.board()),
        describe(&session.evaluation())
    )?;
    Ok(true)
}

/// Game loop over arbitrary input and output streams
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "You are X, the AI is O. Enter 0-8 or 'row col'; q quits.")?;
    loop {
        if !play_one(session, input, out)? {
            break;
        }

        write!(out, "Play again? [y/N] ")?;
        out.flush()?;
        let again = read_line(input)?
            .map(|line| line.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false);
        if !again {
            break;
        }
    }
    writeln!(out, "Bye!")?;
    Ok(())
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = GameSession::new(args.engine.to_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, &mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::EngineConfig, tictactoe::GameStatus};

    fn play_script(config: EngineConfig, script: &str) -> (GameSession, String) {
        let mut session = GameSession::new(config);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run(&mut session, &mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("4\n"), Ok(Input::Cell(4)));
        assert_eq!(parse_input(" 2 3 "), Ok(Input::Cell(5)));
        assert_eq!(parse_input("3,1"), Ok(Input::Cell(6)));
        assert_eq!(parse_input("Q"), Ok(Input::Quit));
        assert!(parse_input("4 4").is_err());
        assert!(parse_input("abc").is_err());
        assert!(parse_input("").is_err());
    }

    #[test]
    fn test_quit_ends_session() {
        let (session, out) = play_script(EngineConfig::default(), "4\nq\n");
        assert_eq!(session.history().len(), 2);
        assert!(out.contains("AI plays 0"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_rejected_move_prompts_again() {
        // The AI answers a centre opening in the corner at 0
        let (session, out) = play_script(EngineConfig::default(), "4\n0\n9\nq\n");
        assert!(out.contains("occupied"));
        assert!(out.contains("out of bounds"));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_ai_opens_when_configured() {
        let config = EngineConfig::new().with_opener(Side::Ai);
        let (session, out) = play_script(config, "q\n");
        assert!(out.starts_with("You are X"));
        assert!(out.contains("AI plays 0"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_full_game_then_decline_replay() {
        // Feed every cell in order; occupied ones are rejected and skipped
        let moves: String = (0..9).map(|i| format!("{i}\n")).collect();
        let (session, out) = play_script(EngineConfig::default(), &format!("{moves}n\n"));
        assert!(session.status().is_terminal());
        assert_ne!(session.status(), GameStatus::PlayerWon);
        assert!(out.contains("Play again?"));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (session, _) = play_script(EngineConfig::default(), "");
        assert!(session.history().is_empty());
    }
}
