//! Line-oriented text front end and command loop.
//!
//! Reads one command per line, drives a `JanggiGame` and reports results as
//! `info string ...` lines. Board dumps from `board` are printed verbatim.

use std::io::{self, BufRead, Write};

use crate::game_state::game_config::GameConfig;
use crate::game_state::janggi_game::JanggiGame;
use crate::game_state::janggi_types::Color;
use crate::moves::move_descriptions::{MoveOutcome, PlayerMove};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_board::render_board;

pub fn run_stdio_loop(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TextSession::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextSession {
    game: JanggiGame,
    config: GameConfig,
}

impl TextSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: JanggiGame::with_config(config),
            config,
        }
    }

    pub fn game(&self) -> &JanggiGame {
        &self.game
    }

    /// Handle one command line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "newgame" => {
                self.game = JanggiGame::with_config(self.config);
                writeln!(out, "info string new game, {} to move", self.game.side_to_move())?;
            }
            "move" => match self.handle_move(&args) {
                Ok(report) => writeln!(out, "info string {report}")?,
                Err(err) => writeln!(out, "info string move error: {err}")?,
            },
            "pass" => match self.handle_pass(&args) {
                Ok(report) => writeln!(out, "info string {report}")?,
                Err(err) => writeln!(out, "info string pass error: {err}")?,
            },
            "board" => {
                writeln!(out, "{}", render_board(self.game.board()))?;
            }
            "layout" => {
                writeln!(out, "info string layout {}", self.game.layout())?;
            }
            "moves" => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(PlayerMove::to_string)
                    .collect();
                writeln!(out, "info string moves {} {}", moves.len(), moves.join(" "))?;
            }
            "state" => {
                writeln!(
                    out,
                    "info string state {} last {} history {}",
                    self.game.game_state().name(),
                    self.game.last_mover(),
                    self.game.history().len()
                )?;
            }
            "check" => match args.first().and_then(|text| parse_color(text)) {
                Some(color) => writeln!(
                    out,
                    "info string check {} {} mate {}",
                    color,
                    self.game.is_in_check(color),
                    self.game.is_checkmated(color)
                )?,
                None => writeln!(out, "info string check error: expected red or blue")?,
            },
            "quit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "info string unknown command '{other}'")?;
            }
        }

        Ok(false)
    }

    fn handle_move(&mut self, args: &[&str]) -> Result<String, String> {
        let [from, to] = args else {
            return Err("usage: move <from> <to>".to_owned());
        };
        let from = algebraic_to_square(from).map_err(|err| err.to_string())?;
        let to = algebraic_to_square(to).map_err(|err| err.to_string())?;
        self.play(PlayerMove::from_squares(from, to))
    }

    fn handle_pass(&mut self, args: &[&str]) -> Result<String, String> {
        let [at] = args else {
            return Err("usage: pass <square>".to_owned());
        };
        let at = algebraic_to_square(at).map_err(|err| err.to_string())?;
        self.play(PlayerMove::Pass { at })
    }

    fn play(&mut self, mv: PlayerMove) -> Result<String, String> {
        let outcome = self.game.try_move(mv).map_err(|err| {
            format!("{err} (state {})", self.game.game_state().name())
        })?;

        Ok(match outcome {
            MoveOutcome::Passed => format!("{} passed", self.game.last_mover()),
            MoveOutcome::Moved { captured: None } => format!("played {mv}"),
            MoveOutcome::Moved {
                captured: Some(piece),
            } => format!("played {mv} capturing {piece}"),
            MoveOutcome::CapturedGeneral { winner } => {
                format!("played {mv} capturing the general; {winner} wins")
            }
        })
    }
}

fn parse_color(text: &str) -> Option<Color> {
    if text.eq_ignore_ascii_case("red") {
        Some(Color::Red)
    } else if text.eq_ignore_ascii_case("blue") {
        Some(Color::Blue)
    } else {
        None
    }
}
