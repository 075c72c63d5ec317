//! Interactive console session.
//!
//! Reads one command per line, turns square pairs into candidate moves,
//! applies them when they appear in the current legal set, and redraws
//! the board after every change.

use crate::config::CliConfig;
use chess_core::{Move, Square, SquareParseError};
use chess_engine::{GameState, GameStatus};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Two squares: source then destination.
    Move(Square, Square),
    Undo,
    /// List the legal moves.
    Moves,
    Board,
    Help,
    Quit,
    Empty,
}

/// Parses one line of input.
///
/// Moves may be written `e2e4` or `e2 e4`.
pub fn parse_command(line: &str, undo_command: &str) -> Result<Command, SquareParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }
    if line.eq_ignore_ascii_case(undo_command) {
        return Ok(Command::Undo);
    }
    match line.to_ascii_lowercase().as_str() {
        "moves" => return Ok(Command::Moves),
        "board" => return Ok(Command::Board),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let compact: String = line.split_whitespace().collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(SquareParseError::InvalidFormat(line.to_string()));
    }
    let from: Square = compact[0..2].parse()?;
    let to: Square = compact[2..4].parse()?;
    Ok(Command::Move(from, to))
}

/// A console game bound to an input and an output stream.
pub struct Session<R, W> {
    game: GameState,
    legal: Vec<Move>,
    config: CliConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: CliConfig, input: R, output: W) -> Self {
        let mut game = GameState::new();
        let legal = game.legal_moves();
        Session {
            game,
            legal,
            config,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.draw()?;
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}> ", self.game.turn())?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Undecodable bytes become U+FFFD and fail square parsing.
            let line = String::from_utf8_lossy(&buf);
            match parse_command(&line, &self.config.undo_command) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        info!(plies = self.game.history().len(), "session ended");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Move(from, to) => {
                let candidate = Move::new(from, to, self.game.board());
                writeln!(self.output, "{}", candidate)?;
                let Some(&m) = self.legal.iter().find(|m| **m == candidate) else {
                    debug!(mv = %candidate, "rejected move");
                    return writeln!(self.output, "Illegal move: {}", candidate);
                };
                if let Err(e) = self.game.apply_move(m) {
                    return writeln!(self.output, "{}", e);
                }
                self.refresh()
            }
            Command::Undo => {
                match self.game.undo_move() {
                    Some(m) => writeln!(self.output, "Took back {}", m)?,
                    None => writeln!(self.output, "Nothing to undo")?,
                }
                self.refresh()
            }
            Command::Moves => self.list_moves(),
            Command::Board => self.draw(),
            Command::Help => self.help(),
            Command::Quit | Command::Empty => Ok(()),
        }
    }

    /// Recomputes the legal set after the position changed, then redraws.
    fn refresh(&mut self) -> io::Result<()> {
        self.legal = self.game.legal_moves();
        self.draw()?;
        match self.game.status() {
            GameStatus::Checkmate { winner } => {
                writeln!(self.output, "Checkmate. {} wins.", winner)
            }
            GameStatus::Stalemate => writeln!(self.output, "Stalemate."),
            GameStatus::Ongoing if self.game.in_check() => {
                writeln!(self.output, "{} is in check.", self.game.turn())
            }
            GameStatus::Ongoing => Ok(()),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.game.board())?;
        if self.config.show_legal_moves {
            self.list_moves()?;
        }
        Ok(())
    }

    fn list_moves(&mut self) -> io::Result<()> {
        let moves: Vec<String> = self.legal.iter().map(|m| m.to_string()).collect();
        writeln!(self.output, "{} legal: {}", moves.len(), moves.join(" "))
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "e2e4 or e2 e4  move a piece")?;
        writeln!(self.output, "{:<14} take back the last move", self.config.undo_command)?;
        writeln!(self.output, "moves          list legal moves")?;
        writeln!(self.output, "board          redraw the board")?;
        writeln!(self.output, "quit           leave")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Board, Color};
    use std::io::Cursor;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn run_script(script: &str, config: CliConfig) -> (GameState, String) {
        run_bytes(script.as_bytes(), config)
    }

    fn run_bytes(script: &[u8], config: CliConfig) -> (GameState, String) {
        let mut session = Session::new(config, Cursor::new(script.to_vec()), Vec::new());
        session.run().unwrap();
        let game = session.game().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (game, output)
    }

    #[test]
    fn parse_moves() {
        assert_eq!(
            parse_command("e2e4", "z"),
            Ok(Command::Move(sq("e2"), sq("e4")))
        );
        assert_eq!(
            parse_command("  g1 f3 \n", "z"),
            Ok(Command::Move(sq("g1"), sq("f3")))
        );
        assert!(parse_command("e2e9", "z").is_err());
        assert!(parse_command("hello", "z").is_err());
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("z", "z"), Ok(Command::Undo));
        assert_eq!(parse_command("Z", "z"), Ok(Command::Undo));
        assert_eq!(parse_command("undo", "undo"), Ok(Command::Undo));
        assert_eq!(parse_command("moves", "z"), Ok(Command::Moves));
        assert_eq!(parse_command("quit", "z"), Ok(Command::Quit));
        assert_eq!(parse_command("", "z"), Ok(Command::Empty));
    }

    #[test]
    fn plays_and_undoes() {
        let (game, output) = run_script("e2e4\ne7e5\nz\nquit\n", CliConfig::default());
        assert_eq!(game.move_log(), vec!["e2e4"]);
        assert_eq!(game.turn(), Color::Black);
        assert!(output.contains("Took back e7e5"));
    }

    #[test]
    fn illegal_move_is_reported() {
        let (game, output) = run_script("e2e5\n", CliConfig::default());
        assert!(game.history().is_empty());
        assert!(output.contains("Illegal move: e2e5"));
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let (game, output) = run_bytes(b"\xff\xfe\ne2e4\nquit\n", CliConfig::default());
        assert_eq!(game.move_log(), vec!["e2e4"]);
        assert!(output.contains("invalid square"));
    }

    #[test]
    fn parse_rejects_replacement_characters() {
        assert!(matches!(
            parse_command("\u{fffd}\u{fffd}", "z"),
            Err(SquareParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn announces_checkmate() {
        let (game, output) = run_script("f2f3\ne7e5\ng2g4\nd8h4\n", CliConfig::default());
        assert!(game.in_checkmate());
        assert!(output.contains("Checkmate. Black wins."));
    }

    #[test]
    fn lists_moves_when_configured() {
        let config = CliConfig {
            show_legal_moves: true,
            ..CliConfig::default()
        };
        let (_, output) = run_script("quit\n", config);
        assert!(output.contains("20 legal: a2a3 a2a4"));
    }

    #[test]
    fn undo_with_nothing_to_undo() {
        let (game, output) = run_script("z\n", CliConfig::default());
        assert!(output.contains("Nothing to undo"));
        assert_eq!(game.turn(), Color::White);
    }
}
