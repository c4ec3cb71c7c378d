//! Line-oriented terminal front-end for the editor.
//!
//! Reads one command per line, applies it to an `EditorSession`, and writes
//! replies to the given output. Board errors are reported on the output and
//! the loop keeps going; only I/O errors end it early.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::board_types::Color;
use crate::editor::random_mover::random_move;
use crate::editor::selection::{EditorSession, ReleaseOutcome};
use crate::errors::BoardResult;
use crate::move_generation::attack_checks::is_in_check;
use crate::utils::algebraic::{algebraic_to_square, square_label};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

const HELP: &str = "\
commands:
  print | p              show the board
  fen                    show the placement field
  load <fen>             replace the position
  reset                  back to the starting position
  select <sq>            select a piece and list its hints
  hints                  list hints of the selected piece
  move <from> <to>       move a piece to one of its hints
  press <x> <y>          left press at a pixel position
  release <x> <y>        left release at a pixel position
  pieces                 list every piece
  check                  report which kings are attacked
  random <white|black>   play a random move for one side
  help                   this text
  quit                   leave";

pub fn run_stdio_loop(session: EditorSession, seed: Option<u64>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = CommandState::new(session, seed);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = state.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct CommandState {
    session: EditorSession,
    rng: StdRng,
}

impl CommandState {
    pub fn new(session: EditorSession, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { session, rng }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Handle one line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP}").map(Ok)?,
            "print" | "p" => {
                writeln!(out, "{}", render_board(self.session.board()))?;
                writeln!(out, "---------------")?;
                Ok(())
            }
            "fen" => writeln!(out, "{}", self.session.board().to_placement()).map(Ok)?,
            "load" => self.handle_load(&args, out)?,
            "reset" => {
                self.session.load(Board::starting_position());
                Ok(())
            }
            "select" => self.handle_select(&args, out)?,
            "hints" => self.write_hints(out).map(Ok)?,
            "move" => self.handle_move(&args, out)?,
            "press" => self.handle_press(&args, out)?,
            "release" => self.handle_release(&args, out)?,
            "pieces" => self.write_pieces(out).map(Ok)?,
            "check" => self.write_check(out).map(Ok)?,
            "random" => self.handle_random(&args, out)?,
            other => {
                warn!("unknown command {other}");
                writeln!(out, "unknown command '{other}', try 'help'")?;
                Ok(())
            }
        };

        if let Err(err) = result {
            writeln!(out, "error: {err}")?;
        }
        Ok(false)
    }

    fn handle_load(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        if args.is_empty() {
            writeln!(out, "usage: load <fen>")?;
            return Ok(Ok(()));
        }
        Ok(parse_fen(&args.join(" ")).map(|board| self.session.load(board)))
    }

    fn handle_select(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        let [square] = args else {
            writeln!(out, "usage: select <sq>")?;
            return Ok(Ok(()));
        };
        let square = match algebraic_to_square(square) {
            Ok(square) => square,
            Err(err) => return Ok(Err(err)),
        };
        if self.session.click_square(square).is_none() {
            writeln!(out, "nothing to select")?;
            return Ok(Ok(()));
        }
        self.write_hints(out)?;
        Ok(Ok(()))
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        let [from, to] = args else {
            writeln!(out, "usage: move <from> <to>")?;
            return Ok(Ok(()));
        };
        let squares = algebraic_to_square(from).and_then(|f| Ok((f, algebraic_to_square(to)?)));
        let (from, to) = match squares {
            Ok(pair) => pair,
            Err(err) => return Ok(Err(err)),
        };
        match self.session.move_piece(from, to) {
            Ok(candidate) => {
                writeln!(out, "{candidate}")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn handle_press(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        let Some((x, y)) = parse_pixel(args) else {
            writeln!(out, "usage: press <x> <y>")?;
            return Ok(Ok(()));
        };
        match self.session.press(x, y) {
            Some(square) => writeln!(out, "holding {}", square_label(square))?,
            None => writeln!(out, "nothing under pointer")?,
        }
        Ok(Ok(()))
    }

    fn handle_release(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        let Some((x, y)) = parse_pixel(args) else {
            writeln!(out, "usage: release <x> <y>")?;
            return Ok(Ok(()));
        };
        match self.session.release(x, y) {
            Ok(ReleaseOutcome::Moved(candidate)) => writeln!(out, "{candidate}")?,
            Ok(ReleaseOutcome::Kept) => writeln!(out, "still selected")?,
            Ok(ReleaseOutcome::Idle) => {}
            Err(err) => return Ok(Err(err)),
        }
        Ok(Ok(()))
    }

    fn handle_random(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<BoardResult<()>> {
        let color = match args.first().copied() {
            Some("white") | Some("w") | None => Color::Light,
            Some("black") | Some("b") => Color::Dark,
            Some(_) => {
                writeln!(out, "usage: random <white|black>")?;
                return Ok(Ok(()));
            }
        };
        let Some(candidate) = random_move(self.session.board(), color, &mut self.rng) else {
            writeln!(out, "no moves")?;
            return Ok(Ok(()));
        };
        match self.session.move_piece(candidate.from, candidate.to) {
            Ok(played) => {
                info!("random move {played}");
                writeln!(out, "{played}")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn write_hints(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(selection) = self.session.selected() else {
            return writeln!(out, "nothing selected");
        };
        let hints: Vec<String> = selection
            .hints
            .iter()
            .map(|m| {
                let to = square_label(m.to);
                if m.is_capture() {
                    format!("x{to}")
                } else {
                    to
                }
            })
            .collect();
        writeln!(
            out,
            "{} on {}: {}",
            selection.piece.fen_char(),
            square_label(selection.square),
            if hints.is_empty() { "-".to_owned() } else { hints.join(" ") }
        )
    }

    fn write_pieces(&self, out: &mut impl Write) -> io::Result<()> {
        for placed in self.session.board().pieces() {
            writeln!(out, "{} {}", placed.piece.fen_char(), square_label(placed.square))?;
        }
        Ok(())
    }

    fn write_check(&self, out: &mut impl Write) -> io::Result<()> {
        let board = self.session.board();
        for (name, color) in [("white", Color::Light), ("black", Color::Dark)] {
            let status = if is_in_check(board, color) { "in check" } else { "not in check" };
            writeln!(out, "{name}: {status}")?;
        }
        Ok(())
    }
}

fn parse_pixel(args: &[&str]) -> Option<(u32, u32)> {
    let [x, y] = args else {
        return None;
    };
    Some((x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::CommandState;
    use crate::board::board::Board;
    use crate::editor::selection::EditorSession;

    fn run(state: &mut CommandState, line: &str) -> String {
        let mut out = Vec::new();
        state.handle_command(line, &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output is utf-8")
    }

    fn new_state() -> CommandState {
        CommandState::new(EditorSession::new(Board::starting_position(), 100), Some(3))
    }

    #[test]
    fn select_lists_hints() {
        let mut state = new_state();
        assert_eq!(run(&mut state, "select e2"), "P on e2: e3 e4\n");
        assert_eq!(run(&mut state, "select e1"), "K on e1: -\n");
        assert_eq!(run(&mut state, "select e4"), "nothing to select\n");
    }

    #[test]
    fn select_works_with_a_huge_tile_side() {
        let session = EditorSession::new(Board::starting_position(), 1_000_000_000);
        let mut state = CommandState::new(session, Some(3));
        assert_eq!(run(&mut state, "select e2"), "P on e2: e3 e4\n");
    }

    #[test]
    fn move_updates_placement() {
        let mut state = new_state();
        assert_eq!(run(&mut state, "move g1 f3"), "g1-f3\n");
        assert_eq!(
            run(&mut state, "fen"),
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R\n"
        );
    }

    #[test]
    fn illegal_move_reports_error_and_keeps_running() {
        let mut state = new_state();
        let reply = run(&mut state, "move e2 e5");
        assert!(reply.starts_with("error:"), "{reply}");
        assert_eq!(state.session().board(), &Board::starting_position());
    }

    #[test]
    fn press_and_release_drive_the_session() {
        let mut state = new_state();
        assert_eq!(run(&mut state, "press 450 650"), "holding e2\n");
        assert_eq!(run(&mut state, "release 450 450"), "e2-e4\n");
        assert_eq!(run(&mut state, "press 450 450"), "holding e4\n");
        assert_eq!(run(&mut state, "release 450 50"), "still selected\n");
    }

    #[test]
    fn load_and_check() {
        let mut state = new_state();
        assert_eq!(run(&mut state, "load 4r3/8/8/8/8/8/8/4K3 w - - 0 1"), "");
        assert_eq!(run(&mut state, "check"), "white: in check\nblack: not in check\n");
        let reply = run(&mut state, "load 8/8");
        assert!(reply.starts_with("error:"), "{reply}");
    }

    #[test]
    fn random_plays_a_move_for_the_requested_side() {
        let mut state = new_state();
        run(&mut state, "random black");
        let board = state.session().board();
        assert_eq!(board.pieces().len(), 32);
        assert_ne!(board, &Board::starting_position());
        // white's half is untouched
        assert!(board.to_placement().ends_with("8/8/PPPPPPPP/RNBQKBNR"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = new_state();
        let mut out = Vec::new();
        assert!(state.handle_command("quit", &mut out).unwrap());
        assert!(!state.handle_command("", &mut out).unwrap());
    }
}
