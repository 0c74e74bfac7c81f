//! Interactive prompt loop.
//!
//! Reads a piece selector and a destination from a line-oriented source,
//! moves the piece without any rule checking, and redraws the board from the
//! next player's side. Invalid input is reported above the next prompt.

use std::io::{self, BufRead, Write};

use asciichess_core::{
    Board, ColorScheme, DestinationSelector, PieceColor, PieceSelector, Renderer,
};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::ResetColor,
    terminal::{Clear, ClearType},
};

const PIECE_PROMPT: &str = "Select a piece: ";
const SQUARE_PROMPT: &str = "Select a square or type ca to cancel: ";
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Board, side to move and display settings of one game.
pub struct Session {
    board: Board,
    player: PieceColor,
    scheme: ColorScheme,
    error: String,
    clear_screen: bool,
}

/// What a complete prompt cycle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Turn {
    Moved,
    Cancelled,
    Rejected,
    Quit,
}

impl Session {
    pub fn new(board: Board, player: PieceColor, scheme: ColorScheme) -> Self {
        Self {
            board,
            player,
            scheme,
            error: String::new(),
            clear_screen: true,
        }
    }

    /// Whether to clear the terminal before each redraw.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> PieceColor {
        self.player
    }

    /// Message shown above the next prompt; empty when the last input was fine.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn render(&self) -> String {
        Renderer::new(&self.scheme).render(&self.board, self.player)
    }

    /// Run until the input is exhausted or a quit command is read.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        tracing::info!(player = %self.player, "session started");
        loop {
            self.draw(&mut output)?;
            match self.turn(&mut input, &mut output)? {
                Turn::Quit => break,
                Turn::Moved => tracing::info!(
                    player = %self.player,
                    placement = %asciichess_core::encode(&self.board),
                    "move played"
                ),
                Turn::Cancelled => tracing::debug!("selection cancelled"),
                Turn::Rejected => tracing::debug!(error = %self.error, "input rejected"),
            }
        }
        tracing::info!("session ended");
        Ok(())
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.clear_screen {
            queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(output, "{}", self.render())?;
        queue!(output, ResetColor)?;
        writeln!(output, "{}", self.error)?;
        output.flush()
    }

    fn turn<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<Turn> {
        let files = self.board.files();
        let ranks = self.board.ranks();

        let Some(line) = prompt(input, output, PIECE_PROMPT)? else {
            return Ok(Turn::Quit);
        };
        let from = match PieceSelector::parse(&line, &files, &ranks)
            .and_then(|selector| selector.resolve(&self.board))
        {
            Ok(from) => from,
            Err(e) => return Ok(self.reject(e)),
        };

        let Some(line) = prompt(input, output, SQUARE_PROMPT)? else {
            return Ok(Turn::Quit);
        };
        let target = match DestinationSelector::parse(&line, &files, &ranks) {
            Ok(DestinationSelector::Square(target)) => target,
            Ok(DestinationSelector::Cancel) => {
                self.error.clear();
                return Ok(Turn::Cancelled);
            }
            Err(e) => return Ok(self.reject(e)),
        };

        let moved = target
            .locate(&self.board)
            .and_then(|to| self.board.relocate(from, to));
        match moved {
            Ok(captured) => {
                if let Some(piece) = captured {
                    tracing::debug!(piece = %piece, square = %target, "piece captured");
                }
                self.player = self.player.opposite();
                self.error.clear();
                Ok(Turn::Moved)
            }
            Err(e) => Ok(self.reject(e)),
        }
    }

    fn reject(&mut self, error: impl std::fmt::Display) -> Turn {
        self.error = error.to_string();
        Turn::Rejected
    }
}

/// Print `text` and read one line. `None` on end of input or a quit command.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if QUIT_COMMANDS.contains(&line.trim()) {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciichess_core::{Piece, PieceKind, STARTING_PLACEMENT};
    use std::io::Cursor;

    fn session() -> Session {
        let board = Board::from_fen(STARTING_PLACEMENT).unwrap();
        Session::new(board, PieceColor::White, ColorScheme::grayscale()).with_clear_screen(false)
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        session.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn piece_on(session: &Session, file: char, rank: u8) -> Option<Piece> {
        let (f, r) = session.board().locate(file, rank).unwrap();
        session.board().get_piece(f, r).unwrap()
    }

    #[test]
    fn test_move_toggles_player() {
        let mut session = session();
        run(&mut session, "pe2\ne4\n");

        assert_eq!(
            piece_on(&session, 'e', 4),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(piece_on(&session, 'e', 2), None);
        assert_eq!(session.player(), PieceColor::Black);
        assert_eq!(session.error(), "");
    }

    #[test]
    fn test_two_moves() {
        let mut session = session();
        run(&mut session, "pe2\ne4\npe7\ne5\n");
        assert_eq!(
            asciichess_core::encode(session.board()),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR"
        );
        assert_eq!(session.player(), PieceColor::White);
    }

    #[test]
    fn test_invalid_piece_is_reported() {
        let mut session = session();
        let output = run(&mut session, "xe2\n");
        assert!(output.contains("Not a correct piece selection"));
        assert!(session.error().starts_with("Not a correct piece selection"));
        assert_eq!(session.player(), PieceColor::White);
    }

    #[test]
    fn test_error_cleared_after_valid_move() {
        let mut session = session();
        run(&mut session, "pe9\npe2\ne4\n");
        assert_eq!(session.error(), "");
        assert_eq!(session.player(), PieceColor::Black);
    }

    #[test]
    fn test_cancel_keeps_board() {
        let mut session = session();
        run(&mut session, "ng1\nca\n");
        assert_eq!(asciichess_core::encode(session.board()), STARTING_PLACEMENT);
        assert_eq!(session.player(), PieceColor::White);
    }

    #[test]
    fn test_missing_piece_is_reported() {
        let mut session = session();
        run(&mut session, "qe4\n");
        assert_eq!(session.error(), "No q to select on e4");
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session();
        let output = run(&mut session, "quit\npe2\ne4\n");
        assert_eq!(output.matches(PIECE_PROMPT).count(), 1);
        assert_eq!(asciichess_core::encode(session.board()), STARTING_PLACEMENT);
    }

    #[test]
    fn test_exit_stops_reading() {
        let mut session = session();
        let output = run(&mut session, "pe2\ne4\nexit\npe7\ne5\n");
        assert_eq!(output.matches(PIECE_PROMPT).count(), 2);
        assert_eq!(session.player(), PieceColor::Black);
        assert_eq!(
            asciichess_core::encode(session.board()),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_queen_letter_is_not_a_quit_command() {
        let mut session = session();
        run(&mut session, "qd1\nd3\n");
        assert_eq!(
            piece_on(&session, 'd', 3),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
    }

    #[test]
    fn test_redraw_uses_new_orientation() {
        let mut session = session();
        run(&mut session, "pe2\ne4\n");
        let rendered = session.render();
        let first_row_label = format!("{}1 ", ColorScheme::grayscale().reset());
        assert!(rendered.starts_with(&first_row_label));
    }
}
