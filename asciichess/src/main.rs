//! asciichess - a chess board in the terminal.
//!
//! Loads a board from the piece-placement field of a FEN string and draws it
//! as a true-color text grid, oriented for the player to move.
//!
//! - **`play` (default)**: interactive loop. Pieces are moved by typing a
//!   selector such as `pe2` and a destination such as `e4`. No rules are
//!   enforced.
//! - **`show`**: render the board once and exit.
//! - **`fen`**: decode the placement and print it re-encoded.
//!
//! Logs go to a daily rolling file so the terminal stays reserved for the
//! board (see [`config`] for the tunables).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use asciichess_core::{
    encode, fen, render_plain, Board, ColorScheme, FenError, PieceColor, Renderer, SchemeError,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod session;

use session::Session;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "asciichess", about = "Chess board rendering in the terminal")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    /// Optional subcommand. When omitted, starts an interactive session.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
struct BoardArgs {
    /// Starting position. Only the piece-placement field is used; a full FEN
    /// also supplies the side to move.
    #[arg(long, global = true)]
    fen: Option<String>,

    /// Side to move, which determines the board orientation.
    #[arg(long, global = true, value_enum)]
    player: Option<PlayerArg>,

    /// Built-in color scheme.
    #[arg(long, global = true, value_enum, default_value_t = SchemeArg::Grayscale)]
    scheme: SchemeArg,

    /// JSON color scheme file. Overrides `--scheme`.
    #[arg(long, global = true)]
    scheme_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default).
    Play,
    /// Print the board once and exit.
    Show {
        /// Draw without color escapes.
        #[arg(long)]
        plain: bool,
    },
    /// Print the normalized piece placement.
    Fen,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerArg {
    White,
    Black,
}

impl From<PlayerArg> for PieceColor {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::White => PieceColor::White,
            PlayerArg::Black => PieceColor::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum SchemeArg {
    #[default]
    Grayscale,
    Classic,
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The starting FEN could not be decoded.
    #[error("invalid starting position: {0}")]
    Fen(#[from] FenError),

    /// The color scheme file could not be loaded.
    #[error("invalid color scheme: {0}")]
    Scheme(#[from] SchemeError),

    /// Reading input or writing to the terminal failed.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Everything needed to draw or play a position.
struct Setup {
    board: Board,
    player: PieceColor,
    scheme: ColorScheme,
}

impl Setup {
    /// Resolve flags, then environment, then built-in defaults.
    fn resolve(args: &BoardArgs) -> Result<Self, CliError> {
        let fen_string = args.fen.clone().unwrap_or_else(config::get_start_fen);
        let board = Board::from_fen(fen::placement_field(&fen_string)?)?;

        let player = args
            .player
            .map(PieceColor::from)
            .or_else(|| fen::active_color(&fen_string))
            .unwrap_or(PieceColor::White);

        let scheme_path = args.scheme_file.clone().or_else(config::get_scheme_path);
        let scheme = match scheme_path {
            Some(path) => ColorScheme::from_file(&path)?,
            None => builtin_scheme(args.scheme),
        };

        tracing::debug!(fen = %fen_string, player = %player, "resolved setup");
        Ok(Self {
            board,
            player,
            scheme,
        })
    }
}

fn builtin_scheme(arg: SchemeArg) -> ColorScheme {
    match arg {
        SchemeArg::Grayscale => ColorScheme::grayscale(),
        SchemeArg::Classic => ColorScheme::classic(),
    }
}

/// Install the file logger. The returned guard must be held until exit so
/// buffered lines are flushed.
fn init_logging(log_dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, config::LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(guard)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let setup = Setup::resolve(&cli.board)?;
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = Session::new(setup.board, setup.player, setup.scheme);
            session.run(io::stdin().lock(), stdout.lock())?;
        }
        Commands::Show { plain } => {
            let out = if plain {
                render_plain(&setup.board, setup.player)
            } else {
                Renderer::new(&setup.scheme).render(&setup.board, setup.player)
            };
            let mut handle = stdout.lock();
            writeln!(handle, "{}", out)?;
            if !plain {
                crossterm::queue!(handle, crossterm::style::ResetColor)?;
                handle.flush()?;
            }
        }
        Commands::Fen => {
            println!("{}", encode(&setup.board));
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&config::get_log_dir())?;

    tracing::info!("asciichess starting up");
    run(cli)?;
    tracing::info!("asciichess shutting down");

    Ok(())
}
