use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::game::{Command, Dir, Game, Phase};
use crate::maze::{Pos, COLS, ROWS};

/// Full-screen redraw: status line, board, remaining-pellet count, legend.
/// The board is small enough that diffing against the previous frame is not
/// worth the bookkeeping.
pub fn render(stdout: &mut Stdout, game: &Game) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;
    stdout.queue(Print(format!(
        "Score: {}  Lives: {}\r\n",
        game.score(),
        game.lives()
    )))?;

    for row in 0..ROWS {
        let mut line = String::with_capacity(COLS + 2);
        for col in 0..COLS {
            let pos = Pos { row, col };
            // Overlay the ghosts so they show up before their first move
            // stamps them into the grid.
            if game.ghosts().contains(&pos) {
                line.push('G');
            } else {
                line.push(game.maze().tile(pos).glyph());
            }
        }
        line.push_str("\r\n");
        stdout.queue(Print(line))?;
    }

    stdout.queue(Print(format!(
        "Pellets remaining: {}\r\n",
        game.pellets_remaining()
    )))?;
    stdout.queue(Print(
        "Controls: w (up), s (down), a (left), d (right), p (pause), r (restart), q (quit)\r\n",
    ))?;
    if game.phase() == Phase::Paused {
        stdout.queue(Print("Game paused. Press any key to continue...\r\n"))?;
    }
    stdout.flush()
}

/// Block until one keypress and map it to a command. Anything that is not a
/// recognized key is a `Noop` turn; ctrl-c quits since raw mode swallows the
/// usual signal.
pub fn read_command() -> io::Result<Command> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Command::Quit);
            }
            return Ok(match key.code {
                KeyCode::Char('w') => Command::Move(Dir::Up),
                KeyCode::Char('s') => Command::Move(Dir::Down),
                KeyCode::Char('a') => Command::Move(Dir::Left),
                KeyCode::Char('d') => Command::Move(Dir::Right),
                KeyCode::Char('p') => Command::Pause,
                KeyCode::Char('r') => Command::Restart,
                KeyCode::Char('q') => Command::Quit,
                _ => Command::Noop,
            });
        }
    }
}

/// Farewell line for each way out of the loop, printed after the alternate
/// screen is gone so it lands in the user's scrollback.
pub fn closing_line(phase: Phase) -> &'static str {
    match phase {
        Phase::Won => "Congratulations! You've eaten all the pellets!",
        Phase::Lost => "Game Over! You've run out of lives.",
        _ => "Quitting the game. Goodbye!",
    }
}
