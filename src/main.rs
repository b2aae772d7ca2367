use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use pacgrid::game::{Command, Game, Phase};
use pacgrid::ui;

fn main() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    println!("{}", ui::closing_line(result?));
    Ok(())
}

fn run(stdout: &mut Stdout) -> io::Result<Phase> {
    let mut rng = rand::thread_rng();
    let mut game = Game::new(&mut rng);

    loop {
        ui::render(stdout, &game)?;
        match game.phase() {
            Phase::Won | Phase::Lost | Phase::Quit => return Ok(game.phase()),
            Phase::Playing | Phase::Paused => {}
        }
        // End of input (or any read failure) counts as quitting.
        let cmd = ui::read_command().unwrap_or(Command::Quit);
        game.handle(cmd, &mut rng);
    }
}
