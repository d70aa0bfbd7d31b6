//! Interactive maze in the terminal

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use maze_backtracker::{Direction, MazeConfig, MazeError, MazeSession, MoveOutcome};

const HELP: &str = "arrows/hjkl: move  s: solve  n: new maze  q: quit";

/// Watch a maze being carved, then find your way out
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Generation frame length in milliseconds
    #[arg(short, long, default_value_t = 16)]
    frame_length: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let session = MazeSession::new(MazeConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
    })
    .context("Could not create maze")?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, session, Duration::from_millis(args.frame_length));

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Game loop: one generation step per frame, keyboard input in between
fn run(stdout: &mut Stdout, mut session: MazeSession, frame_time: Duration) -> anyhow::Result<()> {
    let mut status = String::from(HELP);
    stdout.execute(Clear(ClearType::All))?;

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('n') => {
                    session.reset()?;
                    status = String::from(HELP);
                    stdout.execute(Clear(ClearType::All))?;
                }
                KeyCode::Char('s') => match session.solve() {
                    Ok(path) => status = format!("The path is {} steps.", path.len() - 1),
                    Err(MazeError::PreconditionViolation(_)) => {
                        status = String::from("The maze is not finished yet.")
                    }
                    Err(err) => return Err(err.into()),
                },
                code => {
                    let Some(direction) = direction_for(code) else {
                        continue;
                    };
                    if session.move_player(direction) == MoveOutcome::Won {
                        status = String::from("You win!");
                    }
                }
            }
        }

        if !session.is_complete() {
            session.step()?;
        }
        draw(stdout, &session, &status)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Top),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Bottom),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        _ => None,
    }
}

fn draw(stdout: &mut Stdout, session: &MazeSession, status: &str) -> io::Result<()> {
    let maze = session.render();
    let mut y = 0;
    for line in maze.lines() {
        stdout.queue(MoveTo(0, y))?;
        stdout.queue(Print(line))?;
        y += 1;
    }
    stdout.queue(MoveTo(0, y + 1))?;
    stdout.queue(Clear(ClearType::UntilNewLine))?;
    stdout.queue(Print(status))?;
    stdout.flush()
}
