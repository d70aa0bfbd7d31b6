//! CLI for maze generation

use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use maze_backtracker::{GenerationState, MazeConfig, MazeSession};

/// Perfect maze generator
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

    /// Mark the path from entrance to exit
    #[arg(short, long)]
    solve: bool,

    /// Display generation on the terminal, one passage per frame
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 30)]
    frame_length: u64,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = MazeSession::new(MazeConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
    })
    .context("Could not create maze")?;

    if args.playback {
        while session.step()? != GenerationState::Complete {
            print!("\x1B[2J\x1B[1;1H");
            println!("{}", session.render());
            thread::sleep(Duration::from_millis(args.frame_length));
        }
    } else {
        session.run_to_completion()?;
    }

    let path_steps = if args.solve {
        Some(session.solve().context("Could not solve maze")?.len() - 1)
    } else {
        None
    };

    if args.playback {
        print!("\x1B[2J\x1B[1;1H");
    }
    println!("{}", session.render());
    if let Some(steps) = path_steps {
        println!("The path through the maze is {} steps.", steps);
    }
    Ok(())
}
