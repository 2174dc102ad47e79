mod cli;

use std::fs::File;
use std::io;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use hamgrid::{count_paths, grid::parse_grid};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprint!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    let grid = match &cli.grid_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open grid file {}", path.display()))?;
            parse_grid(file)?
        }
        None => parse_grid(io::stdin())?,
    };

    match cli.iterations {
        Some(iterations) => {
            if iterations == 0 {
                bail!("iteration count must be greater than 0");
            }
            let start = Instant::now();
            for _ in 0..iterations {
                count_paths(&grid);
            }
            let elapsed = start.elapsed().as_secs_f64();
            println!(
                "{elapsed} seconds for {iterations} iterations, giving {} seconds per iteration",
                elapsed / f64::from(iterations)
            );
        }
        None => {
            println!("{}", count_paths(&grid));
        }
    }

    Ok(())
}
