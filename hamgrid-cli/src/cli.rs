use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hamgrid",
    about = "Count Hamiltonian paths on a rectangular grid graph",
    version,
    after_help = "\
Grid file format: a width, a height, then width*height cell codes
(0 = open, 1 = blocked, 2 = start, 3 = end), whitespace-separated.

Examples:
  hamgrid grid.txt            # parse grid.txt, print the path count
  hamgrid < grid.txt          # read the grid from stdin
  hamgrid grid.txt 100        # time 100 repeated counts instead"
)]
pub struct Cli {
    /// Path to a grid file; omit to read the grid from stdin.
    pub grid_file: Option<PathBuf>,

    /// Repeat the count this many times and report timing instead of the count.
    pub iterations: Option<u32>,
}
