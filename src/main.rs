//! Command-line driver for the box-packing solver.
//!
//! Solves the bundled six-piece 4x4x2 puzzle and prints solutions as text.
//! The solver core is puzzle-agnostic; this binary supplies the catalog and
//! consumes the solution stream.

use clap::Parser;

use boxpack::{catalog, display, solver};

/// Packs the demo piece catalog into its 4x4x2 box.
#[derive(Parser)]
#[command(name = "boxpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stop after this many solutions (default: enumerate all of them).
    #[arg(long, value_name = "N")]
    max_solutions: Option<usize>,

    /// Print every solution instead of only the first.
    #[arg(long)]
    all: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let puzzle = catalog::demo_puzzle();
    let solutions = match solver::solve(&puzzle, cli.max_solutions) {
        Ok(solutions) => solutions,
        Err(e) => {
            eprintln!("invalid puzzle: {e}");
            std::process::exit(1);
        }
    };

    println!("Found {} solutions", solutions.len());
    if cli.all {
        for (i, solution) in solutions.iter().enumerate() {
            println!("\nSolution {}:", i + 1);
            print!("{}", display::format_solution(solution));
        }
    } else if let Some(first) = solutions.first() {
        print!("{}", display::format_solution(first));
    }
}
