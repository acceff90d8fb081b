//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty
//! - Generate one or many puzzles, optionally from a fixed seed
//! - Display the puzzle, solution, seed, and clue count
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-char-hex>
//! ```
//!
//! Generate a batch in parallel:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 20
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use parlor_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Fixed seed (64 hex characters). Incompatible with --count > 1.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    if let Some(seed) = &args.seed {
        if args.count > 1 {
            eprintln!("--seed generates a single fixed puzzle; drop --count.");
            process::exit(2);
        }
        let seed = match seed.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let puzzles: Vec<_> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();
    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} givens):", puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
}
