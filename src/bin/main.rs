use std::process::exit;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use dictionary_simplex::{Dictionary, LinearExpression, OptimizationResult, RB, RationalBig};
use dictionary_simplex::algorithm::simplex::{Simplex, SimplexConfig};

/// Solve the sample linear programs with the dictionary simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Which sample problem to solve
    #[arg(long, value_enum, default_value_t = Problem::All)]
    problem: Problem,
    /// Show every intermediate dictionary
    #[arg(short, long)]
    verbose: bool,
    /// Give up after this many pivots
    #[arg(long)]
    max_pivots: Option<usize>,
}

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Problem {
    /// Maximize 3 x_1 + 2 x_2 with three constraints
    One,
    /// Maximize 2 x_1 - x_2 with two constraints
    Two,
    All,
}

fn main() {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(if opts.verbose { LevelFilter::Info } else { LevelFilter::Warn })
        .format_target(false)
        .parse_default_env()
        .init();

    let config = SimplexConfig { verbose: opts.verbose, max_pivots: opts.max_pivots };
    let problems = match opts.problem {
        Problem::One => vec![problem_one()],
        Problem::Two => vec![problem_two()],
        Problem::All => vec![problem_one(), problem_two()],
    };

    let mut all_solved = true;
    for (i, dictionary) in problems.into_iter().enumerate() {
        if i > 0 {
            println!("=====================================");
        }
        println!("Solving...\n{}", dictionary);
        all_solved &= report(Simplex::new(config).run(dictionary));
    }

    if !all_solved {
        exit(1);
    }
}

fn report(result: OptimizationResult<RationalBig>) -> bool {
    match result {
        OptimizationResult::Optimal(dictionary) => {
            println!("Optimal dictionary:\n{}", dictionary);
            println!("{}", dictionary.solution());
            true
        },
        OptimizationResult::Infeasible(dictionary) => {
            println!("Problem is not feasible from this basis:\n{}", dictionary);
            false
        },
        OptimizationResult::Failed(failure) => {
            println!("Error reported: {}", failure);
            false
        },
    }
}

fn problem_one() -> Dictionary<RationalBig> {
    Dictionary::new(
        LinearExpression::objective().with_term(1, RB!(3)).with_term(2, RB!(2)),
        vec![
            LinearExpression::row(3, RB!(5)).with_term(1, RB!(-1)).with_term(2, RB!(-1)),
            LinearExpression::row(4, RB!(6)).with_term(1, RB!(-2)).with_term(2, RB!(-1)),
            LinearExpression::row(5, RB!(2)).with_term(1, RB!(-1)),
        ],
    )
}

fn problem_two() -> Dictionary<RationalBig> {
    Dictionary::new(
        LinearExpression::objective().with_term(1, RB!(2)).with_term(2, RB!(-1)),
        vec![
            LinearExpression::row(3, RB!(0)).with_term(1, RB!(-1)).with_term(2, RB!(1)),
            LinearExpression::row(4, RB!(10)).with_term(2, RB!(-1)),
        ],
    )
}
