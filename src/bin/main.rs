//! `diophantine` — solve a system of linear Diophantine equations read
//! from a problem file.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::{debug, error, info};

use diophantine::{logging, parser, Solver, Validator};

#[derive(ClapParser, Debug)]
#[command(name = "diophantine", about = "Solve a system of linear Diophantine equations")]
struct Cli {
    /// Problem file to read.
    filename: PathBuf,

    /// Log verbosity, 0 (silent) through 5 (trace).
    #[arg(short, long, default_value_t = 3)]
    verbosity: u8,

    /// Re-validate the solution against the original system before reporting.
    #[arg(long)]
    validate: bool,

    /// Raise verbosity to at least debug so the solver's per-iteration
    /// progress lines are visible. Does not change solver behavior.
    #[arg(long)]
    progress: bool,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    if cli.progress {
        cli.verbosity = cli.verbosity.max(4);
    }

    if let Err(e) = logging::init(cli.verbosity) {
        eprintln!("fatal: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> diophantine::Result<ExitCode> {
    let file = File::open(&cli.filename)
        .map_err(|e| diophantine::Error::Parse(format!("{}: {e}", cli.filename.display())))?;
    let system = parser::parse(file)?;

    let mut solver = Solver::new(system.clone());
    let solution = solver.solve()?;

    let Some(solution) = solution else {
        info!("no solution");
        println!("no solution");
        return Ok(ExitCode::SUCCESS);
    };

    for assignment in &solution.assignments {
        println!("{} = {}", assignment.variable, assignment.value);
    }

    if cli.validate {
        debug!("validating solution against original system");
        let validator = Validator::new(system);
        if !validator.is_valid_solution(&solution) {
            error!("solution failed validation against the original system");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
