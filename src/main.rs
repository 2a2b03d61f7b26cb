use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use sluc::{
    error::Error,
    interpreter::evaluator::core::{EvalConfig, ReturnMode},
    parse_source,
};

/// sluc runs programs written in a small, statically typed, C-like teaching
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    #[arg(default_value = "simple.c")]
    file: String,

    /// How far a `return` reaches. `top-level` ignores returns nested in
    /// blocks and loop bodies.
    #[arg(long, value_enum, default_value_t = ReturnModeArg::Structured)]
    return_mode: ReturnModeArg,

    /// Stops runaway recursion after this many nested calls.
    #[arg(long)]
    max_call_depth: Option<usize>,

    /// Prints the parsed program instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReturnModeArg {
    Structured,
    TopLevel,
}

impl From<ReturnModeArg> for ReturnMode {
    fn from(mode: ReturnModeArg) -> Self {
        match mode {
            ReturnModeArg::Structured => Self::Structured,
            ReturnModeArg::TopLevel => Self::TopLevel,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file);
        return ExitCode::from(2);
    };

    let config = EvalConfig { return_mode:    args.return_mode.into(),
                              max_call_depth: args.max_call_depth, };

    match run(&source, &config, args.dump_ast) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(source: &str, config: &EvalConfig, dump_ast: bool) -> Result<(), Error> {
    let program = parse_source(source)?;
    if dump_ast {
        print!("{program}");
        return Ok(());
    }
    program.run_with_stdout(config)?;
    Ok(())
}
