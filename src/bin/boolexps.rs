//! boolexps - Command Line Interface
//!
//! Reads a JSON-encoded expression from a file and prints its DNF, NNF or
//! simplified form. Without `--transform` the tool asks interactively.

use boolexps::{Expression, Transform};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TransformArg {
    /// Disjunctive normal form
    Dnf,
    /// Negation normal form
    Nnf,
    /// Single-pass simplification
    Simplify,
}

impl From<TransformArg> for Transform {
    fn from(val: TransformArg) -> Self {
        match val {
            TransformArg::Dnf => Transform::Dnf,
            TransformArg::Nnf => Transform::Nnf,
            TransformArg::Simplify => Transform::Simplify,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boolexps")]
#[command(about = "Propositional logic normal forms", long_about = None)]
#[command(version)]
struct Args {
    /// Input file holding one JSON-encoded expression (asked for if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Transformation to apply (asked for interactively if omitted)
    #[arg(short = 't', long = "transform", value_enum)]
    transform: Option<TransformArg>,

    /// Print infix notation instead of JSON
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Also report whether the result is equivalent to the input
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not initialise logging: {}", e);
    }

    match args.transform {
        Some(transform) => run_once(&args, transform.into()),
        None => {
            if let Err(e) = run_interactive(&args) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Non-interactive mode: a file and a transform are both given
fn run_once(args: &Args, transform: Transform) {
    let Some(input) = args.input.as_deref() else {
        eprintln!("An input file is required together with --transform");
        process::exit(2);
    };

    let expr = match Expression::from_file(input) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("Error reading expression file '{}': {}", input.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = emit(args, &expr, transform) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Interactive mode: prompt for a transform, and for a file when needed
///
/// An invalid choice or a malformed file only reprompts; `q` or end of
/// input ends the session.
fn run_interactive(args: &Args) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut input = args.input.clone();

    loop {
        let path = match input.take() {
            Some(path) => path,
            None => match prompt(&mut lines, "Expression file (q to quit): ")? {
                Some(line) => PathBuf::from(line),
                None => return Ok(()),
            },
        };

        let expr = match Expression::from_file(&path) {
            Ok(expr) => expr,
            Err(e) => {
                eprintln!("Could not use '{}': {}", path.display(), e);
                continue;
            }
        };
        info!("Loaded {} from {}", expr, path.display());

        let menu = Transform::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}) {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("  ");

        let transform = loop {
            let Some(line) = prompt(&mut lines, &format!("{}  q) quit: ", menu))? else {
                return Ok(());
            };
            match parse_choice(&line) {
                Some(t) => break t,
                None => eprintln!("Invalid choice '{}'", line),
            }
        };

        emit(args, &expr, transform)?;
    }
}

/// Print `message` and read one trimmed line; `None` on `q` or end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let line = line?.trim().to_string();
            if line.eq_ignore_ascii_case("q") {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        None => Ok(None),
    }
}

/// Menu number (1-based) or transform name
fn parse_choice(line: &str) -> Option<Transform> {
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Transform::ALL.get(i).copied());
    }
    line.parse().ok()
}

fn emit(args: &Args, expr: &Expression, transform: Transform) -> io::Result<()> {
    debug!("Applying {} to {}", transform, expr);
    let result = transform.apply(expr);

    if args.summary {
        eprintln!("Input:  {} nodes, depth {}", expr.size(), expr.depth());
        eprintln!("Output: {} nodes, depth {}", result.size(), result.depth());
        eprintln!("Variables: {}", expr.all_vars().len());
    }

    if args.check {
        let equivalent = result.is_equivalent_to(expr);
        eprintln!(
            "Equivalent to input: {}",
            if equivalent { "yes" } else { "no" }
        );
    }

    let text = if args.pretty {
        result.to_string()
    } else {
        result.serialize()
    };

    match args.output_file {
        Some(ref output_path) => write_file(output_path, &text),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn write_file(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, format!("{}\n", text))?;
    info!("Wrote output to: {}", path.display());
    Ok(())
}
