mod error;

use clap::Parser;
use deriv_compute::{evaluate, nth_derivative, parse_with_steps};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Differentiates expressions in the variable `x`.
///
/// Expressions may use numbers, `x`, `e`, `+ - * /`, constant exponents with `^`, parentheses,
/// and the functions `ln`, `sin`, `cos` and `tan`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to differentiate. If omitted, expressions are read from standard input, one
    /// per line, or interactively if standard input is a terminal.
    #[arg(allow_hyphen_values = true)]
    expr: Option<String>,

    /// Evaluate the expression and its derivative at this value of `x`.
    #[arg(long, allow_negative_numbers = true)]
    at: Option<f64>,

    /// The order of the derivative to compute.
    #[arg(long, default_value_t = 1)]
    order: usize,

    /// Print the rewrites applied while simplifying the expression.
    #[arg(long, default_value = "false")]
    steps: bool,
}

/// Controls what is printed for each expression. The REPL can change these between lines.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    at: Option<f64>,
    order: usize,
    steps: bool,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Self {
            at: args.at,
            order: args.order,
            steps: args.steps,
        }
    }
}

/// A command entered in the REPL, starting with `:`.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    /// Set (or clear) the value of `x` to evaluate at.
    At(Option<f64>),

    /// Set the order of the derivative.
    Order(usize),

    /// Toggle printing simplification steps.
    Steps,

    /// Print the list of commands.
    Help,
}

const HELP: &str = "\
commands:
  :at <x>      evaluate each expression and its derivative at x
  :at          stop evaluating
  :order <n>   compute the n-th derivative
  :steps       toggle printing simplification steps
  :help        print this message
anything else is parsed as an expression";

/// Parses a REPL command, without the leading `:`.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument `{}`", extra));
    }

    match (name, arg) {
        ("at", None) => Ok(Command::At(None)),
        ("at", Some(value)) => value.parse()
            .map(|x| Command::At(Some(x)))
            .map_err(|_| format!("`{}` is not a number", value)),
        ("order", Some(value)) => value.parse()
            .map(Command::Order)
            .map_err(|_| format!("`{}` is not a non-negative integer", value)),
        ("order", None) => Err("`:order` needs an argument".to_string()),
        ("steps", None) => Ok(Command::Steps),
        ("help", None) => Ok(Command::Help),
        _ => Err(format!("unknown command `:{}`, try `:help`", line.trim())),
    }
}

/// Applies a REPL command to the options.
fn apply_command(command: Command, options: &mut Options) {
    match command {
        Command::At(at) => options.at = at,
        Command::Order(order) => options.order = order,
        Command::Steps => {
            options.steps = !options.steps;
            println!("steps {}", if options.steps { "on" } else { "off" });
        },
        Command::Help => println!("{}", HELP),
    }
}

/// Returns the name of the `order`-th derivative of `f`, such as `f''`.
fn derivative_name(order: usize) -> String {
    match order {
        0..=3 => format!("f{}", "'".repeat(order)),
        _ => format!("f^({})", order),
    }
}

/// Parses the input and differentiates it, printing the results.
fn process(input: &str, options: &Options) -> Result<(), Error> {
    let (expr, steps) = parse_with_steps(input)?;
    if options.steps {
        for step in &steps {
            println!("  {}", step);
        }
    }

    let derivative = nth_derivative(&expr, options.order);
    let name = derivative_name(options.order);
    println!("f(x) = {}", expr);
    println!("{}(x) = {}", name, derivative);

    if let Some(x) = options.at {
        println!("f({}) = {}", x, evaluate(&expr, x));
        println!("{}({}) = {}", name, x, evaluate(&derivative, x));
    }
    Ok(())
}

/// Processes the input, reporting any error to stderr. Returns true if the input was valid.
fn process_and_report(input: &str, options: &Options) -> bool {
    match process(input, options) {
        Ok(()) => true,
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

/// Processes each non-empty line of standard input as an expression.
fn run_piped(options: &Options) -> Result<(), Error> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        process_and_report(&line, options);
    }
    Ok(())
}

/// Runs the interactive REPL until end of input.
fn run_repl(options: &mut Options) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, options: &mut Options) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match input.trim().strip_prefix(':') {
            Some(command) => match parse_command(command) {
                Ok(command) => apply_command(command, options),
                Err(message) => eprintln!("{}", message),
            },
            None => {
                process_and_report(&input, options);
            },
        }
        Ok(())
    }

    loop {
        match process_line(&mut rl, options) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut options = Options::from(&args);
    tracing::debug!(?options, "starting");

    let result = if let Some(expr) = &args.expr {
        if !process_and_report(expr, &options) {
            std::process::exit(1);
        }
        Ok(())
    } else if !io::stdin().is_terminal() {
        run_piped(&options)
    } else {
        run_repl(&mut options)
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
