use std::io::{self, BufRead, Write};

use bitcalc::{Environment, parse_line, util::num::format_result};
use clap::Parser;

/// bitcalc is an interactive calculator for arithmetic and bitwise
/// expressions with variables and assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suppresses the parenthesized form of each parsed expression.
    #[arg(short, long)]
    quiet: bool,

    /// A single expression to evaluate. When omitted, an interactive
    /// prompt is started instead.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::new();

    if let Some(expression) = args.expression {
        if !run_line(expression.trim(), &mut env, args.quiet) {
            std::process::exit(1);
        }
        return;
    }

    println!("Enter arithmetic expressions including +, -, *, /, %, **, &, |, ^, ~, <<, >>");
    println!("Supports variables and assignments (e.g., x = 5 * 3).");
    println!("Press Enter on an empty line to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else { break };
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        run_line(line, &mut env, args.quiet);
    }
}

/// Evaluates one trimmed input line against the session store.
///
/// Prints the parenthesized tree (unless quiet) and the formatted result
/// on success; prints the error to stderr otherwise. The store keeps
/// whatever assignments completed, even when a later line fails.
fn run_line(line: &str, env: &mut Environment, quiet: bool) -> bool {
    match parse_line(line) {
        Ok(expr) => {
            if !quiet {
                println!("AST: {expr}");
            }
            match env.eval(&expr) {
                Ok(value) => {
                    println!("Result: {}", format_result(value));
                    true
                },
                Err(e) => {
                    eprintln!("{e}");
                    false
                },
            }
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}
