// calx: keypad-style scientific calculator for the terminal
//
// The shell reads lines of key words, runs them through the keypad
// lexer, and dispatches each key into the engine. All calculator state
// lives in the engine; this file only does I/O.

mod keymap;
mod report;

use std::io::{self, BufRead, Write};

use clap::Parser;
use engine::Calculator;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Interactive scientific calculator driven by keypad words
#[derive(Parser)]
#[command(name = "calx", version, about = "Keypad-style scientific calculator")]
struct Cli {
    /// Start in degree mode instead of radians
    #[arg(long)]
    degrees: bool,

    /// Feed a single line of keys and print the final display
    #[arg(long, value_name = "KEYS")]
    eval: Option<String>,

    /// Log key dispatch at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut calc = Calculator::new();
    if cli.degrees {
        calc.toggle_angle_mode();
    }

    if let Some(line) = cli.eval.as_deref() {
        run_line(&mut calc, line);
        println!("{}", calc.display());
        return;
    }

    repl(&mut calc);
}

// Logs go to stderr so the display output stays clean
fn init_tracing(verbose: bool) {
    let default = if verbose { "calx=debug" } else { "calx=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn repl(calc: &mut Calculator) {
    println!("calx scientific calculator ('help' lists the keys, 'quit' leaves)");
    print_prompt(calc);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "history" | "hist" => print_history(calc),
            _ => {
                run_line(calc, line);
                render(calc);
            }
        }
        print_prompt(calc);
    }
}

/// Lex one line and dispatch every key in order
fn run_line(calc: &mut Calculator, line: &str) {
    for (key, span) in keypad::lex_spanned(line) {
        match key {
            Ok(key) => {
                debug!(key = %key, "dispatch");
                if let Err(error) = keymap::dispatch(calc, &key) {
                    warn!(%error, code = error.code(), "engine error");
                    report::calc_error(line, span, &error);
                }
            }
            Err(()) => report::unknown_key(line, span),
        }
    }
}

fn print_prompt(calc: &Calculator) {
    print!("[{}] > ", calc.mode_indicator());
    let _ = io::stdout().flush();
}

fn render(calc: &Calculator) {
    let pending = calc.pending_display();
    if !pending.is_empty() {
        println!("  {}", pending);
    }
    println!("  {}", calc.display());
}

fn print_history(calc: &Calculator) {
    if calc.history().is_empty() {
        println!("  (no history)");
        return;
    }
    for entry in calc.history() {
        println!("  {}", entry);
    }
}

fn print_help() {
    println!("digits 0-9 . e ( )      operand entry");
    println!("+ - × ÷ % ^ =           operators (keyboard aliases * and /)");
    println!("sin cos tan log ln      functions ('2nd' flips to sin⁻¹ cos⁻¹ tan⁻¹ log₂)");
    println!("asin acos atan          inverse trig, always addressable");
    println!("sinh cosh tanh          hyperbolics");
    println!("sqrt cbrt ! sq cube     roots, factorial, integer powers");
    println!("exp pow10 inv abs       e^x, 10^x, reciprocal, absolute value");
    println!("mc m+ m- mr             memory");
    println!("rad 2nd del ac rand     modes and editing");
    println!("history  quit           shell commands");
}
