//! Simple REPL (Read-Eval-Print Loop) for Schemelet
//!
//! Usage: cargo run --example simple_repl

use anyhow::Context;
use schemelet::{Evaluator, ErrorKind};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    println!("Schemelet Interactive REPL v{}", schemelet::VERSION);
    println!();
    println!("Type one expression per line and press Enter.");
    println!("Type 'exit' or press Ctrl+D to quit.");
    println!("Type 'help' for examples.");
    println!();

    let mut evaluator = Evaluator::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut line_num = 1;

    loop {
        print!("schemelet[{}]> ", line_num);
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line.context("failed to read input")?;
        let input = line.trim();

        // Handle special commands
        match input {
            "" => continue,
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            "clear" => {
                evaluator.reset();
                println!("Environment cleared.");
                continue;
            }
            "builtins" => {
                print_builtins(&evaluator);
                continue;
            }
            _ => {}
        }

        match evaluator.interpret(input) {
            Ok(result) => println!("  => {}", result),
            Err(err) => {
                let hint = match err.kind() {
                    ErrorKind::Syntax => "check the shape of the expression",
                    ErrorKind::Name => "define the name first",
                    ErrorKind::Runtime => "check the argument types",
                };
                eprintln!("  x {} ({})", err, hint);
            }
        }

        line_num += 1;
    }

    Ok(())
}

fn print_builtins(evaluator: &Evaluator) {
    let registry = evaluator.registry();
    for name in registry.list_tools() {
        if let Ok(tool) = registry.get(&name) {
            println!("  {:<10} {}", name, tool.description());
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  help      - Show this help");
    println!("  builtins  - List builtin procedures and special forms");
    println!("  clear     - Drop every definition");
    println!("  exit      - Exit REPL");
    println!();
    println!("Examples:");
    println!("  (+ 1 2 3)");
    println!("  (define (fact n) (if (< n 1) 1 (* n (fact (- n 1)))))");
    println!("  (fact 10)");
    println!("  (define p (cons 1 2))");
    println!("  (set-car! p 9)");
    println!("  p");
    println!("  (list-tail '(a b c) 1)");
    println!();
    println!("Definitions persist between lines until 'clear'.");
    println!();
}
