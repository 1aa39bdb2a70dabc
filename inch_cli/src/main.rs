//! # Inchwise CLI Application
//!
//! Terminal front end for the fractional-inch engine. Prompts for two
//! feet/inches/fraction measurements and an operation, prints the formatted
//! result, and keeps the running calculation log.
//!
//! Pass `--json` to print the final log as JSON instead of plain lines.

use std::env;
use std::io::{self, BufRead, Write};

use inch_core::{apply, format, parse, CalculationLog, FractionSet, Measurement, Operation};

fn prompt(label: &str) -> String {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_measurement(title: &str) -> Option<Measurement> {
    println!("{title}");
    let feet = prompt("  Feet [0]: ");
    let inches = prompt("  Inches [0]: ");
    let fraction = prompt("  Fraction (e.g., 1/2) [0/1]: ");

    match parse(&feet, &inches, &fraction) {
        Ok(measurement) => Some(measurement),
        Err(err) => {
            println!("  {err}");
            None
        }
    }
}

fn main() {
    let json_log = env::args().any(|arg| arg == "--json");
    let set = FractionSet::standard();
    let mut log = CalculationLog::new();

    println!("Inchwise CLI - Fractional Inch Calculator");
    println!("=========================================");
    println!();
    println!("Enter two measurements and an operation. Empty fields are zero;");
    println!("a blank operation quits.");
    println!();

    loop {
        let Some(a) = prompt_measurement("Measurement 1") else {
            println!();
            continue;
        };
        let Some(b) = prompt_measurement("Measurement 2") else {
            println!();
            continue;
        };

        let op_text = prompt("Operation (add, subtract, multiply, divide or + - * /): ");
        if op_text.is_empty() {
            break;
        }
        let op = match op_text.parse::<Operation>() {
            Ok(op) => op,
            Err(err) => {
                println!("{err}");
                println!();
                continue;
            }
        };

        match apply(op, &a, &b) {
            Ok(result) => {
                let record = log.record(op, &a, &b, &result, &set);
                println!();
                println!("Result: {}", format(&result, &set));
                println!("Logged: {record}");
            }
            Err(err) => println!("{err}"),
        }
        println!();

        let again = prompt("Another calculation? [Y/n]: ");
        if again.eq_ignore_ascii_case("n") {
            break;
        }
        println!();
    }

    if !log.is_empty() {
        println!();
        println!("Calculation Log:");
        if json_log {
            match serde_json::to_string_pretty(&log) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("  (failed to serialize log: {err})"),
            }
        } else {
            for record in log.entries() {
                println!("  {record}");
            }
        }
    }
}
