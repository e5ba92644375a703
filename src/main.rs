use std::io::{self, BufRead, Write};

use clap::Parser;
use treeval::{
    evaluate_expression,
    report::{ConsoleSink, Level},
};

/// treeval is an interactive calculator that shows the expression tree it
/// builds before evaluating it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suppresses the expression tree dump and only prints results.
    #[arg(short, long)]
    quiet: bool,

    /// An expression to evaluate once instead of starting the prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let sink = ConsoleSink::new(if args.quiet { Level::Info } else { Level::Debug });

    if let Some(expression) = args.expression {
        match evaluate_expression(&expression, &sink) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let stdin = io::stdin();
    loop {
        print!("Enter an expression: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            },
        }

        // The prompt reads one whitespace-delimited word, so anything after
        // the first space belongs to the next prompt in spirit; it is simply
        // dropped here.
        let Some(expression) = line.split_whitespace().next() else {
            continue;
        };

        // A failed expression only aborts this request; the prompt returns.
        match evaluate_expression(expression, &sink) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
