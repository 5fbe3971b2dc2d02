use std::fs;

use clap::{Parser, Subcommand};
use reckon::{
    evaluate_expression,
    util::text::{count_digits, count_words, is_strong_password},
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates infix arithmetic expressions and answers a few simple
/// questions about text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression and prints the result.
    Eval {
        /// Tells reckon to look at a file instead of an inline expression.
        #[arg(short, long)]
        file: bool,

        contents: String,
    },
    /// Reports whether the given password meets the strength rules.
    Password { candidate: String },
    /// Counts the decimal digits in the given text.
    Digits { text: String },
    /// Counts the whitespace-delimited words in the given text.
    Words { text: String },
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                 .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    match args.command {
        Command::Eval { file, contents } => {
            let expression = if file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };

            println!("{}", evaluate_expression(&expression));
        },
        Command::Password { candidate } => {
            if is_strong_password(&candidate) {
                println!("strong");
            } else {
                println!("weak");
            }
        },
        Command::Digits { text } => println!("{}", count_digits(&text)),
        Command::Words { text } => println!("{}", count_words(&text)),
    }
}
