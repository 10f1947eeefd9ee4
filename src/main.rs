use std::fs;

use clap::Parser;
use trine::{interpreter::evaluator::Env, run_source};

/// trine is a domain-specific language for describing balanced-ternary logic
/// circuits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells trine to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Seeds a signal before the run, as NAME=VALUE with VALUE one of -1, 0
    /// or +1. May be given multiple times.
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut env = Env::new();
    for binding in &args.set {
        if let Err(message) = seed_binding(&mut env, binding) {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }

    match run_source(&script, Some(env)) {
        Ok(env) => {
            for (name, value) in env.sorted() {
                println!("{name} = {value}");
            }
        },
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            std::process::exit(1);
        },
    }
}

/// Parses one `NAME=VALUE` binding from the command line into the
/// environment.
fn seed_binding(env: &mut Env, binding: &str) -> Result<(), String> {
    let Some((name, value)) = binding.split_once('=') else {
        return Err(format!("Invalid binding '{binding}'; expected NAME=VALUE."));
    };
    let value: i8 = value.trim()
                         .parse()
                         .map_err(|_| format!("Invalid binding '{binding}'; VALUE must be -1, 0, or +1."))?;
    env.seed(name.trim(), value).map_err(|e| e.to_string())
}
