//! Tokentree CLI - transform JSON documents into token stores and inspect them.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{show, token, transform, walk};

#[derive(Parser)]
#[command(name = "tokentree")]
#[command(about = "Content-addressable token transform and store inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the token of a JSON document
    Token {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Digest algorithm: sha1 or sha256
        #[arg(long, default_value = "sha1")]
        alg: String,
        /// Also print the canonical text form
        #[arg(long)]
        text: bool,
    },
    /// Transform a JSON document into a token store file
    Transform {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output store file
        #[arg(long)]
        out: String,
        /// Dispatch policy: full, include, or exclude
        #[arg(long, default_value = "full")]
        policy: String,
        /// Digest algorithm: sha1 or sha256
        #[arg(long, default_value = "sha1")]
        alg: String,
    },
    /// Print the structure bound to a token in a store file
    Show {
        /// Path to store file
        store: String,
        /// Token to resolve (default: the store head)
        #[arg(long)]
        token: Option<String>,
    },
    /// Navigate a store from its head by keys and indices
    Walk {
        /// Path to store file
        store: String,
        /// Steps to take: mapping keys or sequence indices
        steps: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Token { input, alg, text } => token::run(input, alg, text),
        Commands::Transform {
            input,
            out,
            policy,
            alg,
        } => transform::run(input, out, policy, alg),
        Commands::Show { store, token } => show::run(store, token),
        Commands::Walk { store, steps } => walk::run(store, steps),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
