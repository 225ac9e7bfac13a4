use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use hulk::{Session, diagnostics::ConsoleReporter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// hulk is a small expression language with `let` scopes, conditionals and
/// functions overloaded by arity.
///
/// Without any contents, hulk starts an interactive prompt. Type `exit` or
/// send end of input to leave it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells hulk to treat the contents as a path and run the file line by
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed tree of every line before evaluating it.
    #[arg(long)]
    ast: bool,

    /// Logs every pipeline stage. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new(ConsoleReporter::new());

    match &args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            for (index, line) in script.lines().enumerate() {
                if !line.trim().is_empty() {
                    run(&mut session, line, index + 1, args.ast);
                }
            }
        },
        Some(source) => run(&mut session, source, 1, args.ast),
        None => prompt(&mut session, args.ast),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

fn prompt(session: &mut Session<ConsoleReporter>, show_ast: bool) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if let Err(error) = io::stdout().flush() {
            tracing::warn!(%error, "could not flush the prompt");
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line == "exit" {
            break;
        }
        run(session, &line, 1, show_ast);
    }
}

fn run(session: &mut Session<ConsoleReporter>, source: &str, line: usize, show_ast: bool) {
    let Some(tree) = session.parse_line_at(source, line) else {
        return;
    };
    if show_ast {
        println!("{tree}");
    }

    if let Some(value) = session.eval_tree(&tree)
       && !value.is_nil()
    {
        println!("{value}");
    }
}
