use std::{
    fs::{self, read_to_string},
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use minic::{format_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One line per token
    Tokens,
    /// The parsed translation unit, printed back as source
    Ast,
}

#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(about = "Front end for a small C subset: every value is an int")]
struct Args {
    /// Source file to parse
    input: PathBuf,

    /// Where to write the output, `-` for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// What to print once the input is accepted
    #[arg(long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let file_name = args.input.to_string_lossy().to_string();
    let source = read_to_string(&args.input).with_context(|| format!("failed to read {}", file_name))?;

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name.clone())).map_err(|error| anyhow!(format_error(&error, &source)))?;
    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let rendered = match args.emit {
        Emit::Tokens => tokens.iter().map(|token| token.describe() + "\n").collect::<String>(),
        Emit::Ast => {
            let parse_start = Instant::now();
            let (_, unit) = parse(tokens, Rc::new(file_name));
            let unit = unit.map_err(|error| anyhow!(format_error(&error, &source)))?;
            info!(
                prototypes = unit.prototypes().len(),
                functions = unit.functions().len(),
                elapsed = ?parse_start.elapsed(),
                "parsed"
            );
            unit.to_string()
        }
    };

    if args.output == "-" {
        io::stdout().lock().write_all(rendered.as_bytes())?;
    } else {
        fs::write(&args.output, rendered).with_context(|| format!("failed to write {}", args.output))?;
        debug!(output = %args.output, "wrote output");
    }

    info!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}
