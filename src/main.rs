use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use b2a::{TranslationError, braille, decode, encode, table};
use clap::{Parser, Subcommand};
use log::warn;
use tabled::{Table as DisplayTable, Tabled, settings::Style};

#[derive(Debug, Subcommand)]
enum Commands {
    /// Translate <TEXT> to Braille
    Encode {
        /// Text to translate; read from --input or stdin when omitted
        text: Option<String>,
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Braille grade (1 or 2)
        #[arg(long, default_value_t = 2)]
        grade: u8,
    },
    /// Translate <BRAILLE> back to text
    Decode {
        /// Braille to translate; read from --input or stdin when omitted
        braille: Option<String>,
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Braille grade (1 or 2)
        #[arg(long, default_value_t = 2)]
        grade: u8,
    },
    /// Translate lines interactively, auto-detecting the direction
    Interactive {
        /// Braille grade (1 or 2)
        #[arg(long, default_value_t = 2)]
        grade: u8,
    },
    /// Print the builtin symbol and contraction tables
    Tables,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "b2a")]
#[command(about = "A command line tool to translate between text and Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            match error {
                CliError::Translation(TranslationError::InvalidGrade { .. }) => ExitCode::from(2),
                CliError::Translation(TranslationError::InvalidInput) => ExitCode::from(3),
                CliError::Io(_) => ExitCode::FAILURE,
            }
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encode {
            text,
            input,
            output,
            grade,
        } => {
            let text = read_input(text, input)?;
            write_output(&encode(&text, grade)?, output)
        }
        Commands::Decode {
            braille,
            input,
            output,
            grade,
        } => {
            let braille = read_input(braille, input)?;
            write_output(&decode(&braille, grade)?, output)
        }
        Commands::Interactive { grade } => interactive(grade),
        Commands::Tables => {
            tables();
            Ok(())
        }
    }
}

/// Read from the positional argument, a file or stdin, in that order of
/// preference. Bytes that are not valid text map to
/// [`TranslationError::InvalidInput`].
fn read_input(argument: Option<String>, path: Option<PathBuf>) -> Result<String, CliError> {
    let bytes = match (argument, path) {
        (Some(text), _) => return Ok(text),
        (None, Some(path)) => fs::read(path)?,
        (None, None) => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    let text = String::from_utf8(bytes).map_err(TranslationError::from)?;
    Ok(text.trim_end_matches('\n').to_string())
}

fn write_output(content: &str, path: Option<PathBuf>) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}

fn interactive(grade: u8) -> Result<(), CliError> {
    println!("Interactive mode (grade {} Braille)", grade);
    println!("Type text to translate to Braille, or paste Braille to translate back.");
    println!("Type \"exit\" to quit.");
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }
        if input.chars().any(braille::is_braille) {
            if !input.chars().all(|c| braille::is_braille(c) || c.is_whitespace()) {
                warn!("input mixes braille and other characters, decoding anyway");
            }
            println!("Text: {}", decode(input, grade)?);
        } else {
            println!("Braille: {}", encode(input, grade)?);
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct DefinitionRow {
    character: char,
    cells: String,
    class: String,
}

#[derive(Tabled)]
struct ContractionRow {
    pattern: String,
    cells: String,
    kind: String,
    guard: String,
}

fn tables() {
    let table = table::table();

    let definitions = table.definitions().entries().map(|(character, cells, class)| {
        DefinitionRow {
            character: *character,
            cells: cells.clone(),
            class: class.to_string(),
        }
    });
    println!("{}", DisplayTable::new(definitions).with(Style::sharp()));

    let contractions = table.contractions().iter().map(|contraction| ContractionRow {
        pattern: contraction.pattern().to_string(),
        cells: contraction.cells().to_string(),
        kind: contraction.kind().to_string(),
        guard: contraction.guard().to_string(),
    });
    println!("{}", DisplayTable::new(contractions).with(Style::sharp()));
}
