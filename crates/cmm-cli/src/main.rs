use anyhow::Result;
use clap::{Parser, Subcommand};
use cmm_cli::render::{self, Format};
use cmm_cli::load_source;
use cmm_lex::{resolve, tokenize, LexError, Token};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cmm")]
#[command(about = "C-- lexer: token streams and scope-aware symbol tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a source file into tokens and print them
    Tokens {
        /// Path to .cmm source file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Tokenize, then build the symbol table and print both
    Symbols {
        /// Path to .cmm source file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { file, format } => cmd_tokens(&file, format),
        Commands::Symbols { file, format } => cmd_symbols(&file, format),
    }
}

fn exit_with(err: &LexError) -> ! {
    eprintln!("{}", render::lexer_error(err));
    std::process::exit(1);
}

fn lex_file(path: &Path) -> Result<Vec<Token>> {
    let src = load_source(path)?;
    match tokenize(&src) {
        Ok(tokens) => Ok(tokens),
        Err(e) => exit_with(&e),
    }
}

fn cmd_tokens(file: &Path, format: Format) -> Result<()> {
    let tokens = lex_file(file)?;
    print!("{}", render::tokens(&tokens, format)?);
    Ok(())
}

fn cmd_symbols(file: &Path, format: Format) -> Result<()> {
    let tokens = lex_file(file)?;
    let resolved = match resolve(&tokens) {
        Ok(r) => r,
        Err(e) => exit_with(&e),
    };
    print!("{}", render::resolved(&resolved, format)?);
    Ok(())
}
