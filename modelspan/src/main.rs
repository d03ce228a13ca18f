use clap::Parser as ClapParser;
use std::{fs, path::Path, path::PathBuf, process};

use modelspan::{
    Position, Range, find_key_range_in_model_block, find_model_block_range,
    read_range_from_string,
};
use tokenizer::Dialect;

#[derive(ClapParser, Debug)]
#[command(author, version, about = "Locate model blocks and keys in SQL files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the range of the MODEL block and the text it covers
    Block {
        /// The .sql file to inspect
        file: PathBuf,

        /// SQL dialect to tokenize with
        #[arg(long, default_value = "ansi")]
        dialect: Dialect,
    },
    /// Print the range of a key inside the MODEL block
    Key {
        /// The .sql file to inspect
        file: PathBuf,

        /// The key to look for (case-insensitive)
        key: String,

        /// SQL dialect to tokenize with
        #[arg(long, default_value = "ansi")]
        dialect: Dialect,
    },
    /// Print the text covered by an explicit range
    Extract {
        /// The file to read
        file: PathBuf,

        #[arg(long)]
        start_line: usize,
        #[arg(long)]
        start_char: usize,
        #[arg(long)]
        end_line: usize,
        #[arg(long)]
        end_char: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Block { file, dialect } => {
            let sql = read_source(&file);
            log::debug!(
                "locating model block in '{}' ({} chars, dialect {})",
                file.display(),
                sql.chars().count(),
                dialect,
            );
            match find_model_block_range(&sql, dialect) {
                Ok(Some(range)) => print_range(&sql, range),
                Ok(None) => {
                    eprintln!("no model block found in '{}'", file.display());
                    process::exit(1);
                }
                Err(err) => {
                    eprintln!("Error locating model block: {}", err);
                    process::exit(1);
                }
            }
        }
        Command::Key { file, key, dialect } => {
            let sql = read_source(&file);
            log::debug!(
                "locating key '{}' in '{}' ({} chars, dialect {})",
                key,
                file.display(),
                sql.chars().count(),
                dialect,
            );
            match find_key_range_in_model_block(&sql, dialect, &key) {
                Ok(Some(range)) => print_range(&sql, range),
                Ok(None) => {
                    eprintln!(
                        "key '{}' not found in the model block of '{}'",
                        key,
                        file.display(),
                    );
                    process::exit(1);
                }
                Err(err) => {
                    eprintln!("Error locating key '{}': {}", key, err);
                    process::exit(1);
                }
            }
        }
        Command::Extract {
            file,
            start_line,
            start_char,
            end_line,
            end_char,
        } => {
            let content = read_source(&file);
            let range = Range::new(
                Position::new(start_line, start_char),
                Position::new(end_line, end_char),
            );
            println!("{}", read_range_from_string(&content, range));
        }
    }
}

fn read_source(file: &Path) -> String {
    match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", file.display(), err);
            process::exit(1);
        }
    }
}

fn print_range(sql: &str, range: Range) {
    log::debug!("resolved range {:?}", range);
    println!("{}", range);
    println!("{}", read_range_from_string(sql, range));
}
