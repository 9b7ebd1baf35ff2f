use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;

use housecount::{assign_patronus, load_characters, Config, EMPTY_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "housecount")]
#[command(author, version, about = "Explore the Hogwarts character dataset by house, species, and blood status")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset CSV to load (overrides the configured path)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive terminal explorer (default)
    Tui,

    /// Print a colored per-house summary to the terminal
    Summary,

    /// Reveal a patronus for the given name
    Patronus {
        /// Name to assign a patronus to
        name: String,
    },

    /// Serve the chart viewer and JSON API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let args = Args::parse();
    let config = Config::load();

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            if let Err(e) = housecount::tui::run(&config, args.data) {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
        Command::Summary => {
            let records = load_or_exit(&config, args.data);
            housecount::summary::print_summary(&records);
        }
        Command::Patronus { name } => match assign_patronus(&name, &config.patronus.labels) {
            Some(label) => println!("{}'s patronus is a {}!", name.trim(), label.cyan().bold()),
            None => println!("{}", EMPTY_PROMPT),
        },
        Command::Serve { port } => {
            let records = load_or_exit(&config, args.data);
            let port = port.unwrap_or(config.serve.port);
            if let Err(e) = housecount::serve::start(port, records, config.patronus.labels.clone())
            {
                eprintln!("{} {}", "Server error:".red().bold(), e);
                exit(1);
            }
        }
        Command::Completion { shell } => {
            let mut cmd = Args::command();
            generate(shell, &mut cmd, "housecount", &mut io::stdout());
        }
    }
}

fn load_or_exit(config: &Config, data_override: Option<PathBuf>) -> Vec<housecount::Character> {
    let path = data_override.unwrap_or_else(|| config.data.path.clone());
    match load_characters(&path, &config.data.houses) {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "{} failed to load {}: {}",
                "Error:".red().bold(),
                path.display(),
                e
            );
            exit(1);
        }
    }
}
