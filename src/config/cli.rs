use crate::core::operations::NewPerson;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "people")]
#[command(version, about = "Keep a small registry of people and their birthdays")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new person
    Add {
        #[command(flatten)]
        file: FileArg,

        #[command(flatten)]
        person: PersonArgs,
    },
    /// Display people
    Display {
        #[command(flatten)]
        file: FileArg,
    },
    /// Select people by surname
    Select {
        #[command(flatten)]
        file: FileArg,

        /// The required surname
        #[arg(short, long)]
        surname: String,
    },
}

impl Command {
    pub fn filename(&self) -> &str {
        match self {
            Command::Add { file, .. } | Command::Display { file } | Command::Select { file, .. } => {
                &file.filename
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct FileArg {
    /// The data file name, relative to the home directory
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct PersonArgs {
    /// The person's surname
    #[arg(short, long)]
    pub surname: String,

    /// The person's name
    #[arg(short, long)]
    pub name: String,

    /// The person's zodiac
    #[arg(short, long)]
    pub zodiac: Option<String>,

    /// The person's birthday (DD.MM.YYYY)
    #[arg(short, long)]
    pub birthday: String,
}

impl From<PersonArgs> for NewPerson {
    fn from(args: PersonArgs) -> Self {
        Self {
            surname: args.surname,
            name: args.name,
            zodiac: args.zodiac,
            birthday: args.birthday,
        }
    }
}
