pub mod compute;
pub mod demo;
pub mod greet;
pub mod password;
pub mod profile;
pub mod score;
pub mod stats;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kata")]
#[command(about = "A workbook of function-writing exercises.", version)]
pub struct CommandLine {
    /// Trim output; twice for bare results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a greeting, personalized when a name is given
    #[command(alias = "g")]
    Greet { name: Option<String> },
    /// Area of a rectangle; one dimension means a square
    #[command(alias = "a")]
    Area {
        #[arg(allow_negative_numbers = true)]
        length: String,
        #[arg(allow_negative_numbers = true)]
        width: Option<String>,
    },
    /// Area and circumference of a circle
    #[command(alias = "c")]
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: String,
    },
    /// Body mass index from weight (kg) and height (m)
    #[command(alias = "b")]
    Bmi {
        #[arg(allow_negative_numbers = true)]
        weight: String,
        #[arg(allow_negative_numbers = true)]
        height: String,
    },
    /// Feed points through a scoreboard and print the running total
    #[command(alias = "sc")]
    Score {
        #[arg(required = true, allow_negative_numbers = true)]
        points: Vec<String>,
    },
    /// n!, iteratively
    #[command(alias = "f")]
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: String,
    },
    /// Summarize numbers: sum, average, maximum, minimum
    #[command(alias = "st")]
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// Build a profile record; occupation defaults to Student
    #[command(alias = "p")]
    Profile {
        name: String,
        #[arg(allow_negative_numbers = true)]
        age: String,
        occupation: Option<String>,
    },
    /// Check a password against the four criteria
    #[command(alias = "pw")]
    Password { candidate: String },
    /// Run the fixed demonstration sequence
    #[command(alias = "d")]
    Demo,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
