use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "t9pad", bin_name = "t9pad", version)]
#[command(about = "T9 keypad codes and textonyms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to $T9PAD_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print the keypad before the command output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the keypad
    #[command(alias = "ls")]
    Show,

    /// Print the key sequence of one or more words
    #[command(alias = "c")]
    Code {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Print the key a letter is on
    #[command(alias = "k")]
    Key {
        #[arg(required = true, num_args = 1..)]
        letters: Vec<String>,
    },

    /// Check whether two words are textonyms
    #[command(alias = "t")]
    Textonyms { word1: String, word2: String },

    /// Group words that share a key sequence
    #[command(alias = "g")]
    Group {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Add letters to a key in the saved layout
    Map {
        /// Key (0-9)
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// Letters to add
        letters: String,
    },

    /// Write the default config file
    Init,

    /// Show the config file location and settings
    Config,
}
