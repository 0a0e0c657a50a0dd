use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordle-ledger", about = "Daily word game statistics and share codes")]
pub struct Args {
    /// Directory holding stats.json, config.json and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Mark shared results as played in hard mode
    #[arg(long, global = true)]
    pub hard_mode: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the statistics menu
    Stats {
        /// Today's answer, needed to show the share code
        #[arg(long)]
        target: Option<String>,
    },

    /// Record a guess for today's game
    Guess {
        word: String,

        /// Today's answer
        #[arg(long)]
        target: String,
    },

    /// Print the share message for today's finished game
    Share {
        /// Today's answer
        #[arg(long)]
        target: String,
    },

    /// Print the stored statistics record
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess() {
        let args = Args::try_parse_from(["wordle-ledger", "guess", "crane", "--target", "slate"]).unwrap();
        match args.command {
            Some(Command::Guess { word, target }) => {
                assert_eq!(word, "crane");
                assert_eq!(target, "slate");
            }
            _ => panic!("expected guess command"),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = Args::try_parse_from(["wordle-ledger", "--hard-mode"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.hard_mode);
    }

    #[test]
    fn test_share_requires_target() {
        assert!(Args::try_parse_from(["wordle-ledger", "share"]).is_err());
    }
}
