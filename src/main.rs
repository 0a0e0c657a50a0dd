use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use wordle_ledger::{
    args::{Args, Command},
    config::{CONFIG_FILE_NAME, GameConfig, default_data_dir},
    day::{self, DayIndex},
    feedback::{TargetWord, TileScorer},
    logging,
    share::ShareComposer,
    stats::{self, StatsRecord},
    ui::{App, run_ui},
};

fn main() -> Result<()> {
    let args = Args::parse();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let stats_file = stats::stats_path(&data_dir)?;
    let _log_guard = logging::init(&data_dir.join("logs"));

    let mut config = GameConfig::load(&data_dir.join(CONFIG_FILE_NAME));
    if args.hard_mode {
        config.hard_mode = true;
    }

    let today = day::today();
    let mut record = stats::load_for_day(&stats_file, today);
    info!(
        "Loaded stats for day {}: {} games, streak {}",
        today, record.games_played, record.streak
    );

    match args.command.unwrap_or(Command::Stats { target: None }) {
        Command::Stats { target } => {
            let app = App::new(record, config, target.map(TargetWord::new));
            run_ui(app)
        }
        Command::Guess { word, target } => {
            submit_guess(&mut record, &config, today, &word, &TargetWord::new(target))?;
            if !stats::save(&record, &stats_file) {
                eprintln!("warning: could not save stats to {}", stats_file.display());
            }
            Ok(())
        }
        Command::Share { target } => {
            print_share(&record, &config, &TargetWord::new(target));
            Ok(())
        }
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
    }
}

fn submit_guess(
    record: &mut StatsRecord,
    config: &GameConfig,
    today: DayIndex,
    word: &str,
    target: &TargetWord,
) -> Result<()> {
    if target.word_len() != config.word_len {
        bail!("target must be {} letters", config.word_len);
    }
    if record.is_game_over(target, config.max_guesses) {
        println!("Today's game is already over.");
        print_share(record, config, target);
        return Ok(());
    }

    let word = word.trim().to_lowercase();
    if word.chars().count() != config.word_len {
        bail!("guess must be {} letters", config.word_len);
    }

    record.push_guess(today, word.as_str());
    info!("Game guess submitted: {}", word);

    let row: String = target
        .score(&word)
        .into_iter()
        .map(|tile| config.glyphs.glyph(tile))
        .collect();
    println!("{} {}", row, word.to_uppercase());

    if record.is_game_over(target, config.max_guesses) {
        let won = record.is_solved(target);
        record.record_result(today, record.board_state.len() as u32, won, config.max_guesses);

        if won {
            println!("Solved!");
        } else {
            println!("Out of guesses. The word was {}.", target.as_str().to_uppercase());
        }
        println!();
        print_share(record, config, target);
    } else {
        let left = config.max_guesses as usize - record.board_state.len();
        println!("{} guesses left", left);
    }

    Ok(())
}

fn print_share(record: &StatsRecord, config: &GameConfig, target: &TargetWord) {
    match ShareComposer::new(config).compose(record, target) {
        Some(message) => print!("{}", message),
        None => println!("Nothing to share yet: today's game is not finished."),
    }
}
