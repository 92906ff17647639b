use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizLoopService, WordBankService};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use vocab_core::Randomness;
use vocab_core::model::QuizSettings;

#[derive(Parser, Debug)]
#[command(name = "app", version, about = "Multiple-choice vocabulary quiz")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    options: QuizOptions,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the desktop quiz (default)
    Ui,
    /// List the days in the word data with their word counts
    Days,
}

#[derive(Args, Debug, Clone)]
struct QuizOptions {
    /// Word data location: a JSON file path or an http(s) URL
    #[arg(long, global = true, env = "VOCAB_WORDS", default_value = "booster_vocab_day29_31.json")]
    words: String,

    /// Questions per game; short days play fewer
    #[arg(long, global = true, env = "VOCAB_QUESTIONS", default_value_t = QuizSettings::DEFAULT_QUESTIONS_PER_GAME)]
    questions: usize,

    /// Seed for reproducible shuffles
    #[arg(long, global = true, env = "VOCAB_SEED")]
    seed: Option<u64>,
}

impl QuizOptions {
    fn settings(&self) -> anyhow::Result<QuizSettings> {
        QuizSettings::standard()
            .with_questions_per_game(self.questions)
            .with_context(|| format!("invalid --questions value: {}", self.questions))
    }

    fn randomness(&self) -> Randomness {
        self.seed
            .map_or_else(Randomness::default_source, Randomness::seeded)
    }
}

struct DesktopApp {
    word_banks: Arc<WordBankService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn word_banks(&self) -> Arc<WordBankService> {
        Arc::clone(&self.word_banks)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn launch_ui(services: &AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        word_banks: services.word_banks(),
        quiz_loop: services.quiz_loop(),
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vocabulary Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn print_days(services: &AppServices) -> anyhow::Result<()> {
    let word_banks = services.word_banks();
    let bank = word_banks
        .word_bank()
        .await
        .with_context(|| format!("loading words from {}", word_banks.source_description()))?;

    let quiz_loop = services.quiz_loop();
    let required = quiz_loop.settings().min_words_per_day();
    for day in quiz_loop.day_overviews(&bank) {
        if day.playable {
            println!("{}\t{} words", day.label, day.word_count);
        } else {
            println!(
                "{}\t{} words (needs at least {required})",
                day.label, day.word_count
            );
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.options.settings()?;
    let randomness = cli.options.randomness();
    let storage = Storage::from_location(&cli.options.words);
    info!(
        source = %storage.word_bank.describe(),
        questions = settings.questions_per_game(),
        seeded = randomness.is_seeded(),
        "starting vocabulary quiz"
    );
    let services = AppServices::new(&storage, settings, randomness);

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(&services);
            Ok(())
        }
        Command::Days => print_days(&services).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_ui_options() {
        let cli = Cli::try_parse_from(["app", "--words", "words.json"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.options.words, "words.json");
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["app", "days", "--questions", "5", "--seed", "7"]).unwrap();
        assert_eq!(cli.command, Some(Command::Days));
        assert_eq!(cli.options.questions, 5);
        assert_eq!(cli.options.seed, Some(7));
        assert!(cli.options.randomness().is_seeded());
        assert_eq!(cli.options.settings().unwrap().questions_per_game(), 5);
    }

    #[test]
    fn zero_questions_is_rejected() {
        let cli = Cli::try_parse_from(["app", "--questions", "0"]).unwrap();
        assert!(cli.options.settings().is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
