//! Root Words - CLI
//!
//! Word scramble game with TUI and CLI modes, plus tools for exploring root words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use root_words::{
    commands::{find_hints, run_check, run_simple, run_survey},
    dictionary::WordSetDictionary,
    game::{Game, Rules},
    output::{print_check_result, print_hints_result, print_survey_statistics},
    wordlists::{EmbeddedWordList, FileWordList, WordListProvider},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "root_words",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Dictionary: 'embedded' (default) or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for root word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play a list of words against a given root word
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(value_name = "WORDS")]
        inputs: Vec<String>,
    },

    /// List every playable word for a root word
    Hints {
        /// The root word
        root: String,
    },

    /// Count playable words for every root word
    Survey {
        /// Limit number of root words to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the root word provider based on the -w flag
fn word_list_provider(words: &str) -> Box<dyn WordListProvider> {
    match words {
        "embedded" => Box::new(EmbeddedWordList),
        path => Box::new(FileWordList::new(path)),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary: &str) -> Result<WordSetDictionary> {
    match dictionary {
        "embedded" => Ok(WordSetDictionary::embedded()),
        path => WordSetDictionary::load_from_file(path)
            .with_context(|| format!("Could not load dictionary from {path}")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    tracing::debug!(words = dictionary.len(), "dictionary ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use root_words::interactive::{App, run_tui};

            let game = start_game(&cli.words, dictionary, cli.seed)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = start_game(&cli.words, dictionary, cli.seed)?;
            run_simple(&mut game)
        }
        Commands::Check { root, inputs } => {
            let result = run_check(&root, &inputs, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Hints { root } => {
            let result = find_hints(&root, &dictionary, &Rules::CLASSIC)?;
            print_hints_result(&result);
            Ok(())
        }
        Commands::Survey { limit } => {
            let pool = word_list_provider(&cli.words)
                .load()
                .context("Could not load root words")?;
            let stats = run_survey(&pool, &dictionary, &Rules::CLASSIC, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Load the root words and start the first round
fn start_game(
    words: &str,
    dictionary: WordSetDictionary,
    seed: Option<u64>,
) -> Result<Game<WordSetDictionary, StdRng>> {
    let provider = word_list_provider(words);
    Game::start(&*provider, dictionary, make_rng(seed))
        .with_context(|| format!("Could not start a game with root words from '{words}'"))
}
