//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::formatters::{format_outcome, numbered_words, score_label};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<D: Dictionary, R: Rng>(game: &mut Game<D, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock())
}

/// Play a game reading one word per line from `input`
///
/// Commands: `:new` starts over, `:words` lists used words, `:quit` exits. End of
/// input also ends the game.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<D, R, I, O>(game: &mut Game<D, R>, mut input: I, mut output: O) -> Result<()>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                   Root Words - Simple Mode                   ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make words from the letters of the root word.")?;
    writeln!(output, "  +10 for a new real word of 3+ letters")?;
    writeln!(output, "  -2 for a repeat, -3 for letters you don't have, -5 for a non-word\n")?;
    writeln!(output, "Commands: ':new' for a new game, ':words' to list your words, ':quit' to exit\n")?;

    print_round_header(game, &mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                game.new_game();
                writeln!(output, "\n🔄 New game started!\n")?;
                print_round_header(game, &mut output)?;
            }
            ":words" | ":w" => {
                if game.used_words().is_empty() {
                    writeln!(output, "No words yet.\n")?;
                } else {
                    for entry in numbered_words(game.used_words()) {
                        writeln!(output, "  {entry}")?;
                    }
                    writeln!(output)?;
                }
            }
            _ => {
                if let Some(outcome) = game.submit(&line) {
                    writeln!(output, "{}", format_outcome(outcome))?;
                    writeln!(output, "{}\n", score_label(game.score()))?;
                }
            }
        }
    }

    writeln!(
        output,
        "👋 Thanks for playing! Final {} with {} words.\n",
        score_label(game.score()),
        game.used_words().len()
    )?;
    Ok(())
}

fn print_round_header<D: Dictionary, R: Rng, O: Write>(
    game: &Game<D, R>,
    output: &mut O,
) -> Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        game.root_word().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────\n")?;
    Ok(())
}
