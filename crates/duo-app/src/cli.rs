use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duo_core::LanguageSettings;
use serde::Serialize;

use crate::display::{
    language_display, render_correction, render_languages, render_lookup, render_text,
};
use crate::events::grammar::{
    handle_grammar_question, handle_sentence_analysis, handle_sentence_check,
};
use crate::events::word_lookup::handle_word_lookup;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "duo", version, about = "A companion tool for language learning")]
pub struct Cli {
    /// JSON config file; environment variables override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Target language for this run
    #[arg(long, short, global = true)]
    pub target: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Without a subcommand an interactive session starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a word
    Lookup {
        word: String,
        /// Treat the word as target language and translate back
        #[arg(long, short)]
        reverse: bool,
    },
    /// Ask a grammar question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Check a sentence and get a corrected version
    Check {
        #[arg(required = true, num_args = 1..)]
        sentence: Vec<String>,
    },
    /// Free-form analysis of a sentence
    Analyze {
        #[arg(required = true, num_args = 1..)]
        sentence: Vec<String>,
    },
    /// Show current and supported languages
    Languages,
}

/// Run one subcommand. Returns whether it succeeded.
pub async fn run_command(
    state: &AppState,
    settings: &LanguageSettings,
    command: Command,
    json: bool,
) -> anyhow::Result<bool> {
    let service = &state.service;

    match command {
        Command::Lookup { word, reverse } => {
            let label = direction_label(settings, reverse);
            let display = handle_word_lookup(service, settings, &word, label).await;
            let ok = display.error.is_none();
            emit(&display, json, render_lookup)?;
            Ok(ok)
        }
        Command::Ask { question } => {
            let display = handle_grammar_question(service, settings, &question.join(" ")).await;
            let ok = display.error.is_none();
            emit(&display, json, render_text)?;
            Ok(ok)
        }
        Command::Check { sentence } => {
            let display = handle_sentence_check(service, settings, &sentence.join(" ")).await;
            let ok = display.error.is_none();
            emit(&display, json, render_correction)?;
            Ok(ok)
        }
        Command::Analyze { sentence } => {
            let display = handle_sentence_analysis(service, settings, &sentence.join(" ")).await;
            let ok = display.error.is_none();
            emit(&display, json, render_text)?;
            Ok(ok)
        }
        Command::Languages => {
            emit(&language_display(settings, None), json, render_languages)?;
            Ok(true)
        }
    }
}

/// The label the interactive session would show for this direction
fn direction_label(settings: &LanguageSettings, reverse: bool) -> &str {
    let [forward, backward] = settings.direction_labels();
    if reverse {
        backward.as_str()
    } else {
        forward.as_str()
    }
}

fn emit<T: Serialize>(display: &T, json: bool, render: fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(display)?);
    } else {
        print!("{}", render(display));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_reverse() {
        let cli = Cli::parse_from(["duo", "--target", "French", "lookup", "chat", "--reverse"]);
        assert_eq!(cli.target.as_deref(), Some("French"));
        match cli.command {
            Some(Command::Lookup { word, reverse }) => {
                assert_eq!(word, "chat");
                assert!(reverse);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reverse_flag_picks_backward_label() {
        let supported = vec!["German".to_string(), "French".to_string()];
        let settings = LanguageSettings::new("English", "French", supported).unwrap();
        assert_eq!(direction_label(&settings, false), "English → French");
        assert_eq!(direction_label(&settings, true), "French → English");
    }

    #[test]
    fn test_parse_multiword_check() {
        let cli = Cli::parse_from(["duo", "check", "Ich", "gehe", "zu", "der", "Schule."]);
        match cli.command {
            Some(Command::Check { sentence }) => {
                assert_eq!(sentence.join(" "), "Ich gehe zu der Schule.")
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::parse_from(["duo"]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }
}
