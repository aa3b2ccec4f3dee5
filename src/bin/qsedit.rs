#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::Parser;
use qsedit::{Action, Editor, EditorError, Field};

/// Edit the query parameters of a URL and print the rebuilt URL
#[derive(Parser, Debug)]
#[command(name = "qsedit", version, long_about = None)]
struct Cli {
    /// URL to edit
    url: String,

    /// Leave out every parameter with this key
    #[arg(short, long, value_name = "KEY")]
    drop: Vec<String>,

    /// Set the value of every parameter with this key, adding it if missing
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    set: Vec<(String, String)>,

    /// Append a parameter (ignored if the key or value is empty)
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    add: Vec<(String, String)>,

    /// Append a suggested key with an empty value
    #[arg(long, value_name = "KEY")]
    suggest: Vec<String>,

    /// Print the parsed parameters and remaining suggestions instead
    #[arg(short, long)]
    list: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

/// Indices of the records whose key is `key`, in order
fn positions(editor: &Editor, key: &str) -> Vec<usize> {
    editor
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.key == key)
        .map(|(index, _)| index)
        .collect()
}

/// Apply the command-line edits to the editor: `--set`, `--drop`, `--add`,
/// `--suggest`, then compose.
///
/// Each stage reads the state left by the previous one, so `--drop` also
/// sees records appended by `--set` and a repeated `--drop` is harmless.
fn apply(cli: &Cli, editor: &mut Editor) -> Result<(), EditorError> {
    for (key, value) in &cli.set {
        let found = positions(editor, key);
        if found.is_empty() {
            editor.dispatch(Action::AddCustom {
                key: key.clone(),
                value: value.clone(),
            })?;
        }
        editor.dispatch_all(found.into_iter().map(|index| Action::EditField {
            index,
            field: Field::Value,
            text: value.clone(),
        }))?;
    }

    for key in &cli.drop {
        let found = positions(editor, key);
        if found.is_empty() {
            log::warn!("--drop {key}: no such parameter");
        }
        let toggles: Vec<Action> = found
            .into_iter()
            .filter(|&index| editor.records().get(index).is_some_and(|r| r.selected))
            .map(Action::ToggleSelected)
            .collect();
        editor.dispatch_all(toggles)?;
    }

    editor.dispatch_all(cli.add.iter().map(|(key, value)| Action::AddCustom {
        key: key.clone(),
        value: value.clone(),
    }))?;
    editor.dispatch_all(cli.suggest.iter().cloned().map(Action::AddSuggestion))?;
    editor.dispatch(Action::Compose)
}

fn listing(editor: &Editor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "base: {}", editor.base_path());
    for record in editor.records() {
        let mark = if record.selected { 'x' } else { ' ' };
        let origin = if record.original { "" } else { " (added)" };
        let _ = writeln!(out, "[{mark}] {} = {}{origin}", record.key, record.value);
    }
    let _ = writeln!(out, "suggestions: {}", editor.suggestions().join(", "));
    out
}

/// Text to print for the edited state, honoring `--list` and `--json`
fn render(cli: &Cli, editor: &Editor) -> Result<String, Box<dyn std::error::Error>> {
    if cli.list {
        if cli.json {
            return Ok(serde_json::to_string_pretty(editor.records())? + "\n");
        }
        return Ok(listing(editor));
    }

    let Some(composition) = editor.composition() else {
        return Err("no URL was generated".into());
    };

    if cli.json {
        return Ok(serde_json::to_string_pretty(composition)? + "\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{composition}");
    for key in &composition.excluded_original_keys {
        let _ = writeln!(out, "excluded: {key}");
    }
    Ok(out)
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut editor = Editor::from_url(&cli.url);
    apply(cli, &mut editor)?;
    log::debug!("{} record(s) after edits", editor.records().len());
    render(cli, &editor)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
