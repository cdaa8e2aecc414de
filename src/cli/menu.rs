// src/cli/menu.rs
use inquire::{Confirm, InquireError, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::app::PassGuard;
use crate::cli::handlers::{self, Palette};
use crate::db::KeyValueStore;
use crate::models::GenerationConfig;
use crate::utils::{clipboard, mask_password};

const GENERATE: &str = "🔐  Generate password";
const CONFIGURE: &str = "⚙️  Change generator settings";
const LOAD_PRESET: &str = "📂  Load preset";
const SAVE_PRESET: &str = "💾  Save settings as preset";
const DELETE_PRESET: &str = "🗑️  Delete preset";
const COPY: &str = "📋  Copy a password";
const ANALYZE: &str = "🔍  Analyze a password";
const HISTORY: &str = "📜  View history";
const CLEAR_HISTORY: &str = "🧹  Clear history";
const THEME: &str = "🎨  Toggle theme";
const EXIT: &str = "❌  Exit";

// Escape and Ctrl+C inside a prompt end the menu instead of failing it
fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub fn run_cli_menu<S: KeyValueStore>(app: &PassGuard<S>, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║            🛡️  PASSGUARD              ║");
    println!("╚══════════════════════════════════════╝");

    let mut current = app.default_config().clone();
    generate_and_show(app, &current)?;

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            GENERATE, COPY, CONFIGURE, LOAD_PRESET, SAVE_PRESET, DELETE_PRESET,
            ANALYZE, HISTORY, CLEAR_HISTORY, THEME, EXIT,
        ];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(12)
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let outcome = match selection {
            GENERATE => generate_and_show(app, &current),
            CONFIGURE => match prompt_config(&current, app.max_length()) {
                Ok(config) => {
                    current = config;
                    generate_and_show(app, &current)
                }
                Err(e) => Err(e),
            },
            LOAD_PRESET => match load_preset(app) {
                Ok(Some(config)) => {
                    current = config;
                    generate_and_show(app, &current)
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            },
            COPY => copy_from_history(app),
            SAVE_PRESET => save_preset(app, &current),
            DELETE_PRESET => delete_preset(app),
            ANALYZE => handlers::handle_analyze(app, None, false, &palette(app)?),
            HISTORY => handlers::handle_list_history(app, true, false, &palette(app)?),
            CLEAR_HISTORY => clear_history(app),
            THEME => toggle_theme(app),
            _ => break,
        };

        if let Err(e) = outcome {
            match e.downcast_ref::<InquireError>() {
                Some(inquire_err) if is_cancel(inquire_err) => continue,
                _ => println!("❌ {}", e),
            }
        }
    }

    log::info!("Interactive session ended");
    println!("👋 Goodbye!");
    Ok(())
}

fn palette<S: KeyValueStore>(app: &PassGuard<S>) -> Result<Palette> {
    Ok(Palette::new(app.theme().current()?))
}

fn generate_and_show<S: KeyValueStore>(app: &PassGuard<S>, config: &GenerationConfig) -> Result<()> {
    match app.generate(config) {
        Ok(report) => handlers::print_report(&report, &palette(app)?),
        Err(e) => println!("⚠️  {}", e),
    }
    println!();
    Ok(())
}

fn prompt_config(current: &GenerationConfig, max_length: usize) -> Result<GenerationConfig> {
    let length: usize = Text::new("Password length:")
        .with_default(&current.length.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| InquireError::Custom("Invalid number".into())))?;

    if length == 0 || length > max_length {
        anyhow::bail!("Password length must be between 1 and {}", max_length);
    }

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(current.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(current.include_lowercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(current.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(current.include_symbols)
        .prompt()?;

    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (i, l, 1, L, o, 0)?")
        .with_default(current.exclude_ambiguous)
        .prompt()?;

    let prevent_sequential = Confirm::new("Prevent sequential characters (ab, 12)?")
        .with_default(current.prevent_sequential)
        .prompt()?;

    let prevent_repeat = Confirm::new("Prevent repeated characters (aa)?")
        .with_default(current.prevent_repeat)
        .prompt()?;

    Ok(GenerationConfig {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
        exclude_ambiguous,
        prevent_sequential,
        prevent_repeat,
    })
}

fn select_preset<S: KeyValueStore>(app: &PassGuard<S>, message: &str) -> Result<Option<String>> {
    let names: Vec<String> = app.presets().list()?.into_iter().map(|p| p.name).collect();
    if names.is_empty() {
        println!("No presets saved");
        return Ok(None);
    }
    Ok(Select::new(message, names).prompt_skippable()?)
}

fn load_preset<S: KeyValueStore>(app: &PassGuard<S>) -> Result<Option<GenerationConfig>> {
    match select_preset(app, "Load preset:")? {
        Some(name) => Ok(Some(app.preset(&name)?)),
        None => Ok(None),
    }
}

fn save_preset<S: KeyValueStore>(app: &PassGuard<S>, current: &GenerationConfig) -> Result<()> {
    let name = Text::new("Enter preset name:").prompt()?;
    handlers::save_preset(app, &name, current)?;
    println!("✅ Preset saved!");
    Ok(())
}

fn delete_preset<S: KeyValueStore>(app: &PassGuard<S>) -> Result<()> {
    let Some(name) = select_preset(app, "Delete preset:")? else {
        return Ok(());
    };

    let confirmed = Confirm::new(&format!("Delete preset \"{}\"?", name))
        .with_default(false)
        .prompt()?;
    if confirmed {
        app.presets().delete(&name)?;
        println!("🗑️  Preset deleted");
    }
    Ok(())
}

// Newest entry is first, so Enter copies the password just generated
fn copy_from_history<S: KeyValueStore>(app: &PassGuard<S>) -> Result<()> {
    let entries = app.history().entries()?;
    if entries.is_empty() {
        println!("No history yet");
        return Ok(());
    }

    let options: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>2}. {}  ({})", i + 1, mask_password(&entry.password), entry.strength))
        .collect();
    let Some(choice) = Select::new("Copy which password?", options.clone()).prompt_skippable()? else {
        return Ok(());
    };
    let Some(entry) = options.iter().position(|o| *o == choice).and_then(|i| entries.get(i)) else {
        return Ok(());
    };

    clipboard::copy_to_clipboard(&entry.password)?;
    clipboard::clear_clipboard_after(entry.password.clone(), app.clipboard_timeout());
    println!("📋 Copied to clipboard");
    Ok(())
}

fn toggle_theme<S: KeyValueStore>(app: &PassGuard<S>) -> Result<()> {
    let theme = app.theme().toggle()?;
    println!("🎨 Theme set to {}", theme);
    Ok(())
}

fn clear_history<S: KeyValueStore>(app: &PassGuard<S>) -> Result<()> {
    let confirmed = Confirm::new("Clear history?").with_default(false).prompt()?;
    if confirmed {
        app.history().clear()?;
        println!("✅ History cleared");
    }
    Ok(())
}
