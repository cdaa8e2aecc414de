// src/cli/handlers.rs
use anyhow::{bail, Result};
use chrono::Utc;
use console::{style, Style};
use inquire::Password;

use crate::app::{AppError, PassGuard};
use crate::cli::commands::{CliCommand, GenerateArgs, HistoryAction, PresetAction};
use crate::db::KeyValueStore;
use crate::models::{GenerationConfig, GenerationReport, HistoryEntry, StrengthLevel, Theme};
use crate::utils::clipboard;
use crate::utils::{format_time_ago, mask_password};

/// Strength colors for the active theme.
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn level(&self, level: StrengthLevel) -> Style {
        let style = match level {
            StrengthLevel::VeryWeak => Style::new().red(),
            StrengthLevel::Weak => Style::new().magenta(),
            StrengthLevel::Medium => Style::new().yellow(),
            StrengthLevel::Strong => Style::new().green(),
            StrengthLevel::VeryStrong => Style::new().cyan(),
        };
        match self.theme {
            Theme::Dark => style.bright().bold(),
            Theme::Light => style,
        }
    }

    pub fn heading(&self) -> Style {
        match self.theme {
            Theme::Dark => Style::new().white().bright().bold(),
            Theme::Light => Style::new().black().bold(),
        }
    }
}

pub fn run_command<S: KeyValueStore>(app: &PassGuard<S>, command: CliCommand, json: bool) -> Result<()> {
    let palette = Palette::new(app.theme().current()?);

    match command {
        CliCommand::Generate(args) => handle_generate(app, &args, json, &palette),
        CliCommand::Analyze { password } => handle_analyze(app, password, json, &palette),
        CliCommand::History { action } => match action.unwrap_or(HistoryAction::List { reveal: false }) {
            HistoryAction::List { reveal } => handle_list_history(app, reveal, json, &palette),
            HistoryAction::Copy { index } => handle_copy_history(app, index),
            HistoryAction::Clear => {
                app.history().clear()?;
                println!("✅ History cleared");
                Ok(())
            }
        },
        CliCommand::Preset { action } => handle_preset(app, action, json),
        CliCommand::Theme { toggle } => {
            let theme = if toggle { app.theme().toggle()? } else { app.theme().current()? };
            if json {
                println!("{}", serde_json::to_string(&theme)?);
            } else {
                println!("🎨 Theme: {}", theme);
            }
            Ok(())
        }
    }
}

pub fn handle_generate<S: KeyValueStore>(
    app: &PassGuard<S>,
    args: &GenerateArgs,
    json: bool,
    palette: &Palette,
) -> Result<()> {
    let base = match &args.preset {
        Some(name) => app.preset(name)?,
        None => app.default_config().clone(),
    };
    let config = args.options.apply(base);

    let mut reports = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        reports.push(app.generate(&config)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report, palette);
        }
    }

    if args.copy {
        if let Some(report) = reports.last() {
            copy_password(&report.password, app.clipboard_timeout())?;
        }
    }

    Ok(())
}

pub fn handle_analyze<S: KeyValueStore>(
    app: &PassGuard<S>,
    password: Option<String>,
    json: bool,
    palette: &Palette,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    };

    let report = app.analyze(&password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_analysis(&report, palette);
    }
    Ok(())
}

pub fn handle_list_history<S: KeyValueStore>(
    app: &PassGuard<S>,
    reveal: bool,
    json: bool,
    palette: &Palette,
) -> Result<()> {
    let entries = app.history().entries()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print_history(&entries, reveal, palette);
    Ok(())
}

pub fn handle_copy_history<S: KeyValueStore>(app: &PassGuard<S>, index: usize) -> Result<()> {
    let Some(entry) = app.history().get(index)? else {
        bail!("No history entry #{}", index);
    };
    copy_password(&entry.password, app.clipboard_timeout())
}

/// Copies and then waits out the timeout so the clipboard is cleared
/// before the process exits.
pub fn copy_password(password: &str, timeout_secs: u64) -> Result<()> {
    if timeout_secs > 0 {
        eprintln!("📋 Copied to clipboard, clearing in {}s", timeout_secs);
    } else {
        eprintln!("📋 Copied to clipboard");
    }
    clipboard::copy_to_clipboard_with_timeout(password, timeout_secs)?;
    Ok(())
}

pub fn handle_preset<S: KeyValueStore>(app: &PassGuard<S>, action: PresetAction, json: bool) -> Result<()> {
    let presets = app.presets();

    match action {
        PresetAction::List => {
            let all = presets.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for preset in all {
                    println!("• {} ({} chars)", preset.name, preset.config.length);
                }
            }
        }
        PresetAction::Show { name } => {
            let config = app.preset(&name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print_config(&name, &config);
            }
        }
        PresetAction::Save { name, options } => {
            let config = options.apply(app.default_config().clone());
            save_preset(app, &name, &config)?;
            println!("✅ Preset \"{}\" saved", name);
        }
        PresetAction::Delete { name } => {
            if !presets.delete(&name)? {
                return Err(AppError::PresetNotFound(name).into());
            }
            println!("🗑️  Preset \"{}\" deleted", name);
        }
    }

    Ok(())
}

/// Validates before storing so a preset can always be generated from.
pub fn save_preset<S: KeyValueStore>(app: &PassGuard<S>, name: &str, config: &GenerationConfig) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Preset name cannot be empty");
    }
    app.validate(config)?;
    app.presets().save(name.trim(), config)?;
    Ok(())
}

pub fn print_report(report: &GenerationReport, palette: &Palette) {
    println!();
    println!("{} {}", palette.heading().apply_to("Password:  "), style(&report.password).bold());
    print_analysis(report, palette);
}

pub fn print_analysis(report: &GenerationReport, palette: &Palette) {
    let analysis = &report.analysis;
    println!(
        "{} {} ({}/100)",
        palette.heading().apply_to("Strength:  "),
        palette.level(analysis.level).apply_to(analysis.label()),
        analysis.score
    );
    println!("{} {} bits", palette.heading().apply_to("Entropy:   "), analysis.entropy);
    println!("{} {}", palette.heading().apply_to("Crack time:"), report.crack_time);

    if !analysis.suggestions.is_empty() {
        println!("{}", palette.heading().apply_to("Suggestions:"));
        for suggestion in &analysis.suggestions {
            println!("  • {}", suggestion);
        }
    }
}

pub fn print_history(entries: &[HistoryEntry], reveal: bool, palette: &Palette) {
    if entries.is_empty() {
        println!("No history yet");
        return;
    }

    let now = Utc::now();
    for (i, entry) in entries.iter().enumerate() {
        let password = if reveal { entry.password.clone() } else { mask_password(&entry.password) };
        println!(
            "{:>2}. {:<32} {:<12} {}",
            i + 1,
            password,
            palette.level(entry.strength).apply_to(entry.strength.label()),
            style(format_time_ago(entry.timestamp, now)).dim()
        );
    }
}

pub fn print_config(name: &str, config: &GenerationConfig) {
    let flag = |on: bool| if on { "yes" } else { "no" };
    println!("{}", style(name).bold());
    println!("  Length:             {}", config.length);
    println!("  Uppercase:          {}", flag(config.include_uppercase));
    println!("  Lowercase:          {}", flag(config.include_lowercase));
    println!("  Numbers:            {}", flag(config.include_numbers));
    println!("  Symbols:            {}", flag(config.include_symbols));
    println!("  Exclude ambiguous:  {}", flag(config.exclude_ambiguous));
    println!("  Prevent sequential: {}", flag(config.prevent_sequential));
    println!("  Prevent repeat:     {}", flag(config.prevent_repeat));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Config;
    use crate::cli::commands::ConfigArgs;
    use crate::db::MemoryStore;

    fn app() -> PassGuard<MemoryStore> {
        PassGuard::new(MemoryStore::new(), &Config::default())
    }

    #[test]
    fn test_generate_command_records_each_password() {
        let app = app();
        let args = GenerateArgs { preset: None, count: 3, copy: false, options: ConfigArgs::default() };
        handle_generate(&app, &args, true, &Palette::new(Theme::Dark)).unwrap();
        assert_eq!(app.history().entries().unwrap().len(), 3);
    }

    #[test]
    fn test_generate_with_unknown_preset_fails() {
        let app = app();
        let args = GenerateArgs { preset: Some("Nope".into()), count: 1, copy: false, options: ConfigArgs::default() };
        let err = handle_generate(&app, &args, true, &Palette::new(Theme::Light)).unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::PresetNotFound(name)) if name == "Nope"));
    }

    #[test]
    fn test_save_preset_rejects_empty_selection() {
        let app = app();
        let config = GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..GenerationConfig::default()
        };
        assert!(save_preset(&app, "Empty", &config).is_err());
        assert!(save_preset(&app, "   ", &GenerationConfig::default()).is_err());
        assert_eq!(app.presets().load("Empty").unwrap(), None);
    }

    #[test]
    fn test_preset_delete_missing_fails() {
        let app = app();
        let err = handle_preset(&app, PresetAction::Delete { name: "Nope".into() }, false).unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::PresetNotFound(_))));
        assert!(handle_preset(&app, PresetAction::Delete { name: "Balanced".into() }, false).is_ok());
    }

    #[test]
    fn test_copy_missing_history_entry_fails() {
        let app = app();
        let err = handle_copy_history(&app, 1).unwrap_err();
        assert_eq!(err.to_string(), "No history entry #1");
    }

    #[test]
    fn test_theme_command_toggles() {
        let app = app();
        run_command(&app, CliCommand::Theme { toggle: true }, true).unwrap();
        assert_eq!(app.theme().current().unwrap(), Theme::Light);
    }
}
