// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::GenerationConfig;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,
    },

    /// Show or clear the password history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Manage saved presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Show the current theme
    Theme {
        /// Switch between dark and light
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Start from a saved preset
    #[arg(long, short)]
    pub preset: Option<String>,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Copy the last generated password to the clipboard
    #[arg(long, short)]
    pub copy: bool,

    #[command(flatten)]
    pub options: ConfigArgs,
}

/// Flags layered over a base config, either the defaults or a preset.
#[derive(ClapArgs, Debug, Default)]
pub struct ConfigArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude ambiguous characters (i, l, 1, L, o, 0)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Never place characters with adjacent codes next to each other
    #[arg(long)]
    pub prevent_sequential: bool,

    /// Never repeat the previous character
    #[arg(long)]
    pub prevent_repeat: bool,

    /// Keep ambiguous characters even if the base excludes them
    #[arg(long, conflicts_with = "exclude_ambiguous")]
    pub allow_ambiguous: bool,

    /// Allow sequential characters even if the base prevents them
    #[arg(long, conflicts_with = "prevent_sequential")]
    pub allow_sequential: bool,

    /// Allow repeated characters even if the base prevents them
    #[arg(long, conflicts_with = "prevent_repeat")]
    pub allow_repeat: bool,
}

impl ConfigArgs {
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.no_uppercase {
            config.include_uppercase = false;
        }
        if self.no_lowercase {
            config.include_lowercase = false;
        }
        if self.no_numbers {
            config.include_numbers = false;
        }
        if self.no_symbols {
            config.include_symbols = false;
        }
        config.exclude_ambiguous = toggle(config.exclude_ambiguous, self.exclude_ambiguous, self.allow_ambiguous);
        config.prevent_sequential = toggle(config.prevent_sequential, self.prevent_sequential, self.allow_sequential);
        config.prevent_repeat = toggle(config.prevent_repeat, self.prevent_repeat, self.allow_repeat);
        config
    }
}

fn toggle(base: bool, on: bool, off: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        base
    }
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List recent passwords
    List {
        /// Show passwords in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Copy an entry to the clipboard (1 is the newest)
    Copy {
        #[arg(default_value_t = 1)]
        index: usize,
    },

    /// Delete all history entries
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum PresetAction {
    /// List preset names
    List,

    /// Show a preset's settings
    Show {
        #[arg(required = true)]
        name: String,
    },

    /// Save settings under a name, replacing any preset with that name
    Save {
        #[arg(required = true)]
        name: String,

        #[command(flatten)]
        options: ConfigArgs,
    },

    /// Delete a preset
    Delete {
        #[arg(required = true)]
        name: String,
    },
}
