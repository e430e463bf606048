use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ayeen")]
#[command(about = "Inspect and change Ayeen accessibility settings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Host color scheme used to resolve the `auto` theme
    #[arg(long, global = true, value_enum, default_value_t = HostScheme::System)]
    pub host_scheme: HostScheme,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current settings and derived display values
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a single setting, e.g. `ayeen set fontSize large`
    Set {
        /// Setting name as stored (theme, highContrast, fontSize, ttsRate, ...)
        field: String,
        /// New value
        value: String,
    },
    /// Restore every setting to its default
    Reset,
    /// Press a row or button on the settings screen
    Press {
        #[arg(value_enum)]
        action: PressAction,
    },
    /// Flip a switch on the settings screen
    Toggle {
        #[arg(value_enum)]
        switch: SwitchName,
        #[arg(value_enum)]
        state: SwitchState,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum HostScheme {
    /// Ask the operating system
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PressAction {
    Theme,
    FontSize,
    Rate,
    Pitch,
    Language,
    HighContrast,
    ScreenReader,
    AutoSpeak,
    Haptics,
    SoundEffects,
    TestVoice,
    Reset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SwitchName {
    DarkMode,
    HighContrast,
    Tts,
    AutoSpeak,
    Haptics,
    SoundEffects,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}
