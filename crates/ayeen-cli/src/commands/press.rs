use std::path::Path;

use ayeen_core::feedback::EffectRunner;
use ayeen_core::screens::{handle_settings_action, SettingsAction, SettingsRow};

use crate::cli::{HostScheme, PressAction, SwitchName, SwitchState};
use crate::commands::common::{open_store, TerminalFeedback};
use crate::error::CliError;

pub const fn press_to_action(action: PressAction) -> SettingsAction {
    match action {
        PressAction::Theme => SettingsAction::CycleTheme,
        PressAction::FontSize => SettingsAction::CycleFontSize,
        PressAction::Rate => SettingsAction::CycleTtsRate,
        PressAction::Pitch => SettingsAction::CycleTtsPitch,
        PressAction::Language => SettingsAction::ToggleLanguage,
        PressAction::HighContrast => SettingsAction::PressRow(SettingsRow::HighContrast),
        PressAction::ScreenReader => SettingsAction::PressRow(SettingsRow::ScreenReader),
        PressAction::AutoSpeak => SettingsAction::PressRow(SettingsRow::AutoSpeak),
        PressAction::Haptics => SettingsAction::PressRow(SettingsRow::Haptics),
        PressAction::SoundEffects => SettingsAction::PressRow(SettingsRow::SoundEffects),
        PressAction::TestVoice => SettingsAction::TestVoice,
        PressAction::Reset => SettingsAction::Reset,
    }
}

pub const fn toggle_to_action(switch: SwitchName, state: SwitchState) -> SettingsAction {
    let on = state.is_on();
    match switch {
        SwitchName::DarkMode => SettingsAction::SetDarkMode(on),
        SwitchName::HighContrast => SettingsAction::SetHighContrast(on),
        SwitchName::Tts => SettingsAction::SetTtsEnabled(on),
        SwitchName::AutoSpeak => SettingsAction::SetAutoSpeak(on),
        SwitchName::Haptics => SettingsAction::SetHapticEnabled(on),
        SwitchName::SoundEffects => SettingsAction::SetSoundEffects(on),
    }
}

pub async fn run_settings_action(
    action: SettingsAction,
    db_path: &Path,
    scheme: HostScheme,
) -> Result<(), CliError> {
    let mut store = open_store(db_path, scheme).await?;
    let reaction = handle_settings_action(store.settings(), action);

    let feedback = TerminalFeedback;
    let runner = EffectRunner::new(&feedback, &feedback, &feedback);
    if let Some(write) = reaction.dispatch(&mut store, &runner)? {
        write.wait().await;
    }

    Ok(())
}
