//! Settings screen interactions

use super::{Reaction, Screen};
use crate::feedback::{Effects, Haptic, Utterance};
use crate::models::{Language, SettingChange, Settings, ThemeMode};
use crate::store::Mutation;

/// Spoken after every committed change
pub const SAVED_ANNOUNCEMENT: &str = "تم حفظ الإعدادات";

/// Speech rates offered by the rate row, slowest first
pub const RATE_LADDER: [f64; 5] = [0.5, 0.7, 0.9, 1.1, 1.3];

/// Speech pitches offered by the pitch row, lowest first
pub const PITCH_LADDER: [f64; 5] = [0.5, 0.8, 1.0, 1.2, 1.5];

/// Spoken in Arabic when the screen-reader row is pressed with speech on
pub const SCREEN_READER_ANNOUNCEMENT: &str = "تم تفعيل قارئ الشاشة";

const VOICE_SAMPLE: &str = "مرحباً، هذا اختبار لجودة الصوت في تطبيق عين. كيف يبدو الصوت لك؟";
const ENABLE_READER_TITLE: &str = "تنبيه";
const ENABLE_READER_MESSAGE: &str = "يرجى تفعيل قارئ الشاشة أولاً";

/// Rows whose body only announces itself; their value changes through the
/// row's switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsRow {
    HighContrast,
    ScreenReader,
    AutoSpeak,
    Haptics,
    SoundEffects,
}

impl SettingsRow {
    /// Title read aloud when the row is pressed
    pub const fn title(self) -> &'static str {
        match self {
            Self::HighContrast => "التباين العالي",
            Self::ScreenReader => "تفعيل قارئ الشاشة",
            Self::AutoSpeak => "التحدث التلقائي",
            Self::Haptics => "الاهتزاز",
            Self::SoundEffects => "الأصوات",
        }
    }
}

/// Something the user did on the settings screen.
///
/// `Set*` variants are switch toggles; the others are row or button presses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    CycleTheme,
    SetDarkMode(bool),
    SetHighContrast(bool),
    CycleFontSize,
    SetTtsEnabled(bool),
    SetAutoSpeak(bool),
    CycleTtsRate,
    CycleTtsPitch,
    ToggleLanguage,
    SetHapticEnabled(bool),
    SetSoundEffects(bool),
    /// Press on the body of a switch row
    PressRow(SettingsRow),
    TestVoice,
    /// Confirmed reset of every setting
    Reset,
    Back,
}

/// Next rung after `current`, wrapping around. Values off the ladder move to
/// the first rung; an empty ladder keeps `current`.
pub fn next_on_ladder(current: f64, ladder: &[f64]) -> f64 {
    if ladder.is_empty() {
        return current;
    }
    let next = ladder
        .iter()
        .position(|rung| (rung - current).abs() < 1e-9)
        .map_or(0, |index| (index + 1) % ladder.len());
    ladder[next]
}

#[allow(clippy::cast_possible_truncation)]
fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Feedback for a committed change
fn confirm_change(effects: &mut Effects, settings: &Settings) {
    effects
        .haptic(settings, Haptic::Selection)
        .speak(settings, SAVED_ANNOUNCEMENT);
}

/// Feedback for pressing a row: a tick and its title read aloud
fn press_row(effects: &mut Effects, settings: &Settings, title: &str) {
    effects
        .haptic(settings, Haptic::Selection)
        .speak(settings, title);
}

/// Resolve a settings-screen action against the current settings
pub fn handle_settings_action(settings: &Settings, action: SettingsAction) -> Reaction {
    let mut effects = Effects::new();

    let change = match action {
        SettingsAction::CycleTheme => {
            press_row(&mut effects, settings, "الوضع المظلم");
            let next = match settings.theme {
                ThemeMode::Dark => ThemeMode::Light,
                ThemeMode::Light => ThemeMode::Auto,
                ThemeMode::Auto => ThemeMode::Dark,
            };
            Some(SettingChange::Theme(next))
        }
        SettingsAction::SetDarkMode(on) => Some(SettingChange::Theme(if on {
            ThemeMode::Dark
        } else {
            ThemeMode::Auto
        })),
        SettingsAction::SetHighContrast(on) => Some(SettingChange::HighContrast(on)),
        SettingsAction::CycleFontSize => {
            press_row(&mut effects, settings, "حجم الخط");
            Some(SettingChange::FontSize(settings.font_size.next()))
        }
        SettingsAction::SetTtsEnabled(on) => Some(SettingChange::TtsEnabled(on)),
        SettingsAction::SetAutoSpeak(on) => Some(SettingChange::AutoSpeak(on)),
        SettingsAction::CycleTtsRate => {
            press_row(&mut effects, settings, "سرعة الكلام");
            Some(SettingChange::TtsRate(next_on_ladder(
                settings.tts_rate,
                &RATE_LADDER,
            )))
        }
        SettingsAction::CycleTtsPitch => {
            press_row(&mut effects, settings, "نبرة الصوت");
            Some(SettingChange::TtsPitch(next_on_ladder(
                settings.tts_pitch,
                &PITCH_LADDER,
            )))
        }
        SettingsAction::ToggleLanguage => {
            press_row(&mut effects, settings, "اللغة");
            Some(SettingChange::Language(settings.language.toggled()))
        }
        SettingsAction::SetHapticEnabled(on) => Some(SettingChange::HapticEnabled(on)),
        SettingsAction::SetSoundEffects(on) => Some(SettingChange::SoundEffects(on)),
        SettingsAction::PressRow(row) => {
            press_row(&mut effects, settings, row.title());
            if row == SettingsRow::ScreenReader {
                effects.utterance(
                    settings,
                    Utterance::new(settings, SCREEN_READER_ANNOUNCEMENT).in_language(Language::Ar),
                );
            }
            None
        }
        SettingsAction::TestVoice => {
            if settings.tts_enabled {
                effects.speak(settings, VOICE_SAMPLE);
            } else {
                effects.alert(ENABLE_READER_TITLE, ENABLE_READER_MESSAGE);
            }
            None
        }
        SettingsAction::Reset => {
            confirm_change(&mut effects, settings);
            return Reaction {
                mutation: Some(Mutation::Reset),
                effects: effects.into_vec(),
                ..Reaction::default()
            };
        }
        SettingsAction::Back => {
            effects.haptic(settings, Haptic::Selection);
            return Reaction {
                effects: effects.into_vec(),
                navigate: Some(Screen::Home),
                ..Reaction::default()
            };
        }
    };

    if change.is_some() {
        confirm_change(&mut effects, settings);
    }

    // Rate and pitch rows read out the value they were showing when pressed.
    match action {
        SettingsAction::CycleTtsRate => {
            let text = format!("سرعة الكلام {} بالمئة", percent(settings.tts_rate));
            effects.utterance(
                settings,
                Utterance::new(settings, text).in_language(Language::Ar),
            );
        }
        SettingsAction::CycleTtsPitch => {
            let text = format!("نبرة الصوت {} بالمئة", percent(settings.tts_pitch));
            effects.utterance(
                settings,
                Utterance::new(settings, text).in_language(Language::Ar),
            );
        }
        _ => {}
    }

    Reaction {
        mutation: change.map(Mutation::Change),
        effects: effects.into_vec(),
        ..Reaction::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::feedback::Effect;
    use crate::models::FontSize;

    fn spoken(reaction: &Reaction) -> Vec<&str> {
        reaction
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Speak(utterance) => Some(utterance.text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn change_of(reaction: &Reaction) -> Option<&SettingChange> {
        match &reaction.mutation {
            Some(Mutation::Change(change)) => Some(change),
            _ => None,
        }
    }

    #[test]
    fn theme_row_cycles_dark_light_auto() {
        let mut settings = Settings::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            let reaction = handle_settings_action(&settings, SettingsAction::CycleTheme);
            let change = change_of(&reaction).unwrap().clone();
            settings.apply(change);
            seen.push(settings.theme);
        }
        assert_eq!(seen, vec![ThemeMode::Dark, ThemeMode::Light, ThemeMode::Auto]);
    }

    #[test]
    fn dark_mode_switch_falls_back_to_auto() {
        let settings = Settings::default();
        assert_eq!(
            change_of(&handle_settings_action(&settings, SettingsAction::SetDarkMode(true))),
            Some(&SettingChange::Theme(ThemeMode::Dark))
        );
        assert_eq!(
            change_of(&handle_settings_action(&settings, SettingsAction::SetDarkMode(false))),
            Some(&SettingChange::Theme(ThemeMode::Auto))
        );
    }

    #[test]
    fn font_size_row_wraps_around() {
        let settings = Settings::default().with(SettingChange::FontSize(FontSize::ExtraLarge));
        let reaction = handle_settings_action(&settings, SettingsAction::CycleFontSize);
        assert_eq!(
            change_of(&reaction),
            Some(&SettingChange::FontSize(FontSize::Small))
        );
    }

    #[test]
    fn ladders_advance_and_recover_from_custom_values() {
        assert!((next_on_ladder(0.9, &RATE_LADDER) - 1.1).abs() < f64::EPSILON);
        assert!((next_on_ladder(1.3, &RATE_LADDER) - 0.5).abs() < f64::EPSILON);
        assert!((next_on_ladder(0.95, &RATE_LADDER) - 0.5).abs() < f64::EPSILON);
        assert!((next_on_ladder(1.0, &PITCH_LADDER) - 1.2).abs() < f64::EPSILON);
        assert!((next_on_ladder(0.7, &[]) - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn switch_row_press_announces_title_without_change() {
        let settings = Settings::default();
        let reaction =
            handle_settings_action(&settings, SettingsAction::PressRow(SettingsRow::Haptics));

        assert_eq!(reaction.mutation, None);
        assert_eq!(
            reaction.effects,
            vec![
                Effect::Haptic(Haptic::Selection),
                Effect::Speak(Utterance::new(&settings, "الاهتزاز")),
            ]
        );
    }

    #[test]
    fn screen_reader_row_confirms_in_arabic() {
        let settings = Settings::default().with(SettingChange::Language(Language::En));
        let reaction =
            handle_settings_action(&settings, SettingsAction::PressRow(SettingsRow::ScreenReader));

        let last = reaction.effects.last().cloned();
        assert_eq!(
            last,
            Some(Effect::Speak(
                Utterance::new(&settings, SCREEN_READER_ANNOUNCEMENT).in_language(Language::Ar)
            ))
        );
        assert_eq!(
            spoken(&reaction),
            vec![SettingsRow::ScreenReader.title(), SCREEN_READER_ANNOUNCEMENT]
        );

        let silent = settings.with(SettingChange::TtsEnabled(false));
        let reaction =
            handle_settings_action(&silent, SettingsAction::PressRow(SettingsRow::ScreenReader));
        assert!(spoken(&reaction).is_empty());
    }

    #[test]
    fn rate_row_announces_previous_value() {
        let settings = Settings::default();
        let reaction = handle_settings_action(&settings, SettingsAction::CycleTtsRate);

        assert_eq!(
            change_of(&reaction),
            Some(&SettingChange::TtsRate(1.1))
        );
        assert_eq!(
            spoken(&reaction),
            vec!["سرعة الكلام", SAVED_ANNOUNCEMENT, "سرعة الكلام 90 بالمئة"]
        );
    }

    #[test]
    fn switch_toggle_confirms_with_haptic_and_speech() {
        let settings = Settings::default();
        let reaction = handle_settings_action(&settings, SettingsAction::SetHighContrast(true));

        assert_eq!(
            reaction.mutation,
            Some(Mutation::Change(SettingChange::HighContrast(true)))
        );
        assert_eq!(reaction.effects[0], Effect::Haptic(Haptic::Selection));
        assert_eq!(spoken(&reaction), vec![SAVED_ANNOUNCEMENT]);
    }

    #[test]
    fn feedback_uses_settings_before_the_change() {
        let settings = Settings::default();
        let reaction = handle_settings_action(&settings, SettingsAction::SetTtsEnabled(false));
        assert_eq!(spoken(&reaction), vec![SAVED_ANNOUNCEMENT]);

        let silent = settings.with(SettingChange::TtsEnabled(false));
        let reaction = handle_settings_action(&silent, SettingsAction::SetTtsEnabled(true));
        assert!(spoken(&reaction).is_empty());
    }

    #[test]
    fn disabled_haptics_suppress_vibration() {
        let settings = Settings::default().with(SettingChange::HapticEnabled(false));
        let reaction = handle_settings_action(&settings, SettingsAction::ToggleLanguage);

        assert!(reaction
            .effects
            .iter()
            .all(|effect| !matches!(effect, Effect::Haptic(_))));
        assert_eq!(
            change_of(&reaction),
            Some(&SettingChange::Language(Language::En))
        );
    }

    #[test]
    fn test_voice_alerts_when_speech_is_off() {
        let settings = Settings::default().with(SettingChange::TtsEnabled(false));
        let reaction = handle_settings_action(&settings, SettingsAction::TestVoice);

        assert_eq!(reaction.mutation, None);
        assert_eq!(
            reaction.effects,
            vec![Effect::Alert {
                title: ENABLE_READER_TITLE.to_string(),
                message: ENABLE_READER_MESSAGE.to_string(),
            }]
        );
    }

    #[test]
    fn reset_is_a_single_mutation() {
        let settings = Settings::default().with(SettingChange::AutoSpeak(false));
        let reaction = handle_settings_action(&settings, SettingsAction::Reset);
        assert_eq!(reaction.mutation, Some(Mutation::Reset));
    }

    #[test]
    fn back_navigates_home_without_mutation() {
        let reaction = handle_settings_action(&Settings::default(), SettingsAction::Back);
        assert_eq!(reaction.mutation, None);
        assert_eq!(reaction.navigate, Some(Screen::Home));
    }
}
