//! Home screen interactions

use super::{CaptureCommand, Reaction, Screen};
use crate::capture::CaptureSession;
use crate::feedback::{Effects, Haptic, ImpactStyle, NotificationKind};
use crate::models::Settings;

/// Read out when the home screen appears and auto-speak is on
pub const WELCOME_ANNOUNCEMENT: &str =
    "مرحباً بك في تطبيق أيين. هذه الصفحة الرئيسية. جميع الخيارات تدعم قارئ الشاشة.";
const LISTENING_PROMPT: &str = "يرجى التحدث الآن. الميكروفون يعمل.";
const CLEARED_ANNOUNCEMENT: &str = "تم مسح النص";

/// Alert raised when the microphone cannot be started
pub const MICROPHONE_ERROR_TITLE: &str = "خطأ";
pub const MICROPHONE_ERROR_MESSAGE: &str =
    "لا يمكن تشغيل الميكروفون. تأكد من السماح للتطبيق بالوصول للميكروفون.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeAction {
    /// The screen was shown
    Appear,
    PressMic,
    /// Read the transcript aloud
    PlayText,
    ClearText,
    OpenSettings,
}

/// Resolve a home-screen action. Never mutates settings.
pub fn handle_home_action(
    settings: &Settings,
    session: &CaptureSession,
    action: HomeAction,
) -> Reaction {
    let mut effects = Effects::new();
    let mut reaction = Reaction::default();

    match action {
        HomeAction::Appear => {
            if settings.auto_speak {
                effects.speak(settings, WELCOME_ANNOUNCEMENT);
            }
        }
        HomeAction::PressMic => {
            effects
                .haptic(settings, Haptic::Impact(ImpactStyle::Heavy))
                .haptic(settings, Haptic::Selection)
                .haptic(settings, Haptic::Notification(NotificationKind::Success))
                .speak(settings, LISTENING_PROMPT);
            reaction.capture = Some(CaptureCommand::Start);
        }
        HomeAction::PlayText => {
            let transcript = session.transcript();
            if !transcript.is_empty() {
                effects.speak(settings, transcript);
            }
        }
        HomeAction::ClearText => {
            effects.haptic(settings, Haptic::Selection);
            effects.speak(settings, CLEARED_ANNOUNCEMENT);
            reaction.capture = Some(CaptureCommand::Clear);
        }
        HomeAction::OpenSettings => {
            effects.haptic(settings, Haptic::Selection);
            reaction.navigate = Some(Screen::Settings);
        }
    }

    reaction.effects = effects.into_vec();
    reaction
}
