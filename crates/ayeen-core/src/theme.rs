//! Theme resolution and color palettes

use std::fmt;

pub use crate::models::ThemeMode;

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Check if the theme is dark
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host device color scheme query
///
/// Sampled every time an effective theme is derived; implementations must not
/// assume the answer is cached by the caller.
pub trait ColorSchemeSource: Send + Sync {
    /// Current host scheme, or `None` when the host reports no preference
    fn color_scheme(&self) -> Option<ResolvedTheme>;
}

/// A host that always reports the same scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<ResolvedTheme>);

impl ColorSchemeSource for FixedColorScheme {
    fn color_scheme(&self) -> Option<ResolvedTheme> {
        self.0
    }
}

/// Probe the desktop platform's appearance setting
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn color_scheme(&self) -> Option<ResolvedTheme> {
        detect_system_color_scheme()
    }
}

/// Resolve theme mode to actual light/dark theme
///
/// `Auto` follows the host scheme, falling back to light when the host has
/// no preference.
#[must_use]
pub fn resolve_theme(mode: ThemeMode, host: Option<ResolvedTheme>) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::Auto => host.unwrap_or_default(),
    }
}

#[cfg(target_os = "windows")]
fn detect_system_color_scheme() -> Option<ResolvedTheme> {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.contains("0x0") {
                Some(ResolvedTheme::Dark)
            } else if stdout.contains("0x1") {
                Some(ResolvedTheme::Light)
            } else {
                None
            }
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            None
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_color_scheme() -> Option<ResolvedTheme> {
    use std::process::Command;
    // The key is absent in light mode, so a failed read means light.
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.trim().eq_ignore_ascii_case("dark") {
                Some(ResolvedTheme::Dark)
            } else {
                Some(ResolvedTheme::Light)
            }
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            None
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_color_scheme() -> Option<ResolvedTheme> {
    let theme = std::env::var("GTK_THEME").ok()?;
    let scheme = if theme.to_lowercase().contains("dark") {
        ResolvedTheme::Dark
    } else {
        ResolvedTheme::Light
    };
    tracing::debug!("System theme detected from GTK_THEME: {scheme}");
    Some(scheme)
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_color_scheme() -> Option<ResolvedTheme> {
    tracing::debug!("Unsupported platform for system theme detection");
    None
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_elevated: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    background: "#F8FAFC",
    surface: "#FFFFFF",
    surface_elevated: "#F1F5F9",
    text: "#1E293B",
    text_secondary: "#64748B",
    primary: "#3B82F6",
    accent: "#EF4444",
    border: "#E2E8F0",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    background: "#0F172A",
    surface: "#1E293B",
    surface_elevated: "#334155",
    text: "#F1F5F9",
    text_secondary: "#94A3B8",
    primary: "#60A5FA",
    accent: "#EF4444",
    border: "#475569",
};

/// High-contrast colors, used regardless of the resolved theme
pub const HIGH_CONTRAST_PALETTE: ColorPalette = ColorPalette {
    background: "#000000",
    surface: "#1A1A1A",
    surface_elevated: "#2A2A2A",
    text: "#FFFFFF",
    text_secondary: "#CCCCCC",
    primary: "#00D4FF",
    accent: "#FF6B6B",
    border: "#333333",
};

/// Palette for a resolved theme and contrast preference
pub fn palette(theme: ResolvedTheme, high_contrast: bool) -> &'static ColorPalette {
    if high_contrast {
        return &HIGH_CONTRAST_PALETTE;
    }
    match theme {
        ResolvedTheme::Light => &LIGHT_PALETTE,
        ResolvedTheme::Dark => &DARK_PALETTE,
    }
}
