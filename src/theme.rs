use iced::{Background, Border, Color};

/// How the theme is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
    /// Follow the desktop color scheme (re-checked periodically).
    Auto,
}

/// All colors and sizes used by the timer screens, derived from the active theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub is_dark: bool,
    // Screen
    pub background: Color,
    pub title: Color,
    pub label: Color,
    pub separator: Color,
    // Flip cards
    pub card_bg: Color,
    pub card_fg: Color,
    pub card_seam: Color,
    // Picker
    pub picker_band: Color,
    pub picker_text: Color,
    // Controls
    pub button_bg: Color,
    pub button_fg: Color,
    pub chip_bg: Color,
    pub chip_fg: Color,
    // Font sizes (logical pixels)
    pub title_text: f32,
    pub label_text: f32,
    pub picker_text_size: f32,
}

impl ThemeColors {
    /// Black screen, white cards with black digits.
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background: Color::from_rgb(0.0, 0.0, 0.0),
            title: Color::from_rgb(0.55, 0.55, 0.58),
            label: Color::from_rgba(1.0, 1.0, 1.0, 0.8),
            separator: Color::WHITE,
            card_bg: Color::WHITE,
            card_fg: Color::BLACK,
            card_seam: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            picker_band: Color::from_rgba(0.55, 0.55, 0.58, 0.15),
            picker_text: Color::WHITE,
            button_bg: Color::WHITE,
            button_fg: Color::BLACK,
            chip_bg: Color::WHITE,
            chip_fg: Color::from_rgb(0.55, 0.55, 0.58),
            title_text: 34.0,
            label_text: 15.0,
            picker_text_size: 20.0,
        }
    }

    /// Light screen, dark cards with white digits.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            background: Color::from_rgb(0.95, 0.95, 0.96),
            title: Color::from_rgb(0.45, 0.45, 0.48),
            label: Color::from_rgba(0.0, 0.0, 0.0, 0.7),
            separator: Color::from_rgb(0.12, 0.12, 0.14),
            card_bg: Color::from_rgb(0.12, 0.12, 0.14),
            card_fg: Color::WHITE,
            card_seam: Color::from_rgba(1.0, 1.0, 1.0, 0.25),
            picker_band: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            picker_text: Color::from_rgb(0.08, 0.08, 0.08),
            button_bg: Color::from_rgb(0.12, 0.12, 0.14),
            button_fg: Color::WHITE,
            chip_bg: Color::from_rgb(0.12, 0.12, 0.14),
            chip_fg: Color::from_rgb(0.8, 0.8, 0.82),
            title_text: 34.0,
            label_text: 15.0,
            picker_text_size: 20.0,
        }
    }

    /// Control colors scaled by `opacity`; cards and the screen
    /// background are left alone.
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let fade = |c: Color| Color { a: c.a * opacity, ..c };
        Self {
            title: fade(self.title),
            label: fade(self.label),
            separator: fade(self.separator),
            picker_band: fade(self.picker_band),
            picker_text: fade(self.picker_text),
            button_bg: fade(self.button_bg),
            button_fg: fade(self.button_fg),
            chip_bg: fade(self.chip_bg),
            chip_fg: fade(self.chip_fg),
            ..self.clone()
        }
    }

    pub fn background_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.background;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn picker_band_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.picker_band;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn chip_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.chip_bg;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 25.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn button_style(
        &self,
    ) -> impl Fn(&iced::Theme, iced::widget::button::Status) -> iced::widget::button::Style + use<> {
        let (bg, fg) = (self.button_bg, self.button_fg);
        move |_theme: &iced::Theme, _status| iced::widget::button::Style {
            background: Some(Background::Color(bg)),
            text_color: fg,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Ask the desktop whether it prefers a dark scheme, falling back to
/// dark when nothing answers. Spawns CLI tools synchronously; only called
/// at startup and from the periodic refresh message.
pub fn detect_system_dark() -> bool {
    command_stdout(
        "dbus-send",
        &[
            "--session",
            "--print-reply=literal",
            "--dest=org.freedesktop.portal.Desktop",
            "/org/freedesktop/portal/desktop",
            "org.freedesktop.portal.Settings.ReadOne",
            "string:org.freedesktop.appearance",
            "string:color-scheme",
        ],
    )
    .and_then(|out| portal_prefers_dark(&out))
    .or_else(|| {
        command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"])
            .and_then(|out| gsettings_prefers_dark(&out))
    })
    .or_else(|| {
        std::env::var("GTK_THEME")
            .ok()
            .map(|theme| theme.to_lowercase().contains("dark"))
    })
    .unwrap_or(true)
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Portal `color-scheme`: 0 no preference, 1 dark, 2 light.
fn portal_prefers_dark(reply: &str) -> Option<bool> {
    if reply.contains("uint32 1") {
        Some(true)
    } else if reply.contains("uint32 2") {
        Some(false)
    } else {
        None
    }
}

/// GNOME 42+ `color-scheme` key.
fn gsettings_prefers_dark(value: &str) -> Option<bool> {
    if value.contains("prefer-dark") {
        Some(true)
    } else if value.contains("prefer-light") || value.contains("default") {
        Some(false)
    } else {
        None
    }
}

/// Resolve the palette for a given mode.
pub fn resolve(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => {
            if detect_system_dark() {
                ThemeColors::dark()
            } else {
                ThemeColors::light()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scales_control_alpha_only() {
        let colors = ThemeColors::dark();
        let dim = colors.with_opacity(0.5);
        assert_eq!(dim.button_bg.a, colors.button_bg.a * 0.5);
        assert_eq!(dim.chip_fg.a, colors.chip_fg.a * 0.5);
        assert_eq!(dim.picker_text.r, colors.picker_text.r);
        // cards and screen background stay untouched
        assert_eq!(dim.card_bg, colors.card_bg);
        assert_eq!(dim.background, colors.background);
    }

    #[test]
    fn fixed_modes_resolve_without_probing() {
        assert!(resolve(ThemeMode::Dark).is_dark);
        assert!(!resolve(ThemeMode::Light).is_dark);
    }

    #[test]
    fn portal_reply_values() {
        assert_eq!(portal_prefers_dark("   variant       uint32 1\n"), Some(true));
        assert_eq!(portal_prefers_dark("   variant       uint32 2\n"), Some(false));
        assert_eq!(portal_prefers_dark("   variant       uint32 0\n"), None);
    }

    #[test]
    fn gsettings_values() {
        assert_eq!(gsettings_prefers_dark("'prefer-dark'\n"), Some(true));
        assert_eq!(gsettings_prefers_dark("'default'\n"), Some(false));
        assert_eq!(gsettings_prefers_dark(""), None);
    }
}
