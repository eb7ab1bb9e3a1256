use crossterm::style::Color;

use crate::settings::ThemePreference;

use super::EngineRow;

/// Colors used when printing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: Color,
    pub score: Color,
    pub safe: Color,
    pub unsafe_: Color,
    pub flagged: Color,
    pub clean: Color,
    pub error: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Palette {
        match theme {
            ThemePreference::Dark => Palette {
                title: Color::Cyan,
                score: Color::Cyan,
                safe: Color::Green,
                unsafe_: Color::Red,
                flagged: Color::Red,
                clean: Color::Green,
                error: Color::Red,
                muted: Color::Grey,
            },
            ThemePreference::Light => Palette {
                title: Color::DarkCyan,
                score: Color::DarkBlue,
                safe: Color::DarkGreen,
                unsafe_: Color::DarkRed,
                flagged: Color::DarkRed,
                clean: Color::DarkGreen,
                error: Color::DarkRed,
                muted: Color::DarkGrey,
            },
        }
    }

    pub fn verdict(&self, row: &EngineRow) -> Color {
        if row.flagged {
            self.flagged
        } else {
            self.clean
        }
    }

    pub fn status(&self, safe: bool) -> Color {
        if safe {
            self.safe
        } else {
            self.unsafe_
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_styles_differ_in_both_themes() {
        let flagged = EngineRow {
            engine: "EngineA".into(),
            verdict: "malicious".into(),
            flagged: true,
        };
        let clean = EngineRow {
            engine: "EngineB".into(),
            verdict: "clean".into(),
            flagged: false,
        };
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            let palette = Palette::for_theme(theme);
            assert_ne!(palette.verdict(&flagged), palette.verdict(&clean));
            assert_ne!(palette.status(true), palette.status(false));
        }
    }

    #[test]
    fn themes_use_different_palettes() {
        assert_ne!(
            Palette::for_theme(ThemePreference::Dark),
            Palette::for_theme(ThemePreference::Light)
        );
    }
}
