//! Syntax highlighting for fenced code blocks.
//!
//! Uses syntect with the bundled Sublime Text syntax definitions. Colors
//! are adjusted for light terminal backgrounds so highlighted code stays
//! readable on both palettes.

use std::sync::{Mutex, OnceLock};

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use crate::document::{InlineColor, InlineSpan, InlineStyle};

/// Highlight `code` into one span list per line.
///
/// Unknown or missing languages fall back to plain code-styled spans.
pub fn highlight_code(language: Option<&str>, code: &str) -> Vec<Vec<InlineSpan>> {
    let mut lines = Vec::new();
    let syntax_set = syntax_set();
    let mode = background_mode();
    let syntax = language
        .and_then(|lang| syntax_set.find_syntax_by_token(lang))
        .or_else(|| language.and_then(|lang| syntax_set.find_syntax_by_name(lang)));

    let Some(syntax) = syntax else {
        for line in code.lines() {
            let style = InlineStyle {
                code: true,
                ..InlineStyle::default()
            };
            lines.push(vec![InlineSpan::new(line.to_string(), style)]);
        }
        return lines;
    };

    let mut highlighter = HighlightLines::new(syntax, theme());
    for line in code.lines() {
        let ranges = highlighter
            .highlight_line(line, syntax_set)
            .unwrap_or_default();
        let mut spans = Vec::new();
        for (style, text) in ranges {
            let fg = InlineColor {
                r: style.foreground.r,
                g: style.foreground.g,
                b: style.foreground.b,
            };
            let inline_style = InlineStyle {
                code: true,
                fg: Some(adjust_fg_for_background(fg, mode)),
                ..InlineStyle::default()
            };
            spans.push(InlineSpan::new(text.to_string(), inline_style));
        }
        lines.push(spans);
    }

    lines
}

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(|| {
        let _scope = crate::perf::scope("highlight.syntax_set.load_defaults");
        SyntaxSet::load_defaults_newlines()
    })
}

fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(|| {
        let _scope = crate::perf::scope("highlight.theme.load_defaults");
        let theme_set = ThemeSet::load_defaults();
        let preferred = match background_mode() {
            BackgroundMode::Dark => {
                ["Monokai Extended", "Dracula", "base16-ocean.dark"].as_slice()
            }
            BackgroundMode::Light => {
                ["InspiredGitHub", "Solarized (light)", "base16-ocean.light"].as_slice()
            }
        };

        for name in preferred {
            if let Some(theme) = theme_set.themes.get(*name) {
                return theme.clone();
            }
        }

        theme_set
            .themes
            .values()
            .next()
            .cloned()
            .unwrap_or_default()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackgroundMode {
    Dark,
    Light,
}

/// Terminal background classification forced by the user (`--theme`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightBackground {
    Light,
    Dark,
}

static BACKGROUND_OVERRIDE: OnceLock<Mutex<Option<HighlightBackground>>> = OnceLock::new();

pub fn set_background_mode(mode: Option<HighlightBackground>) {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    let mut guard = lock.lock().expect("highlight background lock");
    *guard = mode;
}

/// Whether rendering should assume a light terminal background.
pub fn is_light_background() -> bool {
    background_mode() == BackgroundMode::Light
}

fn background_mode() -> BackgroundMode {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(guard) = lock.lock() {
        if let Some(mode) = *guard {
            return match mode {
                HighlightBackground::Light => BackgroundMode::Light,
                HighlightBackground::Dark => BackgroundMode::Dark,
            };
        }
    }
    background_mode_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn background_mode_from_colorfgbg(colorfgbg: Option<&str>) -> BackgroundMode {
    let Some(value) = colorfgbg else {
        return BackgroundMode::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    let Ok(bg) = bg_str.parse::<u8>() else {
        return BackgroundMode::Dark;
    };

    if bg >= 7 {
        BackgroundMode::Light
    } else {
        BackgroundMode::Dark
    }
}

fn adjust_fg_for_background(color: InlineColor, mode: BackgroundMode) -> InlineColor {
    match mode {
        BackgroundMode::Dark => color,
        BackgroundMode::Light => {
            let luma = (0.2126 * f32::from(color.r))
                + (0.7152 * f32::from(color.g))
                + (0.0722 * f32::from(color.b));
            if luma < 155.0 {
                return color;
            }

            // Colors tuned for dark themes wash out on white; pull them down.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            InlineColor {
                r: (f32::from(color.r) * 0.42).round() as u8,
                g: (f32::from(color.g) * 0.42).round() as u8,
                b: (f32::from(color.b) * 0.42).round() as u8,
            }
        }
    }
}
