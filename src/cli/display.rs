// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the listcraft CLI.
//!
//! OneDark colors for dark terminals, One Light for light ones. Detection
//! tries `LISTCRAFT_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and drops styling when the stream is not a TTY, so
//! piped output stays plain.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// COLORFGBG is "fg;bg"; background 7 or above (except 8) is a light terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("LISTCRAFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
    {
        return theme;
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on `stream`
pub fn use_colors(stream: atty::Stream) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(stream)
}

/// Apply theme color with optional modifiers when stdout is a TTY
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(atty::Stream::Stdout, color_fn, modifiers, text)
}

fn paint(stream: atty::Stream, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors(stream) {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors(atty::Stream::Stdout) {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors(atty::Stream::Stdout) {
        RESET
    } else {
        ""
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let line = format!(" {}", content);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&line));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        line,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Operation token with a status mark: `✓ add:3` or `✗ add-at:9:1`
pub fn op_status(token: &str, ok: bool) -> String {
    if ok {
        format!("{} {}", themed(GREEN, &[], "✓"), token)
    } else {
        format!("{} {}", themed(RED, &[BOLD], "✗"), themed(YELLOW, &[], token))
    }
}

/// Print an error to stderr
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        paint(atty::Stream::Stderr, RED, &[BOLD], "error:"),
        message
    );
}
