//! Semantic style builders for the detail screen.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Heart style: red when favorite, muted otherwise, dimmed while saving
pub fn favorite(is_favorite: bool, pending: bool) -> Style {
    let style = if is_favorite {
        Style::default().fg(palette::STATUS_RED)
    } else {
        text_secondary()
    };
    if pending {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

/// Metacritic badge color by score band
pub fn metacritic(score: u32) -> Style {
    let color = match score {
        75.. => palette::STATUS_GREEN,
        50..=74 => palette::STATUS_YELLOW,
        _ => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded bordered panel
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::STATUS_RED))
        .style(Style::default().bg(palette::POPUP_BG))
}
