//! Main render/view function (View in TEA pattern)


use favgame_app::state::AppState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

const TITLE: &str = "Game Detail";

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for the description scroll bounds, which only the renderer knows.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.header_height);
    let icons = IconSet::new(state.settings.ui.icons);

    let nav = widgets::NavBar::new(TITLE, icons)
        .favorite(state.favorite.is_favorite(), state.favorite.is_pending())
        .show_favorite(state.game_id.is_some());
    frame.render_widget(nav, areas.nav);

    // The page has at most one content item: the whole detail.
    // Borrow the field directly so the scroll state stays writable.
    if let Some(detail) = state.game_detail.as_ref() {
        frame.render_widget(widgets::DetailHeader::new(detail, icons), areas.header);

        let text_area = widgets::DetailDescription::text_area(areas.description);
        let total = widgets::wrapped_height(&detail.description, text_area.width);
        state
            .description_scroll
            .set_bounds(total.saturating_sub(text_area.height), text_area.height);

        let description = widgets::DetailDescription::new(&detail.description)
            .scroll(state.description_scroll.offset);
        frame.render_widget(description, areas.description);
    } else {
        render_placeholder(frame, state, icons, areas.header.union(areas.description));
    }

    render_footer(frame, areas.footer);

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert, icons), area);
    }
}

/// Shown until the detail arrives
fn render_placeholder(frame: &mut Frame, state: &AppState, icons: IconSet, area: Rect) {
    let text = if state.game_id.is_none() {
        Line::from(Span::styled("No game selected", styles::text_muted()))
    } else if state.in_flight.detail {
        Line::from(vec![
            Span::styled(format!("{} ", icons.refresh()), styles::accent()),
            Span::styled("Loading game details...", styles::text_secondary()),
        ])
    } else {
        Line::from(Span::styled("Details unavailable", styles::text_muted()))
    };

    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1.min(inner.height));
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), row);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = [
        ("f", "favorite"),
        ("\u{2191}\u{2193}", "scroll"),
        ("r", "refresh"),
        ("q", "back"),
    ];

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
        spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
