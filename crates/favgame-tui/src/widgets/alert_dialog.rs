//! Blocking alert for failed use-case calls

use favgame_app::state::AlertState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::{icons::IconSet, palette, styles};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 9;

pub struct AlertDialog<'a> {
    alert: &'a AlertState,
    icons: IconSet,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState, icons: IconSet) -> Self {
        Self { alert, icons }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog);

        let title = format!(" {} {} ", self.icons.alert(), self.alert.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [message_area, button_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.alert.message.as_str())
            .style(Style::default().fg(palette::TEXT_BRIGHT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        let button = Line::from(vec![
            Span::styled(
                format!("[ {} ]", self.alert.action_label),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", styles::keybinding()),
        ]);
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(button_area, buf);
    }
}
