//! Description region of the detail item

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Scrollable, word-wrapped description text
pub struct DetailDescription<'a> {
    text: &'a str,
    scroll: u16,
}

impl<'a> DetailDescription<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    /// Area the text is wrapped into for a widget placed at `area`
    pub fn text_area(area: Rect) -> Rect {
        styles::glass_block(false).title(" About ").inner(area)
    }
}

impl Widget for DetailDescription<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" About ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        let paragraph = if self.text.trim().is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No description available.",
                styles::text_muted(),
            )))
        } else {
            body(self.text).scroll((self.scroll, 0))
        };

        paragraph.block(block).render(area, buf);
    }
}

/// Rows `text` occupies when wrapped to `width` columns, counted with the
/// same wrapping the widget renders with
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    let rows = body(text).line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn body(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(styles::text_primary())
        .wrap(Wrap { trim: false })
}
