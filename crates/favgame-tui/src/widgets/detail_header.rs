//! Header region of the detail item
//!
//! Title, rating, release date and the credit lists. Rendered at the fixed
//! height configured in `[ui] header_height`; rows that do not fit are cut.

use favgame_core::GameDetail;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct DetailHeader<'a> {
    detail: &'a GameDetail,
    icons: IconSet,
}

impl<'a> DetailHeader<'a> {
    pub fn new(detail: &'a GameDetail, icons: IconSet) -> Self {
        Self { detail, icons }
    }

    fn rating_line(&self) -> Line<'static> {
        let top = self.detail.rating_top.max(1);
        let filled = (self.detail.rating.round().max(0.0) as u8).min(top);

        let mut spans = Vec::with_capacity(top as usize + 4);
        for i in 0..top {
            spans.push(Span::styled(
                self.icons.star(i < filled),
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }
        spans.push(Span::styled(
            format!("  {}", self.detail.rating_display()),
            styles::text_primary(),
        ));

        if let Some(score) = self.detail.metacritic {
            spans.push(Span::styled("   Metacritic ", styles::text_muted()));
            spans.push(Span::styled(score.to_string(), styles::metacritic(score)));
        }
        Line::from(spans)
    }

    fn release_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.calendar()), styles::accent()),
            Span::styled(self.detail.released_display(), styles::text_primary()),
        ];
        if self.detail.playtime > 0 {
            spans.push(Span::styled(
                format!("   {} ", self.icons.clock()),
                styles::accent(),
            ));
            spans.push(Span::styled(
                format!("{}h average playtime", self.detail.playtime),
                styles::text_primary(),
            ));
        }
        Line::from(spans)
    }
}

fn labeled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), styles::text_muted()),
        Span::styled(value, styles::text_secondary()),
    ])
}

fn list_line(label: &'static str, values: &[String]) -> Option<Line<'static>> {
    if values.is_empty() {
        None
    } else {
        Some(labeled(label, values.join(", ")))
    }
}

impl Widget for DetailHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(self.detail.name.clone(), styles::title())),
            self.rating_line(),
            self.release_line(),
        ];
        lines.extend(list_line("Genres", &self.detail.genres));
        lines.extend(list_line("Platforms", &self.detail.platforms));
        lines.extend(list_line("Developers", &self.detail.developers));
        lines.extend(list_line("Publishers", &self.detail.publishers));
        if let Some(website) = &self.detail.website {
            lines.push(labeled("Website", website.clone()));
        }
        if let Some(image) = &self.detail.background_image {
            lines.push(labeled("Cover", image.clone()));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
