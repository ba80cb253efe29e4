//! Navigation bar with the back affordance and the favorite control

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct NavBar<'a> {
    title: &'a str,
    is_favorite: bool,
    pending: bool,
    /// The favorite control is hidden until there is a game to favorite
    show_favorite: bool,
    icons: IconSet,
}

impl<'a> NavBar<'a> {
    pub fn new(title: &'a str, icons: IconSet) -> Self {
        Self {
            title,
            is_favorite: false,
            pending: false,
            show_favorite: true,
            icons,
        }
    }

    pub fn favorite(mut self, is_favorite: bool, pending: bool) -> Self {
        self.is_favorite = is_favorite;
        self.pending = pending;
        self
    }

    pub fn show_favorite(mut self, show: bool) -> Self {
        self.show_favorite = show;
        self
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let back = Line::from(vec![
            Span::styled(format!("{} ", self.icons.back()), styles::accent()),
            Span::styled("Back", styles::text_secondary()),
        ]);
        Paragraph::new(back).render(inner, buf);

        let title = Line::from(Span::styled(self.title, styles::title()));
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(inner, buf);

        if self.show_favorite {
            let heart = Line::from(vec![
                Span::styled(
                    self.icons.heart(self.is_favorite),
                    styles::favorite(self.is_favorite, self.pending),
                ),
                Span::raw(" "),
            ]);
            Paragraph::new(heart)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
