//! Screen layout definitions for the TUI
//!
//! The detail page stacks a navigation bar, the fixed-height header region,
//! the description region and a one-line key hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows of the navigation bar (top border + title row + bottom border)
pub const NAV_HEIGHT: u16 = 3;

/// Rows of the key hint footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the detail page
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub nav: Rect,
    /// Header region of the single content item
    pub header: Rect,
    /// Description region of the single content item
    pub description: Rect,
    pub footer: Rect,
}

/// Create the detail page layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `header_height` - Configured height of the header region
pub fn create(area: Rect, header_height: u16) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(header_height),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        header: chunks[1],
        description: chunks[2],
        footer: chunks[3],
    }
}
