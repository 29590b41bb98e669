//! Layout builders shared by every screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, SESSION_HEADER_HEIGHT, TITLE_HEIGHT};

/// Split the whole frame into the session header and the screen body.
pub fn app_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SESSION_HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// One row per form field, each `field_height` tall, stacked from the top.
pub fn form_rows(area: Rect, fields: usize, field_height: u16) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(field_height); fields];
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    rows.iter().take(fields).copied().collect()
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// The "Incomplete Request" dialog
    pub const MEDIUM: (u16, u16) = (60, 45);

    /// The "Add New Transaction" dialog
    pub const FORM: (u16, u16) = (60, 70);

    /// Help popup
    pub const LARGE: (u16, u16) = (80, 80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_rows_stack_from_top() {
        let rows = form_rows(Rect::new(0, 0, 40, 20), 4, 3);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].y, 0);
        assert_eq!(rows[3].y, 9);
        assert!(rows.iter().all(|row| row.height == 3));
    }

    #[test]
    fn test_centered_popup_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup(60, 40, parent);

        assert_eq!(popup.width, 60);
        assert!(popup.x >= 20 && popup.right() <= 80);
    }
}
