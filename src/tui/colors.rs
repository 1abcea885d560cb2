//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Row background for overdue tasks.
pub const LATE_RED: Color = Color::Rgb(237, 75, 57);
/// Row background for on-time tasks, including tasks without a due date.
pub const ON_TIME_WHITE: Color = Color::Rgb(255, 255, 255);
/// Border highlight for the active entry-form field.
pub const ACTIVE_GOLD: Color = Color::Rgb(255, 215, 0);

/// Background color for a task row given its late classification.
pub fn row_background(late: bool) -> Color {
    if late {
        LATE_RED
    } else {
        ON_TIME_WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_background() {
        assert_eq!(row_background(true), Color::Rgb(237, 75, 57));
        assert_eq!(row_background(false), Color::Rgb(255, 255, 255));
    }
}
