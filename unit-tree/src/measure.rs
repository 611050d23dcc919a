//! Content width estimation for the navigator panel

use serde::{Deserialize, Serialize};

use crate::filter::VisibleRow;
use crate::resize::PanelConfig;

/// Pixel metrics of one navigator row. Text is estimated from an average
/// glyph width, which is close enough for a lower bound on panel width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowMetrics {
    pub indent_per_level: f64,
    pub row_padding: f64,
    pub chevron_width: f64,
    pub icon_width: f64,
    pub gap: f64,
    pub char_width: f64,
    pub badge_char_width: f64,
    pub badge_padding: f64,
    pub add_button_width: f64,
    pub search_padding: f64,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            indent_per_level: 16.0,
            row_padding: 16.0,
            chevron_width: 16.0,
            icon_width: 20.0,
            gap: 6.0,
            char_width: 7.5,
            badge_char_width: 6.5,
            badge_padding: 12.0,
            add_button_width: 20.0,
            search_padding: 56.0,
        }
    }
}

impl RowMetrics {
    fn text_width(&self, text: &str, char_width: f64) -> f64 {
        text.chars().count() as f64 * char_width
    }

    /// Width a row needs to render without truncation
    pub fn row_width(&self, row: &VisibleRow) -> f64 {
        let mut width = self.row_padding
            + row.level as f64 * self.indent_per_level
            + self.chevron_width
            + self.gap
            + self.icon_width
            + self.gap
            + self.text_width(&row.name, self.char_width)
            + self.gap
            + self.add_button_width;
        if let Some(badge) = &row.badge {
            width += self.gap + self.badge_padding + self.text_width(&badge.to_string(), self.badge_char_width);
        }
        width
    }

    /// Width the search box needs to show `text`
    pub fn search_width(&self, text: &str) -> f64 {
        self.search_padding + self.text_width(text, self.char_width)
    }

    /// Widest of the rendered rows and the search box, clamped to the panel
    /// bounds
    pub fn min_content_width(&self, rows: &[VisibleRow], search: &str, config: &PanelConfig) -> f64 {
        let widest = rows
            .iter()
            .map(|row| self.row_width(row))
            .fold(self.search_width(search), f64::max);
        config.clamp(widest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Badge, UnitKind};
    use approx::assert_relative_eq;

    fn row(name: &str, level: usize, badge: Option<Badge>) -> VisibleRow {
        VisibleRow {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind: UnitKind::Department,
            badge,
            level,
            has_children: false,
            expanded: false,
        }
    }

    #[test]
    fn test_row_width_accounts_for_indent_and_badge() {
        let metrics = RowMetrics::default();
        let flat = metrics.row_width(&row("Physics", 0, None));
        let nested = metrics.row_width(&row("Physics", 2, None));
        assert_relative_eq!(nested - flat, 32.0);

        let badged = metrics.row_width(&row("Physics", 0, Some(Badge::Count(120))));
        assert_relative_eq!(badged - flat, 6.0 + 12.0 + 3.0 * 6.5);
    }

    #[test]
    fn test_min_content_width_is_clamped() {
        let metrics = RowMetrics::default();
        let config = PanelConfig::default();
        assert_relative_eq!(metrics.min_content_width(&[], "", &config), config.min_width);

        let long = "x".repeat(200);
        let rows = [row(&long, 3, None)];
        assert_relative_eq!(metrics.min_content_width(&rows, "", &config), config.max_width);
    }

    #[test]
    fn test_search_text_can_dominate() {
        let metrics = RowMetrics::default();
        let config = PanelConfig::default();
        let rows = [row("Arts", 0, None)];
        let query = "a rather long search query here";
        let width = metrics.min_content_width(&rows, query, &config);
        assert_relative_eq!(width, metrics.search_width(query));
    }
}
