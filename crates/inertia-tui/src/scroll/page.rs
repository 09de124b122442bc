//! `ScrollHost` for a block of text lines shown in a terminal viewport

use inertia_core::momentum::bounds;
use inertia_core::ScrollHost;

/// A scrollable text document measured in `row_height` units per row
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalPage {
    offset: f64,
    line_count: usize,
    viewport_rows: u16,
    row_height: f64,
}

impl TerminalPage {
    pub fn new(line_count: usize, viewport_rows: u16, row_height: f64) -> Self {
        Self {
            offset: 0.0,
            line_count,
            viewport_rows,
            row_height,
        }
    }

    /// Resize the viewport, pulling the offset back into range like a
    /// browser does when the window grows
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.offset = bounds::clamp_position(self.offset, self.max_offset());
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn max_offset(&self) -> f64 {
        bounds::max_scroll(self.scroll_height(), self.viewport_height())
    }

    /// First visible line
    pub fn top_row(&self) -> u16 {
        let row = (self.offset / self.row_height).floor();
        row.clamp(0.0, u16::MAX as f64) as u16
    }

    /// Discrete scroll used when momentum scrolling is off
    pub fn native_scroll(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.offset = bounds::clamp_position(self.offset + delta, self.max_offset());
    }
}

impl ScrollHost for TerminalPage {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn scroll_height(&self) -> f64 {
        self.line_count as f64 * self.row_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_rows as f64 * self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurements() {
        let page = TerminalPage::new(100, 20, 16.0);
        assert_eq!(page.scroll_height(), 1600.0);
        assert_eq!(page.viewport_height(), 320.0);
        assert_eq!(page.max_offset(), 1280.0);
    }

    #[test]
    fn test_top_row() {
        let mut page = TerminalPage::new(100, 20, 16.0);
        page.set_scroll_offset(47.9);
        assert_eq!(page.top_row(), 2);
        page.set_scroll_offset(1280.0);
        assert_eq!(page.top_row(), 80);
    }

    #[test]
    fn test_short_document_cannot_scroll() {
        let mut page = TerminalPage::new(5, 20, 16.0);
        assert_eq!(page.max_offset(), 0.0);
        page.native_scroll(300.0);
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn test_native_scroll_clamps() {
        let mut page = TerminalPage::new(100, 20, 16.0);
        page.native_scroll(100.0);
        assert_eq!(page.scroll_offset(), 100.0);
        page.native_scroll(-500.0);
        assert_eq!(page.scroll_offset(), 0.0);
        page.native_scroll(5000.0);
        assert_eq!(page.scroll_offset(), 1280.0);
    }

    #[test]
    fn test_growing_viewport_pulls_offset_back() {
        let mut page = TerminalPage::new(100, 20, 16.0);
        page.set_scroll_offset(1280.0);
        page.set_viewport_rows(50);
        assert_eq!(page.scroll_offset(), 800.0);
    }
}
