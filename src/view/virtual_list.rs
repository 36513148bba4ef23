//! Fixed Size Virtual List
//!
//! Windowing for lists whose rows all have the same height: only the rows
//! intersecting the visible area (plus a small overscan) are rendered.

use std::ops::Range;

/// Rows rendered beyond each edge of the visible area
pub const DEFAULT_OVERSCAN: usize = 2;

// == Container Size ==
/// Dimensions reported by the measuring container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// == Row Style ==
/// Absolute placement of one rendered row inside the scroll area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub top: u64,
    pub height: u32,
    pub width: u32,
}

// == Fixed Size List ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizeList {
    item_count: usize,
    item_size: u32,
    overscan: usize,
}

impl FixedSizeList {
    /// Creates a list of `item_count` rows, each `item_size` pixels tall.
    pub fn new(item_count: usize, item_size: u32) -> Self {
        Self {
            item_count,
            item_size: item_size.max(1),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Height of the whole scrollable content.
    pub fn content_height(&self) -> u64 {
        self.item_count as u64 * u64::from(self.item_size)
    }

    // == Visible Range ==
    /// Indices of the rows to render for a viewport of `height` pixels
    /// scrolled down by `scroll_top`.
    pub fn visible_range(&self, height: u32, scroll_top: u64) -> Range<usize> {
        if self.item_count == 0 || height == 0 {
            return 0..0;
        }

        let size = u64::from(self.item_size);
        let max_scroll = self.content_height().saturating_sub(u64::from(height));
        let offset = scroll_top.min(max_scroll);

        let first = (offset / size) as usize;
        let last = ((offset + u64::from(height) - 1) / size) as usize;

        let start = first.saturating_sub(self.overscan);
        let end = (last + 1 + self.overscan).min(self.item_count);
        start..end
    }

    // == Render ==
    /// Calls `render_row` for every row in the visible range, in order.
    pub fn render<R, F>(&self, size: ContainerSize, scroll_top: u64, mut render_row: F) -> Vec<R>
    where
        F: FnMut(usize, RowStyle) -> R,
    {
        self.visible_range(size.height, scroll_top)
            .map(|index| {
                let style = RowStyle {
                    top: index as u64 * u64::from(self.item_size),
                    height: self.item_size,
                    width: size.width,
                };
                render_row(index, style)
            })
            .collect()
    }
}
