use glyphsheet_data::AtlasLayout;

/// Top-left corner of the slot a glyph was packed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellOrigin {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

/// Left-to-right, top-to-bottom packing position within an atlas.
#[derive(Debug)]
pub(crate) struct AtlasCursor {
    x: i32,
    row: i32,
    rows: i32,
}

impl AtlasCursor {
    pub(crate) fn new(canvas_height: i32) -> Self {
        Self { x: 0, row: 0, rows: AtlasLayout::rows(canvas_height) }
    }

    /// Claims a slot `width` pixels wide, wrapping to the next row when the current
    /// row cannot hold it. Returns `None` once every row is used up.
    pub(crate) fn reserve(&mut self, width: i32) -> Option<CellOrigin> {
        if self.row >= self.rows {
            return None;
        }

        if self.x + width > AtlasLayout::CANVAS_WIDTH {
            self.row += 1;
            self.x = 0;
            if self.row >= self.rows {
                return None;
            }
        }

        Some(CellOrigin { x: self.x, y: self.row * AtlasLayout::CELL_HEIGHT })
    }

    pub(crate) fn advance(&mut self, amount: i32) {
        self.x += amount;
    }
}
