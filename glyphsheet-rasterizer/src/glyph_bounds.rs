/// Inclusive pixel bounds of a glyph's ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GlyphBounds {
    /// Bounds covering a single pixel.
    pub fn point(x: i32, y: i32) -> Self {
        Self { min_x: x, max_x: x, min_y: y, max_y: y }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),

            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Bounds of all pixels with non-zero coverage, or `None` when there are none.
    pub fn of_pixels(pixels: impl IntoIterator<Item = (i32, i32, u8)>) -> Option<Self> {
        pixels
            .into_iter()
            .filter(|&(_, _, alpha)| alpha > 0)
            .map(|(x, y, _)| Self::point(x, y))
            .reduce(Self::merge)
    }

    pub fn width(&self) -> i32 {
        1 + self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        1 + self.max_y - self.min_y
    }

    /// Distance between the first and the last inked column.
    pub fn column_span(&self) -> i32 {
        self.max_x - self.min_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_pixels() {
        let bounds = GlyphBounds::of_pixels([(3, 4, 10), (10, 2, 255), (7, 9, 1)]).unwrap();

        assert_eq!(bounds, GlyphBounds { min_x: 3, max_x: 10, min_y: 2, max_y: 9 });
        assert_eq!(bounds.width(), 8);
        assert_eq!(bounds.height(), 8);
        assert_eq!(bounds.column_span(), 7);
    }

    #[test]
    fn transparent_pixels_are_ignored() {
        assert_eq!(GlyphBounds::of_pixels([(1, 1, 0), (2, 2, 0)]), None);
        assert_eq!(
            GlyphBounds::of_pixels([(1, 1, 0), (5, 2, 9)]),
            Some(GlyphBounds::point(5, 2))
        );
    }
}
