//! Sprite-atlas geometry.
//!
//! The atlas is a single image with one row per suit and one column per
//! rank, laid out in [`Table::STANDARD`] order whatever table a caller sorts
//! by. This module only computes pixel rectangles; cropping and drawing are
//! left to the renderer.

use alloc::vec::Vec;

use crate::card::CardLike;
use crate::codec::{CardIndex, encode_index};
use crate::error::CodecError;
use crate::table::Table;

/// A pixel rectangle inside the atlas image.
///
/// `bottom` and `right` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasRegion {
    /// First pixel row.
    pub top: i64,
    /// First pixel column.
    pub left: i64,
    /// One past the last pixel row.
    pub bottom: i64,
    /// One past the last pixel column.
    pub right: i64,
}

impl AtlasRegion {
    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.right - self.left
    }
}

/// Grid layout of a card atlas.
///
/// The margin names follow the stock sprite sheet: `left_margin` and
/// `h_spacing` offset rows, `top_margin` and `v_spacing` offset columns.
///
/// ```
/// use cardatlas::AtlasLayout;
///
/// let layout = AtlasLayout::default()
///     .with_cell_size(200, 140)
///     .with_spacing(2, 2);
/// assert_eq!(layout.cell_height, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasLayout {
    /// Row offset of the first row. May be negative.
    pub left_margin: i32,
    /// Column offset of the first column. May be negative.
    pub top_margin: i32,
    /// Cell height in pixels.
    pub cell_height: u32,
    /// Cell width in pixels.
    pub cell_width: u32,
    /// Extra pixels between rows.
    pub h_spacing: u32,
    /// Extra pixels between columns.
    pub v_spacing: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            left_margin: -1,
            top_margin: 1,
            cell_height: 178,
            cell_width: 122,
            h_spacing: 0,
            v_spacing: 0,
        }
    }
}

impl AtlasLayout {
    /// Sets the row and column margins.
    ///
    /// # Example
    ///
    /// ```
    /// use cardatlas::AtlasLayout;
    ///
    /// let layout = AtlasLayout::default().with_margins(0, -3);
    /// assert_eq!(layout.left_margin, 0);
    /// assert_eq!(layout.top_margin, -3);
    /// ```
    #[must_use]
    pub const fn with_margins(mut self, left_margin: i32, top_margin: i32) -> Self {
        self.left_margin = left_margin;
        self.top_margin = top_margin;
        self
    }

    /// Sets the cell height and width.
    #[must_use]
    pub const fn with_cell_size(mut self, height: u32, width: u32) -> Self {
        self.cell_height = height;
        self.cell_width = width;
        self
    }

    /// Sets the spacing between rows and between columns.
    #[must_use]
    pub const fn with_spacing(mut self, h_spacing: u32, v_spacing: u32) -> Self {
        self.h_spacing = h_spacing;
        self.v_spacing = v_spacing;
        self
    }

    /// Returns the rectangle of the cell at `(row, col)`.
    ///
    /// Only `top` is clamped at zero, and the clamped cell keeps its full
    /// height, so with a negative `left_margin` the first row shares pixels
    /// with the second. Coordinates outside the populated grid
    /// still yield a rectangle; checking it against the image is up to the
    /// caller. Edges saturate at the `i64` bounds.
    #[must_use]
    pub fn locate(&self, row: u32, col: u32) -> AtlasRegion {
        let height = i64::from(self.cell_height);
        let width = i64::from(self.cell_width);
        let row_step = height + i64::from(self.h_spacing);
        let col_step = width + i64::from(self.v_spacing);

        let top = i64::from(row)
            .saturating_mul(row_step)
            .saturating_add(i64::from(self.left_margin))
            .max(0);
        let left = i64::from(col)
            .saturating_mul(col_step)
            .saturating_add(i64::from(self.top_margin));

        AtlasRegion {
            top,
            left,
            bottom: top.saturating_add(height),
            right: left.saturating_add(width),
        }
    }

    /// Returns the rectangle of a card index.
    ///
    /// The index digits are read as atlas row and column, which matches the
    /// image for indices encoded with [`Table::STANDARD`].
    #[must_use]
    pub fn locate_index(&self, index: CardIndex) -> AtlasRegion {
        self.locate(
            u32::from(index.suit_position()),
            u32::from(index.rank_position()),
        )
    }

    /// Returns the rectangle of a card.
    ///
    /// The cell comes from the card's place in the image, not from any
    /// custom sort order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownLabel`] if the suit or rank label is not
    /// a known label.
    pub fn locate_card<C: CardLike + ?Sized>(&self, card: &C) -> Result<AtlasRegion, CodecError> {
        encode_index(&Table::STANDARD, card).map(|index| self.locate_index(index))
    }

    /// Returns the rectangle of every card in a hand, in hand order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownLabel`] on the first card with an unknown
    /// label.
    pub fn locate_hand<C: CardLike>(&self, hand: &[C]) -> Result<Vec<AtlasRegion>, CodecError> {
        hand.iter().map(|card| self.locate_card(card)).collect()
    }
}
