//! Row grouping with serpentine column order
//!
//! Tiles of equal height form one row of the output. Rows are ordered by
//! height, smallest first. Within a row tiles are ordered by width, ascending
//! on even rows and descending on odd rows. Both sorts are stable, so tiles of
//! equal size keep the order they arrived in.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::spatial::tiles::Dimensions;

/// Order of tile widths within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Narrowest tile first
    Ascending,
    /// Widest tile first
    Descending,
}

impl SortDirection {
    /// Direction used for the row at `index`, counted from the top
    pub const fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    fn compare(self, a: u32, b: u32) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }
}

/// All tiles sharing one height, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRow<T> {
    /// Common height of the tiles
    pub height: u32,
    /// Tiles from left to right
    pub tiles: Vec<T>,
}

impl<T: Dimensions> TileRow<T> {
    /// Sum of the tile widths
    pub fn width(&self) -> u64 {
        self.tiles.iter().map(|tile| u64::from(tile.width())).sum()
    }
}

/// Tiles arranged into rows ordered by ascending height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<T> {
    rows: Vec<TileRow<T>>,
}

impl<T> Grouping<T> {
    /// Rows from top to bottom
    pub fn rows(&self) -> &[TileRow<T>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of tiles across all rows
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(|row| row.tiles.len()).sum()
    }

    /// Row heights from top to bottom
    pub fn heights(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.height).collect()
    }
}

/// Group tiles into rows by height and sort each row in serpentine order
pub fn group_and_sort<T: Dimensions>(tiles: Vec<T>) -> Grouping<T> {
    let mut buckets: HashMap<u32, Vec<T>> = HashMap::new();
    for tile in tiles {
        buckets.entry(tile.height()).or_default().push(tile);
    }

    let mut rows: Vec<TileRow<T>> = buckets
        .into_iter()
        .map(|(height, tiles)| TileRow { height, tiles })
        .collect();
    rows.sort_unstable_by_key(|row| row.height);

    for (index, row) in rows.iter_mut().enumerate() {
        let direction = SortDirection::for_row(index);
        row.tiles
            .sort_by(|a, b| direction.compare(a.width(), b.width()));
    }

    Grouping { rows }
}
