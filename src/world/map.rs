//! Map data structure
//!
//! A rectangular grid of tile codes. Rows are stored as nested vectors so the
//! save blob keeps the same row-of-rows shape the renderer expects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::{Tile, UnknownTileCode};

/// Grid coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Own cell followed by up, down, left and right neighbours
    pub fn with_neighbors(&self) -> [Position; 5] {
        [
            *self,
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }

    /// The four orthogonal neighbours in up, down, left, right order
    pub fn neighbors(&self) -> [Position; 4] {
        [self.offset(0, -1), self.offset(0, 1), self.offset(-1, 0), self.offset(1, 0)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown layout glyph {glyph:?} at column {x}, row {y}")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error(transparent)]
    UnknownCode(#[from] UnknownTileCode),
}

/// A rectangular grid of tiles; every row has the same length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct MapGrid {
    rows: Vec<Vec<Tile>>,
}

impl MapGrid {
    /// Create a grid filled with a single tile
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self { rows: vec![vec![tile; width]; height] }
    }

    /// Build a grid from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if expected == 0 {
            return Err(GridError::Empty);
        }
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != expected {
                return Err(GridError::Ragged { row, expected, found: tiles.len() });
            }
        }
        Ok(Self { rows })
    }

    /// Parse a hand-authored layout, one string per row, one glyph per tile
    pub fn from_layout(lines: &[&str]) -> Result<Self, GridError> {
        let rows = lines
            .iter()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, glyph)| Tile::from_glyph(glyph).ok_or(GridError::UnknownGlyph { glyph, x, y }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width() && pos.y >= 0 && pos.y < self.height()
    }

    /// Is this cell on the outer ring?
    pub fn is_border(&self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width() - 1 || pos.y == self.height() - 1
    }

    /// Get tile at position
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if self.in_bounds(pos) {
            Some(self.rows[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Set tile at position; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if self.in_bounds(pos) {
            self.rows[pos.y as usize][pos.x as usize] = tile;
        }
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), *tile))
        })
    }

    /// First cell holding `tile`, scanning row by row
    pub fn find(&self, tile: Tile) -> Option<Position> {
        self.cells().find(|(_, t)| *t == tile).map(|(pos, _)| pos)
    }

    /// Every cell holding `tile`
    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        self.cells().filter(|(_, t)| *t == tile).map(|(pos, _)| pos).collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells().filter(|(_, t)| *t == tile).count()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for MapGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        MapGrid::from_rows(rows)
    }
}

impl From<MapGrid> for Vec<Vec<Tile>> {
    fn from(grid: MapGrid) -> Self {
        grid.rows
    }
}
