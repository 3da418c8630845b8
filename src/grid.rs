//! Logical grid structs and utilities.

use crate::geometry;
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// An integer location on a room grid
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellPos {
    /// Column - increases to the right
    pub x: i8,
    /// Row - increases downwards
    pub y: i8,
}

impl CellPos {
    /// Create a new CellPos
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// A 2D grid of walls
///
/// The grid is indexed by `grid[x][y]`, where `x` is visually horizontal and
/// `y` is vertical; `true` is a wall, `false` is floor. Rooms are square, so
/// every column holds as many cells as there are columns.
pub type Grid = Vec<Vec<bool>>;

/// Builds the canonical minimal grid for a size: walls on the border, floor
/// everywhere else.
///
/// Doors are not border cells, so they start out as floor, as does the whole
/// interior. The template's walls are the immovable skeleton of every layout:
/// [`validate_layout`] rejects any candidate that clears one of them.
///
/// # Examples
///
/// ```
/// use dungeon_editor::grid::template;
///
/// let layout = template(5);
/// assert!(layout[0][0]);  // border
/// assert!(!layout[0][2]); // left door
/// assert!(!layout[2][2]); // interior
/// ```
pub fn template(size: usize) -> Grid {
    (0..size)
        .map(|x| (0..size).map(|y| geometry::is_border(size, x, y)).collect())
        .collect()
}

/// Validates a [`Grid`] against the structural invariants for `size`.
///
/// A valid [`Grid`] must satisfy the following conditions:
/// - It must hold exactly `size` columns of `size` cells each.
/// - Every wall of the template must still be a wall; border cells are never
///   removable.
///
/// Extra walls anywhere else are allowed, including on door cells: the
/// connectivity check treats doors as open regardless of their stored value.
pub fn validate_layout(size: usize, layout: &Grid) -> Result<(), Error> {
    if layout.len() != size {
        return Err(anyhow!(
            "Grid has {} columns, expected {}",
            layout.len(),
            size
        ));
    }
    for (x, column) in layout.iter().enumerate() {
        if column.len() != size {
            return Err(anyhow!(
                "Column {} has {} cells, expected {}",
                x,
                column.len(),
                size
            ));
        }
    }
    let empty = template(size);
    for x in 0..size {
        for y in 0..size {
            if empty[x][y] && !layout[x][y] {
                return Err(anyhow!("Border wall at ({}, {}) was cleared", x, y));
            }
        }
    }
    Ok(())
}
