//! A set of pre-made room layouts

use crate::geometry;
use crate::grid::{self, Grid};
use serde::{Deserialize, Serialize};

/// Pre-made room layouts, constructible at any supported size.
///
/// Presets only ever place walls on editable cells, so every preset is a
/// structurally valid layout, and each keeps all doors and floor cells
/// connected.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardRoom {
    /// The template: border walls only, interior fully open
    #[default]
    Open,
    /// Open room with a lattice of free-standing pillars
    Pillars,
}

impl StandardRoom {
    /// Get a list of all available rooms
    pub fn get_all() -> [Self; 2] {
        [Self::Open, Self::Pillars]
    }

    /// Get the [`Grid`] associated with this room at the given size
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_editor::pathing::has_all_paths;
    /// use dungeon_editor::standard_rooms::StandardRoom;
    ///
    /// let layout = StandardRoom::Pillars.layout(9);
    /// assert!(layout[2][2]);
    /// assert!(has_all_paths(9, &layout));
    /// ```
    pub fn layout(&self, size: usize) -> Grid {
        let mut layout = grid::template(size);
        if let Self::Pillars = self {
            for x in 0..size {
                for y in 0..size {
                    if x % 2 == 0 && y % 2 == 0 && geometry::is_editable(size, x, y) {
                        layout[x][y] = true;
                    }
                }
            }
        }
        layout
    }
}
