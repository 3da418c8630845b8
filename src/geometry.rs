//! Cell classification for a square room with four cardinal doors.
//!
//! Every cell of a `size x size` room belongs to exactly one of four classes:
//! door, in-front-of-door, border, or editable interior. Only editable cells
//! may be toggled by a user; everything else is fixed by the room shape.

use crate::grid::CellPos;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Enum for direction values.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Towards -x
    Left = 0,
    /// Towards +x
    Right = 1,
    /// Towards -y
    Up = 2,
    /// Towards +y
    Down = 3,
}

impl Direction {
    /// All four directions, in the canonical door order: left, right, top,
    /// bottom. The first entry marks the reference door used by the
    /// connectivity check.
    pub fn get_all() -> [Self; 4] {
        [Self::Left, Self::Right, Self::Up, Self::Down]
    }

    /// The door cell on this side of a room with the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_editor::geometry::Direction;
    /// use dungeon_editor::grid::CellPos;
    ///
    /// assert_eq!(Direction::Left.door_position(5), CellPos::new(0, 2));
    /// assert_eq!(Direction::Down.door_position(5), CellPos::new(2, 4));
    /// ```
    pub fn door_position(&self, size: usize) -> CellPos {
        let middle = middle(size) as i8;
        let last = (size - 1) as i8;
        match self {
            Direction::Left => CellPos::new(0, middle),
            Direction::Right => CellPos::new(last, middle),
            Direction::Up => CellPos::new(middle, 0),
            Direction::Down => CellPos::new(middle, last),
        }
    }
}

/// The middle index shared by both axes of a room.
///
/// Rooms are conceptually odd-sized (5 or larger) so the middle is unique;
/// even sizes place the doors off-center.
pub fn middle(size: usize) -> usize {
    size / 2
}

/// The four door cells in canonical order (left, right, top, bottom).
///
/// # Examples
///
/// ```
/// use dungeon_editor::geometry::door_positions;
/// use dungeon_editor::grid::CellPos;
///
/// let doors = door_positions(5);
/// assert_eq!(doors[0], CellPos::new(0, 2));
/// assert_eq!(doors[1], CellPos::new(4, 2));
/// assert_eq!(doors[2], CellPos::new(2, 0));
/// assert_eq!(doors[3], CellPos::new(2, 4));
/// ```
pub fn door_positions(size: usize) -> [CellPos; 4] {
    Direction::get_all().map(|side| side.door_position(size))
}

/// Returns whether `(x, y)` is one of the four door cells.
pub fn is_door(size: usize, x: usize, y: usize) -> bool {
    let middle = middle(size);
    (x == 0 && y == middle)
        || (x == size - 1 && y == middle)
        || (y == 0 && x == middle)
        || (y == size - 1 && x == middle)
}

/// Returns whether `(x, y)` is one step inward from a door.
///
/// These four cells stay floor so that every door always opens into the room.
pub fn is_in_front_of_door(size: usize, x: usize, y: usize) -> bool {
    let middle = middle(size);
    (x == 1 && y == middle)
        || (x == size - 2 && y == middle)
        || (y == 1 && x == middle)
        || (y == size - 2 && x == middle)
}

/// Returns whether `(x, y)` is an outer-ring cell that is not a door.
pub fn is_border(size: usize, x: usize, y: usize) -> bool {
    (x == 0 || y == 0 || x == size - 1 || y == size - 1) && !is_door(size, x, y)
}

/// Returns whether `(x, y)` may be toggled by the user.
///
/// # Examples
///
/// ```
/// use dungeon_editor::geometry::is_editable;
///
/// assert!(is_editable(5, 1, 1));
/// assert!(!is_editable(5, 0, 2)); // door
/// assert!(!is_editable(5, 1, 2)); // in front of the left door
/// assert!(!is_editable(5, 0, 0)); // border
/// ```
pub fn is_editable(size: usize, x: usize, y: usize) -> bool {
    !is_door(size, x, y) && !is_border(size, x, y) && !is_in_front_of_door(size, x, y)
}
