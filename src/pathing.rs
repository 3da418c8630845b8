//! Reachability over a room layout.
//!
//! A room is complete when its four doors are mutually reachable and every
//! open floor cell can be reached from them, moving through 4-connected
//! floor cells.

use crate::geometry;
use crate::grid::{CellPos, Grid};
use std::collections::{HashSet, VecDeque};

/// Whether a cell may be walked through.
///
/// Doors count as open regardless of their stored value; everything out of
/// bounds is a wall.
fn traversable(size: usize, layout: &Grid, pos: CellPos) -> bool {
    if pos.x < 0 || pos.y < 0 || pos.x >= size as i8 || pos.y >= size as i8 {
        return false;
    }
    let (x, y) = (pos.x as usize, pos.y as usize);
    !layout[x][y] || geometry::is_door(size, x, y)
}

/// Every cell reachable from `start` through traversable cells.
fn reachable_from(size: usize, layout: &Grid, start: CellPos) -> HashSet<CellPos> {
    let mut visited = HashSet::new();
    if !traversable(size, layout, start) {
        return visited;
    }
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let neighbors = [
            CellPos::new(current.x + 1, current.y),
            CellPos::new(current.x - 1, current.y),
            CellPos::new(current.x, current.y + 1),
            CellPos::new(current.x, current.y - 1),
        ];
        for neighbor in neighbors {
            if traversable(size, layout, neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

/// Decides whether a room layout is complete: the four doors are mutually
/// reachable and every open floor cell can be reached from them.
///
/// A missing path is a normal `false`, never an error. One breadth-first
/// flood from the reference (left) door covers both checks; a door that is
/// its own reference is trivially reachable.
///
/// # Examples
///
/// ```
/// use dungeon_editor::grid::template;
/// use dungeon_editor::pathing::has_all_paths;
///
/// assert!(has_all_paths(5, &template(5)));
/// ```
pub fn has_all_paths(size: usize, layout: &Grid) -> bool {
    let doors = geometry::door_positions(size);
    let reachable = reachable_from(size, layout, doors[0]);

    if doors[1..].iter().any(|door| !reachable.contains(door)) {
        return false;
    }

    for x in 0..size {
        for y in 0..size {
            if !layout[x][y]
                && !geometry::is_door(size, x, y)
                && !reachable.contains(&CellPos::new(x as i8, y as i8))
            {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::template;

    /// Size-7 layout whose floor is a cross of corridors meeting in the
    /// middle; every other editable cell is walled.
    fn cross_corridors() -> Grid {
        let mut layout = template(7);
        let open = [(2, 3), (3, 3), (4, 3), (3, 2), (3, 4)];
        for x in 1..6 {
            for y in 1..6 {
                if geometry::is_editable(7, x, y) && !open.contains(&(x, y)) {
                    layout[x][y] = true;
                }
            }
        }
        layout
    }

    #[test]
    fn template_is_complete() {
        assert!(has_all_paths(5, &template(5)));
        assert!(has_all_paths(7, &template(7)));
        assert!(has_all_paths(21, &template(21)));
    }

    #[test]
    fn cross_corridors_are_complete() {
        assert!(has_all_paths(7, &cross_corridors()));
    }

    #[test]
    fn cutting_the_only_corridor_disconnects() {
        let mut layout = cross_corridors();
        layout[2][3] = true;
        assert!(!has_all_paths(7, &layout));
    }

    #[test]
    fn isolated_floor_pocket_is_incomplete() {
        // doors stay mutually reachable, but (1, 1) is sealed off
        let mut layout = template(7);
        layout[1][2] = true;
        layout[2][1] = true;
        assert!(!has_all_paths(7, &layout));
    }

    #[test]
    fn fully_walled_interior_disconnects_doors() {
        let mut layout = template(5);
        for x in 1..4 {
            for y in 1..4 {
                layout[x][y] = true;
            }
        }
        assert!(!has_all_paths(5, &layout));
    }

    #[test]
    fn walled_door_stays_traversable() {
        let mut layout = template(7);
        layout[0][3] = true;
        assert!(has_all_paths(7, &layout));
    }
}
