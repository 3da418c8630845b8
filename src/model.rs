//! The editing model that owns a room layout.
//!
//! [`RoomModel`] is the single owner of the live grid. Mutations go through
//! it, the completeness flag is recomputed between a mutation and its
//! notification, and listeners only ever observe a structurally valid grid
//! with an already-refreshed flag.

use crate::geometry;
use crate::grid::{self, Grid};
use crate::pathing;
use anyhow::Error;
use log::debug;
use std::fmt;

/// Errors produced by [`RoomModel`] mutations.
#[derive(Debug)]
pub enum RoomError {
    /// The candidate layout failed structural validation.
    InvalidLayout(Error),
    /// The targeted cell is a door, a border cell, or a door approach.
    NotEditable {
        /// Column of the rejected cell
        x: usize,
        /// Row of the rejected cell
        y: usize,
    },
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::InvalidLayout(reason) => write!(f, "layout is not valid: {reason}"),
            RoomError::NotEditable { x, y } => write!(f, "position ({x}, {y}) is not editable"),
        }
    }
}

impl std::error::Error for RoomError {}

/// An editable room layout with live connectivity tracking.
///
/// # Examples
///
/// ```
/// use dungeon_editor::model::RoomModel;
///
/// let mut model = RoomModel::new(5);
/// assert!(model.has_all_paths());
///
/// model.swap_pos(1, 1).unwrap();
/// assert!(model.get_layout()[1][1]);
/// ```
pub struct RoomModel {
    size: usize,
    layout: Grid,
    has_all_paths: bool,
    listeners: Vec<Box<dyn FnMut(&Grid)>>,
}

impl RoomModel {
    /// Creates a model holding the template layout for `size`.
    ///
    /// `size` is expected to be odd and at least 5 so the doors sit at the
    /// exact middle of each edge; other sizes are accepted and place the
    /// doors off-center.
    pub fn new(size: usize) -> Self {
        let layout = grid::template(size);
        let has_all_paths = pathing::has_all_paths(size, &layout);
        Self {
            size,
            layout,
            has_all_paths,
            listeners: Vec::new(),
        }
    }

    /// Returns the fixed grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy of the current layout.
    pub fn get_layout(&self) -> Grid {
        self.layout.clone()
    }

    /// Returns whether all doors and all floor cells are mutually reachable.
    ///
    /// The flag is cached: it is refreshed after every mutation, before
    /// listeners run, and never recomputed here.
    pub fn has_all_paths(&self) -> bool {
        self.has_all_paths
    }

    /// Returns whether `(x, y)` may be toggled.
    pub fn is_editable(&self, x: usize, y: usize) -> bool {
        geometry::is_editable(self.size, x, y)
    }

    /// Returns whether `candidate` satisfies the structural invariants.
    pub fn is_valid(&self, candidate: &Grid) -> bool {
        grid::validate_layout(self.size, candidate).is_ok()
    }

    /// Returns whether `candidate` matches the current layout exactly.
    pub fn is_equal(&self, candidate: &Grid) -> bool {
        *candidate == self.layout
    }

    /// Replaces the whole layout.
    ///
    /// Fails without side effects when `candidate` is structurally invalid.
    /// Setting a layout equal to the current one is a no-op and fires no
    /// notification.
    pub fn set_layout(&mut self, candidate: &Grid) -> Result<(), RoomError> {
        grid::validate_layout(self.size, candidate).map_err(RoomError::InvalidLayout)?;
        if !self.is_equal(candidate) {
            self.layout = candidate.clone();
            debug!("layout replaced");
            self.update_has_all_paths();
            self.fire_update();
        }
        Ok(())
    }

    /// Toggles the wall flag of one editable cell.
    pub fn swap_pos(&mut self, x: usize, y: usize) -> Result<(), RoomError> {
        if !self.is_editable(x, y) {
            return Err(RoomError::NotEditable { x, y });
        }
        self.layout[x][y] = !self.layout[x][y];
        debug!(
            "toggled ({}, {}) to {}",
            x,
            y,
            if self.layout[x][y] { "wall" } else { "floor" }
        );
        self.update_has_all_paths();
        self.fire_update();
        Ok(())
    }

    /// Restores the template layout; a no-op when the model already holds it.
    pub fn reset(&mut self) {
        let empty = grid::template(self.size);
        if !self.is_equal(&empty) {
            self.layout = empty;
            debug!("layout reset");
            self.update_has_all_paths();
            self.fire_update();
        }
    }

    /// Registers a callback invoked with the new layout after every change.
    ///
    /// Listeners run synchronously in registration order; registration is
    /// append-only. A panicking listener propagates to the mutating caller.
    pub fn add_listener(&mut self, listener: impl FnMut(&Grid) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn update_has_all_paths(&mut self) {
        self.has_all_paths = pathing::has_all_paths(self.size, &self.layout);
        debug!("has_all_paths={}", self.has_all_paths);
    }

    fn fire_update(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.layout);
        }
    }
}

impl fmt::Debug for RoomModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomModel")
            .field("size", &self.size)
            .field("layout", &self.layout)
            .field("has_all_paths", &self.has_all_paths)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
