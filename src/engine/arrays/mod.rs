//! Parallel Arrays - host view state.
//!
//! Every view is an index into these arrays. They stand in for the host
//! toolkit's view objects: hierarchy membership, frames and the few visual
//! properties the builder forwards.
//!
//! # Array Categories
//!
//! - **core**: Parent and ordered subviews
//! - **visual**: Frame, background fill, image, intrinsic size, safe area

pub mod core;
pub mod visual;

use self::core as core_arrays;
use self::visual as visual_arrays;

/// Growable array with a default value for unset cells.
pub(crate) struct ViewArray<T: Clone> {
    values: Vec<T>,
    default: T,
}

impl<T: Clone> ViewArray<T> {
    pub(crate) const fn new(default: T) -> Self {
        Self {
            values: Vec::new(),
            default,
        }
    }

    pub(crate) fn ensure(&mut self, index: usize) {
        if self.values.len() <= index {
            self.values.resize(index + 1, self.default.clone());
        }
    }

    pub(crate) fn get(&self, index: usize) -> T {
        self.values
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut T {
        self.ensure(index);
        &mut self.values[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = self.default.clone();
        }
    }

    pub(crate) fn clear_all(&mut self) {
        self.values.clear();
    }
}

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    visual_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
pub fn reset_all_arrays() {
    core_arrays::reset();
    visual_arrays::reset();
}
