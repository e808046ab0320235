//! View Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of view indices:
//! - ID ↔ Index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - Recursive release of a view and its subviews

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::arrays;
use super::assets;
use super::flex_node_registry;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map view ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to view ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently allocated indices, ordered for deterministic iteration.
    static ALLOCATED_INDICES: RefCell<BTreeSet<usize>> = const { RefCell::new(BTreeSet::new()) };

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Next "v{n}" ID not already taken by an explicit ID.
fn next_generated_id() -> String {
    ID_COUNTER.with(|counter| {
        let mut counter = counter.borrow_mut();
        loop {
            let id = format!("v{}", *counter);
            *counter += 1;
            if !ID_TO_INDEX.with(|map| map.borrow().contains_key(&id)) {
                return id;
            }
        }
    })
}

/// Allocate an index for a new view.
///
/// If `id` is already registered, the existing index is returned.
pub fn allocate_index(id: Option<&str>) -> usize {
    let view_id = match id {
        Some(id) => id.to_string(),
        None => next_generated_id(),
    };

    if let Some(index) = ID_TO_INDEX.with(|map| map.borrow().get(&view_id).copied()) {
        return index;
    }

    let index = FREE_INDICES.with(|free| free.borrow_mut().pop()).unwrap_or_else(|| {
        NEXT_INDEX.with(|next| {
            let mut next = next.borrow_mut();
            let index = *next;
            *next += 1;
            index
        })
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(view_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, view_id);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });

    arrays::ensure_all_capacity(index);

    index
}

/// Release an index back to the pool.
///
/// Subviews are released first, then the view is detached from its
/// superview and its layout node is destroyed.
pub fn release_index(index: usize) {
    let Some(id) = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned()) else {
        return;
    };

    for child in arrays::core::get_children(index) {
        release_index(child);
    }

    arrays::core::detach(index);
    flex_node_registry::destroy_flex_node(index);

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().remove(&index);
    });

    arrays::clear_all_at_index(index);

    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    // When every view is gone, drop the arrays and restart numbering.
    if ALLOCATED_INDICES.with(|set| set.borrow().is_empty()) {
        arrays::reset_all_arrays();
        flex_node_registry::reset_flex_nodes();
        FREE_INDICES.with(|free| free.borrow_mut().clear());
        NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a view ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Get all currently allocated indices in ascending order.
pub fn get_allocated_indices() -> Vec<usize> {
    ALLOCATED_INDICES.with(|set| set.borrow().iter().copied().collect())
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&index))
}

/// Get the count of currently allocated views.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    flex_node_registry::reset_flex_nodes();
    arrays::reset_all_arrays();
    assets::reset_images();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_index() {
        reset_registry();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);
        let idx3 = allocate_index(Some("root"));

        assert_eq!((idx1, idx2, idx3), (0, 1, 2));
        assert!(is_allocated(2));
        assert!(!is_allocated(3));
        assert_eq!(get_allocated_count(), 3);
        assert_eq!(get_allocated_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_allocate_same_id_twice() {
        reset_registry();

        let first = allocate_index(Some("header"));
        let second = allocate_index(Some("header"));
        assert_eq!(first, second);
        assert_eq!(get_allocated_count(), 1);
    }

    #[test]
    fn test_generated_ids_skip_taken_ids() {
        reset_registry();

        let named = allocate_index(Some("v0"));
        let first = allocate_index(None);
        let second = allocate_index(None);

        assert_ne!(first, named);
        assert_ne!(second, named);
        assert_ne!(first, second);
        assert_eq!(get_id(first).as_deref(), Some("v1"));
    }

    #[test]
    fn test_release_and_reuse() {
        reset_registry();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);

        release_index(idx1);
        assert!(!is_allocated(idx1));
        assert!(is_allocated(idx2));

        let idx3 = allocate_index(None);
        assert_eq!(idx3, idx1);
    }

    #[test]
    fn test_release_is_recursive() {
        reset_registry();

        let parent = allocate_index(None);
        let child = allocate_index(None);
        let grandchild = allocate_index(None);
        let keep = allocate_index(None);
        arrays::core::append_child(parent, child);
        arrays::core::append_child(child, grandchild);

        release_index(parent);

        assert!(!is_allocated(parent));
        assert!(!is_allocated(child));
        assert!(!is_allocated(grandchild));
        assert!(is_allocated(keep));
    }

    #[test]
    fn test_id_mapping() {
        reset_registry();

        let idx = allocate_index(Some("balance"));
        assert_eq!(get_index("balance"), Some(idx));
        assert_eq!(get_id(idx), Some("balance".to_string()));

        release_index(idx);
        assert_eq!(get_index("balance"), None);
    }
}
