//! Core Arrays - view hierarchy membership.
//!
//! - parent: superview index (None at a root)
//! - children: ordered subview indices (sibling order)

use std::cell::RefCell;

use super::ViewArray;

thread_local! {
    static PARENT_INDEX: RefCell<ViewArray<Option<usize>>> = const { RefCell::new(ViewArray::new(None)) };
    static CHILDREN: RefCell<ViewArray<Vec<usize>>> = const { RefCell::new(ViewArray::new(Vec::new())) };
}

// =============================================================================
// Capacity Management
// =============================================================================

pub fn ensure_capacity(index: usize) {
    PARENT_INDEX.with(|arr| arr.borrow_mut().ensure(index));
    CHILDREN.with(|arr| arr.borrow_mut().ensure(index));
}

pub fn clear_at_index(index: usize) {
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear(index));
    CHILDREN.with(|arr| arr.borrow_mut().clear(index));
}

pub fn reset() {
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear_all());
    CHILDREN.with(|arr| arr.borrow_mut().clear_all());
}

// =============================================================================
// Hierarchy
// =============================================================================

pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index))
}

pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|arr| arr.borrow().get(index))
}

/// Check whether `ancestor` is `index` or one of its superviews.
pub fn is_ancestor_or_self(ancestor: usize, index: usize) -> bool {
    let mut current = Some(index);
    while let Some(idx) = current {
        if idx == ancestor {
            return true;
        }
        current = get_parent_index(idx);
    }
    false
}

/// Remove `index` from its superview's children, if it has one.
pub fn detach(index: usize) {
    let Some(parent) = get_parent_index(index) else {
        return;
    };
    CHILDREN.with(|arr| {
        arr.borrow_mut().get_mut(parent).retain(|&child| child != index);
    });
    PARENT_INDEX.with(|arr| arr.borrow_mut().set(index, None));
}

/// Append `child` as the last subview of `parent`, moving it out of any
/// previous superview. Callers check for cycles.
pub fn append_child(parent: usize, child: usize) {
    detach(child);
    CHILDREN.with(|arr| arr.borrow_mut().get_mut(parent).push(child));
    PARENT_INDEX.with(|arr| arr.borrow_mut().set(child, Some(parent)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        reset();

        append_child(0, 1);
        append_child(0, 2);
        append_child(0, 3);

        assert_eq!(get_children(0), vec![1, 2, 3]);
        assert_eq!(get_parent_index(2), Some(0));
        assert_eq!(get_parent_index(0), None);
    }

    #[test]
    fn test_append_moves_between_parents() {
        reset();

        append_child(0, 2);
        append_child(1, 2);

        assert!(get_children(0).is_empty());
        assert_eq!(get_children(1), vec![2]);
        assert_eq!(get_parent_index(2), Some(1));
    }

    #[test]
    fn test_reappend_moves_to_end() {
        reset();

        append_child(0, 1);
        append_child(0, 2);
        append_child(0, 1);

        assert_eq!(get_children(0), vec![2, 1]);
    }

    #[test]
    fn test_ancestry() {
        reset();

        append_child(0, 1);
        append_child(1, 2);

        assert!(is_ancestor_or_self(0, 2));
        assert!(is_ancestor_or_self(2, 2));
        assert!(!is_ancestor_or_self(2, 0));
    }
}
