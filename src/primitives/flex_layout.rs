//! FlexLayout - a container view built from a child description.
//!
//! Building a container is one pass:
//! 1. Flatten the child description
//! 2. Append each child as a subview, in order
//! 3. Set the container's main-axis direction
//!
//! # Example
//!
//! ```
//! use spark_flex::{Direction, FlexDirection, FlexLayout, View, nodes};
//!
//! let title = View::new();
//! let detail = View::new();
//!
//! let row = FlexLayout::new(Direction::Horizontal, nodes![title, detail]).unwrap();
//! assert_eq!(row.view().subviews(), vec![title, detail]);
//! assert_eq!(row.flex().get_direction(), FlexDirection::Row);
//! ```
//!
//! A `FlexLayout` is itself a node, so containers nest inside descriptions.

use crate::error::FlexResult;
use crate::flex::Flex;
use crate::types::FlexDirection;
use crate::view::View;

use super::node::LayoutNode;

/// Append `children` to `container` in order.
///
/// Errors from the view hierarchy are returned unchanged; children
/// appended before the failing one stay attached.
fn attach(container: View, children: &[View]) -> FlexResult<Flex> {
    let flex = container.flex();
    for &child in children {
        flex.add_item_view(child)?;
    }
    tracing::debug!(
        container = container.index(),
        children = children.len(),
        "children attached"
    );
    Ok(flex)
}

/// A container view with its children attached and its direction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexLayout {
    view: View,
}

impl FlexLayout {
    /// Build a fresh container view.
    pub fn new(
        direction: impl Into<FlexDirection>,
        children: impl Into<LayoutNode>,
    ) -> FlexResult<Self> {
        Self::with_background(direction, View::new(), children)
    }

    /// Build into an existing view, which becomes the container.
    pub fn with_background(
        direction: impl Into<FlexDirection>,
        background: View,
        children: impl Into<LayoutNode>,
    ) -> FlexResult<Self> {
        let flex = background.build(children)?;
        flex.direction(direction.into());
        Ok(Self { view: background })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn flex(&self) -> Flex {
        self.view.flex()
    }
}

impl From<FlexLayout> for LayoutNode {
    fn from(layout: FlexLayout) -> Self {
        LayoutNode::Leaf(layout.view)
    }
}

impl Flex {
    /// Append the flattened `children` to this container. The direction is
    /// left untouched.
    pub fn build(self, children: impl Into<LayoutNode>) -> FlexResult<Self> {
        attach(self.view(), &children.into().flatten())
    }
}

impl View {
    /// Append the flattened `children` to this view and return its flex
    /// handle.
    pub fn build(self, children: impl Into<LayoutNode>) -> FlexResult<Flex> {
        self.flex().build(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::error::FlexError;
    use crate::nodes;
    use crate::primitives::when;
    use crate::types::Direction;

    #[test]
    fn test_attach_order_matches_flatten() {
        reset_registry();

        let a = View::new();
        let b = View::new();
        let c = View::new();
        let description = nodes![a, nodes![b, when(false, View::new)], c];
        let expected = description.flatten();

        let layout = FlexLayout::new(Direction::Vertical, description).unwrap();

        assert_eq!(layout.view().subviews(), expected);
        assert_eq!(layout.flex().get_direction(), FlexDirection::Column);
    }

    #[test]
    fn test_empty_description() {
        reset_registry();

        let layout = FlexLayout::new(Direction::Horizontal, nodes![]).unwrap();
        assert!(layout.view().subviews().is_empty());
        assert_eq!(layout.flex().get_direction(), FlexDirection::Row);
    }

    #[test]
    fn test_with_background_uses_given_view() {
        reset_registry();

        let card = View::new();
        let label = View::new();
        let layout = FlexLayout::with_background(FlexDirection::RowReverse, card, nodes![label]).unwrap();

        assert_eq!(layout.view(), card);
        assert_eq!(label.superview(), Some(card));
        assert_eq!(card.flex().get_direction(), FlexDirection::RowReverse);
    }

    #[test]
    fn test_nested_layouts() {
        reset_registry();

        let leaf = View::new();
        let inner = FlexLayout::new(Direction::Horizontal, nodes![leaf]).unwrap();
        let outer = FlexLayout::new(Direction::Vertical, nodes![inner]).unwrap();

        assert_eq!(outer.view().subviews(), vec![inner.view()]);
        assert_eq!(leaf.superview(), Some(inner.view()));
    }

    #[test]
    fn test_view_build_keeps_direction() {
        reset_registry();

        let root = View::new();
        root.flex().direction(FlexDirection::Row);
        let child = View::new();

        let flex = root.build(nodes![child]).unwrap();
        assert_eq!(flex.get_direction(), FlexDirection::Row);
        assert_eq!(root.subviews(), vec![child]);
    }

    #[test]
    fn test_attach_failure_is_returned() {
        reset_registry();

        let root = View::new();
        let gone = View::new();
        gone.release();

        let result = root.build(nodes![gone]);
        assert!(matches!(result, Err(FlexError::UnknownView(_))));
    }
}
