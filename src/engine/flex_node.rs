//! FlexNode - the layout attachment of one view.
//!
//! `FlexNode` ties a view index to its node in the taffy tree and keeps what
//! taffy has no field for: the writing direction and whether the view takes
//! part in layout at all.
//!
//! `NodeStyle` is what the caller set. Start/end edges stay logical there;
//! they become left/right only when layout knows the resolved writing
//! direction (see [`NodeStyle::resolve`]).

use taffy::{
    AlignContent, FlexDirection, LengthPercentage, LengthPercentageAuto, NodeId, Rect, Style,
};

use crate::types::LayoutDirection;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexNode {
    /// View index in the parallel arrays.
    pub index: usize,

    /// Node in the layout engine's tree.
    pub node: NodeId,

    /// Writing direction (Inherit defers to the superview).
    pub layout_direction: LayoutDirection,

    /// When false the view and its subtree are skipped by layout.
    pub included_in_layout: bool,
}

impl FlexNode {
    pub fn new(index: usize, node: NodeId) -> Self {
        Self {
            index,
            node,
            layout_direction: LayoutDirection::Inherit,
            included_in_layout: true,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Style of a fresh node: column, no shrinking, lines packed at the start.
pub fn default_style() -> Style {
    Style {
        flex_direction: FlexDirection::Column,
        flex_shrink: 0.0,
        align_content: Some(AlignContent::FlexStart),
        ..Style::default()
    }
}

/// Start and end values of one edge group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalEdges<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> Default for LogicalEdges<T> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

impl<T: Copy> LogicalEdges<T> {
    /// Write start/end onto the physical edges; they win over left/right.
    fn apply(&self, rect: &mut Rect<T>, rtl: bool) {
        let (start, end) = if rtl {
            (&mut rect.right, &mut rect.left)
        } else {
            (&mut rect.left, &mut rect.right)
        };
        if let Some(value) = self.start {
            *start = value;
        }
        if let Some(value) = self.end {
            *end = value;
        }
    }
}

/// Everything the caller set on a view's flex attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// Physical properties, as set.
    pub style: Style,
    pub margin: LogicalEdges<LengthPercentageAuto>,
    pub padding: LogicalEdges<LengthPercentage>,
    pub inset: LogicalEdges<LengthPercentageAuto>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            style: default_style(),
            margin: LogicalEdges::default(),
            padding: LogicalEdges::default(),
            inset: LogicalEdges::default(),
        }
    }
}

impl NodeStyle {
    /// The style taffy lays out under `direction`: start/end folded onto
    /// physical edges, and rows mirrored when the direction is RTL.
    ///
    /// `direction` must already be resolved; Inherit is treated as LTR.
    pub fn resolve(&self, direction: LayoutDirection) -> Style {
        let rtl = direction == LayoutDirection::Rtl;
        let mut style = self.style.clone();
        self.margin.apply(&mut style.margin, rtl);
        self.padding.apply(&mut style.padding, rtl);
        self.inset.apply(&mut style.inset, rtl);
        if rtl {
            style.flex_direction = match style.flex_direction {
                FlexDirection::Row => FlexDirection::RowReverse,
                FlexDirection::RowReverse => FlexDirection::Row,
                column => column,
            };
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_node_defaults() {
        let node = FlexNode::new(4, NodeId::from(0u64));
        assert_eq!(node.index, 4);
        assert_eq!(node.layout_direction, LayoutDirection::Inherit);
        assert!(node.included_in_layout);
    }

    #[test]
    fn test_default_style() {
        let style = default_style();
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.flex_shrink, 0.0);
        assert_eq!(style.align_content, Some(AlignContent::FlexStart));
    }

    #[test]
    fn test_resolve_start_end() {
        let mut node_style = NodeStyle::default();
        node_style.style.margin.left = LengthPercentageAuto::Length(1.0);
        node_style.margin.start = Some(LengthPercentageAuto::Length(5.0));
        node_style.padding.end = Some(LengthPercentage::Length(7.0));

        let ltr = node_style.resolve(LayoutDirection::Ltr);
        assert_eq!(ltr.margin.left, LengthPercentageAuto::Length(5.0));
        assert_eq!(ltr.padding.right, LengthPercentage::Length(7.0));

        let rtl = node_style.resolve(LayoutDirection::Rtl);
        assert_eq!(rtl.margin.left, LengthPercentageAuto::Length(1.0));
        assert_eq!(rtl.margin.right, LengthPercentageAuto::Length(5.0));
        assert_eq!(rtl.padding.left, LengthPercentage::Length(7.0));
    }

    #[test]
    fn test_resolve_mirrors_rows() {
        let mut node_style = NodeStyle::default();
        node_style.style.flex_direction = FlexDirection::Row;

        assert_eq!(node_style.resolve(LayoutDirection::Rtl).flex_direction, FlexDirection::RowReverse);
        assert_eq!(node_style.resolve(LayoutDirection::Ltr).flex_direction, FlexDirection::Row);

        node_style.style.flex_direction = FlexDirection::Column;
        assert_eq!(node_style.resolve(LayoutDirection::Rtl).flex_direction, FlexDirection::Column);
    }
}
