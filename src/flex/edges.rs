//! Edge setters: position insets, margins and padding.
//!
//! Every grouped setter fans out over a set of `Edges`. START and END are
//! stored as logical values and mapped to left/right at layout time, once
//! the view sits in its final hierarchy. Getters report physical edges
//! under the view's current resolved direction.

use taffy::Rect as TaffyRect;

use super::Flex;
use crate::engine::{LogicalEdges, get_node_style, resolved_layout_direction};
use crate::layout::convert::{from_taffy_lp, from_taffy_lpa, to_taffy_lp, to_taffy_lpa};
use crate::types::{DirectionalEdgeInsets, Dimension, Edge, EdgeInsets, Edges, Length};

fn set_edges<T: Copy>(rect: &mut TaffyRect<T>, logical: &mut LogicalEdges<T>, edges: Edges, value: T) {
    if edges.contains(Edges::TOP) {
        rect.top = value;
    }
    if edges.contains(Edges::LEFT) {
        rect.left = value;
    }
    if edges.contains(Edges::BOTTOM) {
        rect.bottom = value;
    }
    if edges.contains(Edges::RIGHT) {
        rect.right = value;
    }
    if edges.contains(Edges::START) {
        logical.start = Some(value);
    }
    if edges.contains(Edges::END) {
        logical.end = Some(value);
    }
}

fn get_edge<T: Copy>(rect: &TaffyRect<T>, edge: Edge) -> T {
    match edge {
        Edge::Top => rect.top,
        Edge::Left => rect.left,
        Edge::Bottom => rect.bottom,
        Edge::Right => rect.right,
    }
}

impl Flex {
    fn inset_at(self, op: &'static str, edges: Edges, value: Dimension) -> Self {
        let value = to_taffy_lpa(value);
        self.node_style(op, |ns| set_edges(&mut ns.style.inset, &mut ns.inset, edges, value))
    }

    fn margin_at(self, op: &'static str, edges: Edges, value: Dimension) -> Self {
        let value = to_taffy_lpa(value);
        self.node_style(op, |ns| set_edges(&mut ns.style.margin, &mut ns.margin, edges, value))
    }

    fn padding_at(self, op: &'static str, edges: Edges, value: Length) -> Self {
        let value = to_taffy_lp(value);
        self.node_style(op, |ns| set_edges(&mut ns.style.padding, &mut ns.padding, edges, value))
    }

    /// Style with start/end applied for the current hierarchy.
    fn resolved_style(self) -> taffy::Style {
        get_node_style(self.index()).resolve(resolved_layout_direction(self.index()))
    }

    // =========================================================================
    // Position insets
    // =========================================================================

    pub fn left(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("left", Edges::LEFT, value.into())
    }

    pub fn top(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("top", Edges::TOP, value.into())
    }

    pub fn right(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("right", Edges::RIGHT, value.into())
    }

    pub fn bottom(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("bottom", Edges::BOTTOM, value.into())
    }

    pub fn start(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("start", Edges::START, value.into())
    }

    pub fn end(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("end", Edges::END, value.into())
    }

    /// Left and right insets.
    pub fn horizontally(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("horizontally", Edges::HORIZONTAL, value.into())
    }

    /// Top and bottom insets.
    pub fn vertically(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("vertically", Edges::VERTICAL, value.into())
    }

    pub fn all(self, value: impl Into<Dimension>) -> Self {
        self.inset_at("all", Edges::ALL, value.into())
    }

    pub fn get_inset(self, edge: Edge) -> Dimension {
        from_taffy_lpa(get_edge(&self.resolved_style().inset, edge))
    }

    // =========================================================================
    // Margins
    // =========================================================================

    pub fn margin_top(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_top", Edges::TOP, value.into())
    }

    pub fn margin_left(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_left", Edges::LEFT, value.into())
    }

    pub fn margin_bottom(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_bottom", Edges::BOTTOM, value.into())
    }

    pub fn margin_right(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_right", Edges::RIGHT, value.into())
    }

    pub fn margin_start(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_start", Edges::START, value.into())
    }

    pub fn margin_end(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_end", Edges::END, value.into())
    }

    pub fn margin_horizontal(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_horizontal", Edges::HORIZONTAL, value.into())
    }

    pub fn margin_vertical(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin_vertical", Edges::VERTICAL, value.into())
    }

    /// Same margin on every edge.
    pub fn margin(self, value: impl Into<Dimension>) -> Self {
        self.margin_at("margin", Edges::ALL, value.into())
    }

    pub fn margin_vh(self, vertical: impl Into<Dimension>, horizontal: impl Into<Dimension>) -> Self {
        self.margin_vertical(vertical).margin_horizontal(horizontal)
    }

    pub fn margin_edges(
        self,
        top: impl Into<Dimension>,
        left: impl Into<Dimension>,
        bottom: impl Into<Dimension>,
        right: impl Into<Dimension>,
    ) -> Self {
        self.margin_top(top)
            .margin_left(left)
            .margin_bottom(bottom)
            .margin_right(right)
    }

    pub fn margin_insets(self, insets: EdgeInsets) -> Self {
        self.margin_edges(insets.top, insets.left, insets.bottom, insets.right)
    }

    /// Leading maps to start and trailing to end.
    pub fn margin_directional(self, insets: DirectionalEdgeInsets) -> Self {
        self.margin_top(insets.top)
            .margin_start(insets.leading)
            .margin_bottom(insets.bottom)
            .margin_end(insets.trailing)
    }

    pub fn get_margin(self, edge: Edge) -> Dimension {
        from_taffy_lpa(get_edge(&self.resolved_style().margin, edge))
    }

    // =========================================================================
    // Padding
    // =========================================================================

    pub fn padding_top(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_top", Edges::TOP, value.into())
    }

    pub fn padding_left(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_left", Edges::LEFT, value.into())
    }

    pub fn padding_bottom(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_bottom", Edges::BOTTOM, value.into())
    }

    pub fn padding_right(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_right", Edges::RIGHT, value.into())
    }

    pub fn padding_start(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_start", Edges::START, value.into())
    }

    pub fn padding_end(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_end", Edges::END, value.into())
    }

    pub fn padding_horizontal(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_horizontal", Edges::HORIZONTAL, value.into())
    }

    pub fn padding_vertical(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding_vertical", Edges::VERTICAL, value.into())
    }

    /// Same padding on every edge.
    pub fn padding(self, value: impl Into<Length>) -> Self {
        self.padding_at("padding", Edges::ALL, value.into())
    }

    pub fn padding_vh(self, vertical: impl Into<Length>, horizontal: impl Into<Length>) -> Self {
        self.padding_vertical(vertical).padding_horizontal(horizontal)
    }

    pub fn padding_edges(
        self,
        top: impl Into<Length>,
        left: impl Into<Length>,
        bottom: impl Into<Length>,
        right: impl Into<Length>,
    ) -> Self {
        self.padding_top(top)
            .padding_left(left)
            .padding_bottom(bottom)
            .padding_right(right)
    }

    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.padding_edges(insets.top, insets.left, insets.bottom, insets.right)
    }

    pub fn padding_directional(self, insets: DirectionalEdgeInsets) -> Self {
        self.padding_top(insets.top)
            .padding_start(insets.leading)
            .padding_bottom(insets.bottom)
            .padding_end(insets.trailing)
    }

    pub fn get_padding(self, edge: Edge) -> Length {
        from_taffy_lp(get_edge(&self.resolved_style().padding, edge))
    }
}
