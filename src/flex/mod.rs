//! Flex - the layout attachment of a view.
//!
//! `Flex` is a `Copy` handle; every setter forwards one property to the
//! view's node in the layout engine and returns the same handle, so calls
//! chain:
//!
//! ```
//! use spark_flex::{Percent, View};
//!
//! let view = View::new();
//! view.flex().grow(1.0).shrink(1.0).width(100.percent()).margin_top(12.0);
//! assert_eq!(view.flex().get_grow(), 1.0);
//! ```
//!
//! Setters validate nothing; values the engine would reject or clamp are
//! handled by the engine. A setter called on a released view is ignored
//! and logged.

mod edges;

use taffy::Style;

use crate::engine::{
    self, NodeStyle, create_flex_node, get_flex_node, get_style, update_flex_node,
    update_node_style,
};
use crate::error::FlexResult;
use crate::layout::convert::*;
use crate::layout::{apply_layout, size_that_fits};
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Dimension, Display, FlexDirection, FlexWrap,
    JustifyContent, LayoutDirection, LayoutMode, Overflow, Position, Rgba, Size,
};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flex {
    view: View,
}

impl From<View> for Flex {
    fn from(view: View) -> Self {
        Self { view }
    }
}

impl Flex {
    /// The view this handle configures.
    pub fn view(self) -> View {
        self.view
    }

    fn index(self) -> usize {
        self.view.index()
    }

    /// Record one setter on this view's style.
    fn node_style(self, op: &'static str, f: impl FnOnce(&mut NodeStyle)) -> Self {
        if let Err(err) = update_node_style(self.index(), f) {
            tracing::warn!(view = self.index(), op, %err, "flex setter ignored");
        }
        self
    }

    fn style(self, op: &'static str, f: impl FnOnce(&mut Style)) -> Self {
        self.node_style(op, |node_style| f(&mut node_style.style))
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a new empty view as the last child of this container.
    pub fn add_item(self) -> FlexResult<Self> {
        self.add_item_view(View::new())
    }

    /// Append `view` as the last child of this container.
    pub fn add_item_view(self, view: View) -> FlexResult<Self> {
        self.view.add_subview(view)?;
        create_flex_node(view.index())?;
        Ok(self)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay out this container's subtree and assign frames.
    pub fn layout(self, mode: LayoutMode) -> FlexResult<()> {
        apply_layout(self.index(), mode)
    }

    /// Size this item would take when laid out in `size`.
    pub fn size_that_fits(self, size: Size) -> FlexResult<Size> {
        size_that_fits(self.index(), size)
    }

    /// Force the engine to recompute this item (propagates to the root).
    pub fn mark_dirty(self) -> Self {
        if let Err(err) = engine::mark_dirty(self.index()) {
            tracing::warn!(view = self.index(), %err, "mark_dirty ignored");
        }
        self
    }

    pub fn is_dirty(self) -> FlexResult<bool> {
        engine::is_dirty(self.index())
    }

    /// Include or exclude this view (and its subtree) from layout.
    pub fn included_in_layout(self, included: bool) -> Self {
        if let Err(err) = update_flex_node(self.index(), |node| node.included_in_layout = included) {
            tracing::warn!(view = self.index(), %err, "included_in_layout ignored");
        }
        self
    }

    pub fn is_included_in_layout(self) -> bool {
        get_flex_node(self.index()).is_none_or(|node| node.included_in_layout)
    }

    // =========================================================================
    // Container properties
    // =========================================================================

    /// Main axis of this container.
    pub fn direction(self, value: FlexDirection) -> Self {
        self.style("direction", |s| s.flex_direction = to_taffy_flex_direction(value))
    }

    pub fn wrap(self, value: FlexWrap) -> Self {
        self.style("wrap", |s| s.flex_wrap = to_taffy_flex_wrap(value))
    }

    /// Writing direction; decides where start/end edges land.
    /// Writing direction; start/end edges and rows follow it at layout time.
    pub fn layout_direction(self, value: LayoutDirection) -> Self {
        let result = update_flex_node(self.index(), |node| node.layout_direction = value)
            .and_then(|()| engine::mark_dirty(self.index()));
        if let Err(err) = result {
            tracing::warn!(view = self.index(), %err, "layout_direction ignored");
        }
        self
    }

    pub fn justify_content(self, value: JustifyContent) -> Self {
        self.style("justify_content", |s| s.justify_content = to_taffy_justify_content(value))
    }

    pub fn align_items(self, value: AlignItems) -> Self {
        self.style("align_items", |s| s.align_items = to_taffy_align_items(value))
    }

    pub fn align_content(self, value: AlignContent) -> Self {
        self.style("align_content", |s| s.align_content = to_taffy_align_content(value))
    }

    /// Overflow on both axes.
    pub fn overflow(self, value: Overflow) -> Self {
        let overflow = to_taffy_overflow(value);
        self.style("overflow", |s| {
            s.overflow.x = overflow;
            s.overflow.y = overflow;
        })
    }

    // =========================================================================
    // Item properties
    // =========================================================================

    pub fn align_self(self, value: AlignSelf) -> Self {
        self.style("align_self", |s| s.align_self = to_taffy_align_self(value))
    }

    pub fn grow(self, value: f32) -> Self {
        self.style("grow", |s| s.flex_grow = value)
    }

    pub fn shrink(self, value: f32) -> Self {
        self.style("shrink", |s| s.flex_shrink = value)
    }

    /// Initial main-axis size; `None` / `Dimension::Auto` resets it.
    pub fn basis(self, value: impl Into<Dimension>) -> Self {
        let basis = to_taffy_dimension(value.into());
        self.style("basis", |s| s.flex_basis = basis)
    }

    pub fn display(self, value: Display) -> Self {
        self.style("display", |s| s.display = to_taffy_display(value))
    }

    pub fn position(self, value: Position) -> Self {
        self.style("position", |s| s.position = to_taffy_position(value))
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    pub fn width(self, value: impl Into<Dimension>) -> Self {
        let width = to_taffy_dimension(value.into());
        self.style("width", |s| s.size.width = width)
    }

    pub fn height(self, value: impl Into<Dimension>) -> Self {
        let height = to_taffy_dimension(value.into());
        self.style("height", |s| s.size.height = height)
    }

    /// Same width and height.
    pub fn square(self, side: impl Into<Dimension>) -> Self {
        let side = to_taffy_dimension(side.into());
        self.style("square", |s| {
            s.size.width = side;
            s.size.height = side;
        })
    }

    /// Width and height from a size; `None` resets both to auto.
    pub fn size(self, size: Option<Size>) -> Self {
        let (width, height) = match size {
            Some(size) => (Dimension::Points(size.width), Dimension::Points(size.height)),
            None => (Dimension::Auto, Dimension::Auto),
        };
        self.width(width).height(height)
    }

    pub fn min_width(self, value: impl Into<Dimension>) -> Self {
        let value = to_taffy_dimension(value.into());
        self.style("min_width", |s| s.min_size.width = value)
    }

    pub fn max_width(self, value: impl Into<Dimension>) -> Self {
        let value = to_taffy_dimension(value.into());
        self.style("max_width", |s| s.max_size.width = value)
    }

    pub fn min_height(self, value: impl Into<Dimension>) -> Self {
        let value = to_taffy_dimension(value.into());
        self.style("min_height", |s| s.min_size.height = value)
    }

    pub fn max_height(self, value: impl Into<Dimension>) -> Self {
        let value = to_taffy_dimension(value.into());
        self.style("max_height", |s| s.max_size.height = value)
    }

    /// Width over height; `None` clears it.
    pub fn aspect_ratio(self, value: impl Into<Option<f32>>) -> Self {
        let ratio = value.into();
        self.style("aspect_ratio", |s| s.aspect_ratio = ratio)
    }

    /// Aspect ratio of an image view's image. No-op when the view shows
    /// no image.
    pub fn aspect_ratio_of(self, image_view: View) -> Self {
        match image_view.image_content().and_then(|image| image.aspect_ratio()) {
            Some(ratio) => self.aspect_ratio(ratio),
            None => self,
        }
    }

    // =========================================================================
    // Visual
    // =========================================================================

    pub fn background_color(self, color: Rgba) -> Self {
        self.view.set_background(color);
        self
    }

    // =========================================================================
    // Read back
    // =========================================================================

    pub fn get_direction(self) -> FlexDirection {
        from_taffy_flex_direction(get_style(self.index()).flex_direction)
    }

    pub fn get_wrap(self) -> FlexWrap {
        from_taffy_flex_wrap(get_style(self.index()).flex_wrap)
    }

    pub fn get_layout_direction(self) -> LayoutDirection {
        get_flex_node(self.index()).map_or(LayoutDirection::Inherit, |node| node.layout_direction)
    }

    pub fn get_justify_content(self) -> JustifyContent {
        from_taffy_justify_content(get_style(self.index()).justify_content)
    }

    pub fn get_align_items(self) -> AlignItems {
        from_taffy_align_items(get_style(self.index()).align_items)
    }

    pub fn get_align_self(self) -> AlignSelf {
        from_taffy_align_self(get_style(self.index()).align_self)
    }

    pub fn get_grow(self) -> f32 {
        get_style(self.index()).flex_grow
    }

    pub fn get_shrink(self) -> f32 {
        get_style(self.index()).flex_shrink
    }

    pub fn get_basis(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).flex_basis)
    }

    pub fn get_display(self) -> Display {
        from_taffy_display(get_style(self.index()).display)
    }

    pub fn get_position(self) -> Position {
        from_taffy_position(get_style(self.index()).position)
    }

    pub fn get_width(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).size.width)
    }

    pub fn get_height(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).size.height)
    }

    pub fn get_min_width(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).min_size.width)
    }

    pub fn get_max_width(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).max_size.width)
    }

    pub fn get_min_height(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).min_size.height)
    }

    pub fn get_max_height(self) -> Dimension {
        from_taffy_dimension(get_style(self.index()).max_size.height)
    }

    pub fn get_aspect_ratio(self) -> Option<f32> {
        get_style(self.index()).aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Image, reset_registry};
    use crate::types::Percent;

    #[test]
    fn test_fresh_view_defaults() {
        reset_registry();

        let flex = View::new().flex();
        assert_eq!(flex.get_direction(), FlexDirection::Column);
        assert_eq!(flex.get_shrink(), 0.0);
        assert_eq!(flex.get_grow(), 0.0);
        assert_eq!(flex.get_width(), Dimension::Auto);
    }

    #[test]
    fn test_setters_read_back() {
        reset_registry();

        let flex = View::new()
            .flex()
            .direction(FlexDirection::Row)
            .wrap(FlexWrap::Wrap)
            .justify_content(JustifyContent::SpaceBetween)
            .align_items(AlignItems::Center)
            .align_self(AlignSelf::End)
            .grow(1.0)
            .shrink(0.5)
            .basis(30.0)
            .display(Display::None)
            .position(Position::Absolute);

        assert_eq!(flex.get_direction(), FlexDirection::Row);
        assert_eq!(flex.get_wrap(), FlexWrap::Wrap);
        assert_eq!(flex.get_justify_content(), JustifyContent::SpaceBetween);
        assert_eq!(flex.get_align_items(), AlignItems::Center);
        assert_eq!(flex.get_align_self(), AlignSelf::End);
        assert_eq!(flex.get_grow(), 1.0);
        assert_eq!(flex.get_shrink(), 0.5);
        assert_eq!(flex.get_basis(), Dimension::Points(30.0));
        assert_eq!(flex.get_display(), Display::None);
        assert_eq!(flex.get_position(), Position::Absolute);
    }

    #[test]
    fn test_dimensions_read_back() {
        reset_registry();

        let flex = View::new()
            .flex()
            .width(100.percent())
            .height(55.0)
            .min_width(10)
            .max_width(None::<f32>)
            .min_height(5.0)
            .max_height(130.0);

        assert_eq!(flex.get_width(), Dimension::Percent(100.0));
        assert_eq!(flex.get_height(), Dimension::Points(55.0));
        assert_eq!(flex.get_min_width(), Dimension::Points(10.0));
        assert_eq!(flex.get_max_width(), Dimension::Auto);
        assert_eq!(flex.get_min_height(), Dimension::Points(5.0));
        assert_eq!(flex.get_max_height(), Dimension::Points(130.0));
    }

    #[test]
    fn test_size_helpers() {
        reset_registry();

        let square = View::new().flex().square(15.0);
        assert_eq!(square.get_width(), Dimension::Points(15.0));
        assert_eq!(square.get_height(), Dimension::Points(15.0));

        let sized = View::new().flex().size(Some(Size::new(3.0, 4.0)));
        assert_eq!(sized.get_width(), Dimension::Points(3.0));
        let cleared = sized.size(None);
        assert_eq!(cleared.get_height(), Dimension::Auto);
    }

    #[test]
    fn test_last_write_wins() {
        reset_registry();

        let flex = View::new().flex().width(40.0).width(50.percent());
        assert_eq!(flex.get_width(), Dimension::Percent(50.0));
    }

    #[test]
    fn test_aspect_ratio() {
        reset_registry();

        let flex = View::new().flex().aspect_ratio(67.0 / 40.0);
        assert_eq!(flex.get_aspect_ratio(), Some(67.0 / 40.0));
        assert_eq!(flex.aspect_ratio(None::<f32>).get_aspect_ratio(), None);
    }

    #[test]
    fn test_aspect_ratio_of_image_view() {
        reset_registry();

        let image_view = View::image(Image::new(Size::new(40.0, 20.0)));
        let flex = image_view.flex().width(100.0).aspect_ratio_of(image_view);
        assert_eq!(flex.get_aspect_ratio(), Some(2.0));
    }

    #[test]
    fn test_aspect_ratio_of_missing_image_is_noop() {
        reset_registry();

        let image_view = View::image_named("missing");
        let flex = View::new().flex().aspect_ratio(1.5).aspect_ratio_of(image_view);
        assert_eq!(flex.get_aspect_ratio(), Some(1.5));
    }

    #[test]
    fn test_background_color() {
        reset_registry();

        let view = View::new();
        view.flex().background_color(Rgba::PURPLE);
        assert_eq!(view.background(), Some(Rgba::PURPLE));
    }

    #[test]
    fn test_setter_on_released_view_is_ignored() {
        reset_registry();

        let view = View::new();
        let flex = view.flex();
        view.release();

        let same = flex.grow(3.0).width(10.0);
        assert_eq!(same, flex);
        assert_eq!(flex.get_grow(), 0.0);
    }

    #[test]
    fn test_included_in_layout() {
        reset_registry();

        let flex = View::new().flex();
        assert!(flex.is_included_in_layout());
        assert!(!flex.included_in_layout(false).is_included_in_layout());
    }

    #[test]
    fn test_mark_dirty_after_layout() {
        reset_registry();

        let root = View::new();
        root.set_frame(crate::types::Rect::new(0.0, 0.0, 10.0, 10.0));
        let child = View::new();
        root.flex().add_item_view(child).unwrap();
        root.flex().layout(LayoutMode::FitContainer).unwrap();
        assert!(!child.flex().is_dirty().unwrap());
        assert!(!root.flex().is_dirty().unwrap());

        child.flex().mark_dirty();
        assert!(child.flex().is_dirty().unwrap());
        assert!(root.flex().is_dirty().unwrap());
    }

    #[test]
    fn test_add_item() {
        reset_registry();

        let container = View::new().flex();
        let label = View::new();
        container.add_item().unwrap().add_item_view(label).unwrap();

        let children = container.view().subviews();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1], label);
    }
}
