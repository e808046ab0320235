//! Taffy Bridge - runs the layout engine over a view subtree.
//!
//! 1. Mirrors the host subtree into the Taffy tree (views excluded from
//!    layout are skipped together with their subviews), pushing each node's
//!    style resolved for its writing direction
//! 2. Pins the root's fixed axes the way a host container does: the root
//!    fills its frame minus its own margins
//! 3. Measures leaves from their host content size
//! 4. Writes the computed rects back into the host frames
//!
//! Styles reach Taffy only here, and only when they changed, so a pass over
//! an unchanged subtree leaves every node clean.

use taffy::{AvailableSpace, Dimension as TaffyDimension, NodeId, Size as TaffySize, Style};

use crate::engine::arrays::{core as core_arrays, visual};
use crate::engine::{
    FlexNode, create_flex_node, get_node_style, push_style, resolved_layout_direction, with_tree,
};
use crate::error::FlexResult;
use crate::types::{LayoutDirection, LayoutMode, Rect, Size};

use super::convert::resolve_lpa;

// =============================================================================
// TREE SYNC
// =============================================================================

/// Make the Taffy children of `index` match its included subviews, in order,
/// and push each subview's style resolved under the inherited `direction`.
fn sync_children(index: usize, direction: LayoutDirection) -> FlexResult<FlexNode> {
    let parent = create_flex_node(index)?;

    let mut nodes: Vec<NodeId> = Vec::new();
    for child in core_arrays::get_children(index) {
        let child_node = create_flex_node(child)?;
        if !child_node.included_in_layout {
            continue;
        }
        let child_direction = match child_node.layout_direction {
            LayoutDirection::Inherit => direction,
            explicit => explicit,
        };
        push_style(child_node.node, get_node_style(child).resolve(child_direction))?;
        sync_children(child, child_direction)?;
        nodes.push(child_node.node);
    }

    with_tree(|tree| -> FlexResult<()> {
        if tree.children(parent.node)? != nodes {
            tree.set_children(parent.node, &nodes)?;
        }
        Ok(())
    })?;

    Ok(parent)
}

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Measure a leaf from its host content size.
///
/// With one axis known and an aspect ratio set, the other axis follows the
/// ratio instead of the content.
fn measure_leaf(
    idx: usize,
    known_dimensions: TaffySize<Option<f32>>,
    aspect_ratio: Option<f32>,
) -> TaffySize<f32> {
    let ratio = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0);
    match (known_dimensions.width, known_dimensions.height, ratio) {
        (Some(width), None, Some(r)) => return TaffySize { width, height: width / r },
        (None, Some(height), Some(r)) => return TaffySize { width: height * r, height },
        _ => {}
    }

    let content = visual::get_content_size(idx).unwrap_or(Size::ZERO);
    TaffySize {
        width: known_dimensions.width.unwrap_or(content.width),
        height: known_dimensions.height.unwrap_or(content.height),
    }
}

// =============================================================================
// COMPUTE
// =============================================================================

/// Root style with every fixed axis pinned to `owner - margins`, unless the
/// root sets its own size on that axis.
fn pinned_root_style(resolved: &Style, width: Option<f32>, height: Option<f32>) -> Style {
    let mut style = resolved.clone();
    let basis = width.unwrap_or(0.0);

    if let Some(w) = width {
        if style.size.width == TaffyDimension::Auto {
            let margins = resolve_lpa(style.margin.left, basis) + resolve_lpa(style.margin.right, basis);
            style.size.width = TaffyDimension::Length((w - margins).max(0.0));
        }
    }
    if let Some(h) = height {
        if style.size.height == TaffyDimension::Auto {
            let margins = resolve_lpa(style.margin.top, basis) + resolve_lpa(style.margin.bottom, basis);
            style.size.height = TaffyDimension::Length((h - margins).max(0.0));
        }
    }
    style
}

/// Lay out the subtree rooted at `root` with the given fixed axes; `None`
/// means the axis is measured from content.
///
/// Returns the root node and the root style resolved for its direction
/// (before pinning).
fn compute(root: usize, width: Option<f32>, height: Option<f32>) -> FlexResult<(FlexNode, Style)> {
    let direction = resolved_layout_direction(root);
    let root_node = sync_children(root, direction)?;

    let resolved = get_node_style(root).resolve(direction);
    push_style(root_node.node, pinned_root_style(&resolved, width, height))?;

    let available = TaffySize {
        width: width.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
        height: height.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
    };

    let mut measure_fn = |known_dimensions: TaffySize<Option<f32>>,
                          _available_space: TaffySize<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          style: &Style| {
        match context {
            Some(&mut idx) => measure_leaf(idx, known_dimensions, style.aspect_ratio),
            None => TaffySize::ZERO,
        }
    };

    with_tree(|tree| tree.compute_layout_with_measure(root_node.node, available, &mut measure_fn))?;

    Ok((root_node, resolved))
}

/// Copy computed rects into host frames for every included descendant.
fn apply_child_frames(index: usize) -> FlexResult<()> {
    for child in core_arrays::get_children(index) {
        let child_node = create_flex_node(child)?;
        if !child_node.included_in_layout {
            continue;
        }
        let layout = with_tree(|tree| tree.layout(child_node.node).copied())?;
        visual::set_frame(
            child,
            Rect::new(
                layout.location.x,
                layout.location.y,
                layout.size.width,
                layout.size.height,
            ),
        );
        apply_child_frames(child)?;
    }
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINTS
// =============================================================================

/// Lay out the subtree rooted at `root` and assign every frame.
///
/// The root keeps its frame origin, shifted by its own margins; its size
/// comes from the computation. Callers reset the root frame before each
/// pass (typically to the container bounds).
#[tracing::instrument(level = "debug", skip_all, fields(root = root, mode = ?mode))]
pub fn apply_layout(root: usize, mode: LayoutMode) -> FlexResult<()> {
    let frame = visual::get_frame(root);
    let (width, height) = match mode {
        LayoutMode::FitContainer => (Some(frame.width()), Some(frame.height())),
        LayoutMode::AdjustWidth => (None, Some(frame.height())),
        LayoutMode::AdjustHeight => (Some(frame.width()), None),
    };

    let (root_node, style) = compute(root, width, height)?;

    let basis = width.unwrap_or(0.0);
    let layout = with_tree(|tree| tree.layout(root_node.node).copied())?;
    visual::set_frame(
        root,
        Rect::new(
            frame.origin.x + resolve_lpa(style.margin.left, basis),
            frame.origin.y + resolve_lpa(style.margin.top, basis),
            layout.size.width,
            layout.size.height,
        ),
    );
    apply_child_frames(root)?;

    tracing::debug!(
        width = layout.size.width,
        height = layout.size.height,
        "layout applied"
    );
    Ok(())
}

/// Size the subtree rooted at `root` would take inside `size`, without
/// touching any frame.
///
/// Axes that are infinite, NaN or `f32::MAX` are unbounded and measured
/// from content.
#[tracing::instrument(level = "debug", skip_all, fields(root = root))]
pub fn size_that_fits(root: usize, size: Size) -> FlexResult<Size> {
    let axis = |v: f32| (v.is_finite() && v < f32::MAX).then_some(v);
    let (root_node, _) = compute(root, axis(size.width), axis(size.height))?;
    let layout = with_tree(|tree| tree.layout(root_node.node).copied())?;
    Ok(Size::new(layout.size.width, layout.size.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        Image, get_style, is_dirty, reset_registry, update_flex_node, update_style,
    };
    use crate::view::View;
    use taffy::LengthPercentageAuto;

    fn setup() {
        reset_registry();
    }

    fn sized(view: View, width: f32, height: f32) {
        update_style(view.index(), |style| {
            style.size.width = TaffyDimension::Length(width);
            style.size.height = TaffyDimension::Length(height);
        })
        .unwrap();
    }

    #[test]
    fn test_fit_container_fills_frame() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 300.0, 200.0));

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(root.frame(), Rect::new(0.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn test_root_margins_shift_origin() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(10.0, 20.0, 300.0, 200.0));
        update_style(root.index(), |style| {
            style.margin.top = LengthPercentageAuto::Length(44.0);
            style.margin.left = LengthPercentageAuto::Length(4.0);
        })
        .unwrap();

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(root.frame(), Rect::new(14.0, 64.0, 296.0, 156.0));
    }

    #[test]
    fn test_column_children_stack() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = View::new();
        let b = View::new();
        root.add_subview(a).unwrap();
        root.add_subview(b).unwrap();
        sized(a, 40.0, 10.0);
        sized(b, 40.0, 30.0);

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(a.frame(), Rect::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(b.frame(), Rect::new(0.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn test_adjust_height_measures_content() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 999.0));
        let a = View::new();
        let b = View::new();
        root.add_subview(a).unwrap();
        root.add_subview(b).unwrap();
        sized(a, 10.0, 25.0);
        sized(b, 10.0, 35.0);

        apply_layout(root.index(), LayoutMode::AdjustHeight).unwrap();

        assert_eq!(root.frame().width(), 100.0);
        assert_eq!(root.frame().height(), 60.0);
    }

    #[test]
    fn test_adjust_width_measures_content() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 999.0, 50.0));
        update_style(root.index(), |style| {
            style.flex_direction = taffy::FlexDirection::Row;
        })
        .unwrap();
        let a = View::new();
        let b = View::new();
        root.add_subview(a).unwrap();
        root.add_subview(b).unwrap();
        sized(a, 20.0, 10.0);
        sized(b, 30.0, 10.0);

        apply_layout(root.index(), LayoutMode::AdjustWidth).unwrap();

        assert_eq!(root.frame().width(), 50.0);
        assert_eq!(root.frame().height(), 50.0);
        assert_eq!(b.frame().origin.x, 20.0);
    }

    #[test]
    fn test_excluded_view_keeps_frame() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
        let skipped = View::new();
        let kept = View::new();
        root.add_subview(skipped).unwrap();
        root.add_subview(kept).unwrap();
        sized(skipped, 10.0, 40.0);
        sized(kept, 10.0, 10.0);
        skipped.set_frame(Rect::new(5.0, 5.0, 1.0, 1.0));
        update_flex_node(skipped.index(), |node| node.included_in_layout = false).unwrap();

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(skipped.frame(), Rect::new(5.0, 5.0, 1.0, 1.0));
        assert_eq!(kept.frame().origin.y, 0.0);
    }

    #[test]
    fn test_leaf_measured_from_content() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 200.0, 200.0));
        update_style(root.index(), |style| {
            style.align_items = Some(taffy::AlignItems::FlexStart);
        })
        .unwrap();
        let label = View::new();
        label.set_intrinsic_size(Size::new(80.0, 17.0));
        root.add_subview(label).unwrap();

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(label.frame().size, Size::new(80.0, 17.0));
    }

    #[test]
    fn test_size_that_fits_leaves_frames_alone() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 1.0, 1.0));
        let a = View::new();
        root.add_subview(a).unwrap();
        sized(a, 10.0, 42.0);

        let size = size_that_fits(root.index(), Size::new(120.0, f32::INFINITY)).unwrap();

        assert_eq!(size, Size::new(120.0, 42.0));
        assert_eq!(root.frame(), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(a.frame(), Rect::ZERO);
    }

    #[test]
    fn test_size_that_fits_max_is_unbounded() {
        setup();

        let root = View::new();
        let a = View::new();
        root.add_subview(a).unwrap();
        sized(a, 10.0, 42.0);

        let size = size_that_fits(root.index(), Size::new(120.0, f32::MAX)).unwrap();

        assert_eq!(size, Size::new(120.0, 42.0));
    }

    #[test]
    fn test_layout_keeps_caller_style() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 300.0, 200.0));

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(get_style(root.index()).size.width, TaffyDimension::Auto);
    }

    #[test]
    fn test_root_clean_after_layout() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = View::new();
        root.add_subview(a).unwrap();
        sized(a, 10.0, 10.0);

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();
        assert!(!is_dirty(root.index()).unwrap());

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();
        assert!(!is_dirty(root.index()).unwrap());
        assert!(!is_dirty(a.index()).unwrap());

        sized(a, 10.0, 20.0);
        assert!(is_dirty(root.index()).unwrap());
    }

    #[test]
    fn test_rtl_row_runs_right_to_left() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 20.0));
        update_style(root.index(), |style| {
            style.flex_direction = taffy::FlexDirection::Row;
        })
        .unwrap();
        update_flex_node(root.index(), |node| node.layout_direction = LayoutDirection::Rtl).unwrap();
        let a = View::new();
        let b = View::new();
        root.add_subview(a).unwrap();
        root.add_subview(b).unwrap();
        sized(a, 10.0, 10.0);
        sized(b, 10.0, 10.0);

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(a.frame().origin.x, 90.0);
        assert_eq!(b.frame().origin.x, 80.0);
        assert_eq!(get_style(root.index()).flex_direction, taffy::FlexDirection::Row);
    }

    #[test]
    fn test_stretched_image_follows_aspect_ratio() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 335.0, 600.0));
        let poster = View::image(Image::new(Size::new(670.0, 400.0)));
        root.add_subview(poster).unwrap();
        update_style(poster.index(), |style| style.aspect_ratio = Some(670.0 / 400.0)).unwrap();

        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(poster.frame(), Rect::new(0.0, 0.0, 335.0, 200.0));
    }

    #[test]
    fn test_measure_leaf_uses_aspect_ratio() {
        setup();

        let leaf = View::new();
        leaf.set_intrinsic_size(Size::new(80.0, 17.0));

        let known_width = TaffySize { width: Some(100.0), height: None };
        assert_eq!(measure_leaf(leaf.index(), known_width, Some(2.0)), TaffySize { width: 100.0, height: 50.0 });

        let known_height = TaffySize { width: None, height: Some(10.0) };
        assert_eq!(measure_leaf(leaf.index(), known_height, Some(2.0)), TaffySize { width: 20.0, height: 10.0 });

        assert_eq!(measure_leaf(leaf.index(), known_width, None), TaffySize { width: 100.0, height: 17.0 });
    }

    #[test]
    fn test_moved_subview_follows_hierarchy() {
        setup();

        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
        let first = View::new();
        let second = View::new();
        let item = View::new();
        root.add_subview(first).unwrap();
        root.add_subview(second).unwrap();
        first.add_subview(item).unwrap();
        sized(item, 10.0, 10.0);
        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        second.add_subview(item).unwrap();
        apply_layout(root.index(), LayoutMode::FitContainer).unwrap();

        assert_eq!(first.frame().height(), 0.0);
        assert_eq!(second.frame().height(), 10.0);
    }
}
