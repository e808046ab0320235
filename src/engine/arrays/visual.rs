//! Visual Arrays - what the host toolkit knows about each view.
//!
//! - frame: rect in superview coordinates, written by layout
//! - background: fill color
//! - image: image content (image views only)
//! - intrinsic_size: content size for leaves without an image
//! - safe_area: insets reported by the host

use std::cell::RefCell;

use super::ViewArray;
use crate::engine::assets::Image;
use crate::types::{EdgeInsets, Rect, Rgba, Size};

thread_local! {
    static FRAME: RefCell<ViewArray<Rect>> = const { RefCell::new(ViewArray::new(Rect::ZERO)) };
    static BACKGROUND: RefCell<ViewArray<Option<Rgba>>> = const { RefCell::new(ViewArray::new(None)) };
    static IMAGE: RefCell<ViewArray<Option<Image>>> = const { RefCell::new(ViewArray::new(None)) };
    static INTRINSIC_SIZE: RefCell<ViewArray<Option<Size>>> = const { RefCell::new(ViewArray::new(None)) };
    static SAFE_AREA: RefCell<ViewArray<EdgeInsets>> = const { RefCell::new(ViewArray::new(EdgeInsets::ZERO)) };
}

pub fn ensure_capacity(index: usize) {
    FRAME.with(|arr| arr.borrow_mut().ensure(index));
    BACKGROUND.with(|arr| arr.borrow_mut().ensure(index));
    IMAGE.with(|arr| arr.borrow_mut().ensure(index));
    INTRINSIC_SIZE.with(|arr| arr.borrow_mut().ensure(index));
    SAFE_AREA.with(|arr| arr.borrow_mut().ensure(index));
}

pub fn clear_at_index(index: usize) {
    FRAME.with(|arr| arr.borrow_mut().clear(index));
    BACKGROUND.with(|arr| arr.borrow_mut().clear(index));
    IMAGE.with(|arr| arr.borrow_mut().clear(index));
    INTRINSIC_SIZE.with(|arr| arr.borrow_mut().clear(index));
    SAFE_AREA.with(|arr| arr.borrow_mut().clear(index));
}

pub fn reset() {
    FRAME.with(|arr| arr.borrow_mut().clear_all());
    BACKGROUND.with(|arr| arr.borrow_mut().clear_all());
    IMAGE.with(|arr| arr.borrow_mut().clear_all());
    INTRINSIC_SIZE.with(|arr| arr.borrow_mut().clear_all());
    SAFE_AREA.with(|arr| arr.borrow_mut().clear_all());
}

// =============================================================================
// Frame
// =============================================================================

pub fn get_frame(index: usize) -> Rect {
    FRAME.with(|arr| arr.borrow().get(index))
}

pub fn set_frame(index: usize, frame: Rect) {
    FRAME.with(|arr| arr.borrow_mut().set(index, frame));
}

// =============================================================================
// Background
// =============================================================================

pub fn get_background(index: usize) -> Option<Rgba> {
    BACKGROUND.with(|arr| arr.borrow().get(index))
}

pub fn set_background(index: usize, color: Option<Rgba>) {
    BACKGROUND.with(|arr| arr.borrow_mut().set(index, color));
}

// =============================================================================
// Content
// =============================================================================

pub fn get_image(index: usize) -> Option<Image> {
    IMAGE.with(|arr| arr.borrow().get(index))
}

pub fn set_image(index: usize, image: Option<Image>) {
    IMAGE.with(|arr| arr.borrow_mut().set(index, image));
}

pub fn set_intrinsic_size(index: usize, size: Option<Size>) {
    INTRINSIC_SIZE.with(|arr| arr.borrow_mut().set(index, size));
}

/// Content size used to measure a leaf: the image size wins over an
/// explicitly set intrinsic size.
pub fn get_content_size(index: usize) -> Option<Size> {
    get_image(index)
        .map(|image| image.size)
        .or_else(|| INTRINSIC_SIZE.with(|arr| arr.borrow().get(index)))
}

// =============================================================================
// Safe Area
// =============================================================================

pub fn get_safe_area(index: usize) -> EdgeInsets {
    SAFE_AREA.with(|arr| arr.borrow().get(index))
}

pub fn set_safe_area(index: usize, insets: EdgeInsets) {
    SAFE_AREA.with(|arr| arr.borrow_mut().set(index, insets));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_size_prefers_image() {
        reset();

        set_intrinsic_size(0, Some(Size::new(10.0, 10.0)));
        assert_eq!(get_content_size(0), Some(Size::new(10.0, 10.0)));

        set_image(0, Some(Image::new(Size::new(67.0, 40.0))));
        assert_eq!(get_content_size(0), Some(Size::new(67.0, 40.0)));

        assert_eq!(get_content_size(1), None);
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        reset();

        set_frame(2, Rect::new(1.0, 2.0, 3.0, 4.0));
        set_background(2, Some(Rgba::RED));
        clear_at_index(2);

        assert_eq!(get_frame(2), Rect::ZERO);
        assert_eq!(get_background(2), None);
    }
}
