//! Image assets looked up by name.
//!
//! The host toolkit owns decoding; spark-flex only needs an image's pixel
//! size to derive an aspect ratio or measure an image view.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::Size;

/// Image content of an image view.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub name: Option<String>,
    pub size: Size,
}

impl Image {
    pub fn new(size: Size) -> Self {
        Self { name: None, size }
    }

    /// Width over height, or None for a degenerate image.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.size.height > 0.0).then(|| self.size.width / self.size.height)
    }
}

thread_local! {
    static IMAGES: RefCell<HashMap<String, Size>> = RefCell::new(HashMap::new());
}

/// Register a named image asset.
pub fn register_image(name: impl Into<String>, size: Size) {
    IMAGES.with(|images| {
        images.borrow_mut().insert(name.into(), size);
    });
}

/// Look up a named image asset.
pub fn image_named(name: &str) -> Option<Image> {
    IMAGES.with(|images| {
        images.borrow().get(name).map(|&size| Image {
            name: Some(name.to_string()),
            size,
        })
    })
}

/// Forget all registered images (for testing).
pub fn reset_images() {
    IMAGES.with(|images| images.borrow_mut().clear());
}
