//! View handles - the host side of the builder.
//!
//! A `View` is a `Copy` handle to one index in the engine arrays. It offers
//! the small slice of a host toolkit the builder needs: subview membership,
//! frames, a background fill, image content and safe-area insets.

use crate::engine::{self, Image, allocate_index, arrays, is_allocated, release_index};
use crate::error::{FlexError, FlexResult};
use crate::flex::Flex;
use crate::types::{EdgeInsets, Rect, Rgba, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    index: usize,
}

impl View {
    /// Allocate a new, detached view.
    pub fn new() -> Self {
        Self {
            index: allocate_index(None),
        }
    }

    /// Allocate a view under a stable ID (returns the existing view if the
    /// ID is taken).
    pub fn with_id(id: &str) -> Self {
        Self {
            index: allocate_index(Some(id)),
        }
    }

    /// Allocate an image view showing `image`.
    pub fn image(image: Image) -> Self {
        let view = Self::new();
        arrays::visual::set_image(view.index, Some(image));
        view
    }

    /// Allocate an image view for a named asset. A missing asset yields an
    /// image view without an image.
    pub fn image_named(name: &str) -> Self {
        let view = Self::new();
        arrays::visual::set_image(view.index, engine::image_named(name));
        view
    }

    /// Look up a view by ID.
    pub fn find(id: &str) -> Option<Self> {
        engine::get_index(id).map(|index| Self { index })
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Option<String> {
        engine::get_id(self.index)
    }

    pub fn is_alive(&self) -> bool {
        is_allocated(self.index)
    }

    fn ensure_alive(&self) -> FlexResult<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(FlexError::UnknownView(self.index))
        }
    }

    /// The layout attachment of this view.
    pub fn flex(self) -> Flex {
        Flex::from(self)
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Append `child` as the last subview. A child that already has a
    /// superview is moved.
    pub fn add_subview(&self, child: View) -> FlexResult<()> {
        self.ensure_alive()?;
        child.ensure_alive()?;
        if arrays::core::is_ancestor_or_self(child.index, self.index) {
            return Err(FlexError::Cycle {
                parent: self.index,
                child: child.index,
            });
        }
        arrays::core::append_child(self.index, child.index);
        Ok(())
    }

    pub fn remove_from_superview(&self) {
        arrays::core::detach(self.index);
    }

    pub fn superview(&self) -> Option<View> {
        arrays::core::get_parent_index(self.index).map(Self::from_index)
    }

    pub fn subviews(&self) -> Vec<View> {
        arrays::core::get_children(self.index)
            .into_iter()
            .map(Self::from_index)
            .collect()
    }

    /// Release this view and all of its subviews.
    pub fn release(self) {
        release_index(self.index);
    }

    // =========================================================================
    // Geometry and content
    // =========================================================================

    pub fn frame(&self) -> Rect {
        arrays::visual::get_frame(self.index)
    }

    pub fn set_frame(&self, frame: Rect) {
        arrays::visual::set_frame(self.index, frame);
    }

    pub fn background(&self) -> Option<Rgba> {
        arrays::visual::get_background(self.index)
    }

    pub fn set_background(&self, color: Rgba) {
        arrays::visual::set_background(self.index, Some(color));
    }

    pub fn image_content(&self) -> Option<Image> {
        arrays::visual::get_image(self.index)
    }

    pub fn set_image_content(&self, image: Option<Image>) {
        arrays::visual::set_image(self.index, image);
    }

    /// Content size used when this view is measured as a leaf.
    pub fn set_intrinsic_size(&self, size: Size) {
        arrays::visual::set_intrinsic_size(self.index, Some(size));
    }

    pub fn safe_area_insets(&self) -> EdgeInsets {
        arrays::visual::get_safe_area(self.index)
    }

    pub fn set_safe_area_insets(&self, insets: EdgeInsets) {
        arrays::visual::set_safe_area(self.index, insets);
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
