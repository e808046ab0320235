//! Core types for spark-flex.
//!
//! Values, enums and geometry that flow from the builder into the layout
//! engine and back out as frames.

// =============================================================================
// Color
// =============================================================================

/// RGBA background fill with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Grayscale color from a white level and alpha, both in 0.0..=1.0.
    pub fn white(level: f32, alpha: f32) -> Self {
        let level = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(level, level, level, alpha)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);
    pub const DARK_GRAY: Self = Self::rgb(85, 85, 85);

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// ```
    /// use spark_flex::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
    /// assert_eq!(Rgba::from_hex("ff000080"), Some(Rgba::new(255, 0, 0, 128)));
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            Some((hex_digit(s[i])? << 4) | hex_digit(s[i + 1])?)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => Some(Self::rgb(
                hex_byte(bytes, 0)?,
                hex_byte(bytes, 2)?,
                hex_byte(bytes, 4)?,
            )),
            8 => Some(Self::new(
                hex_byte(bytes, 0)?,
                hex_byte(bytes, 2)?,
                hex_byte(bytes, 4)?,
                hex_byte(bytes, 6)?,
            )),
            _ => None,
        }
    }
}

// =============================================================================
// Dimension / Length
// =============================================================================

/// A size-like value: width, height, basis, margin or inset.
///
/// ```
/// use spark_flex::types::{Dimension, Percent};
///
/// let width: Dimension = 100.0.into();     // 100 points
/// let half = 50.percent();                 // 50% of the parent
/// let auto: Dimension = None::<f32>.into(); // engine decides
/// assert_eq!(width, Dimension::Points(100.0));
/// assert_eq!(half, Dimension::Percent(50.0));
/// assert_eq!(auto, Dimension::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Undefined; the layout engine resolves it.
    #[default]
    Auto,
    /// Absolute length in points.
    Points(f32),
    /// Percentage of the parent size (0-100).
    Percent(f32),
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Self::Points(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Self::Points(value as f32)
    }
}

impl From<Option<f32>> for Dimension {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(v) => Self::Points(v),
            None => Self::Auto,
        }
    }
}

impl From<Length> for Dimension {
    fn from(value: Length) -> Self {
        match value {
            Length::Points(v) => Self::Points(v),
            Length::Percent(p) => Self::Percent(p),
        }
    }
}

/// A length that cannot be `auto` (padding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Points(f32),
    Percent(f32),
}

impl Default for Length {
    fn default() -> Self {
        Self::Points(0.0)
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Self::Points(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Points(value as f32)
    }
}

/// Auto has no meaning for padding and counts as zero.
impl From<Dimension> for Length {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Auto => Self::Points(0.0),
            Dimension::Points(v) => Self::Points(v),
            Dimension::Percent(p) => Self::Percent(p),
        }
    }
}

/// Postfix-style percentage values: `50.percent()`.
pub trait Percent {
    fn percent(self) -> Dimension;
}

impl Percent for f32 {
    fn percent(self) -> Dimension {
        Dimension::Percent(self)
    }
}

impl Percent for i32 {
    fn percent(self) -> Dimension {
        Dimension::Percent(self as f32)
    }
}

// =============================================================================
// Geometry
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A view frame in its superview's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

/// Insets in physical edges (what a host reports as its safe area).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, left, bottom, right }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Insets in writing-direction edges (leading/trailing).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionalEdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl DirectionalEdgeInsets {
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self { top, leading, bottom, trailing }
    }
}

// =============================================================================
// Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// A set of box edges. Grouped setters fan out over these.
    ///
    /// START and END are writing-direction edges; they resolve to LEFT or
    /// RIGHT depending on the node's layout direction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
        const START = 1 << 4;
        const END = 1 << 5;

        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

/// A single physical edge, used for reading values back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

// =============================================================================
// Flex Enums
// =============================================================================

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

impl FlexDirection {
    /// Check if this is a row direction (Row or RowReverse).
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Check if this is a reverse direction (ColumnReverse or RowReverse).
    pub const fn is_reverse(&self) -> bool {
        matches!(self, Self::ColumnReverse | Self::RowReverse)
    }
}

/// Builder-level main axis: how a `FlexLayout` stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl From<Direction> for FlexDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Self::Column,
            Direction::Horizontal => Self::Row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Writing direction; decides which physical edge START and END map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    Start,
    Center,
    End,
    Baseline,
}

/// Align self (item override for align items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    Start,
    Center,
    End,
    Baseline,
}

/// Align content (multi-line cross axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignContent {
    #[default]
    Stretch,
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Flex,
    None,
}

// =============================================================================
// Layout Mode
// =============================================================================

/// How `Flex::layout` treats the root's current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Both width and height are fixed to the root frame.
    #[default]
    FitContainer,
    /// Height is fixed; width is measured from the content.
    AdjustWidth,
    /// Width is fixed; height is measured from the content.
    AdjustHeight,
}

// =============================================================================
// Tests
// =============================================================================
