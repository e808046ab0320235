//! Conversions between spark-flex values and Taffy style values.
//!
//! Percentages are 0-100 on our side and 0.0-1.0 on Taffy's.

use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems,
    AlignSelf as TaffyAlignSelf, Dimension as TaffyDimension, Display as TaffyDisplay,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto,
    Overflow as TaffyOverflow, Position as TaffyPosition,
};

use crate::types::{
    AlignContent, AlignItems, AlignSelf, Dimension, Display, FlexDirection, FlexWrap,
    JustifyContent, Length, Overflow, Position,
};

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

pub(crate) fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Points(v) => TaffyDimension::Length(v),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

pub(crate) fn from_taffy_dimension(dim: TaffyDimension) -> Dimension {
    match dim {
        TaffyDimension::Auto => Dimension::Auto,
        TaffyDimension::Length(v) => Dimension::Points(v),
        TaffyDimension::Percent(p) => Dimension::Percent(p * 100.0),
    }
}

pub(crate) fn to_taffy_lpa(dim: Dimension) -> LengthPercentageAuto {
    match dim {
        Dimension::Auto => LengthPercentageAuto::Auto,
        Dimension::Points(v) => LengthPercentageAuto::Length(v),
        Dimension::Percent(p) => LengthPercentageAuto::Percent(p / 100.0),
    }
}

pub(crate) fn from_taffy_lpa(value: LengthPercentageAuto) -> Dimension {
    match value {
        LengthPercentageAuto::Auto => Dimension::Auto,
        LengthPercentageAuto::Length(v) => Dimension::Points(v),
        LengthPercentageAuto::Percent(p) => Dimension::Percent(p * 100.0),
    }
}

pub(crate) fn to_taffy_lp(length: Length) -> LengthPercentage {
    match length {
        Length::Points(v) => LengthPercentage::Length(v),
        Length::Percent(p) => LengthPercentage::Percent(p / 100.0),
    }
}

pub(crate) fn from_taffy_lp(value: LengthPercentage) -> Length {
    match value {
        LengthPercentage::Length(v) => Length::Points(v),
        LengthPercentage::Percent(p) => Length::Percent(p * 100.0),
    }
}

/// Resolve a margin against the containing block width (auto counts as 0).
pub(crate) fn resolve_lpa(value: LengthPercentageAuto, basis: f32) -> f32 {
    match value {
        LengthPercentageAuto::Auto => 0.0,
        LengthPercentageAuto::Length(v) => v,
        LengthPercentageAuto::Percent(p) => p * basis,
    }
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

pub(crate) fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

pub(crate) fn from_taffy_flex_direction(dir: TaffyFlexDirection) -> FlexDirection {
    match dir {
        TaffyFlexDirection::Column => FlexDirection::Column,
        TaffyFlexDirection::ColumnReverse => FlexDirection::ColumnReverse,
        TaffyFlexDirection::Row => FlexDirection::Row,
        TaffyFlexDirection::RowReverse => FlexDirection::RowReverse,
    }
}

pub(crate) fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

pub(crate) fn from_taffy_flex_wrap(wrap: TaffyFlexWrap) -> FlexWrap {
    match wrap {
        TaffyFlexWrap::NoWrap => FlexWrap::NoWrap,
        TaffyFlexWrap::Wrap => FlexWrap::Wrap,
        TaffyFlexWrap::WrapReverse => FlexWrap::WrapReverse,
    }
}

pub(crate) fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::Start => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::End => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    })
}

pub(crate) fn from_taffy_justify_content(justify: Option<TaffyJustifyContent>) -> JustifyContent {
    match justify {
        Some(TaffyJustifyContent::Center) => JustifyContent::Center,
        Some(TaffyJustifyContent::FlexEnd | TaffyJustifyContent::End) => JustifyContent::End,
        Some(TaffyJustifyContent::SpaceBetween) => JustifyContent::SpaceBetween,
        Some(TaffyJustifyContent::SpaceAround) => JustifyContent::SpaceAround,
        Some(TaffyJustifyContent::SpaceEvenly) => JustifyContent::SpaceEvenly,
        _ => JustifyContent::Start,
    }
}

pub(crate) fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::Start => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::End => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    })
}

pub(crate) fn from_taffy_align_items(align: Option<TaffyAlignItems>) -> AlignItems {
    match align {
        Some(TaffyAlignItems::FlexStart | TaffyAlignItems::Start) => AlignItems::Start,
        Some(TaffyAlignItems::Center) => AlignItems::Center,
        Some(TaffyAlignItems::FlexEnd | TaffyAlignItems::End) => AlignItems::End,
        Some(TaffyAlignItems::Baseline) => AlignItems::Baseline,
        _ => AlignItems::Stretch,
    }
}

pub(crate) fn to_taffy_align_self(align: AlignSelf) -> Option<TaffyAlignSelf> {
    match align {
        AlignSelf::Auto => None,
        AlignSelf::Stretch => Some(TaffyAlignSelf::Stretch),
        AlignSelf::Start => Some(TaffyAlignSelf::FlexStart),
        AlignSelf::Center => Some(TaffyAlignSelf::Center),
        AlignSelf::End => Some(TaffyAlignSelf::FlexEnd),
        AlignSelf::Baseline => Some(TaffyAlignSelf::Baseline),
    }
}

pub(crate) fn from_taffy_align_self(align: Option<TaffyAlignSelf>) -> AlignSelf {
    match align {
        None => AlignSelf::Auto,
        Some(TaffyAlignSelf::Stretch) => AlignSelf::Stretch,
        Some(TaffyAlignSelf::FlexStart | TaffyAlignSelf::Start) => AlignSelf::Start,
        Some(TaffyAlignSelf::Center) => AlignSelf::Center,
        Some(TaffyAlignSelf::FlexEnd | TaffyAlignSelf::End) => AlignSelf::End,
        Some(TaffyAlignSelf::Baseline) => AlignSelf::Baseline,
    }
}

pub(crate) fn to_taffy_align_content(align: AlignContent) -> Option<TaffyAlignContent> {
    Some(match align {
        AlignContent::Stretch => TaffyAlignContent::Stretch,
        AlignContent::Start => TaffyAlignContent::FlexStart,
        AlignContent::Center => TaffyAlignContent::Center,
        AlignContent::End => TaffyAlignContent::FlexEnd,
        AlignContent::SpaceBetween => TaffyAlignContent::SpaceBetween,
        AlignContent::SpaceAround => TaffyAlignContent::SpaceAround,
    })
}

pub(crate) fn to_taffy_overflow(overflow: Overflow) -> TaffyOverflow {
    match overflow {
        Overflow::Visible => TaffyOverflow::Visible,
        Overflow::Hidden => TaffyOverflow::Hidden,
        Overflow::Scroll => TaffyOverflow::Scroll,
    }
}

pub(crate) fn to_taffy_position(position: Position) -> TaffyPosition {
    match position {
        Position::Relative => TaffyPosition::Relative,
        Position::Absolute => TaffyPosition::Absolute,
    }
}

pub(crate) fn from_taffy_position(position: TaffyPosition) -> Position {
    match position {
        TaffyPosition::Relative => Position::Relative,
        TaffyPosition::Absolute => Position::Absolute,
    }
}

pub(crate) fn to_taffy_display(display: Display) -> TaffyDisplay {
    match display {
        Display::Flex => TaffyDisplay::Flex,
        Display::None => TaffyDisplay::None,
    }
}

pub(crate) fn from_taffy_display(display: TaffyDisplay) -> Display {
    match display {
        TaffyDisplay::None => Display::None,
        _ => Display::Flex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_conversion() {
        assert!(matches!(to_taffy_dimension(Dimension::Auto), TaffyDimension::Auto));
        assert!(matches!(to_taffy_dimension(Dimension::Points(50.0)), TaffyDimension::Length(50.0)));
        if let TaffyDimension::Percent(p) = to_taffy_dimension(Dimension::Percent(50.0)) {
            assert!((p - 0.5).abs() < 0.001);
        } else {
            panic!("Expected Percent variant");
        }
    }

    #[test]
    fn test_percent_reads_back_on_our_scale() {
        let back = from_taffy_lpa(to_taffy_lpa(Dimension::Percent(25.0)));
        match back {
            Dimension::Percent(p) => assert!((p - 25.0).abs() < 0.001),
            other => panic!("Expected Percent, got {other:?}"),
        }
        assert_eq!(from_taffy_lp(to_taffy_lp(Length::Points(3.0))), Length::Points(3.0));
    }

    #[test]
    fn test_resolve_margin() {
        assert_eq!(resolve_lpa(LengthPercentageAuto::Length(8.0), 100.0), 8.0);
        assert_eq!(resolve_lpa(LengthPercentageAuto::Percent(0.1), 200.0), 20.0);
        assert_eq!(resolve_lpa(LengthPercentageAuto::Auto, 200.0), 0.0);
    }

    #[test]
    fn test_align_self_auto_inherits() {
        assert_eq!(to_taffy_align_self(AlignSelf::Auto), None);
        assert_eq!(from_taffy_align_self(None), AlignSelf::Auto);
        assert_eq!(from_taffy_align_self(to_taffy_align_self(AlignSelf::Center)), AlignSelf::Center);
    }
}
