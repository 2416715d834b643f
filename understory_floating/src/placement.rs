// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placements and the base geometry provider.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

/// Side of the anchor the floating element is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// To the right of the anchor.
    Right,
    /// Below the anchor.
    Bottom,
    /// To the left of the anchor.
    Left,
}

/// Axis in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal (`x`) axis.
    X,
    /// The vertical (`y`) axis.
    Y,
}

impl Side {
    /// The side across the anchor from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The main axis: the axis along which the floating element moves away from the anchor.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// Vector of length `distance` pointing away from the anchor on this side.
    #[must_use]
    pub fn outward(self, distance: f64) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -distance),
            Self::Bottom => Vec2::new(0.0, distance),
            Self::Left => Vec2::new(-distance, 0.0),
            Self::Right => Vec2::new(distance, 0.0),
        }
    }
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Alignment of the floating element along the cross axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align with the anchor's origin edge.
    Start,
    /// Center on the anchor.
    Center,
    /// Align with the anchor's far edge.
    End,
}

/// One of the twelve canonical side and alignment combinations.
///
/// A center-aligned placement carries the bare side name (`"top"`), the others
/// append the alignment (`"top-start"`, `"top-end"`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// `top`
    Top,
    /// `top-start`
    TopStart,
    /// `top-end`
    TopEnd,
    /// `right`
    Right,
    /// `right-start`
    RightStart,
    /// `right-end`
    RightEnd,
    /// `bottom`
    Bottom,
    /// `bottom-start`
    #[default]
    BottomStart,
    /// `bottom-end`
    BottomEnd,
    /// `left`
    Left,
    /// `left-start`
    LeftStart,
    /// `left-end`
    LeftEnd,
}

impl Placement {
    /// Every placement, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
    ];

    /// Combine a side and an alignment.
    #[must_use]
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Center) => Self::Top,
            (Side::Top, Alignment::Start) => Self::TopStart,
            (Side::Top, Alignment::End) => Self::TopEnd,
            (Side::Right, Alignment::Center) => Self::Right,
            (Side::Right, Alignment::Start) => Self::RightStart,
            (Side::Right, Alignment::End) => Self::RightEnd,
            (Side::Bottom, Alignment::Center) => Self::Bottom,
            (Side::Bottom, Alignment::Start) => Self::BottomStart,
            (Side::Bottom, Alignment::End) => Self::BottomEnd,
            (Side::Left, Alignment::Center) => Self::Left,
            (Side::Left, Alignment::Start) => Self::LeftStart,
            (Side::Left, Alignment::End) => Self::LeftEnd,
        }
    }

    /// Side component.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
        }
    }

    /// Alignment component.
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::Top | Self::Right | Self::Bottom | Self::Left => Alignment::Center,
            Self::TopStart | Self::RightStart | Self::BottomStart | Self::LeftStart => {
                Alignment::Start
            }
            Self::TopEnd | Self::RightEnd | Self::BottomEnd | Self::LeftEnd => Alignment::End,
        }
    }

    /// Same alignment on a different side.
    #[must_use]
    pub const fn with_side(self, side: Side) -> Self {
        Self::new(side, self.alignment())
    }

    /// Same alignment on the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.with_side(self.side().opposite())
    }

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placement name outside the twelve canonical values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid placement `{0}`")]
pub struct InvalidPlacement(pub String);

impl FromStr for Placement {
    type Err = InvalidPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| InvalidPlacement(s.to_string()))
    }
}

/// Compute the unadjusted position of a floating element.
///
/// The main-axis coordinate puts the floating element flush against the anchor
/// edge on the placement's side. The cross-axis coordinate aligns the floating
/// element with the anchor's origin, midpoint, or far edge.
///
/// The returned point is the floating element's top-left corner.
#[must_use]
pub fn compute_base_position(anchor: Rect, floating: Size, placement: Placement) -> Point {
    let side = placement.side();
    let main = match side {
        Side::Top => anchor.y0 - floating.height,
        Side::Bottom => anchor.y1,
        Side::Left => anchor.x0 - floating.width,
        Side::Right => anchor.x1,
    };
    let (start, end, extent) = match side.axis().cross() {
        Axis::X => (anchor.x0, anchor.x1, floating.width),
        Axis::Y => (anchor.y0, anchor.y1, floating.height),
    };
    let cross = match placement.alignment() {
        Alignment::Start => start,
        Alignment::Center => (start + end) * 0.5 - extent * 0.5,
        Alignment::End => end - extent,
    };
    match side.axis() {
        Axis::Y => Point::new(cross, main),
        Axis::X => Point::new(main, cross),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::from_origin_size((100.0, 200.0), (40.0, 20.0))
    }

    const FLOATING: Size = Size::new(60.0, 30.0);

    #[test]
    fn main_axis_is_flush_with_the_anchor_edge() {
        let a = anchor();
        for placement in Placement::ALL {
            let p = compute_base_position(a, FLOATING, placement);
            match placement.side() {
                Side::Top => assert_eq!(p.y + FLOATING.height, a.y0, "{placement}"),
                Side::Bottom => assert_eq!(p.y, a.y1, "{placement}"),
                Side::Left => assert_eq!(p.x + FLOATING.width, a.x0, "{placement}"),
                Side::Right => assert_eq!(p.x, a.x1, "{placement}"),
            }
        }
    }

    #[test]
    fn cross_axis_follows_alignment() {
        let a = anchor();
        for placement in Placement::ALL {
            let p = compute_base_position(a, FLOATING, placement);
            let (pos, extent, start, end) = match placement.side().axis() {
                Axis::Y => (p.x, FLOATING.width, a.x0, a.x1),
                Axis::X => (p.y, FLOATING.height, a.y0, a.y1),
            };
            match placement.alignment() {
                Alignment::Start => assert_eq!(pos, start, "{placement}"),
                Alignment::Center => {
                    assert_eq!(pos + extent / 2.0, (start + end) / 2.0, "{placement}");
                }
                Alignment::End => assert_eq!(pos + extent, end, "{placement}"),
            }
        }
    }

    #[test]
    fn bottom_start_sits_under_the_anchor_origin() {
        let a = anchor();
        let p = compute_base_position(a, FLOATING, Placement::BottomStart);
        assert_eq!(p, Point::new(a.x0, a.y0 + a.height()));
    }

    #[test]
    fn names_round_trip_and_reject_unknown_values() {
        for placement in Placement::ALL {
            assert_eq!(placement.as_str().parse::<Placement>(), Ok(placement));
        }
        assert_eq!(
            "middle".parse::<Placement>(),
            Err(InvalidPlacement("middle".into()))
        );
        assert!("Bottom-Start".parse::<Placement>().is_err());
    }

    #[test]
    fn opposite_keeps_alignment() {
        assert_eq!(Placement::TopEnd.opposite(), Placement::BottomEnd);
        assert_eq!(Placement::Left.opposite(), Placement::Right);
        assert_eq!(Placement::RightStart.opposite(), Placement::LeftStart);
    }
}
