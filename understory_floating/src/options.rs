// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing configuration for a floating element.

use alloc::string::String;

use crate::middleware::{
    AutoPlacement, AvailableSize, Flip, Hide, HideStrategy, Offset, Pipeline, Shift,
};
use crate::placement::Placement;

/// Positioning options for one floating element.
///
/// The defaults are `bottom-start`, no gutter, flip on, everything else off.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingOptions {
    /// Requested placement.
    pub placement: Placement,
    /// Main-axis distance between anchor and floating element.
    pub gutter: f64,
    /// Move to the opposite side when the requested side clips.
    pub flip: bool,
    /// Slide along the cross axis to stay in the viewport.
    pub shift: bool,
    /// Choose the most visible of all placements.
    ///
    /// Takes precedence over [`flip`](Self::flip): when both are set, flip is not run.
    pub auto_placement: bool,
    /// Report available space in [`SizeData`](crate::SizeData).
    pub size: bool,
    /// Flag the element as hidden under this strategy.
    pub hide: Option<HideStrategy>,
    /// Opaque transform passed through to the surface unchanged.
    pub transform: Option<String>,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            placement: Placement::BottomStart,
            gutter: 0.0,
            flip: true,
            shift: false,
            auto_placement: false,
            size: false,
            hide: None,
            transform: None,
        }
    }
}

impl FloatingOptions {
    /// Set the requested placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the gutter.
    #[must_use]
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Enable or disable flipping.
    #[must_use]
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Enable or disable shifting.
    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Enable or disable auto placement.
    #[must_use]
    pub fn with_auto_placement(mut self, auto_placement: bool) -> Self {
        self.auto_placement = auto_placement;
        self
    }

    /// Enable or disable available-size reporting.
    #[must_use]
    pub fn with_size(mut self, size: bool) -> Self {
        self.size = size;
        self
    }

    /// Set the hide strategy.
    #[must_use]
    pub fn with_hide(mut self, hide: Option<HideStrategy>) -> Self {
        self.hide = hide;
        self
    }

    /// Set the pass-through transform.
    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Build the middleware pipeline these options describe.
    ///
    /// Order: offset, auto placement or flip, shift, size, hide.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        let mut pipeline = Pipeline::new().with(Offset::new(self.gutter));
        if self.auto_placement {
            pipeline.push(AutoPlacement);
        } else if self.flip {
            pipeline.push(Flip);
        }
        if self.shift {
            pipeline.push(Shift);
        }
        if self.size {
            pipeline.push(AvailableSize);
        }
        if let Some(strategy) = self.hide {
            pipeline.push(Hide::new(strategy));
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn defaults_offset_then_flip() {
        let pipeline = FloatingOptions::default().pipeline();
        assert_eq!(pipeline.names().collect::<Vec<_>>(), ["offset", "flip"]);
    }

    #[test]
    fn auto_placement_replaces_flip() {
        let pipeline = FloatingOptions::default()
            .with_auto_placement(true)
            .with_shift(true)
            .with_hide(Some(HideStrategy::Escaped))
            .pipeline();
        assert_eq!(
            pipeline.names().collect::<Vec<_>>(),
            ["offset", "auto_placement", "shift", "hide"]
        );
    }

    #[test]
    fn everything_off_leaves_only_the_offset() {
        let pipeline = FloatingOptions::default().with_flip(false).pipeline();
        assert_eq!(pipeline.len(), 1);
    }
}
