// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host shared by the unit tests.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use understory_disclosure::{DisclosureHost, FocusCandidate};
use understory_floating::{FloatingEnv, FloatingStyle};

use crate::select::SelectHost;

#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) unmounted: bool,
    pub(crate) visible: bool,
    pub(crate) focused: Option<u32>,
    pub(crate) scroll_locked: bool,
    pub(crate) expanded: bool,
    pub(crate) trigger: Option<Rect>,
    pub(crate) content_origin: Point,
    pub(crate) content_size: Size,
    pub(crate) style: Option<FloatingStyle>,
    pub(crate) active_descendant: Option<u32>,
    pub(crate) selected_options: Vec<u32>,
}

impl TestHost {
    pub(crate) const TRIGGER: u32 = 1;
    pub(crate) const CONTAINER: u32 = 2;
    pub(crate) const FIRST_CONTROL: u32 = 3;

    pub(crate) fn new() -> Self {
        Self {
            unmounted: false,
            visible: false,
            focused: Some(Self::TRIGGER),
            scroll_locked: false,
            expanded: false,
            trigger: Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
            content_origin: Point::new(200.0, 200.0),
            content_size: Size::new(100.0, 80.0),
            style: None,
            active_descendant: None,
            selected_options: Vec::new(),
        }
    }

    fn content_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_origin, self.content_size)
    }
}

impl DisclosureHost<u32> for TestHost {
    fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn focused(&self) -> Option<u32> {
        self.focused
    }

    fn focus(&mut self, target: u32) {
        self.focused = Some(target);
    }

    fn container(&self) -> Option<u32> {
        Some(Self::CONTAINER)
    }

    fn focus_candidates(&self) -> Vec<FocusCandidate<u32>> {
        let first = Rect::from_origin_size(self.content_origin, Size::new(40.0, 20.0));
        vec![FocusCandidate::new(Self::FIRST_CONTROL, first)]
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.visible.then(|| self.content_rect())
    }

    fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger
    }
}

impl FloatingEnv for TestHost {
    fn reference_rect(&self) -> Option<Rect> {
        self.trigger
    }

    fn floating_size(&self) -> Option<Size> {
        Some(self.content_size)
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn write_style(&mut self, style: &FloatingStyle) -> bool {
        if self.unmounted {
            return false;
        }
        self.content_origin = Point::new(style.left, style.top);
        self.style = Some(style.clone());
        true
    }
}

impl SelectHost<u32> for TestHost {
    fn set_active_descendant(&mut self, id: Option<u32>) {
        self.active_descendant = id;
    }

    fn set_option_selected(&mut self, id: u32, selected: bool) {
        self.selected_options.retain(|&o| o != id);
        if selected {
            self.selected_options.push(id);
            self.selected_options.sort_unstable();
        }
    }
}
