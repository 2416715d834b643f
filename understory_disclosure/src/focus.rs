// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial focus selection inside freshly opened content.

use core::cmp::Ordering;

use kurbo::Rect;

/// A focusable element inside the disclosure content.
#[derive(Clone, Debug)]
pub struct FocusCandidate<K> {
    /// Identifier passed back to [`DisclosureHost::focus`](crate::DisclosureHost::focus).
    pub id: K,
    /// Bounds, in any coordinate space shared by all candidates.
    pub rect: Rect,
    /// Optional explicit ordering key (for example a positive `tabindex`).
    pub order: Option<i32>,
    /// Disabled candidates are never chosen.
    pub enabled: bool,
    /// Marked with `autofocus`.
    pub autofocus: bool,
}

impl<K> FocusCandidate<K> {
    /// An enabled candidate without ordering hints.
    pub fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            order: None,
            enabled: true,
            autofocus: false,
        }
    }
}

/// Pick the element that should receive focus when content opens.
///
/// An enabled `autofocus` candidate wins. Otherwise candidates with an explicit
/// order come first (lowest key), then the rest in reading order: top to bottom,
/// then left to right.
pub fn first_focusable<K: Clone>(candidates: &[FocusCandidate<K>]) -> Option<K> {
    let enabled = || candidates.iter().filter(|c| c.enabled);
    if let Some(c) = enabled().find(|c| c.autofocus) {
        return Some(c.id.clone());
    }
    enabled()
        .min_by(|a, b| compare_tab_order(a, b))
        .map(|c| c.id.clone())
}

fn compare_tab_order<K>(a: &FocusCandidate<K>, b: &FocusCandidate<K>) -> Ordering {
    match (a.order, b.order) {
        (Some(ao), Some(bo)) => ao.cmp(&bo).then_with(|| reading_order(&a.rect, &b.rect)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => reading_order(&a.rect, &b.rect),
    }
}

fn reading_order(a: &Rect, b: &Rect) -> Ordering {
    const ROW_EPS: f64 = 1e-6;
    if a.y0 - b.y0 > ROW_EPS || b.y0 - a.y0 > ROW_EPS {
        return a.y0.partial_cmp(&b.y0).unwrap_or(Ordering::Equal);
    }
    a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn reading_order_picks_top_left() {
        let candidates = vec![
            FocusCandidate::new(1_u32, Rect::new(50.0, 40.0, 90.0, 60.0)),
            FocusCandidate::new(2, Rect::new(50.0, 10.0, 90.0, 30.0)),
            FocusCandidate::new(3, Rect::new(0.0, 10.0, 40.0, 30.0)),
        ];
        assert_eq!(first_focusable(&candidates), Some(3));
    }

    #[test]
    fn explicit_order_and_autofocus_take_priority() {
        let mut candidates = vec![
            FocusCandidate::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0)),
            FocusCandidate {
                order: Some(1),
                ..FocusCandidate::new(2, Rect::new(0.0, 50.0, 10.0, 60.0))
            },
        ];
        assert_eq!(first_focusable(&candidates), Some(2));

        candidates.push(FocusCandidate {
            autofocus: true,
            ..FocusCandidate::new(3, Rect::new(0.0, 90.0, 10.0, 100.0))
        });
        assert_eq!(first_focusable(&candidates), Some(3));
    }

    #[test]
    fn disabled_candidates_are_skipped() {
        let candidates = vec![
            FocusCandidate {
                enabled: false,
                autofocus: true,
                ..FocusCandidate::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0))
            },
            FocusCandidate {
                enabled: false,
                ..FocusCandidate::new(2, Rect::new(0.0, 0.0, 10.0, 10.0))
            },
        ];
        assert_eq!(first_focusable(&candidates), None);
    }
}
