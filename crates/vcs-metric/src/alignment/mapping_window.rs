//! Mapping window: the diagonal projection of a traversed item onto the
//! target axis, widened by the local chronology tolerance (LCT).

use serde::{Deserialize, Serialize};

/// Inclusive range of target positions considered "in chronological place"
/// for one traversed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingWindow {
    pub start: usize,
    pub end: usize,
}

impl MappingWindow {
    /// Window of item `k` when `n_src` traversed items map onto `n_tgt`
    /// targets, with `slope = n_tgt / n_src`.
    ///
    /// For `slope ≥ 1` the raw window is the span the diagonal assigns to
    /// `k`: `[floor(k·slope), max(floor(k·slope), ceil((k+1)·slope) − 1)]`.
    /// For `slope < 1` several items share a target and the raw window is
    /// the single expected position `round(k·slope)`. Either way it is then
    /// widened by `lct` on both sides and clamped to `[0, n_tgt − 1]`.
    /// Integer arithmetic only; halves round up.
    ///
    /// # Panics
    /// Panics in debug builds if `k >= n_src` or either length is zero.
    pub fn for_item(k: usize, n_src: usize, n_tgt: usize, lct: usize) -> Self {
        debug_assert!(n_src > 0 && n_tgt > 0 && k < n_src);
        let last = n_tgt.saturating_sub(1);
        let (start, end) = if n_tgt >= n_src {
            let start = k * n_tgt / n_src;
            let end = ((k + 1) * n_tgt).div_ceil(n_src).saturating_sub(1).max(start);
            (start, end)
        } else {
            let expected = ((2 * k * n_tgt + n_src) / (2 * n_src)).min(last);
            (expected, expected)
        };
        Self {
            start: start.saturating_sub(lct).min(last),
            end: end.saturating_add(lct).min(last),
        }
    }

    pub fn contains(&self, target: usize) -> bool {
        (self.start..=self.end).contains(&target)
    }

    /// 0 inside the window, otherwise the gap to the nearest edge.
    pub fn distance(&self, target: usize) -> usize {
        if target < self.start {
            self.start - target
        } else if target > self.end {
            target - self.end
        } else {
            0
        }
    }

    /// Largest distance any target in `[0, n_tgt − 1]` can have.
    pub fn max_distance(&self, n_tgt: usize) -> usize {
        self.start.max(n_tgt.saturating_sub(1).saturating_sub(self.end))
    }
}

/// `ceil(n_tgt / n_src)`, the number of targets one traversed item spans.
pub fn window_height(n_src: usize, n_tgt: usize) -> usize {
    if n_src == 0 {
        return 0;
    }
    n_tgt.div_ceil(n_src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_windows_are_the_diagonal() {
        for k in 0..9 {
            let w = MappingWindow::for_item(k, 9, 9, 0);
            assert_eq!((w.start, w.end), (k, k));
        }
    }

    #[test]
    fn one_to_many_windows_cover_the_target_axis() {
        // 3 source items onto 7 targets: slope 7/3.
        let windows: Vec<_> = (0..3)
            .map(|k| MappingWindow::for_item(k, 3, 7, 0))
            .map(|w| (w.start, w.end))
            .collect();
        assert_eq!(windows, vec![(0, 2), (2, 4), (4, 6)]);
        assert_eq!(window_height(3, 7), 3);
    }

    #[test]
    fn many_to_one_windows_sit_on_rounded_projection() {
        // 6 source items onto 2 targets: slope 1/3, projections 0, 0.33,
        // 0.67, 1, 1.33, 1.67 (the last clamps onto target 1).
        let windows: Vec<_> = (0..6)
            .map(|k| MappingWindow::for_item(k, 6, 2, 0))
            .map(|w| (w.start, w.end))
            .collect();
        assert_eq!(windows, vec![(0, 0), (0, 0), (1, 1), (1, 1), (1, 1), (1, 1)]);
        assert_eq!(window_height(6, 2), 1);
    }

    #[test]
    fn rounding_half_goes_up() {
        // 4 source items onto 2 targets: item 1 projects to exactly 0.5.
        let w = MappingWindow::for_item(1, 4, 2, 0);
        assert_eq!((w.start, w.end), (1, 1));
        let w = MappingWindow::for_item(1, 4, 2, 1);
        assert_eq!((w.start, w.end), (0, 1));
    }

    #[test]
    fn lct_widens_and_clamps() {
        let w = MappingWindow::for_item(0, 9, 9, 2);
        assert_eq!((w.start, w.end), (0, 2));
        let w = MappingWindow::for_item(8, 9, 9, 2);
        assert_eq!((w.start, w.end), (6, 8));
    }

    #[test]
    fn distance_and_max_distance() {
        let w = MappingWindow { start: 3, end: 4 };
        assert_eq!(w.distance(0), 3);
        assert_eq!(w.distance(3), 0);
        assert_eq!(w.distance(8), 4);
        assert_eq!(w.max_distance(9), 4);
        assert!(w.contains(4));
        assert!(!w.contains(5));
    }
}
