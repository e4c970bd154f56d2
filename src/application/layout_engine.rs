// Layout calculation for repeated gauges inside one panel
use crate::domain::render::Tiling;
use std::num::NonZeroUsize;

/// Taken off the divided dimension so neighbouring gauges don't touch
pub const GAUGE_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub tiling: Tiling,
    pub gauge_width: f64,
    pub gauge_height: f64,
}

/// Size every gauge and pick the tiling direction for `count` gauges in a
/// `width` x `height` container. Gauges tile along the longer side; a square
/// container gives every gauge the full size.
pub fn layout(width: f64, height: f64, count: NonZeroUsize) -> Layout {
    let count = count.get();

    if count == 1 {
        return Layout {
            tiling: Tiling::Single,
            gauge_width: width,
            gauge_height: height,
        };
    }

    let cell_percent = 100.0 / count as f64;

    if width > height {
        Layout {
            tiling: Tiling::Horizontal { cell_percent },
            gauge_width: shrink(width, count),
            gauge_height: height,
        }
    } else if height > width {
        Layout {
            tiling: Tiling::Vertical { cell_percent },
            gauge_width: width,
            gauge_height: shrink(height, count),
        }
    } else {
        Layout {
            tiling: Tiling::Overlapping,
            gauge_width: width,
            gauge_height: height,
        }
    }
}

fn shrink(extent: f64, count: usize) -> f64 {
    (extent / count as f64).floor() - GAUGE_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_wide_panel_tiles_horizontally() {
        let result = layout(300.0, 100.0, count(3));

        assert_eq!(
            result.tiling,
            Tiling::Horizontal {
                cell_percent: 100.0 / 3.0
            }
        );
        assert_eq!(result.gauge_width, 90.0);
        assert_eq!(result.gauge_height, 100.0);
    }

    #[test]
    fn test_tall_panel_tiles_vertically() {
        let result = layout(100.0, 300.0, count(3));

        assert_eq!(
            result.tiling,
            Tiling::Vertical {
                cell_percent: 100.0 / 3.0
            }
        );
        assert_eq!(result.gauge_width, 100.0);
        assert_eq!(result.gauge_height, 90.0);
    }

    #[test]
    fn test_division_is_floored_before_margin() {
        let result = layout(250.0, 100.0, count(3));
        assert_eq!(result.gauge_width, 73.0);
    }

    #[test]
    fn test_single_gauge_keeps_container_size() {
        for (w, h) in [(300.0, 100.0), (100.0, 300.0), (200.0, 200.0)] {
            let result = layout(w, h, count(1));
            assert_eq!(result.tiling, Tiling::Single);
            assert_eq!((result.gauge_width, result.gauge_height), (w, h));
        }
    }

    #[test]
    fn test_square_panel_overlaps_full_size_gauges() {
        let result = layout(200.0, 200.0, count(4));

        assert_eq!(result.tiling, Tiling::Overlapping);
        assert_eq!((result.gauge_width, result.gauge_height), (200.0, 200.0));
    }
}
