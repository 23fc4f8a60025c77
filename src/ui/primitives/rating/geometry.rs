//! Position and clip math for the rating bar
//!
//! Everything here is a pure function of the current input, so the widget can
//! recompute it on every event and every frame.

use iced::{Point, Rectangle, Size};

/// Continuous rating for a drag at `x` pixels from the left edge
pub fn drag_rating(x: f32, width: f32, max_rating: u32) -> f32 {
    let max = max_rating as f32;
    ((x / width) * max).clamp(0.0, max)
}

/// Whole-star rating for a tap at `x` pixels from the left edge
///
/// Rounds up so a tap anywhere over the Nth star selects N stars. A tap exactly
/// on the left edge yields 0.
pub fn tap_rating(x: f32, width: f32, max_rating: u32) -> f32 {
    let max = max_rating as f32;
    ((x / width) * max).ceil().clamp(0.0, max)
}

/// Portion of the rated layer that is visible, in `[0, 1]`
pub fn filled_fraction(rating: f32, max_rating: u32) -> f32 {
    if rating <= 0.0 {
        0.0
    } else {
        (rating / max_rating as f32).min(1.0)
    }
}

/// Offset that centers a layer of size `inner` inside `outer`
pub fn centered(outer: Size, inner: Size) -> Point {
    Point::new(
        (outer.width - inner.width) / 2.0,
        (outer.height - inner.height) / 2.0,
    )
}

/// Clip region for the rated layer, measured against the layer's own bounds, or `None` when nothing should be drawn
pub fn rated_clip(bounds: Rectangle, rating: f32, max_rating: u32) -> Option<Rectangle> {
    if rating <= 0.0 {
        return None;
    }

    Some(Rectangle {
        width: bounds.width * filled_fraction(rating, max_rating),
        ..bounds
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tap_rounds_up_to_whole_star() {
        // 0.42 of the width on five stars is 2.1, which selects the third star
        assert_eq!(tap_rating(84.0, 200.0, 5), 3.0);
        assert_eq!(tap_rating(200.0, 200.0, 5), 5.0);
        assert_eq!(tap_rating(1.0, 200.0, 5), 1.0);
    }

    #[test]
    fn test_tap_on_left_edge_clears() {
        assert_eq!(tap_rating(0.0, 200.0, 5), 0.0);
    }

    #[test]
    fn test_tap_is_clamped() {
        assert_eq!(tap_rating(-20.0, 200.0, 5), 0.0);
        assert_eq!(tap_rating(260.0, 200.0, 5), 5.0);
    }

    #[test]
    fn test_drag_is_unrounded() {
        assert_close(drag_rating(166.0, 200.0, 5), 4.15);
        assert_close(drag_rating(50.0, 200.0, 10), 2.5);
    }

    #[test]
    fn test_drag_is_clamped() {
        assert_eq!(drag_rating(-5.0, 200.0, 5), 0.0);
        assert_eq!(drag_rating(400.0, 200.0, 5), 5.0);
    }

    #[test]
    fn test_filled_fraction() {
        assert_eq!(filled_fraction(0.0, 5), 0.0);
        assert_eq!(filled_fraction(-1.0, 5), 0.0);
        assert_close(filled_fraction(2.5, 5), 0.5);
        assert_eq!(filled_fraction(5.0, 5), 1.0);
        assert_eq!(filled_fraction(7.0, 5), 1.0);
    }

    #[test]
    fn test_filled_fraction_is_stable() {
        let first = filled_fraction(3.7, 5);
        let second = filled_fraction(3.7, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rated_clip() {
        let bounds = Rectangle {
            x: 10.0,
            y: 20.0,
            width: 280.0,
            height: 48.0,
        };

        assert!(rated_clip(bounds, 0.0, 5).is_none());
        assert!(rated_clip(bounds, -0.5, 5).is_none());

        let clip = rated_clip(bounds, 1.5, 5).unwrap();
        assert_eq!(clip.x, bounds.x);
        assert_eq!(clip.y, bounds.y);
        assert_eq!(clip.height, bounds.height);
        assert_close(clip.width, 84.0);

        assert_eq!(rated_clip(bounds, 9.0, 5).unwrap(), bounds);
    }

    #[test]
    fn test_rated_clip_in_wider_widget() {
        // Five 48px stars with 8px gaps, centered in a 600px wide bar
        let widget = Size::new(600.0, 48.0);
        let row = Size::new(280.0, 48.0);
        let offset = centered(widget, row);
        assert_eq!(offset, Point::new(160.0, 0.0));

        let row_bounds = Rectangle::new(offset, row);

        for rating in [1.0, 2.5, 4.0] {
            let clip = rated_clip(row_bounds, rating, 5).unwrap();
            assert_eq!(clip.x, row_bounds.x);
            assert_close(clip.width / row_bounds.width, rating / 5.0);
        }
    }
}
