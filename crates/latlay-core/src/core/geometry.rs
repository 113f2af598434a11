use nalgebra::{Point2, Vector2};

/// One coordinate part of a 2D position, as addressed by the optimizer's
/// flattened coordinate vector (`x` at even indices, `y` at odd ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 { Axis::X } else { Axis::Y }
    }

    #[inline]
    pub fn of_point(&self, p: &Point2<f64>) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    #[inline]
    pub fn of_vector(&self, v: &Vector2<f64>) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

#[inline]
pub fn squared_length(v: &Vector2<f64>) -> f64 {
    v.norm_squared()
}

#[inline]
pub fn distance(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    (q - p).norm()
}

/// Unit vector pointing from `p` towards `q`, or the zero vector when both
/// points coincide.
pub fn unit_vector(p: &Point2<f64>, q: &Point2<f64>) -> Vector2<f64> {
    let v = q - p;
    let len = v.norm();
    if len == 0.0 { Vector2::zeros() } else { v / len }
}

/// Counterclockwise quarter turn of `v`.
#[inline]
pub fn rotate90(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Where the orthogonal projection of a point falls relative to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionRegime {
    /// The projection parameter is at or before the segment start.
    BeforeStart,
    /// The projection falls strictly inside the segment.
    Within,
    /// The projection parameter is at or past the segment end.
    PastEnd,
}

/// Parameter of the orthogonal projection of `p` onto the line through `a`
/// and `b`, scaled so that `a` maps to `0` and `b` to `1`. `None` when the
/// segment is degenerate.
pub fn projection_parameter(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> Option<f64> {
    let seg = b - a;
    let len_sq = seg.norm_squared();
    if len_sq == 0.0 {
        None
    } else {
        Some((p - a).dot(&seg) / len_sq)
    }
}

pub fn classify_projection(parameter: f64) -> ProjectionRegime {
    if parameter <= 0.0 {
        ProjectionRegime::BeforeStart
    } else if parameter >= 1.0 {
        ProjectionRegime::PastEnd
    } else {
        ProjectionRegime::Within
    }
}

/// Distance from `p` to the segment between `a` and `b`: the projection
/// parameter is clamped to `[0, 1]` before measuring. Degrades to the
/// point-to-point distance when the segment endpoints coincide.
pub fn point_segment_distance(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    match projection_parameter(p, a, b) {
        None => distance(p, a),
        Some(parameter) => {
            let clamped = parameter.clamp(0.0, 1.0);
            distance(p, &(a + (b - a) * clamped))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn squared_length_is_sum_of_squared_components() {
        assert_eq!(squared_length(&Vector2::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, 6.0);
        assert_eq!(distance(&p, &q), 5.0);
    }

    #[test]
    fn unit_vector_has_length_one() {
        let v = unit_vector(&Point2::new(1.0, 1.0), &Point2::new(4.0, 5.0));
        assert!(f64_approx_equal(v.norm(), 1.0));
        assert!(f64_approx_equal(v.x, 0.6));
        assert!(f64_approx_equal(v.y, 0.8));
    }

    #[test]
    fn unit_vector_of_coincident_points_is_zero() {
        let p = Point2::new(2.5, -1.0);
        assert_eq!(unit_vector(&p, &p), Vector2::zeros());
    }

    #[test]
    fn rotate90_turns_counterclockwise() {
        assert_eq!(rotate90(&Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0));
        assert_eq!(rotate90(&Vector2::new(0.0, 1.0)), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn projection_parameter_of_midpoint_is_one_half() {
        let r = projection_parameter(
            &Point2::new(0.5, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert_eq!(r, Some(0.5));
    }

    #[test]
    fn projection_parameter_of_degenerate_segment_is_none() {
        let a = Point2::new(1.0, 1.0);
        assert_eq!(projection_parameter(&Point2::new(0.0, 0.0), &a, &a), None);
    }

    #[test]
    fn classify_projection_covers_all_regimes() {
        assert_eq!(classify_projection(-0.1), ProjectionRegime::BeforeStart);
        assert_eq!(classify_projection(0.0), ProjectionRegime::BeforeStart);
        assert_eq!(classify_projection(0.5), ProjectionRegime::Within);
        assert_eq!(classify_projection(1.0), ProjectionRegime::PastEnd);
        assert_eq!(classify_projection(1.7), ProjectionRegime::PastEnd);
    }

    #[test]
    fn point_segment_distance_inside_is_perpendicular() {
        let d = point_segment_distance(
            &Point2::new(0.5, 2.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert!(f64_approx_equal(d, 2.0));
    }

    #[test]
    fn point_segment_distance_before_start_uses_first_endpoint() {
        let d = point_segment_distance(
            &Point2::new(-3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert!(f64_approx_equal(d, 5.0));
    }

    #[test]
    fn point_segment_distance_past_end_uses_second_endpoint() {
        let d = point_segment_distance(
            &Point2::new(4.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert!(f64_approx_equal(d, 5.0));
    }

    #[test]
    fn point_segment_distance_of_degenerate_segment_is_point_distance() {
        let a = Point2::new(1.0, 1.0);
        let d = point_segment_distance(&Point2::new(4.0, 5.0), &a, &a);
        assert!(f64_approx_equal(d, 5.0));
    }

    #[test]
    fn axis_from_index_alternates() {
        assert_eq!(Axis::from_index(0), Axis::X);
        assert_eq!(Axis::from_index(1), Axis::Y);
        assert_eq!(Axis::from_index(2), Axis::X);
        assert_eq!(Axis::from_index(7), Axis::Y);
    }

    #[test]
    fn axis_extracts_matching_component() {
        let p = Point2::new(3.0, -2.0);
        assert_eq!(Axis::X.of_point(&p), 3.0);
        assert_eq!(Axis::Y.of_point(&p), -2.0);
        let v = Vector2::new(0.5, 1.5);
        assert_eq!(Axis::X.of_vector(&v), 0.5);
        assert_eq!(Axis::Y.of_vector(&v), 1.5);
    }
}
