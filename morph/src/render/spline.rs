//! Closed Catmull-Rom splines expressed as cubic Bezier segments.
//!
//! Each segment `p1 -> p2` takes its control points from the neighbouring
//! points in the ring:
//!
//! ```text
//! cp1 = p1 + (p2 - p0) / 6 * tension
//! cp2 = p2 - (p3 - p1) / 6 * tension
//! ```
//!
//! With `tension == 1.0` this is the uniform Catmull-Rom curve, which passes
//! through every input point.

use std::fmt::Write;

pub type Point = (f64, f64);

pub const DEFAULT_TENSION: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl CubicSegment {
    /// Evaluate the segment at `t` in `[0, 1]`, `start` being the end point of
    /// the previous segment.
    pub fn at(&self, start: Point, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;

        (
            a * start.0 + b * self.cp1.0 + c * self.cp2.0 + d * self.end.0,
            a * start.1 + b * self.cp1.1 + c * self.cp2.1 + d * self.end.1,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spline {
    start: Option<Point>,
    segments: Vec<CubicSegment>,
}

impl Spline {
    /// Fit a closed curve through `points` in order, wrapping from the last
    /// point back to the first.
    pub fn closed(points: &[Point], tension: f64) -> Self {
        let n = points.len();

        let Some(&start) = points.first() else {
            return Self::default();
        };

        if n == 1 {
            return Self {
                start: Some(start),
                segments: vec![],
            };
        }

        let segments = (0..n)
            .map(|i| {
                let p0 = points[(i + n - 1) % n];
                let p1 = points[i];
                let p2 = points[(i + 1) % n];
                let p3 = points[(i + 2) % n];

                CubicSegment {
                    cp1: (
                        p1.0 + (p2.0 - p0.0) / 6.0 * tension,
                        p1.1 + (p2.1 - p0.1) / 6.0 * tension,
                    ),
                    cp2: (
                        p2.0 - (p3.0 - p1.0) / 6.0 * tension,
                        p2.1 - (p3.1 - p1.1) / 6.0 * tension,
                    ),
                    end: p2,
                }
            })
            .collect();

        Self {
            start: Some(start),
            segments,
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// SVG path data, e.g. `M1,2C3,4,5,6,7,8...`
    pub fn to_svg_path(&self) -> String {
        let Some(start) = self.start else {
            return String::new();
        };

        let mut path = format!("M{},{}", start.0, start.1);

        for s in &self.segments {
            // Writing to a String cannot fail
            let _ = write!(
                path,
                "C{},{},{},{},{},{}",
                s.cp1.0, s.cp1.1, s.cp2.0, s.cp2.1, s.end.0, s.end.1
            );
        }

        path
    }

    /// Sample the curve into a polyline with `steps` points per segment. The
    /// closing vertex (equal to the first) is omitted.
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let Some(start) = self.start else {
            return vec![];
        };

        let steps = steps.max(1);
        let mut polyline = Vec::with_capacity(self.segments.len() * steps + 1);
        polyline.push(start);

        let mut from = start;
        for segment in &self.segments {
            for step in 1..=steps {
                let t = step as f64 / steps as f64;
                polyline.push(segment.at(from, t));
            }
            from = segment.end;
        }

        if polyline.len() > 1 && polyline.last() == Some(&start) {
            polyline.pop();
        }

        polyline
    }

    /// Axis-aligned bounds of the sampled curve as `(min, max)`
    pub fn bounds(&self, steps: usize) -> Option<(Point, Point)> {
        let polyline = self.flatten(steps);
        let first = *polyline.first()?;

        Some(polyline.iter().fold((first, first), |(min, max), p| {
            ((min.0.min(p.0), min.1.min(p.1)), (max.0.max(p.0), max.1.max(p.1)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn square() -> Vec<Point> {
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
    }

    #[test]
    fn empty_input() {
        let spline = Spline::closed(&[], DEFAULT_TENSION);
        assert_eq!(spline.to_svg_path(), "");
        assert!(spline.flatten(8).is_empty());
        assert!(spline.bounds(8).is_none());
    }

    #[test]
    fn single_point_is_move_only() {
        let spline = Spline::closed(&[(3.0, 4.0)], DEFAULT_TENSION);
        assert_eq!(spline.to_svg_path(), "M3,4");
        assert_eq!(spline.flatten(8), vec![(3.0, 4.0)]);
    }

    #[test]
    fn one_segment_per_point_and_closed() {
        let points = square();
        let spline = Spline::closed(&points, DEFAULT_TENSION);

        assert_eq!(spline.segments().len(), points.len());
        assert_eq!(spline.start(), Some(points[0]));
        for (i, segment) in spline.segments().iter().enumerate() {
            assert_eq!(segment.end, points[(i + 1) % points.len()]);
        }
    }

    #[test]
    fn control_points_follow_neighbours() {
        let spline = Spline::closed(&square(), DEFAULT_TENSION);
        let first = spline.segments()[0];

        // p0 = (0,10), p1 = (0,0), p2 = (10,0), p3 = (10,10)
        assert_approx_eq!(first.cp1.0, 10.0 / 6.0);
        assert_approx_eq!(first.cp1.1, -10.0 / 6.0);
        assert_approx_eq!(first.cp2.0, 10.0 - 10.0 / 6.0);
        assert_approx_eq!(first.cp2.1, -10.0 / 6.0);
    }

    #[test]
    fn zero_tension_is_polygon() {
        let points = square();
        let spline = Spline::closed(&points, 0.0);
        for (i, segment) in spline.segments().iter().enumerate() {
            assert_eq!(segment.cp1, points[i]);
            assert_eq!(segment.cp2, points[(i + 1) % points.len()]);
        }
    }

    #[test]
    fn svg_path_format() {
        let spline = Spline::closed(&[(0.0, 0.0), (6.0, 0.0)], DEFAULT_TENSION);
        assert_eq!(spline.to_svg_path(), "M0,0C0,0,6,0,6,0C6,0,0,0,0,0");
    }

    #[test]
    fn curve_passes_through_every_point() {
        let points = square();
        let spline = Spline::closed(&points, DEFAULT_TENSION);
        let polyline = spline.flatten(4);

        assert_eq!(polyline.len(), points.len() * 4);
        for (i, point) in points.iter().enumerate() {
            let sample = polyline[i * 4];
            assert_approx_eq!(sample.0, point.0);
            assert_approx_eq!(sample.1, point.1);
        }
    }

    #[test]
    fn bounds_contain_points_and_overshoot() {
        let spline = Spline::closed(&square(), DEFAULT_TENSION);
        let (min, max) = spline.bounds(16).unwrap();
        assert!(min.0 < 0.0 && min.1 < 0.0);
        assert!(max.0 > 10.0 && max.1 > 10.0);
    }
}
