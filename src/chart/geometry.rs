// src/chart/geometry.rs
//
// Connector between two (matchday, position) points. A rank change is
// drawn as two chained quadratic Bézier segments whose control points
// all sit on the horizontal midpoint column, which is what turns the
// diagonal into a smooth S. An unchanged rank is a straight segment.

pub type Point = (f64, f64);

/// One quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadSegment {
    pub fn eval(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let x = u * u * self.start.0 + 2.0 * u * t * self.control.0 + t * t * self.end.0;
        let y = u * u * self.start.1 + 2.0 * u * t * self.control.1 + t * t * self.end.1;
        (x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Connector {
    Line(Point, Point),
    /// S-curve: p1 → midpoint column at y1, cross to y2 at the same
    /// column, → p2.
    Curve([QuadSegment; 2]),
}

/// Build the connector for consecutive matchday points. Deterministic,
/// no state.
pub fn connector(p1: Point, p2: Point) -> Connector {
    let (x1, y1) = p1;
    let (x2, y2) = p2;

    if y1 == y2 {
        return Connector::Line(p1, p2);
    }

    let mx = x1 + (x2 - x1) / 2.0;
    let my = y1 + (y2 - y1) / 2.0;

    Connector::Curve([
        QuadSegment { start: p1, control: (mx, y1), end: (mx, my) },
        QuadSegment { start: (mx, my), control: (mx, y2), end: p2 },
    ])
}

impl Connector {
    /// Flatten to a polyline for the plotting backend. `steps` samples
    /// per Bézier segment; lines come back as their two endpoints.
    pub fn points(&self, steps: usize) -> Vec<Point> {
        match self {
            Connector::Line(a, b) => vec![*a, *b],
            Connector::Curve(segments) => {
                let steps = steps.max(1);
                let mut pts = Vec::with_capacity(2 * steps + 1);
                pts.push(segments[0].start);
                for seg in segments {
                    for i in 1..=steps {
                        pts.push(seg.eval(i as f64 / steps as f64));
                    }
                }
                pts
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_rank_is_a_straight_segment() {
        assert_eq!(
            connector((1.0, 0.0), (2.0, 0.0)),
            Connector::Line((1.0, 0.0), (2.0, 0.0))
        );
    }

    #[test]
    fn drop_bends_at_the_midpoint_column() {
        let Connector::Curve(segs) = connector((1.0, 0.0), (2.0, 3.0)) else {
            panic!("expected a curve");
        };
        assert_eq!(segs[0].control, (1.5, 0.0));
        assert_eq!(segs[0].end, (1.5, 1.5));
        assert_eq!(segs[1].control, (1.5, 3.0));
        assert_eq!(segs[1].end, (2.0, 3.0));
    }

    #[test]
    fn rise_mirrors_the_drop() {
        let Connector::Curve(segs) = connector((1.0, 3.0), (2.0, 0.0)) else {
            panic!("expected a curve");
        };
        assert_eq!(segs[0].control, (1.5, 3.0));
        assert_eq!(segs[0].end, (1.5, 1.5));
        assert_eq!(segs[1].control, (1.5, 0.0));
        assert_eq!(segs[1].end, (2.0, 0.0));
    }

    #[test]
    fn polyline_spans_the_endpoints() {
        let pts = connector((1.0, 0.0), (2.0, 3.0)).points(8);
        assert_eq!(pts.first(), Some(&(1.0, 0.0)));
        assert_eq!(pts.last(), Some(&(2.0, 3.0)));
        assert_eq!(pts.len(), 17);
        // x never runs backwards
        assert!(pts.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
