//! Ray and segment clipping against the plotting bounds.
//!
//! Both clips are Liang-Barsky over a parametric line `p(t) = p0 + t * d`.
//! Endpoints produced by an edge crossing are snapped onto that edge so
//! callers can rely on exact boundary coordinates.

use crate::core::types::{Bounds, Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
struct ClipWindow {
    t_enter: f64,
    t_exit: f64,
    enter_edge: Option<Edge>,
    exit_edge: Option<Edge>,
}

/// Clips the ray starting at `(x0, y0)` and passing through `(x1, y1)`.
///
/// The ray extends infinitely beyond `(x1, y1)`. The start stays at
/// `(x0, y0)` when that point is inside `bounds`, otherwise it moves to the
/// entry crossing. Returns `None` when the ray misses `bounds` or when both
/// points coincide.
#[must_use]
pub fn clip_ray_by_rect(x0: f64, y0: f64, x1: f64, y1: f64, bounds: Bounds) -> Option<Segment> {
    if !all_finite(&[x0, y0, x1, y1]) {
        return None;
    }
    let dx = x1 - x0;
    let dy = y1 - y0;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let window = clip_parametric(x0, y0, dx, dy, f64::INFINITY, bounds)?;
    Some(Segment::new(
        point_at(x0, y0, dx, dy, window.t_enter, window.enter_edge, bounds),
        point_at(x0, y0, dx, dy, window.t_exit, window.exit_edge, bounds),
    ))
}

/// Clips the finite segment `(x0, y0) -> (x1, y1)`.
///
/// Returns `None` when the segment lies wholly outside `bounds`. The result
/// keeps the input traversal direction.
#[must_use]
pub fn clip_segment_by_rect(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    bounds: Bounds,
) -> Option<Segment> {
    if !all_finite(&[x0, y0, x1, y1]) {
        return None;
    }
    let dx = x1 - x0;
    let dy = y1 - y0;
    let window = clip_parametric(x0, y0, dx, dy, 1.0, bounds)?;
    let end = if window.t_exit == 1.0 && window.exit_edge.is_none() {
        Point::new(x1, y1)
    } else {
        point_at(x0, y0, dx, dy, window.t_exit, window.exit_edge, bounds)
    };
    Some(Segment::new(
        point_at(x0, y0, dx, dy, window.t_enter, window.enter_edge, bounds),
        end,
    ))
}

fn clip_parametric(
    x0: f64,
    y0: f64,
    dx: f64,
    dy: f64,
    t_max: f64,
    bounds: Bounds,
) -> Option<ClipWindow> {
    let mut window = ClipWindow {
        t_enter: 0.0,
        t_exit: t_max,
        enter_edge: None,
        exit_edge: None,
    };

    for (p, q, edge) in [
        (-dx, x0 - bounds.left, Edge::Left),
        (dx, bounds.right() - x0, Edge::Right),
        (-dy, y0 - bounds.top, Edge::Top),
        (dy, bounds.bottom() - y0, Edge::Bottom),
    ] {
        if p == 0.0 {
            // parallel to this edge: either fully outside or unconstrained
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > window.t_exit {
                return None;
            }
            if t > window.t_enter {
                window.t_enter = t;
                window.enter_edge = Some(edge);
            }
        } else {
            if t < window.t_enter {
                return None;
            }
            if t < window.t_exit {
                window.t_exit = t;
                window.exit_edge = Some(edge);
            }
        }
    }

    if window.t_exit.is_finite() {
        Some(window)
    } else {
        None
    }
}

fn point_at(
    x0: f64,
    y0: f64,
    dx: f64,
    dy: f64,
    t: f64,
    edge: Option<Edge>,
    bounds: Bounds,
) -> Point {
    let Some(edge) = edge else {
        if t == 0.0 {
            return Point::new(x0, y0);
        }
        return Point::new(x0 + t * dx, y0 + t * dy);
    };

    let x = (x0 + t * dx).clamp(bounds.left, bounds.right());
    let y = (y0 + t * dy).clamp(bounds.top, bounds.bottom());
    match edge {
        Edge::Left => Point::new(bounds.left, y),
        Edge::Right => Point::new(bounds.right(), y),
        Edge::Top => Point::new(x, bounds.top),
        Edge::Bottom => Point::new(x, bounds.bottom()),
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}
