//! Easing functions and the Bézier intensity envelope.
//!
//! The blend and saturation effects are not applied uniformly along the
//! ramp. Blending is weighted by an envelope derived from a cubic Bézier
//! whose shape is steered by the "middle" and "spread" controls, and
//! saturation by a symmetric quadratic bump.

/// A point on a parametric curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Cubic Bézier with fixed endpoints `(0, 0)` and `(1, 1)`.
///
/// This is evaluated parametrically: [`sample`](Self::sample) returns the
/// `(x, y)` pair at parameter `t`. It is never inverted to solve for `y`
/// given `x` the way CSS timing functions are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p1: CurvePoint,
    pub p2: CurvePoint,
}

impl CubicBezier {
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        Self {
            p1: CurvePoint { x: p1x, y: p1y },
            p2: CurvePoint { x: p2x, y: p2y },
        }
    }

    pub fn sample(&self, t: f64) -> CurvePoint {
        let t1 = 1.0 - t;
        let a = 3.0 * t1 * t1 * t;
        let b = 3.0 * t1 * t * t;
        let c = t * t * t;

        CurvePoint {
            x: a * self.p1.x + b * self.p2.x + c,
            y: a * self.p1.y + b * self.p2.y + c,
        }
    }
}

pub fn cubic_bezier(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> CubicBezier {
    CubicBezier::new(p1x, p1y, p2x, p2y)
}

/// Builds the blend envelope from the normalized `middle` and `spread`
/// controls, both in `[0, 1]`.
///
/// Starting from the ease-in-out control points `0.42` / `0.58`, `middle`
/// pulls one control point toward its end (the first one when
/// `middle <= 0.5`, the second otherwise) and `spread` then narrows both.
pub fn intensity_curve(middle: f64, spread: f64) -> CubicBezier {
    let mut p1x = 0.42;
    let mut p2x = 0.58;
    let factor = (middle / 0.5 - 1.0).abs();

    let effective_spread = if middle <= 0.5 {
        p1x += (1.0 - p1x) * factor;
        (1.0 - p1x) * spread
    } else {
        p2x -= p2x * factor;
        p2x * spread
    };

    p1x += effective_spread;
    p2x -= effective_spread;

    CubicBezier::new(p1x, 0.0, p2x, 1.0)
}

/// Samples the envelope at step `i` of a span of `span` steps.
///
/// Zero at both ends of the span. In between, the curve's `x` is normalized
/// against the midpoint `y` and folded back down once it passes it, giving a
/// bump that rises from 0 to 1 and returns to 0.
pub fn intensity(curve: &CubicBezier, i: usize, span: usize) -> f64 {
    if i == 0 || i == span || span == 0 {
        return 0.0;
    }

    let progress = curve.sample(i as f64 / span as f64).x;
    let halfpoint = curve.sample(0.5).y;
    let normalized = progress / halfpoint;

    if progress < halfpoint {
        normalized
    } else {
        1.0 - (normalized - 1.0)
    }
}

/// `4x(1 - x)` with `x = position / range`; zero for an empty range.
pub fn ease_in_out_quad(range: f64, position: f64) -> f64 {
    if range == 0.0 {
        return 0.0;
    }
    let x = position / range;
    4.0 * x * (1.0 - x)
}
