//! Piecewise-linear interpolant with exact integration.

use crate::error::{ReleaseError, ReleaseResult};

/// Linear interpolant through `(x, y)` knots sorted by `x`.
///
/// Integrals are exact for the interpolant: each segment is a trapezoid, and
/// cumulative segment areas are precomputed so `integrate` costs two lookups.
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Integral from `x[0]` to `x[i]`.
    area: Vec<f64>,
    dropped: usize,
}

impl LinearInterpolant {
    /// Build from knots. Non-finite knots are dropped; at least two distinct
    /// `x` values must remain.
    pub fn new(knots: impl IntoIterator<Item = (f64, f64)>) -> ReleaseResult<Self> {
        let mut pts = Vec::new();
        let mut dropped = 0;
        for (x, y) in knots {
            if x.is_finite() && y.is_finite() {
                pts.push((x, y));
            } else {
                dropped += 1;
            }
        }
        pts.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (x, y): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        if x.len() < 2 || x[0] == x[x.len() - 1] {
            return Err(ReleaseError::InvalidArg {
                what: "interpolant needs two distinct finite knots",
            });
        }

        let mut area = Vec::with_capacity(x.len());
        area.push(0.0);
        for i in 1..x.len() {
            let seg = 0.5 * (y[i - 1] + y[i]) * (x[i] - x[i - 1]);
            area.push(area[i - 1] + seg);
        }

        Ok(Self {
            x,
            y,
            area,
            dropped,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Number of knots discarded as non-finite.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn check(&self, x: f64) -> ReleaseResult<()> {
        let (min, max) = self.domain();
        if x.is_finite() && x >= min && x <= max {
            Ok(())
        } else {
            Err(ReleaseError::InterpolationDomain { x, min, max })
        }
    }

    /// Segment `i` such that `x[i] <= x <= x[i + 1]`.
    fn segment(&self, x: f64) -> usize {
        let n = self.x.len();
        self.x.partition_point(|&xi| xi <= x).clamp(1, n - 1) - 1
    }

    fn eval_in(&self, seg: usize, x: f64) -> f64 {
        let (x0, x1) = (self.x[seg], self.x[seg + 1]);
        let (y0, y1) = (self.y[seg], self.y[seg + 1]);
        let w = x1 - x0;
        if w == 0.0 {
            return y1;
        }
        y0 + (y1 - y0) * (x - x0) / w
    }

    pub fn eval(&self, x: f64) -> ReleaseResult<f64> {
        self.check(x)?;
        Ok(self.eval_in(self.segment(x), x))
    }

    fn primitive(&self, x: f64) -> f64 {
        let seg = self.segment(x);
        let x0 = self.x[seg];
        self.area[seg] + 0.5 * (self.y[seg] + self.eval_in(seg, x)) * (x - x0)
    }

    /// Signed integral from `a` to `b`; reversed bounds negate the result.
    pub fn integrate(&self, a: f64, b: f64) -> ReleaseResult<f64> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.primitive(b) - self.primitive(a))
    }
}
