//! Adaptive Simpson quadrature over a finite interval.
//!
//! The interval is first cut into [`PANELS`] equal panels, each refined
//! independently until the Richardson error estimate is below its share of
//! the tolerance. A sharply peaked integrand therefore cannot hide between the
//! three initial sample points.

use thiserror::Error;

/// Absolute tolerance used by [`quad`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Maximum number of bisections per panel used by [`quad`].
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Number of equal panels the interval is split into before refinement.
pub const PANELS: usize = 16;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("integration bounds must be finite with a <= b, got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    /// The integrand returned `inf` or `NaN`.
    #[error("integrand is not finite at x = {x}")]
    NonFinite { x: f64 },

    /// The depth budget ran out before the error estimate met tolerance.
    #[error("no convergence on [{a}, {b}] within the subdivision limit")]
    NotConverged { a: f64, b: f64 },
}

/// Integrates `f` over `[a, b]` with [`DEFAULT_TOLERANCE`] and [`DEFAULT_MAX_DEPTH`].
pub fn quad<F>(f: F, a: f64, b: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    adaptive_simpson(f, a, b, DEFAULT_TOLERANCE, DEFAULT_MAX_DEPTH)
}

/// Integrates `f` over `[a, b]` to an absolute `tolerance`.
///
/// Each panel may be bisected at most `max_depth` times.
///
/// # Errors
///
/// - [`QuadratureError::InvalidBounds`] if a bound is not finite or `a > b`.
/// - [`QuadratureError::NonFinite`] if `f` returns `inf` or `NaN` at a sample.
/// - [`QuadratureError::NotConverged`] if some panel still misses its tolerance
///   after `max_depth` bisections.
pub fn adaptive_simpson<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_depth: u32,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() || a > b {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    if a == b {
        return Ok(0.0);
    }

    let eval = |x: f64| -> Result<f64, QuadratureError> {
        let y = f(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadratureError::NonFinite { x })
        }
    };

    let width = (b - a) / PANELS as f64;
    let panel_tolerance = tolerance / PANELS as f64;

    let mut total = 0.0;
    let mut left = a;
    let mut f_left = eval(left)?;
    for i in 1..=PANELS {
        // pin the last edge to `b` so rounding in `width` never shortens the domain
        let right = if i == PANELS { b } else { a + width * i as f64 };
        let mid = 0.5 * (left + right);
        let f_mid = eval(mid)?;
        let f_right = eval(right)?;
        let whole = simpson(left, right, f_left, f_mid, f_right);

        total += refine(
            &eval,
            Interval {
                a: left,
                b: right,
                fa: f_left,
                fm: f_mid,
                fb: f_right,
            },
            whole,
            panel_tolerance,
            max_depth,
        )?;

        left = right;
        f_left = f_right;
    }
    Ok(total)
}

#[derive(Clone, Copy)]
struct Interval {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<E>(
    eval: &E,
    iv: Interval,
    whole: f64,
    tolerance: f64,
    depth: u32,
) -> Result<f64, QuadratureError>
where
    E: Fn(f64) -> Result<f64, QuadratureError>,
{
    let m = 0.5 * (iv.a + iv.b);
    let f_lm = eval(0.5 * (iv.a + m))?;
    let f_rm = eval(0.5 * (m + iv.b))?;
    let left = simpson(iv.a, m, iv.fa, f_lm, iv.fm);
    let right = simpson(m, iv.b, iv.fm, f_rm, iv.fb);
    let delta = left + right - whole;

    if delta.abs() <= 15.0 * tolerance {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(QuadratureError::NotConverged { a: iv.a, b: iv.b });
    }

    let lower = Interval {
        a: iv.a,
        b: m,
        fa: iv.fa,
        fm: f_lm,
        fb: iv.fm,
    };
    let upper = Interval {
        a: m,
        b: iv.b,
        fa: iv.fm,
        fm: f_rm,
        fb: iv.fb,
    };
    Ok(refine(eval, lower, left, 0.5 * tolerance, depth - 1)?
        + refine(eval, upper, right, 0.5 * tolerance, depth - 1)?)
}
