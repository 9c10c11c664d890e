//! Fixed-spacing grid over the integration interval.

use crate::Float;

/// Build the grid x_i = x0 + i*h covering `[x0, xend + h)`.
///
/// The element count is `ceil(((xend + h) - x0) / h)`, so the last point is
/// at or past `xend` and may overshoot it by up to one step when the ratio
/// lands just above an integer. The overshoot is kept as-is, never clamped
/// back to `xend`.
pub(crate) fn build(x0: Float, xend: Float, h: Float) -> Vec<Float> {
    let stop = xend + h;
    let n = ((stop - x0) / h).ceil() as usize;
    let mut x = Vec::with_capacity(n);
    for i in 0..n {
        x.push(x0 + i as Float * h);
    }
    x
}
