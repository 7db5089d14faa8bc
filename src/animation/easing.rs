/// Quartic ease-out: f(t) = 1 - (1-t)⁴, with `t` clamped to [0, 1].
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}
