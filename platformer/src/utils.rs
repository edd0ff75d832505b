/// Sign as the physics engine defines it: `-1.0` for negative values, `1.0` otherwise.
///
/// Zero counts as positive, so `engine_sign(0.0) == engine_sign(3.0)`.
#[inline]
pub fn engine_sign(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
