//! Scalar math helpers shared by the vector types.

/// Degrees per radian.
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

/// Below this magnitude a vector is treated as zero-length when normalizing.
pub const EPSILON: f32 = 9.999_999_747_378_752e-6;

/// Near-zero denominator guard for angle computations.
pub const EPSILON_NORMAL_SQRT: f32 = 1e-15;

#[inline]
pub fn sqrt(v: f32) -> f32 {
    v.sqrt()
}

#[inline]
pub fn acos(v: f32) -> f32 {
    v.acos()
}

/// `1.0` for non-negative values, `-1.0` otherwise.
///
/// Unlike `f32::signum` both zeros map to `1.0`.
#[inline]
pub fn sign(v: f32) -> f32 {
    if v >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.clamp(min, max)
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    a.min(b)
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    a.max(b)
}
