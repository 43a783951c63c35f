//! 2D vector value type and geometry helpers.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{parse, scalar};

/// A point or direction in 2D Euclidean space.
///
/// Plain value type: arithmetic operators produce new values, the `*_assign`
/// forms mutate in place. Magnitude, dot product and distance accumulate in
/// `f64` before narrowing back to `f32` to limit cancellation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Checked component access: `0` is x, `1` is y.
    ///
    /// # Errors
    ///
    /// `Error::ComponentOutOfRange` for any other index
    pub const fn component(self, index: usize) -> Result<f32, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::ComponentOutOfRange { index, dims: 2 }),
        }
    }

    /// Mutable counterpart of [`component`](Self::component).
    ///
    /// # Errors
    ///
    /// `Error::ComponentOutOfRange` for any index other than `0` or `1`
    pub fn component_mut(&mut self, index: usize) -> Result<&mut f32, Error> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(Error::ComponentOutOfRange { index, dims: 2 }),
        }
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        let sum = f64::from(self.x) * f64::from(self.x) + f64::from(self.y) * f64::from(self.y);
        scalar::sqrt(sum as f32)
    }

    /// Squared length. Cheaper than [`magnitude`](Self::magnitude) for
    /// comparisons.
    pub fn sqr_magnitude(self) -> f32 {
        let sum = f64::from(self.x) * f64::from(self.x) + f64::from(self.y) * f64::from(self.y);
        sum as f32
    }

    /// Rescales to unit length in place. A vector with magnitude below
    /// [`scalar::EPSILON`] becomes the zero vector instead of dividing by
    /// near-zero.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if f64::from(magnitude) > f64::from(scalar::EPSILON) {
            self.set(self.x / magnitude, self.y / magnitude);
        } else {
            *self = Self::ZERO;
        }
    }

    /// Non-mutating form of [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut vector = self;
        vector.normalize();
        vector
    }

    /// Multiplies component-wise by `scale` in place.
    pub fn set_scale(&mut self, scale: Self) {
        *self *= scale;
    }

    /// Adds 1 to both components and returns the mutated self for chaining.
    pub fn increment(&mut self) -> &mut Self {
        self.x += 1.0;
        self.y += 1.0;
        self
    }

    /// Subtracts 1 from both components and returns the mutated self.
    pub fn decrement(&mut self) -> &mut Self {
        self.x -= 1.0;
        self.y -= 1.0;
        self
    }

    /// Like [`increment`](Self::increment) but returns the pre-mutation
    /// snapshot.
    #[must_use]
    pub fn post_increment(&mut self) -> Self {
        let snapshot = *self;
        self.increment();
        snapshot
    }

    /// Like [`decrement`](Self::decrement) but returns the pre-mutation
    /// snapshot.
    #[must_use]
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = *self;
        self.decrement();
        snapshot
    }

    /// Renders as `"(x, y)"` with the given fixed-point precision.
    /// [`Display`](fmt::Display) uses precision 2.
    pub fn to_string_with_precision(self, precision: usize) -> String {
        format!("({:.p$}, {:.p$})", self.x, self.y, p = precision)
    }

    /// Component-wise `>`: both components must be greater.
    ///
    /// The four `cmp*` checks form a partial order, not a total one: a vector
    /// pair with one component greater and one lesser satisfies none of them.
    /// Do not use them as a sort key.
    pub fn cmpgt(self, rhs: Self) -> bool {
        self.x > rhs.x && self.y > rhs.y
    }

    /// Component-wise `<`: both components must be lesser.
    pub fn cmplt(self, rhs: Self) -> bool {
        self.x < rhs.x && self.y < rhs.y
    }

    /// Component-wise `>=`.
    pub fn cmpge(self, rhs: Self) -> bool {
        self.x >= rhs.x && self.y >= rhs.y
    }

    /// Component-wise `<=`.
    pub fn cmple(self, rhs: Self) -> bool {
        self.x <= rhs.x && self.y <= rhs.y
    }

    /// Interpolates from `a` to `b` by `t`, clamped to `[0, 1]`.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, scalar::clamp01(t))
    }

    /// Interpolates from `a` to `b` by unrestricted `t`; values outside
    /// `[0, 1]` extrapolate.
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        Self::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// Steps from `current` toward `target` by at most `max_delta`. Snaps to
    /// `target` when already within `max_delta` or when the gap has zero
    /// length.
    pub fn move_towards(current: Self, target: Self, max_delta: f32) -> Self {
        let gap = target - current;
        let magnitude = gap.magnitude();
        if f64::from(magnitude) <= f64::from(max_delta) || magnitude == 0.0 {
            return target;
        }

        current + gap / magnitude * max_delta
    }

    /// Hadamard (component-wise) product.
    pub fn scale(a: Self, b: Self) -> Self {
        a * b
    }

    /// Mirrors `direction` about `normal`: `d - 2(n·d)n`.
    pub fn reflect(direction: Self, normal: Self) -> Self {
        normal * (-2.0 * Self::dot(normal, direction)) + direction
    }

    /// Rotates 90 degrees counter-clockwise: `(-y, x)`.
    pub fn perpendicular(direction: Self) -> Self {
        Self::new(-direction.y, direction.x)
    }

    /// Scalar dot product.
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        let sum = f64::from(lhs.x) * f64::from(rhs.x) + f64::from(lhs.y) * f64::from(rhs.y);
        sum as f32
    }

    /// Unsigned angle between `from` and `to` in degrees.
    ///
    /// Returns 0 when either vector is near zero-length. The dot ratio is
    /// clamped to `[-1, 1]` before the inverse cosine to guard against
    /// floating-point overshoot.
    pub fn angle(from: Self, to: Self) -> f32 {
        let denominator = scalar::sqrt(from.sqr_magnitude() * to.sqr_magnitude());
        if denominator < scalar::EPSILON_NORMAL_SQRT {
            return 0.0;
        }

        let dot = scalar::clamp(Self::dot(from, to) / denominator, -1.0, 1.0);
        scalar::acos(dot) * scalar::RAD2DEG
    }

    /// [`angle`](Self::angle) with the sign of the 2D cross product
    /// `from.x * to.y - from.y * to.x`; positive when `to` is
    /// counter-clockwise from `from`.
    pub fn signed_angle(from: Self, to: Self) -> f32 {
        let unsigned = Self::angle(from, to);
        let sign = scalar::sign(from.x * to.y - from.y * to.x);
        unsigned * sign
    }

    /// Euclidean distance between two points.
    pub fn distance(a: Self, b: Self) -> f32 {
        let delta_x = f64::from(b.x) - f64::from(a.x);
        let delta_y = f64::from(b.y) - f64::from(a.y);
        scalar::sqrt((delta_x * delta_x + delta_y * delta_y) as f32)
    }

    /// Returns `vector` unchanged when its length is at most `max_length`,
    /// otherwise rescaled to that length.
    pub fn clamp_magnitude(vector: Self, max_length: f32) -> Self {
        if f64::from(vector.sqr_magnitude()) > f64::from(max_length) * f64::from(max_length) {
            vector.normalized() * max_length
        } else {
            vector
        }
    }

    /// Static form of [`sqr_magnitude`](Self::sqr_magnitude).
    pub fn sqr_magnitude_of(a: Self) -> f32 {
        a.sqr_magnitude()
    }

    /// Component-wise minimum.
    pub fn min(lhs: Self, rhs: Self) -> Self {
        Self::new(scalar::min(lhs.x, rhs.x), scalar::min(lhs.y, rhs.y))
    }

    /// Component-wise maximum.
    pub fn max(lhs: Self, rhs: Self) -> Self {
        Self::new(scalar::max(lhs.x, rhs.x), scalar::max(lhs.y, rhs.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Hadamard product, not the dot product.
impl Mul for Vec2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

/// Component-wise division.
impl Div for Vec2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, scale: f32) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec2 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    /// Panicking form of [`component`](Self::component).
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", Error::ComponentOutOfRange { index, dims: 2 }),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", Error::ComponentOutOfRange { index, dims: 2 }),
        }
    }
}

impl fmt::Display for Vec2 {
    /// Renders `"(x, y)"` fixed-point; `{:.3}` style precision overrides the
    /// default of 2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "({:.p$}, {:.p$})", self.x, self.y, p = precision)
    }
}

impl From<Vec2> for String {
    fn from(vector: Vec2) -> Self {
        vector.to_string()
    }
}

impl FromStr for Vec2 {
    type Err = Error;

    /// Reads the convention written by `Display`: x, one separator character
    /// (not validated), then y. Surrounding parentheses are optional and
    /// input past the second component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = parse::strip_parens(s);
        let (x, rest) = parse::component(s)?;
        let rest = parse::skip_separator(rest);
        let (y, _rest) = parse::component(rest)?;

        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn additive_identities() {
        let v = Vec2::new(3.5, -2.0);

        assert_eq!(v + Vec2::ZERO, v);
        assert_eq!(v - v, Vec2::ZERO);
        assert_eq!(v * 1.0, v);
    }

    #[test]
    fn hadamard_and_componentwise_division() {
        let a = Vec2::new(2.0, -3.0);
        let b = Vec2::new(4.0, 2.0);

        assert_eq!(a * b, Vec2::new(8.0, -6.0));
        assert_eq!(Vec2::scale(a, b), a * b);
        assert_eq!(a / b, Vec2::new(0.5, -1.5));
        assert_eq!(a / 2.0, Vec2::new(1.0, -1.5));
    }

    #[test]
    fn assign_forms_mutate_in_place() {
        let mut v = Vec2::new(1.0, 2.0);

        v += Vec2::new(2.0, 3.0);
        assert_eq!(v, Vec2::new(3.0, 5.0));

        v -= Vec2::ONE;
        assert_eq!(v, Vec2::new(2.0, 4.0));

        v *= Vec2::new(3.0, 0.5);
        assert_eq!(v, Vec2::new(6.0, 2.0));

        v /= Vec2::new(2.0, 2.0);
        assert_eq!(v, Vec2::new(3.0, 1.0));

        v.set_scale(Vec2::new(0.0, 2.0));
        assert_eq!(v, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn magnitude_and_distance() {
        assert_relative_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
        assert_relative_eq!(Vec2::new(3.0, 4.0).sqr_magnitude(), 25.0);
        assert_relative_eq!(Vec2::sqr_magnitude_of(Vec2::new(3.0, 4.0)), 25.0);
        assert_relative_eq!(Vec2::distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalized();

        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn normalize_of_near_zero_is_zero() {
        let mut v = Vec2::new(1e-6, -1e-6);
        v.normalize();

        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(3.0, 5.0);

        assert_eq!(Vec2::lerp(a, b, 0.0), a);
        assert_eq!(Vec2::lerp(a, b, 1.0), b);
        assert_eq!(Vec2::lerp(a, b, -4.0), a);
        assert_eq!(Vec2::lerp(a, b, 2.0), b);
        assert_eq!(Vec2::lerp(a, b, 0.5), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn lerp_unclamped_extrapolates() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(3.0, 5.0);

        assert_eq!(Vec2::lerp_unclamped(a, b, 2.0), Vec2::new(5.0, 9.0));
        assert_eq!(Vec2::lerp_unclamped(a, b, -1.0), Vec2::new(-1.0, -3.0));
    }

    #[test]
    fn move_towards_steps_and_snaps() {
        let stepped = Vec2::move_towards(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0);
        assert_relative_eq!(stepped.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(stepped.y, 0.0);

        // within max_delta: snaps, no overshoot
        let snapped = Vec2::move_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0);
        assert_eq!(snapped, Vec2::new(1.0, 0.0));

        // zero-length gap
        let v = Vec2::new(2.0, 2.0);
        assert_eq!(Vec2::move_towards(v, v, 0.0), v);
    }

    #[test]
    fn reflect_about_axis() {
        let reflected = Vec2::reflect(Vec2::new(1.0, -1.0), Vec2::UP);

        assert_relative_eq!(reflected.x, 1.0);
        assert_relative_eq!(reflected.y, 1.0);
    }

    #[test]
    fn perpendicular_rotates_ccw() {
        assert_eq!(Vec2::perpendicular(Vec2::RIGHT), Vec2::UP);
        assert_eq!(Vec2::perpendicular(Vec2::UP), Vec2::LEFT);
        assert_eq!(Vec2::perpendicular(Vec2::new(2.0, 3.0)), Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn dot_product() {
        assert_relative_eq!(Vec2::dot(Vec2::RIGHT, Vec2::UP), 0.0);
        assert_relative_eq!(Vec2::dot(Vec2::new(2.0, 3.0), Vec2::new(4.0, -1.0)), 5.0);
    }

    #[test]
    fn angle_between_axes() {
        assert_relative_eq!(Vec2::angle(Vec2::RIGHT, Vec2::UP), 90.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::angle(Vec2::RIGHT, Vec2::LEFT), 180.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::angle(Vec2::RIGHT, Vec2::RIGHT), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn angle_of_near_zero_vector_is_zero() {
        assert_eq!(Vec2::angle(Vec2::ZERO, Vec2::UP), 0.0);
        assert_eq!(Vec2::angle(Vec2::new(1e-20, 0.0), Vec2::UP), 0.0);
    }

    #[test]
    fn signed_angle_follows_winding() {
        assert_relative_eq!(Vec2::signed_angle(Vec2::RIGHT, Vec2::UP), 90.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::signed_angle(Vec2::UP, Vec2::RIGHT), -90.0, epsilon = 1e-4);
    }

    #[test]
    fn clamp_magnitude_rescales_long_vectors() {
        let clamped = Vec2::clamp_magnitude(Vec2::new(3.0, 4.0), 2.0);
        assert_relative_eq!(clamped.magnitude(), 2.0, epsilon = 1e-6);
        assert_relative_eq!(clamped.x, 1.2, epsilon = 1e-6);
        assert_relative_eq!(clamped.y, 1.6, epsilon = 1e-6);

        let untouched = Vec2::new(1.0, 1.0);
        assert_eq!(Vec2::clamp_magnitude(untouched, 2.0), untouched);
    }

    #[test]
    fn min_max_are_componentwise() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, 2.0);

        assert_eq!(Vec2::min(a, b), Vec2::new(1.0, 2.0));
        assert_eq!(Vec2::max(a, b), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn componentwise_order_is_partial() {
        assert!(Vec2::new(2.0, 3.0).cmpgt(Vec2::ONE));
        assert!(Vec2::ONE.cmplt(Vec2::new(2.0, 3.0)));
        assert!(Vec2::new(1.0, 3.0).cmpge(Vec2::new(1.0, 2.0)));
        assert!(Vec2::new(1.0, 2.0).cmple(Vec2::new(1.0, 2.0)));

        // one component greater, one lesser: no relation holds
        let mixed = Vec2::new(2.0, 0.0);
        assert!(!mixed.cmpgt(Vec2::ONE));
        assert!(!mixed.cmplt(Vec2::ONE));
        assert!(mixed != Vec2::ONE);
    }

    #[test]
    fn inequality_on_single_differing_component() {
        // differs in y only; still unequal
        assert!(Vec2::new(1.0, 2.0) != Vec2::new(1.0, 3.0));
    }

    #[test]
    fn indexing_maps_to_components() {
        let mut v = Vec2::new(1.0, 2.0);

        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    fn checked_component_access() {
        let mut v = Vec2::new(1.0, 2.0);

        assert_eq!(v.component(0), Ok(1.0));
        assert_eq!(
            v.component(2),
            Err(Error::ComponentOutOfRange { index: 2, dims: 2 })
        );

        *v.component_mut(0).unwrap() = 4.0;
        assert_eq!(v.x, 4.0);
        assert!(v.component_mut(5).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_past_y_panics() {
        let v = Vec2::ONE;
        let _ = v[2];
    }

    #[test]
    fn increment_and_decrement() {
        let mut v = Vec2::new(1.0, 2.0);

        v.increment();
        assert_eq!(v, Vec2::new(2.0, 3.0));

        let snapshot = v.post_increment();
        assert_eq!(snapshot, Vec2::new(2.0, 3.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));

        v.decrement();
        assert_eq!(v, Vec2::new(2.0, 3.0));

        let snapshot = v.post_decrement();
        assert_eq!(snapshot, Vec2::new(2.0, 3.0));
        assert_eq!(v, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn display_uses_fixed_point() {
        let v = Vec2::new(1.0, 2.0);

        assert_eq!(v.to_string(), "(1.00, 2.00)");
        assert_eq!(v.to_string_with_precision(0), "(1, 2)");
        assert_eq!(v.to_string_with_precision(3), "(1.000, 2.000)");
        assert_eq!(format!("{v:.1}"), "(1.0, 2.0)");
        assert_eq!(String::from(v), "(1.00, 2.00)");
    }

    #[test]
    fn parses_rendered_form() {
        let parsed: Vec2 = "(1.00, 2.00)".parse().unwrap();
        assert_eq!(parsed, Vec2::new(1.0, 2.0));

        let bare: Vec2 = "3,4".parse().unwrap();
        assert_eq!(bare, Vec2::new(3.0, 4.0));

        let spaced: Vec2 = "-1.5 0.25".parse().unwrap();
        assert_eq!(spaced, Vec2::new(-1.5, 0.25));

        assert!(matches!(
            "nope".parse::<Vec2>(),
            Err(Error::ParseVector(_))
        ));
    }

    #[test]
    fn parse_round_trips_display() {
        let v = Vec2::new(-3.25, 18.5);
        let round_tripped: Vec2 = v.to_string().parse().unwrap();

        assert_eq!(round_tripped, v);
    }
}
