//! 3D vector value type mirroring the [`Vec2`](crate::Vec2) operation set.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{parse, scalar};

/// A point or direction in 3D Euclidean space.
///
/// Same value-type conventions as [`Vec2`](crate::Vec2); the in-plane helpers
/// (`perpendicular`, `signed_angle`) are replaced by the 3D cross product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Checked component access: `0` is x, `1` is y, `2` is z.
    ///
    /// # Errors
    ///
    /// `Error::ComponentOutOfRange` for any other index
    pub const fn component(self, index: usize) -> Result<f32, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Error::ComponentOutOfRange { index, dims: 3 }),
        }
    }

    /// Mutable counterpart of [`component`](Self::component).
    ///
    /// # Errors
    ///
    /// `Error::ComponentOutOfRange` for any index other than `0`, `1` or `2`
    pub fn component_mut(&mut self, index: usize) -> Result<&mut f32, Error> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(Error::ComponentOutOfRange { index, dims: 3 }),
        }
    }

    /// Euclidean length, accumulated in `f64`.
    pub fn magnitude(self) -> f32 {
        scalar::sqrt(self.sqr_magnitude())
    }

    /// Squared length.
    pub fn sqr_magnitude(self) -> f32 {
        let sum = f64::from(self.x) * f64::from(self.x)
            + f64::from(self.y) * f64::from(self.y)
            + f64::from(self.z) * f64::from(self.z);
        sum as f32
    }

    /// Rescales to unit length in place; near-zero vectors become
    /// [`Self::ZERO`].
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if f64::from(magnitude) > f64::from(scalar::EPSILON) {
            self.set(self.x / magnitude, self.y / magnitude, self.z / magnitude);
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

    /// Adds 1 to all components and returns the mutated self for chaining.
    pub fn increment(&mut self) -> &mut Self {
        self.x += 1.0;
        self.y += 1.0;
        self.z += 1.0;
        self
    }

    /// Subtracts 1 from all components and returns the mutated self.
    pub fn decrement(&mut self) -> &mut Self {
        self.x -= 1.0;
        self.y -= 1.0;
        self.z -= 1.0;
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

    /// Renders as `"(x, y, z)"` with the given fixed-point precision.
    pub fn to_string_with_precision(self, precision: usize) -> String {
        format!(
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }

    /// Component-wise `>`; partial order, see [`Vec2::cmpgt`](crate::Vec2::cmpgt).
    pub fn cmpgt(self, rhs: Self) -> bool {
        self.x > rhs.x && self.y > rhs.y && self.z > rhs.z
    }

    /// Component-wise `<`.
    pub fn cmplt(self, rhs: Self) -> bool {
        self.x < rhs.x && self.y < rhs.y && self.z < rhs.z
    }

    /// Component-wise `>=`.
    pub fn cmpge(self, rhs: Self) -> bool {
        self.x >= rhs.x && self.y >= rhs.y && self.z >= rhs.z
    }

    /// Component-wise `<=`.
    pub fn cmple(self, rhs: Self) -> bool {
        self.x <= rhs.x && self.y <= rhs.y && self.z <= rhs.z
    }

    /// Interpolates from `a` to `b` by `t`, clamped to `[0, 1]`.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, scalar::clamp01(t))
    }

    /// Interpolates by unrestricted `t`.
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        Self::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }

    /// Steps from `current` toward `target` by at most `max_delta`, snapping
    /// when within range or when the gap has zero length.
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

    /// Scalar dot product, accumulated in `f64`.
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        let sum = f64::from(lhs.x) * f64::from(rhs.x)
            + f64::from(lhs.y) * f64::from(rhs.y)
            + f64::from(lhs.z) * f64::from(rhs.z);
        sum as f32
    }

    /// Cross product; right-handed, so `cross(RIGHT, UP) == FORWARD`.
    pub fn cross(lhs: Self, rhs: Self) -> Self {
        Self::new(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }

    /// Unsigned angle between `from` and `to` in degrees; 0 when either
    /// vector is near zero-length.
    pub fn angle(from: Self, to: Self) -> f32 {
        let denominator = scalar::sqrt(from.sqr_magnitude() * to.sqr_magnitude());
        if denominator < scalar::EPSILON_NORMAL_SQRT {
            return 0.0;
        }

        let dot = scalar::clamp(Self::dot(from, to) / denominator, -1.0, 1.0);
        scalar::acos(dot) * scalar::RAD2DEG
    }

    /// Euclidean distance between two points, delta computed in `f64`.
    pub fn distance(a: Self, b: Self) -> f32 {
        let delta_x = f64::from(b.x) - f64::from(a.x);
        let delta_y = f64::from(b.y) - f64::from(a.y);
        let delta_z = f64::from(b.z) - f64::from(a.z);
        scalar::sqrt((delta_x * delta_x + delta_y * delta_y + delta_z * delta_z) as f32)
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
        Self::new(
            scalar::min(lhs.x, rhs.x),
            scalar::min(lhs.y, rhs.y),
            scalar::min(lhs.z, rhs.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(lhs: Self, rhs: Self) -> Self {
        Self::new(
            scalar::max(lhs.x, rhs.x),
            scalar::max(lhs.y, rhs.y),
            scalar::max(lhs.z, rhs.z),
        )
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Hadamard product, not the dot product.
impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

/// Component-wise division.
impl Div for Vec3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, scale: f32) -> Self {
        Self::new(self.x / scale, self.y / scale, self.z / scale)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    /// Panicking form of [`component`](Self::component).
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", Error::ComponentOutOfRange { index, dims: 3 }),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", Error::ComponentOutOfRange { index, dims: 3 }),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}

impl From<Vec3> for String {
    fn from(vector: Vec3) -> Self {
        vector.to_string()
    }
}

impl FromStr for Vec3 {
    type Err = Error;

    /// Same convention as [`Vec2`](crate::Vec2): components separated by one
    /// unvalidated character each, parentheses optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = parse::strip_parens(s);
        let (x, rest) = parse::component(s)?;
        let rest = parse::skip_separator(rest);
        let (y, rest) = parse::component(rest)?;
        let rest = parse::skip_separator(rest);
        let (z, _rest) = parse::component(rest)?;

        Ok(Self::new(x, y, z))
    }
}
