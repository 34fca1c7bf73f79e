// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// 3D vector with plain float32 arithmetic.
///
/// * Components may represent either points or directions depending on the
///   calling context; use [`crate::Mat4::transform_point`] for points
///   (homogeneous `w = 1`) and [`crate::Mat4::transform_direction`] for
///   directions (homogeneous `w = 0`).
/// * No operation validates its input. Non-finite components flow through
///   arithmetic unchanged, and [`Vec3::normalize`] divides by the length
///   without a zero guard.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (right-handed).
    ///
    /// # Examples
    /// ```
    /// use prism_math::Vec3;
    /// let z = Vec3::UNIT_X.cross(&Vec3::UNIT_Y);
    /// assert_eq!(z.to_array(), [0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    ///
    /// NaN components propagate into the result; the zero vector has
    /// length `0.0` with no special-casing.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector by dividing each component by its length.
    ///
    /// No zero guard: a zero-length input divides by zero and yields
    /// non-finite components. Callers that need defined behaviour for
    /// degenerate vectors must check [`Vec3::length`] first.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Vec3;
    /// let n = Vec3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(n.to_array(), [0.6, 0.8, 0.0]);
    /// ```
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Reflects the vector across a surface `normal`.
    ///
    /// Computes `2 * (self · normal) * normal - self`. The normal must be
    /// unit length; no normalization is applied internally, and a non-unit
    /// normal scales and skews the result.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Vec3;
    /// let v = Vec3::new(1.0, 1.0, 0.0);
    /// let r = v.reflect(&Vec3::UNIT_Y);
    /// assert_eq!(r.to_array(), [-1.0, 1.0, 0.0]);
    /// ```
    pub fn reflect(&self, normal: &Self) -> Self {
        normal.scale(2.0 * self.dot(normal)).sub(self)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use prism_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
