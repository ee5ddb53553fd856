//! A 2-dimensional vector/point.

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, derive_more::Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

impl V2 {
    pub const ZERO: V2 = V2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> V2 {
        V2 { x, y }
    }

    /// Build a vector from a magnitude and an angle in radians, measured counterclockwise from the positive x axis.
    pub fn polar(magnitude: f64, angle: f64) -> V2 {
        let (sin, cos) = angle.sin_cos();
        V2 {
            x: magnitude * cos,
            y: magnitude * sin,
        }
    }

    /// Angle of this vector in radians, in `[-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2 {
        let l = self.length();
        V2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    pub fn dot(&self, other: &V2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3d cross product, or the signed area of the parallelogram spanned by both vectors.
    pub fn cross(&self, other: &V2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate 90 degrees counterclockwise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn perpendicular(self) -> V2 {
        V2 {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn distance_squared(&self, other: &V2) -> f64 {
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2)
    }

    pub fn distance(&self, other: &V2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for V2 {
    type Output = V2;

    fn add(self, rhs: V2) -> V2 {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for V2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for V2 {
    type Output = V2;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::ops::Div<f64> for V2 {
    type Output = V2;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl std::ops::Neg for V2 {
    type Output = V2;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Sub for V2 {
    type Output = V2;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::SubAssign for V2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
