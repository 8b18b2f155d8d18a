/// Circular on-screen region that selects an interaction mode when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRegion {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl ModeRegion {
    pub const fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Squared Euclidean distance from `(x, y)` to the center.
    ///
    /// Widened to `i128`: an `i32` difference squared does not fit in `i64`.
    pub fn distance_squared(&self, x: i32, y: i32) -> i128 {
        let dx = i128::from(self.center_x) - i128::from(x);
        let dy = i128::from(self.center_y) - i128::from(y);
        dx * dx + dy * dy
    }

    /// Strictly inside the circle; points on the rim do not count.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = i128::from(self.radius);
        self.distance_squared(x, y) < r * r
    }
}
