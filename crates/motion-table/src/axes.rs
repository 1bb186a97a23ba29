//! Detection of three-axis acceleration columns by name.

use serde::Serialize;

/// Column indices of the X, Y, and Z acceleration axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccelAxes {
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
}

impl AccelAxes {
    /// Classifies column names containing `"accel"` (case-insensitive).
    ///
    /// A matching name is X if it contains `x`, else Y if it contains `y`,
    /// else Z if it contains `z`. So `"accel_xy"` counts as X only. When
    /// several names map to the same axis, the last one wins.
    pub fn detect<S: AsRef<str>>(names: &[S]) -> Self {
        let mut axes = Self::default();
        for (idx, name) in names.iter().enumerate() {
            let lower = name.as_ref().to_lowercase();
            if !lower.contains("accel") {
                continue;
            }
            if lower.contains('x') {
                axes.x = Some(idx);
            } else if lower.contains('y') {
                axes.y = Some(idx);
            } else if lower.contains('z') {
                axes.z = Some(idx);
            }
        }
        axes
    }

    /// Returns true if all three axes were found.
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some()
    }

    /// Axis labels paired with their resolved column, in X, Y, Z order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<usize>)> {
        [("x", self.x), ("y", self.y), ("z", self.z)].into_iter()
    }

    /// Column indices in X, Y, Z order; a missing axis maps to column 0.
    pub fn indices_or_first(&self) -> [usize; 3] {
        [
            self.x.unwrap_or(0),
            self.y.unwrap_or(0),
            self.z.unwrap_or(0),
        ]
    }
}
