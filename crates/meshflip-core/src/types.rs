//! Small value types shared across the workspace

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Coordinate axis a mesh can be mirrored along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Per-axis multiplier that mirrors along this axis
    pub fn flip_factor(self) -> Vec3 {
        match self {
            Axis::X => Vec3::new(-1.0, 1.0, 1.0),
            Axis::Y => Vec3::new(1.0, -1.0, 1.0),
            Axis::Z => Vec3::new(1.0, 1.0, -1.0),
        }
    }

    /// Component index (0 = x, 1 = y, 2 = z)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all points. An empty set gives a zero box at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        rest.iter().fold(Self::new(*first, *first), |bounds, p| Self {
            min: bounds.min.min(*p),
            max: bounds.max.max(*p),
        })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths of the box
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half the size
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_factor_has_single_negative_component() {
        for axis in Axis::ALL {
            let factor = axis.flip_factor();
            for i in 0..3 {
                let expected = if i == axis.index() { -1.0 } else { 1.0 };
                assert_eq!(factor[i], expected, "axis {}", axis.name());
            }
        }
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points(&[
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-3.0, 4.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]);
        assert_eq!(bounds.min, Vec3::new(-3.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 2.0));
        assert_eq!(bounds.center(), Vec3::new(-1.0, 1.0, 1.0));
        assert_eq!(bounds.extents(), Vec3::new(2.0, 3.0, 1.0));
        assert!(bounds.contains(Vec3::ZERO));
        assert!(!bounds.contains(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(Bounds::from_points(&[]), Bounds::default());
    }

    #[test]
    fn test_axis_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            axis: Axis,
        }
        let parsed: Wrapper = toml::from_str("axis = \"y\"").unwrap();
        assert_eq!(parsed.axis, Axis::Y);
        assert!(toml::from_str::<Wrapper>("axis = \"w\"").is_err());
    }
}
