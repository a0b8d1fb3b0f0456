//! Renderer-agnostic geometry descriptors. A transform emits these and a
//! canvas program draws them; every descriptor carries enough data to draw
//! and label itself without going back to the source records.

use iced::Color;

/// One pie or donut slice. Angles are radians, measured clockwise from
/// 12 o'clock, matching the original pie generator's convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSlice {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: Color,
    pub label: String,
    pub value: f32,
    /// Hover tooltip text.
    pub detail: String,
}

impl ArcSlice {
    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Point at `radius` along the slice's mid-angle, relative to the chart
    /// center. With the clockwise-from-top convention, x grows rightwards
    /// and y downwards.
    pub fn point_at(&self, radius: f32) -> (f32, f32) {
        let angle = self.mid_angle();
        (radius * angle.sin(), -radius * angle.cos())
    }

    /// Centroid of the slice area, midway between the two radii.
    pub fn centroid(&self) -> (f32, f32) {
        self.point_at((self.inner_radius + self.outer_radius) / 2.0)
    }

    pub fn contains_angle(&self, angle: f32) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// An axis-aligned bar in pixel space. `opacity` carries the grouped-bar
/// dim state; it never filters a bar out.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub label: String,
    pub opacity: f32,
}

/// One vertex of a line path, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

/// One cubic segment of a smoothed line path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub from: PathPoint,
    pub ctrl1: PathPoint,
    pub ctrl2: PathPoint,
    pub to: PathPoint,
}

/// One vertex of a radar polygon: angle clockwise from 12 o'clock, radius
/// in pixels from the chart center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialPoint {
    pub angle: f32,
    pub radius: f32,
}

impl RadialPoint {
    /// Cartesian position relative to the chart center, y growing downwards.
    pub fn to_xy(self) -> (f32, f32) {
        (self.radius * self.angle.sin(), -self.radius * self.angle.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_points_follow_the_clock() {
        let slice = ArcSlice {
            inner_radius: 0.0,
            outer_radius: 10.0,
            start_angle: 0.0,
            end_angle: std::f32::consts::PI,
            color: Color::WHITE,
            label: String::new(),
            value: 1.0,
            detail: String::new(),
        };
        // Mid-angle is 3 o'clock: straight right.
        let (x, y) = slice.point_at(10.0);
        assert!((x - 10.0).abs() < 1e-4);
        assert!(y.abs() < 1e-4);
    }

    #[test]
    fn radial_point_at_zero_angle_points_up() {
        let (x, y) = RadialPoint {
            angle: 0.0,
            radius: 5.0,
        }
        .to_xy();
        assert!(x.abs() < 1e-4);
        assert!((y + 5.0).abs() < 1e-4);
    }
}
