//! Scale builders: pure mappings from a data domain to a pixel range. Each
//! chart transform composes these instead of doing its own coordinate math.

use iced::Color;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("cannot build a scale over an empty domain")]
    InvalidDomain,
}

/// Maps an ordered set of discrete categories to evenly sized slots of a
/// pixel range. Slot order is domain order.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f32, f32),
    padding: f32,
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f32, f32), padding: f32) -> Result<Self, ScaleError> {
        if domain.is_empty() {
            return Err(ScaleError::InvalidDomain);
        }
        Ok(Self {
            domain,
            range,
            padding: padding.clamp(0.0, 1.0),
        })
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn index(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|candidate| candidate == value)
    }

    /// Width of one slot including its share of padding.
    pub fn step(&self) -> f32 {
        (self.range.1 - self.range.0) / self.domain.len() as f32
    }

    /// Width of the painted band inside a slot.
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Start of the band for a category, `None` when the value is outside
    /// the domain.
    pub fn position(&self, value: &T) -> Option<f32> {
        let index = self.index(value)?;
        let step = self.step();
        Some(self.range.0 + index as f32 * step + step * self.padding / 2.0)
    }

    /// Center of the band for a category.
    pub fn center(&self, value: &T) -> Option<f32> {
        Some(self.position(value)? + self.bandwidth() / 2.0)
    }
}

/// Linear `[min, max] -> [lo, hi]` projection. A degenerate domain maps
/// every input to the midpoint of the range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Builds a `[0, max]` domain from observed values.
    pub fn from_values<I>(values: I, range: (f32, f32)) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = f32>,
    {
        let max = values.into_iter().fold(None, |acc: Option<f32>, value| {
            Some(acc.map_or(value, |max| max.max(value)))
        });
        match max {
            Some(max) => Ok(Self::new((0.0, max), range)),
            None => Err(ScaleError::InvalidDomain),
        }
    }

    pub fn scale(&self, value: f32) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Interpolation curve of a [`RadialScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialCurve {
    Linear,
    /// Square-root interpolation, so equal value steps add equal ring area.
    Sqrt,
}

/// Projects a numeric domain onto a radius interval.
#[derive(Debug, Clone, Copy)]
pub struct RadialScale {
    domain: (f32, f32),
    range: (f32, f32),
    curve: RadialCurve,
}

impl RadialScale {
    pub fn new(domain: (f32, f32), range: (f32, f32), curve: RadialCurve) -> Self {
        Self {
            domain,
            range,
            curve,
        }
    }

    pub fn scale(&self, value: f32) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (value - self.domain.0) / span;
        match self.curve {
            RadialCurve::Linear => self.range.0 + t * (self.range.1 - self.range.0),
            RadialCurve::Sqrt => {
                let (r0, r1) = (self.range.0, self.range.1);
                (r0 * r0 + t * (r1 * r1 - r0 * r0)).max(0.0).sqrt()
            }
        }
    }
}

/// Positional identifier-to-color assignment, wrapping over the palette.
/// Stable across re-renders for the same domain ordering.
#[derive(Debug, Clone)]
pub struct ColorScale {
    domain: Vec<String>,
    palette: Vec<Color>,
}

impl ColorScale {
    pub fn new<I, S>(domain: I, palette: &[Color]) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
        if domain.is_empty() || palette.is_empty() {
            return Err(ScaleError::InvalidDomain);
        }
        Ok(Self {
            domain,
            palette: palette.to_vec(),
        })
    }

    pub fn color(&self, id: &str) -> Option<Color> {
        let index = self.domain.iter().position(|candidate| candidate == id)?;
        Some(self.palette[index % self.palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_covers_the_range() {
        // Sum of bandwidths plus paddings must equal the range width.
        let scale = BandScale::new(vec!["a", "b", "c", "d"], (0.0, 530.0), 0.1).unwrap();
        let bands = 4.0 * scale.bandwidth();
        let paddings = 4.0 * (scale.step() - scale.bandwidth());
        assert!((bands + paddings - 530.0).abs() < 1e-3);
    }

    #[test]
    fn band_scale_orders_slots_by_domain_order() {
        let scale = BandScale::new(vec![2018u16, 2019, 2020], (0.0, 300.0), 0.0).unwrap();
        assert_eq!(scale.position(&2018), Some(0.0));
        assert_eq!(scale.position(&2019), Some(100.0));
        assert_eq!(scale.position(&2020), Some(200.0));
        assert_eq!(scale.position(&1999), None);
    }

    #[test]
    fn band_scale_rejects_empty_domain() {
        let result = BandScale::<&str>::new(vec![], (0.0, 100.0), 0.1);
        assert_eq!(result.unwrap_err(), ScaleError::InvalidDomain);
    }

    #[test]
    fn linear_scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 50.0), (0.0, 400.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 400.0);
        assert_eq!(scale.scale(25.0), 200.0);
    }

    #[test]
    fn linear_scale_degenerate_domain_hits_midpoint() {
        let scale = LinearScale::new((7.0, 7.0), (100.0, 300.0));
        assert_eq!(scale.scale(7.0), 200.0);
        assert_eq!(scale.scale(-12.0), 200.0);
    }

    #[test]
    fn linear_scale_from_values_requires_observations() {
        assert!(LinearScale::from_values(std::iter::empty(), (0.0, 1.0)).is_err());
        let scale = LinearScale::from_values([3.0, 9.0, 6.0], (0.0, 90.0)).unwrap();
        assert_eq!(scale.scale(9.0), 90.0);
    }

    #[test]
    fn radial_scale_linear_midpoint() {
        let scale = RadialScale::new((0.0, 100.0), (20.0, 120.0), RadialCurve::Linear);
        assert!((scale.scale(50.0) - 70.0).abs() < 1e-4);
    }

    #[test]
    fn radial_scale_sqrt_preserves_area_steps() {
        let scale = RadialScale::new((0.0, 2.0), (0.0, 10.0), RadialCurve::Sqrt);
        let r1 = scale.scale(1.0);
        let r2 = scale.scale(2.0);
        // Ring area of the second step equals the disc area of the first.
        let first = r1 * r1;
        let second = r2 * r2 - r1 * r1;
        assert!((first - second).abs() < 1e-3);
    }

    #[test]
    fn color_scale_is_positional_and_wraps() {
        let palette = [Color::WHITE, Color::BLACK];
        let scale = ColorScale::new(["x", "y", "z"], &palette).unwrap();
        assert_eq!(scale.color("x"), Some(Color::WHITE));
        assert_eq!(scale.color("y"), Some(Color::BLACK));
        assert_eq!(scale.color("z"), Some(Color::WHITE));
        assert_eq!(scale.color("w"), None);
        // Same ordering, same assignment.
        let again = ColorScale::new(["x", "y", "z"], &palette).unwrap();
        assert_eq!(again.color("z"), scale.color("z"));
    }
}
