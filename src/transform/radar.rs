//! Radar transform: one closed polygon over the six metric axes for a
//! selected player. Angles come from a paddingless band scale over the axis
//! names, radii from a per-axis radial scale.

use std::f32::consts::TAU;

use crate::dataset::{Dataset, Metric};
use crate::interaction::PlayerChoice;
use crate::transform::geometry::RadialPoint;
use crate::transform::scale::{BandScale, RadialCurve, RadialScale};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarAxis {
    pub metric: Metric,
    pub max: f32,
}

/// The fixed axis configuration: all six metrics on a 0-100 scale.
pub fn default_axes() -> Vec<RadarAxis> {
    Metric::ALL
        .into_iter()
        .map(|metric| RadarAxis { metric, max: 100.0 })
        .collect()
}

/// Polygon vertices for the player's first recorded season, closed by
/// repeating the opening vertex. No selection, or a name the dataset does
/// not know, yields an empty polygon and the chart renders its grid alone.
pub fn radar_polygon(
    dataset: &Dataset,
    player: &PlayerChoice,
    axes: &[RadarAxis],
    inner_radius: f32,
    outer_radius: f32,
) -> Vec<RadialPoint> {
    let PlayerChoice::Player(name) = player else {
        return Vec::new();
    };
    let Some(record) = dataset.first_for_player(name) else {
        return Vec::new();
    };

    let labels: Vec<&'static str> = axes.iter().map(|axis| axis.metric.label()).collect();
    let Ok(angles) = BandScale::new(labels, (0.0, TAU), 0.0) else {
        return Vec::new();
    };

    let mut points: Vec<RadialPoint> = axes
        .iter()
        .filter_map(|axis| {
            let angle = angles.position(&axis.metric.label())?;
            let radii = RadialScale::new(
                (0.0, axis.max),
                (inner_radius, outer_radius),
                RadialCurve::Linear,
            );
            Some(RadialPoint {
                angle,
                radius: radii.scale(axis.metric.value(record)),
            })
        })
        .collect();

    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    #[test]
    fn polygon_is_closed_over_all_axes() {
        let dataset = Dataset::fifa_players();
        let points = radar_polygon(
            &dataset,
            &PlayerChoice::Player("Messi".into()),
            &default_axes(),
            40.0,
            200.0,
        );
        assert_eq!(points.len(), 7);
        assert_eq!(points.first(), points.last());
        // Axes are evenly spread around the circle.
        for (i, point) in points[..6].iter().enumerate() {
            assert!((point.angle - i as f32 * TAU / 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn half_of_max_lands_midway_between_radii() {
        let dataset = Dataset::new(vec![Record {
            player: "Test",
            year: 2018,
            goals: 50,
            speed: 50.0,
            strength: 50.0,
            accuracy: 50.0,
            assists: 50.0,
            penalties: 50.0,
        }]);
        let points = radar_polygon(
            &dataset,
            &PlayerChoice::Player("Test".into()),
            &default_axes(),
            40.0,
            200.0,
        );
        for point in &points {
            assert!((point.radius - 120.0).abs() < 1e-3);
        }
    }

    #[test]
    fn no_selection_renders_nothing() {
        let dataset = Dataset::fifa_players();
        let axes = default_axes();
        assert!(radar_polygon(&dataset, &PlayerChoice::All, &axes, 40.0, 200.0).is_empty());
        assert!(radar_polygon(
            &dataset,
            &PlayerChoice::Player("Unknown".into()),
            &axes,
            40.0,
            200.0
        )
        .is_empty());
    }

    #[test]
    fn uses_the_players_first_season() {
        let dataset = Dataset::fifa_players();
        let points = radar_polygon(
            &dataset,
            &PlayerChoice::Player("Ronaldo".into()),
            &default_axes(),
            0.0,
            100.0,
        );
        // First axis is goals; Ronaldo's 2018 tally is 34.
        assert!((points[0].radius - 34.0).abs() < 1e-3);
    }
}
