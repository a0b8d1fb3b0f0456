//! Line transform: one strength-over-years series per player, smoothed with
//! monotone cubic interpolation so the curve never overshoots the data
//! between points. Legend toggles flip a `hidden` flag on the series; the
//! descriptor set itself never shrinks, so showing a series again needs no
//! recomputation.

use iced::Color;

use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::theme::CATEGORY_PALETTE;
use crate::transform::geometry::{CurveSegment, PathPoint};
use crate::transform::scale::{BandScale, ColorScale, LinearScale};

/// One player's thread across years. `points` are the marker positions;
/// the smoothed path comes from [`monotone_segments`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub player: &'static str,
    pub color: Color,
    pub points: Vec<PathPoint>,
    /// (year, strength) per point, for marker tooltips.
    pub seasons: Vec<(u16, f32)>,
    /// Renderer-level visibility flag set by legend toggles.
    pub hidden: bool,
}

pub fn line_series(
    dataset: &Dataset,
    interaction: &ChartInteraction,
    width: f32,
    height: f32,
) -> Vec<LineSeries> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let Ok(columns) = BandScale::new(dataset.years(), (0.0, width), 0.1) else {
        return Vec::new();
    };
    // Strength is a 0-100 rate, fixed axis rather than data-fit.
    let strength = LinearScale::new((0.0, 100.0), (0.0, height));
    let Ok(colors) = ColorScale::new(dataset.players().iter().copied(), &CATEGORY_PALETTE)
    else {
        return Vec::new();
    };

    dataset
        .by_player()
        .into_iter()
        .filter_map(|(player, records)| {
            let color = colors.color(player)?;
            let mut points = Vec::with_capacity(records.len());
            let mut seasons = Vec::with_capacity(records.len());
            for record in &records {
                let Some(x) = columns.center(&record.year) else {
                    continue;
                };
                let y = height - strength.scale(record.strength);
                points.push(PathPoint { x, y });
                seasons.push((record.year, record.strength));
            }
            Some(LineSeries {
                player,
                color,
                points,
                seasons,
                hidden: interaction.is_hidden(player),
            })
        })
        .collect()
}

/// Monotone cubic smoothing over x-sorted points. Interior tangents use the
/// harmonic mean of the adjoining secants and drop to zero at local
/// extrema, which keeps each segment inside its endpoints' y interval.
pub fn monotone_segments(points: &[PathPoint]) -> Vec<CurveSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let mut secants = Vec::with_capacity(n - 1);
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        secants.push(if dx == 0.0 { 0.0 } else { dy / dx });
    }

    let mut tangents = vec![0.0_f32; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (prev, next) = (secants[i - 1], secants[i]);
        tangents[i] = if prev * next <= 0.0 {
            0.0
        } else {
            2.0 * prev * next / (prev + next)
        };
    }

    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0], pair[1]);
            let dx = (to.x - from.x) / 3.0;
            CurveSegment {
                from,
                ctrl1: PathPoint {
                    x: from.x + dx,
                    y: from.y + tangents[i] * dx,
                },
                ctrl2: PathPoint {
                    x: to.x - dx,
                    y: to.y - tangents[i + 1] * dx,
                },
                to,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ChartInteraction;

    #[test]
    fn one_series_per_player_in_year_order() {
        let dataset = Dataset::fifa_players();
        let series = line_series(&dataset, &ChartInteraction::default(), 600.0, 400.0);
        assert_eq!(series.len(), dataset.players().len());
        for line in &series {
            assert_eq!(line.points.len(), 5);
            assert_eq!(line.seasons.len(), line.points.len());
            for pair in line.points.windows(2) {
                assert!(pair[0].x < pair[1].x);
            }
        }
    }

    #[test]
    fn transform_is_idempotent() {
        let dataset = Dataset::fifa_players();
        let state = ChartInteraction::default();
        let first = line_series(&dataset, &state, 600.0, 400.0);
        let second = line_series(&dataset, &state, 600.0, 400.0);
        assert_eq!(first, second);
    }

    #[test]
    fn hidden_series_stay_in_the_descriptor_set() {
        let dataset = Dataset::fifa_players();
        let mut state = ChartInteraction::default();
        state.on_series_toggle("Messi");
        let series = line_series(&dataset, &state, 600.0, 400.0);
        assert_eq!(series.len(), dataset.players().len());
        let messi = series.iter().find(|line| line.player == "Messi").unwrap();
        assert!(messi.hidden);
        assert!(!messi.points.is_empty());

        state.on_series_toggle("Messi");
        let restored = line_series(&dataset, &state, 600.0, 400.0);
        assert!(restored.iter().all(|line| !line.hidden));
    }

    #[test]
    fn monotone_curve_never_overshoots() {
        // Control points staying inside each segment's y interval bounds the
        // whole cubic inside it.
        let points = [
            PathPoint { x: 0.0, y: 10.0 },
            PathPoint { x: 1.0, y: 40.0 },
            PathPoint { x: 2.0, y: 42.0 },
            PathPoint { x: 3.0, y: 5.0 },
        ];
        for segment in monotone_segments(&points) {
            let lo = segment.from.y.min(segment.to.y) - 1e-4;
            let hi = segment.from.y.max(segment.to.y) + 1e-4;
            assert!(segment.ctrl1.y >= lo && segment.ctrl1.y <= hi);
            assert!(segment.ctrl2.y >= lo && segment.ctrl2.y <= hi);
        }
    }

    #[test]
    fn tangent_flattens_at_local_extrema() {
        let points = [
            PathPoint { x: 0.0, y: 0.0 },
            PathPoint { x: 1.0, y: 10.0 },
            PathPoint { x: 2.0, y: 0.0 },
        ];
        let segments = monotone_segments(&points);
        // The shared tangent at the peak is zero on both sides.
        assert!((segments[0].ctrl2.y - 10.0).abs() < 1e-4);
        assert!((segments[1].ctrl1.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn short_inputs_yield_no_segments() {
        assert!(monotone_segments(&[]).is_empty());
        assert!(monotone_segments(&[PathPoint { x: 0.0, y: 0.0 }]).is_empty());
    }
}
