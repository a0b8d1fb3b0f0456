//! Pie and donut transforms. Slice spans are proportional to goals, laid
//! out in input order, clockwise from 12 o'clock. The donut additionally
//! computes the inflexion point each external label's leader line bends at.

use std::f32::consts::TAU;

use crate::dataset::Dataset;
use crate::interaction::YearChoice;
use crate::theme::{CATEGORY_PALETTE, DONUT_PALETTE};
use crate::transform::geometry::ArcSlice;
use crate::transform::scale::ColorScale;

/// How far beyond the outer radius the leader line bends.
pub const INFLEXION_PADDING: f32 = 20.0;
/// Horizontal run of the leader line from the inflexion point to the label.
pub const LABEL_RUN: f32 = 50.0;

/// A donut slice plus its external-label routing anchors. Coordinates are
/// relative to the chart center.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub arc: ArcSlice,
    pub centroid: (f32, f32),
    pub inflexion: (f32, f32),
    pub label_x: f32,
    pub is_right: bool,
}

/// (player, goals, accuracy) rows feeding both pie variants. A concrete
/// year keeps records in input order; `All` aggregates goals per player
/// across every year, resolving the original's dangling selector option.
fn goal_rows(dataset: &Dataset, year: YearChoice) -> Vec<(&'static str, f32, f32)> {
    match year {
        YearChoice::Year(year) => dataset
            .by_year(year)
            .into_iter()
            .map(|record| (record.player, f32::from(record.goals), record.accuracy))
            .collect(),
        YearChoice::All => dataset
            .by_player()
            .into_iter()
            .map(|(player, records)| {
                let goals: f32 = records.iter().map(|r| f32::from(r.goals)).sum();
                let accuracy =
                    records.iter().map(|r| r.accuracy).sum::<f32>() / records.len() as f32;
                (player, goals, accuracy)
            })
            .collect(),
    }
}

fn slice_angles(values: &[f32]) -> Option<Vec<(f32, f32)>> {
    let total: f32 = values.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let mut start = 0.0_f32;
    Some(
        values
            .iter()
            .map(|value| {
                let end = start + value / total * TAU;
                let angles = (start, end);
                start = end;
                angles
            })
            .collect(),
    )
}

/// Full-disc pie over one year's goals. Hover detail is the player's
/// accuracy, as in the original chart.
pub fn pie_slices(dataset: &Dataset, year: YearChoice, radius: f32) -> Vec<ArcSlice> {
    let rows = goal_rows(dataset, year);
    let values: Vec<f32> = rows.iter().map(|(_, goals, _)| *goals).collect();
    let Some(angles) = slice_angles(&values) else {
        return Vec::new();
    };
    let Ok(colors) = ColorScale::new(
        rows.iter().map(|(player, _, _)| *player),
        &CATEGORY_PALETTE,
    ) else {
        return Vec::new();
    };

    rows.iter()
        .zip(angles)
        .filter_map(|((player, goals, accuracy), (start_angle, end_angle))| {
            Some(ArcSlice {
                inner_radius: 0.0,
                outer_radius: radius,
                start_angle,
                end_angle,
                color: colors.color(player)?,
                label: (*player).to_owned(),
                value: *goals,
                detail: format!("{player} - {accuracy:.0}%"),
            })
        })
        .collect()
}

/// Ring slices with external label anchors. Every known player gets a row;
/// a missing (player, year) observation contributes zero goals rather than
/// dropping the player.
pub fn donut_slices(
    dataset: &Dataset,
    year: YearChoice,
    inner_radius: f32,
    outer_radius: f32,
) -> Vec<DonutSlice> {
    let rows: Vec<(&'static str, f32)> = match year {
        YearChoice::Year(year) => dataset
            .players()
            .into_iter()
            .map(|player| {
                let goals = dataset
                    .find(player, year)
                    .map_or(0.0, |record| f32::from(record.goals));
                (player, goals)
            })
            .collect(),
        YearChoice::All => goal_rows(dataset, YearChoice::All)
            .into_iter()
            .map(|(player, goals, _)| (player, goals))
            .collect(),
    };

    let values: Vec<f32> = rows.iter().map(|(_, goals)| *goals).collect();
    let Some(angles) = slice_angles(&values) else {
        return Vec::new();
    };

    rows.iter()
        .zip(angles)
        .enumerate()
        .map(|(index, ((player, goals), (start_angle, end_angle)))| {
            let arc = ArcSlice {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                color: DONUT_PALETTE[index % DONUT_PALETTE.len()],
                label: format!("{player} ({goals:.0})"),
                value: *goals,
                detail: format!("{player} ({goals:.0})"),
            };
            let centroid = arc.centroid();
            let inflexion = arc.point_at(outer_radius + INFLEXION_PADDING);
            let is_right = inflexion.0 > 0.0;
            let label_x = inflexion.0 + if is_right { LABEL_RUN } else { -LABEL_RUN };
            DonutSlice {
                arc,
                centroid,
                inflexion,
                label_x,
                is_right,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_spans_sum_to_a_full_circle_in_input_order() {
        let dataset = Dataset::fifa_players();
        let slices = pie_slices(&dataset, YearChoice::Year(2018), 150.0);
        assert_eq!(slices.len(), 5);

        let span_sum: f32 = slices.iter().map(|slice| slice.span()).sum();
        assert!((span_sum - TAU).abs() < 1e-4);

        // Input order: slice boundaries are contiguous and labels follow the
        // record order for that year.
        let players: Vec<&str> = slices.iter().map(|slice| slice.label.as_str()).collect();
        let expected: Vec<&str> = dataset
            .by_year(2018)
            .iter()
            .map(|record| record.player)
            .collect();
        assert_eq!(players, expected);
        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-5);
        }
    }

    #[test]
    fn pie_spans_are_proportional_to_goals() {
        let dataset = Dataset::fifa_players();
        let slices = pie_slices(&dataset, YearChoice::Year(2020), 150.0);
        let total: f32 = slices.iter().map(|slice| slice.value).sum();
        for slice in &slices {
            assert!((slice.span() - slice.value / total * TAU).abs() < 1e-4);
        }
    }

    #[test]
    fn pie_all_years_aggregates_per_player() {
        let dataset = Dataset::fifa_players();
        let slices = pie_slices(&dataset, YearChoice::All, 150.0);
        assert_eq!(slices.len(), 5);
        let messi = slices.iter().find(|slice| slice.label == "Messi").unwrap();
        assert_eq!(messi.value, 156.0); // 36+40+31+28+21
    }

    #[test]
    fn pie_of_empty_year_is_empty() {
        let dataset = Dataset::fifa_players();
        assert!(pie_slices(&dataset, YearChoice::Year(1999), 150.0).is_empty());
        assert!(pie_slices(&Dataset::new(Vec::new()), YearChoice::All, 150.0).is_empty());
    }

    #[test]
    fn donut_substitutes_zero_for_missing_records() {
        let mut records = Dataset::fifa_players().records().to_vec();
        // Drop Neymar's 2019 season; the slice must survive with zero goals.
        records.retain(|record| !(record.player == "Neymar" && record.year == 2019));
        let slices = donut_slices(&Dataset::new(records), YearChoice::Year(2019), 75.0, 150.0);
        assert_eq!(slices.len(), 5);
        let neymar = slices
            .iter()
            .find(|slice| slice.arc.label.starts_with("Neymar"))
            .unwrap();
        assert_eq!(neymar.arc.value, 0.0);
        assert!(neymar.arc.span().abs() < 1e-6);
    }

    #[test]
    fn donut_labels_route_away_from_the_center() {
        let dataset = Dataset::fifa_players();
        let slices = donut_slices(&dataset, YearChoice::Year(2018), 75.0, 150.0);
        for slice in &slices {
            let (x, _) = slice.inflexion;
            let distance = (slice.inflexion.0.powi(2) + slice.inflexion.1.powi(2)).sqrt();
            assert!((distance - (150.0 + INFLEXION_PADDING)).abs() < 1e-3);
            if slice.is_right {
                assert!(x > 0.0);
                assert!(slice.label_x > x);
            } else {
                assert!(slice.label_x < x);
            }
        }
        // Mid-angles in the first half of the clock face point right.
        let first = &slices[0];
        assert!(first.arc.mid_angle() < std::f32::consts::PI);
        assert!(first.is_right);
    }
}
