//! Grouped bar transform: one vertical bar per (player, year) record, years
//! as groups, speed as the bar height. Selecting a player dims the rest
//! instead of filtering them out.

use crate::dataset::Dataset;
use crate::interaction::PlayerChoice;
use crate::theme::CATEGORY_PALETTE;
use crate::transform::geometry::Bar;
use crate::transform::scale::{BandScale, ColorScale, LinearScale};

pub const DIMMED_OPACITY: f32 = 0.5;

/// A bar plus the record identity it came from, for click-to-select
/// hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBar {
    pub bar: Bar,
    pub player: &'static str,
    pub year: u16,
}

pub fn grouped_bars(
    dataset: &Dataset,
    selected: &PlayerChoice,
    width: f32,
    height: f32,
) -> Vec<GroupedBar> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let players = dataset.players();
    let Ok(groups) = BandScale::new(dataset.years(), (0.0, width), 0.1) else {
        return Vec::new();
    };
    let Ok(heights) = LinearScale::from_values(
        dataset.records().iter().map(|record| record.speed),
        (0.0, height),
    ) else {
        return Vec::new();
    };
    let Ok(colors) = ColorScale::new(players.iter().copied(), &CATEGORY_PALETTE) else {
        return Vec::new();
    };

    let slot = groups.bandwidth() / players.len() as f32;

    dataset
        .records()
        .iter()
        .filter_map(|record| {
            let group_start = groups.position(&record.year)?;
            let index = players.iter().position(|player| *player == record.player)?;
            let color = colors.color(record.player)?;
            let bar_height = heights.scale(record.speed);
            let opacity = match selected {
                PlayerChoice::All => 1.0,
                PlayerChoice::Player(name) if name == record.player => 1.0,
                PlayerChoice::Player(_) => DIMMED_OPACITY,
            };
            Some(GroupedBar {
                bar: Bar {
                    x: group_start + slot * index as f32,
                    y: height - bar_height,
                    width: slot,
                    height: bar_height,
                    color,
                    label: format!("{}: {} km/h", record.player, record.speed),
                    opacity,
                },
                player: record.player,
                year: record.year,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_per_record() {
        let dataset = Dataset::fifa_players();
        let bars = grouped_bars(&dataset, &PlayerChoice::All, 600.0, 400.0);
        assert_eq!(bars.len(), dataset.records().len());
    }

    #[test]
    fn selection_dims_without_filtering() {
        let dataset = Dataset::fifa_players();
        let selected = PlayerChoice::Player("Neymar".into());
        let bars = grouped_bars(&dataset, &selected, 600.0, 400.0);
        assert_eq!(bars.len(), dataset.records().len());
        for grouped in &bars {
            let expected = if grouped.player == "Neymar" {
                1.0
            } else {
                DIMMED_OPACITY
            };
            assert_eq!(grouped.bar.opacity, expected);
        }
    }

    #[test]
    fn players_share_a_year_slot_side_by_side() {
        let dataset = Dataset::fifa_players();
        let bars = grouped_bars(&dataset, &PlayerChoice::All, 600.0, 400.0);
        let in_2018: Vec<&GroupedBar> = bars.iter().filter(|bar| bar.year == 2018).collect();
        assert_eq!(in_2018.len(), 5);
        for pair in in_2018.windows(2) {
            assert!((pair[1].bar.x - pair[0].bar.x - pair[0].bar.width).abs() < 1e-3);
        }
    }

    #[test]
    fn bar_height_tracks_speed() {
        // Heights scale over [0, max speed], so the fastest record fills the
        // plot height exactly.
        let dataset = Dataset::fifa_players();
        let bars = grouped_bars(&dataset, &PlayerChoice::All, 600.0, 400.0);
        let max_speed = dataset
            .records()
            .iter()
            .map(|record| record.speed)
            .fold(f32::MIN, f32::max);
        let tallest = bars
            .iter()
            .max_by(|a, b| a.bar.height.total_cmp(&b.bar.height))
            .unwrap();
        let record = dataset.find(tallest.player, tallest.year).unwrap();
        assert_eq!(record.speed, max_speed);
        assert!((tallest.bar.height - 400.0).abs() < 1e-3);
        assert!(tallest.bar.y.abs() < 1e-3);
    }

    #[test]
    fn empty_dataset_yields_no_bars() {
        let bars = grouped_bars(&Dataset::new(Vec::new()), &PlayerChoice::All, 600.0, 400.0);
        assert!(bars.is_empty());
    }
}
