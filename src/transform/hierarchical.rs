//! Hierarchical bar transform: every player's goals summed across years,
//! ranked descending, one horizontal bar per player.

use crate::dataset::Dataset;
use crate::interaction::PlayerChoice;
use crate::theme::CATEGORY_PALETTE;
use crate::transform::geometry::Bar;
use crate::transform::scale::{BandScale, ColorScale, LinearScale};

/// Goals summed per player, sorted descending. The sort is stable, so equal
/// totals keep their first-seen grouping order.
pub fn player_goal_totals(dataset: &Dataset) -> Vec<(&'static str, u32)> {
    let mut totals: Vec<(&'static str, u32)> = dataset
        .by_player()
        .into_iter()
        .map(|(player, records)| {
            let total = records.iter().map(|record| u32::from(record.goals)).sum();
            (player, total)
        })
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// Lays the ranked totals out as horizontal bars over a `width` x `height`
/// plot area. A concrete `filter` keeps only that player's bar, at the row
/// it holds in the full ranking.
pub fn hierarchical_bars(dataset: &Dataset, filter: &PlayerChoice, width: f32, height: f32) -> Vec<Bar> {
    let totals = player_goal_totals(dataset);
    if totals.is_empty() {
        return Vec::new();
    }

    let players: Vec<&'static str> = totals.iter().map(|(player, _)| *player).collect();
    let Ok(rows) = BandScale::new(players.clone(), (0.0, height), 0.1) else {
        return Vec::new();
    };
    let Ok(lengths) = LinearScale::from_values(totals.iter().map(|(_, t)| *t as f32), (0.0, width))
    else {
        return Vec::new();
    };
    let Ok(colors) = ColorScale::new(players, &CATEGORY_PALETTE) else {
        return Vec::new();
    };

    totals
        .into_iter()
        .filter(|(player, _)| filter.matches(player))
        .filter_map(|(player, total)| {
            let y = rows.position(&player)?;
            let color = colors.color(player)?;
            Some(Bar {
                x: 0.0,
                y,
                width: lengths.scale(total as f32),
                height: rows.bandwidth(),
                color,
                label: format!("{player}: {total} goals"),
                opacity: 1.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn two_player_dataset() -> Dataset {
        Dataset::new(vec![
            Record {
                player: "Messi",
                year: 2018,
                goals: 10,
                speed: 80.0,
                strength: 70.0,
                accuracy: 90.0,
                assists: 50.0,
                penalties: 60.0,
            },
            Record {
                player: "Ronaldo",
                year: 2018,
                goals: 8,
                speed: 85.0,
                strength: 75.0,
                accuracy: 88.0,
                assists: 40.0,
                penalties: 70.0,
            },
        ])
    }

    #[test]
    fn totals_are_sorted_descending_and_sum_preserving() {
        let dataset = Dataset::fifa_players();
        let totals = player_goal_totals(&dataset);
        for pair in totals.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        let input_sum: u32 = dataset
            .records()
            .iter()
            .map(|record| u32::from(record.goals))
            .sum();
        let output_sum: u32 = totals.iter().map(|(_, total)| *total).sum();
        assert_eq!(input_sum, output_sum);
    }

    #[test]
    fn equal_totals_keep_first_seen_order() {
        let mut records = Vec::new();
        for player in ["Zeta", "Alpha"] {
            records.push(Record {
                player,
                year: 2018,
                goals: 5,
                speed: 0.0,
                strength: 0.0,
                accuracy: 0.0,
                assists: 0.0,
                penalties: 0.0,
            });
        }
        let totals = player_goal_totals(&Dataset::new(records));
        assert_eq!(totals[0].0, "Zeta");
        assert_eq!(totals[1].0, "Alpha");
    }

    #[test]
    fn two_bars_ranked_by_goals() {
        // Messi 10 goals, Ronaldo 8: two bars, Messi first and longer.
        let bars = hierarchical_bars(&two_player_dataset(), &PlayerChoice::All, 600.0, 400.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "Messi: 10 goals");
        assert_eq!(bars[1].label, "Ronaldo: 8 goals");
        assert!((bars[0].width - 600.0).abs() < 1e-3);
        assert!((bars[1].width - 600.0 * 8.0 / 10.0).abs() < 1e-3);
    }

    #[test]
    fn player_filter_keeps_one_bar_in_place() {
        let dataset = two_player_dataset();
        let all = hierarchical_bars(&dataset, &PlayerChoice::All, 600.0, 400.0);
        let only = hierarchical_bars(
            &dataset,
            &PlayerChoice::Player("Ronaldo".into()),
            600.0,
            400.0,
        );
        assert_eq!(only.len(), 1);
        // Same row and length as in the unfiltered layout.
        assert_eq!(only[0], all[1]);
    }

    #[test]
    fn empty_dataset_yields_no_bars() {
        let bars = hierarchical_bars(&Dataset::new(Vec::new()), &PlayerChoice::All, 600.0, 400.0);
        assert!(bars.is_empty());
    }
}
