//! Static FIFA player statistics and the derived groupings the chart
//! transforms consume. The record set is built once at startup and handed to
//! the app as an immutable [`Dataset`] value; nothing here mutates after
//! construction.

/// One player-year observation. All rate metrics are 0-100; `goals` is a
/// plain season tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub player: &'static str,
    pub year: u16,
    pub goals: u16,
    pub speed: f32,
    pub strength: f32,
    pub accuracy: f32,
    pub assists: f32,
    pub penalties: f32,
}

/// The fixed attribute vocabulary charts can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Goals,
    Speed,
    Strength,
    Accuracy,
    Assists,
    Penalties,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Goals,
        Metric::Speed,
        Metric::Strength,
        Metric::Accuracy,
        Metric::Assists,
        Metric::Penalties,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Goals => "goals",
            Metric::Speed => "speed",
            Metric::Strength => "strength",
            Metric::Accuracy => "accuracy",
            Metric::Assists => "assists",
            Metric::Penalties => "penalties",
        }
    }

    pub fn value(&self, record: &Record) -> f32 {
        match self {
            Metric::Goals => f32::from(record.goals),
            Metric::Speed => record.speed,
            Metric::Strength => record.strength,
            Metric::Accuracy => record.accuracy,
            Metric::Assists => record.assists,
            Metric::Penalties => record.penalties,
        }
    }
}

macro_rules! record {
    ($player:expr, $year:expr, $goals:expr, $speed:expr, $strength:expr,
     $accuracy:expr, $assists:expr, $penalties:expr) => {
        Record {
            player: $player,
            year: $year,
            goals: $goals,
            speed: $speed,
            strength: $strength,
            accuracy: $accuracy,
            assists: $assists,
            penalties: $penalties,
        }
    };
}

const RECORDS: &[Record] = &[
    record!("Messi", 2018, 36, 82.0, 68.0, 92.0, 76.0, 71.0),
    record!("Messi", 2019, 40, 81.0, 67.0, 94.0, 81.0, 75.0),
    record!("Messi", 2020, 31, 80.0, 66.0, 93.0, 84.0, 78.0),
    record!("Messi", 2021, 28, 78.0, 65.0, 91.0, 80.0, 74.0),
    record!("Messi", 2022, 21, 76.0, 64.0, 90.0, 85.0, 76.0),
    record!("Ronaldo", 2018, 34, 88.0, 79.0, 87.0, 62.0, 84.0),
    record!("Ronaldo", 2019, 28, 87.0, 78.0, 88.0, 58.0, 86.0),
    record!("Ronaldo", 2020, 36, 85.0, 78.0, 89.0, 54.0, 88.0),
    record!("Ronaldo", 2021, 29, 83.0, 77.0, 86.0, 52.0, 85.0),
    record!("Ronaldo", 2022, 18, 80.0, 75.0, 84.0, 49.0, 82.0),
    record!("Kylian Mbappé", 2018, 21, 96.0, 71.0, 83.0, 55.0, 66.0),
    record!("Kylian Mbappé", 2019, 30, 96.0, 72.0, 85.0, 59.0, 68.0),
    record!("Kylian Mbappé", 2020, 23, 97.0, 73.0, 86.0, 61.0, 70.0),
    record!("Kylian Mbappé", 2021, 28, 97.0, 74.0, 87.0, 64.0, 72.0),
    record!("Kylian Mbappé", 2022, 41, 97.0, 75.0, 88.0, 66.0, 74.0),
    record!("Neymar", 2018, 19, 90.0, 61.0, 86.0, 70.0, 80.0),
    record!("Neymar", 2019, 15, 90.0, 60.0, 85.0, 68.0, 81.0),
    record!("Neymar", 2020, 18, 89.0, 60.0, 86.0, 72.0, 83.0),
    record!("Neymar", 2021, 13, 87.0, 59.0, 84.0, 69.0, 80.0),
    record!("Neymar", 2022, 17, 86.0, 58.0, 83.0, 71.0, 79.0),
    record!("Robert Lewandowski", 2018, 29, 79.0, 84.0, 88.0, 45.0, 89.0),
    record!("Robert Lewandowski", 2019, 43, 79.0, 85.0, 89.0, 48.0, 90.0),
    record!("Robert Lewandowski", 2020, 48, 78.0, 85.0, 91.0, 50.0, 92.0),
    record!("Robert Lewandowski", 2021, 44, 77.0, 84.0, 90.0, 47.0, 91.0),
    record!("Robert Lewandowski", 2022, 33, 76.0, 83.0, 88.0, 46.0, 89.0),
];

/// Immutable handle over the record set, passed explicitly into every chart
/// page instead of living behind a global.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The bundled 2018-2022 FIFA player statistics.
    pub fn fifa_players() -> Self {
        Self::new(RECORDS.to_vec())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct player names in first-seen order.
    pub fn players(&self) -> Vec<&'static str> {
        let mut players = Vec::new();
        for record in &self.records {
            if !players.contains(&record.player) {
                players.push(record.player);
            }
        }
        players
    }

    /// Distinct years in first-seen order.
    pub fn years(&self) -> Vec<u16> {
        let mut years = Vec::new();
        for record in &self.records {
            if !years.contains(&record.year) {
                years.push(record.year);
            }
        }
        years
    }

    /// Groups records by player, preserving first-seen player order and the
    /// input order of each player's records.
    pub fn by_player(&self) -> Vec<(&'static str, Vec<&Record>)> {
        let mut groups: Vec<(&'static str, Vec<&Record>)> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|(player, _)| *player == record.player) {
                Some((_, records)) => records.push(record),
                None => groups.push((record.player, vec![record])),
            }
        }
        groups
    }

    /// All records for one year, in input order.
    pub fn by_year(&self, year: u16) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.year == year)
            .collect()
    }

    /// Looks up a single player-year observation. A `None` here is the
    /// missing-record condition; callers substitute zero-valued metrics.
    pub fn find(&self, player: &str, year: u16) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.player == player && record.year == year)
    }

    /// First record for a player, in input order. The radar page plots this
    /// observation when a player is picked.
    pub fn first_for_player(&self, player: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_are_distinct_and_ordered() {
        let dataset = Dataset::fifa_players();
        let players = dataset.players();
        assert_eq!(
            players,
            vec![
                "Messi",
                "Ronaldo",
                "Kylian Mbappé",
                "Neymar",
                "Robert Lewandowski"
            ]
        );
    }

    #[test]
    fn years_cover_2018_through_2022() {
        let dataset = Dataset::fifa_players();
        assert_eq!(dataset.years(), vec![2018, 2019, 2020, 2021, 2022]);
    }

    #[test]
    fn by_player_keeps_every_record() {
        let dataset = Dataset::fifa_players();
        let grouped: usize = dataset
            .by_player()
            .iter()
            .map(|(_, records)| records.len())
            .sum();
        assert_eq!(grouped, dataset.records().len());
    }

    #[test]
    fn by_year_filters_exactly() {
        let dataset = Dataset::fifa_players();
        let records = dataset.by_year(2020);
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|record| record.year == 2020));
    }

    #[test]
    fn find_hits_and_misses() {
        let dataset = Dataset::fifa_players();
        assert_eq!(dataset.find("Neymar", 2019).map(|r| r.goals), Some(15));
        assert!(dataset.find("Neymar", 1999).is_none());
        assert!(dataset.find("Nobody", 2019).is_none());
    }

    #[test]
    fn metric_reads_the_right_field() {
        let record = Record {
            player: "Messi",
            year: 2018,
            goals: 36,
            speed: 82.0,
            strength: 68.0,
            accuracy: 92.0,
            assists: 76.0,
            penalties: 71.0,
        };
        assert_eq!(Metric::Goals.value(&record), 36.0);
        assert_eq!(Metric::Strength.value(&record), 68.0);
        assert_eq!(Metric::Penalties.value(&record), 71.0);
    }
}
