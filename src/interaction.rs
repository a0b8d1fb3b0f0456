//! Per-chart interaction state. Each page owns one [`ChartInteraction`];
//! every field moves only on its own input event and the whole value is
//! rebuilt with defaults when the page is entered. Pointer hover and
//! pan/zoom mechanics stay inside the canvas widget state.

use std::collections::BTreeSet;
use std::fmt;

/// Year selector value. The pick list constrains it to the known year set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearChoice {
    All,
    Year(u16),
}

impl fmt::Display for YearChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearChoice::All => write!(f, "All Years"),
            YearChoice::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Player selector value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerChoice {
    All,
    Player(String),
}

impl PlayerChoice {
    pub fn matches(&self, player: &str) -> bool {
        match self {
            PlayerChoice::All => true,
            PlayerChoice::Player(name) => name == player,
        }
    }
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerChoice::All => write!(f, "All Players"),
            PlayerChoice::Player(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInteraction {
    pub selected_year: YearChoice,
    pub selected_player: PlayerChoice,
    pub hidden_series: BTreeSet<String>,
}

impl Default for ChartInteraction {
    fn default() -> Self {
        Self {
            selected_year: YearChoice::All,
            selected_player: PlayerChoice::All,
            hidden_series: BTreeSet::new(),
        }
    }
}

impl ChartInteraction {
    /// Defaults with the year selector pinned to a concrete year, for pages
    /// whose filter starts on the first dataset year.
    pub fn with_year(year: u16) -> Self {
        Self {
            selected_year: YearChoice::Year(year),
            ..Self::default()
        }
    }

    pub fn on_year_change(&mut self, year: YearChoice) {
        self.selected_year = year;
    }

    pub fn on_player_change(&mut self, player: PlayerChoice) {
        self.selected_player = player;
    }

    /// Legend click: hide a visible series, show a hidden one.
    pub fn on_series_toggle(&mut self, id: &str) {
        if !self.hidden_series.remove(id) {
            self.hidden_series.insert(id.to_owned());
        }
    }

    /// Reset button: every series visible again.
    pub fn reset_series(&mut self) {
        self.hidden_series.clear();
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden_series.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut state = ChartInteraction::default();
        let before = state.clone();
        state.on_series_toggle("Messi");
        assert!(state.is_hidden("Messi"));
        state.on_series_toggle("Messi");
        assert_eq!(state, before);
    }

    #[test]
    fn reset_clears_every_hidden_series() {
        let mut state = ChartInteraction::default();
        state.on_series_toggle("Messi");
        state.on_series_toggle("Neymar");
        state.reset_series();
        assert!(state.hidden_series.is_empty());
    }

    #[test]
    fn fields_transition_independently() {
        let mut state = ChartInteraction::with_year(2018);
        state.on_player_change(PlayerChoice::Player("Ronaldo".into()));
        assert_eq!(state.selected_year, YearChoice::Year(2018));
        state.on_year_change(YearChoice::Year(2020));
        assert_eq!(
            state.selected_player,
            PlayerChoice::Player("Ronaldo".into())
        );
        assert!(state.hidden_series.is_empty());
    }

    #[test]
    fn player_choice_matching() {
        assert!(PlayerChoice::All.matches("anyone"));
        let messi = PlayerChoice::Player("Messi".into());
        assert!(messi.matches("Messi"));
        assert!(!messi.matches("Ronaldo"));
    }
}
