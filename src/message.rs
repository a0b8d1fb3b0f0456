use crate::interaction::{PlayerChoice, YearChoice};
use crate::screens::Page;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(Page),
    YearSelected(Page, YearChoice),
    PlayerSelected(Page, PlayerChoice),
    SeriesToggled(String),
    ResetSeries,
}
