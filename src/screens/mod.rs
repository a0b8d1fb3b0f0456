pub mod donut;
pub mod grouped_bar;
pub mod hierarchical_bar;
pub mod line;
pub mod pie;
pub mod radar;

use iced::widget::{column, container, text};
use iced::Element;

use crate::dataset::Dataset;
use crate::interaction::{PlayerChoice, YearChoice};
use crate::message::Message;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Page {
    HierarchicalBar,
    GroupedBar,
    Line,
    Pie,
    Radar,
    Donut,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::HierarchicalBar,
        Page::GroupedBar,
        Page::Line,
        Page::Pie,
        Page::Radar,
        Page::Donut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::HierarchicalBar => "Hierarchical Bar Chart",
            Page::GroupedBar => "Grouped Bar Chart",
            Page::Line => "Line Chart",
            Page::Pie => "Pie Chart",
            Page::Radar => "Radar Chart",
            Page::Donut => "Donut Chart",
        }
    }
}

/// Selector options: "All Players" plus every known player.
pub(crate) fn player_options(dataset: &Dataset) -> Vec<PlayerChoice> {
    std::iter::once(PlayerChoice::All)
        .chain(
            dataset
                .players()
                .into_iter()
                .map(|player| PlayerChoice::Player(player.to_owned())),
        )
        .collect()
}

/// Selector options: "All Years" plus every known year.
pub(crate) fn year_options(dataset: &Dataset) -> Vec<YearChoice> {
    std::iter::once(YearChoice::All)
        .chain(dataset.years().into_iter().map(YearChoice::Year))
        .collect()
}

pub(crate) fn chart_section<'a>(
    title: &'a str,
    subtitle: &'a str,
    controls: Element<'a, Message>,
    chart: Element<'a, Message>,
) -> Element<'a, Message> {
    let section = column![text(title).size(20), text(subtitle).size(14)]
        .spacing(8)
        .push(controls)
        .push(chart);

    container(
        container(section)
            .padding(16)
            .style(|theme| iced::widget::container::bordered_box(theme)),
    )
    .padding(24)
    .into()
}
