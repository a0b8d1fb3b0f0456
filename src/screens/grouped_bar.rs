use iced::widget::canvas::Canvas;
use iced::widget::text;
use iced::{Element, Fill};

use super::chart_section;
use crate::charts::GroupedBarChart;
use crate::dataset::Dataset;
use crate::interaction::{ChartInteraction, PlayerChoice};
use crate::message::Message;

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let chart = GroupedBarChart::new(dataset.clone(), interaction.selected_player.clone());

    let hint = match &interaction.selected_player {
        PlayerChoice::All => "Click a bar to highlight a player".to_owned(),
        PlayerChoice::Player(name) => format!("Highlighting {name} - click again to clear"),
    };

    chart_section(
        "Players Speed Based Comparison 2018-2022",
        "Speed per player, grouped by year",
        text(hint).size(14).into(),
        Canvas::new(chart).width(Fill).height(400).into(),
    )
}
