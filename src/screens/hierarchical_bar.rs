use iced::widget::canvas::Canvas;
use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element, Fill};

use super::{chart_section, player_options, Page};
use crate::charts::HierarchicalBarChart;
use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let selector = row![
        text("Select Player:").size(14),
        pick_list(
            player_options(dataset),
            Some(interaction.selected_player.clone()),
            |choice| Message::PlayerSelected(Page::HierarchicalBar, choice),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let chart =
        HierarchicalBarChart::new(dataset.clone(), interaction.selected_player.clone());

    chart_section(
        "Player Goals Based Comparison 2018-2022",
        "Total goals per player, ranked from most to fewest",
        selector.into(),
        Canvas::new(chart).width(Fill).height(400).into(),
    )
}
