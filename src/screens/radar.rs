use iced::widget::canvas::Canvas;
use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element, Fill};

use super::{chart_section, player_options, Page};
use crate::charts::RadarChart;
use crate::dataset::Dataset;
use crate::interaction::{ChartInteraction, PlayerChoice};
use crate::message::Message;

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let selector = row![
        text("Select Player:").size(14),
        pick_list(
            player_options(dataset),
            Some(interaction.selected_player.clone()),
            |choice| Message::PlayerSelected(Page::Radar, choice),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let chart = RadarChart::new(dataset.clone(), interaction.selected_player.clone());

    let subtitle = match &interaction.selected_player {
        PlayerChoice::All => "Pick a player to draw their profile polygon",
        PlayerChoice::Player(_) => "All six metrics on a 0-100 scale",
    };

    chart_section(
        "Players Comparison 2018-2022",
        subtitle,
        selector.into(),
        Canvas::new(chart).width(Fill).height(460).into(),
    )
}
