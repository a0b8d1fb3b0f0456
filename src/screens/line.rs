use iced::widget::canvas::Canvas;
use iced::widget::{button, row, text};
use iced::{Alignment, Background, Element, Fill};

use super::chart_section;
use crate::charts::LineChart;
use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;
use crate::theme::{self, CATEGORY_PALETTE};

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let mut legend = row![].spacing(8).align_y(Alignment::Center);

    for (index, player) in dataset.players().into_iter().enumerate() {
        let color = CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()];
        let hidden = interaction.is_hidden(player);

        legend = legend.push(
            button(text(player).size(13))
                .on_press(Message::SeriesToggled(player.to_owned()))
                .padding(6)
                .style(move |_theme, status| {
                    let mut background = color;
                    background.a = if hidden { 0.3 } else { 1.0 };
                    if matches!(status, button::Status::Hovered) {
                        background.a *= 0.85;
                    }
                    button::Style {
                        background: Some(Background::Color(background)),
                        text_color: iced::Color::WHITE,
                        ..Default::default()
                    }
                }),
        );
    }

    legend = legend.push(
        button(text("Reset").size(13))
            .on_press(Message::ResetSeries)
            .padding(6)
            .style(theme::accent_button_style),
    );

    let chart = LineChart::new(dataset.clone(), interaction.clone());

    chart_section(
        "Player Strength Based Comparison 2018-2022",
        "Strength per year, one line per player - click a legend entry to toggle it",
        legend.into(),
        Canvas::new(chart).width(Fill).height(400).into(),
    )
}
