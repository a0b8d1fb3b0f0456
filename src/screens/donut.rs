use iced::widget::canvas::Canvas;
use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element, Fill};

use super::{chart_section, year_options, Page};
use crate::charts::DonutChart;
use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let selector = row![
        text("Select Year:").size(14),
        pick_list(
            year_options(dataset),
            Some(interaction.selected_year),
            |choice| Message::YearSelected(Page::Donut, choice),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let chart = DonutChart::new(dataset.clone(), interaction.selected_year);

    chart_section(
        "Players Goals 2018-2022",
        "Goals per player for the selected year, with labeled ring slices",
        selector.into(),
        Canvas::new(chart).width(Fill).height(440).into(),
    )
}
