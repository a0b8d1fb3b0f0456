use iced::widget::canvas::Canvas;
use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element, Fill};

use super::{chart_section, year_options, Page};
use crate::charts::PieChart;
use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;

pub fn view<'a>(dataset: &Dataset, interaction: &ChartInteraction) -> Element<'a, Message> {
    let selector = row![
        text("Select Year:").size(14),
        pick_list(
            year_options(dataset),
            Some(interaction.selected_year),
            |choice| Message::YearSelected(Page::Pie, choice),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let chart = PieChart::new(dataset.clone(), interaction.selected_year);

    chart_section(
        "Players Goals Share 2018-2022",
        "Goals per player for the selected year - hover for accuracy",
        selector.into(),
        Canvas::new(chart).width(Fill).height(400).into(),
    )
}
