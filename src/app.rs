use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};

use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;
use crate::screens::Page;
use crate::theme::{
    ACCENT, DRAWER_BG, DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE, DRAWER_TEXT_INACTIVE,
};
use lucide_icons::iced::{
    icon_chart_bar, icon_chart_column, icon_chart_line, icon_chart_pie, icon_panel_left_close,
    icon_panel_left_open, icon_radar,
};

pub struct App {
    theme: Theme,
    dataset: Dataset,
    current_page: Page,
    sidebar_collapsed: bool,
    hierarchical: ChartInteraction,
    grouped: ChartInteraction,
    line: ChartInteraction,
    pie: ChartInteraction,
    radar: ChartInteraction,
    donut: ChartInteraction,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let dataset = Dataset::fifa_players();
        let pie = Self::fresh_state(Page::Pie, &dataset);
        let donut = Self::fresh_state(Page::Donut, &dataset);
        (
            Self {
                theme: Theme::Dark,
                dataset,
                current_page: Page::HierarchicalBar,
                sidebar_collapsed: true,
                hierarchical: ChartInteraction::default(),
                grouped: ChartInteraction::default(),
                line: ChartInteraction::default(),
                pie,
                radar: ChartInteraction::default(),
                donut,
            },
            Task::none(),
        )
    }

    /// Mount-time defaults for a page. The year-filtered pies start on the
    /// first dataset year; everything else starts unfiltered.
    fn fresh_state(page: Page, dataset: &Dataset) -> ChartInteraction {
        match page {
            Page::Pie | Page::Donut => dataset
                .years()
                .first()
                .map(|year| ChartInteraction::with_year(*year))
                .unwrap_or_default(),
            _ => ChartInteraction::default(),
        }
    }

    fn page_state_mut(&mut self, page: Page) -> &mut ChartInteraction {
        match page {
            Page::HierarchicalBar => &mut self.hierarchical,
            Page::GroupedBar => &mut self.grouped,
            Page::Line => &mut self.line,
            Page::Pie => &mut self.pie,
            Page::Radar => &mut self.radar,
            Page::Donut => &mut self.donut,
        }
    }

    fn page_state(&self, page: Page) -> &ChartInteraction {
        match page {
            Page::HierarchicalBar => &self.hierarchical,
            Page::GroupedBar => &self.grouped,
            Page::Line => &self.line,
            Page::Pie => &self.pie,
            Page::Radar => &self.radar,
            Page::Donut => &self.donut,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page) => {
                tracing::debug!(?page, "navigate");
                // Entering a page remounts its chart with default state.
                let fresh = Self::fresh_state(page, &self.dataset);
                *self.page_state_mut(page) = fresh;
                self.current_page = page;
                Task::none()
            }
            Message::YearSelected(page, year) => {
                tracing::debug!(?page, %year, "year selected");
                self.page_state_mut(page).on_year_change(year);
                Task::none()
            }
            Message::PlayerSelected(page, player) => {
                tracing::debug!(?page, %player, "player selected");
                self.page_state_mut(page).on_player_change(player);
                Task::none()
            }
            Message::SeriesToggled(player) => {
                tracing::debug!(%player, "series toggled");
                self.line.on_series_toggle(&player);
                Task::none()
            }
            Message::ResetSeries => {
                self.line.reset_series();
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = self.content_view();

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(|_theme, status| {
                let mut background = ACCENT;
                if matches!(status, button::Status::Hovered) {
                    background.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    background.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: DRAWER_TEXT_ACTIVE,
                    ..Default::default()
                }
            });

        let pages = Page::ALL.into_iter().map(|page| self.sidebar_button(page));

        let content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(240.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, page: Page) -> Element<'a, Message> {
        let selected = self.current_page == page;
        let icon = match page {
            Page::HierarchicalBar => icon_chart_bar(),
            Page::GroupedBar => icon_chart_column(),
            Page::Line => icon_chart_line(),
            Page::Pie => icon_chart_pie(),
            Page::Radar => icon_radar(),
            Page::Donut => icon_chart_pie(),
        }
        .size(18)
        .style(move |_| iced::widget::text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let label_text = text(page.label()).style(move |_| iced::widget::text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                icon,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![icon, label_text]
                .spacing(12)
                .align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(page))
            .width(Length::Fill)
            .style(move |_, status| {
                let background = if selected { ACCENT } else { DRAWER_ITEM_BG };

                let mut color = background;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn content_view<'a>(&'a self) -> Element<'a, Message> {
        let page = self.current_page;
        let state = self.page_state(page);
        let chart = match page {
            Page::HierarchicalBar => {
                crate::screens::hierarchical_bar::view(&self.dataset, state)
            }
            Page::GroupedBar => crate::screens::grouped_bar::view(&self.dataset, state),
            Page::Line => crate::screens::line::view(&self.dataset, state),
            Page::Pie => crate::screens::pie::view(&self.dataset, state),
            Page::Radar => crate::screens::radar::view(&self.dataset, state),
            Page::Donut => crate::screens::donut::view(&self.dataset, state),
        };

        let content = column![
            text("Visualizing Statistics of FIFA Players").size(28),
            chart
        ]
        .spacing(12)
        .padding(24);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
