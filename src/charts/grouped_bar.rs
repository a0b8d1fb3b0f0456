use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};

use super::pointer::{self, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::PlayerChoice;
use crate::message::Message;
use crate::screens::Page;
use crate::transform::{grouped_bars, GroupedBar};

const PADDING: f32 = 40.0;

/// Vertical speed bars grouped by year. Clicking a bar selects its player
/// and dims everyone else; clicking the selected player again clears it.
pub struct GroupedBarChart {
    cache: Cache,
    dataset: Dataset,
    selected: PlayerChoice,
}

impl GroupedBarChart {
    pub fn new(dataset: Dataset, selected: PlayerChoice) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            selected,
        }
    }

    fn layout(&self, bounds: Rectangle, state: &CanvasState) -> Vec<GroupedBar> {
        let width = (bounds.width - PADDING * 2.0).max(0.0) * state.effective_zoom();
        let height = (bounds.height - PADDING * 2.0).max(0.0);
        grouped_bars(&self.dataset, &self.selected, width, height)
    }

    fn hit_test(
        &self,
        bounds: Rectangle,
        state: &CanvasState,
        cursor_pos: Point,
    ) -> Option<GroupedBar> {
        self.layout(bounds, state)
            .into_iter()
            .find(|grouped| {
                let x = PADDING + grouped.bar.x + state.pan.x;
                let y = PADDING + grouped.bar.y + state.pan.y;
                cursor_pos.x >= x
                    && cursor_pos.x <= x + grouped.bar.width
                    && cursor_pos.y >= y
                    && cursor_pos.y <= y + grouped.bar.height
            })
    }
}

impl canvas::Program<Message> for GroupedBarChart {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let cursor_pos = cursor.position_in(bounds)?;
            let hit = self.hit_test(bounds, state, cursor_pos)?;
            let next = if self.selected == PlayerChoice::Player(hit.player.to_owned()) {
                PlayerChoice::All
            } else {
                PlayerChoice::Player(hit.player.to_owned())
            };
            return Some(canvas::Action::publish(Message::PlayerSelected(
                Page::GroupedBar,
                next,
            )));
        }

        pointer::handle(state, event, bounds, cursor)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        let bars = self.layout(bounds, state);
        if bars.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let size = frame.size();

            if size.width <= PADDING * 2.0 || size.height <= PADDING * 2.0 {
                return;
            }

            let left = PADDING;
            let top = PADDING;
            let right = size.width - PADDING;
            let bottom = size.height - PADDING;

            let x_axis = Path::line(Point::new(left, bottom), Point::new(right, bottom));
            let y_axis = Path::line(Point::new(left, bottom), Point::new(left, top));
            frame.stroke(
                &x_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );
            frame.stroke(
                &y_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );

            let mut labeled_years = Vec::new();
            for grouped in &bars {
                let origin = Point::new(
                    left + grouped.bar.x + state.pan.x,
                    top + grouped.bar.y + state.pan.y,
                );
                let rect = Path::rectangle(
                    origin,
                    iced::Size::new(grouped.bar.width * 0.9, grouped.bar.height),
                );
                let mut color = grouped.bar.color;
                color.a = grouped.bar.opacity;
                frame.fill(&rect, color);

                if !labeled_years.contains(&grouped.year) {
                    labeled_years.push(grouped.year);
                    frame.fill_text(Text {
                        content: grouped.year.to_string(),
                        position: Point::new(origin.x, bottom + 6.0),
                        color: palette.background.base.text,
                        size: 11.0.into(),
                        ..Text::default()
                    });
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            if let Some(hit) = self.hit_test(bounds, state, cursor_pos) {
                overlay.fill_text(Text {
                    content: hit.bar.label.clone(),
                    position: Point::new(cursor_pos.x + 8.0, cursor_pos.y - 8.0),
                    color: palette.background.base.text,
                    size: 12.0.into(),
                    ..Text::default()
                });
            }

            geometries.push(overlay.into_geometry());
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
