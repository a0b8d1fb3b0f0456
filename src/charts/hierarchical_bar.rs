use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};

use super::pointer::{self, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::PlayerChoice;
use crate::message::Message;
use crate::transform::{hierarchical_bars, Bar};

const PADDING: f32 = 40.0;

/// Horizontal ranking of players by total goals.
pub struct HierarchicalBarChart {
    cache: Cache,
    dataset: Dataset,
    filter: PlayerChoice,
}

impl HierarchicalBarChart {
    pub fn new(dataset: Dataset, filter: PlayerChoice) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            filter,
        }
    }

    fn layout(&self, bounds: Rectangle, state: &CanvasState) -> Vec<Bar> {
        let width = (bounds.width - PADDING * 2.0).max(0.0) * state.effective_zoom();
        let height = (bounds.height - PADDING * 2.0).max(0.0);
        hierarchical_bars(&self.dataset, &self.filter, width, height)
    }
}

impl canvas::Program<Message> for HierarchicalBarChart {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
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
            let bottom = size.height - PADDING;

            let x_axis = Path::line(
                Point::new(left, bottom),
                Point::new(size.width - PADDING, bottom),
            );
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

            for bar in &bars {
                let origin = Point::new(left + bar.x + state.pan.x, top + bar.y + state.pan.y);
                let rect = Path::rectangle(origin, iced::Size::new(bar.width, bar.height));
                frame.fill(&rect, bar.color);

                frame.fill_text(Text {
                    content: bar.label.clone(),
                    position: Point::new(origin.x + 6.0, origin.y + bar.height / 2.0 - 6.0),
                    color: iced::Color::WHITE,
                    size: 12.0.into(),
                    ..Text::default()
                });
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            let hovered = bars.iter().find(|bar| {
                let x = PADDING + bar.x + state.pan.x;
                let y = PADDING + bar.y + state.pan.y;
                cursor_pos.x >= x
                    && cursor_pos.x <= x + bar.width
                    && cursor_pos.y >= y
                    && cursor_pos.y <= y + bar.height
            });

            if let Some(bar) = hovered {
                overlay.fill_text(Text {
                    content: bar.label.clone(),
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
