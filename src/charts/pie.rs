use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Text};
use iced::{Point, Radians, Rectangle, Renderer, Theme};

use super::pointer::{self, brighten, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::YearChoice;
use crate::message::Message;
use crate::transform::{pie_slices, ArcSlice};

/// Goals share per player for one selected year, as a full disc.
pub struct PieChart {
    cache: Cache,
    dataset: Dataset,
    year: YearChoice,
}

#[derive(Default)]
pub struct PieState {
    pointer: CanvasState,
    selected_index: Option<usize>,
}

impl PieChart {
    pub fn new(dataset: Dataset, year: YearChoice) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            year,
        }
    }

    fn radius(bounds: Rectangle, pointer: &CanvasState) -> f32 {
        (bounds.width.min(bounds.height) * 0.35) * pointer.effective_zoom()
    }

    fn center(bounds: Rectangle, pointer: &CanvasState) -> Point {
        Point::new(bounds.width / 2.0, bounds.height / 2.0) + pointer.pan
    }

    fn layout(&self, bounds: Rectangle, pointer: &CanvasState) -> Vec<ArcSlice> {
        pie_slices(&self.dataset, self.year, Self::radius(bounds, pointer))
    }
}

/// Index of the slice under the cursor, if any. Angles in the descriptors
/// run clockwise from 12 o'clock.
fn hit_test_slice(
    slices: &[ArcSlice],
    bounds: Rectangle,
    pointer: &CanvasState,
    cursor_pos: Point,
) -> Option<usize> {
    let center = PieChart::center(bounds, pointer);
    let dx = cursor_pos.x - center.x;
    let dy = cursor_pos.y - center.y;
    let distance = (dx * dx + dy * dy).sqrt();

    let mut angle = dy.atan2(dx) + FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }

    slices.iter().position(|slice| {
        distance >= slice.inner_radius
            && distance <= slice.outer_radius
            && slice.contains_angle(angle)
    })
}

impl canvas::Program<Message> for PieChart {
    type State = PieState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let cursor_pos = cursor.position_in(bounds)?;
            let slices = self.layout(bounds, &state.pointer);
            state.selected_index = hit_test_slice(&slices, bounds, &state.pointer, cursor_pos);
            return Some(canvas::Action::request_redraw());
        }

        pointer::handle(&mut state.pointer, event, bounds, cursor)
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
        let slices = self.layout(bounds, &state.pointer);
        if slices.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = Self::center(bounds, &state.pointer);

            for (index, slice) in slices.iter().enumerate() {
                let path = Path::new(|builder| {
                    builder.move_to(center);
                    builder.arc(canvas::path::Arc {
                        center,
                        radius: slice.outer_radius,
                        start_angle: Radians(slice.start_angle - FRAC_PI_2),
                        end_angle: Radians(slice.end_angle - FRAC_PI_2),
                    });
                    builder.close();
                });

                let color = if state.selected_index == Some(index) {
                    brighten(slice.color, 1.15)
                } else {
                    slice.color
                };
                frame.fill(&path, color);
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            if let Some(index) = hit_test_slice(&slices, bounds, &state.pointer, cursor_pos) {
                let slice = &slices[index];
                overlay.fill_text(Text {
                    content: slice.detail.clone(),
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
