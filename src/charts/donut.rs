use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Radians, Rectangle, Renderer, Theme};

use super::pointer::{self, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::YearChoice;
use crate::message::Message;
use crate::transform::{donut_slices, DonutSlice};

const MARGIN: f32 = 110.0;

/// Goals ring with external leader-line labels.
pub struct DonutChart {
    cache: Cache,
    dataset: Dataset,
    year: YearChoice,
}

impl DonutChart {
    pub fn new(dataset: Dataset, year: YearChoice) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            year,
        }
    }

    fn center(bounds: Rectangle, pointer: &CanvasState) -> Point {
        Point::new(bounds.width / 2.0, bounds.height / 2.0) + pointer.pan
    }

    fn layout(&self, bounds: Rectangle, pointer: &CanvasState) -> Vec<DonutSlice> {
        // Leave room outside the ring for the routed labels.
        let outer = ((bounds.width.min(bounds.height) / 2.0 - MARGIN).max(30.0))
            * pointer.effective_zoom();
        donut_slices(&self.dataset, self.year, outer / 2.0, outer)
    }
}

fn hit_test_slice(
    slices: &[DonutSlice],
    bounds: Rectangle,
    pointer: &CanvasState,
    cursor_pos: Point,
) -> Option<usize> {
    let center = DonutChart::center(bounds, pointer);
    let dx = cursor_pos.x - center.x;
    let dy = cursor_pos.y - center.y;
    let distance = (dx * dx + dy * dy).sqrt();

    let mut angle = dy.atan2(dx) + FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }

    slices.iter().position(|slice| {
        distance >= slice.arc.inner_radius
            && distance <= slice.arc.outer_radius
            && slice.arc.contains_angle(angle)
    })
}

impl canvas::Program<Message> for DonutChart {
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
        let slices = self.layout(bounds, state);
        if slices.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let center = Self::center(bounds, state);
            let at = |(x, y): (f32, f32)| Point::new(center.x + x, center.y + y);

            for slice in &slices {
                let arc = &slice.arc;
                let ring = Path::new(|builder| {
                    let outer_start = Point::new(
                        center.x + arc.outer_radius * arc.start_angle.sin(),
                        center.y - arc.outer_radius * arc.start_angle.cos(),
                    );
                    builder.move_to(outer_start);
                    builder.arc(canvas::path::Arc {
                        center,
                        radius: arc.outer_radius,
                        start_angle: Radians(arc.start_angle - FRAC_PI_2),
                        end_angle: Radians(arc.end_angle - FRAC_PI_2),
                    });
                    builder.line_to(Point::new(
                        center.x + arc.inner_radius * arc.end_angle.sin(),
                        center.y - arc.inner_radius * arc.end_angle.cos(),
                    ));
                    builder.arc(canvas::path::Arc {
                        center,
                        radius: arc.inner_radius,
                        start_angle: Radians(arc.end_angle - FRAC_PI_2),
                        end_angle: Radians(arc.start_angle - FRAC_PI_2),
                    });
                    builder.close();
                });
                frame.fill(&ring, arc.color);

                // Zero-goal slices keep their palette slot but have no
                // geometry to label.
                if arc.span() <= 0.0 {
                    continue;
                }

                let leader = Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.base.text);
                let dot = Path::circle(at(slice.centroid), 2.0);
                frame.fill(&dot, palette.background.base.text);
                frame.stroke(&Path::line(at(slice.centroid), at(slice.inflexion)), leader);
                frame.stroke(
                    &Path::line(
                        at(slice.inflexion),
                        at((slice.label_x, slice.inflexion.1)),
                    ),
                    leader,
                );

                frame.fill_text(Text {
                    content: arc.label.clone(),
                    position: at((
                        slice.label_x + if slice.is_right { 2.0 } else { -2.0 },
                        slice.inflexion.1 - 7.0,
                    )),
                    color: palette.background.base.text,
                    size: 13.0.into(),
                    align_x: if slice.is_right {
                        iced::alignment::Horizontal::Left.into()
                    } else {
                        iced::alignment::Horizontal::Right.into()
                    },
                    ..Text::default()
                });
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            if let Some(index) = hit_test_slice(&slices, bounds, state, cursor_pos) {
                overlay.fill_text(Text {
                    content: slices[index].arc.detail.clone(),
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
