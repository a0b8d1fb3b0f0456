use std::f32::consts::TAU;

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use super::pointer::{self, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::PlayerChoice;
use crate::message::Message;
use crate::transform::{default_axes, radar_polygon, RadarAxis, RadialPoint};

const INNER_RADIUS: f32 = 40.0;
const POLYGON_COLOR: Color = Color::from_rgb8(0xcb, 0x1d, 0xd1);

/// Six-axis profile polygon for one selected player. With no selection the
/// grid renders alone.
pub struct RadarChart {
    cache: Cache,
    dataset: Dataset,
    player: PlayerChoice,
    axes: Vec<RadarAxis>,
}

impl RadarChart {
    pub fn new(dataset: Dataset, player: PlayerChoice) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            player,
            axes: default_axes(),
        }
    }

    fn outer_radius(bounds: Rectangle, pointer: &CanvasState) -> f32 {
        (bounds.width.min(bounds.height) * 0.35) * pointer.effective_zoom()
    }

    fn layout(&self, bounds: Rectangle, pointer: &CanvasState) -> Vec<RadialPoint> {
        radar_polygon(
            &self.dataset,
            &self.player,
            &self.axes,
            INNER_RADIUS,
            Self::outer_radius(bounds, pointer),
        )
    }
}

impl canvas::Program<Message> for RadarChart {
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
        if self.axes.is_empty() {
            return geometries;
        }

        let polygon = self.layout(bounds, state);

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let size = frame.size();
            let center = Point::new(size.width / 2.0, size.height / 2.0) + state.pan;
            let radius = Self::outer_radius(bounds, state);
            let step = TAU / self.axes.len() as f32;

            for ring in 1..=4 {
                let r = INNER_RADIUS + (radius - INNER_RADIUS) * (ring as f32 / 4.0);
                let circle = Path::circle(center, r);
                frame.stroke(
                    &circle,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(palette.background.weak.color),
                );
            }

            for (i, axis) in self.axes.iter().enumerate() {
                let angle = i as f32 * step;
                let tip = Point::new(
                    center.x + radius * angle.sin(),
                    center.y - radius * angle.cos(),
                );
                let spoke = Path::line(center, tip);
                frame.stroke(
                    &spoke,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(palette.background.weak.color),
                );

                let label_anchor = Point::new(
                    center.x + (radius + 16.0) * angle.sin(),
                    center.y - (radius + 16.0) * angle.cos(),
                );
                frame.fill_text(Text {
                    content: axis.metric.label().to_owned(),
                    position: label_anchor,
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center.into(),
                    ..Text::default()
                });
            }

            if polygon.len() < 2 {
                return;
            }

            let path = Path::new(|builder| {
                for (index, vertex) in polygon.iter().enumerate() {
                    let (x, y) = vertex.to_xy();
                    let point = Point::new(center.x + x, center.y + y);
                    if index == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
                builder.close();
            });

            let mut fill = POLYGON_COLOR;
            fill.a = 0.1;
            frame.fill(&path, fill);
            frame.stroke(
                &path,
                Stroke::default().with_width(3.0).with_color(POLYGON_COLOR),
            );
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            // Nearest axis under the cursor, by angular distance.
            let center = Point::new(bounds.width / 2.0, bounds.height / 2.0) + state.pan;
            let dx = cursor_pos.x - center.x;
            let dy = cursor_pos.y - center.y;
            let mut angle = dy.atan2(dx) + std::f32::consts::FRAC_PI_2;
            if angle < 0.0 {
                angle += TAU;
            }
            let step = TAU / self.axes.len() as f32;
            let axis_index = (angle / step).round() as usize % self.axes.len();

            if let PlayerChoice::Player(name) = &self.player {
                if let Some(record) = self.dataset.first_for_player(name) {
                    let axis = &self.axes[axis_index];
                    overlay.fill_text(Text {
                        content: format!(
                            "{name} - {}: {:.0}",
                            axis.metric.label(),
                            axis.metric.value(record)
                        ),
                        position: Point::new(cursor_pos.x + 8.0, cursor_pos.y - 8.0),
                        color: palette.background.base.text,
                        size: 12.0.into(),
                        ..Text::default()
                    });
                }
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
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
