use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};

use super::pointer::{self, CanvasState};
use crate::dataset::Dataset;
use crate::interaction::ChartInteraction;
use crate::message::Message;
use crate::transform::{line_series, monotone_segments, LineSeries};

const PADDING: f32 = 40.0;
const GRID_LINES: usize = 5;

/// Strength over years, one smoothed curve per player. Hidden series are
/// skipped at draw time only; the descriptor set is always complete.
pub struct LineChart {
    cache: Cache,
    dataset: Dataset,
    interaction: ChartInteraction,
}

impl LineChart {
    pub fn new(dataset: Dataset, interaction: ChartInteraction) -> Self {
        Self {
            cache: Cache::new(),
            dataset,
            interaction,
        }
    }

    fn layout(&self, bounds: Rectangle, state: &CanvasState) -> Vec<LineSeries> {
        let width = (bounds.width - PADDING * 2.0).max(0.0) * state.effective_zoom();
        let height = (bounds.height - PADDING * 2.0).max(0.0);
        line_series(&self.dataset, &self.interaction, width, height)
    }
}

impl canvas::Program<Message> for LineChart {
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
        let series = self.layout(bounds, state);
        if series.is_empty() {
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

            for i in 0..=GRID_LINES {
                let t = i as f32 / GRID_LINES as f32;
                let y = bottom - t * (bottom - top);
                let line = Path::line(Point::new(left, y), Point::new(right, y));
                frame.stroke(
                    &line,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(palette.background.weak.color),
                );

                // Strength axis is fixed 0-100.
                frame.fill_text(Text {
                    content: format!("{:.0}", t * 100.0),
                    position: Point::new(left - 8.0, y - 6.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Right.into(),
                    ..Text::default()
                });
            }

            for line in &series {
                if line.hidden {
                    continue;
                }

                let segments = monotone_segments(&line.points);
                let path = Path::new(|builder| {
                    for (index, segment) in segments.iter().enumerate() {
                        if index == 0 {
                            builder.move_to(Point::new(
                                left + segment.from.x + state.pan.x,
                                top + segment.from.y + state.pan.y,
                            ));
                        }
                        builder.bezier_curve_to(
                            Point::new(
                                left + segment.ctrl1.x + state.pan.x,
                                top + segment.ctrl1.y + state.pan.y,
                            ),
                            Point::new(
                                left + segment.ctrl2.x + state.pan.x,
                                top + segment.ctrl2.y + state.pan.y,
                            ),
                            Point::new(
                                left + segment.to.x + state.pan.x,
                                top + segment.to.y + state.pan.y,
                            ),
                        );
                    }
                });
                frame.stroke(
                    &path,
                    Stroke::default().with_width(2.0).with_color(line.color),
                );

                for point in &line.points {
                    let marker = Path::circle(
                        Point::new(left + point.x + state.pan.x, top + point.y + state.pan.y),
                        4.0,
                    );
                    frame.fill(&marker, line.color);
                }
            }

            for line in series.iter().filter(|line| !line.hidden) {
                if let Some(first) = line.points.first() {
                    frame.fill_text(Text {
                        content: line.player.to_owned(),
                        position: Point::new(
                            left + first.x + state.pan.x - 8.0,
                            top + first.y + state.pan.y - 16.0,
                        ),
                        color: line.color,
                        size: 11.0.into(),
                        align_x: iced::alignment::Horizontal::Right.into(),
                        ..Text::default()
                    });
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());
            let palette = theme.extended_palette();

            let mut nearest: Option<(Point, &'static str, u16, f32, f32)> = None;
            for line in series.iter().filter(|line| !line.hidden) {
                for (point, (year, strength)) in line.points.iter().zip(&line.seasons) {
                    let screen = Point::new(
                        PADDING + point.x + state.pan.x,
                        PADDING + point.y + state.pan.y,
                    );
                    let dx = screen.x - cursor_pos.x;
                    let dy = screen.y - cursor_pos.y;
                    let distance = dx * dx + dy * dy;
                    if nearest.map(|(.., d)| distance < d).unwrap_or(true) {
                        nearest = Some((screen, line.player, *year, *strength, distance));
                    }
                }
            }

            // Only tooltip markers the cursor is actually near.
            if let Some((screen, player, year, strength, distance)) = nearest {
                if distance < 20.0 * 20.0 {
                    let ring = Path::circle(screen, 6.0);
                    overlay.stroke(
                        &ring,
                        Stroke::default()
                            .with_width(1.5)
                            .with_color(palette.primary.strong.color),
                    );
                    overlay.fill_text(Text {
                        content: format!("{player} {year} - strength {strength:.0}"),
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
