//! Pointer mechanics shared by every chart canvas: wheel zoom, right-drag
//! pan, redraw on hover. Chart-specific clicks are layered on top in each
//! program's `update`.

use iced::mouse;
use iced::widget::canvas;
use iced::{Point, Rectangle, Vector};

use crate::message::Message;

#[derive(Debug, Clone, Copy)]
pub struct CanvasState {
    pub zoom: f32,
    pub pan: Vector,
    pub pan_start: Option<Point>,
    pub pan_origin: Vector,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vector::new(0.0, 0.0),
            pan_start: None,
            pan_origin: Vector::new(0.0, 0.0),
        }
    }
}

impl CanvasState {
    pub fn effective_zoom(&self) -> f32 {
        if self.zoom <= 0.0 {
            1.0
        } else {
            self.zoom
        }
    }
}

pub fn handle(
    state: &mut CanvasState,
    event: &canvas::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<canvas::Action<Message>> {
    match event {
        canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let scroll = match delta {
                mouse::ScrollDelta::Lines { y, .. } => *y,
                mouse::ScrollDelta::Pixels { y, .. } => *y / 60.0,
            };
            let factor = if scroll > 0.0 { 1.1 } else { 0.9 };
            state.zoom = (state.zoom * factor).clamp(0.5, 5.0);
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            if let Some(pan_start) = state.pan_start {
                let delta = Vector::new(position.x - pan_start.x, position.y - pan_start.y);
                state.pan = state.pan_origin + delta;
            }
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::CursorEntered)
        | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
            state.pan_start = cursor.position_in(bounds);
            state.pan_origin = state.pan;
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)) => {
            state.pan_start = None;
            Some(canvas::Action::request_redraw())
        }
        _ => None,
    }
}

pub fn brighten(color: iced::Color, factor: f32) -> iced::Color {
    iced::Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        a: color.a,
    }
}
