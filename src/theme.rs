use iced::{widget::button, Background, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x1e, 0x3a, 0x8a);
pub const DRAWER_BG: Color = Color::from_rgb8(0x0c, 0x11, 0x1f);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x12, 0x1a, 0x30);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xe8, 0xee, 0xfb);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0xa3, 0xad, 0xc2);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xea, 0xf0, 0xfc);

/// Ten-color categorical palette assigned to players positionally, wrapping
/// when the domain outgrows it.
pub const CATEGORY_PALETTE: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Warmer six-color palette used by the donut page.
pub const DONUT_PALETTE: [Color; 6] = [
    Color::from_rgb8(0xe0, 0xac, 0x2b),
    Color::from_rgb8(0xe8, 0x52, 0x52),
    Color::from_rgb8(0x66, 0x89, 0xc6),
    Color::from_rgb8(0x9a, 0x6f, 0xb0),
    Color::from_rgb8(0xa5, 0x32, 0x53),
    Color::from_rgb8(0x69, 0xb3, 0xa2),
];

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = ACCENT;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.7;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}
