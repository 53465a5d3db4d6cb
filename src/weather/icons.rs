//! Condition icons
//!
//! Five-line ASCII art per condition category, with a fallback for anything
//! outside the fixed vocabulary.

use ratatui::style::Color;

use super::snapshot::Condition;

pub const ICON_HEIGHT: u16 = 5;
pub const ICON_WIDTH: u16 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherIcon {
    pub lines: [&'static str; 5],
    pub color: Color,
}

const CLEAR: WeatherIcon = WeatherIcon {
    lines: [
        "    \\   /    ",
        "     .-.     ",
        "  ― (   ) ―  ",
        "     `-’     ",
        "    /   \\    ",
    ],
    color: Color::Yellow,
};

const CLOUDS: WeatherIcon = WeatherIcon {
    lines: [
        "             ",
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "             ",
    ],
    color: Color::Gray,
};

const RAIN: WeatherIcon = WeatherIcon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    ‘ ‘ ‘ ‘  ",
        "   ‘ ‘ ‘ ‘   ",
    ],
    color: Color::LightBlue,
};

const SNOW: WeatherIcon = WeatherIcon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    *  *  *  ",
        "   *  *  *   ",
    ],
    color: Color::White,
};

const THUNDERSTORM: WeatherIcon = WeatherIcon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "  ‚‘⚡‘‚⚡‚‘ ",
        "  ‚’‚’⚡’‚’  ",
    ],
    color: Color::LightYellow,
};

const MIST: WeatherIcon = WeatherIcon {
    lines: [
        "             ",
        "  ~ ~ ~ ~ ~  ",
        " ~ ~ ~ ~ ~ ~ ",
        "  ~ ~ ~ ~ ~  ",
        "             ",
    ],
    color: Color::Gray,
};

const FOG: WeatherIcon = WeatherIcon {
    lines: [
        "             ",
        " _ - _ - _ - ",
        "  _ - _ - _  ",
        " _ - _ - _ - ",
        "             ",
    ],
    color: Color::DarkGray,
};

const FALLBACK: WeatherIcon = WeatherIcon {
    lines: [
        "      .      ",
        "   .  *  .   ",
        "  -- *** --  ",
        "   '  *  '   ",
        "      '      ",
    ],
    color: Color::Magenta,
};

/// Icon for a condition; unrecognized categories get the fallback icon
pub fn icon_for(condition: &Condition) -> &'static WeatherIcon {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Clouds => &CLOUDS,
        Condition::Rain => &RAIN,
        Condition::Snow => &SNOW,
        Condition::Thunderstorm => &THUNDERSTORM,
        Condition::Mist => &MIST,
        Condition::Fog => &FOG,
        Condition::Other(_) => &FALLBACK,
    }
}

/// Icon shown before any weather has been fetched
pub fn fallback_icon() -> &'static WeatherIcon {
    &FALLBACK
}
