//! Styling utilities and color schemes

use crate::types::{Method, StatusBucket};
use ratatui::style::Color;

/// Get the color for an HTTP method
pub fn method_color(method: Method) -> Color {
    match method {
        Method::Get => Color::Green,
        Method::Post => Color::Blue,
        Method::Put => Color::Yellow,
        Method::Delete => Color::Red,
        Method::Patch => Color::Cyan,
    }
}

/// Status badge color for a response bucket
pub fn bucket_color(bucket: StatusBucket) -> Color {
    match bucket {
        StatusBucket::Success => Color::Green,
        StatusBucket::Warning => Color::Yellow,
        StatusBucket::Error => Color::Red,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}
