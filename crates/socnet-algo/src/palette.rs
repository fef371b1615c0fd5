//! Fixed display palette shared by component and coloring results.

use socnet_graph::Rgb;

pub const PALETTE: [Rgb; 15] = [
    Rgb(0, 217, 255),
    Rgb(0, 255, 136),
    Rgb(180, 41, 249),
    Rgb(255, 107, 107),
    Rgb(255, 215, 0),
    Rgb(0, 255, 255),
    Rgb(255, 105, 180),
    Rgb(50, 205, 50),
    Rgb(255, 165, 0),
    Rgb(138, 43, 226),
    Rgb(255, 99, 71),
    Rgb(0, 191, 255),
    Rgb(255, 20, 147),
    Rgb(124, 252, 0),
    Rgb(255, 140, 0),
];

pub const COLOR_NAMES: [&str; 15] = [
    "neon blue",
    "neon green",
    "neon purple",
    "coral red",
    "gold",
    "cyan",
    "hot pink",
    "lime green",
    "orange",
    "blue violet",
    "tomato",
    "deep sky blue",
    "deep pink",
    "lawn green",
    "dark orange",
];

/// Palette entry for a color index. Indices wrap.
pub fn color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

pub fn color_name(index: usize) -> &'static str {
    COLOR_NAMES[index % COLOR_NAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap() {
        assert_eq!(color(0), color(15));
        assert_eq!(color_name(16), "neon green");
    }
}
