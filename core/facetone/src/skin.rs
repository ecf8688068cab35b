use crate::color::Rgb;

/// Whether a single pixel looks like skin under the RGB heuristic.
///
/// Skin iff `r > 95`, `g > 40`, `b > 20`, channel spread `> 15`,
/// `|r - g| > 15`, and red dominates both other channels.
pub fn is_skin_color(rgb: Rgb) -> bool {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    r > 95 && g > 40 && b > 20 && max - min > 15 && r.abs_diff(g) > 15 && r > g && r > b
}
