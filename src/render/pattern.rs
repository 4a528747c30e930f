use super::canvas::{BLACK, Canvas};

/// Draw a run of modules described by `pattern` ('1' = bar, anything else =
/// space) starting at `x`. Returns the horizontal advance in pixels.
pub fn draw_pattern(
    canvas: &mut Canvas,
    pattern: &str,
    x: i64,
    y: i64,
    module_width: i64,
    bar_height: i64,
) -> i64 {
    for (i, bit) in pattern.bytes().enumerate() {
        if bit == b'1' {
            canvas.fill_rect(x + i as i64 * module_width, y, module_width, bar_height, BLACK);
        }
    }
    pattern.len() as i64 * module_width
}
