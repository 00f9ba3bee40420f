// Pointer helpers shared by the hero sphere and the cursor follower.
// Kept free of DOM types so they can be exercised on the host.

/// Map a client-space pointer position into \[-1, 1\] on both axes relative
/// to a rectangle. A degenerate rectangle maps to the centre.
#[inline]
pub fn normalized_in_rect(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    let u = ((client_x - left) / width).clamp(0.0, 1.0);
    let v = ((client_y - top) / height).clamp(0.0, 1.0);
    [u * 2.0 - 1.0, v * 2.0 - 1.0]
}

/// Whether the cursor follower should switch to its "pointer" look over an
/// element with this tag, class list and computed `cursor` value.
#[inline]
pub fn is_interactive(tag_name: &str, class_name: &str, cursor: &str) -> bool {
    let tag = tag_name.to_ascii_uppercase();
    cursor == "pointer"
        || tag == "A"
        || tag == "BUTTON"
        || class_name.split_whitespace().any(|c| c == "cursor-pointer")
}

/// Convert a wheel delta to pixels given its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, line_px: f64, page_px: f64) -> f64 {
    match delta_mode {
        1 => delta * line_px,
        2 => delta * page_px,
        _ => delta,
    }
}
