//! Shared navigation helpers for list-based Views
//!
//! Pure functions computing new selection, scroll and parameter values.
//! Each View calls these with its own state and applies the results.

/// Move selection down by one, clamped to max_index.
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Index of the last item, 0 for an empty list
pub fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Calculate scroll offset to keep `selected` visible within `visible_count` rows.
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected - visible_count + 1
    } else {
        scroll_offset
    }
}

/// Step a slider value by `delta` and clamp it to `[min, max]`
///
/// The result is rounded to two decimals.
pub fn step_value(value: f64, delta: f64, min: f64, max: f64) -> f64 {
    let stepped = ((value + delta) * 100.0).round() / 100.0;
    stepped.clamp(min, max)
}
