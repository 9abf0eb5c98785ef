/// Result of a key press against a highlighted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyNavigation {
    /// Highlighted item after the key; `None` clears the highlight.
    pub index: Option<usize>,
    /// Item chosen with Enter.
    pub selected: Option<usize>,
    pub prevent_default: bool,
}

/// Arrow keys move the highlight (clamped to the list), Enter selects the
/// highlighted item, Escape clears it. Other keys leave things as they are.
pub fn handle_keyboard_navigation(
    key: &str,
    item_count: usize,
    current: Option<usize>,
) -> KeyNavigation {
    let last = item_count.checked_sub(1);
    match key {
        "ArrowDown" => KeyNavigation {
            index: last.map(|last| current.map_or(0, |idx| (idx + 1).min(last))),
            selected: None,
            prevent_default: true,
        },
        "ArrowUp" => KeyNavigation {
            index: last.map(|last| current.map_or(0, |idx| idx.saturating_sub(1).min(last))),
            selected: None,
            prevent_default: true,
        },
        "Enter" => KeyNavigation {
            index: current,
            selected: current.filter(|idx| *idx < item_count),
            prevent_default: true,
        },
        "Escape" => KeyNavigation {
            index: None,
            selected: None,
            prevent_default: true,
        },
        _ => KeyNavigation {
            index: current,
            selected: None,
            prevent_default: false,
        },
    }
}

/// Where focus should jump when Tab is pressed inside a focus trap, or
/// `None` to let the browser move focus normally.
pub fn focus_trap_target(focusable_count: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    let last = focusable_count.checked_sub(1)?;
    match (shift, active) {
        (true, Some(0)) => Some(last),
        (false, Some(idx)) if idx == last => Some(0),
        _ => None,
    }
}
