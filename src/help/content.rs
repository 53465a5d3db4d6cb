/// Help entries: (key, description)
///
/// An empty key marks a section header; both empty is a blank line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "TYPING"),
    ("a-z ...", "Edit the city name, suggestions update as you type"),
    ("Backspace", "Delete before cursor"),
    ("Ctrl+S", "Search for the typed city"),
    ("", ""),
    ("", "SUGGESTIONS"),
    ("↓ / ↑", "Next / previous suggestion (wraps around)"),
    ("Enter", "Look up the highlighted suggestion"),
    ("Esc", "Close the suggestion list"),
    ("", ""),
    ("", "MOUSE"),
    ("Click city", "Look up the clicked suggestion"),
    ("Click Search", "Search for the typed city"),
    ("Click outside", "Close the suggestion list"),
    ("", ""),
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Esc", "Quit (when no list is open)"),
    ("Ctrl+C", "Quit"),
];

pub const HELP_FOOTER: &str = "Press F1 or Esc to close";

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
