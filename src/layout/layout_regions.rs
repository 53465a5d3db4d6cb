use ratatui::layout::Rect;

/// Clickable component identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SearchButton,
    SuggestionList,
    WeatherPanel,
    DetailBoxes,
    HelpPopup,
}

/// Screen areas from the most recent render
///
/// `None` means the component was not drawn in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub search_button: Option<Rect>,
    pub suggestion_list: Option<Rect>,
    /// Index of the first suggestion visible in `suggestion_list`
    pub suggestion_offset: usize,
    pub weather_panel: Option<Rect>,
    pub detail_boxes: Option<Rect>,
    pub help_popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
