use crate::interactive_ratatui::domain::models::FetchResponse;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    SubmitSearch(String),
    LoadMore,
    Retry,
    FetchCompleted(FetchResponse),

    // Gallery events
    SelectItem(usize),
    ImageClicked(String), // raw identifier of the clicked row

    // Modal events
    CloseModal,
    CopyFocusedUrl,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Terminal events
    Quit,
}
