use crate::interactive_ratatui::domain::models::FetchTag;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    FetchPage(FetchTag),
    CopyToClipboard(String),
    Quit,
}
