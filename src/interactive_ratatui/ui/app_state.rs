use crate::interactive_ratatui::constants::FIRST_PAGE;
use crate::interactive_ratatui::domain::models::{
    FetchResponse, FetchStatus, FetchTag, ImageItem, ItemId,
};
use crate::interactive_ratatui::domain::pagination::{Exhaustion, check_exhaustion};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::notifications::Notification;
use tracing::{debug, info, warn};

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub gallery: GalleryState,
    pub modal: ModalState,
    pub ui: UiState,
}

pub struct GalleryState {
    pub query: Option<String>,
    pub items: Vec<ImageItem>,
    pub status: FetchStatus,
    pub current_page: u32,
    pub has_more: bool,
    pub selected_index: usize,
}

#[derive(Default)]
pub struct ModalState {
    pub open: bool,
    pub focused_id: Option<ItemId>,
    pub focused_image_url: Option<String>,
}

pub struct UiState {
    pub message: Option<String>,
    pub notifications: Vec<Notification>,
    help_return_mode: Mode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Gallery,
            gallery: GalleryState {
                query: None,
                items: Vec::new(),
                status: FetchStatus::Idle,
                current_page: FIRST_PAGE,
                has_more: true,
                selected_index: 0,
            },
            modal: ModalState::default(),
            ui: UiState {
                message: None,
                notifications: Vec::new(),
                help_return_mode: Mode::Gallery,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SubmitSearch(text) => {
                let term = text.trim();
                if term.is_empty() || self.gallery.query.as_deref() == Some(term) {
                    return Command::None;
                }
                self.gallery.query = Some(term.to_string());
                self.gallery.current_page = FIRST_PAGE;
                self.gallery.has_more = true;
                self.begin_fetch()
            }
            Message::LoadMore => {
                if !self.load_more_visible() {
                    return Command::None;
                }
                self.gallery.current_page += 1;
                self.begin_fetch()
            }
            Message::Retry => {
                if self.gallery.status != FetchStatus::Rejected {
                    return Command::None;
                }
                self.begin_fetch()
            }
            Message::FetchCompleted(response) => self.complete_fetch(response),
            Message::SelectItem(index) => {
                if index < self.gallery.items.len() {
                    self.gallery.selected_index = index;
                }
                Command::None
            }
            Message::ImageClicked(raw_id) => {
                self.open_modal(&raw_id);
                Command::None
            }
            Message::CloseModal => {
                self.close_modal();
                Command::None
            }
            Message::CopyFocusedUrl => match &self.modal.focused_image_url {
                Some(url) => Command::CopyToClipboard(url.clone()),
                None => Command::None,
            },
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.ui.help_return_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.ui.help_return_mode;
                }
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// The tag a response must carry to be applied.
    pub fn current_tag(&self) -> Option<FetchTag> {
        self.gallery
            .query
            .as_ref()
            .map(|query| FetchTag::new(query.clone(), self.gallery.current_page))
    }

    /// Whether the load-more control is offered.
    pub fn load_more_visible(&self) -> bool {
        self.gallery.status == FetchStatus::Resolved
            && self.gallery.has_more
            && !self.gallery.items.is_empty()
    }

    pub fn is_loading_first_page(&self) -> bool {
        self.gallery.status == FetchStatus::Pending && self.gallery.current_page == FIRST_PAGE
    }

    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.gallery.items.get(self.gallery.selected_index)
    }

    pub fn focused_item(&self) -> Option<&ImageItem> {
        let id = self.modal.focused_id?;
        self.gallery.items.iter().find(|item| item.id == id)
    }

    /// Queue a notification on the output channel.
    pub fn notify(&mut self, notification: Notification) {
        self.ui.notifications.push(notification);
    }

    /// Drain notifications produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.ui.notifications)
    }

    fn begin_fetch(&mut self) -> Command {
        match self.current_tag() {
            Some(tag) => {
                info!(query = %tag.query, page = tag.page, "fetching images");
                self.gallery.status = FetchStatus::Pending;
                Command::FetchPage(tag)
            }
            None => Command::None,
        }
    }

    fn complete_fetch(&mut self, response: FetchResponse) -> Command {
        if self.gallery.status != FetchStatus::Pending
            || self.current_tag().as_ref() != Some(&response.tag)
        {
            debug!(tag = %response.tag, "discarding stale response");
            return Command::None;
        }

        let page = response.tag.page;
        match response.outcome {
            Ok(result) => {
                if let Some(exhaustion) = check_exhaustion(result.total_hits, page) {
                    self.gallery.has_more = false;
                    self.notify(match exhaustion {
                        Exhaustion::NoResults => Notification::no_results(),
                        Exhaustion::NoMoreResults => Notification::exhausted(),
                    });
                }

                debug!(
                    tag = %response.tag,
                    total_hits = result.total_hits,
                    received = result.items.len(),
                    "page received"
                );

                if page == FIRST_PAGE {
                    self.gallery.items = result.items;
                    self.gallery.selected_index = 0;
                    if self.modal.open && self.focused_item().is_none() {
                        self.close_modal();
                    }
                } else {
                    self.gallery.items.extend(result.items);
                }
                self.gallery.status = FetchStatus::Resolved;
            }
            Err(err) => {
                warn!(tag = %response.tag, error = %err, "image fetch failed");
                self.gallery.status = FetchStatus::Rejected;
                self.notify(Notification::failure());
            }
        }
        Command::None
    }

    fn close_modal(&mut self) {
        if !self.modal.open {
            return;
        }
        self.modal = ModalState::default();
        match self.mode {
            Mode::Modal => self.mode = Mode::Gallery,
            Mode::Help if self.ui.help_return_mode == Mode::Modal => {
                self.ui.help_return_mode = Mode::Gallery;
            }
            _ => {}
        }
    }

    fn open_modal(&mut self, raw_id: &str) {
        let id = match raw_id.parse::<ItemId>() {
            Ok(id) => id,
            Err(err) => {
                debug!(error = %err, "ignoring click");
                return;
            }
        };

        let Some(index) = self.gallery.items.iter().position(|item| item.id == id) else {
            debug!(%id, "clicked id not in gallery");
            return;
        };

        let item = &self.gallery.items[index];
        self.modal = ModalState {
            open: true,
            focused_id: Some(item.id),
            focused_image_url: Some(item.large_image_url.clone()),
        };
        self.gallery.selected_index = index;
        self.mode = Mode::Modal;
    }
}
