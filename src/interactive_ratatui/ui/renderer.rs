use crate::interactive_ratatui::constants::{SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::interactive_ratatui::domain::models::FetchStatus;
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, help_dialog::HelpDialog, image_list::ImageList, image_modal::ImageModal,
    loader::Loader, search_bar::SearchBar, status_bar::StatusBar, toast::render_toast,
};
use crate::interactive_ratatui::ui::notifications::Notification;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub struct Renderer {
    search_bar: SearchBar,
    image_list: ImageList,
    status_bar: StatusBar,
    loader: Loader,
    image_modal: ImageModal,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            image_list: ImageList::new(),
            status_bar: StatusBar::new(),
            loader: Loader::new(),
            image_modal: ImageModal::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, toast: Option<&Notification>) {
        self.render_gallery(f, state);

        match state.mode {
            Mode::Gallery => {}
            Mode::Modal => self.render_modal(f, state),
            Mode::Help => {
                if state.modal.open {
                    self.render_modal(f, state);
                }
                self.help_dialog.render(f, f.area());
            }
        }

        if let Some(notification) = toast {
            render_toast(f, f.area(), notification);
        }
    }

    fn render_gallery(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Images
                Constraint::Length(STATUS_BAR_HEIGHT), // Loader / load more
            ])
            .split(f.area());

        self.sync(state);

        self.search_bar.render(f, chunks[0]);
        self.image_list.render(f, chunks[1]);
        self.status_bar.render(f, chunks[2], &self.loader);

        if state.is_loading_first_page() {
            self.loader
                .render_centered(f, chunks[1], "Loading images...");
        }
    }

    /// Push the current state into the stateful components so key and mouse
    /// handling sees what the last frame showed.
    pub fn sync(&mut self, state: &AppState) {
        self.search_bar
            .set_active_query(state.gallery.query.clone());
        self.search_bar
            .set_searching(state.gallery.status == FetchStatus::Pending);
        self.search_bar.set_message(state.ui.message.clone());

        self.image_list.set_items(state.gallery.items.clone());
        self.image_list
            .set_selected_index(state.gallery.selected_index);

        self.status_bar.set_status(state.gallery.status);
        self.status_bar.set_load_more_visible(state.load_more_visible());
        self.status_bar
            .set_has_items(!state.gallery.items.is_empty());
    }

    fn render_modal(&mut self, f: &mut Frame, state: &AppState) {
        if let Some(url) = &state.modal.focused_image_url {
            self.image_modal
                .set_image(url.clone(), state.focused_item().cloned());
            self.image_modal.render(f, f.area());
        }
    }

    /// Advance animations; called once per frame by the event loop.
    pub fn tick(&mut self) {
        self.loader.tick();
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_image_list_mut(&mut self) -> &mut ImageList {
        &mut self.image_list
    }

    pub fn get_status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn get_image_modal_mut(&mut self) -> &mut ImageModal {
        &mut self.image_modal
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
