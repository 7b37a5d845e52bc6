//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Receipt operations go through the submission controller; the text inputs
//! mirror the controller's form while the user types.

use tracing::warn;

use crate::config::paths::ReceiptPaths;
use crate::config::settings::Settings;
use crate::controller::{Notice, SubmissionController};
use crate::models::Receipt;
use crate::render::{PrintOutcome, PrintSurface, Renderer};
use crate::services::ReceiptService;
use crate::storage::Storage;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Create,
    History,
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Note,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a ReceiptPaths,

    /// Form submission and receipt actions
    pub controller: SubmissionController<'a, Box<dyn PrintSurface>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Focused form field
    pub focused_field: FormField,

    /// Title input
    pub title_input: TextInput,

    /// Note input
    pub note_input: TextInput,

    /// Selected receipt index in the history list
    pub selected_index: usize,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        storage: &'a Storage,
        settings: &'a Settings,
        paths: &'a ReceiptPaths,
        renderer: Renderer<Box<dyn PrintSurface>>,
    ) -> Self {
        let mut app = Self {
            storage,
            settings,
            paths,
            controller: SubmissionController::new(storage, renderer),
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            focused_field: FormField::default(),
            title_input: TextInput::new().placeholder("Например: Покупки в магазине"),
            note_input: TextInput::new()
                .placeholder("Дополнительная информация...")
                .multiline(true),
            selected_index: 0,
            notifications: NotificationQueue::new(),
        };
        app.focus_field(FormField::Title);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        if view == ActiveView::History {
            self.clamp_selection();
        }
    }

    /// Toggle between the form and the history
    pub fn toggle_view(&mut self) {
        let next = match self.active_view {
            ActiveView::Create => ActiveView::History,
            ActiveView::History => ActiveView::Create,
        };
        self.switch_view(next);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Show a notice as a toast
    pub fn notify(&mut self, notice: Notice) {
        self.notifications.push(Notification::from(notice));
    }

    /// All receipts, newest first
    pub fn receipts(&self) -> Vec<Receipt> {
        ReceiptService::new(self.storage).list().unwrap_or_default()
    }

    /// Number of stored receipts
    pub fn receipt_count(&self) -> usize {
        ReceiptService::new(self.storage).count().unwrap_or(0)
    }

    /// Receipt under the history cursor
    pub fn selected_receipt(&self) -> Option<Receipt> {
        self.receipts().into_iter().nth(self.selected_index)
    }

    /// Whether a receipt is being edited
    pub fn is_editing(&self) -> bool {
        self.controller.is_editing()
    }

    /// Move selection up in the history
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the history
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.receipt_count() {
            self.selected_index += 1;
        }
    }

    /// Jump to the newest receipt
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the oldest receipt
    pub fn select_last(&mut self) {
        self.selected_index = self.receipt_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.receipt_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Give focus to a form field
    pub fn focus_field(&mut self, field: FormField) {
        self.focused_field = field;
        self.title_input.focused = field == FormField::Title;
        self.note_input.focused = field == FormField::Note;
    }

    /// Move focus to the other form field
    pub fn toggle_field(&mut self) {
        let next = match self.focused_field {
            FormField::Title => FormField::Note,
            FormField::Note => FormField::Title,
        };
        self.focus_field(next);
    }

    /// The input that currently has focus
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Title => &mut self.title_input,
            FormField::Note => &mut self.note_input,
        }
    }

    fn sync_form_from_inputs(&mut self) {
        self.controller.form.title = self.title_input.value().to_string();
        self.controller.form.note = self.note_input.value().to_string();
    }

    fn load_inputs_from_form(&mut self) {
        self.title_input.set_value(self.controller.form.title.clone());
        self.note_input.set_value(self.controller.form.note.clone());
    }

    /// Submit the form: create or update, then print
    pub fn submit(&mut self) {
        self.sync_form_from_inputs();
        match self.controller.submit() {
            Ok(outcome) => {
                for notice in outcome.notices() {
                    self.notify(notice);
                }
                self.load_inputs_from_form();
                self.focus_field(FormField::Title);
                self.select_first();
            }
            Err(e) => {
                warn!(error = %e, "submit failed");
                self.notify(Notice::from_error(&e));
            }
        }
    }

    /// Load the selected receipt into the form for editing
    pub fn edit_selected(&mut self) {
        let Some(receipt) = self.selected_receipt() else {
            return;
        };
        match self.controller.handle_edit(&receipt) {
            Ok(()) => {
                self.load_inputs_from_form();
                self.focus_field(FormField::Title);
                self.switch_view(ActiveView::Create);
            }
            Err(e) => self.notify(Notice::from_error(&e)),
        }
    }

    /// Clear the form and leave edit mode
    pub fn cancel_edit(&mut self) {
        if let Err(e) = self.controller.handle_cancel() {
            self.notify(Notice::from_error(&e));
        }
        self.load_inputs_from_form();
        self.focus_field(FormField::Title);
    }

    /// Delete the selected receipt
    pub fn delete_selected(&mut self) {
        let Some(receipt) = self.selected_receipt() else {
            return;
        };
        match self.controller.handle_delete(&receipt.id) {
            Ok(notice) => self.notify(notice),
            Err(e) => self.notify(Notice::from_error(&e)),
        }
        self.clamp_selection();
    }

    /// Print the selected receipt again
    pub fn print_selected(&mut self) {
        let Some(receipt) = self.selected_receipt() else {
            return;
        };
        match self.controller.handle_print(&receipt) {
            PrintOutcome::Dispatched { .. } => self.notifications.push(Notification::info(
                "Печать",
                format!("Чек №{} отправлен на печать", receipt.id.to_uppercase()),
            )),
            PrintOutcome::Unavailable { reason } => {
                self.notify(Notice::print_unavailable(&reason))
            }
        }
    }
}
