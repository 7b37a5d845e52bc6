//! Submission controller
//!
//! Bridges the receipt form to the store and the renderer. A submission with
//! no edit target creates and prints a new receipt; with an edit target it
//! updates that receipt, prints it, and leaves edit mode. Either way the form
//! is cleared on success.

use tracing::warn;

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::receipt::validate_title;
use crate::models::{Receipt, ReceiptId};
use crate::render::{PrintOutcome, PrintSurface, Renderer};
use crate::services::ReceiptService;
use crate::storage::Storage;

/// Submit label while creating
pub const CREATE_LABEL: &str = "Создать и напечатать";

/// Submit label while editing
pub const UPDATE_LABEL: &str = "Обновить и напечатать";

/// Input fields of the receipt form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptForm {
    pub title: String,
    pub note: String,
}

impl ReceiptForm {
    /// Create a form with the given contents
    pub fn new(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
        }
    }

    /// Reset both fields
    pub fn clear(&mut self) {
        self.title.clear();
        self.note.clear();
    }
}

/// Whether a submission created or updated a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Created,
    Updated,
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Build a notice
    pub fn new(level: NoticeLevel, title: &str, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// Notice shown when an operation fails
    pub fn from_error(err: &ReceiptError) -> Self {
        match err {
            ReceiptError::Validation(msg) => Self::new(NoticeLevel::Error, "Ошибка", msg.clone()),
            ReceiptError::NotFound { .. } => Self::new(
                NoticeLevel::Error,
                "Ошибка",
                "Чек не найден, редактирование отменено",
            ),
            other => Self::new(NoticeLevel::Error, "Ошибка", other.to_string()),
        }
    }

    /// Soft warning for a print that could not reach its surface
    pub fn print_unavailable(reason: &str) -> Self {
        Self::new(
            NoticeLevel::Warning,
            "Печать недоступна",
            format!("Не удалось открыть окно печати: {}", reason),
        )
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub receipt: Receipt,
    pub mode: SubmitMode,
    pub print: PrintOutcome,
}

impl SubmitOutcome {
    /// Notices to show the user for this submission
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = vec![match self.mode {
            SubmitMode::Created => {
                Notice::new(NoticeLevel::Success, "Чек создан!", "Отправлено на печать")
            }
            SubmitMode::Updated => Notice::new(
                NoticeLevel::Success,
                "Готово!",
                "Чек обновлён и отправлен на печать",
            ),
        }];
        if let PrintOutcome::Unavailable { reason } = &self.print {
            notices.push(Notice::print_unavailable(reason));
        }
        notices
    }
}

/// Drives the receipt form
pub struct SubmissionController<'a, S> {
    storage: &'a Storage,
    renderer: Renderer<S>,
    /// Current form contents
    pub form: ReceiptForm,
}

impl<'a, S: PrintSurface> SubmissionController<'a, S> {
    /// Create a controller with an empty form
    pub fn new(storage: &'a Storage, renderer: Renderer<S>) -> Self {
        Self {
            storage,
            renderer,
            form: ReceiptForm::default(),
        }
    }

    fn service(&self) -> ReceiptService<'a> {
        ReceiptService::new(self.storage)
    }

    /// The renderer used for printing
    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// Id of the receipt being edited, if any
    pub fn edit_target(&self) -> Option<ReceiptId> {
        self.service().edit_target().ok().flatten()
    }

    /// Whether a receipt is being edited
    pub fn is_editing(&self) -> bool {
        self.edit_target().is_some()
    }

    /// Label of the submit action for the current mode
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            UPDATE_LABEL
        } else {
            CREATE_LABEL
        }
    }

    /// Submit the form
    pub fn submit(&mut self) -> ReceiptResult<SubmitOutcome> {
        validate_title(&self.form.title).map_err(|e| ReceiptError::Validation(e.to_string()))?;

        let service = self.service();
        let outcome = match service.edit_target()? {
            Some(id) => {
                let receipt = match service.update(&id, &self.form.title, &self.form.note) {
                    Ok(receipt) => receipt,
                    Err(e) => {
                        if e.is_not_found() {
                            warn!(id = %id, "edit target vanished; leaving edit mode");
                            service.cancel_edit()?;
                        }
                        return Err(e);
                    }
                };
                let print = self.renderer.print(&receipt);
                service.cancel_edit()?;
                SubmitOutcome {
                    receipt,
                    mode: SubmitMode::Updated,
                    print,
                }
            }
            None => {
                let receipt = service.create(&self.form.title, &self.form.note)?;
                let print = self.renderer.print(&receipt);
                SubmitOutcome {
                    receipt,
                    mode: SubmitMode::Created,
                    print,
                }
            }
        };

        self.form.clear();
        Ok(outcome)
    }

    /// Load a receipt into the form and make it the edit target
    pub fn handle_edit(&mut self, receipt: &Receipt) -> ReceiptResult<()> {
        let stored = self.service().begin_edit(&receipt.id)?;
        self.form = ReceiptForm::new(stored.title, stored.note);
        Ok(())
    }

    /// Clear the form and leave edit mode
    pub fn handle_cancel(&mut self) -> ReceiptResult<()> {
        self.form.clear();
        self.service().cancel_edit()
    }

    /// Delete a receipt. Always reports success to the user.
    pub fn handle_delete(&mut self, id: &ReceiptId) -> ReceiptResult<Notice> {
        self.service().delete(id)?;
        Ok(Notice::new(
            NoticeLevel::Success,
            "Удалено",
            "Чек удалён из истории",
        ))
    }

    /// Print a stored receipt again
    pub fn handle_print(&self, receipt: &Receipt) -> PrintOutcome {
        self.renderer.print(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ReceiptPaths;
    use crate::models::FixedClock;
    use crate::render::testing::{BlockedSurface, RecordingSurface};
    use crate::render::RenderOptions;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let stamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        let storage = Storage::new(paths).unwrap().with_clock(FixedClock(stamp));
        (temp_dir, storage)
    }

    fn controller(storage: &Storage) -> SubmissionController<'_, RecordingSurface> {
        SubmissionController::new(
            storage,
            Renderer::new(RecordingSurface::default(), RenderOptions::default()),
        )
    }

    #[test]
    fn test_submit_creates_and_prints() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        controller.form = ReceiptForm::new("Groceries", "Milk\nEggs");

        let outcome = controller.submit().unwrap();

        assert_eq!(outcome.mode, SubmitMode::Created);
        assert!(outcome.print.is_dispatched());
        assert_eq!(outcome.receipt.title, "Groceries");
        assert_eq!(controller.form, ReceiptForm::default());

        let documents = controller.renderer().surface().documents.borrow();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].html.contains("<h2>Groceries</h2>"));
        assert!(documents[0].html.contains("<p>Milk\nEggs</p>"));
        assert_eq!(outcome.notices()[0].title, "Чек создан!");
    }

    #[test]
    fn test_submit_empty_title_touches_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        controller.form = ReceiptForm::new("   ", "kept note");

        let err = controller.submit().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(Notice::from_error(&err).description, "Введите название чека");
        assert_eq!(ReceiptService::new(&storage).count().unwrap(), 0);
        assert!(controller.renderer().surface().documents.borrow().is_empty());
        assert_eq!(controller.form.note, "kept note");
    }

    #[test]
    fn test_edit_then_submit_updates_in_place() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        controller.form = ReceiptForm::new("X", "");
        let original = controller.submit().unwrap().receipt;

        controller.handle_edit(&original).unwrap();
        assert!(controller.is_editing());
        assert_eq!(controller.submit_label(), UPDATE_LABEL);
        assert_eq!(controller.form, ReceiptForm::new("X", ""));

        controller.form.title = "Y".into();
        let outcome = controller.submit().unwrap();

        assert_eq!(outcome.mode, SubmitMode::Updated);
        assert_eq!(outcome.notices()[0].description, "Чек обновлён и отправлен на печать");
        let all = ReceiptService::new(&storage).list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Y");
        assert_eq!(all[0].id, original.id);
        assert_eq!(all[0].date, original.date);
        assert_eq!(all[0].time, original.time);
        assert!(!controller.is_editing());
        assert_eq!(controller.submit_label(), CREATE_LABEL);
        assert_eq!(controller.renderer().surface().documents.borrow().len(), 2);
    }

    #[test]
    fn test_handle_edit_does_not_print() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        let receipt = ReceiptService::new(&storage).create("A", "n").unwrap();

        controller.handle_edit(&receipt).unwrap();

        assert!(controller.renderer().surface().documents.borrow().is_empty());
    }

    #[test]
    fn test_cancel_clears_form_and_target() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        let receipt = ReceiptService::new(&storage).create("A", "n").unwrap();
        controller.handle_edit(&receipt).unwrap();

        controller.handle_cancel().unwrap();

        assert_eq!(controller.form, ReceiptForm::default());
        assert!(!controller.is_editing());
        assert_eq!(ReceiptService::new(&storage).list().unwrap(), vec![receipt]);
    }

    #[test]
    fn test_vanished_edit_target_is_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        let receipt = ReceiptService::new(&storage).create("A", "").unwrap();
        controller.handle_edit(&receipt).unwrap();
        // Removed behind the controller's back; the edit target still points at it
        storage.receipts.remove(&receipt.id).unwrap();

        controller.form.title = "B".into();
        let err = controller.submit().unwrap_err();

        assert!(err.is_not_found());
        assert!(!controller.is_editing());
        assert_eq!(controller.form.title, "B");
        assert!(controller.renderer().surface().documents.borrow().is_empty());
    }

    #[test]
    fn test_delete_always_reports_success() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = controller(&storage);
        let receipt = ReceiptService::new(&storage).create("A", "").unwrap();

        let first = controller.handle_delete(&receipt.id).unwrap();
        let second = controller.handle_delete(&receipt.id).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.level, NoticeLevel::Success);
        assert_eq!(ReceiptService::new(&storage).count().unwrap(), 0);
    }

    #[test]
    fn test_blocked_surface_still_stores_receipt() {
        let (_temp_dir, storage) = create_test_storage();
        let mut controller = SubmissionController::new(
            &storage,
            Renderer::new(BlockedSurface, RenderOptions::default()),
        );
        controller.form = ReceiptForm::new("Offline", "");

        let outcome = controller.submit().unwrap();

        assert!(!outcome.print.is_dispatched());
        let notices = outcome.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].level, NoticeLevel::Warning);
        assert_eq!(ReceiptService::new(&storage).count().unwrap(), 1);
        assert_eq!(controller.form, ReceiptForm::default());
    }

    #[test]
    fn test_reprint_from_history() {
        let (_temp_dir, storage) = create_test_storage();
        let controller = controller(&storage);
        let receipt = ReceiptService::new(&storage).create("A", "").unwrap();

        assert!(controller.handle_print(&receipt).is_dispatched());
        assert!(controller.handle_print(&receipt).is_dispatched());

        assert_eq!(controller.renderer().surface().documents.borrow().len(), 2);
        assert_eq!(ReceiptService::new(&storage).count().unwrap(), 1);
    }
}
