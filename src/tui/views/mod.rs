//! TUI Views module
//!
//! Contains the main views: the receipt form and the history, plus the
//! navigation and status bars.

pub mod create;
pub mod history;
pub mod nav;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    nav::render(frame, app, layout.nav);

    match app.active_view {
        ActiveView::Create => create::render(frame, app, layout.main),
        ActiveView::History => history::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }

    render_notifications(frame, app);
}

/// Render toasts over everything else
fn render_notifications(frame: &mut Frame, app: &App) {
    let area = frame.area();
    for (index, notification) in app.notifications.visible().iter().enumerate() {
        let Some(rect) = toast_rect(index as u16, area) else {
            break;
        };
        frame.render_widget(NotificationWidget::new(notification), rect);
    }
}
