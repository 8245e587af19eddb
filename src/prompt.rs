//! User interaction needed by discovery and installation.

use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::debug;

use crate::data::DIALOG_TITLE;

/// Everything the tool ever asks of the user
pub trait Prompter {
    /// Asks a yes/no question, returning `true` for yes
    fn confirm(&self, message: &str) -> bool;

    /// Asks for a directory, returning `None` if the user cancelled
    fn choose_directory(&self, path_start: &Path) -> Option<PathBuf>;

    /// Shows an informational message
    fn notify(&self, message: &str);

    /// Shows a warning message
    fn warn(&self, message: &str) {
        self.notify(message);
    }
}

/// [`Prompter`] backed by native dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPrompter;

impl DialogPrompter {
    fn show_message(message: &str, level: MessageLevel) {
        MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_level(level)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Prompter for DialogPrompter {
    fn confirm(&self, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::YesNo)
            .show();
        debug!("Confirmation dialog returned {result:?}");

        result == MessageDialogResult::Yes
    }

    fn choose_directory(&self, path_start: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(format!("{DIALOG_TITLE}: Get Instances Folder"))
            .set_directory(path_start)
            .pick_folder()
    }

    fn notify(&self, message: &str) {
        Self::show_message(message, MessageLevel::Info);
    }

    fn warn(&self, message: &str) {
        Self::show_message(message, MessageLevel::Warning);
    }
}
