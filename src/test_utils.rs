use std::{
    cell::RefCell,
    collections::VecDeque,
    fs::{create_dir_all, write},
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::{config::SearchPaths, prompt::Prompter};

/// [`Prompter`] replaying scripted answers and recording everything it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub answers: RefCell<VecDeque<bool>>,
    pub directory: Option<PathBuf>,
    pub questions: RefCell<Vec<String>>,
    pub messages: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>, directory: Option<PathBuf>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            directory,
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_owned());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn choose_directory(&self, _path_start: &Path) -> Option<PathBuf> {
        self.directory.clone()
    }

    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_owned());
    }
}

/// Search paths confined to the given mock home directory
pub fn get_mock_search_paths(path_home: &Path) -> SearchPaths {
    SearchPaths {
        path_julti: path_home.join(".Julti"),
        sweep_locations: vec![path_home.join("Desktop"), path_home.join("Downloads")],
        launcher_roots: vec![path_home.join(".local/share/PrismLauncher")],
        path_browse_start: path_home.to_path_buf(),
    }
}

/// Creates `<path_instances>/<name>/instance.cfg`, plus a `.minecraft` folder if requested,
/// returning the instance root
pub fn create_mock_instance(path_instances: &Path, name: &str, with_data_folder: bool) -> PathBuf {
    let path_instance = path_instances.join(name);
    create_dir_all(&path_instance).unwrap();
    write(path_instance.join("instance.cfg"), "InstanceType=OneSix\n").unwrap();

    if with_data_folder {
        create_dir_all(path_instance.join(".minecraft")).unwrap();
    }

    path_instance
}

/// Log output captured in memory
#[derive(Debug, Default, Clone)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs the closure with every event at `max_level` or above captured, returning the logs
pub fn capture_logs<T>(max_level: Level, f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
