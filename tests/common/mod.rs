use std::{
    cell::RefCell,
    collections::VecDeque,
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use server_icon_fix::{config::SearchPaths, prompt::Prompter};

/// Answers prompts from a script and records what was shown
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<bool>>,
    directory: Option<PathBuf>,
    pub questions: RefCell<Vec<String>>,
    pub messages: RefCell<Vec<String>>,
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
}

pub fn get_mock_search_paths(path_home: &Path) -> SearchPaths {
    SearchPaths {
        path_julti: path_home.join(".Julti"),
        sweep_locations: vec![
            path_home.join("Desktop"),
            path_home.join("Documents"),
            path_home.join("Downloads"),
        ],
        launcher_roots: vec![path_home.join(".local/share/PrismLauncher")],
        path_browse_start: path_home.to_path_buf(),
    }
}

pub fn create_mock_instance(path_instances: &Path, name: &str) -> PathBuf {
    let path_data = path_instances.join(name).join(".minecraft");
    create_dir_all(&path_data).unwrap();
    write(path_instances.join(name).join("instance.cfg"), "name=test\n").unwrap();

    path_data
}

pub fn write_julti_profile(path_home: &Path, name: &str, paths: &[&Path]) {
    let path_profiles = path_home.join(".Julti/profiles");
    create_dir_all(&path_profiles).unwrap();

    let paths = paths
        .iter()
        .map(|p| serde_json::to_string(&p.to_string_lossy()).unwrap())
        .collect::<Vec<_>>()
        .join(",");
    write(
        path_profiles.join(name),
        format!(r#"{{"profileName":"{name}","instancePaths":[{paths}]}}"#),
    )
    .unwrap();
}
