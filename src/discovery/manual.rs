use std::path::Path;

use tracing::{debug, info};

use super::add_instances_from_folder;
use crate::{
    data::{DiscoveryStage, InstancePaths},
    macros::logs::{debug_path, warn_no_instances},
    prompt::Prompter,
    utils::{has_marker_file, to_absolute},
};

const STAGE: DiscoveryStage = DiscoveryStage::ManualSelection;

const BROWSE_QUESTION: &str =
    "No instances have been found automatically. Browse for instances folder?";
const NONE_FOUND_MESSAGE: &str = "Failed to find any instances from selected folder!";

/// Works out which launcher folder the user picked and adds the instances it leads to, returning
/// how many were new. Accepts an instance's `.minecraft` folder, an instance folder, or an
/// `instances` folder.
#[tracing::instrument(level = "trace", skip(instance_paths))]
pub fn add_instances_from_selected_folder(
    path_selected: &Path,
    instance_paths: &mut InstancePaths,
) -> usize {
    let path_selected = to_absolute(path_selected);
    let path_parent = path_selected.parent();

    if path_parent.is_some_and(has_marker_file) {
        debug!("{STAGE:?} - Selected folder is an instance data folder");
        return path_parent
            .and_then(Path::parent)
            .map_or(0, |path_instances| {
                add_instances_from_folder(path_instances, instance_paths)
            });
    }

    if has_marker_file(&path_selected) {
        debug!("{STAGE:?} - Selected folder is an instance folder");
        return path_parent.map_or(0, |path_instances| {
            add_instances_from_folder(path_instances, instance_paths)
        });
    }

    debug!("{STAGE:?} - Treating selected folder as an instances folder");
    add_instances_from_folder(&path_selected, instance_paths)
}

/// Offers to let the user pick a launcher folder and adds the instances found from it, returning
/// how many were new. Tells the user if their pick led nowhere.
#[tracing::instrument(level = "trace", skip(prompter, instance_paths))]
pub fn add_instances_from_selection(
    path_browse_start: &Path,
    prompter: &dyn Prompter,
    instance_paths: &mut InstancePaths,
) -> usize {
    if !prompter.confirm(BROWSE_QUESTION) {
        info!("{STAGE:?} - User declined to browse for an instances folder");
        return 0;
    }

    let Some(path_selected) = prompter.choose_directory(path_browse_start) else {
        info!("{STAGE:?} - No folder selected");
        return 0;
    };
    debug_path!("selected folder", path_selected);

    let added = add_instances_from_selected_folder(&path_selected, instance_paths);
    if added == 0 {
        warn_no_instances!();
        prompter.warn(NONE_FOUND_MESSAGE);
    }

    added
}
