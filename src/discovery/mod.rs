//! Instance discovery, run as a series of fallback stages which all add to one
//! [`InstancePaths`] set.
//!
//! 1. [`julti`] - instance paths recorded in Julti profiles
//! 2. [`siblings`] - every other instance next to the first recorded one
//! 3. [`sweep`] - launcher executables in common install locations (only if still empty)
//! 4. [`manual`] - a folder picked by the user (only if still empty)

pub mod julti;
pub mod manual;
pub mod siblings;
pub mod sweep;

use std::path::Path;

use tracing::{debug, trace};

use crate::{
    config::SearchPaths,
    data::InstancePaths,
    prompt::Prompter,
    utils::{get_data_folder, list_dir, to_absolute},
};

/// Runs every discovery stage needed, returning only candidates which are existing directories
#[tracing::instrument(level = "trace", skip(prompter))]
pub fn discover(search_paths: &SearchPaths, prompter: &dyn Prompter) -> InstancePaths {
    let mut instance_paths = InstancePaths::new();

    julti::add_instances_from_profiles(&search_paths.path_julti_profiles(), &mut instance_paths);
    siblings::add_sibling_instances(&mut instance_paths);

    if instance_paths.is_empty() {
        sweep::add_instances_from_sweep(search_paths, &mut instance_paths);
    }

    if instance_paths.is_empty() {
        manual::add_instances_from_selection(
            &search_paths.path_browse_start,
            prompter,
            &mut instance_paths,
        );
    }

    retain_existing_dirs(&mut instance_paths);
    debug!("Discovered {} instances", instance_paths.len());

    instance_paths
}

/// Adds the data folder of every instance inside the given `instances` folder, returning how many
/// were new. A missing or unreadable folder simply adds nothing.
pub fn add_instances_from_folder(path_instances: &Path, instance_paths: &mut InstancePaths) -> usize {
    let paths_instance = match list_dir(path_instances) {
        Ok(paths) => paths,
        Err(e) => {
            trace!("Could not list instances folder at {path_instances:?}: {e}");
            return 0;
        }
    };

    paths_instance
        .iter()
        .filter_map(|path_instance| get_data_folder(path_instance))
        .map(|path_data| to_absolute(&path_data))
        .filter(|path_data| {
            let is_new = instance_paths.insert(path_data.clone());
            if is_new {
                trace!("Found instance data folder at {path_data:?}");
            }
            is_new
        })
        .count()
}

fn retain_existing_dirs(instance_paths: &mut InstancePaths) {
    instance_paths.retain(|path| {
        let is_dir = path.is_dir();
        if !is_dir {
            debug!("Dropping candidate which is not an existing directory: {path:?}");
        }
        is_dir
    });
}
