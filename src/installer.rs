//! Confirms the discovered instances with the user and writes the icon into each of them.

use std::{
    fs::write,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::{error, info, trace, warn};

use crate::{
    data::{ICON_FILE_NAME, InstancePaths, RunOutcome},
    error::ServerIconError,
    prompt::Prompter,
};

/// Maximum number of paths listed in the confirmation message
pub const LISTING_LIMIT: usize = 20;

/// Builds the confirmation question, listing up to [`LISTING_LIMIT`] sorted instance paths
pub fn confirmation_message(instance_paths: &InstancePaths) -> String {
    let mut message = format!("Add {ICON_FILE_NAME} to these instances?");

    let listing = instance_paths
        .iter()
        .take(LISTING_LIMIT)
        .map(|path| path.display())
        .join("\n");
    if !listing.is_empty() {
        message.push('\n');
        message.push_str(&listing);
    }

    if instance_paths.len() > LISTING_LIMIT {
        message.push_str(&format!(
            "\nand {} others...",
            instance_paths.len() - LISTING_LIMIT
        ));
    }

    message
}

fn write_icon(path_instance: &Path, icon: &[u8]) -> Result<PathBuf, ServerIconError> {
    let path_icon = path_instance.join(ICON_FILE_NAME);
    write(&path_icon, icon)?;

    Ok(path_icon)
}

/// Writes the icon into every instance which is still a directory, overwriting any existing
/// icon, and returns how many succeeded. Failures are logged and skipped.
#[tracing::instrument(level = "trace", skip(icon))]
pub fn copy_icon_to_instances(instance_paths: &InstancePaths, icon: &[u8]) -> usize {
    let (copied, failed): (Vec<_>, Vec<_>) = instance_paths
        .iter()
        .filter(|path_instance| path_instance.is_dir())
        .map(|path_instance| (path_instance, write_icon(path_instance, icon)))
        .partition(|(_, result)| result.is_ok());

    for (path_instance, result) in &copied {
        trace!("Copied icon into {path_instance:?}: {result:?}");
    }
    for (path_instance, result) in failed {
        if let Err(e) = result {
            error!("Failed to copy to {path_instance:?}: {e}");
        }
    }

    copied.len()
}

/// Asks the user to confirm the found instances, then installs the icon into them and reports
/// how many it was added to
#[tracing::instrument(level = "debug", skip_all)]
pub fn install_icon(instance_paths: &InstancePaths, icon: &[u8], prompter: &dyn Prompter) -> RunOutcome {
    if instance_paths.is_empty() {
        warn!("No instances found, nothing to install");
        return RunOutcome::NothingFound;
    }

    if !prompter.confirm(&confirmation_message(instance_paths)) {
        info!("User declined installing the icon");
        return RunOutcome::Declined;
    }

    let installed = copy_icon_to_instances(instance_paths, icon);
    info!(
        "Installed icon into {installed} of {} instances",
        instance_paths.len()
    );
    prompter.notify(&format!(
        "{ICON_FILE_NAME} has been added to {installed} instances."
    ));

    RunOutcome::Installed(installed)
}
