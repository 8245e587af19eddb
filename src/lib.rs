//! A small tool for adding a `server-icon.png` to every Minecraft instance managed by MultiMC or
//! Prism Launcher.
//!
//! # Description
//!
//! Instances are located with a few best-effort heuristics, cheapest first:
//!
//! - Instance paths recorded in [Julti](https://github.com/DuncanRuns/Julti) profiles
//!   (`~/.Julti/profiles/*`), plus every sibling instance of the first one that turns out to live
//!   inside a launcher's `instances` folder
//! - A sweep of common install locations for `multimc.exe` / `prismlauncher.exe`, following
//!   their `instances` folder and any `InstanceDir=` entry in the launcher's config file
//! - Asking the user to pick a folder
//!
//! After the user confirms the list of found instances, the bundled icon is written into the
//! `.minecraft` folder of each of them.
//!
//! # Usage
//!
//! ```no_run
//! use server_icon_fix::{config::SearchPaths, prompt::DialogPrompter, run};
//!
//! let icon: &[u8] = &[];
//! let search_paths = SearchPaths::detect().expect("home directory");
//! let outcome = run(&search_paths, &DialogPrompter, icon);
//! println!("{outcome:?}");
//! ```

pub mod config;
pub mod data;
pub mod discovery;
pub mod error;
pub mod installer;
mod macros;
mod parsers;
pub mod prompt;
mod utils;

#[cfg(test)]
mod test_utils;

use config::SearchPaths;
use data::RunOutcome;
use prompt::Prompter;

/// Primary entry point into the crate - discover instances, then confirm and install the icon
#[tracing::instrument(level = "debug", skip_all)]
pub fn run(search_paths: &SearchPaths, prompter: &dyn Prompter, icon: &[u8]) -> RunOutcome {
    let instance_paths = discovery::discover(search_paths, prompter);
    installer::install_icon(&instance_paths, icon, prompter)
}
