use std::{
    collections::BTreeSet,
    fmt::{self, Debug, Formatter},
    path::PathBuf,
};

/// Name of the icon file written into every instance
pub const ICON_FILE_NAME: &str = "server-icon.png";

/// Folder inside an instance root which holds the actual game data
pub const DATA_FOLDER_NAME: &str = ".minecraft";

/// Newer Prism Launcher instances name their data folder without the leading dot
pub const DATA_FOLDER_NAME_PRISM: &str = "minecraft";

/// File whose presence marks a directory as a MultiMC / Prism Launcher instance root
pub const MARKER_FILE_NAME: &str = "instance.cfg";

/// Title used for every dialog
pub const DIALOG_TITLE: &str = "ServerIconFix";

/// Working set of discovered instance data folders, keyed on absolute path.
///
/// Ordered so that listings are sorted and "first candidate" picks are deterministic.
pub type InstancePaths = BTreeSet<PathBuf>;

/// Result of a full run, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Discovery came up empty, nothing was asked or written
    NothingFound,
    /// The user declined the confirmation, nothing was written
    Declined,
    /// The icon was written into this many instances
    Installed(usize),
}

/// The sequential fallback stages of instance discovery
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStage {
    JultiProfiles,
    SiblingInstances,
    LauncherSweep,
    ManualSelection,
}
impl Debug for DiscoveryStage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DiscoveryStage::JultiProfiles => "Julti profiles",
                DiscoveryStage::SiblingInstances => "Sibling instances",
                DiscoveryStage::LauncherSweep => "Launcher sweep",
                DiscoveryStage::ManualSelection => "Manual selection",
            }
        )
    }
}
