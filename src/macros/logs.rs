macro_rules! debug_path {
    ($description: expr, $path: ident) => {
        tracing::debug!(
            "{STAGE:?} - {} exists at {:?}: {}",
            $description,
            $path,
            $path.exists()
        );
    };
}
pub(crate) use debug_path;

macro_rules! debug_found_instance {
    ($path: expr) => {
        tracing::trace!("{STAGE:?} - Found instance data folder at {:?}", $path);
    };
}
pub(crate) use debug_found_instance;

macro_rules! warn_no_instances {
    () => {
        tracing::warn!("{STAGE:?} - No instances found");
    };
}
pub(crate) use warn_no_instances;
