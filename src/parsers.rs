use nom::{IResult, Parser, bytes::complete::tag, combinator::rest, sequence::preceded};
use serde::Deserialize;

/// Launcher config entry pointing at the instances folder
const INSTANCE_DIR_PREFIX: &str = "InstanceDir=";

/// Relevant part of a Julti profile file
#[derive(Debug, Deserialize)]
pub struct JultiProfile {
    #[serde(rename = "instancePaths")]
    pub instance_paths: Vec<String>,
}

/// Parses a Julti profile, failing if the `instancePaths` list is missing or malformed
pub fn parse_julti_profile(file_content: &str) -> Result<JultiProfile, serde_json::Error> {
    serde_json::from_str(file_content)
}

/// Matches a single `InstanceDir=<path>` line of a MultiMC / Prism Launcher `.cfg` file,
/// returning the path
pub fn parse_instance_dir_line(line: &str) -> IResult<&str, &str> {
    preceded(tag(INSTANCE_DIR_PREFIX), rest)
        .parse(line.trim())
        .map(|(remaining, value)| (remaining, value.trim()))
}

/// All `InstanceDir` values found in the given config file's contents, ignoring any other lines
pub fn parse_instance_dirs(file_content: &str) -> Vec<String> {
    file_content
        .lines()
        .filter_map(|line| parse_instance_dir_line(line).ok())
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
        .collect()
}
