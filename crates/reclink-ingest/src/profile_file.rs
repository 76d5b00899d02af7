//! Mapping profile loading.

use std::path::Path;

use tracing::{info, warn};

use reclink_map::MappingProfile;

use crate::error::{IngestError, Result};

/// Loads a mapping profile from a JSON file.
///
/// A missing file is not an error: source data is expected to work with
/// heuristics alone, so this logs a warning and returns an empty profile.
/// A file that exists but fails to parse is an error, since a half-applied
/// profile would silently change match results.
pub fn load_mapping_profile(path: &Path) -> Result<MappingProfile> {
    if !path.exists() {
        warn!(path = %path.display(), "mapping profile not found, using heuristics only");
        return Ok(MappingProfile::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::ProfileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let profile: MappingProfile =
        serde_json::from_str(&text).map_err(|e| IngestError::ProfileParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!(
        path = %path.display(),
        source_count = profile.source_count(),
        "mapping profile loaded"
    );
    Ok(profile)
}
