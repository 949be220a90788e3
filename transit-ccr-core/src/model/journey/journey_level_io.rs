//! reading journey-level templates and writing per-class journey-level artifacts.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::{JourneyLevel, JourneyLevelError};

pub const ASSIGNMENT_TYPE: &str = "EXTENDED_TRANSIT_ASSIGNMENT";

/// a journey-level document as read from a template or written for a class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JourneyLevelDocument {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<String>,
    pub journey_levels: Vec<JourneyLevel>,
}

impl JourneyLevelDocument {
    pub fn new(journey_levels: Vec<JourneyLevel>) -> Self {
        Self {
            assignment_type: Some(ASSIGNMENT_TYPE.to_string()),
            journey_levels,
        }
    }
}

/// `{spec_dir}/{period}_ALLPEN_journey_levels.ems`
pub fn template_path(spec_dir: &Path, time_period: &str) -> PathBuf {
    spec_dir.join(format!("{time_period}_ALLPEN_journey_levels.ems"))
}

/// `{spec_dir}/{period}_{class}_journey_levels.ems`
pub fn artifact_path(spec_dir: &Path, time_period: &str, class_name: &str) -> PathBuf {
    spec_dir.join(format!("{time_period}_{class_name}_journey_levels.ems"))
}

/// loads the walk-access template levels of a time period.
pub fn read_template(spec_dir: &Path, time_period: &str) -> Result<Vec<JourneyLevel>, JourneyLevelError> {
    let document = read_document(&template_path(spec_dir, time_period))?;
    Ok(document.journey_levels)
}

/// loads the levels previously written for a class.
pub fn read_journey_levels(
    spec_dir: &Path,
    time_period: &str,
    class_name: &str,
) -> Result<Vec<JourneyLevel>, JourneyLevelError> {
    let document = read_document(&artifact_path(spec_dir, time_period, class_name))?;
    Ok(document.journey_levels)
}

/// writes the levels of a class, returning the path written.
pub fn write_journey_levels(
    spec_dir: &Path,
    time_period: &str,
    class_name: &str,
    levels: &[JourneyLevel],
) -> Result<PathBuf, JourneyLevelError> {
    let path = artifact_path(spec_dir, time_period, class_name);
    let write_error = |message: String| JourneyLevelError::Write {
        path: path.clone(),
        message,
    };
    let file = File::create(&path).map_err(|e| write_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    let document = JourneyLevelDocument::new(levels.to_vec());
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|e| write_error(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| write_error(format!("failed to flush: {e}")))?;
    log::debug!(
        "wrote {} journey levels for class {} to {}",
        levels.len(),
        class_name,
        path.to_string_lossy()
    );
    Ok(path)
}

fn read_document(path: &Path) -> Result<JourneyLevelDocument, JourneyLevelError> {
    let file = File::open(path).map_err(|e| JourneyLevelError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| JourneyLevelError::Read {
        path: path.to_path_buf(),
        message: format!("invalid journey level document: {e}"),
    })
}
