//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerConfigDef};

pub const CONTROLLER_FILE: &str = "controller.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from already-read text.
pub fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Check the schema version of a parsed controller config.
pub fn check_schema(config: &ControllerConfigDef, file_name: &str) -> Result<(), ContentLoadError> {
    if config.schema_version != CONTROLLER_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                config.schema_version, CONTROLLER_SCHEMA_VERSION
            ),
        });
    }
    Ok(())
}

/// Load the controller configuration from `<base_path>/controller.ron`.
pub fn load_controller_config(base_path: &Path) -> Result<ControllerConfigDef, ContentLoadError> {
    let path = base_path.join(CONTROLLER_FILE);
    let config: ControllerConfigDef = load_single_file(&path)?;
    check_schema(&config, &path.display().to_string())?;
    Ok(config)
}
