//! The detect/update cycle.
//!
//! [`update`] reads the configuration from an existing marker (or starts
//! from defaults), regenerates the preamble and postamble, and splices them
//! around the untouched body. Running it on its own output changes nothing.

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::core::UmdError;
use crate::generator::create_preamble;
use crate::loaders::{ModuleSystem, Requirements};
use crate::markers::{find_config_payload, update_postamble, update_preamble};

/// Read the configuration embedded in `text`.
///
/// Text without a configuration marker yields the default configuration.
///
/// # Errors
///
/// Returns [`UmdError::MalformedMarker`] when a marker exists but its
/// payload is not valid JSON.
pub fn detect_config(text: &str) -> Result<Config, UmdError> {
    let Some(payload) = find_config_payload(text) else {
        debug!("No configuration marker, using defaults");
        return Ok(Config::new());
    };

    let raw: Value = serde_json::from_str(payload).map_err(|e| UmdError::MalformedMarker {
        payload: payload.to_string(),
        reason: e.to_string(),
    })?;

    let config = Config::from_json(&raw);
    debug!(name = %config.name, "Detected marker configuration");
    Ok(config)
}

/// Wrap `text` in freshly generated UMD code, replacing any previous wrapper.
///
/// # Errors
///
/// Returns [`UmdError::MalformedMarker`] when the existing marker cannot be
/// parsed. No partial output is produced in that case.
///
/// # Examples
///
/// ```rust
/// let wrapped = fid_umd::update("return 42;\n")?;
/// assert!(wrapped.starts_with("// fid-umd {\"name\":\"Unknown\"}\n"));
/// assert_eq!(fid_umd::update(&wrapped)?, wrapped);
/// # Ok::<(), fid_umd::core::UmdError>(())
/// ```
pub fn update(text: &str) -> Result<String, UmdError> {
    let config = detect_config(text)?;
    let requirements = Requirements::collect(&ModuleSystem::ORDER);
    let preamble = create_preamble(&config, &requirements);

    let updated = update_postamble(&update_preamble(text, &preamble));
    debug!(before = text.len(), after = updated.len(), "Updated UMD wrapper");
    Ok(updated)
}

/// [`update`] for input that may be absent; `None` is treated as empty text.
///
/// # Errors
///
/// Same as [`update`].
pub fn update_opt(text: Option<&str>) -> Result<String, UmdError> {
    update(text.unwrap_or_default())
}
