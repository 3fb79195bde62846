//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Request handlers never read environment variables themselves.

use crate::constants::MAX_THREAD_DEPTH;
use crate::render::RenderOptions;
use crate::{ThreadError, ThreadResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    thread_data_path: PathBuf,
    render_options: RenderOptions,
    max_depth: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ThreadError::InvalidInput` if `thread_data_path` is empty or `max_depth` is 0.
    pub fn new(
        thread_data_path: PathBuf,
        render_options: RenderOptions,
        max_depth: usize,
    ) -> ThreadResult<Self> {
        if thread_data_path.as_os_str().is_empty() {
            return Err(ThreadError::InvalidInput(
                "thread_data_path cannot be empty".into(),
            ));
        }
        if max_depth == 0 {
            return Err(ThreadError::InvalidInput(
                "max_depth must be at least 1".into(),
            ));
        }

        Ok(Self {
            thread_data_path,
            render_options,
            max_depth,
        })
    }

    pub fn thread_data_path(&self) -> &Path {
        &self.thread_data_path
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Parse the connector flag from an optional string value.
///
/// `None` or blank means the default (connectors shown).
pub fn show_connector_from_env_value(value: Option<String>) -> ThreadResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(RenderOptions::default().show_connector),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ThreadError::InvalidInput(format!(
            "THREADVIEW_SHOW_CONNECTOR must be a boolean, got {:?}",
            other
        ))),
    }
}

/// Parse the maximum thread depth from an optional string value.
///
/// `None` or blank means [`MAX_THREAD_DEPTH`].
pub fn max_depth_from_env_value(value: Option<String>) -> ThreadResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(MAX_THREAD_DEPTH);
    };

    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ThreadError::InvalidInput(format!(
            "THREADVIEW_MAX_DEPTH must be a positive integer, got {:?}",
            value
        ))),
    }
}
