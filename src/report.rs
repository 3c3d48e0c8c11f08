//! Report building: one pass over an opened container

use crate::error::{Result, SummaryError};
use crate::platform::Platform;
use crate::source::{AssetContainer, AssetObject, AssetParser};
use crate::summary::{ENGINE, Summary};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, trace};
use unity_asset_core::{UnityValue, class_names};

/// Field of the MonoBehaviour that marks a valid bundle
pub const CONTENT_TYPE_FIELD: &str = "ContentType";

/// Builds summaries using an [`AssetParser`]
pub struct ReportBuilder<P> {
    parser: P,
}

impl<P: AssetParser> ReportBuilder<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Open `path` and summarize it
    pub fn build<T: AsRef<Path>>(&self, path: T) -> Result<Summary> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SummaryError::NotFound(path.to_path_buf()));
        }

        let container = self.parser.open(path)?.ok_or_else(|| {
            SummaryError::invalid_format(format!(
                "{} is not a recognized asset file",
                path.display()
            ))
        })?;
        summarize(&container)
    }
}

/// Scan every object once and assemble the summary
pub fn summarize<C: AssetContainer>(container: &C) -> Result<Summary> {
    let mut stats: IndexMap<String, usize> = IndexMap::new();
    let mut platform_tag: Option<String> = None;
    let mut content_type: Option<String> = None;

    for object in container.objects() {
        let type_name = object.type_name();
        trace!(type_name, "object");

        if let Some(tag) = object.try_get_platform() {
            platform_tag = Some(tag.to_string());
        }
        *stats.entry(type_name.to_string()).or_insert(0) += 1;

        if type_name == class_names::MONO_BEHAVIOUR {
            if let Some(value) = object.try_get_field(CONTENT_TYPE_FIELD)? {
                debug!(%value, "found content type");
                content_type = Some(render_content_type(value));
            }
        }
    }

    let content_type = content_type.ok_or_else(|| {
        SummaryError::invalid_format(format!(
            "no MonoBehaviour in {} has a {} field",
            container.name(),
            CONTENT_TYPE_FIELD
        ))
    })?;
    let platform = match platform_tag {
        Some(tag) => Platform::from_tag(&tag)?,
        None => return Err(SummaryError::unknown_platform("no platform recorded")),
    };

    debug!(types = stats.len(), %platform, "summary complete");
    Ok(Summary {
        content_type,
        platform,
        name: container.name().to_string(),
        engine: ENGINE.to_string(),
        engine_version: container.engine_version().to_string(),
        stats,
    })
}

fn render_content_type(value: UnityValue) -> String {
    match value {
        UnityValue::String(text) => text,
        other => other.to_string(),
    }
}
