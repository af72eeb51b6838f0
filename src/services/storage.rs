use crate::domain::models::Draft;
use anyhow::Context;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Reads a draft from a file, or from stdin when `source` is `-`.
pub fn read_draft(source: &str) -> anyhow::Result<Draft> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading draft from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading draft {}", source))?
    };
    let draft: Draft =
        serde_json::from_str(&raw).with_context(|| format!("parsing draft {}", source))?;
    tracing::debug!(
        source,
        values = draft.values.len(),
        confirm = draft.confirm,
        "draft loaded"
    );
    Ok(draft)
}

pub fn write_json<T: Serialize>(path: &Path, data: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(data)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}
