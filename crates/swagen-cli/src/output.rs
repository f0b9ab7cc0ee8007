//! Generated file layout: `{output_dir}/{stem}_defs.rs`, `{stem}_api.rs`
//! and `{stem}_declarations.json`
//!
//! The stem is the document file name without its extension, so several
//! documents can share one output directory.

use std::path::{Path, PathBuf};

use swagen_core::Generated;
use swagen_core::naming::sanitize;

/// Where each generated artifact goes.
#[derive(Debug)]
pub struct Layout {
    pub defs: PathBuf,
    pub api: PathBuf,
    pub declarations: PathBuf,
}

impl Layout {
    pub fn new(output_dir: &Path, spec: &Path) -> Self {
        let stem = module_stem(spec);
        Self {
            defs: output_dir.join(format!("{stem}_defs.rs")),
            api: output_dir.join(format!("{stem}_api.rs")),
            declarations: output_dir.join(format!("{stem}_declarations.json")),
        }
    }
}

/// `"specs/pet-store.v2.yaml"` → `"pet_store_v2"`
fn module_stem(spec: &Path) -> String {
    let stem = spec
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    sanitize(stem)
}

/// Write every artifact of `generated`. Returns the paths written.
pub fn write_all(layout: &Layout, generated: &Generated) -> Result<Vec<PathBuf>, std::io::Error> {
    if let Some(dir) = layout.defs.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut written = Vec::new();

    std::fs::write(&layout.defs, &generated.types)?;
    written.push(layout.defs.clone());

    if let Some(api) = &generated.api {
        std::fs::write(&layout.api, api)?;
        written.push(layout.api.clone());
    }

    let declarations = serde_json::to_string_pretty(&generated.interchange)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(&layout.declarations, declarations)?;
    written.push(layout.declarations.clone());

    for path in &written {
        tracing::debug!(path = %path.display(), "wrote");
    }
    Ok(written)
}
