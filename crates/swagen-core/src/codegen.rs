//! Generation pipeline: document in, Rust modules and interchange data out
//!
//! No I/O happens here; the binary decides where the output goes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::document::Document;
use crate::render::{HEADER, RustWriter};
use crate::schema::Shape;
use crate::sink::{Declaration, Tee};
use crate::stubs::{OperationStub, collect_operations, render_trait};
use crate::synth::synthesize_definitions;

/// Everything synthesized from one document, in the form external emitters
/// consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Interchange {
    /// `swagger` (or `openapi`) version of the source document
    pub version: String,
    /// Top-level definitions with their classification, in document order
    pub definitions: Vec<DefinitionSummary>,
    /// Declaration stream: definitions first, then inline operation schemas
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub operations: Vec<OperationStub>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DefinitionSummary {
    pub name: String,
    pub shape: Shape,
}

/// Output of [`generate`].
#[derive(Debug, Clone)]
pub struct Generated {
    /// Rust module with one item per synthesized type
    pub types: String,
    /// Rust module holding the operations trait, when stubs are enabled
    pub api: Option<String>,
    pub interchange: Interchange,
}

impl Generated {
    /// True when nothing at all was synthesized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interchange.declarations.is_empty() && self.interchange.operations.is_empty()
    }
}

/// Synthesize the definitions and, unless disabled, the operation stubs.
#[must_use]
pub fn generate(document: &Document, config: &Config) -> Generated {
    let mut sink = Tee(Vec::<Declaration>::new(), RustWriter::new(&config.opaque_type));

    let definitions = synthesize_definitions(document, &mut sink)
        .into_iter()
        .map(|(name, shape)| DefinitionSummary { name, shape })
        .collect();

    let operations = if config.stubs {
        collect_operations(document, &mut sink)
    } else {
        Vec::new()
    };

    let api = config.stubs.then(|| {
        let mut out = String::from(HEADER);
        if let Some(types_path) = &config.types_path {
            out.push_str(&format!("\nuse {types_path}::*;\n"));
        }
        out.push('\n');
        out.push_str(&render_trait(&operations, &config.trait_name, &config.opaque_type));
        out
    });

    let Tee(declarations, writer) = sink;
    tracing::info!(
        definitions = document.definitions().len(),
        declarations = declarations.len(),
        operations = operations.len(),
        "generated"
    );

    Generated {
        types: writer.finish(),
        api,
        interchange: Interchange {
            version: document.version().to_string(),
            definitions,
            declarations,
            operations,
        },
    }
}

/// Generate JSON Schema for the interchange format.
///
/// # Errors
///
/// Returns error if the schema cannot be serialized
pub fn generate_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(Interchange);
    serde_json::to_string_pretty(&schema)
}
