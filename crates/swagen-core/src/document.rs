//! The loaded Swagger document and its top-level views
//!
//! [`Document`] owns the parsed tree. Every other view borrows from it, so the
//! borrow checker keeps the tree alive for as long as any view exists.

use std::path::Path;

use serde_json::Value;

use crate::operation::PathItem;
use crate::resolve;
use crate::schema::{Properties, Property};
use crate::view::{ListView, MapView, Node, object_view};

/// A parsed Swagger 2.0 document. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Load a document from a JSON or YAML file.
    ///
    /// Format detection: extension first (`.yaml`/`.yml`/`.json`), then
    /// content sniffing (leading `{` → JSON, otherwise YAML).
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, does not parse, or its root
    /// is not a JSON object.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DocumentError::Io(format!("{}: {e}", path.display())))?;
        let root = parse_document(path, &content)?;
        let doc = Self::from_value(root)?;
        tracing::info!(
            path = %path.display(),
            version = doc.version(),
            paths = doc.paths().len(),
            definitions = doc.definitions().len(),
            "loaded document"
        );
        Ok(doc)
    }

    /// # Errors
    ///
    /// Returns error on invalid JSON or a non-object root.
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        let root = serde_json::from_str(content)
            .map_err(|e| DocumentError::Parse(format!("Invalid JSON: {e}")))?;
        Self::from_value(root)
    }

    /// # Errors
    ///
    /// Returns error on invalid YAML or a non-object root.
    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        let root = serde_yml::from_str(content)
            .map_err(|e| DocumentError::Parse(format!("Invalid YAML: {e}")))?;
        Self::from_value(root)
    }

    /// # Errors
    ///
    /// Returns error if `root` is not a JSON object.
    pub fn from_value(root: Value) -> Result<Self, DocumentError> {
        if !root.is_object() {
            return Err(DocumentError::NotAnObject(json_kind(&root)));
        }
        Ok(Self { root })
    }

    /// The document every consumer sees after a failed load.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the document holds a loaded object tree.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.root.is_object()
    }

    fn node(&self) -> Node<'_> {
        Node::new(Some(&self.root))
    }

    /// Raw `openapi` version field.
    #[must_use]
    pub fn openapi(&self) -> &str {
        self.node().str_field("openapi")
    }

    /// Raw `swagger` version field.
    #[must_use]
    pub fn swagger(&self) -> &str {
        self.node().str_field("swagger")
    }

    /// `swagger` when present, otherwise `openapi`.
    #[must_use]
    pub fn version(&self) -> &str {
        match self.swagger() {
            "" => self.openapi(),
            v => v,
        }
    }

    #[must_use]
    pub fn info(&self) -> Info<'_> {
        self.node().child("info")
    }

    #[must_use]
    pub fn host(&self) -> &str {
        self.node().str_field("host")
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        self.node().str_field("basePath")
    }

    #[must_use]
    pub fn servers(&self) -> ListView<'_, Server<'_>> {
        self.node().list("servers")
    }

    #[must_use]
    pub fn paths(&self) -> MapView<'_, PathItem<'_>> {
        self.node().map("paths")
    }

    #[must_use]
    pub fn definitions(&self) -> Properties<'_> {
        self.node().map("definitions")
    }

    /// Look up a `#/definitions/` reference (or bare name).
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Property<'_> {
        resolve::resolve(self.definitions(), reference)
    }
}

fn parse_document(path: &Path, content: &str) -> Result<Value, DocumentError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "yaml" | "yml" => serde_yml::from_str(content)
            .map_err(|e| DocumentError::Parse(format!("Invalid YAML: {e}"))),
        "json" => serde_json::from_str(content)
            .map_err(|e| DocumentError::Parse(format!("Invalid JSON: {e}"))),
        _ => {
            if content.trim_start().starts_with('{') {
                serde_json::from_str(content)
                    .map_err(|e| DocumentError::Parse(format!("Invalid JSON: {e}")))
            } else {
                serde_yml::from_str(content)
                    .map_err(|e| DocumentError::Parse(format!("Invalid YAML: {e}")))
            }
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

object_view! {
    /// `info` block.
    Info
}

impl<'a> Info<'a> {
    #[must_use]
    pub fn title(&self) -> &'a str {
        self.node.str_field("title")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn terms_of_service(&self) -> &'a str {
        self.node.str_field("termsOfService")
    }

    #[must_use]
    pub fn version(&self) -> &'a str {
        self.node.str_field("version")
    }
}

object_view! {
    /// An entry of `servers`.
    Server
}

impl<'a> Server<'a> {
    #[must_use]
    pub fn url(&self) -> &'a str {
        self.node.str_field("url")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn variables(&self) -> MapView<'a, ServerVariable<'a>> {
        self.node.map("variables")
    }
}

object_view! {
    /// A templated server URL variable.
    ServerVariable
}

impl<'a> ServerVariable<'a> {
    #[must_use]
    pub fn default_value(&self) -> &'a str {
        self.node.str_field("default")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Document root must be an object, found {0}")]
    NotAnObject(&'static str),
}
