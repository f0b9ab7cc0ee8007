//! Rust source emitter for the declaration stream
//!
//! Pure template filling: every decision about names and types was already
//! made during synthesis.

use std::collections::HashSet;

use crate::sink::{Declaration, DeclarationSink, Field};
use crate::types::{DEFAULT_OPAQUE_TYPE, TypeRef};

/// First lines of every generated module. Names keep their document casing.
pub const HEADER: &str =
    "// Generated by swagen. Do not edit.\n\n#![allow(non_camel_case_types, non_snake_case)]\n";

const INDENT: &str = "    ";
const DERIVES: &str = "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]";

/// An aggregate that has been opened but not yet closed.
#[derive(Debug)]
struct Frame {
    name: String,
    docs: Vec<String>,
    body: String,
}

/// Renders declarations as `serde`-annotated Rust items.
///
/// Nested aggregates close before their parent, so each struct is written
/// out at its `EndStruct` and nested types land ahead of the type that uses
/// them. Comments attach as doc comments to the next item.
///
/// A field naming a type that is not complete yet (still open, or written
/// later) is boxed. Every reference cycle contains such an edge, so
/// recursive models get a finite size.
#[derive(Debug)]
pub struct RustWriter {
    opaque: String,
    items: Vec<String>,
    frames: Vec<Frame>,
    pending_docs: Vec<String>,
    complete: HashSet<String>,
    structs: usize,
}

impl Default for RustWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OPAQUE_TYPE)
    }
}

impl RustWriter {
    #[must_use]
    pub fn new(opaque: &str) -> Self {
        Self {
            opaque: opaque.to_string(),
            items: Vec::new(),
            frames: Vec::new(),
            pending_docs: Vec::new(),
            complete: HashSet::new(),
            structs: 0,
        }
    }

    /// Number of top-level items written so far.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Close any aggregate left open and return the module source.
    #[must_use]
    pub fn finish(mut self) -> String {
        while let Some(frame) = self.frames.pop() {
            tracing::warn!(name = %frame.name, "closing unterminated struct");
            self.close(frame);
        }
        let mut out = String::from(HEADER);
        if self.structs > 0 {
            out.push_str("\nuse serde::{Deserialize, Serialize};\n");
        }
        for item in &self.items {
            out.push('\n');
            out.push_str(item);
        }
        out
    }

    fn take_docs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_docs)
    }

    fn close(&mut self, frame: Frame) {
        let mut item = doc_lines(&frame.docs, "");
        item.push_str(DERIVES);
        item.push('\n');
        item.push_str(&format!("pub struct {} {{\n{}}}\n", frame.name, frame.body));
        self.items.push(item);
        self.complete.insert(frame.name);
        self.structs += 1;
    }

    fn field(&mut self, field: &Field) {
        let docs = self.take_docs();
        let Some(frame) = self.frames.last_mut() else {
            tracing::warn!(field = %field.name, "field outside of any struct");
            return;
        };
        let ty = match &field.ty {
            TypeRef::Named(name) if !self.complete.contains(name) => format!("Box<{name}>"),
            ty => ty.to_rust(&self.opaque),
        };
        frame.body.push_str(&doc_lines(&docs, INDENT));

        let mut serde_args = Vec::new();
        if field.name != field.json_name {
            serde_args.push(format!("rename = {:?}", field.json_name));
        }
        if !field.required {
            serde_args.push("default".to_string());
            serde_args.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        if !serde_args.is_empty() {
            frame
                .body
                .push_str(&format!("{INDENT}#[serde({})]\n", serde_args.join(", ")));
        }

        let ty = if field.required { ty } else { format!("Option<{ty}>") };
        frame
            .body
            .push_str(&format!("{INDENT}pub {}: {ty},\n", field.name));
    }
}

impl DeclarationSink for RustWriter {
    fn emit(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Comment { text, .. } => self.pending_docs.push(text),
            Declaration::BeginStruct { name, .. } => {
                let docs = self.take_docs();
                self.frames.push(Frame {
                    name,
                    docs,
                    body: String::new(),
                });
            }
            Declaration::Field(field) => self.field(&field),
            Declaration::EndStruct { name, .. } => match self.frames.pop() {
                Some(frame) => {
                    if frame.name != name {
                        tracing::warn!(open = %frame.name, close = %name, "mismatched struct end");
                    }
                    self.close(frame);
                }
                None => tracing::warn!(%name, "struct end without a matching begin"),
            },
            Declaration::Alias { name, ty } => {
                let mut item = doc_lines(&self.take_docs(), "");
                item.push_str(&format!("pub type {name} = {};\n", ty.to_rust(&self.opaque)));
                self.items.push(item);
                self.complete.insert(name);
            }
        }
    }
}

fn doc_lines(docs: &[String], indent: &str) -> String {
    let mut out = String::new();
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!("{indent}///\n"));
        }
        for line in doc.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                out.push_str(&format!("{indent}///\n"));
            } else {
                out.push_str(&format!("{indent}/// {line}\n"));
            }
        }
    }
    out
}
