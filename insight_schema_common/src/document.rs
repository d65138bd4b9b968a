//! The schema document served by `cognitod`.

use serde_json::Value;
use std::{fs, io};

use crate::prelude::*;

/// What we show when a schema has no usable `version`.
const UNKNOWN_VERSION: &str = "unknown";

/// A JSON Schema document, as returned by `GET /insights/schema`.
///
/// We treat the document as opaque JSON. Object keys keep the order in which
/// the service sent them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaDocument(Value);

impl SchemaDocument {
    /// Parse a schema document from raw response bytes. Numbers keep their
    /// exact text, however large or precise.
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<SchemaDocument> {
        serde_json::from_slice(body)
    }

    /// Parse a schema document from a string.
    pub fn from_json_str(body: &str) -> serde_json::Result<SchemaDocument> {
        Self::from_json_slice(body.as_bytes())
    }

    /// The underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The top-level `version` field, if this is an object which has one.
    pub fn version(&self) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get("version"))
    }

    /// A human-readable version for diagnostics. Strings are shown without
    /// quotes, other values as compact JSON.
    pub fn version_label(&self) -> String {
        match self.version() {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_VERSION.to_owned(),
        }
    }

    /// Write as JSON indented with two spaces, with no trailing newline.
    pub fn write_pretty<W: io::Write>(&self, wtr: W) -> io::Result<()> {
        serde_json::to_writer_pretty(wtr, self)?;
        Ok(())
    }

    /// Write the pretty-printed document to `path`, replacing anything
    /// already there. Missing parent directories are created.
    #[instrument(level = "trace", skip_all, fields(path = %path.display()))]
    pub fn write_to_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut f = File::create(path)?;
        self.write_pretty(&mut f)?;
        f.flush()?;
        debug!("wrote schema to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
impl SchemaDocument {
    fn into_value(self) -> Value {
        self.0
    }

    fn to_pretty_json(&self) -> String {
        let mut out = vec![];
        self.write_pretty(&mut out).expect("could not render JSON");
        String::from_utf8(out).expect("JSON was not UTF-8")
    }
}

#[cfg(test)]
impl From<Value> for SchemaDocument {
    fn from(value: Value) -> Self {
        SchemaDocument(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn version_label_shows_strings_bare() {
        let doc = SchemaDocument::from(json!({ "version": "1.2", "type": "object" }));
        assert_eq!(doc.version(), Some(&json!("1.2")));
        assert_eq!(doc.version_label(), "1.2");
        assert_eq!(doc.into_value(), json!({ "version": "1.2", "type": "object" }));
    }

    #[test]
    fn version_label_shows_other_values_as_json() {
        let doc = SchemaDocument::from(json!({ "version": 3 }));
        assert_eq!(doc.version_label(), "3");
        let doc = SchemaDocument::from(json!({ "version": { "major": 1 } }));
        assert_eq!(doc.version_label(), r#"{"major":1}"#);
    }

    #[test]
    fn version_label_falls_back_to_unknown() {
        let doc = SchemaDocument::from(json!({ "type": "object" }));
        assert_eq!(doc.version(), None);
        assert_eq!(doc.version_label(), "unknown");
        let doc = SchemaDocument::from(json!(["version"]));
        assert_eq!(doc.version_label(), "unknown");
    }

    #[test]
    fn pretty_json_uses_two_spaces_and_keeps_key_order() {
        let doc = SchemaDocument::from_json_str(r#"{"version":"1.2","type":"object"}"#)
            .expect("could not parse");
        assert_eq!(
            doc.to_pretty_json(),
            "{\n  \"version\": \"1.2\",\n  \"type\": \"object\"\n}",
        );
    }

    #[test]
    fn numbers_keep_their_exact_text() {
        let body = r#"{"maximum": 123456789012345678901234567890, "minimum": 2.2250738585072011e-308, "step": 1.0}"#;
        let doc = SchemaDocument::from_json_str(body).expect("could not parse");
        assert_eq!(
            doc.to_pretty_json(),
            concat!(
                "{\n",
                "  \"maximum\": 123456789012345678901234567890,\n",
                "  \"minimum\": 2.2250738585072011e-308,\n",
                "  \"step\": 1.0\n",
                "}",
            ),
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(SchemaDocument::from_json_slice(b"\"\xff\"").is_err());
        assert!(SchemaDocument::from_json_str("not json").is_err());
    }

    #[test]
    fn write_to_path_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let path = dir.path().join("datasets/schema/insight.schema.json");

        let first = SchemaDocument::from(json!({ "version": "1", "extra": [1, 2, 3] }));
        first.write_to_path(&path).expect("could not write");
        let second = SchemaDocument::from(json!({ "version": "2" }));
        second.write_to_path(&path).expect("could not overwrite");

        let written = fs::read_to_string(&path).expect("could not read back");
        assert_eq!(written, second.to_pretty_json());
        assert_eq!(SchemaDocument::from_json_str(&written).unwrap(), second);
    }
}
