/// Rowscope Decoder Boundary
///
/// Container decoding happens entirely outside the store: a decoder reads
/// the raw file bytes once and hands over the decoded records plus file
/// metadata. The store and filter never touch bytes.
///
/// The bundled `JsonDecoder` covers JSON array and newline-delimited JSON
/// payloads so the server and demos work out of the box; decoders for
/// binary container formats plug in through the same trait.

use crate::value::Value;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One schema field as reported to the presenter.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_name: String,
}

/// Side metadata decoded alongside the records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileMeta {
    /// Field descriptors in schema order.
    pub schema: Vec<FieldDescriptor>,
    /// Compression codec detected in the container, if any.
    pub codec: Option<String>,
    /// Record count declared by the container, if any.
    pub declared_count: Option<u64>,
    /// Raw file size in bytes.
    pub byte_size: u64,
}

/// A fully decoded file: metadata plus the ordered record sequence.
#[derive(Debug)]
pub struct DecodedFile {
    pub meta: FileMeta,
    pub records: Vec<Value>,
}

/// A decoder turns raw container bytes into records and metadata.
pub trait Decoder {
    /// Short format name for logs and summaries.
    fn format_name(&self) -> &str;

    fn decode(&self, bytes: &[u8]) -> Result<DecodedFile, String>;
}

/// Decoder for JSON payloads: either a top-level array of records or one
/// JSON object per line (NDJSON).
#[derive(Debug, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        JsonDecoder
    }
}

impl Decoder for JsonDecoder {
    fn format_name(&self) -> &str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedFile, String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| format!("File is not valid UTF-8: {}", e))?;

        let records = if text.trim_start().starts_with('[') {
            let parsed: JsonValue = serde_json::from_str(text)
                .map_err(|e| format!("Invalid JSON: {}", e))?;
            match parsed {
                JsonValue::Array(items) => {
                    items.into_iter().map(Value::from_json).collect()
                }
                _ => return Err("Expected a top-level JSON array".to_string()),
            }
        } else {
            let mut records = Vec::new();
            for (lineno, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let parsed: JsonValue = serde_json::from_str(line)
                    .map_err(|e| format!("Invalid JSON on line {}: {}", lineno + 1, e))?;
                records.push(Value::from_json(parsed));
            }
            records
        };

        let meta = FileMeta {
            schema: infer_schema(&records),
            codec: None,
            declared_count: Some(records.len() as u64),
            byte_size: bytes.len() as u64,
        };

        Ok(DecodedFile { meta, records })
    }
}

/// Derive the schema descriptor from the first object-shaped record.
///
/// JSON carries no separate schema block, so the first record's field order
/// stands in for it.
fn infer_schema(records: &[Value]) -> Vec<FieldDescriptor> {
    match records.first() {
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(name, value)| FieldDescriptor {
                name: name.clone(),
                type_name: value.type_name().to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_array() {
        let decoder = JsonDecoder::new();
        let bytes = br#"[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]"#;

        let decoded = decoder.decode(bytes).unwrap();
        assert_eq!(decoded.records.len(), 2);
        assert_eq!(
            decoded.records[0].get("name").unwrap().as_str(),
            Some("Alice")
        );
        assert_eq!(decoded.meta.declared_count, Some(2));
        assert_eq!(decoded.meta.byte_size, bytes.len() as u64);
    }

    #[test]
    fn test_decode_ndjson() {
        let decoder = JsonDecoder::new();
        let bytes = b"{\"id\": 1}\n\n{\"id\": 2}\n{\"id\": 3}\n";

        let decoded = decoder.decode(bytes).unwrap();
        assert_eq!(decoded.records.len(), 3);
        assert_eq!(decoded.records[2].get("id").unwrap().as_i64(), Some(3));
    }

    #[test]
    fn test_schema_inference_keeps_field_order() {
        let decoder = JsonDecoder::new();
        let bytes = br#"[{"zulu": 1, "alpha": "x", "mid": 2.5}]"#;

        let decoded = decoder.decode(bytes).unwrap();
        let names: Vec<&str> = decoded
            .meta
            .schema
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["zulu", "alpha", "mid"]);
        assert_eq!(decoded.meta.schema[0].type_name, "int");
        assert_eq!(decoded.meta.schema[1].type_name, "string");
        assert_eq!(decoded.meta.schema[2].type_name, "float");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let decoder = JsonDecoder::new();
        assert!(decoder.decode(&[0xff, 0xfe, 0x80]).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let decoder = JsonDecoder::new();
        let err = decoder.decode(b"{not json").unwrap_err();
        assert!(err.contains("line 1"));

        assert!(decoder.decode(b"[{\"id\": 1},").is_err());
    }

    #[test]
    fn test_decode_rejects_non_array_top_level() {
        let decoder = JsonDecoder::new();
        // Starts with '[' after whitespace only when it is an array; a lone
        // scalar line still decodes as one record through the NDJSON path.
        let decoded = decoder.decode(b"42").unwrap();
        assert_eq!(decoded.records, vec![Value::Int(42)]);
        assert!(decoded.meta.schema.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let decoder = JsonDecoder::new();
        let decoded = decoder.decode(b"").unwrap();
        assert!(decoded.records.is_empty());
        assert_eq!(decoded.meta.declared_count, Some(0));
    }
}
