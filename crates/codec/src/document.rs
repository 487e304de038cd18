use frontmatter_schema::Record;
use serde_json::Value;

use crate::error::{CodecError, Result};

/// A markdown document split into its metadata block and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: Record,
    pub body: String,
}

/// Split raw document text into frontmatter and body.
///
/// The metadata block is a `---` fenced YAML mapping at the very start of the
/// document (an optional UTF-8 BOM is tolerated), closed by `---` or `...`.
/// A document without an opening fence parses to empty metadata and an
/// untouched body.
pub fn parse(raw: &str) -> Result<Document> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(first_end) = text.find('\n') else {
        return if text.trim_end() == "---" {
            Err(CodecError::Unterminated)
        } else {
            Ok(Document {
                metadata: Record::new(),
                body: raw.to_string(),
            })
        };
    };

    if text[..first_end].trim_end() != "---" {
        return Ok(Document {
            metadata: Record::new(),
            body: raw.to_string(),
        });
    }

    let yaml_start = first_end + 1;
    let mut offset = yaml_start;

    while offset <= text.len() {
        let (line, next_offset) = match text[offset..].find('\n') {
            Some(i) => (&text[offset..offset + i], offset + i + 1),
            None => (&text[offset..], text.len() + 1),
        };

        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let metadata = parse_yaml_block(&text[yaml_start..offset])?;
            let body = if next_offset > text.len() {
                ""
            } else {
                &text[next_offset..]
            };
            return Ok(Document {
                metadata,
                body: body.to_string(),
            });
        }

        if next_offset > text.len() {
            break;
        }
        offset = next_offset;
    }

    Err(CodecError::Unterminated)
}

fn parse_yaml_block(yaml: &str) -> Result<Record> {
    if yaml.trim().is_empty() {
        return Ok(Record::new());
    }

    let value: Value = serde_yaml::from_str(yaml)?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Record::new()),
        _ => Err(CodecError::NotAMapping),
    }
}

/// Render metadata and body back into document text.
///
/// The body is written verbatim after the closing fence, so
/// `serialize(parse(raw))` reproduces `raw` for already-valid input. Key
/// order of the metadata map is preserved in the emitted YAML.
pub fn serialize(body: &str, metadata: &Record) -> Result<String> {
    if metadata.is_empty() {
        return Ok(body.to_string());
    }

    let yaml = serde_yaml::to_string(&Value::Object(metadata.clone()))?;
    Ok(format!("---\n{yaml}---\n{body}"))
}

/// Canonical write-back form: trailing whitespace collapsed to a single
/// final newline.
pub fn canonicalize(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{trimmed}\n")
}
