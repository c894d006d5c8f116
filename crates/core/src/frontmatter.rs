use serde_json::Value as JsonValue;
use thiserror::Error;

/// A document split into its YAML frontmatter and markdown body.
#[derive(Debug)]
pub struct FrontmatterSplit<'a> {
    /// Parsed frontmatter as a JSON value (always a JSON object).
    pub value: JsonValue,
    /// The markdown body following the frontmatter block.
    pub body: &'a str,
}

/// Errors emitted while parsing or extracting frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (e.g., missing terminating `---`).
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Splits YAML frontmatter off an input document.
///
/// A frontmatter block is a leading `---` fence (blank lines and a BOM may
/// precede it) closed by a matching `---` line. Documents without a block
/// yield an empty mapping and the whole input as body.
pub fn split_frontmatter(input: &str) -> Result<FrontmatterSplit<'_>, FrontmatterError> {
    match find_block(input)? {
        Some((block, body)) => Ok(FrontmatterSplit {
            value: parse_block(block)?,
            body,
        }),
        None => Ok(FrontmatterSplit {
            value: JsonValue::Object(Default::default()),
            body: input,
        }),
    }
}

fn parse_block(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match &yaml {
        serde_yaml::Value::Null => Ok(JsonValue::Object(Default::default())),
        serde_yaml::Value::Mapping(_) => {
            serde_json::to_value(&yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))
        }
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

/// Locates the fenced block. Returns the raw YAML text and the body slice
/// starting after the closing fence line.
fn find_block(input: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let without_bom = input.trim_start_matches('\u{feff}');

    let mut cursor = 0usize;
    loop {
        let Some((line, next)) = next_line(without_bom, cursor) else {
            return Ok(None);
        };
        if line.trim().is_empty() {
            cursor = next;
            continue;
        }
        if !is_fence(line) {
            return Ok(None);
        }

        let block_start = next;
        let mut scan = next;
        loop {
            match next_line(without_bom, scan) {
                Some((candidate, after)) => {
                    if is_fence(candidate) {
                        let block =
                            without_bom[block_start..scan].trim_end_matches(['\r', '\n']);
                        return Ok(Some((block, &without_bom[after..])));
                    }
                    scan = after;
                }
                None => return Err(FrontmatterError::Unterminated),
            }
        }
    }
}

fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
    if start >= input.len() {
        return None;
    }
    match input[start..].find('\n') {
        Some(pos) => Some((&input[start..start + pos], start + pos + 1)),
        None => Some((&input[start..], input.len())),
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}
