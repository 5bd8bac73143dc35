//! MetaCSV-style front-matter header parsing.
//!
//! CSVV files open with a YAML-like block delimited by `---` and `...`:
//! top-level `key: value` attributes plus an indented `variables:` section
//! describing each variable as `name: description [unit]`.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{CsvvError, CsvvResult};

/// A variable definition from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDef {
    pub description: String,
    /// Physical unit; None when the header omits it.
    pub unit: Option<String>,
}

/// Parsed header content.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub attrs: BTreeMap<String, String>,
    pub variables: BTreeMap<String, VariableDef>,
}

/// Parse the front-matter header.
///
/// Returns the header and the number of lines consumed (including both
/// delimiters), so the caller can hand the remaining lines to the body
/// parser.
pub fn read_header(lines: &[&str]) -> CsvvResult<(Header, usize)> {
    let mut iter = lines.iter().enumerate();

    // Find the opening delimiter, allowing leading blank lines.
    let start = loop {
        match iter.next() {
            Some((i, line)) if line.trim() == "---" => break i,
            Some((_, line)) if line.trim().is_empty() => continue,
            _ => return Err(CsvvError::MissingHeader),
        }
    };

    let mut header = Header::default();
    let mut in_variables = false;

    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        let trimmed = line.trim_end();
        if trimmed.trim() == "..." {
            return Ok((header, i + 1));
        }
        if trimmed.trim().is_empty() {
            continue;
        }

        let indented = trimmed.starts_with(' ') || trimmed.starts_with('\t');
        if !indented {
            in_variables = false;
        }

        let (key, value) = trimmed
            .split_once(':')
            .ok_or_else(|| CsvvError::MalformedHeader(trimmed.to_string()))?;
        let key = key.trim().to_string();
        let value = value.trim().to_string();

        if in_variables {
            header.variables.insert(key, parse_variable(&value));
        } else if key == "variables" && value.is_empty() {
            in_variables = true;
        } else {
            header.attrs.insert(key, value);
        }
    }

    Err(CsvvError::MissingHeader)
}

/// Split `description [unit]` and clean the unit.
///
/// Units occasionally carry trailing `]`-bracketed qualifiers; everything
/// from the first `]` on is discarded. A definition with no unit logs a
/// warning, matching how these files have historically been handled.
fn parse_variable(value: &str) -> VariableDef {
    if let Some(open) = value.find('[') {
        let description = value[..open].trim().to_string();
        let raw_unit = &value[open + 1..];
        let unit = match raw_unit.find(']') {
            Some(close) => raw_unit[..close].trim().to_string(),
            None => raw_unit.trim().to_string(),
        };
        VariableDef {
            description,
            unit: Some(unit),
        }
    } else {
        warn!(variable = %value, "Missing unit for variable");
        VariableDef {
            description: value.trim().to_string(),
            unit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
---
csvv-version: girdin-2017-01-10
oneline: Mortality beta generation
variables:
  gamma: regression coefficients [deaths/person/year]
  outcome: mortality rate
...
observations
1000
";

    #[test]
    fn test_read_header() {
        let lines: Vec<&str> = HEADER.lines().collect();
        let (header, consumed) = read_header(&lines).unwrap();
        assert_eq!(
            header.attrs.get("csvv-version").map(String::as_str),
            Some("girdin-2017-01-10")
        );
        assert_eq!(lines[consumed], "observations");

        let gamma = &header.variables["gamma"];
        assert_eq!(gamma.unit.as_deref(), Some("deaths/person/year"));
        assert!(header.variables["outcome"].unit.is_none());
    }

    #[test]
    fn test_unit_truncated_at_bracket() {
        let def = parse_variable("coefficient [C [ref 20C]]");
        assert_eq!(def.unit.as_deref(), Some("C [ref 20C"));
    }

    #[test]
    fn test_unterminated_header_is_fatal() {
        let lines = vec!["---", "csvv-version: girdin-2017-01-10"];
        assert!(matches!(
            read_header(&lines),
            Err(CsvvError::MissingHeader)
        ));
    }
}
