//! Fixture file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fixture file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get fixture file type from path extension
pub fn get_file_type(path: &Path) -> FixtureFileType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => FixtureFileType::Yaml,
        "json" => FixtureFileType::Json,
        "jsonc" => FixtureFileType::Jsonc,
        _ => FixtureFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// Comment markers inside string literals are kept. Line comments keep their
/// terminating newline so line numbers in parse errors stay accurate.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        result.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse fixture content according to the type implied by `path`
pub fn parse_fixture<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    match get_file_type(path) {
        FixtureFileType::Yaml => parse_yaml(content),
        FixtureFileType::Json => parse_json(content),
        FixtureFileType::Jsonc => parse_jsonc(content),
        FixtureFileType::Unknown => Err(ConfigError::UnknownFileType(
            path.display().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    #[case("fixtures.yaml", FixtureFileType::Yaml)]
    #[case("fixtures.YML", FixtureFileType::Yaml)]
    #[case("dir/fixtures.json", FixtureFileType::Json)]
    #[case("fixtures.JSONC", FixtureFileType::Jsonc)]
    #[case("fixtures.txt", FixtureFileType::Unknown)]
    #[case("fixtures", FixtureFileType::Unknown)]
    #[case("", FixtureFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: FixtureFileType) {
        assert_eq!(get_file_type(Path::new(path)), expected);
    }

    #[rstest]
    #[case("{\"key\": \"value\"}", "{\"key\": \"value\"}")]
    #[case("{\"key\": 1} // trailing", "{\"key\": 1} ")]
    #[case("{\"key\": 1} /* block */", "{\"key\": 1} ")]
    #[case("// head\n{}", "\n{}")]
    #[case("{/* multi\nline */}", "{}")]
    #[case("{\"url\": \"mock://host/a\"}", "{\"url\": \"mock://host/a\"}")]
    #[case("{\"s\": \"/* not a comment */\"}", "{\"s\": \"/* not a comment */\"}")]
    #[case("{\"s\": \"quote \\\" // still string\"}", "{\"s\": \"quote \\\" // still string\"}")]
    #[case("{\"s\": \"\\\\\"} // gone", "{\"s\": \"\\\\\"} ")]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[rstest]
    fn test_parse_fixture_by_extension() {
        let yaml: Value = parse_fixture("a: 1\nb: [x]\n", Path::new("f.yaml")).expect("yaml");
        assert_eq!(yaml, json!({"a": 1, "b": ["x"]}));

        let json: Value = parse_fixture("{\"a\": 1}", Path::new("f.json")).expect("json");
        assert_eq!(json, json!({"a": 1}));

        let jsonc: Value =
            parse_fixture("{\n  // note\n  \"a\": 1\n}", Path::new("f.jsonc")).expect("jsonc");
        assert_eq!(jsonc, json!({"a": 1}));
    }

    #[rstest]
    fn test_parse_fixture_json_rejects_comments() {
        let result: Result<Value, _> = parse_fixture("{\"a\": 1} // no", Path::new("f.json"));
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[rstest]
    fn test_parse_fixture_unknown_type() {
        let result: Result<Value, _> = parse_fixture("{}", Path::new("fixtures.txt"));
        assert!(matches!(
            result,
            Err(ConfigError::UnknownFileType(path)) if path == "fixtures.txt"
        ));
    }
}
