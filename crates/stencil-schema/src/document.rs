//! Loading YAML or JSON documents into `serde_json::Value`.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;

/// Load a document, choosing the parser by file extension.
///
/// `.yaml` and `.yml` files are parsed as YAML; everything else as JSON.
pub fn load_document(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => parse_yaml(&content).map_err(|reason| SchemaError::DocumentLoad {
            path: path.display().to_string(),
            reason,
        }),
        _ => serde_json::from_str(&content).map_err(|e| SchemaError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

/// Parse YAML text into a JSON value.
pub(crate) fn parse_yaml(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
    yaml_to_json_value(&yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped; non-string scalar keys are stringified.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn yaml_converts_to_json() {
        let value = parse_yaml("args: [1, two, 3.5]\nflag: true\n7: seven\n").unwrap();
        assert_eq!(value, json!({"args": [1, "two", 3.5], "flag": true, "7": "seven"}));
    }

    #[test]
    fn loads_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("request.yaml");
        std::fs::File::create(&yaml_path)
            .unwrap()
            .write_all(b"component: Card\nargs: [1]\n")
            .unwrap();
        assert_eq!(
            load_document(&yaml_path).unwrap(),
            json!({"component": "Card", "args": [1]})
        );

        let json_path = dir.path().join("request.json");
        std::fs::write(&json_path, r#"{"component": "Card"}"#).unwrap();
        assert_eq!(load_document(&json_path).unwrap(), json!({"component": "Card"}));
    }

    #[test]
    fn invalid_json_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, SchemaError::DocumentLoad { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn missing_file_is_a_document_error() {
        let err = load_document(Path::new("/nonexistent/request.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }
}
