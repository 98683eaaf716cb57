use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Unwrap a list response of the form `{ "<key>": [ ... ] }`.
///
/// A bare top-level array is accepted as well. Records go through
/// [`normalize_keys`] first, so one loosely shaped record does not sink the
/// whole collection.
pub fn extract_list<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>, String> {
    let items = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| format!("missing `{key}` in list response"))?,
        other => return Err(format!("expected object with `{key}`, got {other}")),
    };
    serde_json::from_value(normalize_keys(items)).map_err(|e| format!("invalid `{key}` payload: {e}"))
}

/// Unwrap a single-record response `{ "<key>": { ... } }` or a bare record.
pub fn extract_record<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, String> {
    let record = match body {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(normalize_keys(record)).map_err(|e| format!("invalid `{key}` payload: {e}"))
}

/// Bring a payload into the camelCase shape the record types declare.
///
/// Object keys are converted to camelCase. When both spellings of a key are
/// present the first non-null one wins, camelCase first. Null members are
/// dropped so the field's default applies.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let (camel, snake): (Vec<_>, Vec<_>) =
                map.into_iter().partition(|(key, _)| !key.contains('_'));
            let mut out = Map::new();
            for (key, member) in camel.into_iter().chain(snake) {
                if member.is_null() {
                    continue;
                }
                out.entry(camel_case(&key)).or_insert_with(|| normalize_keys(member));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// `departments_count` -> `departmentsCount`. Keys with a leading underscore
/// are left alone.
fn camel_case(key: &str) -> String {
    if key.starts_with('_') || !key.contains('_') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_extract_list_from_envelope() {
        let rows: Vec<Row> = extract_list(json!({"sections": [{"id": "1"}, {"id": "2"}], "total": 2}), "sections").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn test_extract_list_accepts_bare_array() {
        let rows: Vec<Row> = extract_list(json!([{"id": "a"}]), "events").unwrap();
        assert_eq!(rows, vec![Row { id: "a".into() }]);
    }

    #[test]
    fn test_extract_list_reports_missing_key() {
        let err = extract_list::<Row>(json!({"items": []}), "events").unwrap_err();
        assert!(err.contains("events"));
        assert!(extract_list::<Row>(json!("nope"), "events").is_err());
    }

    #[test]
    fn test_extract_record() {
        let row: Row = extract_record(json!({"settings": {"id": "s"}}), "settings").unwrap();
        assert_eq!(row.id, "s");
        let row: Row = extract_record(json!({"id": "bare"}), "settings").unwrap();
        assert_eq!(row.id, "bare");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("departments_count"), "departmentsCount");
        assert_eq!(camel_case("center_head"), "centerHead");
        assert_eq!(camel_case("isVisible"), "isVisible");
        assert_eq!(camel_case("_links"), "_links");
    }

    #[test]
    fn test_null_counts_fall_back_to_defaults() {
        use crate::domain::a001_department_section::DepartmentSection;

        let sections: Vec<DepartmentSection> = extract_list(
            json!({"sections": [
                {"id": "1", "name": "Sciences", "departments_count": null, "sortOrder": null, "isVisible": null},
                {"id": "2", "name": "Support", "departmentsCount": 3}
            ]}),
            "sections",
        )
        .unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].departments_count, 0);
        assert_eq!(sections[0].sort_order, 0);
        assert!(sections[0].is_visible);
        assert_eq!(sections[1].departments_count, 3);
    }

    #[test]
    fn test_both_spellings_first_non_null_wins() {
        use crate::domain::a006_service_center::ServiceCenter;

        let centers: Vec<ServiceCenter> = extract_list(
            json!({"centers": [
                {"id": "c1", "name": "Labs", "centerHead": null, "center_head": {"name": "Dr. Sami", "job_title": "x"}},
                {"id": "c2", "name": "Optics", "centerHead": {"name": "Dr. Lina"}, "center_head": {"name": "Old"}},
                {"id": "c3", "name": "Empty", "is_active": false, "services_count": 2}
            ]}),
            "centers",
        )
        .unwrap();
        let head_name = |i: usize| centers[i].center_head.as_ref().map(|h| h.name.resolve("en"));
        assert_eq!(head_name(0).as_deref(), Some("Dr. Sami"));
        assert_eq!(head_name(1).as_deref(), Some("Dr. Lina"));
        assert_eq!(centers[2].center_head, None);
        assert!(!centers[2].is_active);
        assert_eq!(centers[2].services_count, 2);
    }
}
