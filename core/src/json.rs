/*
 * Copyright (c) 2026 Mohamad Al-Zawahreh (dba Sovereign Systems).
 *
 * Structured-value path engine for the LSL Core runtime kernel.
 * Navigates and constructs JSON trees by paths of string keys and
 * integer indices, the way scripts address nested data.
 *
 * LICENSE: DUAL-LICENSED (AGPLv3 or COMMERCIAL).
 */

use crate::runtime::{List, Value};
use serde_json::Value as Json;

// Script-visible sentinels. These are noncharacter code points so they can
// never collide with real payload text.
pub const JSON_INVALID: &str = "\u{FDD0}";
pub const JSON_OBJECT: &str = "\u{FDD1}";
pub const JSON_ARRAY: &str = "\u{FDD2}";
pub const JSON_NUMBER: &str = "\u{FDD3}";
pub const JSON_STRING: &str = "\u{FDD4}";
pub const JSON_NULL: &str = "\u{FDD5}";
pub const JSON_TRUE: &str = "\u{FDD6}";
pub const JSON_FALSE: &str = "\u{FDD7}";
pub const JSON_DELETE: &str = "\u{FDD8}";

/// Path index that always appends to an array.
pub const JSON_APPEND: i32 = -1;

/// Resolve a path of string-key / integer-index specifiers against a node.
/// Any mismatch (wrong specifier type, missing key, out-of-range index)
/// resolves to None, never an error.
fn node_at<'a>(root: &'a Json, path: &[Value]) -> Option<&'a Json> {
    let mut node = root;
    for spec in path {
        node = match (node, spec) {
            (Json::Array(items), Value::Integer(i)) => {
                if *i < 0 {
                    return None;
                }
                items.get(*i as usize)?
            }
            (Json::Object(map), Value::Str(key)) => map.get(key)?,
            _ => return None,
        };
    }
    Some(node)
}

/// The textual form scripts receive for a resolved node: strings raw,
/// numbers as written, booleans and null as their sentinels, containers as
/// JSON text.
fn render_node(node: &Json) -> String {
    match node {
        Json::String(s) => s.clone(),
        Json::Bool(true) => JSON_TRUE.to_string(),
        Json::Bool(false) => JSON_FALSE.to_string(),
        Json::Null => JSON_NULL.to_string(),
        other => other.to_string(),
    }
}

/// Fetch the value at `path` inside the JSON text `src`.
/// Unparseable input or an unresolvable path yields `JSON_INVALID`.
pub fn get_value(src: &str, path: &[Value]) -> String {
    let root: Json = match serde_json::from_str(src) {
        Ok(v) => v,
        Err(_) => return JSON_INVALID.to_string(),
    };
    match node_at(&root, path) {
        Some(node) => render_node(node),
        None => JSON_INVALID.to_string(),
    }
}

/// Report the type of the value at `path` inside the JSON text `src`.
pub fn value_type(src: &str, path: &[Value]) -> String {
    let root: Json = match serde_json::from_str(src) {
        Ok(v) => v,
        Err(_) => return JSON_INVALID.to_string(),
    };
    let type_str = match node_at(&root, path) {
        Some(Json::Object(_)) => JSON_OBJECT,
        Some(Json::Array(_)) => JSON_ARRAY,
        Some(Json::Number(_)) => JSON_NUMBER,
        Some(Json::String(_)) => JSON_STRING,
        Some(Json::Bool(true)) => JSON_TRUE,
        Some(Json::Bool(false)) => JSON_FALSE,
        Some(Json::Null) => JSON_NULL,
        None => JSON_INVALID,
    };
    type_str.to_string()
}

/// Store `value` at `path` inside the JSON text `src`, building any missing
/// containers along the way, and return the new serialized text.
///
/// The stored leaf is always a JSON string; `JSON_DELETE` as the value
/// removes the addressed node instead. Empty input text builds a fresh
/// tree. An unusable path (or deleting something that is not there) yields
/// `JSON_INVALID`.
pub fn set_value(src: &str, path: &[Value], value: &str) -> String {
    let mut root: Json = if src.trim().is_empty() {
        Json::Null
    } else {
        match serde_json::from_str(src) {
            Ok(v) => v,
            Err(_) => return JSON_INVALID.to_string(),
        }
    };

    if path.is_empty() {
        if value == JSON_DELETE {
            return JSON_INVALID.to_string();
        }
        return Json::String(value.to_string()).to_string();
    }

    if set_at(&mut root, path, value) {
        root.to_string()
    } else {
        JSON_INVALID.to_string()
    }
}

fn set_at(node: &mut Json, path: &[Value], value: &str) -> bool {
    let spec = &path[0];
    let rest = &path[1..];
    let deleting = value == JSON_DELETE;

    match spec {
        Value::Integer(raw) => {
            if !matches!(node, Json::Array(_)) {
                // A mismatched node is replaced by a fresh container, but
                // only when we are building, not deleting.
                if deleting {
                    return false;
                }
                *node = Json::Array(Vec::new());
            }
            let Json::Array(items) = node else {
                return false;
            };
            let idx = if *raw >= 0 && (*raw as usize) < items.len() {
                *raw as usize
            } else if *raw == JSON_APPEND || *raw >= 0 {
                // Append sentinel, or an index past the end
                if deleting {
                    return false;
                }
                items.push(Json::Null);
                items.len() - 1
            } else {
                return false;
            };
            if rest.is_empty() {
                if deleting {
                    items.remove(idx);
                } else {
                    items[idx] = Json::String(value.to_string());
                }
                true
            } else {
                set_at(&mut items[idx], rest, value)
            }
        }
        Value::Str(key) => {
            if !matches!(node, Json::Object(_)) {
                if deleting {
                    return false;
                }
                *node = Json::Object(serde_json::Map::new());
            }
            let Json::Object(map) = node else {
                return false;
            };
            if rest.is_empty() {
                if deleting {
                    map.remove(key).is_some()
                } else {
                    map.insert(key.clone(), Json::String(value.to_string()));
                    true
                }
            } else {
                if deleting && !map.contains_key(key) {
                    return false;
                }
                let child = map.entry(key.clone()).or_insert(Json::Null);
                set_at(child, rest, value)
            }
        }
        _ => false,
    }
}

/// Decompose the top level of a JSON text into a script list: arrays yield
/// their elements, objects yield alternating key/value entries, a scalar
/// yields a single-element list. Unparseable input yields `[JSON_INVALID]`.
pub fn json_to_list(src: &str) -> List {
    let root: Json = match serde_json::from_str(src) {
        Ok(v) => v,
        Err(_) => return List::from_vec(vec![Value::Str(JSON_INVALID.to_string())]),
    };
    match root {
        Json::Array(items) => items.iter().map(json_to_value).collect(),
        Json::Object(map) => {
            let mut out = Vec::with_capacity(map.len() * 2);
            for (k, v) in &map {
                out.push(Value::Str(k.clone()));
                out.push(json_to_value(v));
            }
            List::from_vec(out)
        }
        scalar => List::from_vec(vec![json_to_value(&scalar)]),
    }
}

fn json_to_value(node: &Json) -> Value {
    match node {
        Json::Number(num) => {
            // 32-bit script integers; anything wider degrades to float
            if let Some(i) = num.as_i64() {
                if let Ok(small) = i32::try_from(i) {
                    return Value::Integer(small);
                }
            }
            Value::Float(num.as_f64().unwrap_or(0.0))
        }
        Json::String(s) => Value::Str(s.clone()),
        Json::Bool(true) => Value::Str(JSON_TRUE.to_string()),
        Json::Bool(false) => Value::Str(JSON_FALSE.to_string()),
        Json::Null => Value::Str(JSON_NULL.to_string()),
        container => Value::Str(container.to_string()),
    }
}

/// Assemble a JSON text from a flat script list. `kind` selects the
/// container: `JSON_ARRAY` takes the elements in order, `JSON_OBJECT`
/// consumes string-key/value pairs. Anything else yields `JSON_INVALID`.
pub fn list_to_json(kind: &str, values: &List) -> String {
    if kind == JSON_ARRAY {
        Json::Array(values.iter().map(value_to_json).collect()).to_string()
    } else if kind == JSON_OBJECT {
        if values.len() % 2 != 0 {
            return JSON_INVALID.to_string();
        }
        let mut map = serde_json::Map::new();
        for pair in values.as_slice().chunks(2) {
            let key = match &pair[0] {
                Value::Str(s) => s.clone(),
                _ => return JSON_INVALID.to_string(),
            };
            map.insert(key, value_to_json(&pair[1]));
        }
        Json::Object(map).to_string()
    } else {
        JSON_INVALID.to_string()
    }
}

fn value_to_json(v: &Value) -> Json {
    match v {
        Value::Integer(i) => Json::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::Str(s) if s == JSON_TRUE => Json::Bool(true),
        Value::Str(s) if s == JSON_FALSE => Json::Bool(false),
        Value::Str(s) if s == JSON_NULL => Json::Null,
        Value::Str(s) => {
            // Embedded JSON container text nests structurally; any other
            // string stays a string
            match serde_json::from_str::<Json>(s) {
                Ok(parsed @ (Json::Array(_) | Json::Object(_))) => parsed,
                _ => Json::String(s.clone()),
            }
        }
        other => Json::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(specs: &[&str]) -> Vec<Value> {
        specs
            .iter()
            .map(|s| match s.parse::<i32>() {
                Ok(i) => Value::Integer(i),
                Err(_) => Value::Str(s.to_string()),
            })
            .collect()
    }

    // --- get ---

    #[test]
    fn test_get_basic() {
        let src = r#"{"a":{"b":[10,20,"x"]}}"#;
        assert_eq!(get_value(src, &path(&["a", "b", "1"])), "20");
        assert_eq!(get_value(src, &path(&["a", "b", "2"])), "x");
        assert_eq!(get_value(src, &path(&["a", "b"])), r#"[10,20,"x"]"#);
        assert_eq!(get_value(src, &[]), src);
    }

    #[test]
    fn test_get_sentinels() {
        let src = r#"{"t":true,"f":false,"n":null}"#;
        assert_eq!(get_value(src, &path(&["t"])), JSON_TRUE);
        assert_eq!(get_value(src, &path(&["f"])), JSON_FALSE);
        assert_eq!(get_value(src, &path(&["n"])), JSON_NULL);
    }

    #[test]
    fn test_get_not_found() {
        let src = r#"{"a":[1,2]}"#;
        assert_eq!(get_value(src, &path(&["missing"])), JSON_INVALID);
        assert_eq!(get_value(src, &path(&["a", "5"])), JSON_INVALID);
        // String key against an array is a type mismatch, not an error
        assert_eq!(get_value(src, &path(&["a", "x"])), JSON_INVALID);
        // Integer specifier against an object likewise
        assert_eq!(get_value(src, &[Value::Integer(0)]), JSON_INVALID);
        assert_eq!(get_value("not json", &[]), JSON_INVALID);
    }

    // --- type ---

    #[test]
    fn test_value_type() {
        let src = r#"{"o":{},"a":[],"num":1.5,"s":"x","t":true,"f":false,"n":null}"#;
        assert_eq!(value_type(src, &[]), JSON_OBJECT);
        assert_eq!(value_type(src, &path(&["o"])), JSON_OBJECT);
        assert_eq!(value_type(src, &path(&["a"])), JSON_ARRAY);
        assert_eq!(value_type(src, &path(&["num"])), JSON_NUMBER);
        assert_eq!(value_type(src, &path(&["s"])), JSON_STRING);
        assert_eq!(value_type(src, &path(&["t"])), JSON_TRUE);
        assert_eq!(value_type(src, &path(&["f"])), JSON_FALSE);
        assert_eq!(value_type(src, &path(&["n"])), JSON_NULL);
        assert_eq!(value_type(src, &path(&["nope"])), JSON_INVALID);
        assert_eq!(value_type("{", &[]), JSON_INVALID);
    }

    // --- set ---

    #[test]
    fn test_set_builds_containers() {
        let out = set_value("", &path(&["a", "b"]), "v");
        insta::assert_snapshot!(out, @r#"{"a":{"b":"v"}}"#);

        let out = set_value("", &[Value::Str("a".to_string()), Value::Integer(0)], "v");
        insta::assert_snapshot!(out, @r#"{"a":["v"]}"#);
    }

    #[test]
    fn test_set_get_round_trip() {
        let p = path(&["root", "items", "0", "name"]);
        let out = set_value("", &p, "widget");
        assert_eq!(get_value(&out, &p), "widget");
    }

    #[test]
    fn test_set_overwrites() {
        let src = r#"{"a":1}"#;
        assert_eq!(set_value(src, &path(&["a"]), "2"), r#"{"a":"2"}"#);
    }

    #[test]
    fn test_set_append_sentinel() {
        let src = r#"{"a":["x"]}"#;
        let out = set_value(src, &[Value::Str("a".to_string()), Value::Integer(JSON_APPEND)], "y");
        assert_eq!(out, r#"{"a":["x","y"]}"#);
        // An index past the end appends too
        let out = set_value(&out, &[Value::Str("a".to_string()), Value::Integer(9)], "z");
        assert_eq!(out, r#"{"a":["x","y","z"]}"#);
    }

    #[test]
    fn test_set_delete() {
        let src = r#"{"a":[1,2,3],"b":1}"#;
        assert_eq!(
            set_value(src, &[Value::Str("a".to_string()), Value::Integer(1)], JSON_DELETE),
            r#"{"a":[1,3],"b":1}"#
        );
        assert_eq!(set_value(src, &path(&["b"]), JSON_DELETE), r#"{"a":[1,2,3]}"#);
        assert_eq!(set_value(src, &path(&["zz"]), JSON_DELETE), JSON_INVALID);
    }

    #[test]
    fn test_set_invalid_input() {
        assert_eq!(set_value("{broken", &path(&["a"]), "v"), JSON_INVALID);
        // A float specifier is not a valid path element
        assert_eq!(set_value("{}", &[Value::Float(1.0)], "v"), JSON_INVALID);
    }

    #[test]
    fn test_set_root() {
        assert_eq!(set_value("", &[], "hello"), r#""hello""#);
        assert_eq!(set_value(r#"{"a":1}"#, &[], JSON_DELETE), JSON_INVALID);
    }

    // --- list conversions ---

    #[test]
    fn test_json_to_list_array() {
        let l = json_to_list(r#"[1,"two",2.5,true,null,[3]]"#);
        assert_eq!(
            l,
            List::from_vec(vec![
                Value::Integer(1),
                Value::Str("two".to_string()),
                Value::Float(2.5),
                Value::Str(JSON_TRUE.to_string()),
                Value::Str(JSON_NULL.to_string()),
                Value::Str("[3]".to_string()),
            ])
        );
    }

    #[test]
    fn test_json_to_list_object() {
        let l = json_to_list(r#"{"a":1,"b":"x"}"#);
        assert_eq!(
            l,
            List::from_vec(vec![
                Value::Str("a".to_string()),
                Value::Integer(1),
                Value::Str("b".to_string()),
                Value::Str("x".to_string()),
            ])
        );
    }

    #[test]
    fn test_json_to_list_invalid() {
        assert_eq!(
            json_to_list("oops"),
            List::from_vec(vec![Value::Str(JSON_INVALID.to_string())])
        );
    }

    #[test]
    fn test_list_to_json_array() {
        let l = List::from_vec(vec![
            Value::Integer(1),
            Value::Str("x".to_string()),
            Value::Str(JSON_TRUE.to_string()),
        ]);
        assert_eq!(list_to_json(JSON_ARRAY, &l), r#"[1,"x",true]"#);
    }

    #[test]
    fn test_list_to_json_object() {
        let l = List::from_vec(vec![
            Value::Str("k".to_string()),
            Value::Integer(7),
        ]);
        assert_eq!(list_to_json(JSON_OBJECT, &l), r#"{"k":7}"#);
        // Odd pair count cannot form an object
        let odd = List::from_vec(vec![Value::Str("k".to_string())]);
        assert_eq!(list_to_json(JSON_OBJECT, &odd), JSON_INVALID);
        assert_eq!(list_to_json("array", &l), JSON_INVALID);
    }

    #[test]
    fn test_list_to_json_nests_container_text() {
        let l = List::from_vec(vec![Value::Str("[1,2]".to_string())]);
        assert_eq!(list_to_json(JSON_ARRAY, &l), "[[1,2]]");
    }
}
