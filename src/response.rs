//! Response viewer helpers
//!
//! Everything here is derived from a `ResponseResult`:
//! - size computation (JSON-serialized body length)
//! - status classification for coloring
//! - clipboard text
//! - token classification for JSON syntax highlighting

use serde_json::{Number, Value};

use crate::types::{ResponseBody, ResponseResult};

/// Size of a response body: the length of its compact JSON serialization,
/// counted in UTF-16 code units. Raw text is serialized as a JSON string, so
/// quotes and escapes are included in the count.
pub fn body_size(body: &ResponseBody) -> usize {
    to_browser_json(&body.to_value()).encode_utf16().count()
}

/// Compact JSON text as a browser's `JSON.stringify` writes it. Numbers are
/// written in JavaScript's shortest form, so `10.0` becomes `10` and `1e21`
/// becomes `1e+21`.
pub fn to_browser_json(value: &Value) -> String {
    let mut out = String::new();
    write_browser_json(value, &mut out);
    out
}

fn write_browser_json(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&browser_number(n)),
        // serde_json escapes exactly the characters JSON.stringify does
        Value::String(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_browser_json(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_browser_json(item, out);
            }
            out.push('}');
        }
    }
}

fn browser_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) => format_js_number(f),
        None => n.to_string(),
    }
}

/// JavaScript `Number.prototype.toString` for finite values: plain decimal
/// between 1e-6 and 1e21, exponent form with an explicit sign outside it
fn format_js_number(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        return f.to_string();
    }

    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Whole-number floats that JavaScript would print without a fraction become
/// integers, so pretty output matches the size count
fn normalize_numbers(value: &Value) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalize_numbers(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    Error,
    Unknown,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            s if s >= 400 => StatusClass::Error,
            _ => StatusClass::Unknown,
        }
    }
}

/// Pretty-printed body as written to the clipboard
pub fn copy_text(response: &ResponseResult) -> String {
    let value = normalize_numbers(&response.body.to_value());
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Size shown in the summary line, e.g. `0.29 KB`
pub fn format_size_kb(size: usize) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}

/// Text shown in the body tab. JSON bodies are pretty-printed, raw bodies
/// are shown as-is.
pub fn display_body(body: &ResponseBody) -> String {
    match body {
        ResponseBody::Json(value) => {
            let value = normalize_numbers(value);
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        ResponseBody::Raw(text) => text.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonTokenKind {
    Key,
    String,
    Boolean,
    Null,
    Number,
    Plain,
}

/// Split one line of pretty-printed JSON into highlighted segments
pub fn tokenize_json_line(line: &str) -> Vec<(JsonTokenKind, &str)> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            let end = string_end(bytes, i);
            // A string followed by optional whitespace and a colon is a key
            let mut after = end;
            while after < bytes.len() && bytes[after].is_ascii_whitespace() {
                after += 1;
            }
            let (kind, token_end) = if after < bytes.len() && bytes[after] == b':' {
                (JsonTokenKind::Key, after + 1)
            } else {
                (JsonTokenKind::String, end)
            };
            push_plain(&mut tokens, line, plain_start, i);
            tokens.push((kind, &line[i..token_end]));
            i = token_end;
            plain_start = i;
        } else if b == b'-' || b.is_ascii_digit() {
            let end = number_end(bytes, i);
            if end > i && !(end == i + 1 && b == b'-') {
                push_plain(&mut tokens, line, plain_start, i);
                tokens.push((JsonTokenKind::Number, &line[i..end]));
                plain_start = end;
                i = end;
            } else {
                i += 1;
            }
        } else if let Some((kind, len)) = matches!(b, b't' | b'f' | b'n')
            .then(|| literal_at(&line[i..]))
            .flatten()
        {
            push_plain(&mut tokens, line, plain_start, i);
            tokens.push((kind, &line[i..i + len]));
            i += len;
            plain_start = i;
        } else {
            i += 1;
        }
    }
    push_plain(&mut tokens, line, plain_start, bytes.len());
    tokens
}

fn push_plain<'a>(
    tokens: &mut Vec<(JsonTokenKind, &'a str)>,
    line: &'a str,
    from: usize,
    to: usize,
) {
    if to > from {
        tokens.push((JsonTokenKind::Plain, &line[from..to]));
    }
}

fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn number_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    while i < bytes.len()
        && (bytes[i].is_ascii_digit() || matches!(bytes[i], b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        i += 1;
    }
    i
}

fn literal_at(rest: &str) -> Option<(JsonTokenKind, usize)> {
    for (word, kind) in [
        ("true", JsonTokenKind::Boolean),
        ("false", JsonTokenKind::Boolean),
        ("null", JsonTokenKind::Null),
    ] {
        if rest.starts_with(word) {
            let boundary = rest[word.len()..]
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric() && c != '_')
                .unwrap_or(true);
            if boundary {
                return Some((kind, word.len()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_size_json() {
        let body = ResponseBody::Json(json!({"id": 42}));
        assert_eq!(body_size(&body), r#"{"id":42}"#.len());
    }

    #[test]
    fn test_body_size_raw_counts_quotes_and_escapes() {
        // "a\"b" serializes to "\"a\\\"b\"" which is 6 characters
        let body = ResponseBody::Raw("a\"b".to_string());
        assert_eq!(body_size(&body), 6);

        let body = ResponseBody::Raw("hello".to_string());
        assert_eq!(body_size(&body), 7);
    }

    #[test]
    fn test_body_size_writes_whole_floats_like_a_browser() {
        let value: serde_json::Value = serde_json::from_str(r#"{"price":10.0,"n":1e2}"#).unwrap();
        let body = ResponseBody::Json(value);
        assert_eq!(to_browser_json(&body.to_value()), r#"{"price":10,"n":100}"#);
        assert_eq!(body_size(&body), 20);
    }

    #[test]
    fn test_browser_number_formatting() {
        assert_eq!(format_js_number(1.5), "1.5");
        assert_eq!(format_js_number(-0.0), "0");
        assert_eq!(format_js_number(1e20), "100000000000000000000");
        assert_eq!(format_js_number(1e21), "1e+21");
        assert_eq!(format_js_number(2.5e-7), "2.5e-7");
        assert_eq!(format_js_number(0.000001), "0.000001");
    }

    #[test]
    fn test_browser_json_keeps_nested_shape() {
        let value = json!({"a": [1, 2.5, null, true], "b": {"c": "x\ny"}, "d": -3});
        assert_eq!(
            to_browser_json(&value),
            r#"{"a":[1,2.5,null,true],"b":{"c":"x\ny"},"d":-3}"#
        );
    }

    #[test]
    fn test_display_body_drops_fraction_of_whole_floats() {
        let value: serde_json::Value = serde_json::from_str(r#"{"price":10.0,"ratio":0.5}"#).unwrap();
        let text = display_body(&ResponseBody::Json(value));
        assert_eq!(text, "{\n  \"price\": 10,\n  \"ratio\": 0.5\n}");
    }

    #[test]
    fn test_body_size_counts_utf16_units() {
        let body = ResponseBody::Raw("😀".to_string());
        assert_eq!(body_size(&body), 4);
    }

    #[test]
    fn test_status_class() {
        assert_eq!(StatusClass::from_status(200), StatusClass::Success);
        assert_eq!(StatusClass::from_status(204), StatusClass::Success);
        assert_eq!(StatusClass::from_status(301), StatusClass::Redirect);
        assert_eq!(StatusClass::from_status(404), StatusClass::Error);
        assert_eq!(StatusClass::from_status(503), StatusClass::Error);
        assert_eq!(StatusClass::from_status(0), StatusClass::Unknown);
        assert_eq!(StatusClass::from_status(101), StatusClass::Unknown);
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size_kb(0), "0.00 KB");
        assert_eq!(format_size_kb(1024), "1.00 KB");
        assert_eq!(format_size_kb(300), "0.29 KB");
    }

    #[test]
    fn test_copy_text_pretty_prints() {
        let result = ResponseResult {
            status: 200,
            status_text: "OK".to_string(),
            time: 1,
            headers: Default::default(),
            body: ResponseBody::Json(json!({"id": 42})),
            size: 9,
        };
        assert_eq!(copy_text(&result), "{\n  \"id\": 42\n}");
    }

    #[test]
    fn test_copy_text_quotes_raw_body() {
        let result = ResponseResult {
            status: 200,
            status_text: "OK".to_string(),
            time: 1,
            headers: Default::default(),
            body: ResponseBody::Raw("plain".to_string()),
            size: 7,
        };
        assert_eq!(copy_text(&result), "\"plain\"");
    }

    #[test]
    fn test_copy_text_drops_fraction_of_whole_floats() {
        let value: serde_json::Value = serde_json::from_str(r#"{"n":1e2}"#).unwrap();
        let result = ResponseResult {
            status: 200,
            status_text: "OK".to_string(),
            time: 1,
            headers: Default::default(),
            body: ResponseBody::Json(value),
            size: 9,
        };
        assert_eq!(copy_text(&result), "{\n  \"n\": 100\n}");
    }

    #[test]
    fn test_tokenize_key_value_line() {
        let tokens = tokenize_json_line(r#"  "name": "John","#);
        assert_eq!(
            tokens,
            vec![
                (JsonTokenKind::Plain, "  "),
                (JsonTokenKind::Key, "\"name\":"),
                (JsonTokenKind::Plain, " "),
                (JsonTokenKind::String, "\"John\""),
                (JsonTokenKind::Plain, ","),
            ]
        );
    }

    #[test]
    fn test_tokenize_literals_and_numbers() {
        let kinds: Vec<JsonTokenKind> = tokenize_json_line(r#"  "a": -1.5e3, true, null"#)
            .into_iter()
            .map(|(kind, _)| kind)
            .filter(|kind| *kind != JsonTokenKind::Plain)
            .collect();
        assert_eq!(
            kinds,
            vec![
                JsonTokenKind::Key,
                JsonTokenKind::Number,
                JsonTokenKind::Boolean,
                JsonTokenKind::Null,
            ]
        );
    }

    #[test]
    fn test_tokenize_escaped_quote_in_string() {
        let tokens = tokenize_json_line(r#""say \"hi\"""#);
        assert_eq!(tokens, vec![(JsonTokenKind::String, r#""say \"hi\"""#)]);
    }
}
