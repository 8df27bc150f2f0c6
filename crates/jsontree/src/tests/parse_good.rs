use alloc::{vec, vec::Vec};

use bstr::{BStr, BString};

use crate::{Member, Value, parse};

fn member(name: &str, value: Value) -> Member {
    Member {
        name: name.into(),
        value,
    }
}

#[test]
fn empty_object() {
    assert_eq!(parse(b"{}"), Ok(Value::Object(Vec::new())));
}

#[test]
fn empty_array() {
    assert_eq!(parse(b"[]"), Ok(Value::Array(Vec::new())));
}

#[test]
fn scalar_roots() {
    assert_eq!(parse(b"null"), Ok(Value::Null));
    assert_eq!(parse(b"true"), Ok(Value::Boolean(true)));
    assert_eq!(parse(b"false"), Ok(Value::Boolean(false)));
    assert_eq!(parse(br#""x""#), Ok(Value::String("x".into())));
}

#[test]
fn empty_string_is_valid() {
    assert_eq!(parse(br#""""#), Ok(Value::String("".into())));
    let v = parse(br#"{"":""}"#).unwrap();
    assert_eq!(v, Value::Object(vec![member("", Value::String("".into()))]));
}

#[test]
fn single_member_object() {
    let v = parse(br#"{"a":"1"}"#).unwrap();
    assert_eq!(v, Value::Object(vec![member("a", Value::String("1".into()))]));
}

#[test]
fn nested_containers() {
    let v = parse(br#"{"a": ["x", {"b": null}, true], "c": false}"#).unwrap();
    assert_eq!(
        v,
        Value::Object(vec![
            member(
                "a",
                Value::Array(vec![
                    Value::String("x".into()),
                    Value::Object(vec![member("b", Value::Null)]),
                    Value::Boolean(true),
                ]),
            ),
            member("c", Value::Boolean(false)),
        ])
    );
}

#[test]
fn members_keep_source_order_and_duplicates() {
    let v = parse(br#"{"b":"1","a":"2","b":"3"}"#).unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].name, "b");
    assert_eq!(members[1].name, "a");
    assert_eq!(members[2].name, "b");
    // Lookup sees the first occurrence.
    assert_eq!(v.get(b"b"), Some(&Value::String("1".into())));
}

#[test]
fn escapes_decode_in_tree() {
    let v = parse(br#""\u0041\n\t\"\\\/""#).unwrap();
    assert_eq!(v, Value::String("A\n\t\"\\/".into()));
}

#[test]
fn unicode_escapes_transcode_to_utf8() {
    let v = parse(br#"["\u00e9", "\u20ac"]"#).unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::String("é".into()),
            Value::String("€".into()),
        ])
    );
}

#[test]
fn surrogate_halves_decode_independently() {
    let v = parse(br#""\ud83d\ude00""#).unwrap();
    let expected = BString::from(vec![0xEDu8, 0xA0, 0xBD, 0xED, 0xB8, 0x80]);
    assert_eq!(v, Value::String(expected));
}

#[test]
fn raw_multibyte_utf8_passes_through() {
    let v = parse("\"héllo\"".as_bytes()).unwrap();
    assert_eq!(v, Value::String("héllo".into()));
}

#[test]
fn backslash_before_closing_quote() {
    // The string body is a single escaped backslash; the quote after it
    // still terminates the literal.
    assert_eq!(parse(br#""\\""#), Ok(Value::String("\\".into())));
}

#[test]
fn whitespace_is_skipped_between_tokens() {
    let v = parse(b" \t{ \"a\" :\r\n[ \"b\" , null ] } \n").unwrap();
    assert_eq!(
        v,
        Value::Object(vec![member(
            "a",
            Value::Array(vec![Value::String("b".into()), Value::Null]),
        )])
    );
}

#[test]
fn trailing_separator_is_tolerated() {
    assert_eq!(
        parse(br#"["x",]"#),
        Ok(Value::Array(vec![Value::String("x".into())]))
    );
    assert_eq!(
        parse(br#"{"a":"b",}"#),
        Ok(Value::Object(vec![member("a", Value::String("b".into()))]))
    );
}

#[test]
fn deep_nesting_has_no_fixed_cap() {
    const DEPTH: usize = 1000;
    let mut doc = vec![b'['; DEPTH];
    doc.extend_from_slice(b"\"x\"");
    doc.extend(vec![b']'; DEPTH]);

    let mut v = parse(&doc).unwrap();
    let mut depth = 0;
    loop {
        match v {
            Value::Array(mut inner) => {
                assert_eq!(inner.len(), 1);
                v = inner.pop().unwrap();
                depth += 1;
            }
            Value::String(s) => {
                assert_eq!(s, "x");
                break;
            }
            other => panic!("unexpected node {other:?}"),
        }
    }
    assert_eq!(depth, DEPTH);
}

#[test]
fn accessors_on_parsed_tree() {
    let v = parse(br#"{"s": "1", "a": ["x"], "b": true, "n": null}"#).unwrap();
    assert_eq!(v.get(b"s").and_then(Value::as_str), Some(BStr::new("1")));
    assert_eq!(
        v.get(b"a").and_then(Value::as_array).map(<[Value]>::len),
        Some(1)
    );
    assert_eq!(v.get(b"b").and_then(Value::as_bool), Some(true));
    assert!(v.get(b"n").is_some_and(Value::is_null));
    assert_eq!(v.get(b"missing"), None);
}
