mod common;

use common::FloatRecord;
use json_joy_nullable::{decode_into, DecodeError, NullableFloat};

struct Case {
    name: &'static str,
    input: &'static str,
    expect: NullableFloat,
    expect_mismatch: bool,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "null value",
            input: r#"{"value":null}"#,
            expect: NullableFloat::null(),
            expect_mismatch: false,
        },
        Case {
            name: "valid value",
            input: r#"{"value":1.1}"#,
            expect: NullableFloat::new(1.1),
            expect_mismatch: false,
        },
        Case {
            name: "empty",
            input: "{}",
            expect: NullableFloat::absent(),
            expect_mismatch: false,
        },
        Case {
            name: "unmarshallable",
            input: r#"{"value":"wat"}"#,
            expect: NullableFloat::null(),
            expect_mismatch: true,
        },
        Case {
            name: "object in place of number",
            input: r#"{"value":{"n":1}}"#,
            expect: NullableFloat::null(),
            expect_mismatch: true,
        },
        Case {
            name: "integer literal",
            input: r#"{"value":42}"#,
            expect: NullableFloat::new(42.0),
            expect_mismatch: false,
        },
        Case {
            name: "whitespace around null",
            input: "{ \"value\" :\n null }",
            expect: NullableFloat::null(),
            expect_mismatch: false,
        },
    ]
}

#[test]
fn nullable_float_decode_matrix() {
    for case in cases() {
        let mut record = FloatRecord::default();
        let result = decode_into(case.input.as_bytes(), &mut record);

        match (&result, case.expect_mismatch) {
            (Ok(()), false) => {}
            (Err(DecodeError::Field { field, source }), true) => {
                assert_eq!(field, "value", "{}", case.name);
                assert_eq!(source.expected, "number", "{}", case.name);
            }
            _ => panic!("{}: unexpected decode result {result:?}", case.name),
        }

        assert_eq!(record.value, case.expect, "{}", case.name);
    }
}

#[test]
fn mismatch_error_carries_fragment() {
    let mut record = FloatRecord::default();
    let err = decode_into(br#"{"value": "wat" }"#, &mut record).unwrap_err();
    let mismatch = err.as_type_mismatch().expect("type mismatch");
    assert_eq!(mismatch.fragment, "\"wat\"");
    assert_eq!(
        err.to_string(),
        "field `value`: type mismatch: expected number, got \"wat\""
    );
}

#[test]
fn duplicate_key_last_occurrence_wins() {
    let mut record = FloatRecord::default();
    decode_into(br#"{"value":"wat","value":2.5}"#, &mut record).unwrap_err();
    assert_eq!(record.value, NullableFloat::new(2.5));

    let mut record = FloatRecord::default();
    decode_into(br#"{"value":2.5,"value":null}"#, &mut record).unwrap();
    assert_eq!(record.value, NullableFloat::null());
}

#[test]
fn top_level_null_leaves_field_absent() {
    let mut record = FloatRecord::default();
    decode_into(b"null", &mut record).unwrap();
    assert!(record.value.is_absent());
}

#[test]
fn non_object_input_is_rejected() {
    let mut record = FloatRecord::default();
    let err = decode_into(b"[1.1]", &mut record).unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { found: "array" }));
    assert!(record.value.is_absent());
}
