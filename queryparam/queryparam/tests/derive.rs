extern crate alloc;

use queryparam::{
    Binding, DecodeError, FieldKind, QueryString, Record, RecordType, ScalarKind, decode,
};

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct NestedOut {
    #[query("nested_val")]
    pub nested: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Out {
    #[query("str_val")]
    pub str_val: String,
    #[query("int_val")]
    pub int_val: i64,
    #[query("bool_val")]
    pub bool_val: bool,
    #[query("str_slice_val")]
    pub str_slice_val: Vec<String>,
    #[query("int_slice_val")]
    pub int_slice_val: Vec<i32>,
    #[query("bool_slice_val")]
    pub bool_slice_val: Vec<bool>,
    #[query("-")]
    pub ignored_nest_val: NestedOut,
    pub nest_val: NestedOut,
}

#[derive(Debug, Default, Record)]
pub struct WithPrivate {
    #[query("visible")]
    pub visible: String,
    hidden: i32,
}

#[derive(Debug, Default, Record)]
pub struct Unsupported {
    #[query("ratio")]
    pub ratio: f64,
    #[query("maybe")]
    pub maybe: Option<String>,
    #[query("refs")]
    pub refs: Vec<NestedOut>,
    #[query("")]
    pub unbound: String,
    #[query("type")]
    pub r#type: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Mode {
    #[default]
    Fast,
    Slow,
}

/// Not a record: no derive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Stamp {
    pub secs: u64,
}

#[derive(Debug, Default, Record)]
pub struct WithForeignTypes {
    #[query("name")]
    pub name: String,
    #[query("-")]
    pub skipped_mode: Mode,
    pub unbound_mode: Mode,
    #[query("mode")]
    pub bound_mode: Mode,
    #[query("stamp")]
    pub stamp: Stamp,
}

#[derive(Debug, Default, Record)]
pub struct EdgeTypes {
    #[query("grid")]
    pub grid: Vec<Vec<String>>,
    #[query("bytes")]
    pub bytes: [u8; 4],
    #[query("text")]
    pub text: std::string::String,
    #[query("ids")]
    pub ids: alloc::vec::Vec<u8>,
    #[query("scoped")]
    pub(crate) scoped: u16,
}

#[derive(Debug, Default, Record)]
pub struct Duplicates {
    #[query("k")]
    pub first: String,
    #[query("k")]
    pub second: String,
}

#[derive(Debug, Default, Record)]
pub struct Deep {
    pub out: Out,
}

struct Case {
    name: &'static str,
    params: &'static str,
    start: Out,
    want: Option<Out>,
}

fn out() -> Out {
    Out::default()
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "empty param",
            params: "",
            start: Out {
                str_val: "abc".into(),
                ..out()
            },
            want: Some(Out {
                str_val: "abc".into(),
                ..out()
            }),
        },
        Case {
            name: "string value",
            params: "?str_val=abc",
            start: out(),
            want: Some(Out {
                str_val: "abc".into(),
                ..out()
            }),
        },
        Case {
            name: "int value",
            params: "?int_val=123",
            start: out(),
            want: Some(Out {
                int_val: 123,
                ..out()
            }),
        },
        Case {
            name: "int value (N/A)",
            params: "?int_val=abc",
            start: out(),
            want: None,
        },
        Case {
            name: "bool value(true)",
            params: "?bool_val=true",
            start: out(),
            want: Some(Out {
                bool_val: true,
                ..out()
            }),
        },
        Case {
            name: "bool value(false)",
            params: "?bool_val=false",
            start: Out {
                bool_val: true,
                ..out()
            },
            want: Some(out()),
        },
        Case {
            name: "bool value(malformed)",
            params: "?bool_val=ABC",
            start: Out {
                bool_val: true,
                ..out()
            },
            want: Some(out()),
        },
        Case {
            name: "bool value(empty)",
            params: "",
            start: Out {
                bool_val: true,
                ..out()
            },
            want: Some(Out {
                bool_val: true,
                ..out()
            }),
        },
        Case {
            name: "override default string value",
            params: "?str_val=ABC",
            start: Out {
                str_val: "abc".into(),
                ..out()
            },
            want: Some(Out {
                str_val: "ABC".into(),
                ..out()
            }),
        },
        Case {
            name: "struct value",
            params: "?nested_val=abc",
            start: out(),
            want: Some(Out {
                nest_val: NestedOut {
                    nested: "abc".into(),
                },
                ..out()
            }),
        },
        Case {
            name: "string slice value",
            params: "?str_slice_val=a,b,c",
            start: out(),
            want: Some(Out {
                str_slice_val: vec!["a".into(), "b".into(), "c".into()],
                ..out()
            }),
        },
        Case {
            name: "int slice value",
            params: "?int_slice_val=1,2,3",
            start: out(),
            want: Some(Out {
                int_slice_val: vec![1, 2, 3],
                ..out()
            }),
        },
        Case {
            name: "int slice value(N/A)",
            params: "?int_slice_val=a,b,c",
            start: out(),
            want: None,
        },
        Case {
            name: "bool slice value",
            params: "?bool_slice_val=true,false,ABC",
            start: out(),
            want: Some(Out {
                bool_slice_val: vec![true, false, false],
                ..out()
            }),
        },
    ]
}

#[test]
fn decodes_query_table() {
    for case in cases() {
        let mut actual = case.start.clone();
        let result = decode(&mut actual, &QueryString::parse(case.params));

        match (result, case.want) {
            (Ok(()), Some(want)) => assert_eq!(actual, want, "case '{}'", case.name),
            (Err(err), None) => {
                assert!(
                    matches!(err, DecodeError::Coercion { .. }),
                    "case '{}': unexpected error {err:?}",
                    case.name
                );
            }
            (Ok(()), None) => panic!("case '{}': expected an error", case.name),
            (Err(err), Some(_)) => panic!("case '{}': unexpected error {err}", case.name),
        }
    }
}

#[test]
fn derived_schema_describes_fields_in_order() {
    let schema = Out::SCHEMA;
    assert_eq!(schema.name, "Out");

    let names: Vec<&str> = schema.fields.iter().map(|field| field.name).collect();
    assert_eq!(
        names,
        [
            "str_val",
            "int_val",
            "bool_val",
            "str_slice_val",
            "int_slice_val",
            "bool_slice_val",
            "ignored_nest_val",
            "nest_val",
        ]
    );

    let fields = schema.fields;
    assert_eq!(fields[1].kind, FieldKind::Scalar(ScalarKind::Int));
    assert_eq!(fields[4].kind, FieldKind::List(ScalarKind::Int));
    assert_eq!(fields[6].binding, Binding::Skip);
    assert_eq!(fields[7].binding, Binding::Unbound);
    assert_eq!(fields[7].kind, FieldKind::Record(NestedOut::SCHEMA));
    assert!(fields.iter().all(|field| field.assignable));

    let instance = Out::default();
    assert_eq!(instance.schema(), Out::SCHEMA);
}

#[test]
fn private_field_is_not_assignable() {
    let mut record = WithPrivate::default();
    let err = decode(&mut record, &[("visible", "yes")]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::FieldNotAssignable {
            record: "WithPrivate",
            field: "hidden",
        }
    );
    assert_eq!(record.visible, "yes");
    assert_eq!(record.hidden, 0);
}

#[test]
fn unsupported_types_are_left_untouched() -> Result<(), DecodeError> {
    let mut record = Unsupported {
        ratio: 0.5,
        ..Default::default()
    };
    let params = [
        ("ratio", "1.5"),
        ("maybe", "x"),
        ("refs", "a,b"),
        ("unbound", "u"),
        ("type", "kind"),
    ];
    decode(&mut record, &params)?;

    assert_eq!(record.ratio, 0.5);
    assert_eq!(record.maybe, None);
    assert!(record.refs.is_empty());
    assert_eq!(record.unbound, "");
    assert_eq!(record.r#type, "kind");

    let fields = Unsupported::SCHEMA.fields;
    assert_eq!(fields[0].kind, FieldKind::Unsupported("f64"));
    assert_eq!(fields[1].kind, FieldKind::Unsupported("Option<String>"));
    assert_eq!(fields[2].kind, FieldKind::Unsupported("Vec<NestedOut>"));
    assert_eq!(fields[4].name, "type");
    Ok(())
}

#[test]
fn non_record_path_types_are_left_untouched() -> Result<(), DecodeError> {
    let mut record = WithForeignTypes {
        skipped_mode: Mode::Slow,
        unbound_mode: Mode::Slow,
        bound_mode: Mode::Slow,
        stamp: Stamp { secs: 7 },
        ..Default::default()
    };
    let params = [
        ("name", "n"),
        ("mode", "Fast"),
        ("skipped_mode", "Fast"),
        ("unbound_mode", "Fast"),
        ("stamp", "1"),
        ("secs", "1"),
    ];
    decode(&mut record, &params)?;

    assert_eq!(record.name, "n");
    assert_eq!(record.skipped_mode, Mode::Slow);
    assert_eq!(record.unbound_mode, Mode::Slow);
    assert_eq!(record.bound_mode, Mode::Slow);
    assert_eq!(record.stamp, Stamp { secs: 7 });

    let fields = WithForeignTypes::SCHEMA.fields;
    assert_eq!(fields[1].kind, FieldKind::Unsupported("Mode"));
    assert_eq!(fields[1].binding, Binding::Skip);
    assert_eq!(fields[2].kind, FieldKind::Unsupported("Mode"));
    assert_eq!(fields[3].kind, FieldKind::Unsupported("Mode"));
    assert_eq!(fields[4].kind, FieldKind::Unsupported("Stamp"));
    Ok(())
}

#[test]
fn edge_types_classify_by_their_last_path_segment() -> Result<(), DecodeError> {
    let fields = EdgeTypes::SCHEMA.fields;
    assert_eq!(fields[0].kind, FieldKind::Unsupported("Vec<Vec<String>>"));
    assert_eq!(fields[1].kind, FieldKind::Unsupported("[u8;4]"));
    assert_eq!(fields[2].kind, FieldKind::Scalar(ScalarKind::Text));
    assert_eq!(fields[3].kind, FieldKind::List(ScalarKind::Int));
    assert_eq!(fields[4].kind, FieldKind::Scalar(ScalarKind::Int));
    assert!(fields.iter().all(|field| field.assignable));

    let mut record = EdgeTypes::default();
    let params = [
        ("grid", "a,b"),
        ("bytes", "1,2,3,4"),
        ("text", "t"),
        ("ids", "1,2"),
        ("scoped", "9"),
    ];
    decode(&mut record, &params)?;

    assert!(record.grid.is_empty());
    assert_eq!(record.bytes, [0; 4]);
    assert_eq!(record.text, "t");
    assert_eq!(record.ids, [1, 2]);
    assert_eq!(record.scoped, 9);
    Ok(())
}

#[test]
fn duplicate_keys_bind_every_field() -> Result<(), DecodeError> {
    let mut record = Duplicates::default();
    decode(&mut record, &[("k", "v")])?;
    assert_eq!(record.first, "v");
    assert_eq!(record.second, "v");
    Ok(())
}

#[test]
fn nested_coercion_error_keeps_its_path() {
    let mut record = Deep::default();
    let err = decode(&mut record, &QueryString::parse("int_slice_val=1,x")).unwrap_err();
    assert_eq!(err.field_path(), ["out", "int_slice_val"]);
    assert!(matches!(
        err.root_cause(),
        DecodeError::Coercion { key: "int_slice_val", .. }
    ));
}
