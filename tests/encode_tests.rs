use chrono::{DateTime, TimeZone, Utc};
use header_fields::{
    encode, encode_with_options, headers, record_value, EncodeOptions, Error, FieldDescriptor,
    Fields, HeaderMap, Record,
};
use num_bigint::BigInt;

fn time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 34, 56).unwrap()
}

#[derive(Default)]
struct Primitives {
    a: String,
    b: i32,
    c: u32,
    d: f32,
    e: bool,
}

impl Record for Primitives {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("A", &self.a)
            .field("B", &self.b)
            .field("C", &self.c)
            .field("D", &self.d)
            .field("E", &self.e);
    }
}

struct Pointers {
    a: Option<String>,
    b: Option<i64>,
    c: Option<Option<String>>,
    d: Option<Box<String>>,
}

impl Record for Pointers {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("A", &self.a)
            .field("B", &self.b)
            .field("C", &self.c)
            .field("D", &self.d);
    }
}

struct OtherTypes {
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    c: bool,
    d: bool,
}

impl Record for OtherTypes {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("A", &self.a)
            .tagged("B", ",unix", &self.b)
            .tagged("C", ",int", &self.c)
            .tagged("D", ",int", &self.d);
    }
}

#[derive(Default)]
struct OmitEmpty {
    hidden: String,
    a: String,
    b: String,
    c: String,
    d: String,
    e: Option<String>,
}

impl Record for OmitEmpty {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .private("a", &self.hidden)
            .field("A", &self.a)
            .tagged("B", ",omitempty", &self.b)
            .tagged("C", "-", &self.c)
            .tagged("D", "omitempty", &self.d)
            .tagged("E", ",omitempty", &self.e);
    }
}

record_value!(Primitives, Pointers, OtherTypes, OmitEmpty);

#[test]
fn test_basic_primitives() {
    let map = encode(&Primitives::default()).unwrap();
    assert_eq!(
        map,
        headers! {
            "A" => "",
            "B" => "0",
            "C" => "0",
            "D" => "0",
            "E" => "false",
        }
    );
}

#[test]
fn test_primitive_values() {
    let map = encode(&Primitives {
        a: "string".to_string(),
        b: -12,
        c: 7,
        d: 2.5,
        e: true,
    })
    .unwrap();
    assert_eq!(
        map,
        headers! {
            "A" => "string",
            "B" => "-12",
            "C" => "7",
            "D" => "2.5",
            "E" => "true",
        }
    );
}

#[test]
fn test_pointers() {
    let map = encode(&Pointers {
        a: Some("string".to_string()),
        b: None,
        c: Some(Some("string".to_string())),
        d: Some(Box::new("boxed".to_string())),
    })
    .unwrap();
    assert_eq!(
        map,
        headers! {
            "A" => "string",
            "B" => "",
            "C" => "string",
            "D" => "boxed",
        }
    );
}

#[test]
fn test_nil_inside_chain_is_present() {
    let map = encode(&Pointers {
        a: None,
        b: Some(0),
        c: Some(None),
        d: None,
    })
    .unwrap();
    assert_eq!(
        map,
        headers! { "A" => "", "B" => "0", "C" => "", "D" => "" }
    );
}

#[test]
fn test_other_types() {
    let map = encode(&OtherTypes {
        a: time(),
        b: time(),
        c: true,
        d: false,
    })
    .unwrap();
    assert_eq!(
        map,
        headers! {
            "A" => "2000-01-01T12:34:56Z",
            "B" => "946730096",
            "C" => "1",
            "D" => "0",
        }
    );
}

#[test]
fn test_nil_input() {
    assert_eq!(encode(&None::<Primitives>).unwrap(), HeaderMap::new());
    assert_eq!(encode(&()).unwrap(), HeaderMap::new());
}

#[test]
fn test_omit_empty() {
    let map = encode(&OmitEmpty {
        e: Some(String::new()),
        ..Default::default()
    })
    .unwrap();
    // E is kept: the reference is set even though the string it points to is empty
    assert_eq!(
        map,
        headers! {
            "A" => "",
            "Omitempty" => "",
            "E" => "",
        }
    );
}

#[test]
fn test_omit_empty_nil_reference() {
    let map = encode(&OmitEmpty::default()).unwrap();
    assert_eq!(map, headers! { "A" => "", "Omitempty" => "" });
}

#[test]
fn test_omit_empty_keeps_non_zero() {
    let map = encode(&OmitEmpty {
        hidden: "secret".to_string(),
        b: "b".to_string(),
        c: "c".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(map.get("B"), Some("b"));
    assert!(!map.contains_key("C"));
    assert!(map.iter().all(|(_, values)| values.iter().all(|v| v != "secret")));
}

#[test]
fn test_invalid_input() {
    let err = encode("").unwrap_err();
    assert!(matches!(err, Error::InvalidInputKind { kind: "string" }));
    assert!(encode(&42u8).is_err());
    assert!(encode(&Some(true)).is_err());
}

// Embedding

#[derive(Default)]
struct B {
    c: String,
}

struct A {
    b: B,
}

struct D {
    b: B,
    c: String,
}

struct E {
    b: B,
    c: String,
}

struct F {
    e: E,
}

struct G {
    b: Option<B>,
    x: String,
}

struct H {
    b: B,
    x: String,
}

impl Record for B {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.field("C", &self.c);
    }
}

impl Record for A {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.embed("B", &self.b);
    }
}

impl Record for D {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.embed("B", &self.b).field("C", &self.c);
    }
}

impl Record for E {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.embed("B", &self.b).field("C", &self.c);
    }
}

impl Record for F {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.embed_private("e", &self.e);
    }
}

impl Record for G {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.embed("B", &self.b).field("X", &self.x);
    }
}

impl Record for H {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .push(FieldDescriptor::new("B").embedded().with_tag("-"), &self.b)
            .field("X", &self.x);
    }
}

record_value!(A, B, D, E, F, G, H);

fn b(c: &str) -> B {
    B { c: c.to_string() }
}

#[test]
fn test_embedded_struct_is_flattened() {
    let map = encode(&A { b: b("foo") }).unwrap();
    assert_eq!(map, headers! { "C" => "foo" });
}

#[test]
fn test_shallower_field_wins() {
    let map = encode(&D {
        b: b("deep"),
        c: "shallow".to_string(),
    })
    .unwrap();
    assert_eq!(map, headers! { "C" => "shallow" });
}

#[test]
fn test_unexported_embedding_is_entered() {
    let map = encode(&F {
        e: E {
            b: b("deep"),
            c: "middle".to_string(),
        },
    })
    .unwrap();
    assert_eq!(map, headers! { "C" => "middle" });
}

#[test]
fn test_embedded_reference() {
    let map = encode(&G {
        b: Some(b("foo")),
        x: "x".to_string(),
    })
    .unwrap();
    assert_eq!(map, headers! { "C" => "foo", "X" => "x" });

    let map = encode(&G {
        b: None,
        x: "x".to_string(),
    })
    .unwrap();
    assert_eq!(map, headers! { "X" => "x" });
}

#[test]
fn test_skipped_embedding() {
    let map = encode(&H {
        b: b("foo"),
        x: "x".to_string(),
    })
    .unwrap();
    assert_eq!(map, headers! { "X" => "x" });
}

// Naming and keys

struct Named {
    request_id: String,
    lower: String,
    upper: String,
    dash: String,
    extra: bool,
}

impl Record for Named {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("RequestId", "x-request-id", &self.request_id)
            .tagged("Lower", "dup", &self.lower)
            .tagged("Upper", "DUP", &self.upper)
            .tagged("Dash", "-,", &self.dash)
            .tagged("Extra", ",int,omitempty,whatever", &self.extra);
    }
}

record_value!(Named);

fn named() -> Named {
    Named {
        request_id: "abc".to_string(),
        lower: "first".to_string(),
        upper: "second".to_string(),
        dash: "dash".to_string(),
        extra: true,
    }
}

#[test]
fn test_keys_are_canonicalized_and_overwritten() {
    let map = encode(&named()).unwrap();
    assert_eq!(
        map,
        headers! {
            "X-Request-Id" => "abc",
            "Dup" => "second",
            "-" => "dash",
            "Extra" => "1",
        }
    );
}

#[test]
fn test_raw_keys_option() {
    let map = encode_with_options(&named(), EncodeOptions::new().with_canonical_keys(false)).unwrap();
    assert_eq!(map.get("x-request-id"), Some("abc"));
    assert_eq!(map.get("dup"), Some("first"));
    assert_eq!(map.get("DUP"), Some("second"));
}

#[test]
fn test_unknown_options_are_ignored() {
    let mut record = named();
    record.extra = false;
    let map = encode(&record).unwrap();
    assert!(!map.contains_key("Extra"));
}

struct SameKey {
    first: String,
    second: String,
}

impl Record for SameKey {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("First", "a,omitempty", &self.first)
            .tagged("Second", "A,omitempty", &self.second);
    }
}

struct SameKeySkipped {
    a: String,
    b: String,
    c: String,
}

impl Record for SameKeySkipped {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("A", &self.a)
            .tagged("B", "-", &self.b)
            .private("a", &self.c);
    }
}

record_value!(SameKey, SameKeySkipped);

fn same_key(first: &str, second: &str) -> SameKey {
    SameKey {
        first: first.to_string(),
        second: second.to_string(),
    }
}

#[test]
fn test_omitted_field_keeps_earlier_value() {
    let map = encode(&same_key("x", "")).unwrap();
    assert_eq!(map, headers! { "A" => "x" });
}

#[test]
fn test_later_value_replaces_omitted_field() {
    let map = encode(&same_key("", "y")).unwrap();
    assert_eq!(map, headers! { "A" => "y" });
}

#[test]
fn test_same_key_both_present_and_both_omitted() {
    assert_eq!(encode(&same_key("x", "y")).unwrap(), headers! { "A" => "y" });
    assert!(encode(&same_key("", "")).unwrap().is_empty());
}

#[test]
fn test_skipped_fields_do_not_touch_same_key() {
    let map = encode(&SameKeySkipped {
        a: "x".to_string(),
        b: "skipped".to_string(),
        c: "private".to_string(),
    })
    .unwrap();
    assert_eq!(map, headers! { "A" => "x" });
}

// Values beyond the basic scalars

struct Floats {
    large: f64,
    small: f64,
    plain: f32,
}

impl Record for Floats {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("Large", &self.large)
            .field("Small", &self.small)
            .field("Plain", &self.plain);
    }
}

struct Borrowed<'s> {
    text: &'s str,
    owned: String,
}

impl Record for Borrowed<'_> {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("Text", ",omitempty", &self.text)
            .tagged("Owned", ",omitempty", &self.owned);
    }
}

record_value!(Floats, Borrowed<'_>);

#[test]
fn test_float_magnitudes() {
    let map = encode(&Floats {
        large: 1e21,
        small: 1e-7,
        plain: 0.25,
    })
    .unwrap();
    assert_eq!(
        map,
        headers! { "Large" => "1e+21", "Small" => "1e-07", "Plain" => "0.25" }
    );
}

#[test]
fn test_borrowed_str_is_a_reference() {
    let map = encode(&Borrowed {
        text: "",
        owned: String::new(),
    })
    .unwrap();
    // a borrowed field is never zero; owned text is
    assert_eq!(map, headers! { "Text" => "" });
}


struct Inner {
    a: String,
    b: Option<u8>,
}

struct Wide {
    big: BigInt,
    huge: u128,
    small: i8,
    letter: char,
    sent: DateTime<Utc>,
    inner: Inner,
}

impl Record for Inner {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields.field("A", &self.a).field("B", &self.b);
    }
}

impl Record for Wide {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .field("Big", &self.big)
            .field("Huge", &self.huge)
            .field("Small", &self.small)
            .tagged("Letter", ",omitempty", &self.letter)
            .tagged("Sent", ",omitempty", &self.sent)
            .tagged("Inner", ",omitempty", &self.inner);
    }
}

record_value!(Inner, Wide);

#[test]
fn test_wide_values() {
    let map = encode(&Wide {
        big: "123456789012345678901234567890".parse().unwrap(),
        huge: u128::MAX,
        small: -128,
        letter: 'z',
        sent: time(),
        inner: Inner {
            a: "x".to_string(),
            b: None,
        },
    })
    .unwrap();
    assert_eq!(
        map,
        headers! {
            "Big" => "123456789012345678901234567890",
            "Huge" => "340282366920938463463374607431768211455",
            "Small" => "-128",
            "Letter" => "z",
            "Sent" => "2000-01-01T12:34:56Z",
            "Inner" => "{x <nil>}",
        }
    );
}

#[test]
fn test_zero_wide_values_are_omitted() {
    let map = encode(&Wide {
        big: BigInt::from(0),
        huge: 0,
        small: 0,
        letter: '\0',
        sent: DateTime::<Utc>::default(),
        inner: Inner {
            a: String::new(),
            b: None,
        },
    })
    .unwrap();
    assert_eq!(map, headers! { "Big" => "0", "Huge" => "0", "Small" => "0" });
}

#[test]
fn test_nil_value_option() {
    let options = EncodeOptions::new().with_nil_value("none");
    let map = encode_with_options(
        &Pointers {
            a: None,
            b: None,
            c: Some(None),
            d: Some(Box::new("d".to_string())),
        },
        options,
    )
    .unwrap();
    assert_eq!(
        map,
        headers! { "A" => "none", "B" => "none", "C" => "none", "D" => "d" }
    );
}

#[test]
fn test_output_is_serializable() {
    let map = encode(&Primitives::default()).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(
        json,
        r#"{"A":[""],"B":["0"],"C":["0"],"D":["0"],"E":["false"]}"#
    );
}
