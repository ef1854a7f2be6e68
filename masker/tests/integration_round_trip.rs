//! Tests for the restore half of masking: whatever happens during encoding, the
//! record leaves the call exactly as it entered.

use std::{collections::BTreeMap, marker::PhantomData, rc::Rc};

use masker::{Field, Leaf, LeafKind, MaskError, Maskable, Masker, Node, PLACEHOLDER};
use serde::Serialize;

mod shapes {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    enum Credential {
        Password {
            user: String,
            #[tags(mask)]
            secret: String,
        },
        Token(#[tags(mask)] String, i32),
        Anonymous,
    }

    #[test]
    fn enum_variants_are_records() {
        let masker = Masker::default();

        let mut password = Credential::Password {
            user: "ada".into(),
            secret: "hunter2".into(),
        };
        assert_eq!(
            masker.to_json(&mut password).unwrap(),
            r#"{"Password":{"user":"ada","secret":"********"}}"#
        );

        let mut token = Credential::Token("tok".into(), 7);
        assert_eq!(
            masker.to_json(&mut token).unwrap(),
            r#"{"Token":["********",7]}"#
        );
        assert_eq!(token, Credential::Token("tok".into(), 7));

        let mut anonymous = Credential::Anonymous;
        assert_eq!(masker.to_json(&mut anonymous).unwrap(), r#""Anonymous""#);
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    struct Pin(#[tags(mask)] i32, String);

    #[test]
    fn tuple_struct_fields_are_named_by_index() {
        let mut pin = Pin(1234, "card".into());
        let Node::Record(fields) = pin.mask_node() else {
            panic!("expected a record");
        };
        let names: Vec<_> = fields.iter().map(|field| field.name()).collect();
        assert_eq!(names, ["0", "1"]);
        assert_eq!(fields[0].tags(), ["mask"]);

        assert_eq!(Masker::default().to_json(&mut pin).unwrap(), r#"[0,"card"]"#);
        assert_eq!(pin, Pin(1234, "card".into()));
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    struct Envelope<T, K> {
        id: i32,
        #[tags(mask)]
        body: T,
        #[serde(skip)]
        _kind: PhantomData<K>,
    }

    // Not Maskable; only used through PhantomData.
    #[derive(Clone, Debug, PartialEq)]
    struct Kind;

    #[test]
    fn generic_fields_are_walked() {
        let mut envelope = Envelope::<Vec<String>, Kind> {
            id: 3,
            body: vec!["a".into(), "b".into()],
            _kind: PhantomData,
        };
        let json = Masker::default().to_json(&mut envelope).unwrap();
        assert_eq!(json, r#"{"id":3,"body":["********","********"]}"#);
        assert_eq!(envelope.body, ["a", "b"]);
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    struct Marker;

    #[test]
    fn unit_struct_is_an_empty_record() {
        let mut marker = Marker;
        assert!(matches!(marker.mask_node(), Node::Record(fields) if fields.is_empty()));
        assert_eq!(Masker::default().to_json(&mut marker).unwrap(), "null");
    }

    #[test]
    fn raw_identifiers_keep_their_plain_name() {
        #[derive(Serialize, Maskable)]
        struct Item {
            #[tags(mask)]
            r#type: String,
        }

        let mut item = Item {
            r#type: "secret".into(),
        };
        let Node::Record(fields) = item.mask_node() else {
            panic!("expected a record");
        };
        assert_eq!(fields[0].name(), "type");
        drop(fields);
        assert_eq!(
            Masker::default().to_json(&mut item).unwrap(),
            r#"{"type":"********"}"#
        );
    }
}

mod floats {
    use super::*;

    #[derive(Clone, Debug, Serialize, Maskable)]
    struct Reading {
        #[tags(mask)]
        value: f64,
        #[tags(mask)]
        offset: f32,
    }

    #[test]
    fn restores_bit_patterns() {
        let nan = f64::from_bits(0x7ff8_0000_0000_beef);
        let mut reading = Reading {
            value: nan,
            offset: -0.0,
        };
        let json = Masker::default().to_json(&mut reading).unwrap();
        assert_eq!(json, r#"{"value":0.0,"offset":0.0}"#);
        assert_eq!(reading.value.to_bits(), nan.to_bits());
        assert_eq!(reading.offset.to_bits(), (-0.0_f32).to_bits());
    }
}

mod failures {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    struct Report {
        #[tags(mask)]
        owner: String,
        #[opaque]
        grid: BTreeMap<(i32, i32), i32>,
    }

    fn report() -> Report {
        Report {
            owner: "ada".into(),
            grid: BTreeMap::from([((0, 0), 1)]),
        }
    }

    #[test]
    fn codec_failure_still_restores() {
        let mut report = report();
        let err = Masker::default().to_json(&mut report).unwrap_err();
        assert!(matches!(
            err,
            MaskError::SerializationFailed { format: "json", .. }
        ));
        assert_eq!(report, self::report());
    }

    #[test]
    fn lossy_variant_returns_empty_string() {
        let mut report = report();
        assert_eq!(Masker::default().to_json_lossy(&mut report), "");
        assert_eq!(report, self::report());
    }

    /// Reports a different shape on every call.
    #[derive(Serialize)]
    struct Shifty {
        #[serde(skip)]
        calls: u8,
        text: String,
        number: i32,
    }

    impl Maskable for Shifty {
        fn mask_node(&mut self) -> Node<'_> {
            self.calls += 1;
            let node = if self.calls == 1 {
                Node::Leaf(Leaf::Text(&mut self.text))
            } else {
                Node::Leaf(Leaf::I32(&mut self.number))
            };
            Node::Record(vec![Field::new("value", &["mask"], node)])
        }
    }

    #[test]
    fn shape_change_between_passes_is_reported() {
        let mut shifty = Shifty {
            calls: 0,
            text: "t".into(),
            number: 1,
        };
        let err = Masker::default().to_json(&mut shifty).unwrap_err();
        match err {
            MaskError::LedgerMismatch {
                position,
                expected,
                found,
            } => {
                assert_eq!(position, 0);
                assert_eq!(expected, LeafKind::I32);
                assert_eq!(found, Some(LeafKind::Text));
            }
            other => panic!("unexpected error: {other}"),
        }
        // The save pass masked `text`; the restore pass never reached it.
        assert_eq!(shifty.text, PLACEHOLDER);
        assert_eq!(shifty.number, 1);
    }
}

mod sharing {
    use super::*;

    #[derive(Clone, Debug, Serialize, Maskable)]
    struct Holder {
        user: String,
        #[tags(mask)]
        secret: Rc<String>,
    }

    #[test]
    fn marked_shared_pointer_fails_closed() {
        let secret = Rc::new(String::from("hunter2"));
        let mut holder = Holder {
            user: "ada".into(),
            secret: Rc::clone(&secret),
        };
        let err = Masker::default().to_json(&mut holder).unwrap_err();
        assert!(matches!(err, MaskError::SharedPointer { field: "secret" }));
        assert_eq!(holder.user, "ada");
        assert_eq!(*secret, "hunter2");
        assert!(Rc::ptr_eq(&holder.secret, &secret));
    }

    #[derive(Clone, Debug, Serialize, Maskable)]
    struct Twins {
        #[tags(mask)]
        a: Rc<String>,
        b: Rc<String>,
    }

    #[test]
    fn pointer_shared_within_the_record_fails_closed() {
        let value = Rc::new(String::from("hunter2"));
        let mut twins = Twins {
            a: Rc::clone(&value),
            b: value,
        };
        let err = Masker::default().to_json(&mut twins).unwrap_err();
        assert!(matches!(err, MaskError::SharedPointer { field: "a" }));
        assert!(Rc::ptr_eq(&twins.a, &twins.b));
    }

    #[derive(Clone, Debug, Serialize, Maskable)]
    struct Team {
        lead: Rc<Holder>,
    }

    #[test]
    fn tagged_fields_inside_shared_record_fail_closed() {
        let lead = Rc::new(Holder {
            user: "ada".into(),
            secret: Rc::new(String::from("hunter2")),
        });
        let mut team = Team {
            lead: Rc::clone(&lead),
        };
        let err = Masker::default().to_json(&mut team).unwrap_err();
        assert!(matches!(err, MaskError::SharedPointer { field: "lead" }));
    }

    #[test]
    fn unmarked_shared_pointer_is_encoded() {
        let value = Rc::new(String::from("public"));
        let mut twins = Twins {
            a: Rc::new(String::new()),
            b: Rc::clone(&value),
        };
        let json = Masker::default().to_json(&mut twins).unwrap();
        assert_eq!(json, r#"{"a":"","b":"public"}"#);
    }

    #[test]
    fn masked_copy_masks_shared_pointers() {
        let holder = Holder {
            user: "ada".into(),
            secret: Rc::new(String::from("hunter2")),
        };
        let copy = Masker::default().masked_copy(&holder);
        assert_eq!(*copy.secret, PLACEHOLDER);
        assert_eq!(copy.user, "ada");
        assert_eq!(*holder.secret, "hunter2");
    }

    #[test]
    fn masked_copy_masks_pointers_shared_within_the_record() {
        let value = Rc::new(String::from("hunter2"));
        let twins = Twins {
            a: Rc::clone(&value),
            b: value,
        };
        let copy = Masker::default().masked_copy(&twins);
        assert_eq!(*copy.a, PLACEHOLDER);
        assert_eq!(*copy.b, "hunter2");
        assert_eq!(*twins.a, "hunter2");
    }

    #[test]
    fn tracing_adapter_logs_masked_shared_pointers() {
        use masker::tracing::TracingMaskedExt;

        let holder = Holder {
            user: "ada".into(),
            secret: Rc::new(String::from("hunter2")),
        };
        let value = holder.tracing_masked(&Masker::default());
        assert_eq!(
            format!("{value:?}"),
            r#"{"user":"ada","secret":"********"}"#
        );
        assert_eq!(*holder.secret, "hunter2");
    }

    #[test]
    fn sole_owner_is_masked() {
        let mut holder = Holder {
            user: "ada".into(),
            secret: Rc::new(String::from("hunter2")),
        };
        let json = Masker::default().to_json(&mut holder).unwrap();
        assert_eq!(json, r#"{"user":"ada","secret":"********"}"#);
        assert_eq!(*holder.secret, "hunter2");
    }
}

mod copies {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Maskable)]
    struct Login {
        user: String,
        #[tags(mask)]
        password: String,
        #[tags(mask)]
        attempts: i64,
    }

    fn login() -> Login {
        Login {
            user: "ada".into(),
            password: "pw".into(),
            attempts: 3,
        }
    }

    #[test]
    fn masked_copy_leaves_original() {
        let original = login();
        let copy = Masker::default().masked_copy(&original);
        assert_eq!(copy.password, PLACEHOLDER);
        assert_eq!(copy.attempts, 0);
        assert_eq!(original, login());
    }

    #[test]
    fn redact_is_permanent() {
        let mut login = login();
        Masker::default().redact(&mut login);
        assert_eq!(login.user, "ada");
        assert_eq!(login.password, PLACEHOLDER);
        assert_eq!(login.attempts, 0);
    }

    #[test]
    fn owned_json_consumes_the_record() {
        let json = Masker::default().to_json_owned(login()).unwrap();
        assert_eq!(json, r#"{"user":"ada","password":"********","attempts":0}"#);
    }

    #[test]
    fn repeated_calls_are_stable() {
        let masker = Masker::default();
        let mut login = login();
        let first = masker.to_json(&mut login).unwrap();
        let second = masker.to_json(&mut login).unwrap();
        assert_eq!(first, second);
        assert_eq!(login, self::login());
    }
}
