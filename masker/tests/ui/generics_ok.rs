use std::{collections::HashMap, marker::PhantomData};

use masker::{Maskable, Masker};
use serde::Serialize;

struct NotMaskable;

#[derive(Maskable, Serialize)]
struct Envelope<T> {
    #[tags(mask)]
    body: T,
}

#[derive(Maskable, Serialize)]
struct TypedId<T> {
    #[tags(mask)]
    id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

#[derive(Maskable, Serialize)]
struct Nested<T, U>
where
    T: Clone,
{
    items: Vec<Option<T>>,
    #[tags(mask)]
    lookup: HashMap<String, U>,
}

fn main() {
    let masker = Masker::default();
    let _ = masker.to_json(&mut Envelope { body: vec![1_i32] });
    let _ = masker.to_json(&mut TypedId::<NotMaskable> {
        id: "x".into(),
        _marker: PhantomData,
    });
    let _ = masker.to_json(&mut Nested::<String, u8> {
        items: vec![Some("a".into())],
        lookup: HashMap::new(),
    });
}
