use masker::{Maskable, Masker};
use serde::Serialize;

#[derive(Maskable, Serialize)]
struct Named {
    plain: String,
    #[tags(mask)]
    secret: String,
    #[tags(mask = "", audit)]
    #[tags(pci)]
    card: Option<i64>,
}

#[derive(Maskable, Serialize)]
struct Tuple(#[tags(mask)] String, i32);

#[derive(Maskable, Serialize)]
struct Unit;

#[derive(Maskable, Serialize)]
struct Empty {}

#[derive(Maskable, Serialize)]
struct Borrowing<'a> {
    #[tags(mask)]
    secret: &'a mut String,
}

fn main() {
    let masker = Masker::default();
    let mut named = Named {
        plain: "a".into(),
        secret: "b".into(),
        card: Some(1),
    };
    let _ = masker.to_json(&mut named);
    let _ = masker.to_json(&mut Tuple("a".into(), 1));
    let _ = masker.to_json(&mut Unit);
    let _ = masker.to_json(&mut Empty {});

    let mut secret = String::from("s");
    let _ = masker.to_json(&mut Borrowing {
        secret: &mut secret,
    });
}
