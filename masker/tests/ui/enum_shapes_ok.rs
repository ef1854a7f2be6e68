use masker::{Maskable, Masker};
use serde::Serialize;

#[derive(Maskable, Serialize)]
enum Event {
    Login {
        user: String,
        #[tags(mask)]
        password: String,
    },
    Transfer(#[tags(mask)] Vec<i64>, String),
    Logout,
}

#[derive(Maskable)]
enum Never {}

fn main() {
    let masker = Masker::default();
    let mut event = Event::Transfer(vec![10, 20], "eur".into());
    let _ = masker.to_json(&mut event);
    let _ = masker.to_json(&mut Event::Logout);
    let _ = masker.to_json(&mut Event::Login {
        user: "ada".into(),
        password: "pw".into(),
    });

    fn assert_maskable<T: Maskable>() {}
    assert_maskable::<Never>();
}
