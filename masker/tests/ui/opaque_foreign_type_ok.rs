use masker::{Maskable, Masker};
use serde::Serialize;

mod foreign {
    #[derive(serde::Serialize)]
    pub struct Coordinates {
        pub lat: f64,
        pub lon: f64,
    }
}

#[derive(Maskable, Serialize)]
struct Visit {
    #[tags(mask)]
    visitor: String,
    #[opaque]
    location: foreign::Coordinates,
}

fn main() {
    let mut visit = Visit {
        visitor: "ada".into(),
        location: foreign::Coordinates { lat: 1.0, lon: 2.0 },
    };
    let _ = Masker::default().to_json(&mut visit);
}
