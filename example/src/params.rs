use fbwire::{Config, Json, Params, ProtocolVersion};
use serde::Serialize;
use time::macros::datetime;

use crate::hex;

#[derive(Serialize)]
struct Tag {
    name: &'static str,
    weight: f32,
}

pub fn main(config: &Config) {
    let params = Params::new()
        .bind(420)
        .bind("Foo")
        .bind(None::<i64>)
        .bind(true)
        .bind(datetime!(2025-04-01 12:30:15.5))
        // no float encoding, sent as text
        .bind(1.5f64)
        .bind(Json(Tag { name: "blr", weight: 0.5 }))
        // truncated, logged as warning
        .bind(i64::MAX);

    for version in [ProtocolVersion::V12, config.protocol()] {
        let encoded = params.encode(version);
        tracing::info!(
            %version,
            blr = %hex(&encoded.blr),
            values = %hex(&encoded.values),
            "params"
        );
    }
}
