//! Fuzz target: `http::route` with arbitrary URI and body bytes.
//!
//! Invariants checked:
//! - No panics, including for non-UTF-8 bodies
//! - Status is always one of 200, 400, 404, 500
//! - Anything but `POST /setColor` is a 404
//!
//! cargo fuzz run fuzz_http_route

#![no_main]

use std::sync::Mutex;

use libfuzzer_sys::fuzz_target;
use rgblamp::adapters::http::{COLOR_ROUTE, Method, route};
use rgblamp::app::events::AppEvent;
use rgblamp::app::ports::{ChannelOutput, EventSink};
use rgblamp::app::service::LampService;
use rgblamp::config::LampConfig;
use rgblamp::error::ChannelError;

struct NullChannel;

impl ChannelOutput for NullChannel {
    fn configure(&mut self, _frequency_hz: u32, _resolution_bits: u8) -> Result<(), ChannelError> {
        Ok(())
    }

    fn write(&mut self, _intensity: u8) -> Result<(), ChannelError> {
        Ok(())
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let method = match selector % 5 {
        0 => Method::Get,
        1 => Method::Post,
        2 => Method::Put,
        3 => Method::Delete,
        _ => Method::Other,
    };

    // High bit of the selector picks the colour route, otherwise the
    // first half of the input becomes the URI.
    let (uri, body) = if selector & 0x80 != 0 {
        (COLOR_ROUTE.to_owned(), rest)
    } else {
        let mid = rest.len() / 2;
        (String::from_utf8_lossy(&rest[..mid]).into_owned(), &rest[mid..])
    };

    let lamp = Mutex::new(
        LampService::start([NullChannel, NullChannel, NullChannel], &LampConfig::default(), &mut NullSink)
            .unwrap(),
    );
    let resp = route(method, &uri, body, &lamp, &mut NullSink);

    assert!(matches!(resp.status, 200 | 400 | 404 | 500));
    let path = uri.split_once('?').map_or(uri.as_str(), |(p, _)| p);
    if method != Method::Post || path != COLOR_ROUTE {
        assert_eq!(resp.status, 404);
    }
});
