//! End-to-end: request → route → parse → ChannelDriver → response.

use std::sync::Mutex;

use rgblamp::adapters::http::{COLOR_ROUTE, Method, route};
use rgblamp::app::color::Rgb;
use rgblamp::app::events::AppEvent;
use rgblamp::app::service::LampService;
use rgblamp::config::LampConfig;
use rgblamp::error::CommandError;

use super::mock_hw::{CallLog, MockChannel, RecordingSink};

fn started() -> (Mutex<LampService<MockChannel>>, CallLog) {
    let log = CallLog::default();
    let lamp = LampService::start(
        MockChannel::rgb(&log),
        &LampConfig::default(),
        &mut RecordingSink::default(),
    )
    .unwrap();
    log.clear();
    (Mutex::new(lamp), log)
}

#[test]
fn green_command_writes_0_255_0_and_returns_200() {
    let (lamp, log) = started();
    let mut sink = RecordingSink::default();

    let resp = route(Method::Post, COLOR_ROUTE, b"#00FF00", &lamp, &mut sink);

    assert_eq!(resp.status, 200);
    assert_eq!(log.writes(), [(0, 0), (1, 255), (2, 0)]);
    assert_eq!(sink.events, [AppEvent::ColorApplied(Rgb::new(0, 255, 0))]);
}

#[test]
fn missing_body_returns_400_without_writes() {
    let (lamp, log) = started();
    let mut sink = RecordingSink::default();

    let resp = route(Method::Post, COLOR_ROUTE, b"", &lamp, &mut sink);

    assert_eq!(resp.status, 400);
    assert!(resp.body.contains("hex color"));
    assert!(log.writes().is_empty());
    assert_eq!(sink.events, [AppEvent::CommandRejected(CommandError::MissingBody)]);
}

#[test]
fn handle_command_none_is_missing_body() {
    let (lamp, log) = started();
    let mut lamp = lamp.into_inner().unwrap();

    let r = lamp.handle_command(None, &mut RecordingSink::default());

    assert_eq!(r, Err(CommandError::MissingBody));
    assert!(log.writes().is_empty());
}

#[test]
fn malformed_colours_return_400_without_writes() {
    let (lamp, log) = started();

    for body in ["#FFF", "#GGGGGG", "00FF00", "#00FF00 ", "red"] {
        let resp = route(Method::Post, COLOR_ROUTE, body.as_bytes(), &lamp, &mut RecordingSink::default());
        assert_eq!(resp.status, 400, "{:?}", body);
        assert!(resp.body.contains(body), "response should echo {:?}", body);
    }
    assert!(log.writes().is_empty());
}

#[test]
fn camera_client_path_sets_colour() {
    let (lamp, log) = started();

    let resp = route(Method::Post, "/setColor", b"#0000FF", &lamp, &mut RecordingSink::default());

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "Color set to #0000FF");
    assert_eq!(log.writes(), [(0, 0), (1, 0), (2, 255)]);
}

#[test]
fn old_color_path_is_404() {
    let (lamp, log) = started();

    let resp = route(Method::Post, "/color", b"#0000FF", &lamp, &mut RecordingSink::default());

    assert_eq!(resp.status, 404);
    assert!(log.calls().is_empty());
}

#[test]
fn unknown_route_returns_404_and_never_reaches_pipeline() {
    let (lamp, log) = started();
    let mut sink = RecordingSink::default();

    let resp = route(Method::Post, "/led", b"#00FF00", &lamp, &mut sink);

    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, "Not found");
    assert!(log.calls().is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn channel_fault_returns_500_and_keeps_earlier_channels() {
    let log = CallLog::default();
    let channels = MockChannel::rgb(&log);
    let blue_fault = channels[2].fault_switch();
    let lamp = Mutex::new(
        LampService::start(channels, &LampConfig::default(), &mut RecordingSink::default()).unwrap(),
    );
    log.clear();
    *blue_fault.lock().unwrap() = true;

    let mut sink = RecordingSink::default();
    let resp = route(Method::Post, COLOR_ROUTE, b"#112233", &lamp, &mut sink);

    assert_eq!(resp.status, 500);
    assert_eq!(resp.body, "Hardware fault on channel 2");
    assert_eq!(log.writes(), [(0, 0x11), (1, 0x22)], "no rollback");
    assert_eq!(
        sink.events,
        [AppEvent::CommandRejected(CommandError::HardwareFault { index: 2 })]
    );

    // The next command goes through once the fault clears.
    *blue_fault.lock().unwrap() = false;
    let resp = route(Method::Post, COLOR_ROUTE, b"#112233", &lamp, &mut sink);
    assert_eq!(resp.status, 200);
}

#[test]
fn same_colour_twice_repeats_identical_writes() {
    let (lamp, log) = started();

    route(Method::Post, COLOR_ROUTE, b"#FF00FF", &lamp, &mut RecordingSink::default());
    let first = log.writes();
    log.clear();
    route(Method::Post, COLOR_ROUTE, b"#FF00FF", &lamp, &mut RecordingSink::default());

    assert_eq!(first, [(0, 255), (1, 0), (2, 255)]);
    assert_eq!(log.writes(), first);
}

#[test]
fn commands_apply_in_arrival_order() {
    let (lamp, log) = started();

    for body in ["#010101", "#020202", "#030303"] {
        route(Method::Post, COLOR_ROUTE, body.as_bytes(), &lamp, &mut RecordingSink::default());
    }

    let intensities: Vec<u8> = log.writes().into_iter().map(|(_, v)| v).collect();
    assert_eq!(intensities, [1, 1, 1, 2, 2, 2, 3, 3, 3]);
}
