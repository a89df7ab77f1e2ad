//! Boot sequence: configure every channel, blank, then the startup colour.

use rgblamp::app::color::Rgb;
use rgblamp::app::events::AppEvent;
use rgblamp::app::service::LampService;
use rgblamp::config::LampConfig;
use rgblamp::error::DriverError;

use super::mock_hw::{CallLog, ChannelCall, MockChannel, RecordingSink};

#[test]
fn channels_are_configured_before_any_write() {
    let log = CallLog::default();
    let mut sink = RecordingSink::default();
    let _lamp = LampService::start(MockChannel::rgb(&log), &LampConfig::default(), &mut sink)
        .unwrap();

    let calls = log.calls();
    let first_write = calls
        .iter()
        .position(|c| matches!(c, ChannelCall::Write { .. }))
        .unwrap();
    let configures: Vec<_> = calls[..first_write].to_vec();
    assert_eq!(
        configures,
        (0..3)
            .map(|index| ChannelCall::Configure {
                index,
                frequency_hz: 5_000,
                resolution_bits: 8
            })
            .collect::<Vec<_>>()
    );
}

#[test]
fn network_variant_boots_dark() {
    let log = CallLog::default();
    let mut sink = RecordingSink::default();
    let _lamp = LampService::start(MockChannel::rgb(&log), &LampConfig::default(), &mut sink)
        .unwrap();

    assert_eq!(log.writes(), [(0, 0), (1, 0), (2, 0)]);
    assert_eq!(sink.events, [AppEvent::Started(Rgb::BLACK)]);
}

#[test]
fn standalone_variant_blanks_then_shows_blue() {
    let log = CallLog::default();
    let mut sink = RecordingSink::default();
    let _lamp = LampService::start(MockChannel::rgb(&log), &LampConfig::standalone(), &mut sink)
        .unwrap();

    assert_eq!(
        log.writes(),
        [(0, 0), (1, 0), (2, 0), (0, 0), (1, 0), (2, 255)]
    );
    assert_eq!(sink.events, [AppEvent::Started(Rgb::new(0, 0, 255))]);
}

#[test]
fn write_fault_during_boot_is_reported() {
    let log = CallLog::default();
    let channels = MockChannel::rgb(&log);
    *channels[0].fault_switch().lock().unwrap() = true;

    let err = LampService::start(channels, &LampConfig::default(), &mut RecordingSink::default())
        .err()
        .unwrap();
    assert!(matches!(err, DriverError::ChannelFault { index: 0, .. }));
}
