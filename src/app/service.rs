//! Application service — the hexagonal core.
//!
//! [`LampService`] owns the [`ChannelDriver`] and runs the colour
//! pipeline: parse → apply → report.  All I/O flows through port traits
//! injected at construction or call sites, making the service testable
//! with fake channels.
//!
//! ```text
//!  raw body ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!               │       LampService        │
//!               │  parse · ChannelDriver   │ ──▶ ChannelOutput × 3
//!               └──────────────────────────┘
//! ```
//!
//! One command runs to completion before the next; nothing here blocks.

use log::info;

use crate::config::LampConfig;
use crate::error::{CommandError, DriverError};

use super::color::{self, Rgb};
use super::commands::CommandResult;
use super::driver::ChannelDriver;
use super::events::AppEvent;
use super::ports::{ChannelOutput, EventSink};

pub struct LampService<C> {
    driver: ChannelDriver<C>,
}

impl<C: ChannelOutput> LampService<C> {
    /// Configure the channels, blank them, then show the startup colour.
    ///
    /// `channels` are indexed red, green, blue.  Nothing is accepted until
    /// this returns, so no command can race the boot sequence.
    pub fn start(
        mut channels: [C; 3],
        config: &LampConfig,
        sink: &mut impl EventSink,
    ) -> Result<Self, DriverError> {
        for (index, channel) in channels.iter_mut().enumerate() {
            channel
                .configure(config.pwm_frequency_hz, config.pwm_resolution_bits)
                .map_err(|cause| DriverError::ChannelFault { index, cause })?;
        }
        info!(
            "LampService: channels configured ({} Hz, {}-bit)",
            config.pwm_frequency_hz, config.pwm_resolution_bits
        );

        let mut service = Self {
            driver: ChannelDriver::new(channels),
        };
        service.driver.apply(Rgb::BLACK)?;

        let boot = config.startup_color.unwrap_or(Rgb::BLACK);
        if boot != Rgb::BLACK {
            service.driver.apply(boot)?;
        }
        sink.emit(&AppEvent::Started(boot));
        Ok(service)
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one inbound command body.
    ///
    /// `None` means the request carried no payload.  The body is parsed
    /// verbatim; every rejection is reported to `sink` and returned.
    pub fn handle_command(
        &mut self,
        raw_body: Option<&str>,
        sink: &mut impl EventSink,
    ) -> CommandResult {
        let result = match raw_body {
            None => Err(CommandError::MissingBody),
            Some(body) => self.set_color(body),
        };

        match &result {
            Ok(rgb) => sink.emit(&AppEvent::ColorApplied(*rgb)),
            Err(e) => sink.emit(&AppEvent::CommandRejected(e.clone())),
        }
        result
    }

    fn set_color(&mut self, body: &str) -> CommandResult {
        let rgb = color::parse(body)?;
        self.driver.apply(rgb)?;
        Ok(rgb)
    }

    pub fn driver(&self) -> &ChannelDriver<C> {
        &self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::driver::Channel;
    use crate::error::{ChannelError, echo};

    #[derive(Default)]
    struct FakeChannel {
        config: Option<(u32, u8)>,
        writes: Vec<u8>,
        fail_configure: bool,
    }

    impl ChannelOutput for FakeChannel {
        fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError> {
            if self.fail_configure {
                return Err(ChannelError::ConfigFailed(-1));
            }
            self.config = Some((frequency_hz, resolution_bits));
            Ok(())
        }

        fn write(&mut self, intensity: u8) -> Result<(), ChannelError> {
            if self.config.is_none() {
                return Err(ChannelError::NotConfigured);
            }
            self.writes.push(intensity);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Events(Vec<AppEvent>);

    impl EventSink for Events {
        fn emit(&mut self, event: &AppEvent) {
            self.0.push(event.clone());
        }
    }

    fn start(cfg: &LampConfig, ev: &mut Events) -> LampService<FakeChannel> {
        LampService::start(Default::default(), cfg, ev).unwrap()
    }

    fn writes(s: &LampService<FakeChannel>) -> [Vec<u8>; 3] {
        Channel::ALL.map(|c| s.driver().channel(c).writes.clone())
    }

    #[test]
    fn start_configures_then_blanks() {
        let mut ev = Events::default();
        let cfg = LampConfig {
            startup_color: None,
            ..LampConfig::default()
        };
        let s = start(&cfg, &mut ev);

        for c in Channel::ALL {
            assert_eq!(s.driver().channel(c).config, Some((5_000, 8)));
        }
        assert_eq!(writes(&s), [vec![0], vec![0], vec![0]]);
        assert_eq!(ev.0, [AppEvent::Started(Rgb::BLACK)]);
    }

    #[test]
    fn start_shows_startup_colour_after_black() {
        let mut ev = Events::default();
        let s = start(&LampConfig::standalone(), &mut ev);
        assert_eq!(writes(&s), [vec![0, 0], vec![0, 0], vec![0, 255]]);
        assert_eq!(ev.0, [AppEvent::Started(Rgb::new(0, 0, 255))]);
    }

    #[test]
    fn start_reports_configure_failure() {
        let mut channels: [FakeChannel; 3] = Default::default();
        channels[2].fail_configure = true;
        let err = LampService::start(channels, &LampConfig::default(), &mut Events::default())
            .err()
            .unwrap();
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn command_applies_parsed_colour() {
        let mut ev = Events::default();
        let mut s = start(&LampConfig::default(), &mut ev);

        let r = s.handle_command(Some("#00FF00"), &mut ev);
        assert_eq!(r, Ok(Rgb::new(0, 255, 0)));
        assert_eq!(writes(&s), [vec![0, 0], vec![0, 255], vec![0, 0]]);
        assert_eq!(ev.0.last(), Some(&AppEvent::ColorApplied(Rgb::new(0, 255, 0))));
    }

    #[test]
    fn missing_body_writes_nothing() {
        let mut ev = Events::default();
        let mut s = start(&LampConfig::default(), &mut ev);
        let before = writes(&s);

        assert_eq!(s.handle_command(None, &mut ev), Err(CommandError::MissingBody));
        assert_eq!(writes(&s), before);
        assert_eq!(
            ev.0.last(),
            Some(&AppEvent::CommandRejected(CommandError::MissingBody))
        );
    }

    #[test]
    fn invalid_colour_writes_nothing() {
        let mut ev = Events::default();
        let mut s = start(&LampConfig::default(), &mut ev);
        let before = writes(&s);

        let r = s.handle_command(Some("#GGGGGG"), &mut ev);
        assert_eq!(r, Err(CommandError::InvalidColor { input: echo("#GGGGGG") }));
        assert_eq!(writes(&s), before);
    }
}
