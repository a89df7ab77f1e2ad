//! HTTP command endpoint.
//!
//! Exposes the colour pipeline on a single route:
//!
//! | Method | Path        | Body       | Result                         |
//! |--------|-------------|------------|--------------------------------|
//! | POST   | `/setColor` | `#RRGGBB`  | 200 / 400 / 500 (see commands) |
//! | *      | *           | —          | 404 `Not found`                |
//!
//! [`route`] is transport-agnostic and runs on the host in tests.  On
//! ESP-IDF, [`HttpAdapter`] registers a wildcard handler on
//! `EspHttpServer` that reads the body and delegates to [`route`].
//!
//! ## Concurrency
//!
//! The ESP-IDF server calls handlers from its own task, so the lamp lives
//! behind a [`SharedLamp`] mutex: one apply at a time, last write wins.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use crate::app::commands::{self, CommandResult, NOT_FOUND_TEXT, STATUS_NOT_FOUND};
use crate::app::ports::{ChannelOutput, EventSink};
use crate::app::service::LampService;

/// The one route this endpoint serves.
pub const COLOR_ROUTE: &str = "/setColor";

/// Largest body read from a request.  Anything longer cannot be a colour,
/// so the adapter stops reading at `MAX_BODY_LEN + 1` bytes.
pub const MAX_BODY_LEN: usize = 64;

/// Lamp pipeline shared between request handlers.
pub type SharedLamp<C> = Arc<Mutex<LampService<C>>>;

pub fn shared<C>(lamp: LampService<C>) -> SharedLamp<C> {
    Arc::new(Mutex::new(lamp))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn not_found() -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            body: String::from(NOT_FOUND_TEXT),
        }
    }
}

impl From<&CommandResult> for Response {
    fn from(result: &CommandResult) -> Self {
        Self {
            status: commands::status(result),
            body: commands::message(result),
        }
    }
}

fn is_color_route(method: Method, uri: &str) -> bool {
    let path = uri.split_once('?').map_or(uri, |(p, _)| p);
    method == Method::Post && path == COLOR_ROUTE
}

/// Empty body means "no body".  Non-UTF-8 bytes are kept (lossily) so
/// the parser rejects them with the usual invalid-colour response.
fn body_text(body: &[u8]) -> Option<Cow<'_, str>> {
    if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(body))
    }
}

/// Dispatch one request.  Unknown routes never touch the lamp.
pub fn route<C: ChannelOutput>(
    method: Method,
    uri: &str,
    body: &[u8],
    lamp: &Mutex<LampService<C>>,
    sink: &mut impl EventSink,
) -> Response {
    if !is_color_route(method, uri) {
        return Response::not_found();
    }

    let raw = body_text(body);
    // A panic in an earlier handler leaves the channels in a valid state
    // (every write is a complete duty value), so a poisoned lock is reused.
    let mut lamp = lamp.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let result = lamp.handle_command(raw.as_deref(), sink);
    Response::from(&result)
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF server
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub use esp_impl::HttpAdapter;

#[cfg(target_os = "espidf")]
mod esp_impl {
    use esp_idf_svc::http::Method as EspMethod;
    use esp_idf_svc::http::server::{Configuration, EspHttpConnection, EspHttpServer, Request};
    use esp_idf_svc::io::{Read, Write};
    use log::info;

    use super::{MAX_BODY_LEN, Method, SharedLamp, route};
    use crate::adapters::log_sink::LogEventSink;
    use crate::app::ports::ChannelOutput;

    /// Keeps the HTTP server alive; dropping it stops the server.
    pub struct HttpAdapter {
        _server: EspHttpServer<'static>,
    }

    fn method(m: EspMethod) -> Method {
        match m {
            EspMethod::Get => Method::Get,
            EspMethod::Post => Method::Post,
            EspMethod::Put => Method::Put,
            EspMethod::Delete => Method::Delete,
            _ => Method::Other,
        }
    }

    fn read_body(
        req: &mut Request<&mut EspHttpConnection<'_>>,
        buf: &mut [u8],
    ) -> anyhow::Result<usize> {
        let mut len = 0;
        while len < buf.len() {
            let n = req.read(&mut buf[len..])?;
            if n == 0 {
                break;
            }
            len += n;
        }
        Ok(len)
    }

    impl HttpAdapter {
        pub fn start<C>(lamp: SharedLamp<C>) -> anyhow::Result<Self>
        where
            C: ChannelOutput + Send + 'static,
        {
            let mut server = EspHttpServer::new(&Configuration {
                uri_match_wildcard: true,
                ..Default::default()
            })?;

            for m in [EspMethod::Get, EspMethod::Post, EspMethod::Put, EspMethod::Delete] {
                let lamp = lamp.clone();
                server.fn_handler("/*", m, move |mut req| -> anyhow::Result<()> {
                    let uri = req.uri().to_owned();
                    let method = method(req.method());

                    let mut buf = [0u8; MAX_BODY_LEN + 1];
                    let len = read_body(&mut req, &mut buf)?;

                    let resp = route(method, &uri, &buf[..len], &*lamp, &mut LogEventSink::new());
                    let mut out = req.into_response(
                        resp.status,
                        None,
                        &[("Content-Type", "text/plain")],
                    )?;
                    out.write_all(resp.body.as_bytes())?;
                    Ok(())
                })?;
            }

            info!("HttpAdapter: listening, POST {}", super::COLOR_ROUTE);
            Ok(Self { _server: server })
        }
    }
}
