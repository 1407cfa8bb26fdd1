//! Live camera feed screen.
//!
//! Capture is delegated to a [`MediaCapture`] collaborator. The feed never
//! fails: a denied or missing device leaves it on the "waiting for
//! connection" placeholder. A stream acquired on entry is stopped when the
//! feed is left or dropped.

use crate::error::Result;
use std::fmt;

/// Stations selectable from the feed header.
pub const STATIONS: [&str; 3] = [
    "Station Alpha - District 4",
    "Station Bravo - District 4",
    "Station Charlie - District 2",
];

/// What to request from the capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub video: bool,
    pub audio: bool,
}

impl CaptureConstraints {
    pub const AUDIO_VIDEO: CaptureConstraints = CaptureConstraints {
        video: true,
        audio: true,
    };
}

/// A running capture. Implementations release the device in `stop`.
pub trait MediaStream: Send {
    /// Human-readable device label.
    fn label(&self) -> &str;

    /// Stops every track and releases the device.
    fn stop(&mut self);
}

/// Source of media streams, e.g. a camera API.
pub trait MediaCapture {
    fn acquire(&mut self, constraints: CaptureConstraints) -> Result<Box<dyn MediaStream>>;
}

/// Capture source for hosts without a camera. Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaptureDevice;

impl MediaCapture for NoCaptureDevice {
    fn acquire(&mut self, _constraints: CaptureConstraints) -> Result<Box<dyn MediaStream>> {
        Err(crate::error::RegistrarError::media_unavailable(
            "no capture device on this host",
        ))
    }
}

/// What the feed currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// A stream is attached.
    Live { device: String },
    /// No stream; the placeholder is shown.
    WaitingForConnection,
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Live { device } => write!(f, "LIVE ({device})"),
            FeedStatus::WaitingForConnection => f.write_str("Waiting for connection..."),
        }
    }
}

/// State of the live feed screen while it is shown.
pub struct LiveFeed {
    stream: Option<Box<dyn MediaStream>>,
    station: usize,
}

impl LiveFeed {
    /// Enters the feed, requesting audio and video from `capture`.
    pub fn enter(capture: &mut dyn MediaCapture) -> Self {
        let stream = match capture.acquire(CaptureConstraints::AUDIO_VIDEO) {
            Ok(stream) => {
                tracing::info!(device = stream.label(), "camera stream acquired");
                Some(stream)
            }
            Err(err) => {
                tracing::warn!("Camera access denied or unavailable: {err}");
                None
            }
        };

        Self { stream, station: 0 }
    }

    pub fn status(&self) -> FeedStatus {
        match &self.stream {
            Some(stream) => FeedStatus::Live {
                device: stream.label().to_string(),
            },
            None => FeedStatus::WaitingForConnection,
        }
    }

    pub fn is_live(&self) -> bool {
        self.stream.is_some()
    }

    pub fn station(&self) -> &'static str {
        STATIONS[self.station]
    }

    /// Selects a station by index into [`STATIONS`]. Returns the station name,
    /// or `None` if the index is out of range.
    pub fn select_station(&mut self, index: usize) -> Option<&'static str> {
        let name = *STATIONS.get(index)?;
        self.station = index;
        Some(name)
    }

    /// Leaves the feed, releasing the stream if one was acquired.
    pub fn leave(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::debug!("camera stream released");
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for LiveFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveFeed")
            .field("status", &self.status())
            .field("station", &self.station())
            .finish()
    }
}
