//! Charset sniffing strategies.
//!
//! A [`CharsetDetector`] is chosen once per process (see [`DetectorKind`]) and
//! passed down to the pipeline. Both strategies only see the bytes after any
//! BOM; the caller decides how a BOM overrides their answer.

use encoding_rs::Encoding;
use std::fmt;

mod statistical;
mod strict;

pub use statistical::{StatisticalDetector, TextMetrics};
pub use strict::StrictDecodeChain;

/// Answer of a charset detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sniff {
    /// Probable encoding, `None` when the detector has no answer.
    pub encoding: Option<&'static Encoding>,
    /// Certainty within `[0, 1]`.
    pub confidence: f32,
}

impl Sniff {
    /// The "no idea" answer.
    pub const UNKNOWN: Sniff = Sniff {
        encoding: None,
        confidence: 0.0,
    };
}

/// Determines the probable source encoding of a BOM-less buffer.
pub trait CharsetDetector: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Sniffs `bytes`. `has_bom` tells whether a BOM preceded them.
    fn sniff(&self, bytes: &[u8], has_bom: bool) -> Sniff;
}

impl fmt::Debug for dyn CharsetDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharsetDetector({})", self.name())
    }
}

/// The available detector strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DetectorKind {
    /// Ordered strict-decode chain; confidence is 0 or 1.
    #[default]
    Strict,
    /// Chaos/coherence scoring over several candidate decodings.
    Statistical,
}

impl DetectorKind {
    /// Builds the strategy object.
    pub fn build(self) -> Box<dyn CharsetDetector> {
        match self {
            DetectorKind::Strict => Box::new(StrictDecodeChain::default()),
            DetectorKind::Statistical => Box::new(StatisticalDetector::default()),
        }
    }
}
