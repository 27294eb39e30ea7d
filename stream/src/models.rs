use std::collections::BTreeMap;

use crate::StreamError;

/// Stream keys used by the provider's stream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StreamKind {
    /// Cumulative distance in meters
    Distance,
    /// Altitude in meters
    Altitude,
    /// Heart rate in beats per minute
    #[cfg_attr(feature = "serde", serde(rename = "heartrate"))]
    HeartRate,
    /// Smoothed velocity in meters per second
    #[cfg_attr(feature = "serde", serde(rename = "velocity_smooth"))]
    Velocity,
    /// Elapsed time in seconds
    Time,
}

impl StreamKind {
    pub const fn key(self) -> &'static str {
        match self {
            StreamKind::Distance => "distance",
            StreamKind::Altitude => "altitude",
            StreamKind::HeartRate => "heartrate",
            StreamKind::Velocity => "velocity_smooth",
            StreamKind::Time => "time",
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stream {
    /// Number of samples recorded before the provider resampled the stream
    #[cfg_attr(feature = "serde", serde(default))]
    pub original_size: u64,
    pub data: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
}

impl Stream {
    pub fn new(kind: StreamKind, data: Vec<f64>) -> Self {
        Self {
            original_size: data.len() as u64,
            data,
            kind: kind.key().to_owned(),
        }
    }

    pub fn with_original_size(mut self, original_size: u64) -> Self {
        self.original_size = original_size;
        self
    }

    /// Seconds between two stored samples.
    ///
    /// Falls back to one second when nothing is stored or the original size
    /// is unknown.
    pub fn sample_interval(&self) -> f64 {
        if self.data.is_empty() || self.original_size == 0 {
            return 1.0;
        }

        self.original_size as f64 / self.data.len() as f64
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// All streams fetched for one activity, keyed by stream type.
///
/// The provider wraps every stream in an array; the first entry of each key
/// is the one used for analytics. Keys whose data isn't a list of numbers
/// (`latlng`, for one) are dropped while deserializing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct StreamSet {
    streams: BTreeMap<String, Vec<Stream>>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StreamSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Streams(Vec<Stream>),
            Other(serde::de::IgnoredAny),
        }

        let streams = BTreeMap::<String, Entry>::deserialize(deserializer)?
            .into_iter()
            .filter_map(|(key, entry)| match entry {
                Entry::Streams(streams) => Some((key, streams)),
                Entry::Other(_) => {
                    tracing::debug!(key = %key, "skipping stream without numeric data");
                    None
                }
            })
            .collect();

        Ok(Self { streams })
    }
}

/// Streams file contents: either a bare stream map or a backend response
/// carrying it under `streams` next to other fields.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum StreamPayload {
    Wrapped { streams: StreamSet },
    Bare(StreamSet),
}

#[cfg(feature = "serde")]
impl From<StreamPayload> for StreamSet {
    fn from(payload: StreamPayload) -> Self {
        match payload {
            StreamPayload::Wrapped { streams } | StreamPayload::Bare(streams) => streams,
        }
    }
}

impl StreamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stream: Stream) {
        self.streams
            .entry(stream.kind.clone())
            .or_default()
            .push(stream);
    }

    pub fn with(mut self, stream: Stream) -> Self {
        self.insert(stream);
        self
    }

    /// First stream stored under `kind`, if any.
    pub fn get(&self, kind: StreamKind) -> Option<&Stream> {
        self.streams.get(kind.key()).and_then(|this| this.first())
    }

    /// Samples of `kind`, empty when the stream is absent.
    pub fn data(&self, kind: StreamKind) -> &[f64] {
        self.get(kind).map(|this| this.data.as_slice()).unwrap_or(&[])
    }

    /// Like [`StreamSet::get`] but treats an absent or empty stream as an error.
    pub fn require(&self, kind: StreamKind) -> Result<&Stream, StreamError> {
        self.get(kind)
            .filter(|this| !this.is_empty())
            .ok_or(StreamError::MissingStream(kind.key()))
    }
}

impl FromIterator<Stream> for StreamSet {
    fn from_iter<T: IntoIterator<Item = Stream>>(iter: T) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|this| set.insert(this));
        set
    }
}
