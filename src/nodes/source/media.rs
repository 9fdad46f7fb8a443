//! The playable media source.
//!
//! Models the single media element that decodes and plays a resource URL.
//! Transport state lives here; decoding and device output are the engine's
//! job. Loading progress is observed through event subscriptions, never
//! polled - the engine reports events via [`MediaSource::emit`], and
//! transport calls that change observable state emit their own.

use hashbrown::HashMap;
use tracing::debug;

/// Last-error codes matching the media element's error surface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaErrorCode {
    /// Fetching aborted at the user's request.
    Aborted = 1,
    /// A network error occurred while fetching.
    Network = 2,
    /// An error occurred while decoding.
    Decode = 3,
    /// The resource format is not supported.
    SrcNotSupported = 4,
}

/// Preload hint for the media element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Preload {
    None,
    Metadata,
    Auto,
}

/// Named events an embedding UI layer may subscribe to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MediaEvent {
    Playing,
    Pause,
    Ended,
    Error,
    LoadedData,
    LoadStart,
    CanPlay,
    Emptied,
    TimeUpdate,
    Waiting,
    VisibilityChange,
}

/// Handle returned by a subscription; pass it back to
/// [`MediaSource::unsubscribe`] to detach the callback.
#[derive(Debug)]
pub struct Subscription {
    event: MediaEvent,
    id: u64,
}

impl Subscription {
    pub fn event(&self) -> MediaEvent {
        self.event
    }
}

type Callback = Box<dyn FnMut()>;

/// The single playable media handle.
///
/// Created once on first use; the resource URI mutates per track and
/// `clear()` resets it to empty, but the source itself is never destroyed.
pub struct MediaSource {
    src: String,
    autoplay: bool,
    preload: Preload,
    cross_origin_anonymous: bool,
    looping: bool,
    muted: bool,
    volume: f32,
    default_playback_rate: f32,
    playback_rate: f32,
    preserves_pitch: bool,
    current_time: f64,
    duration: f64,
    paused: bool,
    error: Option<MediaErrorCode>,

    listeners: HashMap<MediaEvent, Vec<(u64, Callback)>>,
    next_listener_id: u64,
}

impl MediaSource {
    pub fn new() -> Self {
        Self {
            src: String::new(),
            autoplay: true,
            preload: Preload::Auto,
            cross_origin_anonymous: true,
            looping: false,
            muted: false,
            volume: 1.0,
            default_playback_rate: 1.0,
            playback_rate: 1.0,
            preserves_pitch: true,
            current_time: 0.0,
            duration: 0.0,
            paused: true,
            error: None,
            listeners: HashMap::new(),
            next_listener_id: 0,
        }
    }

    /// Assign a new resource URI. Resets position and duration; the engine
    /// reports further progress (loadeddata, canplay) through [`emit`](Self::emit).
    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = src.into();
        self.current_time = 0.0;
        self.duration = 0.0;
        self.error = None;
        debug!(src = %self.src, "media source assigned");
        self.emit(MediaEvent::LoadStart);
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// True when no resource URI is assigned.
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn play(&mut self) {
        self.paused = false;
        self.emit(MediaEvent::Playing);
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.emit(MediaEvent::Pause);
    }

    /// Stop playback and clear the resource URI.
    pub fn clear(&mut self) {
        self.src.clear();
        self.paused = true;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.emit(MediaEvent::Emptied);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn preload(&self) -> Preload {
        self.preload
    }

    pub fn cross_origin_anonymous(&self) -> bool {
        self.cross_origin_anonymous
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the playback rate. Writes both the default and the current rate,
    /// so the new value survives a track change.
    pub fn set_playback_rate(&mut self, rate: f32) {
        self.default_playback_rate = rate;
        self.playback_rate = rate;
    }

    pub fn default_playback_rate(&self) -> f32 {
        self.default_playback_rate
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    pub fn set_preserves_pitch(&mut self, preserves: bool) {
        self.preserves_pitch = preserves;
    }

    pub fn preserves_pitch(&self) -> bool {
        self.preserves_pitch
    }

    pub fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration is reported by the engine once metadata is known.
    pub fn set_duration(&mut self, secs: f64) {
        self.duration = secs;
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Record an engine-reported playback error and raise the event.
    pub fn set_error(&mut self, code: MediaErrorCode) {
        self.error = Some(code);
        self.emit(MediaEvent::Error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error_code(&self) -> Option<MediaErrorCode> {
        self.error
    }

    /// Attach a callback for `event`. Returns the unsubscribe handle.
    pub fn subscribe(&mut self, event: MediaEvent, callback: impl FnMut() + 'static) -> Subscription {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners
            .entry(event)
            .or_insert_with(Vec::new)
            .push((id, Box::new(callback)));
        Subscription { event, id }
    }

    /// Detach a previously subscribed callback. A stale handle is a no-op.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(list) = self.listeners.get_mut(&subscription.event) {
            list.retain(|(id, _)| *id != subscription.id);
        }
    }

    /// Fire all callbacks registered for `event`.
    ///
    /// Called both internally (transport transitions) and by the embedding
    /// engine for asynchronous media progress.
    pub fn emit(&mut self, event: MediaEvent) {
        if let Some(list) = self.listeners.get_mut(&event) {
            for (_, callback) in list.iter_mut() {
                callback();
            }
        }
    }
}

impl Default for MediaSource {
    fn default() -> Self {
        Self::new()
    }
}
