//! Graph terminal - the playback output

/// Terminal node of the graph. Records which output device playback is
/// routed to; `None` means the system default.
#[derive(Clone, Debug, Default)]
pub struct Destination {
    device_name: Option<String>,
}

impl Destination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route output to the named device.
    pub fn set_device(&mut self, name: impl Into<String>) {
        self.device_name = Some(name.into());
    }

    /// Currently selected device name, if not the default.
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }
}
