//! 3D panner node

/// Positions the virtual sound source in 3D space.
///
/// Holds the scaled position the engine spatializes against. The motion
/// model that animates it lives in [`Orbit`](crate::orbit::Orbit); this node
/// only stores the latest write.
#[derive(Clone, Copy, Debug, Default)]
pub struct PannerNode {
    x: f32,
    y: f32,
    z: f32,
}

impl PannerNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    pub fn position(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }
}
