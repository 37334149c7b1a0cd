//! Planar pose and the host-frame conversion.
//!
//! The engine works in trajectory units throughout: metres for `x`/`y`,
//! radians for `heading`, metres per second for speed.  Hosts that render in
//! another unit system (the reference scene uses centimetres and degrees,
//! with the model's forward axis rotated a quarter turn) convert at the
//! boundary through [`HostFrame`].

/// A vehicle's planar world pose.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub x:       f64,
    pub y:       f64,
    /// Heading in radians.
    pub heading: f64,
}

impl Pose {
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.4} rad)", self.x, self.y, self.heading)
    }
}

// ── Host frame ────────────────────────────────────────────────────────────────

/// A pose (and speed) expressed in the host's unit system.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostPose {
    pub x:       f64,
    pub y:       f64,
    /// Yaw in degrees.
    pub yaw_deg: f64,
    pub speed:   f64,
}

/// Linear mapping from engine units to host units.
///
/// ```text
/// host.x       = pose.x * scale
/// host.y       = pose.y * scale
/// host.yaw_deg = pose.heading.to_degrees() + yaw_offset_deg
/// host.speed   = speed * scale
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostFrame {
    pub scale:          f64,
    pub yaw_offset_deg: f64,
}

impl HostFrame {
    /// Engine units passed through unchanged (yaw still reported in degrees).
    pub const IDENTITY: HostFrame = HostFrame { scale: 1.0, yaw_offset_deg: 0.0 };

    /// The reference scene: centimetres, model forward axis at −90°.
    pub const REFERENCE: HostFrame = HostFrame { scale: 100.0, yaw_offset_deg: -90.0 };

    pub fn to_host(&self, pose: Pose, speed: f64) -> HostPose {
        HostPose {
            x:       pose.x * self.scale,
            y:       pose.y * self.scale,
            yaw_deg: pose.heading.to_degrees() + self.yaw_offset_deg,
            speed:   speed * self.scale,
        }
    }
}

impl Default for HostFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
