//! Strongly typed vehicle index.
//!
//! A `VehicleId` is the row position of a vehicle in every parallel sequence
//! of the trajectory (`VehicleDefs` and each `VehicleState`) and in the live
//! `VehicleStore`.  It is *not* the `id` column read from the file, which is
//! an opaque label carried through to the wire message.

use std::fmt;

/// Index of a vehicle in SoA storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// The ego vehicle of the reference scenario.
    pub const EGO: VehicleId = VehicleId(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<VehicleId> for usize {
    #[inline(always)]
    fn from(id: VehicleId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
