//! Descriptor capability flags and marshalling write flags.

use bitflags::bitflags;

bitflags! {
    /// What a type may be used for in a method signature.
    ///
    /// Fixed when the descriptor is constructed, never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Capabilities: u8 {
        /// Values may be serialized into a parcel. Compile-time helpers
        /// such as `java.lang.ClassLoader` lack this.
        const CAN_WRITE_TO_PARCEL = 1 << 0;
        /// The type may be used as a mutable `out`/`inout` parameter.
        const CAN_BE_OUT = 1 << 1;
    }
}

impl Capabilities {
    /// Serializable and usable as an out parameter.
    pub const WRITE_AND_OUT: Self = Self::CAN_WRITE_TO_PARCEL.union(Self::CAN_BE_OUT);

    #[inline]
    pub const fn can_write_to_parcel(self) -> bool {
        self.contains(Self::CAN_WRITE_TO_PARCEL)
    }

    #[inline]
    pub const fn can_be_out(self) -> bool {
        self.contains(Self::CAN_BE_OUT)
    }
}

bitflags! {
    /// Flags for `write_to_parcel`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct WriteFlags: u32 {
        /// The value is a method's return value (or an out argument on
        /// its way back), so records may skip round-trip metadata.
        const WRITE_RETURN_VALUE = 0x0001;
    }
}
