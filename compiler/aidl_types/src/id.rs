//! Type handle.
//!
//! Descriptors live in the [`Namespace`](crate::Namespace) arena and are
//! referenced by a 32-bit `TypeId`. Bootstrap registers the built-in
//! types in a fixed order, so each built-in has a constant handle and
//! codegen can name `TypeId::STRING` without a lookup.

use std::fmt;

/// A 32-bit index into a namespace's descriptor arena.
///
/// Handles are only meaningful for the namespace that issued them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Built-in Types (indices 0-23) ===
    // Registered by bootstrap in exactly this order.

    pub const VOID: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    pub const BYTE: Self = Self(2);
    pub const CHAR: Self = Self(3);
    pub const INT: Self = Self(4);
    pub const LONG: Self = Self(5);
    pub const FLOAT: Self = Self(6);
    pub const DOUBLE: Self = Self(7);
    /// `java.lang.Object`, compile-time helper only.
    pub const OBJECT: Self = Self(8);
    pub const STRING: Self = Self(9);
    pub const CHAR_SEQUENCE: Self = Self(10);
    /// Untyped `java.util.Map`.
    pub const MAP: Self = Self(11);
    /// Untyped `java.util.List`.
    pub const LIST: Self = Self(12);
    /// `android.text.TextUtils`, receiver for char-sequence marshalling.
    pub const TEXT_UTILS: Self = Self(13);
    pub const REMOTE_EXCEPTION: Self = Self(14);
    pub const RUNTIME_EXCEPTION: Self = Self(15);
    pub const IBINDER: Self = Self(16);
    pub const IINTERFACE: Self = Self(17);
    pub const BINDER_NATIVE: Self = Self(18);
    pub const BINDER_PROXY: Self = Self(19);
    pub const PARCEL: Self = Self(20);
    /// `android.os.Parcelable`, owner of the write-flag constants.
    pub const PARCELABLE: Self = Self(21);
    /// `android.content.Context`, the class-context helper.
    pub const CONTEXT: Self = Self(22);
    pub const CLASS_LOADER: Self = Self(23);

    /// Number of built-in types registered by bootstrap.
    pub const BUILTIN_COUNT: u32 = 24;

    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena slot of this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the bootstrap handles.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }

    /// Source-level name of a built-in handle, `None` for dynamic handles.
    pub const fn builtin_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("void"),
            1 => Some("boolean"),
            2 => Some("byte"),
            3 => Some("char"),
            4 => Some("int"),
            5 => Some("long"),
            6 => Some("float"),
            7 => Some("double"),
            8 => Some("Object"),
            9 => Some("String"),
            10 => Some("CharSequence"),
            11 => Some("Map"),
            12 => Some("List"),
            13 => Some("TextUtils"),
            14 => Some("RemoteException"),
            15 => Some("RuntimeException"),
            16 => Some("IBinder"),
            17 => Some("IInterface"),
            18 => Some("Binder"),
            19 => Some("BinderProxy"),
            20 => Some("Parcel"),
            21 => Some("Parcelable"),
            22 => Some("Context"),
            23 => Some("ClassLoader"),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => write!(f, "TypeId({name})"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_range() {
        assert!(TypeId::VOID.is_builtin());
        assert!(TypeId::CLASS_LOADER.is_builtin());
        assert!(!TypeId::from_raw(TypeId::BUILTIN_COUNT).is_builtin());
    }

    #[test]
    fn debug_names_builtins() {
        assert_eq!(format!("{:?}", TypeId::STRING), "TypeId(String)");
        assert_eq!(format!("{:?}", TypeId::from_raw(40)), "TypeId(40)");
    }
}
