//! Built-in type registration.
//!
//! Registers every built-in descriptor in [`TypeId`] order, then the
//! generic templates. Runs once per namespace, before any interface
//! source is processed.

use tracing::debug;

use crate::{
    BinderKind, Capabilities, ExceptionKind, Namespace, PrimitiveCodec, TypeDescriptor, TypeId,
    TypeVariant,
};

/// Generic templates every namespace starts with: `(package, name, arity)`.
pub const BUILTIN_TEMPLATES: [(&str, &str, usize); 2] =
    [("java.util", "List", 1), ("java.util", "Map", 2)];

fn helper(package: &str, name: &str) -> TypeDescriptor {
    TypeDescriptor::builtin(package, name, Capabilities::empty(), TypeVariant::Helper)
}

/// Built-in descriptors paired with the handle each must receive.
pub fn builtin_descriptors() -> [(TypeId, TypeDescriptor); TypeId::BUILTIN_COUNT as usize] {
    let write = Capabilities::CAN_WRITE_TO_PARCEL;
    [
        (
            TypeId::VOID,
            TypeDescriptor::builtin("", "void", Capabilities::empty(), TypeVariant::Void),
        ),
        (TypeId::BOOLEAN, TypeDescriptor::primitive(PrimitiveCodec::BOOLEAN)),
        (TypeId::BYTE, TypeDescriptor::primitive(PrimitiveCodec::BYTE)),
        (TypeId::CHAR, TypeDescriptor::primitive(PrimitiveCodec::CHAR)),
        (TypeId::INT, TypeDescriptor::primitive(PrimitiveCodec::INT)),
        (TypeId::LONG, TypeDescriptor::primitive(PrimitiveCodec::LONG)),
        (TypeId::FLOAT, TypeDescriptor::primitive(PrimitiveCodec::FLOAT)),
        (TypeId::DOUBLE, TypeDescriptor::primitive(PrimitiveCodec::DOUBLE)),
        (TypeId::OBJECT, helper("java.lang", "Object")),
        (
            TypeId::STRING,
            TypeDescriptor::builtin("java.lang", "String", write, TypeVariant::String),
        ),
        (
            TypeId::CHAR_SEQUENCE,
            TypeDescriptor::builtin("java.lang", "CharSequence", write, TypeVariant::CharSequence),
        ),
        (
            TypeId::MAP,
            TypeDescriptor::builtin(
                "java.util",
                "Map",
                Capabilities::WRITE_AND_OUT,
                TypeVariant::Map,
            ),
        ),
        (
            TypeId::LIST,
            TypeDescriptor::builtin(
                "java.util",
                "List",
                Capabilities::WRITE_AND_OUT,
                TypeVariant::List,
            ),
        ),
        (TypeId::TEXT_UTILS, helper("android.text", "TextUtils")),
        (
            TypeId::REMOTE_EXCEPTION,
            TypeDescriptor::builtin(
                "android.os",
                "RemoteException",
                write,
                TypeVariant::Exception(ExceptionKind::Remote),
            ),
        ),
        (
            TypeId::RUNTIME_EXCEPTION,
            TypeDescriptor::builtin(
                "java.lang",
                "RuntimeException",
                write,
                TypeVariant::Exception(ExceptionKind::Runtime),
            ),
        ),
        (
            TypeId::IBINDER,
            TypeDescriptor::builtin(
                "android.os",
                "IBinder",
                write,
                TypeVariant::Binder(BinderKind::Handle),
            ),
        ),
        (
            TypeId::IINTERFACE,
            TypeDescriptor::builtin(
                "android.os",
                "IInterface",
                write,
                TypeVariant::Binder(BinderKind::Interface),
            ),
        ),
        (
            TypeId::BINDER_NATIVE,
            TypeDescriptor::builtin(
                "android.os",
                "Binder",
                write,
                TypeVariant::Binder(BinderKind::Native),
            ),
        ),
        (
            TypeId::BINDER_PROXY,
            TypeDescriptor::builtin(
                "android.os",
                "BinderProxy",
                write,
                TypeVariant::Binder(BinderKind::Proxy),
            ),
        ),
        (TypeId::PARCEL, helper("android.os", "Parcel")),
        (TypeId::PARCELABLE, helper("android.os", "Parcelable")),
        (TypeId::CONTEXT, helper("android.content", "Context")),
        (TypeId::CLASS_LOADER, helper("java.lang", "ClassLoader")),
    ]
}

/// Seed `names` with the built-in types and templates.
///
/// # Panics
///
/// If a built-in conflicts with an existing entry or lands on the wrong
/// handle, which means `names` was not empty (or bootstrap itself is
/// inconsistent). Registering into an already bootstrapped namespace is
/// a no-op.
pub fn register_builtin_types(names: &mut Namespace) {
    for (expected, descriptor) in builtin_descriptors() {
        let qualified_name = descriptor.qualified_name().to_owned();
        match names.register(descriptor) {
            Ok(id) if id == expected => {}
            Ok(id) => panic!("built-in {qualified_name} registered as {id:?}, expected {expected:?}"),
            Err(err) => panic!("built-in registration failed: {err}"),
        }
    }

    for (package, name, arity) in BUILTIN_TEMPLATES {
        if let Err(err) = names.register_generic_template(package, name, arity) {
            panic!("built-in template registration failed: {err}");
        }
    }

    debug!(types = names.len(), "registered built-in types");
}
