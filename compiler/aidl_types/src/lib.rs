//! Type registry and marshalling code generator for the AIDL compiler.
//!
//! # Architecture
//!
//! - [`TypeId`]: 32-bit handle into a [`Namespace`] arena; built-ins have
//!   fixed handles
//! - [`TypeDescriptor`]: immutable record for one type, with a
//!   [`TypeVariant`] that selects its marshalling strategy
//! - [`Namespace`]: descriptors and [`GenericTemplate`]s of one
//!   compilation, with exact and fallback name resolution
//! - [`ClassLoaderSlot`]: the class-loader local shared by one generated
//!   scope
//! - [`bootstrap`]: seeds a namespace with the built-in types
//!
//! # Code generation
//!
//! Each descriptor emits [`aidl_ir::Statement`]s for six operations:
//! write, create and read, for a scalar and for an array. Legality is
//! checked by the caller through [`TypeDescriptor::can_be_array`] and
//! [`TypeDescriptor::can_be_out_parameter`]; calling an operation out of
//! contract yields a [`MarshalError`] instead of emitting code.

pub mod bootstrap;
mod class_loader;
mod descriptor;
mod error;
mod flags;
mod id;
mod kind;
mod marshal;
mod namespace;

pub use class_loader::{ClassLoaderSlot, CLASS_LOADER_VAR};
pub use descriptor::{
    BinderKind, Carrier, ExceptionKind, GenericArgs, ListElement, PrimitiveCodec, TypeDescriptor,
    TypeVariant,
};
pub use error::{LookupError, MarshalError, MarshalOp, RegisterError};
pub use flags::{Capabilities, WriteFlags};
pub use id::TypeId;
pub use kind::TypeKind;
pub use marshal::write_flags_expr;
pub use namespace::{GenericTemplate, Namespace};
