//! Type descriptors.
//!
//! A [`TypeDescriptor`] is the compile-time record for one resolvable type:
//! identity, capabilities, declaration site, and a [`TypeVariant`] that
//! selects its marshalling strategy. Descriptors are immutable once
//! built; the namespace owns them and hands out [`TypeId`] handles.

use aidl_ir::{DeclSite, Variable};
use smallvec::SmallVec;

use crate::{Capabilities, TypeId, TypeKind};

/// How a primitive travels through the parcel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Carrier {
    /// The parcel has a native accessor for the type.
    Direct,
    /// Written as an int: `v ? 1 : 0`, read back as `0 != readInt()`.
    BoolAsInt,
    /// Written as an int with a widening cast, read back with a narrowing one.
    CharAsInt,
}

/// Parcel accessors for one primitive kind.
///
/// The primitive descriptor is table-driven: every primitive shares one
/// marshalling implementation configured by these method names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveCodec {
    /// Source-level type name (`int`).
    pub name: &'static str,
    pub write: &'static str,
    pub read: &'static str,
    pub write_array: &'static str,
    pub create_array: &'static str,
    pub read_array: &'static str,
    pub carrier: Carrier,
}

impl PrimitiveCodec {
    pub const BOOLEAN: Self = Self {
        name: "boolean",
        write: "writeInt",
        read: "readInt",
        write_array: "writeBooleanArray",
        create_array: "createBooleanArray",
        read_array: "readBooleanArray",
        carrier: Carrier::BoolAsInt,
    };
    pub const BYTE: Self = Self::direct(
        "byte",
        ["writeByte", "readByte", "writeByteArray", "createByteArray", "readByteArray"],
    );
    pub const CHAR: Self = Self {
        name: "char",
        write: "writeInt",
        read: "readInt",
        write_array: "writeCharArray",
        create_array: "createCharArray",
        read_array: "readCharArray",
        carrier: Carrier::CharAsInt,
    };
    pub const INT: Self = Self::direct(
        "int",
        ["writeInt", "readInt", "writeIntArray", "createIntArray", "readIntArray"],
    );
    pub const LONG: Self = Self::direct(
        "long",
        ["writeLong", "readLong", "writeLongArray", "createLongArray", "readLongArray"],
    );
    pub const FLOAT: Self = Self::direct(
        "float",
        ["writeFloat", "readFloat", "writeFloatArray", "createFloatArray", "readFloatArray"],
    );
    pub const DOUBLE: Self = Self::direct(
        "double",
        ["writeDouble", "readDouble", "writeDoubleArray", "createDoubleArray", "readDoubleArray"],
    );

    /// Accessors in order: write, read, write array, create array, read array.
    const fn direct(name: &'static str, methods: [&'static str; 5]) -> Self {
        let [write, read, write_array, create_array, read_array] = methods;
        Self {
            name,
            write,
            read,
            write_array,
            create_array,
            read_array,
            carrier: Carrier::Direct,
        }
    }
}

/// Exception types carried across the binder boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    Remote,
    Runtime,
}

/// Binder-related built-ins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinderKind {
    /// `android.os.IBinder`, the raw handle. The only one with arrays.
    Handle,
    /// `android.os.IInterface`.
    Interface,
    /// `android.os.Binder`.
    Native,
    /// `android.os.BinderProxy`.
    Proxy,
}

/// Element strategy of a generic list, chosen when it is instantiated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListElement {
    /// `List<String>`: `writeStringList` / `createStringArrayList`.
    Strings,
    /// `List<IBinder>`: `writeBinderList` / `createBinderArrayList`.
    Binders,
    /// List of records: typed list calls with the record's creator.
    Typed { creator: String },
    /// Anything else: untyped list calls through the class loader.
    Untyped,
}

/// Argument data shared by every generic instantiation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericArgs {
    /// Type arguments in source order.
    pub args: SmallVec<[TypeId; 2]>,
    /// `<A,B>` with qualified argument names.
    pub rendered: String,
    /// Class used to allocate a fresh value, arguments included.
    pub instantiable: String,
}

/// Marshalling strategy of a descriptor.
///
/// Each of the six parcel operations is an exhaustive match over this enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeVariant {
    Void,
    Primitive(PrimitiveCodec),
    String,
    /// Shares string marshalling but has no array support.
    CharSequence,
    Exception(ExceptionKind),
    Binder(BinderKind),
    /// Compile-time helper never written to a parcel (`Object`, `Parcel`,
    /// `Context`, `ClassLoader`, ...).
    Helper,
    /// Untyped `java.util.Map`.
    Map,
    /// Untyped `java.util.List`.
    List,
    /// Parcelable record declared in interface source.
    UserData,
    /// Remote-callable interface.
    Interface { oneway: bool },
    /// Base generic: element-wise delegation to the arguments.
    Generic(GenericArgs),
    /// Ordered-sequence specialization (`java.util.List<T>`).
    GenericList {
        generic: GenericArgs,
        element: ListElement,
    },
}

/// The compile-time record for one type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    package: String,
    name: String,
    qualified_name: String,
    kind: TypeKind,
    caps: Capabilities,
    decl: Option<DeclSite>,
    variant: TypeVariant,
}

/// `package.name`, or just `name` in the default package.
pub(crate) fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_owned()
    } else {
        format!("{package}.{name}")
    }
}

impl TypeDescriptor {
    fn with_parts(
        package: &str,
        name: &str,
        kind: TypeKind,
        caps: Capabilities,
        decl: Option<DeclSite>,
        variant: TypeVariant,
    ) -> Self {
        TypeDescriptor {
            package: package.to_owned(),
            name: name.to_owned(),
            qualified_name: qualify(package, name),
            kind,
            caps,
            decl,
            variant,
        }
    }

    /// A built-in descriptor. Only bootstrap and tests build these.
    pub fn builtin(package: &str, name: &str, caps: Capabilities, variant: TypeVariant) -> Self {
        Self::with_parts(package, name, TypeKind::BuiltIn, caps, None, variant)
    }

    /// A primitive built-in (`int`, `boolean`, ...).
    pub fn primitive(codec: PrimitiveCodec) -> Self {
        Self::builtin(
            "",
            codec.name,
            Capabilities::CAN_WRITE_TO_PARCEL,
            TypeVariant::Primitive(codec),
        )
    }

    /// A parcelable record declared at `site`.
    pub fn parcelable(package: &str, name: &str, site: DeclSite) -> Self {
        Self::with_parts(
            package,
            name,
            TypeKind::UserData,
            Capabilities::WRITE_AND_OUT,
            Some(site),
            TypeVariant::UserData,
        )
    }

    /// A remote-callable interface declared at `site`.
    pub fn interface(package: &str, name: &str, oneway: bool, site: DeclSite) -> Self {
        Self::with_parts(
            package,
            name,
            TypeKind::Interface,
            Capabilities::CAN_WRITE_TO_PARCEL,
            Some(site),
            TypeVariant::Interface { oneway },
        )
    }

    /// A generic instantiation. The qualified name carries the arguments
    /// (`java.util.List<java.lang.String>`); package and name stay erased.
    pub(crate) fn generic(
        package: &str,
        name: &str,
        caps: Capabilities,
        variant: TypeVariant,
    ) -> Self {
        let rendered = match &variant {
            TypeVariant::Generic(generic) | TypeVariant::GenericList { generic, .. } => {
                generic.rendered.as_str()
            }
            _ => "",
        };
        let mut descriptor = Self::with_parts(
            package,
            name,
            TypeKind::Generic,
            caps,
            None,
            TypeVariant::Void,
        );
        descriptor.qualified_name.push_str(rendered);
        descriptor.variant = variant;
        descriptor
    }

    // === Identity ===

    #[inline]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub fn human_readable_kind(&self) -> &'static str {
        self.kind.human_readable()
    }

    #[inline]
    pub fn variant(&self) -> &TypeVariant {
        &self.variant
    }

    // === Capabilities ===

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[inline]
    pub fn can_write_to_parcel(&self) -> bool {
        self.caps.can_write_to_parcel()
    }

    #[inline]
    pub fn can_be_out_parameter(&self) -> bool {
        self.caps.can_be_out()
    }

    /// Whether an array of this type is representable.
    pub fn can_be_array(&self) -> bool {
        match &self.variant {
            TypeVariant::Primitive(_)
            | TypeVariant::String
            | TypeVariant::Binder(BinderKind::Handle)
            | TypeVariant::UserData
            | TypeVariant::GenericList { .. } => true,
            TypeVariant::Void
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Binder(_)
            | TypeVariant::Helper
            | TypeVariant::Map
            | TypeVariant::List
            | TypeVariant::Interface { .. }
            | TypeVariant::Generic(_) => false,
        }
    }

    // === Declaration site ===

    #[inline]
    pub fn decl_site(&self) -> Option<&DeclSite> {
        self.decl.as_ref()
    }

    /// Declaring file, empty for built-ins.
    #[inline]
    pub fn decl_file(&self) -> &str {
        DeclSite::file_of(self.decl.as_ref())
    }

    /// Declaring line, `-1` for built-ins.
    #[inline]
    pub fn decl_line(&self) -> i32 {
        DeclSite::line_of(self.decl.as_ref())
    }

    // === Names used by generated code ===

    /// Symbol to import for this type.
    pub fn import_type(&self) -> String {
        match self.variant {
            TypeVariant::Generic(_) | TypeVariant::GenericList { .. } => {
                qualify(&self.package, &self.name)
            }
            _ => self.qualified_name.clone(),
        }
    }

    /// Parameterized spelling (`java.util.Map<A,B>`); equal to the
    /// qualified name for non-generic types.
    #[inline]
    pub fn import_name(&self) -> &str {
        &self.qualified_name
    }

    /// `<A,B>` for generics, empty otherwise.
    pub fn generic_arguments(&self) -> &str {
        self.generic_args().map_or("", |g| g.rendered.as_str())
    }

    /// Type arguments in source order, empty for non-generics.
    pub fn generic_argument_types(&self) -> &[TypeId] {
        self.generic_args().map_or(&[], |g| g.args.as_slice())
    }

    fn generic_args(&self) -> Option<&GenericArgs> {
        match &self.variant {
            TypeVariant::Generic(generic) | TypeVariant::GenericList { generic, .. } => {
                Some(generic)
            }
            _ => None,
        }
    }

    /// Static creator used to instantiate values of this type.
    pub fn creator_name(&self) -> Option<String> {
        match &self.variant {
            TypeVariant::String | TypeVariant::CharSequence => {
                Some("android.os.Parcel.STRING_CREATOR".to_owned())
            }
            TypeVariant::UserData => Some(format!("{}.CREATOR", self.qualified_name)),
            TypeVariant::GenericList { element, .. } => match element {
                ListElement::Strings => Some("android.os.Parcel.STRING_CREATOR".to_owned()),
                ListElement::Typed { creator } => Some(creator.clone()),
                ListElement::Binders | ListElement::Untyped => None,
            },
            _ => None,
        }
    }

    /// Concrete class used to allocate a fresh value.
    pub fn instantiable_name(&self) -> String {
        match &self.variant {
            TypeVariant::List => "java.util.ArrayList".to_owned(),
            TypeVariant::Map => "java.util.HashMap".to_owned(),
            TypeVariant::Generic(generic) | TypeVariant::GenericList { generic, .. } => {
                generic.instantiable.clone()
            }
            _ => self.qualified_name.clone(),
        }
    }

    /// Whether this is a oneway interface. `None` for non-interfaces.
    pub fn oneway(&self) -> Option<bool> {
        match self.variant {
            TypeVariant::Interface { oneway } => Some(oneway),
            _ => None,
        }
    }

    // === Variables ===

    /// A variable holding one value of this type.
    pub fn variable(&self, name: impl Into<String>) -> Variable {
        Variable::new(self.qualified_name.clone(), name)
    }

    /// A variable holding an array of this type.
    pub fn array_variable(&self, name: impl Into<String>) -> Variable {
        Variable::new(format!("{}[]", self.qualified_name), name)
    }
}

#[cfg(test)]
mod tests;
