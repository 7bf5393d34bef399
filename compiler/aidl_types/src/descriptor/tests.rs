use aidl_ir::DeclSite;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_package_omits_separator() {
    let int = TypeDescriptor::primitive(PrimitiveCodec::INT);
    assert_eq!(int.package(), "");
    assert_eq!(int.qualified_name(), "int");
    assert_eq!(int.import_type(), "int");
}

#[test]
fn parcelable_carries_site_and_capabilities() {
    let foo = TypeDescriptor::parcelable("pkg", "Foo", DeclSite::new("Foo.aidl", 10));

    assert_eq!(foo.qualified_name(), "pkg.Foo");
    assert_eq!(foo.kind(), TypeKind::UserData);
    assert_eq!(foo.human_readable_kind(), "a parcelable");
    assert_eq!(foo.decl_file(), "Foo.aidl");
    assert_eq!(foo.decl_line(), 10);
    assert!(foo.can_write_to_parcel());
    assert!(foo.can_be_out_parameter());
    assert!(foo.can_be_array());
    assert_eq!(foo.creator_name().as_deref(), Some("pkg.Foo.CREATOR"));
    assert_eq!(foo.instantiable_name(), "pkg.Foo");
}

#[test]
fn interface_is_not_an_out_parameter() {
    let iface = TypeDescriptor::interface("pkg", "IFoo", true, DeclSite::new("IFoo.aidl", 3));

    assert_eq!(iface.kind(), TypeKind::Interface);
    assert_eq!(iface.oneway(), Some(true));
    assert!(iface.can_write_to_parcel());
    assert!(!iface.can_be_out_parameter());
    assert!(!iface.can_be_array());
    assert_eq!(iface.creator_name(), None);
}

#[test]
fn builtins_have_no_site() {
    let string = TypeDescriptor::builtin(
        "java.lang",
        "String",
        Capabilities::CAN_WRITE_TO_PARCEL,
        TypeVariant::String,
    );
    assert_eq!(string.decl_site(), None);
    assert_eq!(string.decl_file(), "");
    assert_eq!(string.decl_line(), -1);
    assert_eq!(string.human_readable_kind(), "a built in");
    assert_eq!(
        string.creator_name().as_deref(),
        Some("android.os.Parcel.STRING_CREATOR")
    );
    assert_eq!(string.oneway(), None);
}

#[test]
fn untyped_containers_instantiate_concrete_classes() {
    let list = TypeDescriptor::builtin(
        "java.util",
        "List",
        Capabilities::WRITE_AND_OUT,
        TypeVariant::List,
    );
    let map = TypeDescriptor::builtin(
        "java.util",
        "Map",
        Capabilities::WRITE_AND_OUT,
        TypeVariant::Map,
    );
    assert_eq!(list.instantiable_name(), "java.util.ArrayList");
    assert_eq!(map.instantiable_name(), "java.util.HashMap");
    assert!(!list.can_be_array());
    assert!(!map.can_be_array());
}

#[test]
fn generic_names() {
    let generic = GenericArgs {
        args: smallvec::smallvec![TypeId::STRING, TypeId::INT],
        rendered: "<java.lang.String,int>".to_owned(),
        instantiable: "java.util.HashMap<java.lang.String,int>".to_owned(),
    };
    let map = TypeDescriptor::generic(
        "java.util",
        "Map",
        Capabilities::WRITE_AND_OUT,
        TypeVariant::Generic(generic),
    );

    assert_eq!(map.kind(), TypeKind::Generic);
    assert_eq!(map.qualified_name(), "java.util.Map<java.lang.String,int>");
    assert_eq!(map.import_name(), "java.util.Map<java.lang.String,int>");
    assert_eq!(map.import_type(), "java.util.Map");
    assert_eq!(map.generic_arguments(), "<java.lang.String,int>");
    assert_eq!(
        map.generic_argument_types(),
        &[TypeId::STRING, TypeId::INT]
    );
    assert_eq!(
        map.instantiable_name(),
        "java.util.HashMap<java.lang.String,int>"
    );
    assert!(!map.can_be_array());
}

#[test]
fn variables_use_qualified_type() {
    let foo = TypeDescriptor::parcelable("pkg", "Foo", DeclSite::new("Foo.aidl", 1));
    assert_eq!(foo.variable("v").ty, "pkg.Foo");
    assert_eq!(foo.array_variable("v").ty, "pkg.Foo[]");
}
