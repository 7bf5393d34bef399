//! Registry behavior observed through compilations.

use aidl_ir::StatementBlock;
use aidl_types::{ClassLoaderSlot, ListElement, TypeId, TypeKind, TypeVariant, WriteFlags};
use aidlc::document::{Direction, Document, InterfaceDecl, MethodDecl};
use pretty_assertions::assert_eq;

use crate::common::{codes, compile};

#[test]
fn builtin_array_support_table() {
    let (compiler, _) = compile(&Document::new("pkg", "Empty.aidl"));
    let names = compiler.namespace();

    let expected = [
        (TypeId::VOID, false),
        (TypeId::BOOLEAN, true),
        (TypeId::BYTE, true),
        (TypeId::CHAR, true),
        (TypeId::INT, true),
        (TypeId::LONG, true),
        (TypeId::FLOAT, true),
        (TypeId::DOUBLE, true),
        (TypeId::STRING, true),
        (TypeId::CHAR_SEQUENCE, false),
        (TypeId::MAP, false),
        (TypeId::LIST, false),
        (TypeId::REMOTE_EXCEPTION, false),
        (TypeId::RUNTIME_EXCEPTION, false),
        (TypeId::IBINDER, true),
        (TypeId::IINTERFACE, false),
        (TypeId::PARCEL, false),
    ];
    for (id, can_be_array) in expected {
        assert_eq!(
            names[id].can_be_array(),
            can_be_array,
            "{}",
            names[id].qualified_name()
        );
    }
}

#[test]
fn declared_record_keeps_its_site() {
    let document = Document::new("pkg", "Foo.aidl").parcelable("Foo", 10);
    let (compiler, output) = compile(&document);
    assert!(!output.has_errors());

    let names = compiler.namespace();
    let id = names.find("pkg", "Foo").unwrap();
    let foo = &names[id];
    assert_eq!(foo.qualified_name(), "pkg.Foo");
    assert_eq!(foo.kind(), TypeKind::UserData);
    assert_eq!(foo.decl_file(), "Foo.aidl");
    assert_eq!(foo.decl_line(), 10);
    assert!(foo.can_be_array());

    // Records support every array operation.
    let parcel = names[TypeId::PARCEL].variable("_data");
    let v = foo.array_variable("v");
    let mut block = StatementBlock::new();
    let mut cl = ClassLoaderSlot::new();
    foo.write_array_to_parcel(names, &mut block, &v, &parcel, WriteFlags::empty())
        .unwrap();
    foo.create_array_from_parcel(names, &mut block, &v, &parcel, &mut cl)
        .unwrap();
    foo.read_array_from_parcel(names, &mut block, &v, &parcel, &mut cl)
        .unwrap();
    assert_eq!(block.len(), 3);
}

#[test]
fn interfaces_cannot_be_arrays() {
    let document = Document::new("pkg", "IFoo.aidl").interface(InterfaceDecl::new("IFoo", 1));
    let (compiler, _) = compile(&document);
    let names = compiler.namespace();
    let ifoo = &names[names.find("pkg", "IFoo").unwrap()];

    assert_eq!(ifoo.oneway(), Some(false));
    assert!(!ifoo.can_be_array());
    let mut block = StatementBlock::new();
    let parcel = names[TypeId::PARCEL].variable("_data");
    assert!(ifoo
        .write_array_to_parcel(
            names,
            &mut block,
            &ifoo.array_variable("v"),
            &parcel,
            WriteFlags::empty()
        )
        .is_err());
    assert!(block.is_empty());
}

#[test]
fn list_of_strings_parameter_uses_the_sequence_specialization() {
    let document = Document::new("pkg", "INames.aidl").interface(
        InterfaceDecl::new("INames", 1)
            .method(
                MethodDecl::new("set", "void", 2).param(Direction::In, "List<String>", "all"),
            ),
    );
    let (compiler, output) = compile(&document);
    assert!(codes(&output).is_empty(), "{:#?}", output.diagnostics);

    let names = compiler.namespace();
    let id = names.find_qualified("java.util.List<java.lang.String>").unwrap();
    assert!(matches!(
        names[id].variant(),
        TypeVariant::GenericList {
            element: ListElement::Strings,
            ..
        }
    ));
    assert!(names[id].can_be_array());
    assert_eq!(
        names[id].creator_name().as_deref(),
        Some("android.os.Parcel.STRING_CREATOR")
    );

    let proxy = output.methods[0].proxy.to_string();
    assert!(proxy.contains("_data.writeStringList(all);\n"), "{proxy}");
    let stub = output.methods[0].stub.to_string();
    assert!(
        stub.contains("java.util.List<java.lang.String> _arg0 = data.createStringArrayList();\n"),
        "{stub}"
    );
}

#[test]
fn map_arguments_keep_their_order() {
    let document = Document::new("pkg", "IMap.aidl").parcelable("Foo", 1).interface(
        InterfaceDecl::new("IMap", 2)
            .method(
                MethodDecl::new("put", "void", 3).param(Direction::In, "Map<String,Foo>", "m"),
            ),
    );
    let (compiler, output) = compile(&document);
    assert!(codes(&output).is_empty(), "{:#?}", output.diagnostics);

    let names = compiler.namespace();
    let id = names.find_qualified("java.util.Map<java.lang.String,pkg.Foo>").unwrap();
    let foo = names.find("pkg", "Foo").unwrap();
    assert_eq!(names[id].generic_argument_types(), [TypeId::STRING, foo]);
    assert_eq!(names[id].generic_arguments(), "<java.lang.String,pkg.Foo>");
    assert_eq!(
        names[id].instantiable_name(),
        "java.util.HashMap<java.lang.String,pkg.Foo>"
    );
}
