use aidl_diagnostic::ErrorCode;
use aidlc::document::{Direction, Document, InterfaceDecl, MethodDecl};
use aidlc::CompileOutput;
use pretty_assertions::assert_eq;

use crate::common::{codes, compile, label_sites, only_diagnostic};

/// Compile `IFoo` with a `Foo` parcelable alongside.
fn compile_methods(oneway: bool, methods: Vec<MethodDecl>) -> CompileOutput {
    let mut interface = InterfaceDecl::new("IFoo", 3);
    if oneway {
        interface = interface.oneway();
    }
    for method in methods {
        interface = interface.method(method);
    }
    let document = Document::new("pkg", "IFoo.aidl")
        .parcelable("Foo", 1)
        .interface(interface);
    compile(&document).1
}

#[test]
fn helper_types_cannot_be_marshalled() {
    let output = compile_methods(
        false,
        vec![MethodDecl::new("m", "void", 4).param(Direction::In, "TextUtils", "t")],
    );
    let diag = only_diagnostic(&output);
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "android.text.TextUtils cannot be marshalled");
}

#[test]
fn void_parameters_are_rejected() {
    let output = compile_methods(
        false,
        vec![MethodDecl::new("m", "void", 4).param(Direction::In, "void", "v")],
    );
    assert_eq!(codes(&output), [ErrorCode::E2001]);
}

#[test]
fn interface_arrays_are_rejected() {
    let output = compile_methods(
        false,
        vec![MethodDecl::new("m", "void", 4).param(Direction::In, "IFoo[]", "all")],
    );
    let diag = only_diagnostic(&output);
    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(label_sites(diag), ["IFoo.aidl:4"]);
}

#[test]
fn out_parameters_need_a_readable_type() {
    let output = compile_methods(
        false,
        vec![
            MethodDecl::new("a", "void", 4).param(Direction::Out, "String", "s"),
            MethodDecl::new("b", "void", 5).param(Direction::InOut, "int", "n"),
            MethodDecl::new("c", "void", 6).param(Direction::Out, "IFoo", "i"),
        ],
    );
    assert_eq!(
        codes(&output),
        [ErrorCode::E2003, ErrorCode::E2003, ErrorCode::E2003]
    );
    assert_eq!(
        output.diagnostics[2].notes,
        ["pkg.IFoo is an interface type"]
    );
}

#[test]
fn out_arrays_and_records_are_legal() {
    let output = compile_methods(
        false,
        vec![MethodDecl::new("m", "void", 4)
            .param(Direction::Out, "String[]", "names")
            .param(Direction::InOut, "Foo", "foo")
            .param(Direction::Out, "Map", "map")],
    );
    assert!(!output.has_errors(), "{:#?}", output.diagnostics);
    assert_eq!(output.methods.len(), 1);
}

#[test]
fn oneway_methods_cannot_return_or_fill() {
    let output = compile_methods(
        false,
        vec![
            MethodDecl::new("a", "int", 4).oneway(),
            MethodDecl::new("b", "void", 5)
                .oneway()
                .param(Direction::Out, "Foo", "foo"),
            MethodDecl::new("c", "void", 6)
                .oneway()
                .param(Direction::In, "Foo", "foo"),
        ],
    );
    assert_eq!(codes(&output), [ErrorCode::E2004, ErrorCode::E2004]);
    assert_eq!(label_sites(&output.diagnostics[0]), ["IFoo.aidl:4"]);
    assert_eq!(label_sites(&output.diagnostics[1]), ["IFoo.aidl:5"]);
}

#[test]
fn oneway_interface_applies_to_every_method() {
    let output = compile_methods(true, vec![MethodDecl::new("get", "String", 4)]);
    assert_eq!(codes(&output), [ErrorCode::E2004]);

    let output = compile_methods(true, vec![MethodDecl::new("fire", "void", 4)]);
    assert!(!output.has_errors());
    assert!(output.methods[0]
        .proxy
        .to_string()
        .contains("android.os.IBinder.FLAG_ONEWAY"));
}

#[test]
fn duplicate_names() {
    let output = compile_methods(
        false,
        vec![
            MethodDecl::new("m", "void", 4)
                .param(Direction::In, "int", "x")
                .param(Direction::In, "long", "x"),
            MethodDecl::new("n", "void", 5),
            MethodDecl::new("n", "int", 6),
        ],
    );
    assert_eq!(codes(&output), [ErrorCode::E2005, ErrorCode::E2005]);
    assert_eq!(
        output.diagnostics[1].message,
        "method n is declared more than once"
    );
    assert_eq!(label_sites(&output.diagnostics[1]), ["IFoo.aidl:6"]);
}

#[test]
fn every_failure_is_reported_in_one_run() {
    let output = compile_methods(
        false,
        vec![
            MethodDecl::new("a", "void", 4).param(Direction::In, "Missing", "x"),
            MethodDecl::new("b", "void", 5).param(Direction::Out, "int", "y"),
            MethodDecl::new("c", "void", 6).param(Direction::In, "IFoo[]", "z"),
        ],
    );
    assert_eq!(
        codes(&output),
        [ErrorCode::E1001, ErrorCode::E2003, ErrorCode::E2002]
    );
    assert!(output.methods.is_empty());
}
