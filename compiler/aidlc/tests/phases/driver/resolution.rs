use aidl_diagnostic::ErrorCode;
use aidlc::compile_batch;
use aidlc::document::{Direction, Document, InterfaceDecl, MethodDecl};
use pretty_assertions::assert_eq;

use crate::common::{codes, compile, label_sites, only_diagnostic, options};

#[test]
fn unknown_type_is_reported_at_the_reference() {
    let document = Document::new("pkg", "IFoo.aidl").interface(
        InterfaceDecl::new("IFoo", 1)
            .method(MethodDecl::new("get", "Nope", 7).param(Direction::In, "Gone", "g")),
    );
    let (_, output) = compile(&document);

    // Both references are reported, not just the first.
    assert_eq!(codes(&output), [ErrorCode::E1001, ErrorCode::E1001]);
    assert_eq!(label_sites(&output.diagnostics[0]), ["IFoo.aidl:7"]);
    assert!(output.diagnostics[1].message.contains("Gone"));
    assert!(output.methods.is_empty());
}

#[test]
fn ambiguous_simple_name_lists_candidates() {
    let documents = [
        Document::new("geo", "geo/Point.aidl").parcelable("Point", 1),
        Document::new("gfx", "gfx/Point.aidl").parcelable("Point", 1),
        Document::new("app", "IMap.aidl").interface(
            InterfaceDecl::new("IMap", 1)
                .method(MethodDecl::new("center", "Point", 2))
                .method(MethodDecl::new("origin", "gfx.Point", 3)),
        ),
    ];
    let outputs = compile_batch(&options(), &documents);

    let diag = only_diagnostic(&outputs[2]);
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(label_sites(diag), ["IMap.aidl:2"]);
    assert_eq!(
        diag.notes,
        ["could be `geo.Point`", "could be `gfx.Point`"]
    );
}

#[test]
fn qualified_reference_disambiguates() {
    let documents = [
        Document::new("geo", "geo/Point.aidl").parcelable("Point", 1),
        Document::new("gfx", "gfx/Point.aidl").parcelable("Point", 1),
        Document::new("app", "IMap.aidl").interface(
            InterfaceDecl::new("IMap", 1).method(MethodDecl::new("origin", "gfx.Point", 3)),
        ),
    ];
    let outputs = compile_batch(&options(), &documents);

    assert!(outputs.iter().all(|o| !o.has_errors()));
    let stub = outputs[2].methods[0].stub.to_string();
    assert!(stub.contains("gfx.Point _result = this.origin();"), "{stub}");
}

#[test]
fn redefinition_across_files_reports_both_sites() {
    let documents = [
        Document::new("pkg", "A.aidl").parcelable("Thing", 1),
        Document::new("pkg", "B.aidl").interface(InterfaceDecl::new("Thing", 3)),
    ];
    let outputs = compile_batch(&options(), &documents);

    assert!(!outputs[0].has_errors());
    let diag = only_diagnostic(&outputs[1]);
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(label_sites(diag), ["B.aidl:3", "A.aidl:1"]);
    assert_eq!(
        diag.message,
        "attempt to redefine pkg.Thing as an interface"
    );
}

#[test]
fn redefining_a_builtin_has_no_previous_site() {
    let document = Document::new("java.lang", "String.aidl").parcelable("String", 4);
    let (_, output) = compile(&document);

    let diag = only_diagnostic(&output);
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(label_sites(diag), ["String.aidl:4"]);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn redefined_interface_is_not_compiled_twice() {
    let first = Document::new("pkg", "IFoo.aidl")
        .interface(InterfaceDecl::new("IFoo", 1).method(MethodDecl::new("a", "void", 2)));
    let second = Document::new("pkg", "Copy.aidl")
        .interface(InterfaceDecl::new("IFoo", 1).method(MethodDecl::new("b", "Nope", 2)));
    let outputs = compile_batch(&options(), &[first, second]);

    assert_eq!(outputs[0].methods.len(), 1);
    // Only the redefinition; the copy's methods are never resolved.
    assert_eq!(codes(&outputs[1]), [ErrorCode::E1003]);
}

#[test]
fn wrong_generic_arity() {
    let document = Document::new("pkg", "IFoo.aidl").interface(
        InterfaceDecl::new("IFoo", 1)
            .method(MethodDecl::new("m", "void", 2).param(Direction::In, "Map<String>", "m")),
    );
    let (_, output) = compile(&document);
    assert_eq!(codes(&output), [ErrorCode::E1004]);
}
