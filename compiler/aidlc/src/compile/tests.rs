use aidl_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;
use crate::document::{Direction, InterfaceDecl, MethodDecl};

fn codes(output: &CompileOutput) -> Vec<ErrorCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn clean_document_generates_every_method() {
    let document = Document::new("pkg", "IFoo.aidl").interface(
        InterfaceDecl::new("IFoo", 3)
            .method(MethodDecl::new("a", "void", 4))
            .method(MethodDecl::new("b", "int", 5).param(Direction::In, "int", "x")),
    );
    let output = Compiler::new(CompilerOptions::new()).compile(&document);

    assert!(!output.has_errors());
    assert_eq!(output.file, "IFoo.aidl");
    let names: Vec<&str> = output.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert!(output.render().contains("// pkg.IFoo.b (stub)\n"));
    assert_eq!(output.type_dump, None);
}

#[test]
fn errors_suppress_generation() {
    let document = Document::new("pkg", "IFoo.aidl").interface(
        InterfaceDecl::new("IFoo", 3)
            .method(MethodDecl::new("good", "void", 4))
            .method(MethodDecl::new("bad", "Missing", 5)),
    );
    let output = Compiler::new(CompilerOptions::new()).compile(&document);

    assert!(output.has_errors());
    assert_eq!(codes(&output), [ErrorCode::E1001]);
    assert!(output.methods.is_empty());
}

#[test]
fn dump_is_attached_on_request() {
    let document = Document::new("pkg", "Foo.aidl").parcelable("Foo", 1);
    let options = CompilerOptions::new().with_dump_types(true);
    let output = Compiler::new(options).compile(&document);

    let dump = output.type_dump.unwrap();
    assert!(dump.contains("pkg.Foo"), "{dump}");
}

#[test]
fn shared_batch_sees_later_declarations() {
    let user = Document::new("app", "IUser.aidl").interface(
        InterfaceDecl::new("IUser", 1)
            .method(MethodDecl::new("get", "Point", 2)),
    );
    let point = Document::new("geo", "Point.aidl").parcelable("Point", 1);

    let outputs = compile_batch(&CompilerOptions::new(), &[user, point]);
    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().all(|o| !o.has_errors()));
    assert_eq!(outputs[0].methods.len(), 1);
}

#[test]
fn per_file_batch_isolates_documents() {
    let user = Document::new("app", "IUser.aidl").interface(
        InterfaceDecl::new("IUser", 1)
            .method(MethodDecl::new("get", "Point", 2)),
    );
    let point = Document::new("geo", "Point.aidl").parcelable("Point", 1);

    let options = CompilerOptions::new().with_registry_mode(RegistryMode::PerFile);
    let outputs = compile_batch(&options, &[user, point]);
    assert_eq!(outputs[0].file, "IUser.aidl");
    assert_eq!(codes(&outputs[0]), [ErrorCode::E1001]);
    assert!(!outputs[1].has_errors());
}

#[test]
fn tracing_setup_is_idempotent() {
    crate::init_tracing();
    crate::init_tracing();
    let output = Compiler::new(CompilerOptions::new()).compile(&Document::new("pkg", "E.aidl"));
    assert!(output.diagnostics.is_empty());
}
