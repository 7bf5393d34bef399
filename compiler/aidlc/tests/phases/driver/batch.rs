use aidl_diagnostic::{DiagnosticConfig, ErrorCode};
use aidlc::document::{Direction, Document, InterfaceDecl, MethodDecl};
use aidlc::{compile_batch, RegistryMode};
use pretty_assertions::assert_eq;

use crate::common::{codes, options};

fn documents() -> [Document; 2] {
    [
        Document::new("app", "IUser.aidl").interface(
            InterfaceDecl::new("IUser", 1)
                .method(MethodDecl::new("where", "Point", 2))
                .method(MethodDecl::new("move", "void", 3).param(Direction::InOut, "Point", "p")),
        ),
        Document::new("geo", "Point.aidl").parcelable("Point", 1),
    ]
}

#[test]
fn shared_registry_resolves_across_documents() {
    let outputs = compile_batch(&options(), &documents());

    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().all(|o| !o.has_errors()));
    let methods: Vec<&str> = outputs[0].methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, ["where", "move"]);

    let rendered = outputs[0].render();
    let proxy = rendered.find("// app.IUser.move (proxy)").unwrap();
    assert!(rendered.find("// app.IUser.where (stub)").unwrap() < proxy);
    assert!(rendered.contains("geo.Point.CREATOR.createFromParcel(_reply)"));
}

#[test]
fn per_file_registries_are_isolated() {
    let options = options().with_registry_mode(RegistryMode::PerFile);
    let outputs = compile_batch(&options, &documents());

    assert_eq!(outputs[0].file, "IUser.aidl");
    assert_eq!(codes(&outputs[0]), [ErrorCode::E1001, ErrorCode::E1001]);
    assert_eq!(outputs[1].file, "Point.aidl");
    assert!(!outputs[1].has_errors());
}

#[test]
fn per_file_batches_keep_input_order() {
    let documents: Vec<Document> = (0..16)
        .map(|i| {
            Document::new("pkg", format!("I{i}.aidl")).interface(
                InterfaceDecl::new(format!("I{i}"), 1).method(MethodDecl::new("ping", "void", 2)),
            )
        })
        .collect();
    let options = options().with_registry_mode(RegistryMode::PerFile);
    let outputs = compile_batch(&options, &documents);

    for (i, output) in outputs.iter().enumerate() {
        assert_eq!(output.file, format!("I{i}.aidl"));
        assert_eq!(output.methods[0].interface, format!("pkg.I{i}"));
    }
}

#[test]
fn dump_reflects_the_registry_after_each_document() {
    let options = options().with_dump_types(true);
    let outputs = compile_batch(&options, &documents());

    let first = outputs[0].type_dump.as_deref().unwrap();
    let last = outputs[1].type_dump.as_deref().unwrap();
    // Declarations all happen before any document is finished.
    assert!(first.contains("qualifiedName=geo.Point"), "{first}");
    assert!(first.lines().all(|line| line.starts_with("type: ")));
    assert!(last.lines().count() >= first.lines().count());
}

#[test]
fn diagnostics_respect_the_error_limit() {
    let mut interface = InterfaceDecl::new("IMany", 1);
    for i in 0..10 {
        interface = interface.method(MethodDecl::new(format!("m{i}"), "Nope", 2 + i));
    }
    let document = Document::new("pkg", "IMany.aidl").interface(interface);

    let limit = DiagnosticConfig::default().with_error_limit(3);
    let options = options().with_diagnostics(limit);
    let outputs = compile_batch(&options, &[document]);
    // Three errors, then the summary of the ones that were dropped.
    assert_eq!(
        codes(&outputs[0]),
        [
            ErrorCode::E1001,
            ErrorCode::E1001,
            ErrorCode::E1001,
            ErrorCode::E9002
        ]
    );
    assert!(!outputs[0].diagnostics[3].is_error());
    assert!(outputs[0].methods.is_empty());
}
