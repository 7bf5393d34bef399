use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_with_labels_notes_and_help() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unknown type `Foo`")
        .with_label(DeclSite::new("IFoo.aidl", 7), "referenced here")
        .with_note("note text")
        .with_suggestion("help text");

    assert_eq!(
        diag.to_string(),
        "error[E1001]: unknown type `Foo`\n  --> IFoo.aidl:7: referenced here\n  = note: note text\n  = help: help text"
    );
}

#[test]
fn primary_site_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_secondary_label(DeclSite::new("a.aidl", 1), "first")
        .with_label(DeclSite::new("b.aidl", 2), "second");

    assert_eq!(diag.primary_site(), Some(&DeclSite::new("b.aidl", 2)));
}

#[test]
fn redefinition_reports_both_sites() {
    let diag = redefinition(
        DeclSite::new("Bar.aidl", 3),
        "pkg.Foo",
        "an interface",
        Some(DeclSite::new("Foo.aidl", 10)),
        "a parcelable",
    );

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.labels[1].site, DeclSite::new("Foo.aidl", 10));
    assert!(diag.message.contains("pkg.Foo"));
}

#[test]
fn redefinition_of_builtin_uses_note() {
    let diag = redefinition(
        DeclSite::new("String.aidl", 1),
        "java.lang.String",
        "a parcelable",
        None,
        "a built in",
    );

    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.notes, vec!["java.lang.String is a built in type".to_owned()]);
}

#[test]
fn ambiguous_lists_candidates() {
    let candidates = vec!["a.Foo".to_owned(), "b.Foo".to_owned()];
    let diag = ambiguous_type(DeclSite::new("IFoo.aidl", 4), "Foo", &candidates);

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.notes.len(), 2);
    assert!(diag.is_error());
}
