use aidl_diagnostic::DiagnosticQueue;
use pretty_assertions::assert_eq;

use super::*;
use crate::document::{Document, InterfaceDecl, MethodDecl};
use crate::passes::{check_interface, declare_document, resolve_document};

/// Run the passes over a single-interface document and generate every
/// surviving method.
fn generate(method: MethodDecl) -> Vec<GeneratedMethod> {
    let document = Document::new("pkg", "IFoo.aidl")
        .parcelable("Foo", 2)
        .interface(InterfaceDecl::new("IFoo", 4).method(method));

    let mut names = Namespace::with_builtins();
    let mut queue = DiagnosticQueue::new();
    declare_document(&mut names, &document, &mut queue);
    let mut interfaces = resolve_document(&mut names, &document, &mut queue);
    for interface in &mut interfaces {
        check_interface(&names, &document, interface, &mut queue);
    }
    assert!(!queue.has_errors(), "{:?}", queue.flush());

    let interface = &interfaces[0];
    interface
        .methods
        .iter()
        .map(|method| generate_method(&names, interface, method).unwrap())
        .collect()
}

fn single(method: MethodDecl) -> GeneratedMethod {
    let mut methods = generate(method);
    assert_eq!(methods.len(), 1);
    methods.remove(0)
}

#[test]
fn scalar_in_parameters_and_result() {
    let method = single(
        MethodDecl::new("add", "int", 5)
            .param(Direction::In, "int", "a")
            .param(Direction::In, "int", "b"),
    );
    assert_eq!(method.interface, "pkg.IFoo");
    assert_eq!(
        method.proxy.to_string(),
        "\
_data.writeInterfaceToken(DESCRIPTOR);
_data.writeInt(a);
_data.writeInt(b);
mRemote.transact(Stub.TRANSACTION_add, _data, _reply, 0);
_reply.readException();
int _result = _reply.readInt();
"
    );
    assert_eq!(
        method.stub.to_string(),
        "\
data.enforceInterface(DESCRIPTOR);
int _arg0 = data.readInt();
int _arg1 = data.readInt();
int _result = this.add(_arg0, _arg1);
reply.writeNoException();
reply.writeInt(_result);
"
    );
}

#[test]
fn oneway_methods_stop_after_the_call() {
    let method = single(
        MethodDecl::new("ping", "void", 5)
            .oneway()
            .param(Direction::In, "int", "seq"),
    );
    assert_eq!(
        method.proxy.to_string(),
        "\
_data.writeInterfaceToken(DESCRIPTOR);
_data.writeInt(seq);
mRemote.transact(Stub.TRANSACTION_ping, _data, _reply, android.os.IBinder.FLAG_ONEWAY);
"
    );
    assert_eq!(
        method.stub.to_string(),
        "\
data.enforceInterface(DESCRIPTOR);
int _arg0 = data.readInt();
this.ping(_arg0);
"
    );
}

#[test]
fn out_record_is_allocated_and_written_back() {
    let method = single(MethodDecl::new("fill", "void", 5).param(Direction::Out, "Foo", "f"));
    assert_eq!(
        method.proxy.to_string(),
        "\
_data.writeInterfaceToken(DESCRIPTOR);
mRemote.transact(Stub.TRANSACTION_fill, _data, _reply, 0);
_reply.readException();
if ((0 != _reply.readInt())) {
    f.readFromParcel(_reply);
}
"
    );
    assert_eq!(
        method.stub.to_string(),
        "\
data.enforceInterface(DESCRIPTOR);
pkg.Foo _arg0 = new pkg.Foo();
this.fill(_arg0);
reply.writeNoException();
if ((_arg0 != null)) {
    reply.writeInt(1);
    _arg0.writeToParcel(reply, android.os.Parcelable.PARCELABLE_WRITE_RETURN_VALUE);
}
else {
    reply.writeInt(0);
}
"
    );
}

#[test]
fn out_arrays_carry_their_length() {
    let method = single(MethodDecl::new("sizes", "void", 5).param(Direction::Out, "int[]", "s"));

    let proxy = method.proxy.to_string();
    assert!(
        proxy.contains(
            "\
if ((s == null)) {
    _data.writeInt(-1);
}
else {
    _data.writeInt(s.length);
}
"
        ),
        "{proxy}"
    );
    let transact = proxy.find("mRemote.transact").unwrap();
    assert!(proxy.find("s.length").unwrap() < transact);

    let stub = method.stub.to_string();
    assert!(
        stub.starts_with(
            "\
data.enforceInterface(DESCRIPTOR);
int _arg0_length = data.readInt();
int[] _arg0;
if ((_arg0_length < 0)) {
    _arg0 = null;
}
else {
    _arg0 = new int[_arg0_length];
}
this.sizes(_arg0);
reply.writeNoException();
"
        ),
        "{stub}"
    );
}

#[test]
fn out_generic_list_uses_the_instantiable_class() {
    let method = single(
        MethodDecl::new("names", "void", 5).param(Direction::Out, "List<String>", "out"),
    );
    let stub = method.stub.to_string();
    assert!(
        stub.contains(
            "java.util.List<java.lang.String> _arg0 = \
             new java.util.ArrayList<java.lang.String>();\n"
        ),
        "{stub}"
    );
    assert!(stub.ends_with("reply.writeStringList(_arg0);\n"), "{stub}");
    assert!(method
        .proxy
        .to_string()
        .ends_with("_reply.readStringList(out);\n"));
}

#[test]
fn class_loader_is_declared_once_per_side() {
    let method = single(
        MethodDecl::new("swap", "Map", 5)
            .param(Direction::In, "Map", "a")
            .param(Direction::InOut, "List", "b"),
    );
    let loader = "java.lang.ClassLoader cl = this.getClass().getClassLoader();";

    let proxy = method.proxy.to_string();
    assert_eq!(proxy.matches(loader).count(), 1, "{proxy}");
    let stub = method.stub.to_string();
    assert_eq!(stub.matches(loader).count(), 1, "{stub}");
    assert!(stub.contains("java.util.Map _arg0 = data.readHashMap(cl);"));
    assert!(stub.contains("java.util.List _arg1 = data.readArrayList(cl);"));
}

#[test]
fn render_labels_both_sides() {
    let method = single(MethodDecl::new("stop", "void", 5));
    assert_eq!(
        method.render(),
        "\
// pkg.IFoo.stop (proxy)
_data.writeInterfaceToken(DESCRIPTOR);
mRemote.transact(Stub.TRANSACTION_stop, _data, _reply, 0);
_reply.readException();
// pkg.IFoo.stop (stub)
data.enforceInterface(DESCRIPTOR);
this.stop();
reply.writeNoException();
"
    );
}
