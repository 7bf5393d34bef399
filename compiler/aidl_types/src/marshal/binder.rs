//! Binder handles, interface references and exceptions.

use aidl_ir::{CompareOp, Expression, Statement, StatementBlock, Variable};

use super::parcel_call;
use crate::{BinderKind, MarshalError, Namespace, TypeId};

pub(super) fn write(kind: BinderKind, block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    let method = match kind {
        BinderKind::Interface => "writeStrongInterface",
        BinderKind::Handle | BinderKind::Native | BinderKind::Proxy => "writeStrongBinder",
    };
    block.push_expr(parcel_call(parcel, method, vec![value.expr()]));
}

pub(super) fn create(
    kind: BinderKind,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) -> Result<(), MarshalError> {
    let read_binder = parcel_call(parcel, "readStrongBinder", Vec::new());
    let init = match kind {
        BinderKind::Handle => read_binder,
        BinderKind::Native | BinderKind::Proxy => Expression::cast(value.ty.clone(), read_binder),
        BinderKind::Interface => {
            // IBinder v_binder = parcel.readStrongBinder();
            // v = v_binder != null ? v_binder.queryLocalInterface(..) : null
            let handle = names.builtin(TypeId::IBINDER)?;
            let binder = value.derived(handle.qualified_name(), "binder");
            block.push(Statement::declare(&binder, read_binder));
            let descriptor = Expression::call(binder.expr(), "getInterfaceDescriptor", Vec::new());
            Expression::ternary(
                Expression::compare(binder.expr(), CompareOp::Ne, Expression::null()),
                Expression::call(binder.expr(), "queryLocalInterface", vec![descriptor]),
                Expression::null(),
            )
        }
    };
    block.push(Statement::declare(value, init));
    Ok(())
}

pub(super) fn write_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "writeBinderArray", vec![value.expr()]));
}

pub(super) fn create_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push(Statement::declare(
        value,
        parcel_call(parcel, "createBinderArray", Vec::new()),
    ));
}

pub(super) fn read_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "readBinderArray", vec![value.expr()]));
}

pub(super) fn write_exception(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "writeException", vec![value.expr()]));
}

/// `T v = ((T) parcel.createException(parcel.readInt(), parcel.readString()));`
pub(super) fn create_exception(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    let created = parcel_call(
        parcel,
        "createException",
        vec![
            parcel_call(parcel, "readInt", Vec::new()),
            parcel_call(parcel, "readString", Vec::new()),
        ],
    );
    block.push(Statement::declare(
        value,
        Expression::cast(value.ty.clone(), created),
    ));
}
