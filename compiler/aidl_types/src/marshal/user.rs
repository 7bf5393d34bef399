//! Parcelable records and interfaces declared in interface source.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};

use super::{not_null, parcel_call, read_marker, write_flags_expr, write_with_marker};
use crate::{MarshalError, Namespace, TypeDescriptor, WriteFlags};

fn creator(descriptor: &TypeDescriptor) -> Expression {
    Expression::field(
        Expression::class(descriptor.qualified_name()),
        "CREATOR",
    )
}

/// `if (v != null) { writeInt(1); v.writeToParcel(parcel, flags); } else { writeInt(0); }`
pub(super) fn write_record(
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let flags = write_flags_expr(names, flags)?;
    write_with_marker(block, value, parcel, |present| {
        present.push_expr(Expression::call(
            value.expr(),
            "writeToParcel",
            vec![parcel.expr(), flags],
        ));
    });
    Ok(())
}

pub(super) fn create_record(
    descriptor: &TypeDescriptor,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push(Statement::declare_uninit(value));
    block.push(Statement::If {
        condition: read_marker(parcel),
        then_block: vec![Statement::assign(
            value,
            Expression::call(creator(descriptor), "createFromParcel", vec![parcel.expr()]),
        )]
        .into(),
        else_block: Some(vec![Statement::assign(value, Expression::null())].into()),
    });
}

/// Records read into an existing value only when the marker says one was written.
pub(super) fn read_record(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push(Statement::If {
        condition: read_marker(parcel),
        then_block: vec![Statement::Expr(Expression::call(
            value.expr(),
            "readFromParcel",
            vec![parcel.expr()],
        ))]
        .into(),
        else_block: None,
    });
}

pub(super) fn write_record_array(
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let flags = write_flags_expr(names, flags)?;
    block.push_expr(parcel_call(parcel, "writeTypedArray", vec![value.expr(), flags]));
    Ok(())
}

pub(super) fn create_record_array(
    descriptor: &TypeDescriptor,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push(Statement::declare(
        value,
        parcel_call(parcel, "createTypedArray", vec![creator(descriptor)]),
    ));
}

pub(super) fn read_record_array(
    descriptor: &TypeDescriptor,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push_expr(parcel_call(
        parcel,
        "readTypedArray",
        vec![value.expr(), creator(descriptor)],
    ));
}

/// `parcel.writeStrongBinder(((v != null) ? (v.asBinder()) : (null)));`
pub(super) fn write_interface(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    let binder = Expression::ternary(
        not_null(value),
        Expression::call(value.expr(), "asBinder", Vec::new()),
        Expression::null(),
    );
    block.push_expr(parcel_call(parcel, "writeStrongBinder", vec![binder]));
}

/// `T v = T.Stub.asInterface(parcel.readStrongBinder());`
pub(super) fn create_interface(
    descriptor: &TypeDescriptor,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    let stub = Expression::class(format!("{}.Stub", descriptor.qualified_name()));
    let proxy = Expression::call(
        stub,
        "asInterface",
        vec![parcel_call(parcel, "readStrongBinder", Vec::new())],
    );
    block.push(Statement::declare(value, proxy));
}
