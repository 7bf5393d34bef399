//! `String` and `CharSequence`.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};

use super::{parcel_call, read_marker, write_flags_expr, write_with_marker};
use crate::{MarshalError, Namespace, TypeId, WriteFlags};

pub(super) fn write(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "writeString", vec![value.expr()]));
}

pub(super) fn create(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push(Statement::declare(
        value,
        parcel_call(parcel, "readString", Vec::new()),
    ));
}

pub(super) fn write_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "writeStringArray", vec![value.expr()]));
}

pub(super) fn create_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push(Statement::declare(
        value,
        parcel_call(parcel, "createStringArray", Vec::new()),
    ));
}

pub(super) fn read_array(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    block.push_expr(parcel_call(parcel, "readStringArray", vec![value.expr()]));
}

// Char sequences go through TextUtils behind a null marker.

pub(super) fn write_char_sequence(
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let text_utils = Expression::class(names.builtin(TypeId::TEXT_UTILS)?.qualified_name());
    let flags = write_flags_expr(names, flags)?;
    write_with_marker(block, value, parcel, |present| {
        present.push_expr(Expression::call(
            text_utils,
            "writeToParcel",
            vec![value.expr(), parcel.expr(), flags],
        ));
    });
    Ok(())
}

pub(super) fn create_char_sequence(
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) -> Result<(), MarshalError> {
    let text_utils = Expression::class(names.builtin(TypeId::TEXT_UTILS)?.qualified_name());
    let creator = Expression::field(text_utils, "CHAR_SEQUENCE_CREATOR");

    block.push(Statement::declare_uninit(value));
    block.push(Statement::If {
        condition: read_marker(parcel),
        then_block: vec![Statement::assign(
            value,
            Expression::call(creator, "createFromParcel", vec![parcel.expr()]),
        )]
        .into(),
        else_block: Some(vec![Statement::assign(value, Expression::null())].into()),
    });
    Ok(())
}
