//! Table-driven primitive marshalling.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};

use super::{parcel_call, read_marker};
use crate::{Carrier, PrimitiveCodec};

pub(super) fn write(
    codec: &PrimitiveCodec,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    let arg = match codec.carrier {
        Carrier::Direct => value.expr(),
        Carrier::BoolAsInt => {
            Expression::ternary(value.expr(), Expression::int(1), Expression::int(0))
        }
        Carrier::CharAsInt => Expression::cast("int", value.expr()),
    };
    block.push_expr(parcel_call(parcel, codec.write, vec![arg]));
}

pub(super) fn create(
    codec: &PrimitiveCodec,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    let read = match codec.carrier {
        Carrier::Direct => parcel_call(parcel, codec.read, Vec::new()),
        Carrier::BoolAsInt => read_marker(parcel),
        Carrier::CharAsInt => {
            Expression::cast(codec.name, parcel_call(parcel, codec.read, Vec::new()))
        }
    };
    block.push(Statement::declare(value, read));
}

pub(super) fn write_array(
    codec: &PrimitiveCodec,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push_expr(parcel_call(parcel, codec.write_array, vec![value.expr()]));
}

pub(super) fn create_array(
    codec: &PrimitiveCodec,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push(Statement::declare(
        value,
        parcel_call(parcel, codec.create_array, Vec::new()),
    ));
}

pub(super) fn read_array(
    codec: &PrimitiveCodec,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push_expr(parcel_call(parcel, codec.read_array, vec![value.expr()]));
}
