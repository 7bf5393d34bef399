//! Base generic marshalling: element-wise delegation.
//!
//! A single-argument generic is written as a size followed by each
//! element; a two-argument generic as a size followed by key/value
//! pairs. Each element goes through its argument descriptor's own
//! operations. A null value is written as size `-1`.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};

use super::{counted_loop, create_sized, read_size, write_sized};
use crate::{
    ClassLoaderSlot, MarshalError, MarshalOp, Namespace, TypeDescriptor, TypeId, WriteFlags,
};

/// Argument descriptors of a generic, checked against the supported arities.
enum Shape<'a> {
    Elements(&'a TypeDescriptor),
    Entries(&'a TypeDescriptor, &'a TypeDescriptor),
}

fn shape<'a>(
    generic: &TypeDescriptor,
    names: &'a Namespace,
    op: MarshalOp,
) -> Result<Shape<'a>, MarshalError> {
    let arg = |id: TypeId| {
        names
            .get(id)
            .ok_or_else(|| MarshalError::unsupported(generic.qualified_name(), op))
    };
    match generic.generic_argument_types() {
        &[element] => Ok(Shape::Elements(arg(element)?)),
        &[key, value] => Ok(Shape::Entries(arg(key)?, arg(value)?)),
        _ => Err(MarshalError::unsupported(generic.qualified_name(), op)),
    }
}

pub(super) fn write(
    generic: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let shape = shape(generic, names, MarshalOp::WriteToParcel)?;
    let size = Expression::call(value.expr(), "size", Vec::new());

    write_sized(block, value, parcel, size, |present| match shape {
        Shape::Elements(element) => {
            let item = value.derived(element.qualified_name(), "item");
            let mut body = StatementBlock::new();
            element.write_to_parcel(names, &mut body, &item, parcel, flags)?;
            present.push(Statement::ForEach {
                item,
                collection: value.expr(),
                body,
            });
            Ok(())
        }
        Shape::Entries(key_ty, value_ty) => {
            let entry = value.derived(
                format!("java.util.Map.Entry{}", generic.generic_arguments()),
                "entry",
            );
            let key = value.derived(key_ty.qualified_name(), "key");
            let val = value.derived(value_ty.qualified_name(), "value");

            let mut body = StatementBlock::new();
            body.push(Statement::declare(
                &key,
                Expression::call(entry.expr(), "getKey", Vec::new()),
            ));
            body.push(Statement::declare(
                &val,
                Expression::call(entry.expr(), "getValue", Vec::new()),
            ));
            key_ty.write_to_parcel(names, &mut body, &key, parcel, flags)?;
            value_ty.write_to_parcel(names, &mut body, &val, parcel, flags)?;

            present.push(Statement::ForEach {
                item: entry,
                collection: Expression::call(value.expr(), "entrySet", Vec::new()),
                body,
            });
            Ok(())
        }
    })
}

/// Emit one element read into `body` and store it into `value`.
fn read_element(
    shape: &Shape<'_>,
    names: &Namespace,
    body: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    match *shape {
        Shape::Elements(element) => {
            let item = value.derived(element.qualified_name(), "item");
            element.create_from_parcel(names, body, &item, parcel, cl)?;
            body.push_expr(Expression::call(value.expr(), "add", vec![item.expr()]));
        }
        Shape::Entries(key_ty, value_ty) => {
            let key = value.derived(key_ty.qualified_name(), "key");
            let val = value.derived(value_ty.qualified_name(), "value");
            key_ty.create_from_parcel(names, body, &key, parcel, cl)?;
            value_ty.create_from_parcel(names, body, &val, parcel, cl)?;
            body.push_expr(Expression::call(
                value.expr(),
                "put",
                vec![key.expr(), val.expr()],
            ));
        }
    }
    Ok(())
}

fn acquire_if_needed(
    generic: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    // Materialize before the element loop so the loop body only reuses it.
    if generic.needs_class_loader(names) {
        cl.acquire(names, block)?;
    }
    Ok(())
}

pub(super) fn create(
    generic: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let shape = shape(generic, names, MarshalOp::CreateFromParcel)?;
    acquire_if_needed(generic, names, block, cl)?;

    let alloc = |_: &Variable| Expression::new_object(generic.instantiable_name(), Vec::new());
    create_sized(block, value, parcel, alloc, |body, _| {
        read_element(&shape, names, body, value, parcel, cl)
    })
}

pub(super) fn read(
    generic: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let shape = shape(generic, names, MarshalOp::ReadFromParcel)?;
    acquire_if_needed(generic, names, block, cl)?;

    block.push_expr(Expression::call(value.expr(), "clear", Vec::new()));
    let size = read_size(block, value, parcel);
    counted_loop(block, value, &size, |body, _| {
        read_element(&shape, names, body, value, parcel, cl)
    })
}
