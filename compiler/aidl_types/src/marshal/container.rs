//! Untyped `Map`/`List` and the generic list specialization.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};

use super::{counted_loop, create_sized, parcel_call, read_size, write_sized};
use crate::{ClassLoaderSlot, ListElement, MarshalError, Namespace, TypeDescriptor, WriteFlags};

// === Untyped containers ===

/// The raw `java.util.Map` or `java.util.List`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Untyped {
    Map,
    List,
}

impl Untyped {
    fn write_method(self) -> &'static str {
        match self {
            Untyped::Map => "writeMap",
            Untyped::List => "writeList",
        }
    }

    fn create_method(self) -> &'static str {
        match self {
            Untyped::Map => "readHashMap",
            Untyped::List => "readArrayList",
        }
    }

    fn read_method(self) -> &'static str {
        match self {
            Untyped::Map => "readMap",
            Untyped::List => "readList",
        }
    }
}

pub(super) fn write_untyped(
    container: Untyped,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    block.push_expr(parcel_call(
        parcel,
        container.write_method(),
        vec![value.expr()],
    ));
}

pub(super) fn create_untyped(
    container: Untyped,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let loader = cl.acquire(names, block)?;
    block.push(Statement::declare(
        value,
        parcel_call(parcel, container.create_method(), vec![loader.expr()]),
    ));
    Ok(())
}

pub(super) fn read_untyped(
    container: Untyped,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let loader = cl.acquire(names, block)?;
    block.push_expr(parcel_call(
        parcel,
        container.read_method(),
        vec![value.expr(), loader.expr()],
    ));
    Ok(())
}

// === Generic lists ===

pub(super) fn write_list(
    element: &ListElement,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
) {
    let method = match element {
        ListElement::Strings => "writeStringList",
        ListElement::Binders => "writeBinderList",
        ListElement::Typed { .. } => "writeTypedList",
        ListElement::Untyped => "writeList",
    };
    block.push_expr(parcel_call(parcel, method, vec![value.expr()]));
}

pub(super) fn create_list(
    element: &ListElement,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let init = match element {
        ListElement::Strings => parcel_call(parcel, "createStringArrayList", Vec::new()),
        ListElement::Binders => parcel_call(parcel, "createBinderArrayList", Vec::new()),
        ListElement::Typed { creator } => parcel_call(
            parcel,
            "createTypedArrayList",
            vec![Expression::literal(creator.as_str())],
        ),
        ListElement::Untyped => {
            let loader = cl.acquire(names, block)?;
            parcel_call(parcel, "readArrayList", vec![loader.expr()])
        }
    };
    block.push(Statement::declare(value, init));
    Ok(())
}

pub(super) fn read_list(
    element: &ListElement,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let call = match element {
        ListElement::Strings => parcel_call(parcel, "readStringList", vec![value.expr()]),
        ListElement::Binders => parcel_call(parcel, "readBinderList", vec![value.expr()]),
        ListElement::Typed { creator } => parcel_call(
            parcel,
            "readTypedList",
            vec![value.expr(), Expression::literal(creator.as_str())],
        ),
        ListElement::Untyped => {
            let loader = cl.acquire(names, block)?;
            parcel_call(parcel, "readList", vec![value.expr(), loader.expr()])
        }
    };
    block.push_expr(call);
    Ok(())
}

// Arrays of lists are written element by element.

pub(super) fn write_list_array(
    list: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let length = Expression::field(value.expr(), "length");
    write_sized(block, value, parcel, length, |present| {
        let item = value.derived(list.qualified_name(), "item");
        let mut body = StatementBlock::new();
        list.write_to_parcel(names, &mut body, &item, parcel, flags)?;
        present.push(Statement::ForEach {
            item,
            collection: value.expr(),
            body,
        });
        Ok(())
    })
}

pub(super) fn create_list_array(
    list: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    if list.needs_class_loader(names) {
        cl.acquire(names, block)?;
    }

    // Java cannot allocate arrays of a parameterized type.
    let alloc = |size: &Variable| Expression::new_array(list.import_type(), size.expr());
    create_sized(block, value, parcel, alloc, |body, index| {
        let item = value.derived(list.qualified_name(), "item");
        list.create_from_parcel(names, body, &item, parcel, cl)?;
        body.push(Statement::Assign {
            target: Expression::index(value.expr(), index.expr()),
            value: item.expr(),
        });
        Ok(())
    })
}

pub(super) fn read_list_array(
    list: &TypeDescriptor,
    names: &Namespace,
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    if list.needs_class_loader(names) {
        cl.acquire(names, block)?;
    }

    let size = read_size(block, value, parcel);
    counted_loop(block, value, &size, |body, index| {
        let item = value.derived(list.qualified_name(), "item");
        body.push(Statement::declare(
            &item,
            Expression::index(value.expr(), index.expr()),
        ));
        list.read_from_parcel(names, body, &item, parcel, cl)
    })
}
