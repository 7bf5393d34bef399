//! Parcel marshalling code generation.
//!
//! Six operations per descriptor, each an exhaustive match over
//! [`TypeVariant`]:
//!
//! | scalar | array |
//! |---|---|
//! | [`write_to_parcel`](TypeDescriptor::write_to_parcel) | [`write_array_to_parcel`](TypeDescriptor::write_array_to_parcel) |
//! | [`create_from_parcel`](TypeDescriptor::create_from_parcel) | [`create_array_from_parcel`](TypeDescriptor::create_array_from_parcel) |
//! | [`read_from_parcel`](TypeDescriptor::read_from_parcel) | [`read_array_from_parcel`](TypeDescriptor::read_array_from_parcel) |
//!
//! `create_*` declares the value variable; `read_*` fills a variable the
//! caller already declared. Operations append to the block they are
//! given; the namespace is only read, for built-in helper names and
//! generic arguments.

use aidl_ir::{CompareOp, Expression, Statement, StatementBlock, Variable};

use crate::{
    ClassLoaderSlot, MarshalError, MarshalOp, Namespace, TypeDescriptor, TypeId, TypeVariant,
    WriteFlags,
};

mod binder;
mod container;
mod generic;
mod primitive;
mod string;
mod user;

use container::Untyped;

/// Constant naming the return-value write flag on `android.os.Parcelable`.
const WRITE_RETURN_VALUE_FIELD: &str = "PARCELABLE_WRITE_RETURN_VALUE";

/// Render write flags: `0`, or the `Parcelable` constant.
pub fn write_flags_expr(names: &Namespace, flags: WriteFlags) -> Result<Expression, MarshalError> {
    if flags.contains(WriteFlags::WRITE_RETURN_VALUE) {
        let parcelable = names.builtin(TypeId::PARCELABLE)?;
        Ok(Expression::field(
            Expression::class(parcelable.qualified_name()),
            WRITE_RETURN_VALUE_FIELD,
        ))
    } else {
        Ok(Expression::int(0))
    }
}

/// `parcel.method(args)`.
pub(crate) fn parcel_call(parcel: &Variable, method: &str, args: Vec<Expression>) -> Expression {
    Expression::call(parcel.expr(), method, args)
}

/// `v != null`.
pub(crate) fn not_null(value: &Variable) -> Expression {
    Expression::compare(value.expr(), CompareOp::Ne, Expression::null())
}

/// `0 != parcel.readInt()`, the null-marker test.
pub(crate) fn read_marker(parcel: &Variable) -> Expression {
    Expression::compare(
        Expression::int(0),
        CompareOp::Ne,
        parcel_call(parcel, "readInt", Vec::new()),
    )
}

/// `parcel.writeInt(n);`
pub(crate) fn write_int(block: &mut StatementBlock, parcel: &Variable, n: i64) {
    block.push_expr(parcel_call(parcel, "writeInt", vec![Expression::int(n)]));
}

/// `if (v != null) { writeInt(1); <then> } else { writeInt(0); }`
pub(crate) fn write_with_marker(
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    then: impl FnOnce(&mut StatementBlock),
) {
    let mut present = StatementBlock::new();
    write_int(&mut present, parcel, 1);
    then(&mut present);
    let mut absent = StatementBlock::new();
    write_int(&mut absent, parcel, 0);
    block.push(Statement::If {
        condition: not_null(value),
        then_block: present,
        else_block: Some(absent),
    });
}

/// `if (v == null) { writeInt(-1); } else { writeInt(<size>); <body> }`
fn write_sized(
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    size: Expression,
    body: impl FnOnce(&mut StatementBlock) -> Result<(), MarshalError>,
) -> Result<(), MarshalError> {
    let mut absent = StatementBlock::new();
    write_int(&mut absent, parcel, -1);

    let mut present = StatementBlock::new();
    present.push_expr(parcel_call(parcel, "writeInt", vec![size]));
    body(&mut present)?;

    block.push(Statement::If {
        condition: Expression::compare(value.expr(), CompareOp::Eq, Expression::null()),
        then_block: absent,
        else_block: Some(present),
    });
    Ok(())
}

/// `int v_size = parcel.readInt();`
fn read_size(block: &mut StatementBlock, value: &Variable, parcel: &Variable) -> Variable {
    let size = value.derived("int", "size");
    block.push(Statement::declare(
        &size,
        parcel_call(parcel, "readInt", Vec::new()),
    ));
    size
}

/// `for (int v_i = 0; v_i < v_size; v_i++) { <body> }`
fn counted_loop(
    block: &mut StatementBlock,
    value: &Variable,
    size: &Variable,
    body: impl FnOnce(&mut StatementBlock, &Variable) -> Result<(), MarshalError>,
) -> Result<(), MarshalError> {
    let index = value.derived("int", "i");
    let mut inner = StatementBlock::new();
    body(&mut inner, &index)?;
    block.push(Statement::For {
        index,
        count: size.expr(),
        body: inner,
    });
    Ok(())
}

/// Declare `value`, read a size, and either null it (negative size) or
/// allocate it and run `body` once per element.
fn create_sized(
    block: &mut StatementBlock,
    value: &Variable,
    parcel: &Variable,
    alloc: impl FnOnce(&Variable) -> Expression,
    body: impl FnOnce(&mut StatementBlock, &Variable) -> Result<(), MarshalError>,
) -> Result<(), MarshalError> {
    block.push(Statement::declare_uninit(value));
    let size = read_size(block, value, parcel);

    let mut present = StatementBlock::new();
    present.push(Statement::assign(value, alloc(&size)));
    counted_loop(&mut present, value, &size, body)?;

    block.push(Statement::If {
        condition: Expression::compare(size.expr(), CompareOp::Lt, Expression::int(0)),
        then_block: vec![Statement::assign(value, Expression::null())].into(),
        else_block: Some(present),
    });
    Ok(())
}

impl TypeDescriptor {
    /// Whether creating or reading a value needs the class-loader slot.
    pub fn needs_class_loader(&self, names: &Namespace) -> bool {
        match self.variant() {
            TypeVariant::Map | TypeVariant::List => true,
            TypeVariant::GenericList { element, .. } => {
                matches!(element, crate::ListElement::Untyped)
            }
            TypeVariant::Generic(generic) => generic
                .args
                .iter()
                .any(|&arg| names.get(arg).is_some_and(|d| d.needs_class_loader(names))),
            TypeVariant::Void
            | TypeVariant::Primitive(_)
            | TypeVariant::String
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Binder(_)
            | TypeVariant::Helper
            | TypeVariant::UserData
            | TypeVariant::Interface { .. } => false,
        }
    }

    fn unsupported(&self, op: MarshalOp) -> MarshalError {
        MarshalError::unsupported(self.qualified_name(), op)
    }

    fn require_array(&self, op: MarshalOp) -> Result<(), MarshalError> {
        if self.can_be_array() {
            Ok(())
        } else {
            Err(self.unsupported(op))
        }
    }

    /// Emit statements serializing `value` into `parcel`.
    pub fn write_to_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        flags: WriteFlags,
    ) -> Result<(), MarshalError> {
        match self.variant() {
            TypeVariant::Primitive(codec) => {
                primitive::write(codec, block, value, parcel);
                Ok(())
            }
            TypeVariant::String => {
                string::write(block, value, parcel);
                Ok(())
            }
            TypeVariant::CharSequence => {
                string::write_char_sequence(names, block, value, parcel, flags)
            }
            TypeVariant::Exception(_) => {
                binder::write_exception(block, value, parcel);
                Ok(())
            }
            TypeVariant::Binder(kind) => {
                binder::write(*kind, block, value, parcel);
                Ok(())
            }
            TypeVariant::Map => {
                container::write_untyped(Untyped::Map, block, value, parcel);
                Ok(())
            }
            TypeVariant::List => {
                container::write_untyped(Untyped::List, block, value, parcel);
                Ok(())
            }
            TypeVariant::UserData => user::write_record(names, block, value, parcel, flags),
            TypeVariant::Interface { .. } => {
                user::write_interface(block, value, parcel);
                Ok(())
            }
            TypeVariant::GenericList { element, .. } => {
                container::write_list(element, block, value, parcel);
                Ok(())
            }
            TypeVariant::Generic(_) => generic::write(self, names, block, value, parcel, flags),
            TypeVariant::Void | TypeVariant::Helper => {
                Err(self.unsupported(MarshalOp::WriteToParcel))
            }
        }
    }

    /// Emit statements declaring `value` and initializing it from `parcel`.
    pub fn create_from_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        cl: &mut ClassLoaderSlot,
    ) -> Result<(), MarshalError> {
        match self.variant() {
            TypeVariant::Primitive(codec) => {
                primitive::create(codec, block, value, parcel);
                Ok(())
            }
            TypeVariant::String => {
                string::create(block, value, parcel);
                Ok(())
            }
            TypeVariant::CharSequence => string::create_char_sequence(names, block, value, parcel),
            TypeVariant::Exception(_) => {
                binder::create_exception(block, value, parcel);
                Ok(())
            }
            TypeVariant::Binder(kind) => binder::create(*kind, names, block, value, parcel),
            TypeVariant::Map => {
                container::create_untyped(Untyped::Map, names, block, value, parcel, cl)
            }
            TypeVariant::List => {
                container::create_untyped(Untyped::List, names, block, value, parcel, cl)
            }
            TypeVariant::UserData => {
                user::create_record(self, block, value, parcel);
                Ok(())
            }
            TypeVariant::Interface { .. } => {
                user::create_interface(self, block, value, parcel);
                Ok(())
            }
            TypeVariant::GenericList { element, .. } => {
                container::create_list(element, names, block, value, parcel, cl)
            }
            TypeVariant::Generic(_) => generic::create(self, names, block, value, parcel, cl),
            TypeVariant::Void | TypeVariant::Helper => {
                Err(self.unsupported(MarshalOp::CreateFromParcel))
            }
        }
    }

    /// Emit statements filling the already-declared `value` from `parcel`.
    ///
    /// Only for types that can be out parameters.
    pub fn read_from_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        cl: &mut ClassLoaderSlot,
    ) -> Result<(), MarshalError> {
        if !self.can_be_out_parameter() {
            return Err(MarshalError::NotOutParameter(
                self.qualified_name().to_owned(),
            ));
        }

        match self.variant() {
            TypeVariant::Map => {
                container::read_untyped(Untyped::Map, names, block, value, parcel, cl)
            }
            TypeVariant::List => {
                container::read_untyped(Untyped::List, names, block, value, parcel, cl)
            }
            TypeVariant::UserData => {
                user::read_record(block, value, parcel);
                Ok(())
            }
            TypeVariant::GenericList { element, .. } => {
                container::read_list(element, names, block, value, parcel, cl)
            }
            TypeVariant::Generic(_) => generic::read(self, names, block, value, parcel, cl),
            TypeVariant::Void
            | TypeVariant::Primitive(_)
            | TypeVariant::String
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Binder(_)
            | TypeVariant::Helper
            | TypeVariant::Interface { .. } => Err(self.unsupported(MarshalOp::ReadFromParcel)),
        }
    }

    /// Emit statements serializing the array `value`.
    pub fn write_array_to_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        flags: WriteFlags,
    ) -> Result<(), MarshalError> {
        self.require_array(MarshalOp::WriteArrayToParcel)?;
        match self.variant() {
            TypeVariant::Primitive(codec) => {
                primitive::write_array(codec, block, value, parcel);
                Ok(())
            }
            TypeVariant::String => {
                string::write_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::Binder(_) => {
                binder::write_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::UserData => user::write_record_array(names, block, value, parcel, flags),
            TypeVariant::GenericList { .. } => {
                container::write_list_array(self, names, block, value, parcel, flags)
            }
            TypeVariant::Void
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Helper
            | TypeVariant::Map
            | TypeVariant::List
            | TypeVariant::Interface { .. }
            | TypeVariant::Generic(_) => Err(self.unsupported(MarshalOp::WriteArrayToParcel)),
        }
    }

    /// Emit statements declaring the array `value` and initializing it.
    pub fn create_array_from_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        cl: &mut ClassLoaderSlot,
    ) -> Result<(), MarshalError> {
        self.require_array(MarshalOp::CreateArrayFromParcel)?;
        match self.variant() {
            TypeVariant::Primitive(codec) => {
                primitive::create_array(codec, block, value, parcel);
                Ok(())
            }
            TypeVariant::String => {
                string::create_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::Binder(_) => {
                binder::create_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::UserData => {
                user::create_record_array(self, block, value, parcel);
                Ok(())
            }
            TypeVariant::GenericList { .. } => {
                container::create_list_array(self, names, block, value, parcel, cl)
            }
            TypeVariant::Void
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Helper
            | TypeVariant::Map
            | TypeVariant::List
            | TypeVariant::Interface { .. }
            | TypeVariant::Generic(_) => Err(self.unsupported(MarshalOp::CreateArrayFromParcel)),
        }
    }

    /// Emit statements filling the already-declared array `value`.
    pub fn read_array_from_parcel(
        &self,
        names: &Namespace,
        block: &mut StatementBlock,
        value: &Variable,
        parcel: &Variable,
        cl: &mut ClassLoaderSlot,
    ) -> Result<(), MarshalError> {
        self.require_array(MarshalOp::ReadArrayFromParcel)?;
        match self.variant() {
            TypeVariant::Primitive(codec) => {
                primitive::read_array(codec, block, value, parcel);
                Ok(())
            }
            TypeVariant::String => {
                string::read_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::Binder(_) => {
                binder::read_array(block, value, parcel);
                Ok(())
            }
            TypeVariant::UserData => {
                user::read_record_array(self, block, value, parcel);
                Ok(())
            }
            TypeVariant::GenericList { .. } => {
                container::read_list_array(self, names, block, value, parcel, cl)
            }
            TypeVariant::Void
            | TypeVariant::CharSequence
            | TypeVariant::Exception(_)
            | TypeVariant::Helper
            | TypeVariant::Map
            | TypeVariant::List
            | TypeVariant::Interface { .. }
            | TypeVariant::Generic(_) => Err(self.unsupported(MarshalOp::ReadArrayFromParcel)),
        }
    }
}
