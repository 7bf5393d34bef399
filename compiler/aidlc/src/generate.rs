//! Per-method marshalling code.
//!
//! Each method becomes two blocks:
//!
//! - proxy (caller side): write the in arguments into `_data`, transact,
//!   then read the result and out arguments back from `_reply`
//! - stub (callee side): create the in arguments from `data`, allocate
//!   the out arguments, call the implementation, then write the result
//!   and out arguments into `reply` as return values
//!
//! Every descriptor call has already passed the legality check, so a
//! [`MarshalError`] here is an internal error.

use std::fmt::Write;

use aidl_ir::{CompareOp, Expression, JavaPrinter, Statement, StatementBlock, Variable};
use aidl_types::{ClassLoaderSlot, MarshalError, Namespace, TypeDescriptor, TypeId, WriteFlags};
use tracing::debug;

use crate::document::Direction;
use crate::passes::{ResolvedInterface, ResolvedMethod, ResolvedType};

/// Generated code for one method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedMethod {
    /// Qualified name of the declaring interface.
    pub interface: String,
    pub name: String,
    pub proxy: StatementBlock,
    pub stub: StatementBlock,
}

impl GeneratedMethod {
    /// Both blocks as Java source, each under a header comment.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (side, block) in [("proxy", &self.proxy), ("stub", &self.stub)] {
            let _ = writeln!(out, "// {}.{} ({side})", self.interface, self.name);
            let mut printer = JavaPrinter::new();
            printer.print_block(block);
            out.push_str(&printer.finish());
        }
        out
    }
}

/// A variable for a value of `ty`, scalar or array.
fn typed_var(descriptor: &TypeDescriptor, ty: ResolvedType, name: &str) -> Variable {
    if ty.is_array {
        descriptor.array_variable(name)
    } else {
        descriptor.variable(name)
    }
}

fn write_value(
    names: &Namespace,
    block: &mut StatementBlock,
    ty: ResolvedType,
    value: &Variable,
    parcel: &Variable,
    flags: WriteFlags,
) -> Result<(), MarshalError> {
    let descriptor = &names[ty.id];
    if ty.is_array {
        descriptor.write_array_to_parcel(names, block, value, parcel, flags)
    } else {
        descriptor.write_to_parcel(names, block, value, parcel, flags)
    }
}

fn create_value(
    names: &Namespace,
    block: &mut StatementBlock,
    ty: ResolvedType,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let descriptor = &names[ty.id];
    if ty.is_array {
        descriptor.create_array_from_parcel(names, block, value, parcel, cl)
    } else {
        descriptor.create_from_parcel(names, block, value, parcel, cl)
    }
}

fn read_value(
    names: &Namespace,
    block: &mut StatementBlock,
    ty: ResolvedType,
    value: &Variable,
    parcel: &Variable,
    cl: &mut ClassLoaderSlot,
) -> Result<(), MarshalError> {
    let descriptor = &names[ty.id];
    if ty.is_array {
        descriptor.read_array_from_parcel(names, block, value, parcel, cl)
    } else {
        descriptor.read_from_parcel(names, block, value, parcel, cl)
    }
}

fn parcel_var(names: &Namespace, name: &str) -> Result<Variable, MarshalError> {
    Ok(names.builtin(TypeId::PARCEL)?.variable(name))
}

/// Generate the proxy and stub blocks of one method.
pub fn generate_method(
    names: &Namespace,
    interface: &ResolvedInterface,
    method: &ResolvedMethod,
) -> Result<GeneratedMethod, MarshalError> {
    let qualified_name = names[interface.id].qualified_name().to_owned();
    let proxy = generate_proxy(names, method)?;
    let stub = generate_stub(names, method)?;
    debug!(
        interface = %qualified_name,
        method = %method.name,
        proxy = proxy.len(),
        stub = stub.len(),
        "generated method"
    );
    Ok(GeneratedMethod {
        interface: qualified_name,
        name: method.name.clone(),
        proxy,
        stub,
    })
}

fn generate_proxy(
    names: &Namespace,
    method: &ResolvedMethod,
) -> Result<StatementBlock, MarshalError> {
    let data = parcel_var(names, "_data")?;
    let reply = parcel_var(names, "_reply")?;
    let mut block = StatementBlock::new();
    let mut cl = ClassLoaderSlot::new();

    block.push_expr(Expression::call(
        data.expr(),
        "writeInterfaceToken",
        vec![Expression::literal("DESCRIPTOR")],
    ));

    for param in &method.params {
        let value = typed_var(&names[param.ty.id], param.ty, &param.name);
        match param.direction {
            Direction::In | Direction::InOut => {
                write_value(names, &mut block, param.ty, &value, &data, WriteFlags::empty())?;
            }
            // The callee allocates out arrays from the caller's length.
            Direction::Out if param.ty.is_array => write_array_length(&mut block, &value, &data),
            Direction::Out => {}
        }
    }

    let transact_flags = if method.oneway {
        Expression::literal("android.os.IBinder.FLAG_ONEWAY")
    } else {
        Expression::int(0)
    };
    block.push_expr(Expression::call(
        Expression::literal("mRemote"),
        "transact",
        vec![
            Expression::literal(format!("Stub.TRANSACTION_{}", method.name)),
            data.expr(),
            reply.expr(),
            transact_flags,
        ],
    ));
    if method.oneway {
        return Ok(block);
    }

    block.push_expr(Expression::call(reply.expr(), "readException", Vec::new()));
    if !method.return_type.is_void() {
        let ty = method.return_type;
        let result = typed_var(&names[ty.id], ty, "_result");
        create_value(names, &mut block, ty, &result, &reply, &mut cl)?;
    }
    for param in method.params.iter().filter(|p| p.direction.is_out()) {
        let value = typed_var(&names[param.ty.id], param.ty, &param.name);
        read_value(names, &mut block, param.ty, &value, &reply, &mut cl)?;
    }
    Ok(block)
}

/// `if ((v == null)) { parcel.writeInt(-1); } else { parcel.writeInt(v.length); }`
fn write_array_length(block: &mut StatementBlock, value: &Variable, parcel: &Variable) {
    let write_int = |n: Expression| {
        StatementBlock::from(vec![Statement::Expr(Expression::call(
            parcel.expr(),
            "writeInt",
            vec![n],
        ))])
    };
    block.push(Statement::If {
        condition: Expression::compare(value.expr(), CompareOp::Eq, Expression::null()),
        then_block: write_int(Expression::int(-1)),
        else_block: Some(write_int(Expression::field(value.expr(), "length"))),
    });
}

fn generate_stub(
    names: &Namespace,
    method: &ResolvedMethod,
) -> Result<StatementBlock, MarshalError> {
    let data = parcel_var(names, "data")?;
    let reply = parcel_var(names, "reply")?;
    let mut block = StatementBlock::new();
    let mut cl = ClassLoaderSlot::new();

    block.push_expr(Expression::call(
        data.expr(),
        "enforceInterface",
        vec![Expression::literal("DESCRIPTOR")],
    ));

    let mut args = Vec::with_capacity(method.params.len());
    for (i, param) in method.params.iter().enumerate() {
        let descriptor = &names[param.ty.id];
        let arg = typed_var(descriptor, param.ty, &format!("_arg{i}"));
        match param.direction {
            Direction::In | Direction::InOut => {
                create_value(names, &mut block, param.ty, &arg, &data, &mut cl)?;
            }
            Direction::Out if param.ty.is_array => {
                allocate_out_array(&mut block, descriptor, &arg, &data);
            }
            Direction::Out => {
                let fresh = Expression::new_object(descriptor.instantiable_name(), Vec::new());
                block.push(Statement::declare(&arg, fresh));
            }
        }
        args.push(arg);
    }

    let call = Expression::call(
        Expression::literal("this"),
        method.name.as_str(),
        args.iter().map(Variable::expr).collect(),
    );
    let result = if method.return_type.is_void() {
        block.push_expr(call);
        None
    } else {
        let ty = method.return_type;
        let result = typed_var(&names[ty.id], ty, "_result");
        block.push(Statement::declare(&result, call));
        Some((ty, result))
    };
    if method.oneway {
        return Ok(block);
    }

    block.push_expr(Expression::call(reply.expr(), "writeNoException", Vec::new()));
    if let Some((ty, result)) = &result {
        write_value(names, &mut block, *ty, result, &reply, WriteFlags::WRITE_RETURN_VALUE)?;
    }
    for (param, arg) in method.params.iter().zip(&args) {
        if param.direction.is_out() {
            write_value(names, &mut block, param.ty, arg, &reply, WriteFlags::WRITE_RETURN_VALUE)?;
        }
    }
    Ok(block)
}

/// Allocate an out array with the caller's length (`-1` means null).
fn allocate_out_array(
    block: &mut StatementBlock,
    element: &TypeDescriptor,
    value: &Variable,
    parcel: &Variable,
) {
    let length = value.derived("int", "length");
    block.push(Statement::declare(
        &length,
        Expression::call(parcel.expr(), "readInt", Vec::new()),
    ));
    block.push(Statement::declare_uninit(value));
    block.push(Statement::If {
        condition: Expression::compare(length.expr(), CompareOp::Lt, Expression::int(0)),
        then_block: vec![Statement::assign(value, Expression::null())].into(),
        else_block: Some(
            vec![Statement::assign(
                value,
                Expression::new_array(element.import_type(), length.expr()),
            )]
            .into(),
        ),
    });
}

#[cfg(test)]
mod tests;
