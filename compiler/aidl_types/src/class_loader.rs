//! Lazily materialized class-loader temporary.

use aidl_ir::{Expression, Statement, StatementBlock, Variable};
use tracing::debug;

use crate::{MarshalError, Namespace, TypeId};

/// Name of the generated class-loader local.
pub const CLASS_LOADER_VAR: &str = "cl";

/// Shared slot for the class-loader local of one generated scope.
///
/// The first descriptor that needs a class loader emits its acquisition
/// into the block it is handed; every later request returns the same
/// variable. Use one slot per generated method body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassLoaderSlot {
    var: Option<Variable>,
}

impl ClassLoaderSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the acquisition has been emitted.
    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.var.is_some()
    }

    /// The materialized variable, if any.
    #[inline]
    pub fn variable(&self) -> Option<&Variable> {
        self.var.as_ref()
    }

    /// Return the class-loader variable, emitting
    /// `java.lang.ClassLoader cl = this.getClass().getClassLoader();`
    /// into `block` on first use.
    pub fn acquire(
        &mut self,
        names: &Namespace,
        block: &mut StatementBlock,
    ) -> Result<Variable, MarshalError> {
        if let Some(var) = &self.var {
            return Ok(var.clone());
        }

        let loader = names.builtin(TypeId::CLASS_LOADER)?;
        let var = loader.variable(CLASS_LOADER_VAR);
        let init = Expression::call(
            Expression::literal("this.getClass()"),
            "getClassLoader",
            Vec::new(),
        );
        block.push(Statement::declare(&var, init));
        debug!(var = %var.name, "materialized class loader");

        self.var = Some(var.clone());
        Ok(var)
    }
}
