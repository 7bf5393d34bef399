use super::*;

#[test]
fn derived_variable_names() {
    let v = Variable::new("java.util.List", "_arg0");
    let size = v.derived("int", "size");
    assert_eq!(size.name, "_arg0_size");
    assert_eq!(size.ty, "int");
}

#[test]
fn block_append_keeps_order() {
    let v = Variable::new("int", "x");
    let mut first = StatementBlock::new();
    first.push(Statement::declare_uninit(&v));

    let mut second = StatementBlock::new();
    second.push(Statement::assign(&v, Expression::int(1)));
    second.push_expr(Expression::call(v.expr(), "hashCode", vec![]));

    first.append(second);
    assert_eq!(first.len(), 3);
    assert!(matches!(first.statements()[0], Statement::Declare { init: None, .. }));
    assert!(matches!(first.statements()[1], Statement::Assign { .. }));
    assert!(matches!(first.statements()[2], Statement::Expr(_)));
}

#[test]
fn empty_block() {
    let block = StatementBlock::new();
    assert!(block.is_empty());
    assert_eq!(block.iter().count(), 0);
}
