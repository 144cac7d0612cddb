use parser::{Node, NodeKind, Operator};

mod symbol_table;
pub use symbol_table::{Symbol, SymbolKind, SymbolTable, TempName};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecorateError {
    #[error("division by zero ({dividend:?} / 0)")]
    DivisionByZero { dividend: f64 },
}

pub type Result<T> = std::result::Result<T, DecorateError>;

/// Fills in the attribute of every node, children before parents, and logs
/// each value in a [`SymbolTable`].
///
/// A failed run aborts immediately. Entries recorded up to that point stay in
/// the table, and nodes that were not reached keep `attribute == None`.
#[derive(Debug, Default)]
pub struct Decorator {
    symbol_table: SymbolTable,
}

impl Decorator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbol_table
    }

    /// Returns the value of `node`, which is also stored as its attribute.
    pub fn decorate(&mut self, node: &mut Node) -> Result<f64> {
        let mut stack = vec![Step::Enter(node)];
        let mut values = Vec::new();

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(Node { kind: NodeKind::Number(value), attribute }) => {
                    self.symbol_table.push(SymbolKind::Constant, *value);
                    *attribute = Some(*value);
                    values.push(*value);
                }
                Step::Enter(Node { kind: NodeKind::Binary { operator, left, right }, attribute }) => {
                    stack.push(Step::Exit { operator: *operator, attribute });
                    stack.push(Step::Enter(right));
                    stack.push(Step::Enter(left));
                }
                Step::Exit { operator, attribute } => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("both operands are decorated before their operator")
                    };

                    if operator == Operator::Divide && right == 0.0 {
                        return Err(DecorateError::DivisionByZero { dividend: left });
                    }

                    let value = operator.apply(left, right);
                    self.symbol_table.push(SymbolKind::Temporary, value);
                    *attribute = Some(value);
                    values.push(value);
                }
            }
        }

        Ok(values.pop().unwrap_or_else(|| unreachable!("the root leaves its value behind")))
    }
}

/// Pending work of the post-order walk; an operator is finished once both
/// children have left their values on the value stack.
enum Step<'n> {
    Enter(&'n mut Node),
    Exit { operator: Operator, attribute: &'n mut Option<f64> },
}

#[cfg(test)]
mod tests {
    use parser::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree(source: &str) -> Node {
        Parser::new(source).unwrap().parse().unwrap()
    }

    fn entries(table: &SymbolTable) -> Vec<(String, SymbolKind, f64)> {
        table.iter().map(|s| (s.name.to_string(), s.kind, s.value)).collect()
    }

    #[test]
    fn literal_is_a_single_constant() {
        let mut node = tree("42");
        let mut decorator = Decorator::new();

        assert_eq!(decorator.decorate(&mut node), Ok(42.0));
        assert_eq!(node.attribute, Some(42.0));
        assert_eq!(
            entries(decorator.symbol_table()),
            vec![("t0".to_string(), SymbolKind::Constant, 42.0)]
        );
    }

    #[test]
    fn entries_follow_post_order() {
        let mut node = tree("8-3-2");
        let mut decorator = Decorator::new();

        assert_eq!(decorator.decorate(&mut node), Ok(3.0));
        assert_eq!(
            entries(&decorator.into_symbol_table()),
            vec![
                ("t0".to_string(), SymbolKind::Constant, 8.0),
                ("t1".to_string(), SymbolKind::Constant, 3.0),
                ("t2".to_string(), SymbolKind::Temporary, 5.0),
                ("t3".to_string(), SymbolKind::Constant, 2.0),
                ("t4".to_string(), SymbolKind::Temporary, 3.0),
            ]
        );
    }

    #[test]
    fn every_node_is_decorated_once() {
        for source in ["2+3*4", "(2+3)*4", "1/4/2*8-7+0.5", "((1))", "9*(8-(7+6)/5)"] {
            let mut node = tree(source);
            let mut decorator = Decorator::new();
            decorator.decorate(&mut node).unwrap();

            assert_eq!(decorator.symbol_table().len(), node.node_count(), "{source}");
            assert!(node.preorder().iter().all(|n| n.attribute.is_some()), "{source}");
        }
    }

    #[test]
    fn precedence() {
        let mut decorator = Decorator::new();
        assert_eq!(decorator.decorate(&mut tree("2+3*4")), Ok(14.0));

        let mut decorator = Decorator::new();
        assert_eq!(decorator.decorate(&mut tree("(2+3)*4")), Ok(20.0));

        let mut decorator = Decorator::new();
        assert_eq!(decorator.decorate(&mut tree("64/4/2")), Ok(8.0));
    }

    #[test]
    fn division_by_zero_keeps_partial_state() {
        let mut node = tree("5/0");
        let mut decorator = Decorator::new();

        assert_eq!(
            decorator.decorate(&mut node),
            Err(DecorateError::DivisionByZero { dividend: 5.0 })
        );
        assert_eq!(
            entries(decorator.symbol_table()),
            vec![
                ("t0".to_string(), SymbolKind::Constant, 5.0),
                ("t1".to_string(), SymbolKind::Constant, 0.0),
            ]
        );
        assert_eq!(node.attribute, None);
    }

    #[test]
    fn division_by_zero_stops_the_walk() {
        // The failing node sits on the left, its right sibling is never visited
        let mut node = tree("(1 + 1/(2-2)) * 7");
        let mut decorator = Decorator::new();

        assert!(decorator.decorate(&mut node).is_err());
        assert_eq!(
            decorator.symbol_table().iter().map(|s| s.value).collect::<Vec<_>>(),
            vec![1.0, 1.0, 2.0, 2.0, 0.0]
        );

        let NodeKind::Binary { left, right, .. } = &node.kind else { unreachable!() };
        assert_eq!(node.attribute, None);
        assert_eq!(left.attribute, None);
        assert_eq!(right.attribute, None);
        let NodeKind::Binary { left: one, .. } = &left.kind else { unreachable!() };
        assert_eq!(one.attribute, Some(1.0));
    }

    #[test]
    fn long_chain() {
        let mut node = tree(&vec!["2"; 20_000].join("*"));
        let mut decorator = Decorator::new();

        assert_eq!(decorator.decorate(&mut node), Ok(f64::INFINITY));
        assert_eq!(decorator.symbol_table().len(), 39_999);
        assert_eq!(decorator.symbol_table().get("t2").map(|s| s.value), Some(4.0));
        assert_eq!(
            decorator.symbol_table().get("t39998").map(|s| s.kind),
            Some(SymbolKind::Temporary)
        );

        let mut node = tree(&vec!["1"; 20_000].join("-"));
        assert_eq!(Decorator::new().decorate(&mut node), Ok(-19_998.0));
    }

    #[test]
    fn negative_zero_divisor_is_zero() {
        let mut decorator = Decorator::new();
        assert!(matches!(
            decorator.decorate(&mut tree("1/(0*(0-1))")),
            Err(DecorateError::DivisionByZero { .. })
        ));
    }
}
