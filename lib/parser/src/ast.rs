use std::fmt::{self, Display, Formatter};

use itertools::Either;
use scanner::TokenData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

impl Operator {
    pub fn from_token(data: &TokenData) -> Option<Self> {
        match data {
            TokenData::Plus => Some(Operator::Add),
            TokenData::Minus => Some(Operator::Subtract),
            TokenData::Star => Some(Operator::Multiply),
            TokenData::Slash => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Plain IEEE arithmetic, a zero divisor is the caller's business.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

/// A node of the expression tree.
///
/// The shape is fixed once the parser returns it. `attribute` stays `None`
/// until the node has been decorated with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub attribute: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Number(f64),
    Binary { operator: Operator, left: Box<Node>, right: Box<Node> },
}

impl Node {
    pub fn number(value: f64) -> Self {
        Self { kind: NodeKind::Number(value), attribute: None }
    }

    pub fn binary(operator: Operator, left: Node, right: Node) -> Self {
        Self {
            kind: NodeKind::Binary { operator, left: Box::new(left), right: Box::new(right) },
            attribute: None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Number(_) => "number",
            NodeKind::Binary { .. } => "operator",
        }
    }

    /// Left to right; empty for leaves.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator {
        match &self.kind {
            NodeKind::Number(_) => Either::Left(std::iter::empty::<&Node>()),
            NodeKind::Binary { left, right, .. } => {
                Either::Right([&**left, &**right].into_iter())
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    /// Nodes in pre-order, collected with an explicit stack.
    pub fn preorder(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children().rev());
        }
        nodes
    }
}

// The derived drop glue would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        let mut kind = std::mem::replace(&mut self.kind, NodeKind::Number(0.0));
        loop {
            if let NodeKind::Binary { left, right, .. } = kind {
                stack.push(left);
                stack.push(right);
            }
            match stack.pop() {
                Some(mut node) => kind = std::mem::replace(&mut node.kind, NodeKind::Number(0.0)),
                None => break,
            }
        }
    }
}

enum Piece<'n> {
    Node(&'n Node),
    Text(&'static str),
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => write!(f, "{}", text)?,
                Piece::Node(node) => match &node.kind {
                    NodeKind::Number(value) => write!(f, "{}", value)?,
                    NodeKind::Binary { operator, left, right } => {
                        write!(f, "({} ", operator)?;
                        stack.extend([
                            Piece::Text(")"),
                            Piece::Node(right),
                            Piece::Text(" "),
                            Piece::Node(left),
                        ]);
                    }
                },
            }
        }
        Ok(())
    }
}
