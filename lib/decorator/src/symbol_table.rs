use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// Generated name of a table entry, displayed as `t<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
#[display(fmt = "t{}", _0)]
pub struct TempName(pub usize);

impl std::str::FromStr for TempName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s.strip_prefix('t').ok_or(())?;
        // usize::from_str also takes "+1", and "t01" would alias "t1"
        let digits_only = !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || (index.len() > 1 && index.starts_with('0')) {
            return Err(());
        }
        index.parse().map(TempName).map_err(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolKind {
    /// A literal from the input.
    Constant,
    /// The value of an operator node.
    Temporary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: TempName,
    pub kind: SymbolKind,
    pub value: f64,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} = {:?}", self.name, self.kind, self.value)
    }
}

/// Append-only evaluation trace. Entry `i` is always named `t<i>`, so the
/// insertion order is the post-order in which nodes were decorated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn push(&mut self, kind: SymbolKind, value: f64) -> TempName {
        let name = TempName(self.symbols.len());
        log::trace!("{name}: {kind} = {value:?}");
        self.symbols.push(Symbol { name, kind, value });
        name
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        let TempName(index) = name.parse::<TempName>().ok()?;
        self.symbols.get(index)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }
}

impl<'t> IntoIterator for &'t SymbolTable {
    type Item = &'t Symbol;
    type IntoIter = std::slice::Iter<'t, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Symbol table is empty");
        }
        writeln!(f, "Symbol table:")?;
        writeln!(f, "{}", "-".repeat(30))?;
        write!(f, "{}", self.symbols.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_follow_insertion_order() {
        let mut table = SymbolTable::default();
        assert_eq!(table.push(SymbolKind::Constant, 8.0), TempName(0));
        assert_eq!(table.push(SymbolKind::Constant, 3.0), TempName(1));
        assert_eq!(table.push(SymbolKind::Temporary, 5.0), TempName(2));

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("t2"),
            Some(&Symbol { name: TempName(2), kind: SymbolKind::Temporary, value: 5.0 })
        );
        assert_eq!(table.get("t3"), None);
        assert_eq!(table.get("t02"), None);
        assert_eq!(table.get("x1"), None);
        assert_eq!(table.get("t"), None);
        assert_eq!(table.get("t+1"), None);
        assert_eq!(table.get("t-0"), None);
        assert_eq!(table.get("t 1"), None);
        assert_eq!(table.get("t1").map(|s| s.value), Some(3.0));
    }

    #[test]
    fn display() {
        assert_eq!(SymbolTable::default().to_string(), "Symbol table is empty");

        let mut table = SymbolTable::default();
        table.push(SymbolKind::Constant, 42.0);
        table.push(SymbolKind::Temporary, 0.5);
        assert_eq!(
            table.to_string(),
            "Symbol table:\n\
             ------------------------------\n\
             t0: constant = 42.0\n\
             t1: temporary = 0.5"
        );
    }
}
