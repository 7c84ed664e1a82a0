use std::collections::HashMap;

use asn1_descriptor::SymbolMetadata;

/// Identifies a symbol of a loaded grammar by its position in the symbol table.
pub type Symbol = u16;

/// Reported for input that no lexical rule of the grammar recognizes.
pub const ERROR_SYMBOL: Symbol = Symbol::MAX;

/// Name and id indices over a validated symbol table.
#[derive(Debug)]
pub(crate) struct SymbolTable {
    symbols: &'static [SymbolMetadata],
    named: HashMap<&'static str, Symbol>,
    anonymous: HashMap<&'static str, Symbol>,
}

impl SymbolTable {
    /// Indexes `symbols`, which must have passed validation.
    pub(crate) fn new(symbols: &'static [SymbolMetadata]) -> Self {
        let mut named = HashMap::new();
        let mut anonymous = HashMap::new();
        for (id, symbol) in symbols.iter().enumerate() {
            let index = if symbol.named {
                &mut named
            } else {
                &mut anonymous
            };
            index.insert(symbol.name, id as Symbol);
        }
        SymbolTable {
            symbols,
            named,
            anonymous,
        }
    }

    pub(crate) fn id(&self, name: &str, named: bool) -> Option<Symbol> {
        if named {
            self.named.get(name).copied()
        } else {
            self.anonymous.get(name).copied()
        }
    }

    pub(crate) fn get(&self, id: Symbol) -> Option<&'static SymbolMetadata> {
        self.symbols.get(usize::from(id))
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Symbol, &'static SymbolMetadata)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(id, symbol)| (id as Symbol, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SYMBOLS: [SymbolMetadata; 4] = [
        SymbolMetadata::END,
        SymbolMetadata::named("plus"),
        SymbolMetadata::anonymous("plus"),
        SymbolMetadata::anonymous("+"),
    ];

    #[test]
    fn separates_named_and_anonymous_symbols() {
        let table = SymbolTable::new(&SYMBOLS);
        assert_eq!(table.id("plus", true), Some(1));
        assert_eq!(table.id("plus", false), Some(2));
        assert_eq!(table.id("+", true), None);
        assert_eq!(table.id("end", true), Some(0));
    }

    #[test]
    fn looks_up_symbols_by_id() {
        let table = SymbolTable::new(&SYMBOLS);
        assert_eq!(table.get(3).map(|s| s.name), Some("+"));
        assert!(table.get(4).is_none());
        assert_eq!(table.len(), 4);
        assert_eq!(table.iter().count(), 4);
    }
}
