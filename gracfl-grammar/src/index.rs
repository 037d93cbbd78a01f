use std::collections::HashMap;

use crate::production::Production;
use crate::symbol::{LabelId, SymbolTable};

/// The five lookup structures a grammar index needs, plus
/// the raw production list and symbol table they were built from.
///
/// Every production appears in exactly the indexes its shape allows: an
/// epsilon production only sets a bit in `has_epsilon`; a unary production
/// only appears in `unary_by_rhs`; a binary production appears in all three
/// of `bin_by_pair`, `bin_by_left`, and `bin_by_right`.
#[derive(Debug, Clone)]
pub struct GrammarIndex {
    symbols: SymbolTable,
    productions: Vec<Production>,
    has_epsilon: Vec<bool>,
    unary_by_rhs: Vec<Vec<LabelId>>,
    bin_by_pair: HashMap<(LabelId, LabelId), Vec<LabelId>>,
    bin_by_left: Vec<Vec<(LabelId, LabelId)>>,
    bin_by_right: Vec<Vec<(LabelId, LabelId)>>,
}

impl GrammarIndex {
    /// Builds the five indexes from a symbol table and a flat production
    /// list. `symbols` must already contain every symbol referenced by
    /// `productions`.
    pub fn build(symbols: SymbolTable, productions: Vec<Production>) -> Self {
        let label_count = symbols.len();
        let mut has_epsilon = vec![false; label_count];
        let mut unary_by_rhs = vec![Vec::new(); label_count];
        let mut bin_by_pair: HashMap<(LabelId, LabelId), Vec<LabelId>> = HashMap::new();
        let mut bin_by_left = vec![Vec::new(); label_count];
        let mut bin_by_right = vec![Vec::new(); label_count];

        for prod in &productions {
            match *prod {
                Production::Epsilon { lhs } => has_epsilon[lhs as usize] = true,
                Production::Unary { lhs, rhs } => unary_by_rhs[rhs as usize].push(lhs),
                Production::Binary { lhs, left, right } => {
                    bin_by_pair.entry((left, right)).or_default().push(lhs);
                    bin_by_left[left as usize].push((right, lhs));
                    bin_by_right[right as usize].push((left, lhs));
                }
            }
        }

        GrammarIndex {
            symbols,
            productions,
            has_epsilon,
            unary_by_rhs,
            bin_by_pair,
            bin_by_left,
            bin_by_right,
        }
    }

    pub fn label_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbol_name(&self, id: LabelId) -> &str {
        self.symbols.name(id)
    }

    pub fn symbol_id(&self, name: &str) -> Option<LabelId> {
        self.symbols.get(name)
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn epsilon_productions(&self) -> impl Iterator<Item = LabelId> + '_ {
        self.has_epsilon
            .iter()
            .enumerate()
            .filter(|(_, &has)| has)
            .map(|(id, _)| id as LabelId)
    }

    pub fn has_epsilon(&self, a: LabelId) -> bool {
        self.has_epsilon[a as usize]
    }

    pub fn unary_by_rhs(&self, b: LabelId) -> &[LabelId] {
        &self.unary_by_rhs[b as usize]
    }

    pub fn bin_by_pair(&self, b: LabelId, c: LabelId) -> &[LabelId] {
        self.bin_by_pair
            .get(&(b, c))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn bin_by_left(&self, b: LabelId) -> &[(LabelId, LabelId)] {
        &self.bin_by_left[b as usize]
    }

    pub fn bin_by_right(&self, c: LabelId) -> &[(LabelId, LabelId)] {
        &self.bin_by_right[c as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_grammar_str;

    #[test]
    fn indexes_transitive_closure_grammar() {
        let index = parse_grammar_str("S S S\nS a\n").unwrap();
        let s = index.symbol_id("S").unwrap();
        let a = index.symbol_id("a").unwrap();
        assert_eq!(index.unary_by_rhs(a), &[s]);
        assert_eq!(index.bin_by_pair(s, s), &[s]);
        assert_eq!(index.bin_by_left(s), &[(s, s)]);
        assert_eq!(index.bin_by_right(s), &[(s, s)]);
        assert!(!index.has_epsilon(s));
    }

    #[test]
    fn indexes_epsilon_rule() {
        let index = parse_grammar_str("S\n").unwrap();
        let s = index.symbol_id("S").unwrap();
        assert!(index.has_epsilon(s));
        assert_eq!(index.epsilon_productions().collect::<Vec<_>>(), vec![s]);
    }
}
