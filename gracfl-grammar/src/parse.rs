use std::path::Path;

use crate::error::GrammarError;
use crate::index::GrammarIndex;
use crate::production::Production;
use crate::symbol::SymbolTable;

/// Parses a grammar file: one production per line, tokens separated by
/// ASCII whitespace. 1 token is an epsilon rule, 2 a unary rule, 3 a
/// binary rule; anything else is a fatal [`GrammarError::MalformedLine`].
/// Blank lines and surrounding whitespace are ignored.
pub fn parse_grammar_file(path: &Path) -> Result<GrammarIndex, GrammarError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GrammarError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_grammar_str(&contents)
}

pub fn parse_grammar_str(contents: &str) -> Result<GrammarIndex, GrammarError> {
    let mut symbols = SymbolTable::new();
    let mut productions = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [lhs] => {
                let lhs = symbols.intern(lhs);
                productions.push(Production::Epsilon { lhs });
            }
            [lhs, rhs] => {
                let lhs = symbols.intern(lhs);
                let rhs = symbols.intern(rhs);
                productions.push(Production::Unary { lhs, rhs });
            }
            [lhs, left, right] => {
                let lhs = symbols.intern(lhs);
                let left = symbols.intern(left);
                let right = symbols.intern(right);
                productions.push(Production::Binary { lhs, left, right });
            }
            other => {
                return Err(GrammarError::MalformedLine {
                    line: line_no + 1,
                    found: other.len(),
                });
            }
        }
    }

    log::debug!(
        "parsed grammar: {} productions over {} symbols",
        productions.len(),
        symbols.len()
    );
    Ok(GrammarIndex::build(symbols, productions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_many_symbols() {
        let err = parse_grammar_str("A B C D\n").unwrap_err();
        assert!(matches!(
            err,
            GrammarError::MalformedLine { line: 1, found: 4 }
        ));
    }

    #[test]
    fn tolerates_blank_lines_and_whitespace() {
        let index = parse_grammar_str("\n  S a  \n\nS S S\n").unwrap();
        assert_eq!(index.label_count(), 2);
    }
}
