//! Token-budgeted context assembly.
//!
//! Takes the ranked candidate order and packs whole documents into a
//! single context block until the next document would overflow the budget.

use campus_core::constants::CONTEXT_SEPARATOR;
use campus_core::models::Document;
use campus_core::traits::ITokenCounter;
use tracing::debug;

/// Greedy whole-document context packer.
pub struct ContextAssembler<'a> {
    counter: &'a dyn ITokenCounter,
}

impl<'a> ContextAssembler<'a> {
    pub fn new(counter: &'a dyn ITokenCounter) -> Self {
        Self { counter }
    }

    /// Concatenate documents in `order` until the budget is reached.
    ///
    /// Documents are admitted whole or not at all; a document whose cost
    /// (its tokens, plus the separator's once something is already
    /// included) would exceed `budget` stops assembly. A first candidate
    /// that alone exceeds the budget therefore yields the empty string.
    /// Included documents are joined with a blank line.
    pub fn assemble(&self, order: &[usize], documents: &[Document], budget: usize) -> String {
        let separator_cost = self.counter.count(CONTEXT_SEPARATOR);
        let mut included: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for &doc_index in order {
            let Some(document) = documents.get(doc_index) else {
                continue;
            };
            let mut cost = self.counter.count(&document.text);
            if !included.is_empty() {
                cost += separator_cost;
            }
            if total + cost > budget {
                debug!(
                    included = included.len(),
                    total, budget, "budget reached, stopping assembly"
                );
                break;
            }
            included.push(&document.text);
            total += cost;
        }

        included.join(CONTEXT_SEPARATOR)
    }
}
