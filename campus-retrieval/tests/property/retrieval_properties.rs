//! Property tests for the hybrid retrieval core.

use std::collections::HashSet;

use campus_core::config::RetrievalConfig;
use campus_core::models::Document;
use campus_core::traits::{IEmbeddingProvider, ITokenCounter};
use campus_embeddings::HashedTfProvider;
use campus_retrieval::{normalize, ContextAssembler, RetrievalEngine, TfidfIndex, VectorIndex};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "dental", "college", "offers", "bds", "program", "engineering", "btech", "admission",
    "library", "hostel", "campus", "tuition",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..8).prop_map(|ws| ws.join(" "))
}

fn corpus_strategy(max_docs: usize) -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(text_strategy(), 1..max_docs).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc-{i}"), format!("doc-{i}.txt"), t))
            .collect()
    })
}

/// Recompute both channels exactly the way the engine gathers them.
fn channel_union(docs: &[Document], provider: &dyn IEmbeddingProvider, query: &str, k: usize) -> HashSet<usize> {
    let texts: Vec<String> = docs.iter().map(|d| d.text.clone()).collect();
    let vector = VectorIndex::build(provider.embed_batch(&texts).unwrap()).unwrap();
    let dense = vector.search(&provider.embed(query).unwrap(), k);

    let tfidf = TfidfIndex::fit(docs).unwrap();
    let sims = tfidf.similarities(&tfidf.transform(query));
    let mut sparse: Vec<(usize, f32)> = sims.into_iter().enumerate().collect();
    sparse.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    sparse.truncate(k);

    dense
        .iter()
        .map(|&(i, _)| i)
        .chain(sparse.iter().map(|&(i, _)| i))
        .collect()
}

proptest! {
    /// retrieve(q, k) ⊆ dense ∪ sparse, with |hits| = min(k, |union|).
    #[test]
    fn hybrid_union_property(
        docs in corpus_strategy(6),
        query in text_strategy(),
        k in 1usize..7,
    ) {
        let provider = HashedTfProvider::new(64);
        let engine =
            RetrievalEngine::build(&docs, &provider, RetrievalConfig::default()).unwrap();
        let hits = engine.retrieve_top(&query, k).unwrap();

        let union = channel_union(&docs, &provider, &normalize(&query), k);
        let hit_set: HashSet<usize> = hits.iter().map(|h| h.doc).collect();

        prop_assert!(hit_set.is_subset(&union));
        prop_assert_eq!(hits.len(), k.min(union.len()));
        // No duplicates and deterministic descending order.
        prop_assert_eq!(hit_set.len(), hits.len());
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Repeated retrieval over the same engine is deterministic.
    #[test]
    fn retrieval_is_deterministic(
        docs in corpus_strategy(5),
        query in text_strategy(),
        k in 1usize..5,
    ) {
        let provider = HashedTfProvider::new(64);
        let engine =
            RetrievalEngine::build(&docs, &provider, RetrievalConfig::default()).unwrap();
        let first = engine.retrieve_top(&query, k).unwrap();
        let second = engine.retrieve_top(&query, k).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The assembled context never exceeds the budget, and every included
    /// piece is a whole document.
    #[test]
    fn budget_is_respected(
        docs in corpus_strategy(5),
        budget in 0usize..30,
    ) {
        struct WordCounter;
        impl ITokenCounter for WordCounter {
            fn count(&self, text: &str) -> usize {
                text.split_whitespace().count()
            }
        }

        let order: Vec<usize> = (0..docs.len()).collect();
        let counter = WordCounter;
        let assembler = ContextAssembler::new(&counter);
        let context = assembler.assemble(&order, &docs, budget);

        prop_assert!(counter.count(&context) <= budget);
        if !context.is_empty() {
            let texts: HashSet<&str> = docs.iter().map(|d| d.text.as_str()).collect();
            for piece in context.split("\n\n") {
                prop_assert!(texts.contains(piece), "partial document in context: {piece:?}");
            }
        }
    }
}

#[test]
fn empty_corpus_retrieves_nothing() {
    let docs: Vec<Document> = Vec::new();
    let provider = HashedTfProvider::new(64);
    let engine = RetrievalEngine::build(&docs, &provider, RetrievalConfig::default()).unwrap();
    assert!(engine.retrieve_top("admission", 5).unwrap().is_empty());
}
