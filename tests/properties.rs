//! Property tests for the graph, ranking, selection, and overlap metrics.

use proptest::prelude::*;
use text_analyzer::{
    evaluate, Document, LexRank, SimilarityGraphBuilder, SummaryExtractor, Tokenizer,
};

/// Documents of 1..12 sentences drawn from a small vocabulary, so sentences
/// actually overlap
fn document_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "graph", "rank", "sentence", "term", "score", "vector", "summary", "text", "node",
        "edge", "weight", "cosine",
    ]);
    let sentence = prop::collection::vec(word, 1..8).prop_map(|words| {
        let mut s = words.join(" ");
        s.push('.');
        s
    });
    prop::collection::vec(sentence, 1..12).prop_map(|sentences| sentences.join(" "))
}

fn parse(text: &str) -> Document {
    Document::parse(text, &Tokenizer::new())
}

fn sentence_terms(doc: &Document) -> Vec<Vec<String>> {
    doc.sentences.iter().map(|s| s.terms.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_graph_is_symmetric_without_self_loops(text in document_text()) {
        let doc = parse(&text);
        let graph = SimilarityGraphBuilder::new().build(&sentence_terms(&doc));
        for a in 0..graph.num_nodes {
            prop_assert_eq!(graph.weight(a, a), 0.0);
            for (b, w) in graph.neighbors(a) {
                prop_assert!(w > 0.0 && w <= 1.0 + 1e-12);
                prop_assert_eq!(w, graph.weight(b, a));
            }
        }
    }

    #[test]
    fn prop_centrality_sums_to_one(text in document_text()) {
        let doc = parse(&text);
        let graph = SimilarityGraphBuilder::new().build(&sentence_terms(&doc));
        let result = LexRank::new().rank(&graph);
        prop_assert_eq!(result.scores.len(), doc.len());
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(result.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn prop_summary_in_document_order(text in document_text(), n in 1usize..20) {
        let summary = text_analyzer::summarize(&text, n).unwrap();
        let sentence_count = parse(&text).len();
        prop_assert_eq!(summary.len(), n.min(sentence_count));
        prop_assert!(summary.indices.windows(2).all(|w| w[0] < w[1]));
        if n >= sentence_count {
            prop_assert_eq!(summary.indices, (0..sentence_count).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_summary_is_deterministic(text in document_text(), n in 1usize..6) {
        let first = text_analyzer::summarize(&text, n).unwrap();
        let second = text_analyzer::summarize(&text, n).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_selection_keeps_top_scores(scores in prop::collection::vec(0.0f64..1.0, 1..30), n in 1usize..30) {
        let sentences: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut s = text_analyzer::Sentence::new(i, format!("S{}.", i), vec![]);
                s.score = score;
                s
            })
            .collect();
        let result = SummaryExtractor::new().select(&sentences, n);
        let lowest_selected = result
            .sentences
            .iter()
            .map(|s| s.score)
            .fold(f64::INFINITY, f64::min);
        for s in &sentences {
            if !result.indices.contains(&s.index) {
                prop_assert!(s.score <= lowest_selected);
            }
        }
    }

    #[test]
    fn prop_rouge_identity(words in prop::collection::vec("[a-z]{1,8}", 2..30)) {
        let text = words.join(" ");
        let score = evaluate(&text, &text);
        for (name, triple) in score.metrics() {
            prop_assert!((triple.precision - 1.0).abs() < 1e-12, "{} precision", name);
            prop_assert!((triple.recall - 1.0).abs() < 1e-12, "{} recall", name);
            prop_assert!((triple.f1 - 1.0).abs() < 1e-12, "{} f1", name);
        }
    }

    #[test]
    fn prop_rouge_disjoint(
        a in prop::collection::vec("[a-m]{1,6}", 1..20),
        b in prop::collection::vec("[n-z]{1,6}", 1..20),
    ) {
        let score = evaluate(&a.join(" "), &b.join(" "));
        for (_, triple) in score.metrics() {
            prop_assert_eq!(triple.f1, 0.0);
        }
    }

    #[test]
    fn prop_rouge_bounded(
        a in prop::collection::vec("[a-e]{1,3}", 0..20),
        b in prop::collection::vec("[a-e]{1,3}", 0..20),
    ) {
        let score = evaluate(&a.join(" "), &b.join(" "));
        for (_, t) in score.metrics() {
            for v in [t.precision, t.recall, t.f1] {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
