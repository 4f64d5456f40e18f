//! Conversation loop integration: in-memory store → load → answer turns.

use std::sync::Mutex;

use campus_chat::{load_corpus, Assistant};
use campus_core::config::CampusConfig;
use campus_core::errors::{CampusResult, SourceError};
use campus_core::models::{ChatMessage, DocumentMeta, Role};
use campus_core::traits::{IDocumentSource, IGenerator};
use campus_embeddings::EmbeddingEngine;
use campus_tokens::TokenCounter;

/// In-memory document store with two institutional documents.
struct MemorySource {
    docs: Vec<(String, String, Vec<u8>)>,
}

impl MemorySource {
    fn campus() -> Self {
        Self {
            docs: vec![
                (
                    "doc-0".into(),
                    "dental.txt".into(),
                    b"Dental College offers BDS program".to_vec(),
                ),
                (
                    "doc-1".into(),
                    "engineering.txt".into(),
                    b"Engineering College offers BTech program".to_vec(),
                ),
            ],
        }
    }

    fn empty() -> Self {
        Self { docs: Vec::new() }
    }
}

impl IDocumentSource for MemorySource {
    fn list_documents(&self) -> CampusResult<Vec<DocumentMeta>> {
        Ok(self
            .docs
            .iter()
            .map(|(id, name, _)| DocumentMeta {
                id: id.clone(),
                name: name.clone(),
            })
            .collect())
    }

    fn fetch_content(&self, id: &str) -> CampusResult<Vec<u8>> {
        self.docs
            .iter()
            .find(|(doc_id, _, _)| doc_id == id)
            .map(|(_, _, bytes)| bytes.clone())
            .ok_or_else(|| {
                SourceError::FetchFailed {
                    id: id.to_string(),
                    reason: "not in store".to_string(),
                }
                .into()
            })
    }
}

/// Canned generator that records the prompts and tools it was handed.
struct RecordingGenerator {
    reply: String,
    seen: Mutex<Vec<String>>,
    tools_seen: Mutex<Vec<serde_json::Value>>,
}

impl RecordingGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
            tools_seen: Mutex::new(Vec::new()),
        }
    }
}

impl IGenerator for RecordingGenerator {
    fn generate(
        &self,
        _system: &str,
        messages: &[ChatMessage],
        _max_tokens: usize,
        tools: &[serde_json::Value],
    ) -> CampusResult<String> {
        let mut seen = self.seen.lock().unwrap();
        for m in messages {
            seen.push(m.content.clone());
        }
        *self.tools_seen.lock().unwrap() = tools.to_vec();
        Ok(self.reply.clone())
    }
}

/// Generator that always fails, to exercise the apology boundary.
struct FailingGenerator;
impl IGenerator for FailingGenerator {
    fn generate(
        &self,
        _system: &str,
        _messages: &[ChatMessage],
        _max_tokens: usize,
        _tools: &[serde_json::Value],
    ) -> CampusResult<String> {
        Err(SourceError::GenerationFailed {
            reason: "service unreachable".to_string(),
        }
        .into())
    }
}

#[test]
fn loaded_corpus_is_normalized_and_ordered() {
    let source = MemorySource::campus();
    let documents = load_corpus(&source).unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].text, "dental college offers bds program");
    assert_eq!(documents[1].name, "engineering.txt");
}

#[test]
fn grounded_turn_answers_with_generated_text() {
    campus_chat::logging::init();

    let source = MemorySource::campus();
    let documents = load_corpus(&source).unwrap();
    let config = CampusConfig::default();
    let embedder = EmbeddingEngine::new(&config.embedding).unwrap();
    let counter = TokenCounter::default();
    let generator = RecordingGenerator::new("BDS is offered by the dental college.");

    let mut assistant =
        Assistant::new(&documents, &embedder, &counter, &generator, config).unwrap();
    let reply = assistant.handle_turn("admission to dental courses");

    assert_eq!(reply, "BDS is offered by the dental college.");

    // The generator saw a prompt grounded in the dental document.
    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("dental college offers bds program"));
    assert!(seen[0].contains("User Question: admission to dental courses"));
}

#[test]
fn transcript_records_both_sides_of_each_turn() {
    let source = MemorySource::campus();
    let documents = load_corpus(&source).unwrap();
    let config = CampusConfig::default();
    let embedder = EmbeddingEngine::new(&config.embedding).unwrap();
    let counter = TokenCounter::default();
    let generator = RecordingGenerator::new("answer");

    let mut assistant =
        Assistant::new(&documents, &embedder, &counter, &generator, config).unwrap();
    assistant.handle_turn("what programs are offered?");
    assistant.handle_turn("what about facilities?");

    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[1].role, Role::Assistant);
    assert_eq!(transcript[2].content, "what about facilities?");
}

#[test]
fn configured_tools_are_forwarded_to_the_generator() {
    let source = MemorySource::campus();
    let documents = load_corpus(&source).unwrap();
    let mut config = CampusConfig::default();
    config.chat.tools = vec![serde_json::json!({
        "name": "campus_search",
        "description": "Search the institutional document corpus"
    })];
    let expected_tools = config.chat.tools.clone();
    let embedder = EmbeddingEngine::new(&config.embedding).unwrap();
    let counter = TokenCounter::default();
    let generator = RecordingGenerator::new("ok");

    let mut assistant =
        Assistant::new(&documents, &embedder, &counter, &generator, config).unwrap();
    assistant.handle_turn("admission requirements");

    assert_eq!(*generator.tools_seen.lock().unwrap(), expected_tools);
}

#[test]
fn generator_failure_is_absorbed_with_the_apology_reply() {
    let source = MemorySource::campus();
    let documents = load_corpus(&source).unwrap();
    let config = CampusConfig::default();
    let expected_apology = config.chat.error_reply.clone();
    let embedder = EmbeddingEngine::new(&config.embedding).unwrap();
    let counter = TokenCounter::default();
    let generator = FailingGenerator;

    let mut assistant =
        Assistant::new(&documents, &embedder, &counter, &generator, config).unwrap();
    let reply = assistant.handle_turn("admission requirements");

    assert_eq!(reply, expected_apology);
    // The failed turn still lands in the transcript.
    assert_eq!(assistant.transcript().len(), 2);
}

#[test]
fn empty_corpus_serves_the_no_context_reply() {
    let source = MemorySource::empty();
    let documents = load_corpus(&source).unwrap();
    let config = CampusConfig::default();
    let expected = config.chat.no_context_reply.clone();
    let embedder = EmbeddingEngine::new(&config.embedding).unwrap();
    let counter = TokenCounter::default();
    let generator = RecordingGenerator::new("should never be called");

    let mut assistant =
        Assistant::new(&documents, &embedder, &counter, &generator, config).unwrap();
    let reply = assistant.handle_turn("anything at all");

    assert_eq!(reply, expected);
    assert!(generator.seen.lock().unwrap().is_empty());
}

#[test]
fn fetching_a_missing_document_is_a_startup_failure() {
    struct BrokenSource;
    impl IDocumentSource for BrokenSource {
        fn list_documents(&self) -> CampusResult<Vec<DocumentMeta>> {
            Ok(vec![DocumentMeta {
                id: "ghost".into(),
                name: "ghost.txt".into(),
            }])
        }
        fn fetch_content(&self, id: &str) -> CampusResult<Vec<u8>> {
            Err(SourceError::FetchFailed {
                id: id.to_string(),
                reason: "gone".to_string(),
            }
            .into())
        }
    }

    let err = load_corpus(&BrokenSource).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}
