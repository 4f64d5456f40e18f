//! The conversation loop.
//!
//! `Assistant` wires expansion, retrieval, and assembly in front of the
//! generation service. Construction is fatal on failure (an unusable
//! index or encoder should stop the process at startup); per-turn
//! failures are logged and replaced with a fixed apology so the loop
//! itself never crashes.

use campus_core::config::CampusConfig;
use campus_core::errors::CampusResult;
use campus_core::models::{ChatMessage, Document};
use campus_core::traits::{IEmbeddingProvider, IGenerator, ITokenCounter};
use campus_retrieval::{ContextAssembler, RetrievalEngine, SynonymExpander};
use tracing::{debug, error};

use crate::prompt;
use crate::session::SessionState;

/// One conversation over a fixed corpus.
pub struct Assistant<'a> {
    engine: RetrievalEngine<'a>,
    expander: SynonymExpander,
    counter: &'a dyn ITokenCounter,
    generator: &'a dyn IGenerator,
    session: SessionState,
    config: CampusConfig,
}

impl<'a> Assistant<'a> {
    /// Build the full retrieval stack over the loaded corpus.
    pub fn new(
        documents: &'a [Document],
        embedder: &'a dyn IEmbeddingProvider,
        counter: &'a dyn ITokenCounter,
        generator: &'a dyn IGenerator,
        config: CampusConfig,
    ) -> CampusResult<Self> {
        let engine = RetrievalEngine::build(documents, embedder, config.retrieval.clone())?;
        let expander = SynonymExpander::new(&config.expansion);
        Ok(Self {
            engine,
            expander,
            counter,
            generator,
            session: SessionState::new(),
            config,
        })
    }

    /// Handle one user turn, always returning something to display.
    pub fn handle_turn(&mut self, user_input: &str) -> String {
        self.session.push_user(user_input);

        let reply = match self.answer(user_input) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("no relevant context found, serving the no-context reply");
                self.config.chat.no_context_reply.clone()
            }
            Err(e) => {
                error!(error = %e, "turn failed, serving the fallback reply");
                self.config.chat.error_reply.clone()
            }
        };

        self.session.push_assistant(reply.clone());
        reply
    }

    /// expand → retrieve → assemble → generate. `None` means the corpus
    /// had nothing relevant under the budget.
    fn answer(&self, user_input: &str) -> CampusResult<Option<String>> {
        let query = if self.config.expansion.enabled {
            self.expander.expand(user_input)
        } else {
            user_input.to_string()
        };

        let hits = self.engine.retrieve(&query)?;
        let order: Vec<usize> = hits.iter().map(|h| h.doc).collect();

        let assembler = ContextAssembler::new(self.counter);
        let context = assembler.assemble(
            &order,
            self.engine.documents(),
            self.config.retrieval.context_budget,
        );
        if context.is_empty() {
            return Ok(None);
        }

        let message = ChatMessage::user(prompt::rag_prompt(&context, user_input));
        let reply = self.generator.generate(
            prompt::IDENTITY,
            &[message],
            self.config.chat.reply_budget,
            &self.config.chat.tools,
        )?;
        Ok(Some(reply))
    }

    /// The conversation transcript so far.
    pub fn transcript(&self) -> &[ChatMessage] {
        self.session.messages()
    }
}
