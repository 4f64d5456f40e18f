//! Prompt templates for the generation service.

/// System identity sent with every generation call.
pub const IDENTITY: &str = "You are a helpful assistant for an educational institution. \
You answer questions about admissions, programs, and facilities using only the \
institutional documents provided to you.";

/// Wrap retrieved context and the user's question into the grounded
/// generation prompt.
pub fn rag_prompt(context: &str, question: &str) -> String {
    format!(
        "Based on the following information from institutional documents, please answer \
the user's question:\n\n\
Context:\n{context}\n\n\
User Question: {question}\n\n\
Instructions:\n\
1. Use ONLY the information provided in the context above to answer the question.\n\
2. If the context doesn't contain relevant information, say so and offer to help \
with related topics covered by the documents.\n\
3. Provide a concise but informative answer, citing specific details from the \
context when possible.\n\
4. If you're unsure about any information, state that clearly rather than making \
assumptions.\n\n\
Answer:\n"
    )
}
