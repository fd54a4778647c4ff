pub mod chatbot;
pub mod completion;
pub mod fallback;
pub mod gemini;
pub mod mentors;
