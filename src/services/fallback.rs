// src/services/fallback.rs

/// Reply used when no fallback key matches.
pub const UNAVAILABLE_REPLY: &str =
    "I’m powered by Gemini AI, but it seems I'm currently unable to connect. Can you try again shortly?";

/// Keys are lowercase and checked in this order; the first contained key wins.
/// Plain substring matching means "hi" also fires on "this" or "which".
pub const LOCAL_REPLIES: &[(&str, &str)] = &[
    (
        "hi",
        "Hello there! 👋 I’m Coach X — your AI mentor. How can I help you today?",
    ),
    ("hello", "Hi! 👋 How are you doing today?"),
    (
        "who are you",
        "I’m Coach X — your personal AI mentor built to help you grow smarter and stronger every day.",
    ),
    (
        "who won the womens cricket worldcup 2025",
        "The champion of the 2025 ICC Women’s Cricket World Cup is India women’s national cricket team. They defeated South Africa women’s national cricket team in the final by 52 runs.",
    ),
];

pub fn local_reply(message: &str) -> &'static str {
    let msg_lower = message.to_lowercase();

    LOCAL_REPLIES
        .iter()
        .find(|(key, _)| msg_lower.contains(*key))
        .map(|(_, reply)| *reply)
        .unwrap_or(UNAVAILABLE_REPLY)
}
