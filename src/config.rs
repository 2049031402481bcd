pub const CHAT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

// Key is injected by the hosting environment; never committed.
pub const CHAT_API_KEY: &str = "";

#[cfg(debug_assertions)]
pub fn get_chat_api_base() -> &'static str {
    "http://localhost:3001" // Local proxy when running against a dev server
}

#[cfg(not(debug_assertions))]
pub fn get_chat_api_base() -> &'static str {
    "https://generativelanguage.googleapis.com"
}

pub fn chat_api_url() -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        get_chat_api_base(),
        CHAT_MODEL,
        CHAT_API_KEY
    )
}
