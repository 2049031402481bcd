use chrono::{DateTime, Local};
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::json;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::content::{SiteCtx, QUICK_REPLIES, SITE};

const MAX_ATTEMPTS: u32 = 3;

const SYSTEM_PROMPT: &str = "You are the assistant for Nur Al-Ilm Islamic Academy, a friendly, \
informative, and professional helper for an Islamic elementary school. Start your response with \
'Wa alaykum assalam.' Keep responses concise, helpful, and professional, focusing on educational \
or administrative topics such as enrollment, tuition, school hours, and curriculum.";

#[derive(Clone, PartialEq)]
pub struct ChatMessage {
    id: usize,
    text: String,
    from_user: bool,
    at: DateTime<Local>,
    sources: Vec<(String, String)>,
}

pub struct BotReply {
    text: String,
    sources: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingAttributions")]
    grounding_attributions: Option<Vec<Attribution>>,
}

#[derive(Deserialize)]
struct Attribution {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

async fn send_once(url: &str, payload: &serde_json::Value) -> Result<BotReply, String> {
    let response = Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP error, status {}", response.status()));
    }

    let body: GenerateResponse = response.json().await.map_err(|e| e.to_string())?;
    let candidate = body
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| "empty response".to_string())?;

    let sources = candidate
        .grounding_metadata
        .and_then(|m| m.grounding_attributions)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| a.web)
        .filter_map(|w| match (w.uri, w.title) {
            (Some(uri), Some(title)) => Some((uri, title)),
            _ => None,
        })
        .collect();

    let text = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|p| p.text)
        .ok_or_else(|| "no text in response".to_string())?;

    Ok(BotReply { text, sources })
}

/// One user turn against the generate endpoint, with exponential backoff
/// between attempts. Every failure path collapses to a string the widget
/// turns into a fallback message.
async fn request_reply(query: String) -> Result<BotReply, String> {
    let payload = json!({
        "contents": [{ "parts": [{ "text": query }] }],
        "tools": [{ "google_search": {} }],
        "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
    });
    let url = config::chat_api_url();

    let mut last_error = String::new();
    for attempt in 0..MAX_ATTEMPTS {
        if attempt > 0 {
            TimeoutFuture::new(1_000 * (1 << (attempt - 1))).await;
        }
        match send_once(&url, &payload).await {
            Ok(reply) => return Ok(reply),
            Err(e) => {
                log!(format!("chat attempt {} failed: {}", attempt + 1, e));
                last_error = e;
            }
        }
    }
    Err(last_error)
}

pub enum Msg {
    Toggle,
    Close,
    SetInput(String),
    Send,
    QuickReply(&'static str),
    Replied(Result<BotReply, String>),
}

pub struct Chatbot {
    open: bool,
    input: String,
    messages: Vec<ChatMessage>,
    typing: bool,
    next_id: usize,
}

impl Chatbot {
    fn push(&mut self, text: String, from_user: bool, sources: Vec<(String, String)>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            from_user,
            at: Local::now(),
            sources,
        });
        self.next_id += 1;
    }

    fn submit(&mut self, ctx: &Context<Self>, text: String) {
        self.push(text.clone(), true, Vec::new());
        self.typing = true;
        ctx.link()
            .send_future(async move { Msg::Replied(request_reply(text).await) });
    }
}

impl Component for Chatbot {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut widget = Self {
            open: false,
            input: String::new(),
            messages: Vec::new(),
            typing: false,
            next_id: 1,
        };
        widget.push(
            format!(
                "As-salamu alaykum! Welcome to {}. How can I assist you today?",
                SITE.name
            ),
            false,
            Vec::new(),
        );
        widget
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
                true
            }
            Msg::Close => {
                self.open = false;
                true
            }
            Msg::SetInput(value) => {
                self.input = value;
                true
            }
            Msg::Send => {
                let text = self.input.trim().to_string();
                if text.is_empty() || self.typing {
                    return false;
                }
                self.input.clear();
                self.submit(ctx, text);
                true
            }
            Msg::QuickReply(reply) => {
                if self.typing {
                    return false;
                }
                self.input.clear();
                self.submit(ctx, reply.to_string());
                true
            }
            Msg::Replied(Ok(reply)) => {
                self.typing = false;
                self.push(reply.text, false, reply.sources);
                true
            }
            Msg::Replied(Err(_)) => {
                let site = ctx
                    .link()
                    .context::<SiteCtx>(Callback::noop())
                    .map(|(ctx, _)| ctx.0)
                    .unwrap_or(&SITE);
                self.typing = false;
                self.push(
                    format!(
                        "Wa alaykum assalam. A connection error occurred. Please try again later \
                         or call us at {} for immediate assistance.",
                        site.phone
                    ),
                    false,
                    Vec::new(),
                );
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let toggle = link.callback(|_| Msg::Toggle);
        let show_quick_replies = self.messages.len() < 3 && !self.typing;

        html! {
            <>
                <button class="chat-fab" onclick={toggle}>
                    <span class="chat-fab-dot"></span>
                    { if self.open { "✕" } else { "💬" } }
                </button>

                if self.open {
                    <div class="chat-window glass-card">
                        <div class="chat-header">
                            <div>
                                <h3>{"Chat with Us"}</h3>
                                <p>
                                    <span class="chat-online-dot"></span>
                                    { if self.typing { "AI is typing..." } else { "Online, responds in seconds" } }
                                </p>
                            </div>
                            <button class="chat-close" onclick={link.callback(|_| Msg::Close)}>{"✕"}</button>
                        </div>

                        <div class="chat-messages">
                            { for self.messages.iter().map(|message| self.render_message(message)) }
                            if self.typing {
                                <div class="chat-row bot">
                                    <div class="chat-bubble bot typing-indicator">
                                        <span></span><span></span><span></span>
                                    </div>
                                </div>
                            }
                        </div>

                        if show_quick_replies {
                            <div class="chat-quick-replies">
                                { for QUICK_REPLIES.iter().map(|reply| html! {
                                    <button
                                        key={*reply}
                                        onclick={link.callback(move |_| Msg::QuickReply(*reply))}
                                    >
                                        {*reply}
                                    </button>
                                }) }
                            </div>
                        }

                        <div class="chat-input-row">
                            <input
                                type="text"
                                placeholder="Ask about admissions..."
                                value={self.input.clone()}
                                disabled={self.typing}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::SetInput(input.value())
                                })}
                                onkeypress={link.batch_callback(|e: KeyboardEvent| {
                                    (e.key() == "Enter").then_some(Msg::Send)
                                })}
                            />
                            <button
                                class="chat-send"
                                disabled={self.typing || self.input.trim().is_empty()}
                                onclick={link.callback(|_| Msg::Send)}
                            >
                                {"➤"}
                            </button>
                        </div>
                    </div>
                }

                <style>
                    {r#"
                    .chat-fab {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 60;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        border: none;
                        background: linear-gradient(135deg, var(--primary), var(--accent));
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 16px 32px var(--primary-shadow);
                        transition: transform 0.2s ease;
                    }

                    .chat-fab:hover { transform: scale(1.06); }

                    .chat-fab-dot {
                        position: absolute;
                        top: 4px;
                        right: 6px;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #22c55e;
                        border: 2px solid #fff;
                    }

                    .chat-window {
                        position: fixed;
                        bottom: 7rem;
                        right: 1.5rem;
                        z-index: 60;
                        width: 24rem;
                        max-width: calc(100vw - 3rem);
                        height: 500px;
                        display: flex;
                        flex-direction: column;
                        animation: chat-pop 0.3s ease-out;
                    }

                    @keyframes chat-pop {
                        from { opacity: 0; transform: translateY(40px) scale(0.95); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }

                    .chat-header {
                        padding: 1rem 1.25rem;
                        border-bottom: 1px solid var(--border);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .chat-header h3 { font-size: 1.1rem; }

                    .chat-header p {
                        font-size: 0.75rem;
                        color: var(--muted);
                        display: flex;
                        align-items: center;
                        gap: 0.35rem;
                    }

                    .chat-online-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #22c55e;
                        display: inline-block;
                    }

                    .chat-close {
                        background: none;
                        border: none;
                        color: var(--muted);
                        cursor: pointer;
                        font-size: 0.95rem;
                    }

                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .chat-row { display: flex; }
                    .chat-row.user { justify-content: flex-end; }
                    .chat-row.bot { justify-content: flex-start; }

                    .chat-bubble {
                        max-width: 85%;
                        padding: 0.7rem 0.9rem;
                        border-radius: 16px;
                        font-size: 0.88rem;
                        line-height: 1.5;
                    }

                    .chat-bubble.user {
                        background: var(--primary);
                        color: #fff;
                        border-bottom-right-radius: 4px;
                    }

                    .chat-bubble.bot {
                        background: var(--chip-bg);
                        color: var(--foreground);
                        border-bottom-left-radius: 4px;
                    }

                    .chat-time {
                        display: block;
                        font-size: 0.65rem;
                        opacity: 0.6;
                        margin-top: 0.3rem;
                    }

                    .chat-sources {
                        margin-top: 0.5rem;
                        padding-top: 0.5rem;
                        border-top: 1px solid var(--border);
                        font-size: 0.72rem;
                    }

                    .chat-sources a {
                        display: block;
                        color: var(--primary);
                        text-decoration: none;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    }

                    .typing-indicator span {
                        display: inline-block;
                        width: 7px;
                        height: 7px;
                        margin-right: 3px;
                        border-radius: 50%;
                        background: var(--muted);
                        animation: typing-bounce 0.5s ease-in-out infinite;
                    }

                    .typing-indicator span:nth-child(2) { animation-delay: 0.15s; }
                    .typing-indicator span:nth-child(3) { animation-delay: 0.3s; }

                    @keyframes typing-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-3px); }
                    }

                    .chat-quick-replies {
                        padding: 0.5rem 1rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.4rem;
                    }

                    .chat-quick-replies button {
                        padding: 0.35rem 0.75rem;
                        border-radius: 999px;
                        border: 1px solid var(--accent-border);
                        background: var(--accent-soft);
                        color: var(--primary);
                        font-size: 0.72rem;
                        cursor: pointer;
                    }

                    .chat-quick-replies button:hover { background: var(--chip-bg); }

                    .chat-input-row {
                        padding: 1rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        gap: 0.5rem;
                    }

                    .chat-input-row input {
                        flex: 1;
                        padding: 0.65rem 0.9rem;
                        border-radius: 12px;
                        border: 1px solid var(--border);
                        background: var(--background);
                        color: var(--foreground);
                        font-size: 0.9rem;
                        outline: none;
                    }

                    .chat-input-row input:focus { border-color: var(--primary); }

                    .chat-send {
                        width: 44px;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(135deg, var(--primary), var(--accent));
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                    }

                    .chat-send:disabled { opacity: 0.5; cursor: not-allowed; }
                    "#}
                </style>
            </>
        }
    }
}

impl Chatbot {
    fn render_message(&self, message: &ChatMessage) -> Html {
        let side = if message.from_user { "user" } else { "bot" };
        html! {
            <div class={classes!("chat-row", side)} key={message.id}>
                <div class={classes!("chat-bubble", side)}>
                    <p>{&message.text}</p>
                    if !message.sources.is_empty() {
                        <div class="chat-sources">
                            <strong>{"Source:"}</strong>
                            { for message.sources.iter().take(1).map(|(uri, title)| html! {
                                <a href={uri.clone()} target="_blank" rel="noopener noreferrer">{title}</a>
                            }) }
                        </div>
                    }
                    <span class="chat-time">{message.at.format("%H:%M").to_string()}</span>
                </div>
            </div>
        }
    }
}
