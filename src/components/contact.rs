use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::CONTACT_INFO;
use crate::ui::validate::{validate_contact, FieldErrors};

const SUBMIT_DELAY_MS: u32 = 1500;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let sent = use_state(|| false);

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let found = validate_contact(&name, &email, &message);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::default());
            submitting.set(true);
            sent.set(false);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            spawn_local(async move {
                // No submission backend; the form resolves client-side.
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                submitting.set(false);
                sent.set(true);
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <div class="section-header">
                <span class="section-badge">{"Get In Touch"}</span>
                <h2>{"Start Your Journey Today"}</h2>
                <p>
                    {"Have questions? We're here to help. Reach out and let's discuss how we can serve your family."}
                </p>
            </div>

            <div class="contact-grid">
                <form class="contact-form glass-card" onsubmit={onsubmit}>
                    if *sent {
                        <div class="contact-success">
                            {"Message Sent! We'll get back to you within 24 hours."}
                        </div>
                    }

                    <label for="contact-name">{"Full Name *"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                    />
                    if let Some(msg) = errors.name {
                        <p class="field-error">{msg}</p>
                    }

                    <label for="contact-email">{"Email Address *"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="your.email@example.com"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                    if let Some(msg) = errors.email {
                        <p class="field-error">{msg}</p>
                    }

                    <label for="contact-phone">{"Phone Number"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        placeholder="(555) 123-4567"
                        value={(*phone).clone()}
                        oninput={bind_input(&phone)}
                    />

                    <label for="contact-message">{"Message *"}</label>
                    <textarea
                        id="contact-message"
                        placeholder="Tell us about your inquiry..."
                        value={(*message).clone()}
                        oninput={on_message}
                    />
                    if let Some(msg) = errors.message {
                        <p class="field-error">{msg}</p>
                    }

                    <button type="submit" disabled={*submitting}>
                        { if *submitting { "Sending..." } else { "Send Message" } }
                    </button>
                </form>

                <div class="contact-info">
                    { for CONTACT_INFO.iter().map(|item| html! {
                        <div class="contact-card glass-card" key={item.title}>
                            <span class="contact-glyph">{item.glyph}</span>
                            <div>
                                <h3>{item.title}</h3>
                                {
                                    if let Some(link) = item.link {
                                        html! { <a href={link} target="_blank" rel="noopener noreferrer">{item.value}</a> }
                                    } else {
                                        html! { <p>{item.value}</p> }
                                    }
                                }
                            </div>
                        </div>
                    }) }
                    <div class="contact-map glass-card">
                        <p>{"Interactive Map"}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact { padding: 6rem 1.5rem; }

                .contact-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.1fr 0.9fr;
                    gap: 3rem;
                    align-items: start;
                }

                .contact-form {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }

                .contact-form label {
                    font-weight: 600;
                    font-size: 0.9rem;
                    margin: 1.1rem 0 0.45rem;
                }

                .contact-form label:first-of-type { margin-top: 0; }

                .contact-form input,
                .contact-form textarea {
                    padding: 0.85rem 1rem;
                    border-radius: 12px;
                    border: 1px solid var(--border);
                    background: var(--background);
                    color: var(--foreground);
                    font-size: 0.95rem;
                    font-family: inherit;
                    outline: none;
                    transition: border-color 0.3s ease;
                }

                .contact-form input:focus,
                .contact-form textarea:focus { border-color: var(--primary); }

                .contact-form textarea { min-height: 150px; resize: vertical; }

                .field-error {
                    color: var(--destructive);
                    font-size: 0.82rem;
                    margin-top: 0.35rem;
                }

                .contact-form button {
                    margin-top: 1.75rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 12px;
                    background: var(--primary);
                    color: #fff;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: filter 0.2s ease;
                }

                .contact-form button:hover { filter: brightness(1.08); }

                .contact-form button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }

                .contact-success {
                    background: var(--success-soft);
                    color: var(--success);
                    border: 1px solid var(--success);
                    border-radius: 12px;
                    padding: 0.9rem 1.1rem;
                    margin-bottom: 1.25rem;
                    font-weight: 600;
                    font-size: 0.92rem;
                }

                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .contact-card {
                    padding: 1.4rem;
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    transition: transform 0.3s ease;
                }

                .contact-card:hover { transform: scale(1.03); }

                .contact-glyph {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: var(--chip-bg);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    flex-shrink: 0;
                }

                .contact-card h3 {
                    font-size: 1rem;
                    margin-bottom: 0.25rem;
                }

                .contact-card a,
                .contact-card p {
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 0.92rem;
                }

                .contact-card a:hover { color: var(--primary); }

                .contact-map {
                    height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, var(--primary-faint), var(--accent-soft));
                    color: var(--muted);
                }

                @media (max-width: 920px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
