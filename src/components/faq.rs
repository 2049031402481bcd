use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::{FaqCategory, FAQS};
use crate::ui::filter::filter_faqs;

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let category = use_state(|| None::<FaqCategory>);
    let query = use_state(String::new);
    // Index into the *filtered* list, so any filter change must reset it.
    let open = use_state(|| None::<usize>);

    let on_search = {
        let query = query.clone();
        let open = open.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            open.set(None);
        })
    };

    let pick_category = |value: Option<FaqCategory>| {
        let category = category.clone();
        let open = open.clone();
        Callback::from(move |_| {
            category.set(value);
            open.set(None);
        })
    };

    let filtered = filter_faqs(FAQS, *category, &query);

    html! {
        <section id="faq" class="faq">
            <div class="section-header">
                <span class="section-badge">{"Frequently Asked Questions"}</span>
                <h2>{"Got "}<span class="text-gradient">{"Questions?"}</span></h2>
                <p>{"Find answers to common questions about admissions, curriculum, fees, and more."}</p>
            </div>

            <div class="faq-search">
                <input
                    type="text"
                    placeholder="Search questions..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>

            <div class="faq-chips">
                <button
                    class={classes!("faq-chip", category.is_none().then(|| "active"))}
                    onclick={pick_category(None)}
                >
                    {"All Questions"}
                </button>
                { for FaqCategory::ALL.iter().map(|cat| html! {
                    <button
                        key={cat.label()}
                        class={classes!("faq-chip", (*category == Some(*cat)).then(|| "active"))}
                        onclick={pick_category(Some(*cat))}
                    >
                        {cat.label()}
                    </button>
                }) }
            </div>

            <div class="faq-list">
                if filtered.is_empty() {
                    <div class="faq-empty">
                        <h3>{"No questions found"}</h3>
                        <p>{"Try adjusting your search or category filter"}</p>
                    </div>
                } else {
                    { for filtered.iter().enumerate().map(|(i, entry)| {
                        let is_open = *open == Some(i);
                        let toggle = {
                            let open = open.clone();
                            Callback::from(move |_| {
                                open.set(if is_open { None } else { Some(i) });
                            })
                        };
                        html! {
                            <div
                                class={classes!("faq-item", "glass-card", is_open.then(|| "open"))}
                                key={entry.question}
                            >
                                <button class="faq-question" onclick={toggle}>
                                    <span class="faq-question-text">{entry.question}</span>
                                    <span class="faq-toggle-icon">{if is_open { "−" } else { "+" }}</span>
                                </button>
                                if is_open {
                                    <div class="faq-answer">
                                        <p>{entry.answer}</p>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                }
            </div>

            <style>
                {r#"
                .faq {
                    padding: 6rem 1.5rem;
                    background: var(--background-soft);
                }

                .faq-search {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }

                .faq-search input {
                    width: 100%;
                    padding: 1rem 1.25rem;
                    border-radius: 16px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--foreground);
                    font-size: 1rem;
                    outline: none;
                    transition: border-color 0.3s ease;
                }

                .faq-search input:focus { border-color: var(--primary); }

                .faq-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.65rem;
                    margin-bottom: 3rem;
                }

                .faq-chip {
                    padding: 0.55rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--muted);
                    font-size: 0.85rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .faq-chip:hover { color: var(--foreground); border-color: var(--accent-border); }

                .faq-chip.active {
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    color: #fff;
                    border-color: transparent;
                }

                .faq-list {
                    max-width: 820px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item { overflow: hidden; transition: border-color 0.3s ease; }

                .faq-item:hover { border-color: var(--accent-border); }

                .faq-question {
                    width: 100%;
                    padding: 1.4rem 1.5rem;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1.05rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-item.open .faq-question { color: var(--primary); }

                .faq-toggle-icon {
                    font-size: 1.4rem;
                    color: var(--primary);
                    flex-shrink: 0;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.4rem;
                    animation: faq-expand 0.3s ease;
                }

                @keyframes faq-expand {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .faq-answer p {
                    color: var(--muted);
                    line-height: 1.65;
                }

                .faq-empty {
                    text-align: center;
                    padding: 4rem 1rem;
                }

                .faq-empty h3 { margin-bottom: 0.5rem; }

                .faq-empty p { color: var(--muted); }
                "#}
            </style>
        </section>
    }
}
