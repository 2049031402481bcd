use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const SHOW_AFTER_PX: f64 = 300.0;

pub fn scroll_to_top_smooth() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let mut last = false;
                let tracker = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let now = window.scroll_y().unwrap_or(0.0) > SHOW_AFTER_PX;
                        if now != last {
                            last = now;
                            visible.set(now);
                        }
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback("scroll", tracker.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            tracker.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_click = Callback::from(|_| scroll_to_top_smooth());

    if !*visible {
        return html! {};
    }

    html! {
        <button class="scroll-top" onclick={on_click} aria-label="Scroll to top">
            {"↑"}
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 40;
                    width: 52px;
                    height: 52px;
                    border-radius: 50%;
                    border: none;
                    background: linear-gradient(135deg, var(--accent), var(--primary));
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                    box-shadow: 0 12px 24px var(--primary-shadow);
                    animation: scroll-top-in 0.3s ease-out;
                }

                @keyframes scroll-top-in {
                    from { transform: translateX(-80px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                .scroll-top:hover { filter: brightness(1.1); }
                "#}
            </style>
        </button>
    }
}
