use gloo_timers::callback::{Interval, Timeout};
use web_sys::window;
use yew::prelude::*;

const SEEN_KEY: &str = "enrollment-banner-seen";

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    /// Delay before the banner first appears.
    #[prop_or(2000)]
    pub initial_delay_ms: u32,
    /// When set, the banner re-shows itself on this period even after being
    /// dismissed, until the component unmounts. When unset, dismissal writes
    /// a session flag and the banner stays gone for the session.
    #[prop_or_default]
    pub recur_ms: Option<u32>,
}

fn banner_seen() -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(_)) = storage.get_item(SEEN_KEY) {
                return true;
            }
        }
    }
    false
}

fn remember_seen() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(SEEN_KEY, "true");
        }
    }
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let delay = props.initial_delay_ms;
        let recur = props.recur_ms;
        use_effect_with_deps(
            move |_| {
                let show = visible.clone();
                let timeout = Timeout::new(delay, move || {
                    if recur.is_some() || !banner_seen() {
                        show.set(true);
                    }
                });
                let interval = recur.map(|period| {
                    let show = visible.clone();
                    Interval::new(period, move || show.set(true))
                });
                // Both timers die with the component.
                move || {
                    drop(timeout);
                    drop(interval);
                }
            },
            (),
        );
    }

    let on_close = {
        let visible = visible.clone();
        let recur = props.recur_ms;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            visible.set(false);
            if recur.is_none() {
                remember_seen();
            }
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="alert-banner glass-card">
            <button class="alert-banner-close" onclick={on_close}>{"✕"}</button>
            <div class="alert-banner-body">
                <div class="alert-banner-bell">{"🔔"}</div>
                <div>
                    <h3>{"Enrollment Open!"}</h3>
                    <p>{"Secure your child's spot for the 2025 academic year. Limited seats available."}</p>
                    <a href="#contact" class="alert-banner-cta">{"Apply Now"}</a>
                </div>
            </div>

            <style>
                {r#"
                .alert-banner {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 60;
                    width: 20rem;
                    max-width: calc(100vw - 3rem);
                    padding: 1.5rem;
                    border: 2px solid var(--accent-border);
                    animation: banner-slide 0.5s ease-out;
                }

                @keyframes banner-slide {
                    from { transform: translateX(-120%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                .alert-banner-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: var(--muted);
                    font-size: 0.9rem;
                }

                .alert-banner-close:hover { color: var(--foreground); }

                .alert-banner-body {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .alert-banner-bell {
                    background: var(--primary);
                    border-radius: 12px;
                    padding: 0.6rem;
                    font-size: 1.3rem;
                    animation: bell-pulse 2s ease-in-out infinite;
                }

                @keyframes bell-pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.1); }
                }

                .alert-banner h3 {
                    font-size: 1.1rem;
                    margin-bottom: 0.4rem;
                }

                .alert-banner p {
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin-bottom: 0.9rem;
                    line-height: 1.45;
                }

                .alert-banner-cta {
                    display: block;
                    text-align: center;
                    background: var(--primary);
                    color: #fff;
                    padding: 0.55rem 1rem;
                    border-radius: 10px;
                    font-size: 0.9rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .alert-banner-cta:hover { filter: brightness(1.08); }
                "#}
            </style>
        </div>
    }
}
