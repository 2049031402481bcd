use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod theme;
mod ui {
    pub mod animate;
    pub mod carousel;
    pub mod counter;
    pub mod filter;
    pub mod validate;
}
mod components {
    pub mod about;
    pub mod alert_banner;
    pub mod blog;
    pub mod chatbot;
    pub mod contact;
    pub mod curriculum;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod scroll_to_top;
    pub mod teachers;
    pub mod why;
}
mod pages {
    pub mod blog_post;
    pub mod home;
    pub mod subject;
    pub mod termsprivacy;
}

use content::SiteCtx;
use pages::{
    blog_post::BlogPostPage,
    home::Home,
    subject::SubjectPage,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};
use theme::{Theme, ThemeContext, ThemeProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/subject/:id")]
    Subject { id: String },
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage slug={slug} /> }
        }
        Route::Subject { id } => {
            info!("Rendering Subject page {}", id);
            html! { <SubjectPage id={id} /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <Home /> }
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#", "Home"),
    ("#about", "About"),
    ("#why", "Why Us"),
    ("#curriculum", "Curriculum"),
    ("#teachers", "Teachers"),
    ("#blog", "Blog"),
    ("#faq", "FAQ"),
];

const NAV_OFFSET_PX: f64 = 80.0;

/// Smooth-scroll to an in-page anchor, compensating for the fixed header.
/// Returns false when the target isn't on the current page.
fn scroll_to_anchor(href: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if href == "#" {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        return true;
    }
    let Some(document) = window.document() else {
        return false;
    };
    match document.query_selector(href) {
        Ok(Some(element)) => {
            let top = element.get_bounding_client_rect().top()
                + window.page_y_offset().unwrap_or(0.0)
                - NAV_OFFSET_PX;
            let mut options = ScrollToOptions::new();
            options.top(top).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            true
        }
        _ => false,
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;
    let theme_ctx = use_context::<ThemeContext>().expect("theme context missing");
    let navigator = use_navigator().unwrap();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        is_scrolled.set(window.scroll_y().unwrap_or(0.0) > 20.0);
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |href: &'static str| {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if !scroll_to_anchor(href) {
                // Anchor target lives on the home page.
                navigator.push(&Route::Home);
            }
        })
    };

    let toggle_theme = {
        let toggle = theme_ctx.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    let theme_glyph = match theme_ctx.theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" onclick={nav_to("#")} class="nav-logo">
                    <span class="nav-logo-mark">{"📖"}</span>
                    <span>
                        <strong>{site.short_name}</strong>
                        <small>{"Islamic Academy"}</small>
                    </span>
                </a>

                <div class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={nav_to(*href)}>
                            {*label}
                        </a>
                    }) }
                </div>

                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                        {theme_glyph}
                    </button>
                    <a href="#contact" class="nav-cta" onclick={nav_to("#contact")}>
                        {"Enroll Now"}
                    </a>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: var(--card);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }

                .nav-content {
                    max-width: 1240px;
                    margin: 0 auto;
                    padding: 0.9rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: var(--foreground);
                }

                .nav-logo-mark {
                    background: var(--primary);
                    border-radius: 10px;
                    padding: 0.4rem;
                    font-size: 1.05rem;
                }

                .nav-logo strong { display: block; line-height: 1.1; }

                .nav-logo small {
                    color: var(--muted);
                    font-size: 0.68rem;
                }

                .nav-links {
                    display: flex;
                    gap: 1.6rem;
                }

                .nav-link {
                    color: var(--foreground);
                    text-decoration: none;
                    font-size: 0.9rem;
                    font-weight: 500;
                    position: relative;
                }

                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 2px;
                    background: var(--primary);
                    transition: width 0.3s ease;
                }

                .nav-link:hover { color: var(--primary); }

                .nav-link:hover::after { width: 100%; }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.9rem;
                }

                .theme-toggle {
                    width: 38px;
                    height: 38px;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--foreground);
                    font-size: 1rem;
                    cursor: pointer;
                    transition: border-color 0.2s ease;
                }

                .theme-toggle:hover { border-color: var(--primary); }

                .nav-cta {
                    background: var(--primary);
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 10px;
                    font-size: 0.88rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .nav-cta:hover { filter: brightness(1.08); }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.4rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--foreground);
                    border-radius: 999px;
                }

                @media (max-width: 920px) {
                    .burger-menu { display: flex; }

                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: var(--background);
                        border-bottom: 1px solid var(--border);
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .nav-links.open { max-height: 420px; }

                    .nav-links .nav-link {
                        padding: 0.9rem 1.5rem;
                        border-top: 1px solid var(--border);
                    }
                }
                "#}
            </style>
        </header>
    }
}

/// Shared design tokens and utility classes; component-specific rules live
/// next to their components.
#[function_component(GlobalStyles)]
fn global_styles() -> Html {
    html! {
        <style>
            {r#"
            :root {
                --background: #fdfcf9;
                --background-soft: #f4f6f3;
                --foreground: #1d2b25;
                --muted: #5c6b64;
                --card: rgba(255, 255, 255, 0.82);
                --border: rgba(29, 43, 37, 0.12);
                --primary: #0f766e;
                --accent: #4f46e5;
                --primary-shadow: rgba(15, 118, 110, 0.25);
                --primary-faint: rgba(15, 118, 110, 0.15);
                --primary-soft: rgba(15, 118, 110, 0.35);
                --accent-soft: rgba(79, 70, 229, 0.08);
                --accent-border: rgba(15, 118, 110, 0.3);
                --chip-bg: rgba(15, 118, 110, 0.1);
                --destructive: #dc2626;
                --success: #15803d;
                --success-soft: rgba(21, 128, 61, 0.1);
                --footer-bg: #132420;
                --footer-fg: #e8efec;
            }

            [data-theme="dark"] {
                --background: #101b17;
                --background-soft: #0c1512;
                --foreground: #e8efec;
                --muted: #9baba3;
                --card: rgba(23, 37, 32, 0.82);
                --border: rgba(232, 239, 236, 0.14);
                --primary: #2dd4bf;
                --accent: #818cf8;
                --primary-shadow: rgba(45, 212, 191, 0.2);
                --primary-faint: rgba(45, 212, 191, 0.15);
                --primary-soft: rgba(45, 212, 191, 0.35);
                --accent-soft: rgba(129, 140, 248, 0.12);
                --accent-border: rgba(45, 212, 191, 0.35);
                --chip-bg: rgba(45, 212, 191, 0.12);
                --success: #4ade80;
                --success-soft: rgba(74, 222, 128, 0.12);
                --footer-bg: #0a1310;
                --footer-fg: #dbe6e2;
            }

            html { scroll-behavior: smooth; }

            body {
                background: var(--background);
                color: var(--foreground);
            }

            .glass-card {
                background: var(--card);
                backdrop-filter: blur(12px);
                border: 1px solid var(--border);
                border-radius: 18px;
            }

            .section-header {
                text-align: center;
                max-width: 720px;
                margin: 0 auto 4rem;
            }

            .section-header h2 {
                font-size: clamp(2.2rem, 5vw, 3.4rem);
                letter-spacing: -0.02em;
                margin-bottom: 1.25rem;
            }

            .section-header > p {
                font-size: 1.1rem;
                color: var(--muted);
                line-height: 1.6;
            }

            .section-badge {
                display: inline-block;
                padding: 0.45rem 1.1rem;
                border-radius: 999px;
                border: 1px solid var(--accent-border);
                background: var(--chip-bg);
                color: var(--primary);
                font-size: 0.78rem;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                margin-bottom: 1.5rem;
            }

            .section-kicker {
                display: flex;
                align-items: center;
                gap: 0.6rem;
                font-size: 0.8rem;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: var(--primary);
                margin-bottom: 1rem;
            }

            .kicker-bar {
                width: 42px;
                height: 4px;
                border-radius: 999px;
                background: var(--primary);
            }

            .text-gradient {
                background: linear-gradient(45deg, var(--primary), var(--accent));
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }

            /* Accent palette used by content cards via a local variable. */
            .emerald { --chip-bg: rgba(16, 185, 129, 0.12); }
            .blue { --chip-bg: rgba(59, 130, 246, 0.12); }
            .indigo { --chip-bg: rgba(99, 102, 241, 0.12); }
            .cyan { --chip-bg: rgba(6, 182, 212, 0.12); }
            .orange { --chip-bg: rgba(249, 115, 22, 0.12); }
            .rose { --chip-bg: rgba(244, 63, 94, 0.12); }
            .pink { --chip-bg: rgba(236, 72, 153, 0.12); }
            .violet { --chip-bg: rgba(139, 92, 246, 0.12); }
            "#}
        </style>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ThemeProvider>
                <ContextProvider<SiteCtx> context={SiteCtx(&content::SITE)}>
                    <GlobalStyles />
                    <Nav />
                    <Switch<Route> render={switch} />
                </ContextProvider<SiteCtx>>
            </ThemeProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics and logs in the browser console.
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
