use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::content::{SiteCtx, ABOUT_STATS, ABOUT_VALUES};
use crate::ui::animate::Animation;
use crate::ui::counter;

const COUNT_DURATION_MS: u32 = 900;

const GALLERY: &[&str] = &[
    "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&h=1066&fit=crop&q=80",
    "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?w=800&h=1066&fit=crop&q=80",
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=800&h=1066&fit=crop&q=80",
    "https://images.unsplash.com/photo-1544776193-352d25ca82cd?w=800&h=1066&fit=crop&q=80",
];

fn section_in_view(section: &Element) -> bool {
    let rect = section.get_bounding_client_rect();
    let viewport_h = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    rect.top() < viewport_h - 120.0 && rect.bottom() > 0.0
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;
    let section_ref = use_node_ref();
    let in_view = use_state(|| false);
    let counters = use_state(|| vec![0u32; ABOUT_STATS.len()]);

    // Visibility tracking drives the counters and lets them replay every
    // time the section scrolls back in.
    {
        let in_view = in_view.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                if let Some(section) = section_ref.cast::<Element>() {
                    in_view.set(section_in_view(&section));
                }

                let mut last = false;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(section) = section_ref.cast::<Element>() {
                        let now = section_in_view(&section);
                        if now != last {
                            last = now;
                            in_view.set(now);
                        }
                    }
                }) as Box<dyn FnMut()>);

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

    {
        let counters = counters.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let animation = if *visible {
                    let counters = counters.clone();
                    let mut finished = false;
                    Some(Animation::start(move |elapsed| {
                        if finished {
                            return;
                        }
                        let values: Vec<u32> = ABOUT_STATS
                            .iter()
                            .map(|s| counter::value_at(s.value, elapsed, COUNT_DURATION_MS))
                            .collect();
                        if elapsed >= COUNT_DURATION_MS {
                            finished = true;
                        }
                        counters.set(values);
                    }))
                } else {
                    // Reset so the animation replays on re-entry.
                    counters.set(vec![0; ABOUT_STATS.len()]);
                    None
                };
                move || drop(animation)
            },
            *in_view,
        );
    }

    html! {
        <section
            id="about"
            ref={section_ref}
            class={classes!("about", (*in_view).then(|| "in-view"))}
        >
            <div class="about-grid">
                <div class="about-text">
                    <div class="section-kicker">
                        <span class="kicker-bar"></span>
                        <span>{format!("About {}", site.short_name)}</span>
                    </div>

                    <h2>
                        {"Inspiring Young Muslims to "}
                        <span class="text-gradient">{"Excel & Lead"}</span>
                    </h2>

                    <p>
                        {"At "}<strong>{site.name}</strong>
                        {", we blend rigorous academics with spiritual formation. Our approach targets the whole child — intellect, character, and leadership — in a warm, faith-centered learning environment."}
                    </p>

                    <p>
                        {"Our mission: "}
                        <em>{"to cultivate confident, compassionate, and capable young leaders"}</em>
                        {" rooted in Islamic values, prepared for the future."}
                    </p>

                    <div class="about-values">
                        { for ABOUT_VALUES.iter().map(|value| html! {
                            <div class={classes!("about-value", "glass-card", value.accent)} key={value.label}>
                                <h4>{value.label}</h4>
                                <p>{value.description}</p>
                            </div>
                        }) }
                    </div>

                    <div class="about-stats-row">
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().enumerate().map(|(i, stat)| html! {
                                <div class="about-stat" key={stat.label}>
                                    <div class="about-stat-value">
                                        {counters.get(i).copied().unwrap_or(0)}
                                        <span class="about-stat-suffix">{stat.suffix}</span>
                                    </div>
                                    <div class="about-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>

                        <div class="about-ctas">
                            <a href="#contact" class="about-cta solid">{"Enroll Now"}</a>
                            <a href="#contact" class="about-cta outline">{"Schedule a Visit"}</a>
                        </div>
                    </div>
                </div>

                <div class="about-gallery">
                    { for GALLERY.iter().enumerate().map(|(i, src)| html! {
                        <figure class={classes!("about-photo", (i % 2 == 1).then(|| "offset"))} key={*src}>
                            <img src={*src} alt="School life" loading="lazy" />
                            <figcaption>{"Learn • Play • Pray"}</figcaption>
                        </figure>
                    }) }
                    <blockquote class="about-quote">
                        {format!("\u{201c}{} offered our child an environment where faith and learning go hand-in-hand — teachers are caring and expectations are high.\u{201d} — Parent of Grade 3 student", site.short_name)}
                    </blockquote>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 6rem 1.5rem;
                    position: relative;
                    overflow: hidden;
                }

                .about-grid {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-text {
                    opacity: 0;
                    transform: translateY(18px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .about.in-view .about-text {
                    opacity: 1;
                    transform: translateY(0);
                }

                .about h2 {
                    font-size: clamp(2.2rem, 4.5vw, 3.2rem);
                    line-height: 1.15;
                    margin-bottom: 1.25rem;
                }

                .about-text > p {
                    font-size: 1.1rem;
                    color: var(--muted);
                    line-height: 1.65;
                    margin-bottom: 1.25rem;
                }

                .about-values {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin: 1.75rem 0;
                }

                .about-value { padding: 1rem 1.25rem; }

                .about-value h4 { margin-bottom: 0.3rem; }

                .about-value p {
                    font-size: 0.88rem;
                    color: var(--muted);
                    line-height: 1.4;
                }

                .about-stats-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }

                .about-stats { display: flex; gap: 1.75rem; }

                .about-stat-value {
                    font-size: 2.2rem;
                    font-weight: 800;
                }

                .about-stat-suffix {
                    font-size: 1.3rem;
                    color: var(--primary);
                    margin-left: 0.15rem;
                }

                .about-stat-label {
                    font-size: 0.85rem;
                    color: var(--muted);
                }

                .about-ctas { display: flex; gap: 0.75rem; }

                .about-cta {
                    padding: 0.8rem 1.4rem;
                    border-radius: 16px;
                    font-weight: 600;
                    font-size: 0.95rem;
                    text-decoration: none;
                }

                .about-cta.solid {
                    background: linear-gradient(45deg, var(--primary), var(--accent));
                    color: #fff;
                    box-shadow: 0 8px 20px var(--primary-shadow);
                }

                .about-cta.outline {
                    border: 1px solid var(--border);
                    color: var(--foreground);
                }

                .about-gallery {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .about-photo {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid var(--border);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                    opacity: 0;
                    transform: scale(0.94) translateY(20px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .about.in-view .about-photo {
                    opacity: 1;
                    transform: scale(1) translateY(0);
                }

                .about-photo.offset { margin-top: 2.5rem; }

                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.7s ease;
                }

                .about-photo:hover img { transform: scale(1.07); }

                .about-photo figcaption {
                    position: absolute;
                    left: 0.75rem;
                    bottom: 0.75rem;
                    background: var(--card);
                    backdrop-filter: blur(8px);
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.72rem;
                    font-weight: 600;
                }

                .about-quote {
                    grid-column: span 2;
                    margin-top: 1rem;
                    font-size: 0.92rem;
                    color: var(--muted);
                    line-height: 1.55;
                }

                @media (max-width: 960px) {
                    .about-grid { grid-template-columns: 1fr; gap: 3rem; }
                    .about-stats { gap: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
