use yew::prelude::*;
use yew_hooks::use_interval;

use crate::content::{HERO_SLIDES, HERO_STATS};
use crate::ui::carousel::Carousel;

const ROTATE_MS: u32 = 5000;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let carousel = use_state(|| Carousel::new(HERO_SLIDES.len()));

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.set((*carousel).next()),
            ROTATE_MS,
        );
    }

    let slide = &HERO_SLIDES[carousel.index()];

    html! {
        <section class="hero">
            <div
                key={slide.background}
                class="hero-background"
                style={format!("background-image: url('{}');", slide.background)}
            >
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content" key={slide.title}>
                <span class="hero-badge">{"✦ "}{slide.badge}</span>
                <h1>
                    {slide.title}
                    <span class="hero-highlight">{slide.highlight}</span>
                </h1>
                <p class="hero-subtitle">{slide.subtitle}</p>

                <div class="hero-actions">
                    <a href="#contact" class="hero-cta primary">{"Start Admission →"}</a>
                    <a href="#about" class="hero-cta ghost">{"▶ Virtual Tour"}</a>
                </div>
            </div>

            <div class="hero-stats">
                { for HERO_STATS.iter().map(|stat| html! {
                    <div class="hero-stat-card glass-card" key={stat.label}>
                        <h3>{stat.value}</h3>
                        <p>{stat.label}</p>
                    </div>
                }) }
            </div>

            <div class="hero-scroll-hint">
                <span>{"Scroll"}</span>
                <div class="mouse"><div class="wheel"></div></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 1.5rem 4rem;
                    text-align: center;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    animation: hero-zoom 5s ease-out forwards;
                    z-index: -1;
                }

                @keyframes hero-zoom {
                    from { transform: scale(1.08); }
                    to { transform: scale(1); }
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to bottom,
                        var(--background-soft) 0%,
                        transparent 40%,
                        var(--background) 100%
                    );
                }

                .hero-content {
                    max-width: 860px;
                    animation: hero-rise 0.8s ease-out;
                }

                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid var(--accent-border);
                    background: var(--accent-soft);
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: clamp(2.8rem, 8vw, 5.5rem);
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                    margin-bottom: 1.5rem;
                }

                .hero-highlight {
                    display: block;
                    margin-top: 0.4rem;
                    background: linear-gradient(45deg, var(--primary), var(--accent));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--muted);
                    max-width: 620px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 4rem;
                }

                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 14px;
                    font-weight: 600;
                    font-size: 1.05rem;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-cta:hover { transform: translateY(-2px); }

                .hero-cta.primary {
                    background: var(--primary);
                    color: #fff;
                    box-shadow: 0 10px 25px var(--primary-shadow);
                }

                .hero-cta.ghost {
                    background: var(--card);
                    color: var(--foreground);
                    border: 1px solid var(--border);
                    backdrop-filter: blur(8px);
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                    width: 100%;
                    max-width: 860px;
                }

                .hero-stat-card {
                    padding: 1.5rem;
                    text-align: left;
                    transition: transform 0.3s ease;
                }

                .hero-stat-card:hover { transform: translateY(-4px); }

                .hero-stat-card h3 { font-size: 1.7rem; }

                .hero-stat-card p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    margin-top: 0.25rem;
                }

                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: var(--muted);
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .mouse {
                    width: 20px;
                    height: 32px;
                    border: 2px solid currentColor;
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                    padding-top: 4px;
                }

                .wheel {
                    width: 4px;
                    height: 7px;
                    background: currentColor;
                    border-radius: 999px;
                    animation: wheel-drop 2s ease-in-out infinite;
                }

                @keyframes wheel-drop {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }

                @media (max-width: 768px) {
                    .hero-stats { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
