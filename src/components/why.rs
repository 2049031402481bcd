use yew::prelude::*;

use crate::content::{SiteCtx, FEATURES};

#[function_component(WhySection)]
pub fn why_section() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;

    html! {
        <section id="why" class="why">
            <div class="section-header">
                <span class="section-badge">{"Why Choose Us"}</span>
                <h2>{"Excellence in "}<span class="text-gradient">{"Every Aspect"}</span></h2>
                <p>
                    {format!(
                        "Discover what makes {} the premier choice for Islamic education, where we combine faith with future-ready skills.",
                        site.short_name
                    )}
                </p>
            </div>

            <div class="why-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class={classes!("why-card", "glass-card", feature.accent)} key={feature.title}>
                        <div class="why-icon"></div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                        <div class="why-underline"></div>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .why { padding: 6rem 1.5rem; }

                .why-grid {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.75rem;
                }

                .why-card {
                    padding: 2rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .why-card:hover {
                    transform: translateY(-8px);
                    border-color: var(--accent-border);
                }

                .why-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 16px;
                    background: var(--chip-bg);
                    margin-bottom: 1.25rem;
                }

                .why-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }

                .why-card p {
                    color: var(--muted);
                    line-height: 1.6;
                    font-size: 0.95rem;
                }

                .why-underline {
                    height: 3px;
                    width: 0;
                    margin-top: 1.5rem;
                    border-radius: 999px;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    transition: width 0.6s ease;
                }

                .why-card:hover .why-underline { width: 100%; }

                @media (max-width: 960px) {
                    .why-grid { grid-template-columns: 1fr 1fr; }
                }

                @media (max-width: 640px) {
                    .why-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
