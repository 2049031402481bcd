use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::SUBJECTS;
use crate::Route;

#[function_component(CurriculumSection)]
pub fn curriculum_section() -> Html {
    let navigator = use_navigator().unwrap();

    html! {
        <section id="curriculum" class="curriculum">
            <div class="section-header">
                <span class="section-badge">{"Our Curriculum"}</span>
                <h2>{"Comprehensive "}<span class="text-gradient">{"Learning"}</span></h2>
                <p>
                    {"A well-rounded curriculum designed to nurture mind, body, and soul through integrated knowledge and practical application."}
                </p>
            </div>

            <div class="subject-grid">
                { for SUBJECTS.iter().map(|subject| {
                    let open = {
                        let navigator = navigator.clone();
                        let id = subject.id.to_string();
                        Callback::from(move |_| {
                            navigator.push(&Route::Subject { id: id.clone() });
                        })
                    };
                    html! {
                        <div
                            class={classes!("subject-card", "glass-card", subject.accent)}
                            key={subject.id}
                            onclick={open}
                        >
                            <div class="subject-image">
                                <img src={subject.image} alt={subject.title} loading="lazy" />
                                <h3>{subject.title}</h3>
                            </div>
                            <div class="subject-body">
                                <p>{subject.description}</p>
                                <span class="subject-more">{"Explore Subject →"}</span>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
                .curriculum {
                    padding: 6rem 1.5rem;
                    background: var(--background-soft);
                }

                .subject-grid {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.5rem;
                }

                .subject-card {
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .subject-card:hover {
                    transform: translateY(-8px);
                    border-color: var(--accent-border);
                }

                .subject-image {
                    position: relative;
                    height: 180px;
                    overflow: hidden;
                }

                .subject-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.7s ease;
                }

                .subject-card:hover .subject-image img { transform: scale(1.1); }

                .subject-image h3 {
                    position: absolute;
                    left: 1rem;
                    bottom: 0.75rem;
                    color: #fff;
                    font-size: 1.15rem;
                    text-shadow: 0 2px 12px rgba(0, 0, 0, 0.6);
                }

                .subject-body { padding: 1.25rem; }

                .subject-body p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    line-height: 1.5;
                    margin-bottom: 0.9rem;
                }

                .subject-more {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: var(--primary);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .subject-card:hover .subject-more { opacity: 1; }

                @media (max-width: 1024px) {
                    .subject-grid { grid-template-columns: 1fr 1fr; }
                }

                @media (max-width: 560px) {
                    .subject-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
