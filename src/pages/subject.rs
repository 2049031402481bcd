use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::content::find_subject;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SubjectPageProps {
    pub id: String,
}

#[function_component(SubjectPage)]
pub fn subject_page(props: &SubjectPageProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id.clone(),
    );

    let Some(subject) = find_subject(&props.id) else {
        return html! {
            <div class="detail-page">
                <div class="detail-missing">
                    <h1>{"Subject not found"}</h1>
                    <p>{"The subject you're looking for isn't part of our current curriculum."}</p>
                    <Link<Route> to={Route::Home} classes="detail-back">{"← Back to Home"}</Link<Route>>
                </div>
                <Footer />
            </div>
        };
    };

    html! {
        <div class="detail-page">
            <div class="subject-hero">
                <img src={subject.image} alt={subject.title} />
                <div class="subject-hero-overlay">
                    <h1>{subject.title}</h1>
                    <p>{subject.description}</p>
                </div>
            </div>

            <div class="subject-detail">
                <Link<Route> to={Route::Home} classes="detail-back">{"← Back"}</Link<Route>>

                <section>
                    <h2>{"Overview"}</h2>
                    <p class="subject-overview">{subject.overview}</p>
                </section>

                <section>
                    <h2>{"Learning Outcomes"}</h2>
                    <ul class="outcome-list">
                        { for subject.outcomes.iter().map(|outcome| html! {
                            <li key={*outcome}>{*outcome}</li>
                        }) }
                    </ul>
                </section>

                <section>
                    <h2>{"Curriculum by Grade"}</h2>
                    <div class="grade-rows">
                        { for subject.curriculum.iter().map(|row| html! {
                            <div class="grade-row glass-card" key={row.grade}>
                                <span class="grade-name">{row.grade}</span>
                                <span class="grade-focus">{row.focus}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section>
                    <h2>{"Learning Materials"}</h2>
                    <ul class="material-list">
                        { for subject.materials.iter().map(|material| html! {
                            <li key={*material}>{*material}</li>
                        }) }
                    </ul>
                </section>
            </div>
            <Footer />

            <style>
                {r#"
                .subject-hero {
                    position: relative;
                    height: 360px;
                    overflow: hidden;
                }

                .subject-hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .subject-hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.75), transparent);
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2.5rem;
                    color: #fff;
                }

                .subject-hero-overlay h1 { font-size: clamp(2rem, 5vw, 3rem); }

                .subject-hero-overlay p { opacity: 0.85; margin-top: 0.5rem; }

                .subject-detail {
                    max-width: 820px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem 5rem;
                }

                .subject-detail section { margin-bottom: 3rem; }

                .subject-detail h2 {
                    font-size: 1.6rem;
                    margin-bottom: 1.1rem;
                }

                .subject-overview {
                    color: var(--muted);
                    line-height: 1.7;
                    font-size: 1.05rem;
                }

                .outcome-list,
                .material-list {
                    list-style: none;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .outcome-list li,
                .material-list li {
                    color: var(--muted);
                    line-height: 1.5;
                    padding-left: 1.5rem;
                    position: relative;
                }

                .outcome-list li::before,
                .material-list li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: var(--primary);
                    font-weight: 700;
                }

                .grade-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .grade-row {
                    display: flex;
                    gap: 1.5rem;
                    padding: 1rem 1.25rem;
                    align-items: baseline;
                }

                .grade-name {
                    font-weight: 700;
                    min-width: 110px;
                    color: var(--primary);
                }

                .grade-focus { color: var(--muted); }

                @media (max-width: 640px) {
                    .outcome-list,
                    .material-list { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
