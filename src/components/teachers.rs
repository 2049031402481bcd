use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::EDUCATORS;
use crate::ui::carousel::Carousel;

const AUTO_ADVANCE_MS: u32 = 2000;

#[function_component(TeachersSection)]
pub fn teachers_section() -> Html {
    let carousel = use_state(|| Carousel::new(EDUCATORS.len()));
    let auto_play = use_state(|| true);

    // Auto-advance runs only while auto_play holds; flipping it (hover or
    // manual navigation) drops the interval through the effect cleanup.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |auto: &bool| {
                let interval = auto.then(|| {
                    let mut current = *carousel;
                    Interval::new(AUTO_ADVANCE_MS, move || {
                        current = current.next();
                        carousel.set(current);
                    })
                });
                move || drop(interval)
            },
            *auto_play,
        );
    }

    let go_prev = {
        let carousel = carousel.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_| {
            auto_play.set(false);
            carousel.set((*carousel).prev());
        })
    };

    let go_next = {
        let carousel = carousel.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_| {
            auto_play.set(false);
            carousel.set((*carousel).next());
        })
    };

    let pause = {
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| auto_play.set(false))
    };

    let resume = {
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| auto_play.set(true))
    };

    let [left, center, right] = carousel.window3();

    let card = |index: usize, position: &'static str| {
        let educator = &EDUCATORS[index];
        html! {
            <div class={classes!("teacher-card", "glass-card", position, educator.accent)} key={educator.name}>
                <div class="teacher-photo">
                    <img src={educator.image} alt={educator.name} loading="lazy" />
                    <span class="teacher-specialty">{"🎓 "}{educator.specialty}</span>
                </div>
                <div class="teacher-body">
                    <h3>{educator.name}</h3>
                    <p class="teacher-quote">{"\u{201c}"}{educator.quote}{"\u{201d}"}</p>
                </div>
            </div>
        }
    };

    html! {
        <section id="teachers" class="teachers">
            <div class="section-header">
                <span class="section-badge">{"Our Team"}</span>
                <h2>{"Meet Our "}<span class="text-gradient">{"Educators"}</span></h2>
                <p>
                    {"Passionate professionals committed to nurturing your child's success through academic excellence and moral guidance."}
                </p>
            </div>

            <div
                class="teacher-stage"
                onmouseenter={pause}
                onmouseleave={resume}
            >
                { card(left, "left") }
                { card(center, "center") }
                { card(right, "right") }
            </div>

            <div class="teacher-controls">
                <button class="teacher-arrow" onclick={go_prev} aria-label="Previous Teacher">{"‹"}</button>
                <div class="teacher-dots">
                    { for EDUCATORS.iter().enumerate().map(|(i, educator)| {
                        let select = {
                            let carousel = carousel.clone();
                            let auto_play = auto_play.clone();
                            Callback::from(move |_| {
                                auto_play.set(false);
                                carousel.set((*carousel).select(i));
                            })
                        };
                        html! {
                            <button
                                key={educator.name}
                                class={classes!("teacher-dot", (i == carousel.index()).then(|| "active"))}
                                onclick={select}
                                aria-label={format!("Go to slide {}", i + 1)}
                            />
                        }
                    }) }
                </div>
                <button class="teacher-arrow" onclick={go_next} aria-label="Next Teacher">{"›"}</button>
            </div>

            <style>
                {r#"
                .teachers {
                    padding: 6rem 1.5rem;
                    overflow: hidden;
                    background: var(--background-soft);
                }

                .teacher-stage {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                    height: 540px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .teacher-card {
                    position: absolute;
                    width: 380px;
                    max-width: 85vw;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.5s ease, opacity 0.5s ease, filter 0.5s ease;
                }

                .teacher-card.center {
                    transform: translateX(0) scale(1);
                    opacity: 1;
                    z-index: 10;
                    filter: blur(0);
                }

                .teacher-card.left,
                .teacher-card.right {
                    opacity: 0.4;
                    z-index: 1;
                    filter: blur(2px);
                }

                .teacher-card.left { transform: translateX(-380px) scale(0.85); }
                .teacher-card.right { transform: translateX(380px) scale(0.85); }

                .teacher-photo {
                    position: relative;
                    height: 250px;
                    overflow: hidden;
                }

                .teacher-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .teacher-specialty {
                    position: absolute;
                    left: 1rem;
                    bottom: 1rem;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    font-size: 0.72rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    background: var(--card);
                    backdrop-filter: blur(8px);
                }

                .teacher-body {
                    padding: 1.75rem;
                    text-align: center;
                }

                .teacher-body h3 { font-size: 1.4rem; }

                .teacher-quote {
                    margin-top: 1.25rem;
                    font-style: italic;
                    color: var(--muted);
                    line-height: 1.6;
                }

                .teacher-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    margin-top: 2.5rem;
                }

                .teacher-arrow {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--foreground);
                    font-size: 1.5rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .teacher-arrow:hover {
                    background: var(--primary);
                    color: #fff;
                    border-color: var(--primary);
                }

                .teacher-dots { display: flex; gap: 0.5rem; }

                .teacher-dot {
                    height: 6px;
                    width: 8px;
                    border-radius: 999px;
                    border: none;
                    background: var(--primary-faint);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .teacher-dot:hover { background: var(--primary-soft); }

                .teacher-dot.active {
                    width: 32px;
                    background: var(--primary);
                }

                @media (max-width: 900px) {
                    .teacher-card.left { transform: translateX(-60px) scale(0.8); }
                    .teacher-card.right { transform: translateX(60px) scale(0.8); }
                }
                "#}
            </style>
        </section>
    }
}
