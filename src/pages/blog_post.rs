use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::content::{find_post, Block};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    // Fresh page, start at the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.slug.clone(),
    );

    let Some(post) = find_post(&props.slug) else {
        return html! {
            <div class="detail-page">
                <div class="detail-missing">
                    <h1>{"Post not found"}</h1>
                    <p>{"The article you're looking for doesn't exist or has been moved."}</p>
                    <Link<Route> to={Route::Home} classes="detail-back">{"← Back to Home"}</Link<Route>>
                </div>
                <Footer />
            </div>
        };
    };

    html! {
        <div class="detail-page">
            <article class="post">
                <div class="post-hero">
                    <img src={post.image} alt={post.title} />
                    <div class="post-hero-overlay"></div>
                </div>

                <div class="post-body">
                    <Link<Route> to={Route::Home} classes="detail-back">{"← Back"}</Link<Route>>
                    <span class="post-category">{post.category}</span>
                    <h1>{post.title}</h1>
                    <div class="post-meta">
                        <span>{"✍ "}{post.author}{" · "}{post.role}</span>
                        <span>{"📅 "}{post.date}</span>
                        <span>{"🕐 "}{post.read_time}</span>
                    </div>

                    { for post.body.iter().map(|block| match block {
                        Block::Heading(text) => html! { <h2 key={*text}>{*text}</h2> },
                        Block::Paragraph(text) => html! { <p key={*text}>{*text}</p> },
                    }) }
                </div>
            </article>
            <Footer />

            <style>
                {r#"
                .detail-page { padding-top: 74px; min-height: 100vh; }

                .detail-missing {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                    text-align: center;
                }

                .detail-missing p { color: var(--muted); margin: 1rem 0 2rem; }

                .detail-back {
                    display: inline-block;
                    color: var(--primary);
                    text-decoration: none;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .detail-back:hover { text-decoration: underline; }

                .post-hero {
                    position: relative;
                    height: 380px;
                    overflow: hidden;
                }

                .post-hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .post-hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent 40%, var(--background));
                }

                .post-body {
                    max-width: 760px;
                    margin: -4rem auto 0;
                    position: relative;
                    padding: 2rem 1.5rem 5rem;
                }

                .post-category {
                    display: inline-block;
                    margin-left: 1rem;
                    padding: 0.3rem 0.9rem;
                    border-radius: 999px;
                    background: var(--primary);
                    color: #fff;
                    font-size: 0.72rem;
                    font-weight: 700;
                }

                .post-body h1 {
                    font-size: clamp(1.9rem, 4.5vw, 2.8rem);
                    line-height: 1.2;
                    margin: 1rem 0;
                }

                .post-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                    color: var(--muted);
                    font-size: 0.85rem;
                    padding-bottom: 1.5rem;
                    margin-bottom: 2rem;
                    border-bottom: 1px solid var(--border);
                }

                .post-body h2 {
                    font-size: 1.5rem;
                    margin: 2.25rem 0 1rem;
                }

                .post-body p {
                    color: var(--muted);
                    line-height: 1.75;
                    margin-bottom: 1.25rem;
                    font-size: 1.02rem;
                }
                "#}
            </style>
        </div>
    }
}
