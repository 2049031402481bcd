use yew::prelude::*;
use yew_router::components::Link;

use crate::content::BLOG_POSTS;
use crate::Route;

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    html! {
        <section id="blog" class="blog">
            <div class="section-header">
                <span class="section-badge">{"News & Insights"}</span>
                <h2>{"From Our "}<span class="text-gradient">{"Blog"}</span></h2>
                <p>
                    {"Stay informed with the latest educational insights, school updates, and parenting tips from our expert educators."}
                </p>
            </div>

            <div class="blog-grid">
                { for BLOG_POSTS.iter().map(|post| html! {
                    <article class={classes!("blog-card", "glass-card", post.accent)} key={post.slug}>
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <div class="blog-image">
                                <img src={post.image} alt={post.title} loading="lazy" />
                                <span class="blog-category">{post.category}</span>
                                <span class="blog-read-time">{post.read_time}</span>
                            </div>
                            <div class="blog-body">
                                <span class="blog-date">{"📅 "}{post.date}</span>
                                <h3>{post.title}</h3>
                                <p>{post.excerpt}</p>
                                <div class="blog-author">
                                    <span class="blog-avatar">{&post.author[..1]}</span>
                                    <span>
                                        <strong>{post.author}</strong>
                                        <small>{post.role}</small>
                                    </span>
                                </div>
                            </div>
                        </Link<Route>>
                    </article>
                }) }
            </div>

            <style>
                {r#"
                .blog { padding: 6rem 1.5rem; }

                .blog-grid {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }

                .blog-card {
                    overflow: hidden;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .blog-card:hover {
                    transform: translateY(-8px);
                    border-color: var(--accent-border);
                }

                .blog-card a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }

                .blog-image {
                    position: relative;
                    height: 210px;
                    overflow: hidden;
                }

                .blog-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.7s ease;
                }

                .blog-card:hover .blog-image img { transform: scale(1.1); }

                .blog-category,
                .blog-read-time {
                    position: absolute;
                    top: 1rem;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: #fff;
                    backdrop-filter: blur(6px);
                }

                .blog-category { left: 1rem; background: var(--primary); }
                .blog-read-time { right: 1rem; background: rgba(0, 0, 0, 0.5); }

                .blog-body { padding: 1.5rem; }

                .blog-date {
                    font-size: 0.82rem;
                    color: var(--muted);
                }

                .blog-body h3 {
                    margin: 0.75rem 0;
                    font-size: 1.2rem;
                    line-height: 1.35;
                }

                .blog-card:hover .blog-body h3 { color: var(--primary); }

                .blog-body > p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    line-height: 1.55;
                    margin-bottom: 1.25rem;
                }

                .blog-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border-top: 1px solid var(--border);
                    padding-top: 1.1rem;
                }

                .blog-avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: var(--chip-bg);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }

                .blog-author strong {
                    display: block;
                    font-size: 0.88rem;
                }

                .blog-author small {
                    color: var(--muted);
                    font-size: 0.75rem;
                }

                @media (max-width: 960px) {
                    .blog-grid { grid-template-columns: 1fr; max-width: 520px; }
                }
                "#}
            </style>
        </section>
    }
}
