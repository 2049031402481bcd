use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::components::Link;

use crate::content::{SiteCtx, FOOTER_GROUPS, SOCIAL_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <span class="footer-logo-mark">{"📖"}</span>
                        <span>
                            <strong>{site.short_name}</strong>
                            <small>{"Islamic Academy"}</small>
                        </span>
                    </Link<Route>>
                    <p>{site.tagline}</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a
                                key={*label}
                                href={*href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={*label}
                            >
                                {&label[..1]}
                            </a>
                        }) }
                    </div>
                </div>

                { for FOOTER_GROUPS.iter().map(|group| html! {
                    <div class="footer-column" key={group.title}>
                        <h4>{group.title}</h4>
                        <ul>
                            { for group.links.iter().map(|(label, href)| html! {
                                <li key={*label}><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, site.name)}</p>
                <div class="footer-legal">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    background: var(--footer-bg);
                    color: var(--footer-fg);
                    padding: 4rem 1.5rem 2rem;
                }

                .footer-grid {
                    max-width: 1180px;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: 1.4fr repeat(4, 1fr);
                    gap: 2.5rem;
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.7rem;
                    text-decoration: none;
                    color: inherit;
                    margin-bottom: 1rem;
                }

                .footer-logo-mark {
                    background: var(--primary);
                    border-radius: 12px;
                    padding: 0.5rem;
                    font-size: 1.2rem;
                }

                .footer-logo strong { display: block; font-size: 1.1rem; }

                .footer-logo small { opacity: 0.7; font-size: 0.72rem; }

                .footer-brand > p {
                    font-size: 0.88rem;
                    opacity: 0.8;
                    line-height: 1.55;
                    margin-bottom: 1.25rem;
                }

                .footer-social { display: flex; gap: 0.6rem; }

                .footer-social a {
                    width: 38px;
                    height: 38px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: inherit;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    font-weight: 700;
                    transition: all 0.25s ease;
                }

                .footer-social a:hover {
                    background: var(--primary);
                    transform: scale(1.1);
                }

                .footer-column h4 {
                    font-size: 0.82rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    margin-bottom: 1rem;
                }

                .footer-column ul { list-style: none; }

                .footer-column li { margin-bottom: 0.55rem; }

                .footer-column a {
                    color: inherit;
                    opacity: 0.75;
                    text-decoration: none;
                    font-size: 0.88rem;
                    transition: opacity 0.2s ease;
                }

                .footer-column a:hover { opacity: 1; }

                .footer-bottom {
                    max-width: 1180px;
                    margin: 0 auto;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.12);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.82rem;
                    opacity: 0.8;
                }

                .footer-legal { display: flex; gap: 1.5rem; }

                .footer-legal a { color: inherit; text-decoration: none; }

                .footer-legal a:hover { text-decoration: underline; }

                @media (max-width: 960px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                    .footer-brand { grid-column: span 2; }
                }
                "#}
            </style>
        </footer>
    }
}
