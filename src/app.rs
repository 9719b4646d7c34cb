//! Portfolio App
//!
//! Root component: particle backdrop, hero, skills, and the fetched
//! Zenn article list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ArticleCard, Hero, ParticlesBackground, TechBadge};
use crate::models::ZennArticle;

/// Zenn account whose articles the portfolio lists
const ZENN_USERNAME: &str = "takumi_dev";

const NAME: &str = "Takumi";

const TAGLINES: &[&str] = &[
    "Homelab tinkerer",
    "Frontend developer",
    "Writing about self-hosting",
];

const LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/takumi-dev"),
    ("Zenn", "https://zenn.dev/takumi_dev"),
];

/// Technologies shown in the skills section, classified into icons at render
const TECH_STACK: &[&str] = &[
    "Vue.js",
    "JavaScript",
    "Python",
    "Discord Bots",
    "Ubuntu Server",
    "Proxmox",
    "Networking",
    "GitHub Actions",
    "PostgreSQL",
    "MongoDB",
];

#[component]
pub fn App() -> impl IntoView {
    let (articles, set_articles) = signal(Vec::<ZennArticle>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Fetch every page once on mount; errors render inline, no retry.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_all_articles(ZENN_USERNAME).await {
                Ok(fetched) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} articles", fetched.len()).into(),
                    );
                    set_articles.set(fetched);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Article fetch failed: {err}").into());
                    set_load_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <ParticlesBackground />

        <main class="page">
            <Hero name=NAME taglines=TAGLINES links=LINKS />

            <section class="skills">
                <h2>"Skills"</h2>
                <div class="tech-list">
                    {TECH_STACK.iter().map(|tech| {
                        let tech = *tech;
                        view! { <TechBadge name=tech /> }
                    }).collect_view()}
                </div>
            </section>

            <section class="articles">
                <h2>"Articles"</h2>
                {move || {
                    if loading.get() {
                        view! { <p class="articles-state">"Loading articles..."</p> }.into_any()
                    } else if let Some(err) = load_error.get() {
                        view! { <p class="articles-state error">{format!("Could not load articles: {err}")}</p> }.into_any()
                    } else {
                        view! {
                            <div class="article-list">
                                {articles.get().into_iter().map(|article| view! {
                                    <ArticleCard article=article />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>
        </main>
    }
}
