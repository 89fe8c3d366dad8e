use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_localizer;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct AboutCard {
    pub key: String,
    pub title: String,
    pub description: String,
}

fn card_style(key: &str) -> (&'static str, &'static str, &'static str) {
    match key {
        "visionary" => ("⚡", "linear-gradient(135deg, #6366f1, #9333ea)", "rotate(3deg)"),
        "endtoend" => ("🎯", "linear-gradient(135deg, #c026d3, #db2777)", "rotate(-2deg) scale(0.95)"),
        "growthAcceleration" => ("📈", "linear-gradient(135deg, #10b981, #84cc16)", "rotate(1deg) scale(1.05)"),
        "userObsession" => ("👥", "linear-gradient(135deg, #facc15, #f97316)", "rotate(4deg) scale(0.95)"),
        "partnership" => ("🌍", "linear-gradient(135deg, #ef4444, #e11d48)", "rotate(-3deg)"),
        _ => ("✦", "linear-gradient(135deg, #475569, #1e293b)", "none"),
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let t = use_localizer();
    let cards: Vec<AboutCard> = t.section("about.cards").unwrap_or_default();

    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about__cards {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .about-card {
                        width: 300px;
                        padding: 2rem;
                        border-radius: 20px;
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                        transition: transform 0.3s;
                    }
                    .about-card:hover {
                        transform: none !important;
                    }
                    .about-card__icon { font-size: 2rem; }
                    .about-card p { color: rgba(255, 255, 255, 0.85); }
                "#}
            </style>
            <div class="section-heading">
                <h2 class="gradient-text">{t.text("about.heading")}</h2>
                <p>{t.text("about.subtitle")}</p>
            </div>
            <div class="about__cards">
                { for cards.iter().map(|card| {
                    let (icon, background, transform) = card_style(&card.key);
                    html! {
                        <div
                            class="about-card"
                            key={card.key.clone()}
                            style={format!("background: {}; transform: {};", background, transform)}
                        >
                            <div class="about-card__icon">{icon}</div>
                            <h3>{&card.title}</h3>
                            <p>{&card.description}</p>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
