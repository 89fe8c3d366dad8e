use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_localizer;

pub const ALL_FILTER: &str = "all";

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Filter {
    pub key: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
}

impl PortfolioItem {
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.category == filter
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let t = use_localizer();
    let active = use_state(|| ALL_FILTER.to_string());
    let filters: Vec<Filter> = t.section("portfolio.filters").unwrap_or_default();
    let items: Vec<PortfolioItem> = t.section("portfolio.items").unwrap_or_default();

    html! {
        <section id="portfolio" class="portfolio">
            <style>
                {r#"
                    .portfolio__filters {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .portfolio__filters button {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid #334155;
                        background: transparent;
                        color: #cbd5e1;
                        cursor: pointer;
                    }
                    .portfolio__filters button.active {
                        background: linear-gradient(to right, #f59e0b, #ea580c);
                        border-color: transparent;
                        color: #fff;
                    }
                    .portfolio__grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .portfolio-card {
                        background: #0f172a;
                        border: 1px solid #1e293b;
                        border-radius: 16px;
                        overflow: hidden;
                        transition: transform 0.4s;
                        animation: fadeIn 0.6s ease-out both;
                    }
                    .portfolio-card:hover {
                        transform: perspective(800px) rotateX(2deg) rotateY(-3deg) scale(1.02);
                    }
                    .portfolio-card img {
                        width: 100%;
                        height: 240px;
                        object-fit: cover;
                        display: block;
                    }
                    .portfolio-card__body { padding: 1.5rem; }
                    .portfolio-card__body p { color: #94a3b8; }
                    .portfolio-card__features {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .portfolio-card__features span {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.6rem;
                        border-radius: 999px;
                        background: #1e293b;
                        color: #cbd5e1;
                    }
                    .portfolio-card a { color: #fbbf24; text-decoration: none; }
                    @media (max-width: 900px) {
                        .portfolio__grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2 class="gradient-text">{t.text("portfolio.heading")}</h2>
                <p>{t.text("portfolio.subtitle")}</p>
            </div>
            <div class="portfolio__filters">
                { for filters.iter().map(|filter| {
                    let active_setter = active.clone();
                    let key = filter.key.clone();
                    html! {
                        <button
                            class={classes!((*active == filter.key).then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| active_setter.set(key.clone()))}
                        >
                            {&filter.label}
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio__grid">
                { for items.iter().filter(|item| item.matches(&active)).enumerate().map(|(index, item)| html! {
                    <article
                        class="portfolio-card"
                        key={item.url.clone()}
                        style={format!("animation-delay: {}ms;", index * 150)}
                    >
                        <img src={item.image.clone()} alt={item.title.clone()} loading="lazy" />
                        <div class="portfolio-card__body">
                            <h3>{&item.title}</h3>
                            <p>{&item.description}</p>
                            <div class="portfolio-card__features">
                                { for item.features.iter().map(|feature| html! { <span>{feature}</span> }) }
                            </div>
                            <a href={item.url.clone()} target="_blank" rel="noopener noreferrer">
                                {t.text("portfolio.visit")}{" →"}
                            </a>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str) -> PortfolioItem {
        PortfolioItem {
            title: "Movix".into(),
            description: String::new(),
            url: "https://movixgeo.netlify.app/".into(),
            category: category.into(),
            features: Vec::new(),
            image: String::new(),
        }
    }

    #[test]
    fn all_filter_shows_everything() {
        assert!(item("energy").matches(ALL_FILTER));
    }

    #[test]
    fn category_filter_is_exact() {
        assert!(item("entertainment").matches("entertainment"));
        assert!(!item("entertainment").matches("energy"));
    }
}
