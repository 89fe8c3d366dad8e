use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_localizer;
use crate::pages::home::SectionProps;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Package {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub price: String,
    pub note: Option<String>,
    pub badge: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub button: String,
}

// Bundles span the full row.
const BUNDLES: [&str; 3] = ["digitalGrowthSuite", "brandDominator", "allInOne"];

impl Package {
    pub fn is_bundle(&self) -> bool {
        BUNDLES.contains(&self.key.as_str())
    }

    /// Heading of the contact dialog opened from this package.
    pub fn dialog_title(&self) -> String {
        if self.price.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.price)
        }
    }
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &SectionProps) -> Html {
    let t = use_localizer();
    let packages: Vec<Package> = t.section("pricingSection.packages").unwrap_or_default();

    let custom_offer = {
        let on_contact = props.on_contact.clone();
        let title = format!("{} Folada", t.text("contactfoot.email_label"));
        Callback::from(move |_: MouseEvent| on_contact.emit(title.clone()))
    };

    html! {
        <section id="pricing" class="pricing">
            <style>
                {r#"
                    .pricing__grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .package {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        background: linear-gradient(to bottom right, #1e293b, #0f172a);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        border-radius: 12px;
                        padding: 3.5rem 2rem 2rem;
                    }
                    .package.featured {
                        border-color: rgba(245, 158, 11, 0.5);
                        background: rgba(120, 53, 15, 0.2);
                    }
                    .package.bundle { grid-column: 1 / -1; }
                    .package__badge {
                        position: absolute;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.4rem 1.5rem;
                        border-radius: 999px;
                        background: linear-gradient(to right, #f59e0b, #ea580c);
                        font-size: 0.85rem;
                        font-weight: 700;
                        white-space: nowrap;
                    }
                    .package__price {
                        font-size: 1.8rem;
                        font-weight: 800;
                    }
                    .package__note {
                        padding: 1rem;
                        border-radius: 8px;
                        background: rgba(30, 41, 59, 0.5);
                        color: #94a3b8;
                        font-style: italic;
                    }
                    .package ul {
                        list-style: none;
                        padding: 0;
                        flex: 1;
                    }
                    .package li { color: #cbd5e1; margin-bottom: 0.6rem; }
                    .package li::before { content: "•"; color: #fbbf24; margin-right: 0.5rem; }
                    .package .cta-button { justify-content: center; border-radius: 8px; }
                    .pricing__custom {
                        text-align: center;
                        color: #94a3b8;
                        margin-top: 4rem;
                        font-size: 1.1rem;
                    }
                    .pricing__custom button {
                        background: none;
                        border: none;
                        color: #fbbf24;
                        text-decoration: underline;
                        cursor: pointer;
                        font-size: inherit;
                        margin: 0 0.25rem;
                    }
                    @media (max-width: 1100px) {
                        .pricing__grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 700px) {
                        .pricing__grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2 class="gradient-text">{t.text("pricingSection.heading")}</h2>
                <p>{t.text("pricingSection.subtitle")}</p>
            </div>
            <div class="pricing__grid">
                { for packages.iter().map(|package| {
                    let on_contact = props.on_contact.clone();
                    let title = package.dialog_title();
                    let onclick = Callback::from(move |_: MouseEvent| on_contact.emit(title.clone()));
                    html! {
                        <div
                            key={package.key.clone()}
                            class={classes!(
                                "package",
                                package.badge.is_some().then(|| "featured"),
                                package.is_bundle().then(|| "bundle")
                            )}
                        >
                            if let Some(badge) = &package.badge {
                                <div class="package__badge">{badge}</div>
                            }
                            <h3>{&package.name}</h3>
                            <div class="package__price gradient-text">{&package.price}</div>
                            <h4>{"✓ "}{t.text("pricingSection.included")}</h4>
                            <ul>
                                { for package.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                            </ul>
                            if let Some(note) = &package.note {
                                <p class="package__note">{note}</p>
                            }
                            <button class="cta-button" {onclick}>{&package.button}</button>
                        </div>
                    }
                }) }
            </div>
            <p class="pricing__custom">
                {t.text("pricingSection.custom_prefix")}
                <button onclick={custom_offer}>{t.text("pricingSection.custom_link")}</button>
                {t.text("pricingSection.custom_suffix")}
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(key: &str, price: &str) -> Package {
        Package {
            key: key.into(),
            name: "Web Elite".into(),
            price: price.into(),
            note: None,
            badge: None,
            features: Vec::new(),
            button: "Get premium website".into(),
        }
    }

    #[test]
    fn dialog_title_includes_price_when_known() {
        assert_eq!(package("webElite", "from 7,000 GEL").dialog_title(), "Web Elite - from 7,000 GEL");
        assert_eq!(package("webElite", "").dialog_title(), "Web Elite");
    }

    #[test]
    fn bundles_are_recognised_by_key() {
        assert!(package("allInOne", "").is_bundle());
        assert!(!package("webStarter", "").is_bundle());
    }

    #[test]
    fn packages_parse_without_optional_fields() {
        let package: Package = serde_json::from_str(
            r#"{ "key": "webStarter", "name": "Web Starter", "button": "Get started" }"#,
        )
        .unwrap();
        assert!(package.features.is_empty());
        assert_eq!(package.price, "");
        assert!(package.note.is_none());
    }
}
