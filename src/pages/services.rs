use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_localizer;
use crate::pages::home::SectionProps;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub title: String,
    pub description: String,
}

// Matched to services by position, cycling when a language lists more.
const ICONS: [&str; 6] = ["💻", "📱", "✏️", "📊", "🌐", "🔤"];
const GRADIENTS: [&str; 6] = [
    "linear-gradient(135deg, #7c3aed, #6d28d9)",
    "linear-gradient(135deg, #6366f1, #2563eb)",
    "linear-gradient(135deg, #ec4899, #e11d48)",
    "linear-gradient(135deg, #22c55e, #059669)",
    "linear-gradient(135deg, #fbbf24, #f97316)",
    "linear-gradient(135deg, #2dd4bf, #06b6d4)",
];

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let t = use_localizer();
    let services: Vec<Service> = t.section("servicesSection.services").unwrap_or_default();

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services__grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .service-card {
                        background: linear-gradient(to bottom right, #1e293b, #0f172a);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        border-radius: 16px;
                        padding: 2rem;
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .service-card:hover {
                        transform: translateY(-6px) rotate(-0.5deg);
                        border-color: #f59e0b;
                    }
                    .service-card__icon {
                        width: 56px;
                        height: 56px;
                        border-radius: 14px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                        margin-bottom: 1.25rem;
                    }
                    .service-card p {
                        color: #94a3b8;
                    }
                    .service-card button {
                        background: none;
                        border: none;
                        color: #fbbf24;
                        cursor: pointer;
                        padding: 0;
                        font-size: 0.95rem;
                    }
                    @media (max-width: 900px) {
                        .services__grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2 class="gradient-text">{t.text("servicesSection.heading")}</h2>
                <p>{t.text("servicesSection.subtitle")}</p>
            </div>
            <div class="services__grid">
                { for services.iter().enumerate().map(|(index, service)| {
                    let on_contact = props.on_contact.clone();
                    let title = service.title.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_contact.emit(title.clone()));
                    html! {
                        <div class="service-card">
                            <div
                                class="service-card__icon"
                                style={format!("background: {};", GRADIENTS[index % GRADIENTS.len()])}
                            >
                                { ICONS[index % ICONS.len()] }
                            </div>
                            <h3>{&service.title}</h3>
                            <p>{&service.description}</p>
                            <button {onclick}>
                                {t.text("servicesSection.cta")}{" →"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
