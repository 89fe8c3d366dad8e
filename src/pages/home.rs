use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::custom_cursor::CustomCursor;
use crate::config;
use crate::i18n::use_localizer;
use crate::pages::about::About;
use crate::pages::portfolio::Portfolio;
use crate::pages::pricing::PricingSection;
use crate::pages::services::Services;
use crate::pages::testimonials::Testimonials;

/// Sections that can open the contact dialog pass the dialog title up.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub on_contact: Callback<String>,
}

const STATS: [(&str, &str, &str); 4] = [
    ("500%", "stats.roi", "📈"),
    ("36", "stats.identities", "🌐"),
    ("24", "stats.campaigns", "⚡"),
    ("99.2%", "stats.satisfaction", "🏆"),
];

const BRANDS: [&str; 5] = ["EnergoSun", "PhotographySF", "Tergi", "Coolstack", "PrimeDrive"];

fn open_with(on_contact: &Callback<String>, title: String) -> Callback<MouseEvent> {
    let on_contact = on_contact.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_contact.emit(title.clone());
    })
}

#[function_component(Nav)]
fn nav(props: &SectionProps) -> Html {
    let t = use_localizer();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{t.text("brand")}</a>
                <div class="nav-right">
                    <a href="#services" class="nav-link">{t.text("nav.services")}</a>
                    <a href="#portfolio" class="nav-link">{t.text("nav.portfolio")}</a>
                    <a href="#about" class="nav-link">{t.text("nav.about")}</a>
                    <a href="#pricing" class="nav-link">{t.text("nav.pricing")}</a>
                    <button
                        class="nav-cta"
                        onclick={open_with(&props.on_contact, t.text("contact.schedule_consultation"))}
                    >
                        {t.text("nav.get_started")}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let t = use_localizer();
    html! {
        <section class="hero">
            <div class="hero__glow"></div>
            <span class="hero__badge">{t.text("hero.subtitle")}</span>
            <h1 class="hero__title">
                <span>{t.text("hero.title1")}</span>
                <span class="gradient-text">{t.text("hero.title2")}</span>
            </h1>
            <p class="hero__description">{t.text("hero.description")}</p>
            <div class="hero__actions">
                <button
                    class="cta-button"
                    onclick={open_with(&props.on_contact, t.text("contact.schedule_consultation"))}
                >
                    <span>{t.text("hero.btn_start")}</span>
                    <i class="arrow">{"→"}</i>
                </button>
                <a href="#portfolio" class="ghost-button">{t.text("hero.btn_explore")}</a>
            </div>
        </section>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    let t = use_localizer();
    html! {
        <section class="stats">
            { for STATS.iter().map(|(number, label, icon)| html! {
                <div class="stat">
                    <span class="stat__icon">{*icon}</span>
                    <span class="stat__number">{*number}</span>
                    <span class="stat__label">{t.text(label)}</span>
                </div>
            }) }
        </section>
    }
}

#[function_component(SocialProof)]
fn social_proof() -> Html {
    let t = use_localizer();
    html! {
        <section class="social-proof">
            <div class="section-heading">
                <h2>{t.text("social_proof.heading")}</h2>
                <p>{t.text("social_proof.description")}</p>
            </div>
            <div class="social-proof__brands">
                { for BRANDS.iter().map(|brand| html! {
                    <span class="social-proof__brand">{*brand}</span>
                }) }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action(props: &SectionProps) -> Html {
    let t = use_localizer();
    html! {
        <section class="cta-band">
            <h2>{t.text("cta.heading")}</h2>
            <p>{t.text("cta.description")}</p>
            <div class="hero__actions">
                <button
                    class="cta-button"
                    onclick={open_with(&props.on_contact, t.text("contact.schedule_consultation"))}
                >
                    {t.text("cta.btn_strategy")}
                </button>
                <a href="#portfolio" class="ghost-button">{t.text("cta.btn_portfolio")}</a>
            </div>
            <ul class="cta-band__benefits">
                <li>{"✓ "}{t.text("cta.benefits.presence")}</li>
                <li>{"✓ "}{t.text("cta.benefits.contracts")}</li>
                <li>{"✓ "}{t.text("cta.benefits.guarantee")}</li>
            </ul>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let t = use_localizer();
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <div class="nav-logo">{t.text("brand")}</div>
                    <p class="footer__muted">{t.text("footer.description")}</p>
                </div>
                <div>
                    <h3>{t.text("contactfoot.schedule_consultation")}</h3>
                    <p class="footer__muted">{t.text("contactfoot.email_label")}</p>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    <p class="footer__muted">{t.text("contactfoot.location_label")}</p>
                    <p>{t.text("contactfoot.location")}</p>
                    <button
                        class="cta-button"
                        onclick={open_with(&props.on_contact, t.text("contact.schedule_consultation"))}
                    >
                        {t.text("contactfoot.schedule_call")}
                    </button>
                </div>
            </div>
            <div class="footer__bottom">
                <span>{format!("© {} {}", year, t.text("footer.rights"))}</span>
                <div class="footer__links">
                    <a href="#">{t.text("policy.privacy")}</a>
                    <a href="#">{t.text("policy.terms")}</a>
                    <a href="#">{t.text("policy.cookies")}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component]
pub fn Home() -> Html {
    let contact_title = use_state(|| None::<AttrValue>);

    let open_contact = {
        let contact_title = contact_title.clone();
        Callback::from(move |title: String| contact_title.set(Some(title.into())))
    };
    let close_contact = {
        let contact_title = contact_title.clone();
        Callback::from(move |_: ()| contact_title.set(None))
    };

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <Nav on_contact={open_contact.clone()} />
            <Hero on_contact={open_contact.clone()} />
            <Stats />
            <SocialProof />
            <Services on_contact={open_contact.clone()} />
            <Portfolio />
            <About />
            <PricingSection on_contact={open_contact.clone()} />
            <Testimonials />
            <CallToAction on_contact={open_contact.clone()} />
            <Footer on_contact={open_contact} />
            <CustomCursor />
            <ContactModal title={(*contact_title).clone()} on_close={close_contact} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html { scroll-behavior: smooth; }
    body { margin: 0; }
    .landing {
        min-height: 100vh;
        background: #020617;
        color: #ffffff;
        overflow-x: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing section {
        padding: 6rem 1.5rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .gradient-text {
        background: linear-gradient(to right, #fbbf24, #f97316);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 3rem;
        font-weight: 300;
        margin-bottom: 1rem;
    }
    .section-heading p {
        color: #cbd5e1;
        font-size: 1.2rem;
        max-width: 720px;
        margin: 0 auto;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        transition: background 0.3s;
    }
    .top-nav.scrolled {
        background: rgba(2, 6, 23, 0.9);
        backdrop-filter: blur(10px);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        margin-right: 8rem;
    }
    .nav-link {
        color: #cbd5e1;
        text-decoration: none;
    }
    .nav-link:hover { color: #fbbf24; }
    .nav-cta, .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 999px;
        background: linear-gradient(to right, #f59e0b, #ea580c);
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
        text-decoration: none;
    }
    .ghost-button {
        padding: 0.75rem 1.5rem;
        border: 1px solid #475569;
        border-radius: 999px;
        color: #fff;
        text-decoration: none;
    }
    .social-proof__brands {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 2rem;
        align-items: center;
        text-align: center;
        opacity: 0.6;
    }
    .social-proof__brand {
        font-size: 1.5rem;
        font-weight: 700;
        color: rgba(255, 255, 255, 0.4);
        transition: color 0.2s, transform 0.2s;
        cursor: pointer;
    }
    .social-proof__brand:hover {
        color: rgba(255, 255, 255, 0.6);
        transform: scale(1.05);
    }
    @media (max-width: 768px) {
        .social-proof__brands { grid-template-columns: repeat(2, 1fr); }
    }
    .hero {
        min-height: 90vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        position: relative;
    }
    .hero__glow {
        position: absolute;
        width: 480px;
        height: 480px;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(249, 115, 22, 0.25), transparent 70%);
        filter: blur(40px);
        z-index: 0;
        animation: pulse 6s ease-in-out infinite;
    }
    .hero > *:not(.hero__glow) { position: relative; z-index: 1; }
    .hero__badge {
        padding: 0.4rem 1rem;
        border: 1px solid #334155;
        border-radius: 999px;
        color: #fbbf24;
        font-size: 0.9rem;
    }
    .hero__title {
        display: flex;
        flex-direction: column;
        font-size: 4.5rem;
        font-weight: 700;
        margin: 1.5rem 0;
    }
    .hero__title span {
        opacity: 0;
        animation: fadeIn 0.6s forwards;
    }
    .hero__title span:nth-child(2) { animation-delay: 0.2s; }
    .hero__description {
        color: #cbd5e1;
        font-size: 1.25rem;
        max-width: 640px;
    }
    .hero__actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
        margin-top: 2rem;
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        text-align: center;
    }
    .stat { display: flex; flex-direction: column; gap: 0.5rem; }
    .stat__number { font-size: 2.5rem; font-weight: 700; color: #fbbf24; }
    .stat__label { color: #94a3b8; }
    .cta-band {
        text-align: center;
        background: linear-gradient(to right, rgba(30, 58, 138, 0.5), rgba(88, 28, 135, 0.5));
        border-radius: 24px;
    }
    .cta-band h2 { font-size: 2.5rem; }
    .cta-band p { color: #cbd5e1; }
    .cta-band__benefits {
        list-style: none;
        padding: 0;
        display: flex;
        justify-content: center;
        gap: 2rem;
        flex-wrap: wrap;
        color: #cbd5e1;
        margin-top: 2rem;
    }
    .footer {
        border-top: 1px solid #1e293b;
        padding: 4rem 1.5rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .footer__grid {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 3rem;
    }
    .footer a { color: #fbbf24; }
    .footer__muted { color: #94a3b8; font-size: 0.9rem; }
    .footer__bottom {
        display: flex;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 1rem;
        margin-top: 3rem;
        color: #64748b;
        font-size: 0.85rem;
    }
    .footer__links { display: flex; gap: 1.5rem; }
    .footer__links a { color: #64748b; text-decoration: none; }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); opacity: 0.8; }
        50% { transform: scale(1.1); opacity: 1; }
    }
    @media (max-width: 900px) {
        .nav-right .nav-link { display: none; }
        .hero__title { font-size: 2.75rem; }
        .stats { grid-template-columns: repeat(2, 1fr); }
        .footer__grid { grid-template-columns: 1fr; }
    }
"#;
