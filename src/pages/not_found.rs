use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_localizer;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let t = use_localizer();
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #020617; color: #fff; text-align: center; padding: 2rem;">
            <h1 style="font-size: 4rem; margin-bottom: 0;">{"404"}</h1>
            <h2>{t.text("not_found.title")}</h2>
            <p style="color: #94a3b8;">{t.text("not_found.description")}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {t.text("not_found.back")}
            </Link<Route>>
        </div>
    }
}
