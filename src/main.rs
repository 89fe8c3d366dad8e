use log::{info, warn};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_local_storage;
use yew_router::prelude::*;

rust_i18n::i18n!("locales", fallback = "en");

mod config;
mod i18n;
mod lead;
mod components {
    pub mod contact_form;
    pub mod contact_modal;
    pub mod custom_cursor;
    pub mod language_switcher;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod pricing;
    pub mod services;
    pub mod testimonials;
}

use components::language_switcher::LanguageSwitcher;
use i18n::{Locale, LocaleContext};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// The language the browser reports, if we have a translation for it.
fn browser_locale() -> Option<Locale> {
    let language = window()?.navigator().language()?;
    match language.parse() {
        Ok(locale) => Some(locale),
        Err(e) => {
            info!("{}, using default", e);
            None
        }
    }
}

#[function_component]
fn App() -> Html {
    let stored_locale = use_local_storage::<Locale>(config::LOCALE_STORAGE_KEY.to_string());
    let locale = (*stored_locale)
        .or_else(browser_locale)
        .unwrap_or_default();

    let set_locale = {
        let stored_locale = stored_locale.clone();
        Callback::from(move |locale: Locale| {
            info!("Switching language to {}", locale);
            stored_locale.set(locale);
        })
    };

    use_effect_with_deps(move |locale| {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if root.set_attribute("lang", locale.code()).is_err() {
                warn!("Could not set document language");
            }
        }
        || ()
    }, locale);

    let context = LocaleContext { locale, set_locale };

    html! {
        <ContextProvider<LocaleContext> {context}>
            <LanguageSwitcher />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<LocaleContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
