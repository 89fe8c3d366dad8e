use yew::prelude::*;

use crate::i18n::{use_localizer, Locale, LocaleContext};

fn button_label(locale: Locale) -> String {
    locale.code().to_uppercase()
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let t = use_localizer();
    let ctx = use_context::<LocaleContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <div class="language-switcher" aria-label={t.text("language.label")}>
            <style>
                {r#"
                    .language-switcher {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 9999;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .language-switcher button {
                        padding: 0.25rem 0.5rem;
                        font-size: 0.75rem;
                        border-radius: 6px;
                        border: 1px solid #334155;
                        background: #1e293b;
                        color: #cbd5e1;
                        cursor: pointer;
                    }
                    .language-switcher button:hover {
                        background: #334155;
                    }
                    .language-switcher button.active {
                        background: #f59e0b;
                        border-color: #f59e0b;
                        color: #fff;
                    }
                "#}
            </style>
            { for Locale::ALL.iter().map(|&locale| {
                let set_locale = ctx.set_locale.clone();
                let onclick = Callback::from(move |_: MouseEvent| set_locale.emit(locale));
                html! {
                    <button
                        class={classes!((ctx.locale == locale).then(|| "active"))}
                        {onclick}
                    >
                        { button_label(locale) }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_show_upper_case_codes() {
        let labels: Vec<String> = Locale::ALL.into_iter().map(button_label).collect();
        assert_eq!(labels, vec!["EN", "KA", "RU"]);
    }
}
