use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::i18n::{use_localizer, LocaleContext};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    /// Dialog heading; `None` keeps the dialog closed.
    pub title: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let t = use_localizer();
    let locale = use_context::<LocaleContext>()
        .map(|ctx| ctx.locale)
        .unwrap_or_default();
    let open = props.title.is_some();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    // Clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("contact-modal", open.then(|| "open"))} onclick={close.clone()}>
            <style>
                {r#"
                    .contact-modal {
                        display: none;
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        background: rgba(0, 0, 0, 0.75);
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .contact-modal.open {
                        display: flex;
                    }
                    .contact-modal__dialog {
                        position: relative;
                        width: 100%;
                        max-width: 560px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #0f172a;
                        border: 1px solid #334155;
                        border-radius: 12px;
                        padding: 2rem;
                        color: #fff;
                        animation: modalIn 0.25s ease-out;
                    }
                    .contact-modal__title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 2rem 1.5rem 0;
                        background: linear-gradient(to right, #fbbf24, #f97316);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .contact-modal__close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #94a3b8;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    @keyframes modalIn {
                        from { opacity: 0; transform: scale(0.96); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <div class="contact-modal__dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="contact-modal__close" aria-label={t.text("contact.close")} onclick={close}>
                    {"✕"}
                </button>
                <h2 class="contact-modal__title">
                    { props.title.as_deref().unwrap_or_default() }
                </h2>
                <ContactForm {locale} {open} />
            </div>
        </div>
    }
}
