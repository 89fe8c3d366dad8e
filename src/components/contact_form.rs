use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::i18n::{Locale, Localizer};
use crate::lead::{
    EmailGateway, EmailJsGateway, Field, GatewayError, LeadFlow, PendingSend, ProjectType,
    SubmitBlocked,
};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
    /// Closing the surrounding dialog starts the form over.
    #[prop_or(true)]
    pub open: bool,
}

pub enum ContactFormMsg {
    Update(Field, String),
    Submit,
    Sent(u32, Result<(), GatewayError>),
}

pub struct ContactForm {
    flow: LeadFlow,
    gateway: Rc<EmailJsGateway>,
    invalid: Vec<Field>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: LeadFlow::new(Localizer::new(ctx.props().locale)),
            gateway: Rc::new(EmailJsGateway::new(config::get_gateway_config())),
            invalid: Vec::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        apply_props(&mut self.flow, &mut self.invalid, old_props, ctx.props());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Update(field, value) => {
                self.flow.update_field(field, value);
                self.invalid.retain(|f| *f != field);
                true
            }
            ContactFormMsg::Submit => match self.flow.begin_submit() {
                Ok(PendingSend { attempt, params }) => {
                    self.invalid.clear();
                    let gateway = self.gateway.clone();
                    ctx.link().send_future(async move {
                        ContactFormMsg::Sent(attempt, gateway.send(&params).await)
                    });
                    true
                }
                Err(SubmitBlocked::Invalid(fields)) => {
                    self.invalid = fields;
                    true
                }
                Err(_) => false,
            },
            ContactFormMsg::Sent(attempt, result) => {
                self.flow.finish_submit(attempt, result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let t = Localizer::new(ctx.props().locale);
        let lifecycle = self.flow.lifecycle();

        if lifecycle.is_succeeded() {
            return html! {
                <div class="contact-success">
                    <div class="contact-success__icon">{"✓"}</div>
                    <h3>{t.text("contact.thank_you")}</h3>
                    <p>{t.text("contact.reply_soon")}</p>
                </div>
            };
        }

        let sending = lifecycle.is_sending();
        let submission = self.flow.submission();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <style>{CONTACT_FORM_CSS}</style>
                if let Some(error) = lifecycle.error_message() {
                    <div class="contact-form__error" role="alert">{error}</div>
                }

                <div class="contact-form__row">
                    <div class="contact-form__field">
                        <label for="name">{t.text("contact.name")}</label>
                        <input
                            id="name"
                            name="name"
                            required=true
                            disabled={sending}
                            value={submission.name.clone()}
                            placeholder={t.text("contact.placeholder_name")}
                            oninput={self.input_callback(ctx, Field::Name)}
                        />
                        { self.field_error(&t, Field::Name) }
                    </div>
                    <div class="contact-form__field">
                        <label for="email">{t.text("contact.email")}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required=true
                            disabled={sending}
                            value={submission.email.clone()}
                            placeholder={t.text("contact.placeholder_email")}
                            oninput={self.input_callback(ctx, Field::Email)}
                        />
                        { self.field_error(&t, Field::Email) }
                    </div>
                </div>

                <div class="contact-form__field">
                    <label for="company">{t.text("contact.company")}</label>
                    <input
                        id="company"
                        name="company"
                        disabled={sending}
                        value={submission.company.clone()}
                        placeholder={t.text("contact.placeholder_company")}
                        oninput={self.input_callback(ctx, Field::Company)}
                    />
                </div>

                <div class="contact-form__field">
                    <label for="projectType">{t.text("contact.project_type")}</label>
                    <select
                        id="projectType"
                        name="projectType"
                        required=true
                        disabled={sending}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ContactFormMsg::Update(Field::ProjectType, select.value())
                        })}
                    >
                        { for ProjectType::ALL.iter().map(|project_type| html! {
                            <option
                                value={project_type.label()}
                                selected={submission.project_type == project_type.label()}
                            >
                                {t.text(project_type.translation_key())}
                            </option>
                        }) }
                    </select>
                    { self.field_error(&t, Field::ProjectType) }
                </div>

                <div class="contact-form__field">
                    <label for="message">{t.text("contact.details")}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        required=true
                        disabled={sending}
                        value={submission.message.clone()}
                        placeholder={t.text("contact.placeholder_details")}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactFormMsg::Update(Field::Message, area.value())
                        })}
                    />
                    { self.field_error(&t, Field::Message) }
                </div>

                <button type="submit" class="contact-form__submit" disabled={sending}>
                    if sending {
                        <>
                            <span class="loading-spinner"></span>
                            {t.text("contact.sending")}
                        </>
                    } else {
                        <>
                            {t.text("contact.submit")}
                            <span class="contact-form__arrow">{"→"}</span>
                        </>
                    }
                </button>

                <p class="contact-form__policy">{t.text("contact.policy")}</p>
            </form>
        }
    }
}

impl ContactForm {
    fn input_callback(&self, ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Update(field, input.value())
        })
    }

    fn field_error(&self, t: &Localizer, field: Field) -> Html {
        if !self.invalid.contains(&field) {
            return html! {};
        }
        html! {
            <span class="contact-form__hint">
                {t.text(&format!("contact.invalid.{}", field.html_name()))}
            </span>
        }
    }
}

/// Follows a language switch, and starts the form over once its dialog closes.
fn apply_props(
    flow: &mut LeadFlow,
    invalid: &mut Vec<Field>,
    old: &ContactFormProps,
    new: &ContactFormProps,
) {
    if new.locale != old.locale {
        flow.set_localizer(Localizer::new(new.locale));
    }
    if old.open && !new.open {
        flow.reset();
        invalid.clear();
    }
}

const CONTACT_FORM_CSS: &str = r#"
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
    }
    .contact-form__row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .contact-form__field label {
        display: block;
        color: #fff;
        font-size: 0.9rem;
        margin-bottom: 0.35rem;
    }
    .contact-form__field input,
    .contact-form__field select,
    .contact-form__field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.6rem 0.75rem;
        background: #1e293b;
        border: 1px solid #475569;
        border-radius: 6px;
        color: #fff;
        font: inherit;
        resize: none;
    }
    .contact-form__field input:focus,
    .contact-form__field select:focus,
    .contact-form__field textarea:focus {
        outline: none;
        box-shadow: 0 0 0 2px #3b82f6;
    }
    .contact-form__hint {
        display: block;
        margin-top: 0.3rem;
        color: #fca5a5;
        font-size: 0.8rem;
    }
    .contact-form__error {
        background: rgba(127, 29, 29, 0.3);
        border: 1px solid #b91c1c;
        border-radius: 6px;
        padding: 0.75rem;
        color: #fca5a5;
        text-align: center;
    }
    .contact-form__submit {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        width: 100%;
        padding: 0.8rem;
        border: none;
        border-radius: 6px;
        background: linear-gradient(to right, #f97316, #ec4899);
        color: #fff;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .contact-form__submit:disabled {
        opacity: 0.7;
        cursor: wait;
    }
    .contact-form__submit:hover .contact-form__arrow {
        transform: translateX(4px);
    }
    .contact-form__arrow {
        transition: transform 0.2s;
    }
    .contact-form__policy {
        color: #94a3b8;
        font-size: 0.75rem;
        text-align: center;
    }
    .contact-success {
        text-align: center;
        padding: 2rem 0;
    }
    .contact-success__icon {
        font-size: 3.5rem;
        color: #4ade80;
        margin-bottom: 1rem;
    }
    .contact-success p {
        color: #94a3b8;
    }
    .loading-spinner {
        display: inline-block;
        width: 18px;
        height: 18px;
        border: 3px solid rgba(255,255,255,.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s ease-in-out infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    @media (max-width: 600px) {
        .contact-form__row {
            grid-template-columns: 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::SubmissionLifecycle;

    fn props(locale: Locale, open: bool) -> ContactFormProps {
        ContactFormProps { locale, open }
    }

    fn filled_flow() -> LeadFlow {
        let mut flow = LeadFlow::new(Localizer::new(Locale::En));
        flow.update_field(Field::Name, "A".into());
        flow.update_field(Field::Email, "a@b.com".into());
        flow.update_field(Field::Message, "hi".into());
        flow
    }

    #[test]
    fn closing_the_dialog_resets_the_form() {
        let mut flow = filled_flow();
        let mut invalid = vec![Field::Email];
        let pending = flow.begin_submit().unwrap();

        apply_props(&mut flow, &mut invalid, &props(Locale::En, true), &props(Locale::En, false));
        assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Idle);
        assert_eq!(flow.submission().name, "");
        assert!(invalid.is_empty());

        // Reopen and send again; the answer to the first request is stale
        apply_props(&mut flow, &mut invalid, &props(Locale::En, false), &props(Locale::En, true));
        flow.update_field(Field::Name, "B".into());
        flow.update_field(Field::Email, "b@c.com".into());
        flow.update_field(Field::Message, "again".into());
        let second = flow.begin_submit().unwrap();

        flow.finish_submit(pending.attempt, Ok(()));
        assert!(flow.lifecycle().is_sending());
        flow.finish_submit(second.attempt, Err(GatewayError::Transport("timeout".into())));
        assert!(flow.lifecycle().error_message().is_some());
    }

    #[test]
    fn staying_open_keeps_the_values() {
        let mut flow = filled_flow();
        let mut invalid = Vec::new();

        apply_props(&mut flow, &mut invalid, &props(Locale::En, true), &props(Locale::En, true));
        assert_eq!(flow.submission().name, "A");
    }

    #[test]
    fn language_switch_retranslates_the_error_banner() {
        let mut flow = filled_flow();
        let mut invalid = Vec::new();
        let pending = flow.begin_submit().unwrap();
        flow.finish_submit(pending.attempt, Err(GatewayError::Rejected { status: 500, body: String::new() }));

        apply_props(&mut flow, &mut invalid, &props(Locale::En, true), &props(Locale::Ka, true));
        assert_eq!(
            flow.lifecycle().error_message(),
            Some(Localizer::new(Locale::Ka).text("contact.error").as_str())
        );
        assert_eq!(flow.submission().name, "A");
    }
}
