use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::components::notification::use_notifier;
use crate::utils::storage::{get_cookie, load_json, save_json, set_cookie};
use crate::Route;

pub const LAST_SUBMISSION_KEY: &str = "contact_form_last";
pub const ROLE_COOKIE: &str = "preferred_role";
const ROLE_COOKIE_DAYS: i64 = 30;
const SENDING_MS: u32 = 1500;
const RESET_MS: u32 = 3000;
const SUCCESS_MESSAGE: &str = "Спасибо! Мы свяжемся с вами в течение 5 дней.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Artist,
    Investor,
    Partner,
    Other,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Artist, Role::Investor, Role::Partner, Role::Other];

    pub fn value(self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Investor => "investor",
            Role::Partner => "partner",
            Role::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Artist => "Артист",
            Role::Investor => "Инвестор",
            Role::Partner => "Партнер",
            Role::Other => "Другое",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.value() == value)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Пожалуйста, заполните обязательные поля")]
    MissingRequired,
    #[error("Необходимо согласие с политикой конфиденциальности")]
    ConsentRequired,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub contact: String,
    pub role: Option<Role>,
    pub message: String,
    pub agreement: bool,
}

impl ContactForm {
    /// Required fields are checked before consent.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() || self.contact.trim().is_empty() || self.role.is_none() {
            return Err(FormError::MissingRequired);
        }
        if !self.agreement {
            return Err(FormError::ConsentRequired);
        }
        Ok(())
    }
}

/// What ends up in local storage after a submission.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StoredSubmission {
    pub form: ContactForm,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Отправить заявку",
            SubmitPhase::Sending => "Отправляется...",
            SubmitPhase::Sent => "Отправлено!",
        }
    }
}

/// A request from outside the form to select a role. `request` changes on
/// every ask so the same role can be preset twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RolePreset {
    pub role: Role,
    pub request: u32,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub preset: Option<RolePreset>,
}

#[function_component(ContactFormView)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(ContactForm::default);
    let phase = use_state(|| SubmitPhase::Idle);
    let select_ref = use_node_ref();
    let notifier = use_notifier();

    // Role remembered from the previous visit.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                let remembered = get_cookie(ROLE_COOKIE)
                    .as_deref()
                    .and_then(Role::from_value)
                    .or_else(|| {
                        load_json::<StoredSubmission>(LAST_SUBMISSION_KEY)
                            .and_then(|last| last.form.role)
                    });
                if let Some(role) = remembered {
                    debug!("Preselecting remembered role {}", role.value());
                    form.set(ContactForm {
                        role: Some(role),
                        ..(*form).clone()
                    });
                }
                || ()
            },
            (),
        );
    }

    {
        let form = form.clone();
        use_effect_with_deps(
            move |preset| {
                if let Some(preset) = preset {
                    form.set(ContactForm {
                        role: Some(preset.role),
                        ..(*form).clone()
                    });
                }
                || ()
            },
            props.preset,
        );
    }

    // The select is not a controlled element in yew, keep its value in sync.
    {
        let select_ref = select_ref.clone();
        use_effect_with_deps(
            move |role| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(role.map(Role::value).unwrap_or(""));
                }
                || ()
            },
            form.role,
        );
    }

    let edit = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let edit = edit(|form, value| form.name = value);
        Callback::from(move |e: InputEvent| edit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_contact = {
        let edit = edit(|form, value| form.contact = value);
        Callback::from(move |e: InputEvent| edit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_role = {
        let edit = edit(|form, value| form.role = Role::from_value(&value));
        Callback::from(move |e: Event| edit(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let edit = edit(|form, value| form.message = value);
        Callback::from(move |e: InputEvent| {
            edit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };
    let on_agreement = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            form.set(ContactForm {
                agreement: e.target_unchecked_into::<HtmlInputElement>().checked(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != SubmitPhase::Idle {
                return;
            }
            let submission = (*form).clone();
            if let Err(err) = submission.validate() {
                debug!("Form rejected: {:?}", err);
                notifier.error(err.to_string());
                return;
            }

            info!("Contact form submitted");
            phase.set(SubmitPhase::Sending);
            if let Some(role) = submission.role {
                set_cookie(ROLE_COOKIE, role.value(), ROLE_COOKIE_DAYS);
            }
            save_json(
                LAST_SUBMISSION_KEY,
                &StoredSubmission {
                    form: submission,
                    submitted_at: Utc::now(),
                },
            );
            analytics::track_form_submission("contact");

            let form = form.setter();
            let phase = phase.setter();
            let notifier = notifier.clone();
            Timeout::new(SENDING_MS, move || {
                phase.set(SubmitPhase::Sent);
                form.set(ContactForm::default());
                notifier.success(SUCCESS_MESSAGE);
                Timeout::new(RESET_MS, move || phase.set(SubmitPhase::Idle)).forget();
            })
            .forget();
        })
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Ваше имя *"
                    value={form.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="contact"
                    placeholder="Telegram или телефон *"
                    value={form.contact.clone()}
                    oninput={on_contact}
                />
            </div>
            <div class="form-group">
                <select
                    ref={select_ref}
                    name="role"
                    class={classes!(form.role.is_some().then(|| "has-value"))}
                    onchange={on_role}
                >
                    <option value="" disabled=true>{"Кто вы? *"}</option>
                    { for Role::ALL.iter().map(|role| html! {
                        <option value={role.value()}>{role.label()}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="4"
                    placeholder="Расскажите о себе или своем проекте"
                    value={form.message.clone()}
                    oninput={on_message}
                />
            </div>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    name="agreement"
                    checked={form.agreement}
                    onchange={on_agreement}
                />
                <span>
                    {"Я согласен с "}
                    <Link<Route> to={Route::Privacy}>{"политикой конфиденциальности"}</Link<Route>>
                </span>
            </label>
            <button
                type="submit"
                class={classes!("btn", "btn-primary", (*phase == SubmitPhase::Sent).then(|| "success"))}
                disabled={*phase != SubmitPhase::Idle}
            >
                { phase.label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Эмиль".into(),
            contact: "@emil".into(),
            role: Some(Role::Artist),
            message: String::new(),
            agreement: true,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_trimmed() {
        let form = ContactForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
        let form = ContactForm {
            role: None,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn missing_fields_reported_before_consent() {
        let form = ContactForm {
            contact: String::new(),
            agreement: false,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
        let form = ContactForm {
            agreement: false,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::ConsentRequired));
    }

    #[test]
    fn roles_round_trip_through_select_values() {
        for role in Role::ALL {
            assert_eq!(Role::from_value(role.value()), Some(role));
        }
        assert_eq!(Role::from_value(""), None);
        assert_eq!(Role::from_value("label"), None);
    }

    #[test]
    fn stored_submission_uses_lowercase_roles() {
        let json = serde_json::to_value(&filled()).unwrap();
        assert_eq!(json["role"], "artist");
        assert_eq!(json["agreement"], true);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            FormError::MissingRequired.to_string(),
            "Пожалуйста, заполните обязательные поля"
        );
        assert_eq!(SubmitPhase::Sending.label(), "Отправляется...");
    }
}
