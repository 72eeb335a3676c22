//! Contact section: form with live validation and simulated submission.

use leptos::prelude::*;

use crate::components::notification_stack::notify;
use crate::config::SiteConfig;
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION};
use crate::state::contact::{
    ContactFormState, ContactMessage, Field, INVALID_FORM_MESSAGE, SubmitDecision,
};
use crate::state::notification::{NotificationState, Severity};

/// Deliver `message` and settle the form with the outcome.
fn spawn_submission(
    form: RwSignal<ContactFormState>,
    notifications: RwSignal<NotificationState>,
    config: SiteConfig,
    message: ContactMessage,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::submit::{SimulatedSubmitter, Submitter, browser_roll};

        let submitter = SimulatedSubmitter::from_config(&config, browser_roll);
        let result = submitter.submit(&message).await;
        if let Err(e) = &result {
            log::error!("contact form submission failed: {e}");
        }
        if let Some(outcome) = form.try_update(|f| f.finish_submit(result)).flatten() {
            notify(notifications, config, outcome.message(), outcome.severity());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, notifications, config, message);
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactFormState>) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_owned());
    let border = move || form.with(|f| f.status(field).border_color()).unwrap_or_default();
    let error = move || form.with(|f| f.status(field).error());
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.blur(field);
        });
    };
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.input(field, event_target_value(&ev)));

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                prop:value=value
                style:border-color=border
                on:blur=on_blur
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                prop:value=value
                style:border-color=border
                on:blur=on_blur
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.id()>{field.label()}</label>
            {control}
            <span id=field.error_id() class="error-message" class:show=move || error().is_some()>
                {move || error().map(|e| e.to_string()).unwrap_or_default()}
            </span>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(ContactFormState::default());
    let submitting = move || form.with(ContactFormState::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactFormState::begin_submit) {
            Some(SubmitDecision::Proceed(message)) => spawn_submission(form, notifications, config, message),
            Some(SubmitDecision::Blocked) => notify(notifications, config, INVALID_FORM_MESSAGE, Severity::Error),
            Some(SubmitDecision::Busy) | None => {}
        }
    };

    view! {
        <section id="contacto" class="contact">
            <div class="container">
                <h2 class="section-title fade-in">"Contacto"</h2>
                <div class="contact-content">
                    <div class="contact-info fade-in">
                        <p>"¿Tienes un proyecto en mente? Escríbeme y lo hablamos."</p>
                        <div class="contact-item">
                            <i class="fas fa-envelope"></i>
                            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-map-marker-alt"></i>
                            <span>{CONTACT_LOCATION}</span>
                        </div>
                    </div>
                    <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                        {Field::ALL.into_iter().map(|field| view! { <FormField field form/> }).collect_view()}
                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            class:loading=submitting
                            disabled=submitting
                        >
                            <span class="btn-text">"Enviar mensaje"</span>
                            <i class="fas fa-paper-plane"></i>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
