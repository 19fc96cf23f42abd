//! Contact Form Component
//!
//! Validates on blur, clears a field's error on input and simulates the
//! submission with a short delay.

use leptos::*;

use genealina::site::{ContactForm, FormField, SIMULATED_SUBMIT_DELAY};

use crate::state::global::use_global_state;

/// Contact form component
#[component]
pub fn ContactFormView() -> impl IntoView {
    let state = use_global_state();
    let form = create_rw_signal(ContactForm::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(input) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        let delay = SIMULATED_SUBMIT_DELAY.as_millis() as u32;
        gloo_timers::callback::Timeout::new(delay, move || {
            web_sys::console::log_1(&format!("Contact form data: {:?}", input).into());
            if let Some(notice) = form.try_update(|f| f.finish_submit(Ok(()))) {
                state.show_notice(notice);
            }
        })
        .forget();
    };

    view! {
        <form id="contact-form" class="contact__form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <FormInput form=form field=FormField::Name placeholder="Your name" />
                <FormInput form=form field=FormField::Lastname placeholder="Your last name" />
            </div>
            <div class="form__row">
                <FormInput form=form field=FormField::Email placeholder="you@example.com" input_type="email" />
                <FormInput form=form field=FormField::Phone placeholder="+51 999 888 777" input_type="tel" />
            </div>
            <FormInput form=form field=FormField::Message placeholder="Tell us about your project" />

            <button
                type="submit"
                class="btn btn--primary form__submit"
                disabled=move || form.with(ContactForm::is_submitting)
            >
                {move || form.with(ContactForm::submit_label)}
            </button>
        </form>
    }
}

/// One labelled input (a textarea for the message) with its error line
#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    placeholder: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(field).map(|e| e.to_string()));
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
    };
    let on_blur = move |_: ev::FocusEvent| {
        form.update(|f| {
            f.blur(field);
        })
    };
    let invalid_style = move || error().map(|_| "border-color: #ef4444");

    let control = if field == FormField::Message {
        view! {
            <textarea
                id=field.name()
                name=field.name()
                class="form__textarea"
                rows="5"
                placeholder=placeholder
                style=invalid_style
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_view()
    } else {
        view! {
            <input
                id=field.name()
                name=field.name()
                type=input_type
                class="form__input"
                placeholder=placeholder
                style=invalid_style
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_view()
    };

    view! {
        <div class="form__group">
            <label for=field.name() class="form__label">{field.label()}</label>
            {control}
            {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
        </div>
    }
}
