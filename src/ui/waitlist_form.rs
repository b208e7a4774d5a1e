//! Waitlist form component
//!
//! Email field + submit button that turns into a confirmation once the
//! registration succeeds. Each instance owns its own [`WaitlistSubmission`];
//! the submitter comes from context (see [`provide_waitlist_client`]).

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    SubmissionStore, WaitlistClient, WaitlistSettings, WaitlistSubmission, submit,
};
use crate::ui::common::{InlineError, Spinner, SuccessNotice};

const CONFIRMATION: &str = "You're on the list. We'll be in touch soon.";

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 \
    focus:ring-slate-900/5 text-sm transition-all border-slate-200 focus:border-slate-900";
const INPUT_CLASS_ERROR: &str = "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 \
    focus:ring-slate-900/5 text-sm transition-all border-rose-300 focus:border-rose-400";

/// Where the form sits on the page; affects layout and copy only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Hero,
    Bottom,
}

impl FormVariant {
    fn placeholder(&self) -> &'static str {
        match self {
            FormVariant::Hero => "Enter your email",
            FormVariant::Bottom => "you@yourstudio.dev",
        }
    }

    fn container_class(&self) -> &'static str {
        match self {
            FormVariant::Hero => "w-full max-w-md flex flex-col gap-2 items-stretch",
            FormVariant::Bottom => "w-full max-w-lg flex flex-col gap-2",
        }
    }
}

impl SubmissionStore for RwSignal<WaitlistSubmission> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut WaitlistSubmission) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Build the submitter from the page settings and make it available to every
/// [`WaitlistForm`] below.
pub fn provide_waitlist_client(settings: &WaitlistSettings) -> WaitlistClient {
    let client = WaitlistClient::from(settings);
    provide_context(client.clone());
    client
}

/// Waitlist sign-up form
#[component]
pub fn WaitlistForm(
    /// Layout/copy variant
    #[prop(default = FormVariant::Hero)]
    variant: FormVariant,
) -> impl IntoView {
    let client = use_context::<WaitlistClient>().unwrap_or_default();
    let submission = RwSignal::new(WaitlistSubmission::new());

    let is_submitting = Memo::new(move |_| submission.with(|s| s.is_submitting()));
    let succeeded = Memo::new(move |_| submission.with(|s| s.is_succeeded()));
    let error = Signal::derive(move || submission.with(|s| s.error_message()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let client = client.clone();
        spawn_local(async move {
            submit(&submission, &client).await;
        });
    };

    let on_dismiss = Callback::new(move |_| submission.update(|s| s.dismiss_error()));

    let form = move || {
        if succeeded.get() {
            return view! { <SuccessNotice message=CONFIRMATION /> }.into_any();
        }

        let on_submit = on_submit.clone();
        view! {
            <div class=variant.container_class()>
                <form on:submit=on_submit class="flex flex-col sm:flex-row gap-2 w-full" novalidate=true>
                    <div class="flex-1 relative">
                        <input
                            type="text"
                            name="email"
                            autocomplete="email"
                            aria-label="Email address"
                            placeholder=variant.placeholder()
                            class=move || {
                                if error.get().is_some() { INPUT_CLASS_ERROR } else { INPUT_CLASS }
                            }
                            prop:value=move || submission.with(|s| s.email().to_string())
                            on:input=move |ev| {
                                submission.update(|s| {
                                    s.edit(event_target_value(&ev));
                                });
                            }
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        aria-busy=move || is_submitting.get().to_string()
                        class="bg-slate-900 text-white px-6 py-3 rounded-lg text-sm font-semibold
                               hover:bg-slate-800 transition-all whitespace-nowrap shadow-sm
                               disabled:opacity-70 disabled:cursor-not-allowed
                               flex items-center justify-center min-w-[120px]"
                    >
                        {move || {
                            if is_submitting.get() {
                                view! { <Spinner label="Submitting" /> }.into_any()
                            } else {
                                view! { <span>"Join the Waitlist"</span> }.into_any()
                            }
                        }}
                    </button>
                </form>
                <InlineError error=error on_dismiss=on_dismiss />
            </div>
        }
        .into_any()
    };

    view! { {form} }
}
