//! Inline status messages for forms

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Inline error with a dismiss button.
/// Hidden while `error` is `None`.
#[component]
pub fn InlineError(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called when the user dismisses the message
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-1.5 text-rose-600 waitlist-error-in" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-3.5 h-3.5 shrink-0" />
                <span class="text-xs font-medium">{move || error.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="ml-1 p-0.5 rounded text-rose-400 hover:text-rose-600 transition-colors"
                    aria-label="Dismiss error"
                    on:click=move |_| on_dismiss.run(())
                >
                    <Icon name=icons::X class="w-3 h-3" />
                </button>
            </div>
        </Show>
    }
}

/// Static success notice with a check icon
#[component]
pub fn SuccessNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="bg-slate-50 border border-slate-200 p-4 rounded-lg flex items-center gap-3 max-w-md waitlist-fade-in" role="status">
            <Icon name=icons::CHECK_CIRCLE class="text-emerald-500 w-5 h-5 shrink-0" />
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
