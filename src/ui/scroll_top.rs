use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Floating "back to top" button, shown once the page is scrolled down
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::reveal::scroll_to_top_visible;
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            let show = scroll_to_top_visible(y);
            if visible.get_untracked() != show {
                visible.set(show);
            }
        });

        on_cleanup(move || drop(handle_scroll));
    }

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            type="button"
            class="fixed bottom-6 right-6 z-40 w-11 h-11 rounded-full bg-slate-900 text-white shadow-lg
                   flex items-center justify-center hover:bg-slate-800 transition-all duration-300"
            class:opacity-0=move || !visible.get()
            class:pointer-events-none=move || !visible.get()
            class:translate-y-4=move || !visible.get()
            aria-label="Scroll to top"
            aria-hidden=move || (!visible.get()).to_string()
            on:click=on_click
        >
            <Icon name=icons::ARROW_UP class="w-5 h-5" />
        </button>
    }
}
