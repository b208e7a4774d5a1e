use leptos::prelude::*;

/// Inline stroke icon; colour follows `currentColor`
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(name)}
        </svg>
    }
}

fn icon_paths(name: &str) -> AnyView {
    match name {
        icons::SHIELD_CHECK => view! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        icons::TERMINAL => view! {
            <path d="m4 17 6-6-6-6" />
            <path d="M12 19h8" />
        }
        .into_any(),
        icons::CODE => view! {
            <path d="m18 16 4-4-4-4" />
            <path d="m6 8-4 4 4 4" />
            <path d="m14.5 4-5 16" />
        }
        .into_any(),
        icons::CHECK_CIRCLE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        icons::X_CIRCLE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m15 9-6 6" />
            <path d="m9 9 6 6" />
        }
        .into_any(),
        icons::LAYERS => view! {
            <path d="M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z" />
            <path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" />
            <path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
        }
        .into_any(),
        icons::ZAP => view! {
            <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" />
        }
        .into_any(),
        icons::USERS => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        }
        .into_any(),
        icons::ALERT_CIRCLE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 8v4" />
            <path d="M12 16h.01" />
        }
        .into_any(),
        icons::ARROW_UP => view! {
            <path d="m5 12 7-7 7 7" />
            <path d="M12 19V5" />
        }
        .into_any(),
        icons::X => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        _ => ().into_any(),
    }
}

/// Icon names understood by [`Icon`]
pub mod icons {
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const TERMINAL: &str = "terminal";
    pub const CODE: &str = "code";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const X_CIRCLE: &str = "x-circle";
    pub const LAYERS: &str = "layers";
    pub const ZAP: &str = "zap";
    pub const USERS: &str = "users";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_UP: &str = "arrow-up";
    pub const X: &str = "x";
}
