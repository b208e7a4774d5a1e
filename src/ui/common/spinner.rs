use leptos::prelude::*;

/// Ring spinner for buttons on dark backgrounds
#[component]
pub fn Spinner(
    /// Screen reader label
    #[prop(default = "Loading")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"
            role="status"
            aria-label=label
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_renders_label() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Spinner label="Submitting" /> }.to_html());

        assert!(html.contains("aria-label=\"Submitting\""));
        assert!(html.contains("animate-spin"));
    }
}
