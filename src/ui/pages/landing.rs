//! Landing page component
//!
//! The SimpleAuth pre-launch page:
//! - SEO meta tags
//! - Hero with the first waitlist form and an example integration snippet
//! - Problem, solution, how-it-works, audience and pricing sections
//! - Validation call-to-action with the second waitlist form
//! - Footer and scroll-to-top control
//!
//! Sections fade in the first time they scroll into view (see `ui::reveal`).

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::RevealSection;
use crate::core::reveal::{REVEAL_THRESHOLD, step_delay};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{provide_reveal_flags, use_revealed};
use crate::ui::scroll_top::ScrollToTop;
use crate::ui::waitlist_form::{FormVariant, WaitlistForm};

const PROBLEMS: [&str; 4] = [
    "Pirated copies spread quickly",
    "Rolling your own license system wastes weeks",
    "Existing solutions are expensive or overkill",
    "License logic distracts from real product development",
];

const FEATURES: [(&str, &str, &str); 6] = [
    (
        icons::ZAP,
        "Generate license keys",
        "Instantly create unique keys for your users via dashboard or API.",
    ),
    (
        icons::CODE,
        "REST API Validation",
        "Validate licenses with a single HTTP request from any platform.",
    ),
    (
        icons::SHIELD_CHECK,
        "Control Status",
        "Easily activate, revoke, or expire keys in real-time.",
    ),
    (
        icons::LAYERS,
        "Subscription Support",
        "Built-in handling for recurring validation and expiry dates.",
    ),
    (
        icons::TERMINAL,
        "Webhooks",
        "Get notified when someone uses an invalid or blacklisted key.",
    ),
    (
        icons::ALERT_CIRCLE,
        "Simple Dashboard",
        "No bloat. Just manage your products and see your users.",
    ),
];

const STEPS: [&str; 4] = [
    "Create a product",
    "Generate license keys",
    "Integrate the API",
    "Validate on app startup",
];

const AUDIENCE: [(&str, &str); 4] = [
    (icons::USERS, "Indie Developers"),
    (icons::SHIELD_CHECK, "Solo Founders"),
    (icons::CODE, "Template & Plugin Sellers"),
    (icons::LAYERS, "Desktop, Mobile & Web Apps"),
];

const PRICING_PERKS: [&str; 3] = ["Unlimited Keys", "10 Products", "Full API Access"];

/// Documentation sample shown in the hero; never executed
const SNIPPET: &str = r#"const response = await fetch('https://api.simpleauth.com/v1/validate', {
  method: 'POST',
  headers: { 'X-API-KEY': 'your_secret_key' },
  body: JSON.stringify({
    license_key: 'DEV-XXXX-XXXX',
    product_id: 'prod_82hks'
  })
});

const { valid, expiry } = await response.json();

if (!valid) {
  alert('License is invalid or expired.');
  process.exit(1);
}"#;

/// Landing page component with scroll-triggered reveals
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_reveal_flags(REVEAL_THRESHOLD);

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white text-slate-900 overflow-x-hidden">
            <Navbar />

            <Hero />

            <ProblemSection />
            <SolutionSection />
            <HowItWorksSection />
            <AudienceSection />
            <PricingSection />
            <ValidateSection />

            <Footer />

            <ScrollToTop />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="SimpleAuth - License keys & validation API for indie developers" />
        <Meta name="description" content="A simple license key & subscription validation API for indie developers selling apps, plugins, templates, or desktop software." />
        <Meta property="og:title" content="SimpleAuth - Stop Piracy. Manage Licenses. Ship Faster." />
        <Meta property="og:description" content="License key generation and one-request validation for indie software. Join the waitlist." />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary" />
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="max-w-4xl mx-auto px-6 py-8 flex justify-between items-center">
            <Brand />
            <div class="hidden md:flex items-center gap-8 text-sm font-medium text-slate-500">
                <a href="#how-it-works" class="hover:text-slate-900 transition-colors">"How it works"</a>
                <a href="#pricing" class="hover:text-slate-900 transition-colors">"Pricing"</a>
            </div>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 font-bold text-xl tracking-tight">
            <div class="w-8 h-8 bg-slate-900 rounded flex items-center justify-center">
                <Icon name=icons::SHIELD_CHECK class="text-white w-5 h-5" />
            </div>
            <span>"SimpleAuth"</span>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="pt-16 pb-24 md:pt-20 md:pb-32 px-6 max-w-4xl mx-auto text-center md:text-left">
            <div class="inline-flex items-center gap-2 bg-slate-50 border border-slate-200 px-3 py-1 rounded-full
                        text-xs font-semibold text-slate-600 mb-6 tracking-wide uppercase">
                <Icon name=icons::TERMINAL class="w-3.5 h-3.5" />
                "Pre-launch validation"
            </div>
            <h1 class="text-4xl md:text-6xl font-bold tracking-tight text-slate-900 leading-[1.1] mb-6">
                "Stop Piracy. Manage Licenses. Ship Faster."
            </h1>
            <p class="text-lg md:text-xl text-slate-500 mb-10 max-w-2xl leading-relaxed">
                "A simple license key & subscription validation API for indie developers selling apps, plugins, templates, or desktop software."
            </p>
            <div class="flex flex-col items-center md:items-start gap-4">
                <WaitlistForm variant=FormVariant::Hero />
                <p class="text-sm text-slate-400 font-medium">
                    "No free tier. Planned price: "
                    <span class="text-slate-900">"$10/month"</span>
                    "."
                </p>
            </div>

            <CodeSnippet />
        </header>
    }
}

#[component]
fn CodeSnippet() -> impl IntoView {
    view! {
        <div class="bg-slate-900 rounded-xl p-1 shadow-2xl shadow-slate-200/50 mt-12 overflow-hidden border border-slate-800 text-left">
            <div class="flex items-center gap-2 px-4 py-3 border-b border-slate-800">
                <div class="flex gap-1.5" aria-hidden="true">
                    <div class="w-2.5 h-2.5 rounded-full bg-slate-700"></div>
                    <div class="w-2.5 h-2.5 rounded-full bg-slate-700"></div>
                    <div class="w-2.5 h-2.5 rounded-full bg-slate-700"></div>
                </div>
                <span class="text-xs text-slate-500 font-mono ml-2 uppercase tracking-widest">"validate_license.js"</span>
            </div>
            <div class="p-6 overflow-x-auto">
                <pre class="font-mono text-sm leading-relaxed text-slate-300">
                    <code>{SNIPPET}</code>
                </pre>
            </div>
        </div>
    }
}

/// Titled page section that fades in on first view
#[component]
fn Section(
    section: RevealSection,
    title: &'static str,
    /// Extra classes for the outer `<section>`
    #[prop(default = "")]
    class: &'static str,
    /// Full-bleed background band instead of a centred column
    #[prop(default = false)]
    band: bool,
    children: Children,
) -> impl IntoView {
    let revealed = use_revealed(section);
    let outer = if band {
        format!("py-16 md:py-24 px-6 bg-slate-50 border-y border-slate-200 {}", class)
    } else {
        format!("py-16 md:py-24 px-6 max-w-4xl mx-auto {}", class)
    };

    view! {
        <section id=section.element_id() class=outer>
            <div class="max-w-4xl mx-auto reveal" class:reveal-visible=move || revealed.get()>
                <h2 class="text-2xl md:text-3xl font-bold tracking-tight mb-10 md:mb-14 text-slate-900">
                    {title}
                </h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <Section
            section=RevealSection::Problem
            title="Selling software is easy. Managing licenses is not."
            band=true
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-y-6 md:gap-x-8 md:gap-y-10">
                {PROBLEMS
                    .into_iter()
                    .map(|point| {
                        view! {
                            <div class="flex gap-3">
                                <Icon name=icons::X_CIRCLE class="text-slate-300 w-5 h-5 md:w-6 md:h-6 shrink-0 mt-0.5" />
                                <p class="text-slate-600 leading-relaxed text-sm md:text-base">{point}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <Section section=RevealSection::Solution title="A focused tool that does one thing well">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-y-10 md:gap-x-12 md:gap-y-14">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! { <FeatureItem icon=icon title=title description=description /> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn FeatureItem(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-4 group">
            <div class="w-10 h-10 md:w-12 md:h-12 bg-slate-50 border border-slate-100 rounded-xl flex items-center justify-center
                        shrink-0 text-slate-400 group-hover:text-slate-900 group-hover:bg-slate-100 transition-all duration-300">
                <Icon name=icon class="w-5 h-5 md:w-6 md:h-6" />
            </div>
            <div class="flex flex-col justify-center">
                <h3 class="font-bold mb-1 text-slate-900 text-base md:text-lg group-hover:translate-x-0.5 transition-transform duration-300">
                    {title}
                </h3>
                <p class="text-slate-500 text-sm leading-relaxed max-w-sm">{description}</p>
            </div>
        </div>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    let revealed = use_revealed(RevealSection::HowItWorks);

    view! {
        <Section section=RevealSection::HowItWorks title="How it works" band=true>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-8">
                {STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(idx, step)| {
                        view! {
                            <div
                                class="relative step-enter"
                                class:step-enter-visible=move || revealed.get()
                                style=step_delay(idx)
                            >
                                <div class="text-4xl font-mono font-bold text-slate-200 mb-4">{idx + 1}</div>
                                <p class="text-slate-700 font-medium">{step}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p
                class="mt-12 text-slate-400 font-mono text-sm italic quote-enter"
                class:quote-enter-visible=move || revealed.get()
            >
                "“That’s it. No complex setup.”"
            </p>
        </Section>
    }
}

#[component]
fn AudienceSection() -> impl IntoView {
    view! {
        <Section section=RevealSection::Audience title="Built for the builders">
            <div class="flex flex-wrap gap-3 md:gap-4">
                {AUDIENCE
                    .into_iter()
                    .map(|(icon, label)| {
                        view! {
                            <div class="flex items-center gap-3 bg-white border border-slate-200 px-4 py-2.5 md:px-5 md:py-3
                                        rounded-full text-slate-700 font-medium text-sm md:text-base shadow-sm
                                        hover:border-slate-300 transition-colors">
                                <Icon name=icon class="w-4 h-4 text-slate-400" />
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <Section section=RevealSection::Pricing title="Simple pricing" class="text-center md:text-left">
            <div class="bg-slate-900 text-white rounded-2xl p-8 md:p-12 relative overflow-hidden">
                <div class="absolute top-0 right-0 p-8 opacity-10 hidden sm:block" aria-hidden="true">
                    <Icon name=icons::SHIELD_CHECK class="w-32 h-32" />
                </div>
                <div class="relative z-10">
                    <div class="text-3xl md:text-4xl font-bold mb-4">"Planned: $10/month"</div>
                    <p class="text-slate-400 text-base md:text-lg mb-8 max-w-md">
                        "No free tier. Cancel anytime. Simple billing for serious tools."
                    </p>
                    <div class="flex flex-wrap gap-x-6 gap-y-3 text-sm text-slate-300 font-mono">
                        {PRICING_PERKS
                            .into_iter()
                            .map(|perk| {
                                view! {
                                    <span class="flex items-center gap-2 shrink-0">
                                        <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-emerald-500" />
                                        {perk}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn ValidateSection() -> impl IntoView {
    view! {
        <Section section=RevealSection::Validate title="Would you pay $10/month for this?" class="mb-20">
            <div class="max-w-2xl">
                <p class="text-lg text-slate-600 mb-8 leading-relaxed">
                    "I’m validating this idea before building. If you've ever struggled to stop piracy or wasted hours rolling your own auth, join the waitlist."
                </p>
                <blockquote class="p-6 bg-slate-50 border border-slate-200 rounded-xl mb-10 italic text-slate-500 text-sm
                                   leading-relaxed border-l-4 border-l-slate-900">
                    "\"I built this because I spent two weeks setting up licensing for my own Mac app. That was two weeks I wasn't shipping features. SimpleAuth solves that.\""
                    <div class="mt-2 font-semibold text-slate-900 not-italic">"Founder's Note"</div>
                </blockquote>
                <WaitlistForm variant=FormVariant::Bottom />
            </div>
        </Section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-6 border-t border-slate-200 text-slate-400 text-sm text-center">
            <div class="max-w-4xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="flex items-center gap-2 font-bold text-slate-900">
                    <Icon name=icons::SHIELD_CHECK class="w-4 h-4" />
                    <span>"SimpleAuth"</span>
                </div>
                <p>"© 2026 SimpleAuth. A pre-launch experiment for indie developers."</p>
                <div class="flex gap-6">
                    <a href="#how-it-works" class="hover:text-slate-900 transition-colors">"How it works"</a>
                    <a href="#pricing" class="hover:text-slate-900 transition-colors">"Pricing"</a>
                </div>
            </div>
        </footer>
    }
}
