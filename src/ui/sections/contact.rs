use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::core::contact::{
    ContactFlow, ContactForm, Field, FieldErrors, SUCCESS_PULSE, SUCCESS_PULSE_LEGS, SubmitError, SubmitState,
    submit_label,
};
use crate::core::content::{PROFILE, SOCIAL_LINKS};
use crate::core::motion::{Ease, Props, ScrollTrigger, Stagger, Tween, css_number};
use crate::core::navigation::SectionId;
use crate::core::particles::{CONTACT_MAX_DELAY, CONTACT_PARTICLES, CONTACT_SEED, scatter};
use crate::ui::common::{FormField, InlineSpinner, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::use_scroll_trigger;

const FORM_IN: Tween = Tween::new(Props::new().opacity(0.0).x(-60.0), Props::new().opacity(1.0).x(0.0))
    .duration(1.2)
    .ease(Ease::Power2Out);

const INPUT_IN: Tween = Tween::new(Props::new().opacity(0.0).y(20.0), Props::new().opacity(1.0).y(0.0))
    .duration(0.8)
    .ease(Ease::Power2Out);
const INPUT_STAGGER: Stagger = Stagger::each(0.1);

const SOCIAL_IN: Tween = Tween::new(
    Props::new().opacity(0.0).y(30.0).scale(0.8),
    Props::new().opacity(1.0).y(0.0).scale(1.0),
)
.duration(0.6)
.ease(Ease::BackOut(1.7));
const SOCIAL_STAGGER: Stagger = Stagger::each(0.1);

/// Keyframe animation for the post-send pulse on the submit button
fn pulse_style(active: bool) -> String {
    if !active {
        return String::new();
    }
    format!(
        "animation: button-pulse {}s {} 1;",
        css_number(pulse_seconds()),
        SUCCESS_PULSE.ease.css()
    )
}

fn pulse_seconds() -> f64 {
    SUCCESS_PULSE.duration * SUCCESS_PULSE_LEGS as f64
}

/// Contact form, contact details and social links
#[component]
pub fn ContactSection() -> impl IntoView {
    let form_ref = NodeRef::<html::Div>::new();
    let social_ref = NodeRef::<html::Div>::new();
    let form_seen = use_scroll_trigger(form_ref, ScrollTrigger::at(80.0));
    let social_seen = use_scroll_trigger(social_ref, ScrollTrigger::at(80.0));

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let social_delays = SOCIAL_STAGGER.delays(SOCIAL_LINKS.len());

    let particles = scatter(CONTACT_PARTICLES, CONTACT_SEED, CONTACT_MAX_DELAY);

    view! {
        <section id=SectionId::Contact.anchor() class="py-20 lg:py-32 relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                {particles
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="absolute w-1 h-1 bg-neon-blue/30 rounded-full animate-float"
                                style=p.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">
                            "Let's " <span class="text-gradient">"Connect"</span>
                        </h2>
                        <p class="text-xl text-muted-foreground leading-relaxed">
                            "Ready to bring your ideas to life? Let's create something amazing together."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-16 items-start">
                        <div
                            node_ref=form_ref
                            class="space-y-8"
                            style=move || FORM_IN.style(form_seen.get(), 0.0)
                        >
                            <MessageForm form=form errors=errors revealed=form_seen />
                        </div>

                        <div class="space-y-8">
                            <div class="glass p-8 rounded-2xl">
                                <h3 class="text-2xl font-bold mb-4 text-gradient">"Get in Touch"</h3>
                                <p class="text-muted-foreground leading-relaxed mb-6">
                                    "I'm always excited to work on new projects and collaborate with creative minds. "
                                    "Whether you have a specific project in mind or just want to chat about possibilities, "
                                    "I'd love to hear from you."
                                </p>
                                <div class="space-y-3">
                                    <ContactDetail symbol="\u{1F4E7}" text=PROFILE.email />
                                    <ContactDetail symbol="\u{1F4F1}" text=PROFILE.phone />
                                    <ContactDetail symbol="\u{1F4CD}" text=PROFILE.location />
                                </div>
                            </div>

                            <div node_ref=social_ref class="space-y-4">
                                <h4 class="text-lg font-semibold">"Follow Me"</h4>
                                <div class="flex space-x-4">
                                    {SOCIAL_LINKS
                                        .iter()
                                        .zip(social_delays)
                                        .map(|(link, delay)| {
                                            view! {
                                                <a
                                                    href=link.href
                                                    aria-label=link.label
                                                    class="social-icon p-3 glass rounded-xl hover:glow-primary transition-all duration-300 group"
                                                    style=move || SOCIAL_IN.style(social_seen.get(), delay)
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                >
                                                    <span class="block group-hover:scale-110 transition-transform duration-300">
                                                        <Icon name=link.icon class="w-6 h-6" />
                                                    </span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The message form: inputs with inline errors and a submit button that
/// runs the simulated send
#[component]
fn MessageForm(
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    /// Whether the form has scrolled into view
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new());
    let pulsing = RwSignal::new(false);

    let value = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let error = move |field: Field| Signal::derive(move || errors.with(|e| e.get(field)).map(|e| e.to_string()));
    let on_input = move |field: Field| {
        Callback::new(move |text: String| {
            form.update(|f| f.set(field, text));
            // Once errors are showing, keep them in step with the input
            if !errors.with_untracked(FieldErrors::is_empty) {
                let current = form.with_untracked(|f| f.validate().err().unwrap_or_default());
                errors.set(current);
            }
        })
    };

    let input_delays = INPUT_STAGGER.delays(Field::ALL.len());
    let input_style = move |index: usize| {
        let delay = input_delays[index];
        Signal::derive(move || INPUT_IN.style(revealed.get(), delay))
    };

    let submitting = move || flow.with(ContactFlow::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let started = flow
            .try_update(|flow| form.with_untracked(|f| flow.begin(f)))
            .unwrap_or(Err(SubmitError::InFlight));

        match started {
            Ok(submission) => {
                errors.set(FieldErrors::default());
                leptos::logging::log!(
                    "contact form submitted: {}",
                    serde_json::to_string(&submission).unwrap_or_default()
                );

                #[cfg(feature = "hydrate")]
                {
                    use crate::core::contact::SIMULATED_LATENCY;
                    use gloo_timers::future::TimeoutFuture;
                    use wasm_bindgen_futures::spawn_local;

                    spawn_local(async move {
                        TimeoutFuture::new(SIMULATED_LATENCY.as_millis() as u32).await;
                        let done = flow
                            .try_update(|flow| form.try_update(|f| flow.complete(f)).unwrap_or(false))
                            .unwrap_or(false);
                        if !done {
                            return;
                        }
                        pulsing.set(true);
                        TimeoutFuture::new((pulse_seconds() * 1000.0) as u32).await;
                        pulsing.set(false);
                    });
                }
            }
            Err(SubmitError::Invalid(found)) => errors.set(found),
            Err(SubmitError::InFlight) => {}
        }
    };

    view! {
        <form class="space-y-6" novalidate=true on:submit=on_submit>
            <FormField
                label="Name"
                name="name"
                placeholder="Your full name"
                value=value(Field::Name)
                on_input=on_input(Field::Name)
                error=error(Field::Name)
                style=input_style(0)
            />
            <FormField
                label="Email"
                name="email"
                input_type="email"
                placeholder="your.email@example.com"
                value=value(Field::Email)
                on_input=on_input(Field::Email)
                error=error(Field::Email)
                style=input_style(1)
            />
            <TextAreaField
                label="Message"
                name="message"
                placeholder="Tell me about your project..."
                value=value(Field::Message)
                on_input=on_input(Field::Message)
                error=error(Field::Message)
                style=input_style(2)
            />
            <button
                type="submit"
                class="submit-btn w-full btn-hero py-4 flex items-center justify-center space-x-2"
                disabled=submitting
                style=move || pulse_style(pulsing.get())
            >
                {move || {
                    if submitting() {
                        view! {
                            <InlineSpinner class="text-white" />
                            <span>{submit_label(SubmitState::Submitting)}</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Icon name=icons::SEND />
                            <span>{submit_label(SubmitState::Idle)}</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn ContactDetail(symbol: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <p class="flex items-center space-x-3">
            <span class="text-primary">{symbol}</span>
            <span>{text}</span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_runs_out_and_back() {
        assert!((pulse_seconds() - 0.4).abs() < 1e-9);
        assert_eq!(pulse_style(false), "");
        assert!(pulse_style(true).starts_with("animation: button-pulse 0.4s cubic-bezier("));
    }

    #[test]
    fn test_inputs_stagger_in_field_order() {
        let delays = INPUT_STAGGER.delays(Field::ALL.len());
        assert_eq!(delays.len(), 3);
        assert!((delays[2] - 0.2).abs() < 1e-9);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the form as it looks right after a submit attempt
    fn render_after_submit(form: ContactForm) -> String {
        Owner::new().with(|| {
            let errors = RwSignal::new(form.validate().err().unwrap_or_default());
            let form = RwSignal::new(form);
            let (revealed, _) = signal(true);
            view! { <MessageForm form=form errors=errors revealed=revealed /> }.to_html()
        })
    }

    #[test]
    fn test_empty_form_shows_message_per_field() {
        let html = render_after_submit(ContactForm::default());
        assert_eq!(html.matches("role=\"alert\"").count(), 3);
        for message in ["Name is required", "Email is required", "Message is required"] {
            assert!(html.contains(&format!("<span>{message}</span>")), "{message}");
        }
        assert_eq!(html.matches("input-invalid").count(), 3);
        assert!(html.contains("<span>Send Message</span>"));
    }

    #[test]
    fn test_bad_email_flags_only_email() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada.example.com");
        form.set(Field::Message, "Hello");

        let html = render_after_submit(form);
        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert!(html.contains("<span>Invalid email address</span>"));
        assert!(!html.contains("is required"));
        assert_eq!(html.matches("input-invalid").count(), 1);
    }

    #[test]
    fn test_valid_form_renders_without_errors() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello");

        let html = render_after_submit(form);
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("input-invalid"));
        assert!(!html.contains("Sending..."));
    }
}
