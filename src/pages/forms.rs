use maud::{Markup, html};

use crate::forms::{
    AGE_GROUPS, CONTACT_SUBJECTS, ContactForm, EXPERIENCE_LEVELS, FormPhase, RegistrationForm,
};
use crate::models::ClassOffering;
use crate::pages::{Site, layout, page_header};
use crate::reveal::{Direction, reveal};

/// Disables the submit button while a request is in flight and clears the
/// form when its success banner expires.
pub const FORM_SCRIPT: &str = include_str!("../../static/forms.js");

const SENDING: &str = "Sending...";

/// What a form page needs to draw itself.
#[derive(Debug, Clone)]
pub struct FormView<'a, F> {
    pub fields: &'a F,
    pub phase: &'a FormPhase,
    /// Field-level problem from a rejected submission, e.g. "email is required".
    pub problem: Option<String>,
}

impl<'a, F> FormView<'a, F> {
    pub fn new(fields: &'a F, phase: &'a FormPhase) -> Self {
        Self {
            fields,
            phase,
            problem: None,
        }
    }
}

fn banner(site: &Site, phase: &FormPhase, form_id: &str, thanks: &str) -> Markup {
    html! {
        @match phase {
            FormPhase::Submitted(receipt) => {
                div.banner.success role="status"
                    data-reset-after-ms=(site.reset_after.as_millis().to_string())
                    data-reset-form=(form_id) {
                    strong { (thanks) }
                    " Your reference is " code { (receipt.reference) } "."
                }
            }
            FormPhase::Failed(message) => {
                div.banner.error role="alert" { (message) }
            }
            FormPhase::Idle | FormPhase::Submitting => {}
        }
    }
}

fn submit_button(phase: &FormPhase, label: &str) -> Markup {
    let busy = matches!(phase, FormPhase::Submitting);
    html! {
        button type="submit" disabled[busy] {
            @if busy { (SENDING) } @else { (label) }
        }
    }
}

fn input(label: &str, name: &str, kind: &str, value: &str, required: bool) -> Markup {
    html! {
        label for=(name) { (label) @if required { " *" } }
        input id=(name) name=(name) type=(kind) value=(value) required[required];
    }
}

fn select(
    label: &str,
    name: &str,
    options: &[(&str, &str)],
    value: &str,
    required: bool,
) -> Markup {
    html! {
        label for=(name) { (label) @if required { " *" } }
        select id=(name) name=(name) required[required] {
            option value="" { "Choose..." }
            @for (key, text) in options {
                option value=(key) selected[*key == value] { (text) }
            }
        }
    }
}

fn problem(view_problem: &Option<String>) -> Markup {
    html! {
        @if let Some(message) = view_problem {
            p.field-error role="alert" { (message) }
        }
    }
}

pub fn render_contact(site: &Site, view: &FormView<'_, ContactForm>) -> Markup {
    let f = view.fields;
    let content = html! {
        (page_header("Contact Us", Some("Questions about classes, shows or rentals? We'd love to hear from you.")))
        div.contact-layout {
            (reveal(&site.reveal.direction(Direction::Left), html! {
                (banner(site, view.phase, "contact-form", "Thanks for reaching out!"))
                (problem(&view.problem))
                form.contact-form id="contact-form" method="post" action="/contact"
                    data-sending-label=(SENDING) {
                    (input("Name", "name", "text", &f.name, true))
                    (input("Email", "email", "email", &f.email, true))
                    (input("Phone", "phone", "tel", &f.phone, false))
                    (select("Subject", "subject", CONTACT_SUBJECTS, &f.subject, true))
                    label for="message" { "Message *" }
                    textarea id="message" name="message" rows="6" required { (f.message) }
                    label.checkbox {
                        input type="checkbox" name="newsletter" value="on" checked[f.newsletter.is_some()];
                        " Send me the monthly studio newsletter"
                    }
                    (submit_button(view.phase, "Send Message"))
                }
            }))
            (reveal(&site.reveal.direction(Direction::Right), html! {
                aside.contact-details {
                    h2 { "Visit" }
                    p { "214 Mill Street, second floor" }
                    h2 { "Call" }
                    p { "(555) 014-2290" }
                    h2 { "Office hours" }
                    p { "Monday to Friday, 3 PM to 8 PM · Saturday, 9 AM to 1 PM" }
                }
            }))
        }
    };
    layout(site, "/contact", "Contact", content)
}

pub fn render_registration(
    site: &Site,
    view: &FormView<'_, RegistrationForm>,
    classes: &[ClassOffering],
) -> Markup {
    let f = view.fields;
    let class_options: Vec<(&str, &str)> = classes.iter().map(|c| (c.slug, c.name)).collect();
    let content = html! {
        (page_header("Register for a Class", Some("Your first class is free. We'll confirm your spot within two business days.")))
        (reveal(&site.reveal, html! {
            (banner(site, view.phase, "registration-form", "You're registered!"))
            (problem(&view.problem))
            form.registration-form id="registration-form" method="post" action="/classes/register"
                data-sending-label=(SENDING) {
                fieldset {
                    legend { "Dancer" }
                    (input("First name", "first_name", "text", &f.first_name, true))
                    (input("Last name", "last_name", "text", &f.last_name, true))
                    (select("Age group", "age_group", AGE_GROUPS, &f.age_group, false))
                    (select("Experience", "experience", EXPERIENCE_LEVELS, &f.experience, false))
                }
                fieldset {
                    legend { "Contact" }
                    (input("Email", "email", "email", &f.email, true))
                    (input("Phone", "phone", "tel", &f.phone, true))
                    (input("Emergency contact", "emergency_contact", "text", &f.emergency_contact, false))
                }
                fieldset {
                    legend { "Class" }
                    (select("Class", "class_slug", &class_options, &f.class_slug, true))
                    label for="notes" { "Anything we should know?" }
                    textarea id="notes" name="notes" rows="4" { (f.notes) }
                }
                label.checkbox {
                    input type="checkbox" name="agree_terms" value="on" required checked[f.agree_terms.is_some()];
                    " I agree to the " a href="/terms" { "terms of service" } " *"
                }
                (submit_button(view.phase, "Register"))
            }
        }))
    };
    layout(site, "/classes/register", "Register", content)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::catalog::Catalog;
    use crate::forms::Receipt;
    use crate::settings::Settings;

    fn site() -> Site {
        Site::from_settings(&Settings::default())
    }

    #[test]
    fn test_idle_contact_form_has_required_fields() {
        let fields = ContactForm::default();
        let html = render_contact(&site(), &FormView::new(&fields, &FormPhase::Idle)).into_string();
        assert!(html.contains(r#"<input id="email" name="email" type="email" value="" required>"#));
        assert!(html.contains(r#"<textarea id="message" name="message" rows="6" required>"#));
        assert!(!html.contains(r#"class="banner"#));
        assert!(html.contains(">Send Message</button>"));
    }

    #[test]
    fn test_submitting_disables_button() {
        let fields = ContactForm::default();
        let html =
            render_contact(&site(), &FormView::new(&fields, &FormPhase::Submitting)).into_string();
        assert!(html.contains(r#"<button type="submit" disabled>Sending...</button>"#));
    }

    #[test]
    fn test_submitted_banner_resets_after_delay() {
        let fields = ContactForm::default();
        let phase = FormPhase::Submitted(Receipt {
            reference: "CONTACT-00007".into(),
            form: "contact",
            received_at: Utc::now(),
        });
        let html = render_contact(&site(), &FormView::new(&fields, &phase)).into_string();
        assert!(html.contains(r#"data-reset-after-ms="3000" data-reset-form="contact-form""#));
        assert!(html.contains(r#"<form class="contact-form" id="contact-form""#));
        assert!(html.contains("CONTACT-00007"));
    }

    #[test]
    fn test_form_script_handles_sending_and_reset() {
        let fields = ContactForm::default();
        let html = render_contact(&site(), &FormView::new(&fields, &FormPhase::Idle)).into_string();
        assert!(html.contains(r#"data-sending-label="Sending...""#));
        assert!(FORM_SCRIPT.contains("addEventListener(\"submit\""));
        assert!(FORM_SCRIPT.contains("button.disabled = true"));
        assert!(FORM_SCRIPT.contains("dataset.resetForm"));
    }

    #[test]
    fn test_failed_banner() {
        let fields = ContactForm::default();
        let phase = FormPhase::Failed("submission service unavailable".into());
        let html = render_contact(&site(), &FormView::new(&fields, &phase)).into_string();
        assert!(html.contains(
            r#"<div class="banner error" role="alert">submission service unavailable</div>"#
        ));
    }

    #[test]
    fn test_registration_keeps_values_and_problem() {
        let fields = RegistrationForm {
            first_name: "Ada".into(),
            class_slug: "tap-together".into(),
            ..Default::default()
        };
        let mut view = FormView::new(&fields, &FormPhase::Idle);
        view.problem = Some("last_name is required".into());
        let html = render_registration(&site(), &view, &Catalog::studio().classes).into_string();
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"<option value="tap-together" selected>Tap Together</option>"#));
        assert!(html.contains("last_name is required"));
    }
}
