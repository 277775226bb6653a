//! Waitlist form: field validation, submission state and rendering.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use strum::IntoEnumIterator;

use super::templates::{PageMeta, escape_html, footer, layout, site_header};
use crate::{
    application::{
        catalog,
        use_cases::waitlist::{WaitlistSubmission, WaitlistUseCases},
        validators::{has_min_chars, is_valid_email, normalize_birth_date},
    },
    domain::entities::waitlist_entry::{Gender, LookingFor},
};

/// Raw values as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitlistFormValues {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub looking_for: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    Email,
    DateOfBirth,
    City,
    State,
    Gender,
    LookingFor,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::DateOfBirth => "dateOfBirth",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Gender => "gender",
            FormField::LookingFor => "lookingFor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email Address",
            FormField::DateOfBirth => "Date of Birth",
            FormField::City => "City",
            FormField::State => "State",
            FormField::Gender => "Gender",
            FormField::LookingFor => "What are you looking for?",
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Checks every field and builds the handler payload when all pass.
pub fn validate(values: &WaitlistFormValues) -> Result<WaitlistSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    if !has_min_chars(&values.full_name, 2) {
        errors.insert(FormField::FullName, "Full name must be at least 2 characters");
    }
    if !is_valid_email(&values.email) {
        errors.insert(FormField::Email, "Please enter a valid email address");
    }
    let date_of_birth = normalize_birth_date(&values.date_of_birth);
    if date_of_birth.is_none() {
        errors.insert(FormField::DateOfBirth, "Please pick your date of birth");
    }
    if !has_min_chars(&values.city, 2) {
        errors.insert(FormField::City, "City is required");
    }
    if !catalog::is_known_state(values.state.trim()) {
        errors.insert(FormField::State, "Please select your state");
    }
    if Gender::from_str(values.gender.trim()).is_err() {
        errors.insert(FormField::Gender, "Please select your gender");
    }
    if LookingFor::from_str(values.looking_for.trim()).is_err() {
        errors.insert(FormField::LookingFor, "Please select what you're looking for");
    }

    match date_of_birth {
        Some(date_of_birth) if errors.is_empty() => Ok(WaitlistSubmission {
            email: values.email.clone(),
            name: values.full_name.clone(),
            date_of_birth,
            city: values.city.clone(),
            state: values.state.clone(),
            gender: values.gender.clone(),
            looking_for: values.looking_for.clone(),
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub struct WaitlistFormPresenter {
    state: FormState,
    values: WaitlistFormValues,
    errors: FieldErrors,
    notice: Option<Notice>,
}

impl Default for WaitlistFormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistFormPresenter {
    pub fn new() -> Self {
        Self::with_values(WaitlistFormValues::default())
    }

    pub fn with_values(values: WaitlistFormValues) -> Self {
        Self {
            state: FormState::Idle,
            values,
            errors: FieldErrors::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Validates and, if valid, hands the payload to the waitlist.
    ///
    /// Only an idle form submits. `Submitted` is terminal.
    pub async fn submit(&mut self, waitlist: &WaitlistUseCases) {
        if self.state != FormState::Idle {
            return;
        }

        let submission = match validate(&self.values) {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors;
                self.notice = None;
                return;
            }
        };

        self.errors.clear();
        self.state = FormState::Submitting;

        let result = waitlist.submit(&submission).await;
        if result.success {
            self.state = FormState::Submitted;
            self.notice = Some(Notice::Success(result.message));
        } else {
            self.state = FormState::Idle;
            self.notice = Some(Notice::Error(result.message));
        }
    }

    pub fn render(&self, meta: &PageMeta) -> String {
        let body = match self.state {
            FormState::Submitted => self.render_confirmation(),
            FormState::Idle | FormState::Submitting => self.render_form(),
        };
        layout(meta, &body)
    }

    fn render_confirmation(&self) -> String {
        let toast = self.render_notice();
        format!(
            r#"<main class="confirmation">
      {toast}
      <div class="brand-mark">&#10003;</div>
      <h2>You're on the list! &#127881;</h2>
      <p>Thank you for joining DesiBandhan's exclusive waitlist. We'll keep you updated on our launch and send you early access when we're ready!</p>
      <p class="perks"><span>1000+ people waiting</span> &middot; <span>Early access guaranteed</span></p>
    </main>
{footer}"#,
            footer = footer(),
        )
    }

    fn render_form(&self) -> String {
        let submitting = self.state == FormState::Submitting;
        let state_options: Vec<(String, String)> = catalog::states()
            .iter()
            .map(|s| (s.value.clone(), s.name.clone()))
            .collect();
        let gender_options: Vec<(String, String)> = Gender::iter()
            .map(|g| (g.as_ref().to_string(), g.label().to_string()))
            .collect();
        let looking_for_options: Vec<(String, String)> = LookingFor::iter()
            .map(|l| (l.as_ref().to_string(), l.label().to_string()))
            .collect();

        let fields = [
            self.input(FormField::FullName, "text", "Enter your full name", &self.values.full_name),
            self.input(FormField::Email, "email", "your@email.com", &self.values.email),
            self.input(
                FormField::DateOfBirth,
                "date",
                "Pick a date",
                &date_input_value(&self.values.date_of_birth),
            ),
            self.input(FormField::City, "text", "Your city", &self.values.city),
            self.select(FormField::State, "Select your state", &state_options, &self.values.state),
            self.select(FormField::Gender, "Select gender", &gender_options, &self.values.gender),
            self.select(
                FormField::LookingFor,
                "Select your preference",
                &looking_for_options,
                &self.values.looking_for,
            ),
        ]
        .join("\n");

        let (disabled, label) = if submitting {
            (" disabled", "Joining Waitlist...")
        } else {
            ("", "Join the Waitlist")
        };

        format!(
            r#"{header}
    <main>
      <h2>Join the Waitlist</h2>
      <p>Be among the first to experience meaningful connections on DesiBandhan</p>
      <p class="perks">Early access + exclusive features</p>
      {toast}
      <form id="waitlist-form" method="post" action="/waitlist" novalidate>
{fields}
        <button type="submit" class="btn-primary"{disabled}>{label}</button>
        <p class="fine-print">By joining, you agree to receive updates about DesiBandhan's launch.<br>We respect your privacy and won't spam you.</p>
      </form>
    </main>
    <script>{script}</script>
{footer}"#,
            header = site_header(true),
            toast = self.render_notice(),
            script = SUBMITTING_SCRIPT,
            footer = footer(),
        )
    }

    fn render_notice(&self) -> String {
        match &self.notice {
            Some(Notice::Success(msg)) => format!(
                r#"<div class="toast toast-success" role="status">{}</div>"#,
                escape_html(msg)
            ),
            Some(Notice::Error(msg)) => format!(
                r#"<div class="toast toast-error" role="alert">{}</div>"#,
                escape_html(msg)
            ),
            None => String::new(),
        }
    }

    fn input(&self, field: FormField, kind: &str, placeholder: &str, value: &str) -> String {
        format!(
            r#"        <label for="{name}">{label}</label>
        <input id="{name}" name="{name}" type="{kind}" placeholder="{placeholder}" value="{value}">{error}"#,
            name = field.name(),
            label = field.label(),
            value = escape_html(value),
            error = self.field_error(field),
        )
    }

    fn select(
        &self,
        field: FormField,
        placeholder: &str,
        options: &[(String, String)],
        selected: &str,
    ) -> String {
        let selected = selected.trim();
        let options: String = options
            .iter()
            .map(|(value, text)| {
                let mark = if value == selected { " selected" } else { "" };
                format!(
                    r#"<option value="{}"{mark}>{}</option>"#,
                    escape_html(value),
                    escape_html(text)
                )
            })
            .collect();
        format!(
            r#"        <label for="{name}">{label}</label>
        <select id="{name}" name="{name}"><option value="">{placeholder}</option>{options}</select>{error}"#,
            name = field.name(),
            label = field.label(),
            error = self.field_error(field),
        )
    }

    fn field_error(&self, field: FormField) -> String {
        self.errors
            .get(&field)
            .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape_html(msg)))
            .unwrap_or_default()
    }
}

/// `<input type="date">` only accepts `yyyy-MM-dd`.
fn date_input_value(raw: &str) -> String {
    normalize_birth_date(raw)
        .and_then(|dmy| chrono::NaiveDate::parse_from_str(&dmy, "%d/%m/%Y").ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

const SUBMITTING_SCRIPT: &str = "document.getElementById('waitlist-form').addEventListener('submit',function(e){var b=e.target.querySelector('button[type=submit]');b.disabled=true;b.textContent='Joining Waitlist...';});";

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use url::Url;

    use crate::test_utils::{
        InMemoryWaitlistRepo, InsertFailure, RecordingRevalidator, create_test_entry,
    };

    fn valid_values() -> WaitlistFormValues {
        WaitlistFormValues {
            full_name: "Asha Patel".into(),
            email: "asha@example.com".into(),
            date_of_birth: "01/01/1995".into(),
            city: "Pune".into(),
            state: "maharashtra".into(),
            gender: "female".into(),
            looking_for: "marriage".into(),
        }
    }

    fn waitlist(repo: Arc<InMemoryWaitlistRepo>) -> WaitlistUseCases {
        WaitlistUseCases::new(repo, Arc::new(RecordingRevalidator::default()))
    }

    fn meta() -> PageMeta {
        PageMeta::waitlist(&Url::parse("https://nexconnectt.com").unwrap())
    }

    #[test]
    fn valid_values_build_the_payload() {
        let submission = validate(&valid_values()).unwrap();
        assert_eq!(submission.name, "Asha Patel");
        assert_eq!(submission.date_of_birth, "01/01/1995");
        assert_eq!(submission.looking_for, "marriage");
    }

    #[test]
    fn date_picker_value_is_reformatted() {
        let mut values = valid_values();
        values.date_of_birth = "1995-01-31".into();
        assert_eq!(validate(&values).unwrap().date_of_birth, "31/01/1995");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&WaitlistFormValues::default()).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors[&FormField::FullName], "Full name must be at least 2 characters");
        assert_eq!(errors[&FormField::Email], "Please enter a valid email address");
        assert_eq!(errors[&FormField::State], "Please select your state");
    }

    #[test]
    fn unknown_options_are_rejected() {
        let mut values = valid_values();
        values.state = "atlantis".into();
        values.gender = "MALE".into();
        values.looking_for = "anything".into();

        let errors = validate(&values).unwrap_err();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![FormField::State, FormField::Gender, FormField::LookingFor]
        );
    }

    #[test]
    fn short_name_and_city_are_rejected() {
        let mut values = valid_values();
        values.full_name = " A ".into();
        values.city = "P".into();

        let errors = validate(&values).unwrap_err();
        assert!(errors.contains_key(&FormField::FullName));
        assert!(errors.contains_key(&FormField::City));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_store() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let mut presenter = WaitlistFormPresenter::with_values(WaitlistFormValues {
            email: "broken".into(),
            ..valid_values()
        });

        presenter.submit(&waitlist(repo.clone())).await;

        assert_eq!(presenter.state(), FormState::Idle);
        assert!(presenter.errors().contains_key(&FormField::Email));
        assert!(presenter.notice().is_none());
        assert!(repo.get_all().is_empty());
    }

    #[tokio::test]
    async fn successful_submit_is_terminal() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let uc = waitlist(repo.clone());
        let mut presenter = WaitlistFormPresenter::with_values(valid_values());

        presenter.submit(&uc).await;
        assert_eq!(presenter.state(), FormState::Submitted);
        assert_eq!(
            presenter.notice(),
            Some(&Notice::Success("You're on the waitlist!".into()))
        );

        // A second submit from the confirmation view does nothing.
        presenter.submit(&uc).await;
        assert_eq!(presenter.state(), FormState::Submitted);
        assert_eq!(repo.get_all().len(), 1);

        let html = presenter.render(&meta());
        assert!(html.contains("You're on the list!"));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn duplicate_returns_to_idle_with_error_notice() {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(vec![create_test_entry(|_| {})]));
        let mut presenter = WaitlistFormPresenter::with_values(WaitlistFormValues {
            email: "ASHA@example.com".into(),
            ..valid_values()
        });

        presenter.submit(&waitlist(repo)).await;

        assert_eq!(presenter.state(), FormState::Idle);
        assert_eq!(
            presenter.notice(),
            Some(&Notice::Error("This email is already on the waitlist.".into()))
        );
        let html = presenter.render(&meta());
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(r#"value="ASHA@example.com""#));
    }

    #[tokio::test]
    async fn store_failure_keeps_form_editable() {
        let repo = Arc::new(InMemoryWaitlistRepo::new().failing_inserts(InsertFailure::Unavailable));
        let mut presenter = WaitlistFormPresenter::with_values(valid_values());

        presenter.submit(&waitlist(repo)).await;

        assert_eq!(presenter.state(), FormState::Idle);
        assert!(matches!(presenter.notice(), Some(Notice::Error(_))));
        assert!(presenter.render(&meta()).contains("<form"));
    }

    #[test]
    fn idle_form_renders_every_field_and_option() {
        let html = WaitlistFormPresenter::new().render(&meta());
        for field in ["fullName", "email", "dateOfBirth", "city", "state", "gender", "lookingFor"] {
            assert!(html.contains(&format!(r#"name="{field}""#)), "missing {field}");
        }
        assert!(html.contains(r#"<option value="tamil-nadu">Tamil Nadu</option>"#));
        assert!(html.contains(r#"<option value="prefer-not-to-say">Prefer not to say</option>"#));
        assert!(html.contains(r#"<option value="networking">Professional Networking</option>"#));
        assert!(html.contains("Join the Waitlist</button>"));
        assert!(!html.contains(r#"class="field-error""#));
    }

    #[test]
    fn rerendered_form_keeps_values_escaped_and_selected() {
        let presenter = WaitlistFormPresenter::with_values(WaitlistFormValues {
            full_name: r#"<b>"Asha"</b>"#.into(),
            ..valid_values()
        });
        let html = presenter.render(&meta());

        assert!(html.contains("&lt;b&gt;&quot;Asha&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>\"Asha\"</b>"));
        assert!(html.contains(r#"<option value="maharashtra" selected>"#));
        assert!(html.contains(r#"value="1995-01-01""#));
    }

    #[test]
    fn submitting_state_disables_the_button() {
        let mut presenter = WaitlistFormPresenter::with_values(valid_values());
        presenter.state = FormState::Submitting;

        let html = presenter.render(&meta());
        assert!(html.contains(r#"class="btn-primary" disabled>Joining Waitlist..."#));
    }
}
