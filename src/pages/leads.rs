//! Lead capture forms (Get Demo / Free Trial)
//!
//! Submissions are validated and acknowledged. Nothing is stored or sent.

use serde::Deserialize;
use thiserror::Error;

use super::html::escape;
use super::Page;

pub const INDUSTRIES: [&str; 4] = ["Manufacturing", "Automotive", "Energy", "Aerospace"];

pub const LEAD_RECEIVED: &str = "Request received successfully! Check your email for next steps.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Trial,
    Demo,
}

impl LeadKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "trial" => Some(LeadKind::Trial),
            "demo" => Some(LeadKind::Demo),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            LeadKind::Trial => "trial",
            LeadKind::Demo => "demo",
        }
    }

    pub fn page(&self) -> Page {
        match self {
            LeadKind::Trial => Page::FreeTrial,
            LeadKind::Demo => Page::GetDemo,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeadKind::Trial => "Start Your 14-Day Free Trial",
            LeadKind::Demo => "Schedule a Personalized Demo",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid work email")]
    InvalidEmail,

    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),
}

/// Submitted lead form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: String,
    /// Demo only
    #[serde(default)]
    pub preferred_date: Option<String>,
    /// Demo only
    #[serde(default)]
    pub challenges: Option<String>,
}

impl LeadForm {
    /// Check required fields
    pub fn validate(&self) -> Result<(), LeadError> {
        let required = [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Work Email", &self.email),
            ("Company Name", &self.company),
            ("Industry", &self.industry),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(LeadError::MissingField(label));
            }
        }

        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => return Err(LeadError::InvalidEmail),
        }

        if !INDUSTRIES.contains(&self.industry.as_str()) {
            return Err(LeadError::UnknownIndustry(self.industry.clone()));
        }

        Ok(())
    }
}

fn text_input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        r#"<div><label for="{name}">{label}</label><input type="{kind}" id="{name}" name="{name}" value="{value}" required></div>"#,
        value = escape(value),
    )
}

pub fn render(kind: LeadKind, previous: Option<&LeadForm>) -> String {
    let empty = LeadForm::default();
    let form = previous.unwrap_or(&empty);

    let industries: String = INDUSTRIES
        .iter()
        .map(|i| {
            let selected = if form.industry == *i { " selected" } else { "" };
            format!("<option{}>{}</option>", selected, i)
        })
        .collect();

    let demo_fields = match kind {
        LeadKind::Demo => format!(
            r#"<label for="preferred_date">Preferred Date</label>
        <input type="date" id="preferred_date" name="preferred_date" value="{}">
        <label for="challenges">What specific challenges are you facing?</label>
        <textarea id="challenges" name="challenges" rows="4">{}</textarea>"#,
            escape(form.preferred_date.as_deref().unwrap_or_default()),
            escape(form.challenges.as_deref().unwrap_or_default()),
        ),
        LeadKind::Trial => String::new(),
    };

    format!(
        r#"<h1>{title}</h1>
<form method="POST" action="/leads/{slug}" class="neon-box">
    <div class="columns">{first}{last}</div>
    {email}
    {company}
    <label for="industry">Industry</label>
    <select id="industry" name="industry">{industries}</select>
    {demo_fields}
    <button type="submit">Submit Request</button>
</form>"#,
        title = kind.title(),
        slug = kind.slug(),
        first = text_input("First Name", "first_name", "text", &form.first_name),
        last = text_input("Last Name", "last_name", "text", &form.last_name),
        email = text_input("Work Email", "email", "email", &form.email),
        company = text_input("Company Name", "company", "text", &form.company),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeadForm {
        LeadForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@factory.example".to_string(),
            company: "Analytical Engines".to_string(),
            industry: "Manufacturing".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_lead() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = valid();
        form.company = "  ".to_string();
        assert_eq!(form.validate(), Err(LeadError::MissingField("Company Name")));

        let empty = LeadForm::default();
        assert_eq!(empty.validate(), Err(LeadError::MissingField("First Name")));
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ada", "@factory.example", "ada@"] {
            let mut form = valid();
            form.email = email.to_string();
            assert_eq!(form.validate(), Err(LeadError::InvalidEmail), "email: {}", email);
        }
    }

    #[test]
    fn test_unknown_industry() {
        let mut form = valid();
        form.industry = "Retail".to_string();
        assert_eq!(
            form.validate(),
            Err(LeadError::UnknownIndustry("Retail".to_string()))
        );
    }

    #[test]
    fn test_demo_form_has_extra_fields() {
        let demo = render(LeadKind::Demo, None);
        let trial = render(LeadKind::Trial, None);

        assert!(demo.contains("Schedule a Personalized Demo"));
        assert!(demo.contains(r#"name="challenges""#));
        assert!(trial.contains("Start Your 14-Day Free Trial"));
        assert!(!trial.contains(r#"name="challenges""#));
        assert!(trial.contains(r#"action="/leads/trial""#));
    }

    #[test]
    fn test_form_echoes_previous_values() {
        let mut form = valid();
        form.first_name = "<Ada>".to_string();
        let html = render(LeadKind::Trial, Some(&form));

        assert!(html.contains(r#"value="&lt;Ada&gt;""#));
        assert!(html.contains("<option selected>Manufacturing</option>"));
    }
}
