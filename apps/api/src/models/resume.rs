use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of the resume shape the prompt asks the model to produce.
///
/// The model is not contractually bound to honor the schema, so every field
/// is defaulted and deserialization is best-effort via [`GeneratedResume::from_value`].
/// The raw parsed JSON is what callers receive; this view exists for
/// downstream consumers that want structured access without failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedResume {
    pub name: Option<String>,
    pub title: Option<String>,
    pub contact: Contact,
    pub summary: Option<String>,
    #[serde(rename = "areasOfExpertise")]
    pub areas_of_expertise: Vec<String>,
    pub achievements: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Option<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    /// The prompt asks for a percentage but the model has returned strings,
    /// numbers, and arrays in practice. Kept as raw JSON.
    #[serde(rename = "Estimated_ATS_Score")]
    pub estimated_ats_score: Value,
    #[serde(rename = "Recommendations")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "linkedIn")]
    pub linked_in: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl GeneratedResume {
    /// Best-effort extraction from the parsed model output.
    /// Never fails: a reply that deviates from the schema yields the default view.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_schema() {
        let value = json!({
            "name": "Jane Doe",
            "title": "Software Engineer",
            "contact": {
                "email": "jane@example.com",
                "linkedIn": "linkedin.com/in/janedoe"
            },
            "summary": "Engineer with 6 years of backend experience.",
            "areasOfExpertise": ["Distributed systems"],
            "achievements": ["Cut p99 latency 40%"],
            "experience": [{
                "company": "Acme",
                "role": "Senior Engineer",
                "location": "Remote",
                "startDate": "Jan 2020",
                "endDate": "Present",
                "description": ["Led caching layer rewrite"]
            }],
            "education": {
                "institution": "State University",
                "degree": "BSc Computer Science",
                "startDate": "2012",
                "endDate": "2016"
            },
            "skills": ["Rust", "PostgreSQL"],
            "projects": [{"title": "etlkit", "description": "ETL toolkit", "link": "github.com/jane/etlkit"}],
            "Estimated_ATS_Score": "87%",
            "Recommendations": ["Add a certifications section"]
        });

        let resume = GeneratedResume::from_value(&value);
        assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.linked_in.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].description.len(), 1);
        assert_eq!(resume.estimated_ats_score, json!("87%"));
        assert_eq!(resume.recommendations.len(), 1);
    }

    #[test]
    fn test_from_value_partial_schema_fills_defaults() {
        let value = json!({"name": "Jane Doe", "skills": ["Rust"]});
        let resume = GeneratedResume::from_value(&value);
        assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
        assert!(resume.experience.is_empty());
        assert!(resume.contact.email.is_none());
    }

    #[test]
    fn test_from_value_never_fails_on_shape_mismatch() {
        // `experience` as a string instead of an array — the view degrades
        // to defaults rather than erroring.
        let value = json!({"experience": "six years at Acme"});
        let resume = GeneratedResume::from_value(&value);
        assert!(resume.experience.is_empty());
        assert!(resume.name.is_none());
    }
}
