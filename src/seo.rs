use serde::Serialize;

use crate::content::Profile;

/// schema.org `Person` record embedded in the page head as JSON-LD.
#[derive(Debug, Serialize)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
}

impl<'a> From<&'a Profile> for PersonSchema<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name,
            job_title: profile.job_title,
            email: profile.mailto(),
            same_as: profile.same_as().to_vec(),
        }
    }
}

/// Serializes the profile for a `<script type="application/ld+json">` body.
///
/// `</` is escaped so the payload can never close its script element early.
pub fn person_json_ld(profile: &Profile) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&PersonSchema::from(profile))?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;

    #[test]
    fn test_person_json_ld() {
        let json = person_json_ld(&PROFILE).expect("profile should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("output should be valid json");
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Hrishikesh Kumar");
        assert_eq!(value["email"], "mailto:hrishikeshkumar16@gmail.com");
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_script_close_is_escaped() {
        let profile = Profile {
            name: "</script><script>alert(1)</script>",
            initials: "X",
            job_title: "",
            email: "x@example.com",
            linkedin: "",
            github: "",
        };
        let json = person_json_ld(&profile).expect("profile should serialize");
        assert!(!json.contains("</"));
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("escaped output should still parse");
        assert_eq!(value["name"], "</script><script>alert(1)</script>");
    }
}
