//! Data structures describing the career profile captured by the form layer.
//!
//! The types in this module form a serialization-friendly model that stays
//! free of the rendering backend. There is exactly one live record at a time;
//! the store hands out a fully-populated value (every field defaults to an
//! empty string or `false`) and the renderer borrows it without mutating it.
//!
//! Field names serialize as camelCase so saved records stay compatible with
//! the JSON produced by earlier versions of the form.

use serde::{Deserialize, Serialize};

/// Seven independent mobility flags. No flag implies another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobilityPreferences {
    /// Willing to move within the same department.
    pub same_department: bool,
    /// Willing to move within the same company.
    pub same_company: bool,
    /// Willing to move within the same business unit.
    pub same_business_unit: bool,
    /// Willing to move across all areas of the company.
    pub all_areas: bool,
    /// Willing to take responsibility outside the home country.
    pub geography_outside_home: bool,
    /// Willing to relocate.
    pub relocate: bool,
    /// Willing to travel.
    pub travel: bool,
}

impl MobilityPreferences {
    /// Returns whether any of the four "willing to move" flags is set.
    pub fn any_move(&self) -> bool {
        self.same_department || self.same_company || self.same_business_unit || self.all_areas
    }

    /// Returns whether any of the geography/relocation/travel flags is set.
    pub fn any_flexibility(&self) -> bool {
        self.geography_outside_home || self.relocate || self.travel
    }

    /// Returns whether any of the seven flags is set.
    pub fn any(&self) -> bool {
        self.any_move() || self.any_flexibility()
    }
}

/// The single structured record of personal and career fields.
///
/// All text fields are optional in the sense that an empty string means "not
/// filled in"; the renderer skips empty fields entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Full name; also drives the exported file name.
    pub full_name: String,
    /// Location / country.
    pub location: String,
    pub education: String,
    pub career_with_us: String,
    pub professional_affiliations: String,
    pub languages: String,
    pub willingness: MobilityPreferences,
    pub current_responsibilities: String,
    pub top_skills_enjoy: String,
    pub top_three_skills_current: String,
    pub what_excites_you: String,
    pub challenging_aspects: String,
    pub skills_to_build_1to3: String,
    pub desired_next_role: String,
    pub opportunities_needed: String,
    pub skills_to_build_3to5: String,
    pub long_term_aspirations: String,
    pub opportunities_for_aspirations: String,
}

impl ProfileRecord {
    /// The nine reflection questions in the order they appear in the form and
    /// in the exported document, paired with their answers.
    pub fn reflection_entries(&self) -> [(&'static str, &str); 9] {
        [
            (
                "Top three skills enjoyed in current role",
                self.top_three_skills_current.as_str(),
            ),
            (
                "What excites you most about current work",
                self.what_excites_you.as_str(),
            ),
            (
                "Challenging aspects of current role",
                self.challenging_aspects.as_str(),
            ),
            (
                "Skills to build (1-3 years)",
                self.skills_to_build_1to3.as_str(),
            ),
            ("Desired next role", self.desired_next_role.as_str()),
            (
                "Opportunities needed for next role",
                self.opportunities_needed.as_str(),
            ),
            (
                "Skills to build (3-5 years)",
                self.skills_to_build_3to5.as_str(),
            ),
            (
                "Long-term career aspirations",
                self.long_term_aspirations.as_str(),
            ),
            (
                "Opportunities needed for long-term goals",
                self.opportunities_for_aspirations.as_str(),
            ),
        ]
    }

    /// Returns whether at least one reflection answer is non-empty.
    pub fn has_reflection_answers(&self) -> bool {
        self.reflection_entries()
            .iter()
            .any(|(_, answer)| !answer.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{MobilityPreferences, ProfileRecord};

    #[test]
    fn default_record_is_fully_populated_and_empty() {
        let record = ProfileRecord::default();
        assert!(record.full_name.is_empty());
        assert!(record.location.is_empty());
        assert!(!record.willingness.any());
        assert!(!record.has_reflection_answers());
    }

    #[test]
    fn mobility_groups_are_independent() {
        let mobility = MobilityPreferences {
            travel: true,
            ..MobilityPreferences::default()
        };
        assert!(!mobility.any_move());
        assert!(mobility.any_flexibility());
        assert!(mobility.any());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let record = ProfileRecord {
            full_name: "Jane".into(),
            skills_to_build_1to3: "Rust".into(),
            ..ProfileRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["fullName"], "Jane");
        assert_eq!(json["skillsToBuild1to3"], "Rust");
        assert_eq!(json["willingness"]["sameBusinessUnit"], false);
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"fullName":"Ada","willingness":{"relocate":true}}"#)
                .expect("deserialize record");
        assert_eq!(record.full_name, "Ada");
        assert!(record.willingness.relocate);
        assert!(!record.willingness.travel);
        assert!(record.education.is_empty());
    }
}
