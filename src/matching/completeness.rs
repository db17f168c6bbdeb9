use crate::models::candidate::CandidateProfile;

/// Number of checklist entries in [`profile_completeness`].
const CHECKLIST_SIZE: u32 = 14;

/// How complete a candidate profile is, as a 0-100 percentage of a fixed
/// 14-field checklist. Every field counts the same; a populated field is a
/// `Some` value (non-empty for strings and lists). Email is excluded:
/// registration already requires it, so it would be a free point on every
/// profile.
pub fn profile_completeness(candidate: &CandidateProfile) -> i32 {
    let populated = [
        has_text(candidate.name.as_deref()),
        has_text(candidate.phone.as_deref()),
        candidate.dob.is_some(),
        candidate.total_experience_years.is_some(),
        has_text(candidate.current_role.as_deref()),
        has_text(candidate.expected_role.as_deref()),
        !candidate.skills.is_empty(),
        !candidate.preferred_locations.is_empty(),
        candidate.current_compensation.is_some(),
        candidate.expected_compensation.is_some(),
        candidate.notice_period_days.is_some(),
        candidate.preferred_employment_type.is_some(),
        candidate.preferred_work_mode.is_some(),
        has_text(candidate.resume_url.as_deref()),
    ]
    .into_iter()
    .filter(|populated| *populated)
    .count() as u32;

    ((populated as f64 / CHECKLIST_SIZE as f64 * 100.0).round() as i32).min(100)
}

fn has_text(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{EmploymentType, WorkMode};
    use chrono::NaiveDate;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn empty_profile() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            name: None,
            email: "nobody@example.com".into(),
            phone: None,
            dob: None,
            total_experience_years: None,
            current_role: None,
            expected_role: None,
            skills: Json(vec![]),
            preferred_locations: Json(vec![]),
            current_compensation: None,
            expected_compensation: None,
            notice_period_days: None,
            preferred_employment_type: None,
            preferred_work_mode: None,
            resume_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn full_profile() -> CandidateProfile {
        CandidateProfile {
            name: Some("Alice".into()),
            email: "alice@example.com".into(),
            phone: Some("+1 555 0100".into()),
            dob: NaiveDate::from_ymd_opt(1992, 4, 1),
            total_experience_years: Some(6.0),
            current_role: Some("Backend Engineer".into()),
            expected_role: Some("Staff Engineer".into()),
            skills: Json(vec!["Rust".into()]),
            preferred_locations: Json(vec!["Remote".into()]),
            current_compensation: Some(110_000),
            expected_compensation: Some(130_000),
            notice_period_days: Some(30),
            preferred_employment_type: Some(EmploymentType::FullTime),
            preferred_work_mode: Some(WorkMode::Remote),
            resume_url: Some("https://cv.example.com/alice.pdf".into()),
            ..empty_profile()
        }
    }

    #[test]
    fn empty_profile_scores_zero() {
        assert_eq!(profile_completeness(&empty_profile()), 0);
    }

    #[test]
    fn full_profile_scores_one_hundred() {
        assert_eq!(profile_completeness(&full_profile()), 100);
    }

    #[test]
    fn each_populated_field_moves_the_needle() {
        let mut profile = empty_profile();
        profile.name = Some("Bob".into());
        assert_eq!(profile_completeness(&profile), 7); // round(1/14 * 100)

        profile.skills = Json(vec!["Rust".into()]);
        assert_eq!(profile_completeness(&profile), 14);
    }

    #[test]
    fn work_mode_preference_counts() {
        let mut profile = empty_profile();
        profile.preferred_work_mode = Some(WorkMode::Hybrid);
        assert_eq!(profile_completeness(&profile), 7);
    }

    #[test]
    fn email_is_not_part_of_the_checklist() {
        // Every registered candidate has an email, so it never scores.
        assert_eq!(profile_completeness(&empty_profile()), 0);
    }

    #[test]
    fn whitespace_only_strings_do_not_count() {
        let mut profile = empty_profile();
        profile.name = Some("   ".into());
        profile.phone = Some("+1 555 0102".into());
        assert_eq!(profile_completeness(&profile), 7);
    }

    #[test]
    fn half_filled_profile_lands_mid_range() {
        let mut profile = empty_profile();
        profile.name = Some("Dave".into());
        profile.phone = Some("+1 555 0101".into());
        profile.skills = Json(vec!["Go".into()]);
        profile.preferred_locations = Json(vec!["Austin".into()]);
        profile.total_experience_years = Some(3.0);
        profile.expected_compensation = Some(90_000);
        profile.notice_period_days = Some(14);
        assert_eq!(profile_completeness(&profile), 50); // 7 of 14
    }
}
