use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

const SKILLS_WEIGHT: f64 = 40.0;

const EXPERIENCE_EXACT: f64 = 25.0;
const EXPERIENCE_NEAR: f64 = 15.0;
const EXPERIENCE_LOOSE: f64 = 5.0;

const SALARY_EXACT: f64 = 20.0;
const SALARY_NEAR: f64 = 15.0;
const SALARY_LOOSE: f64 = 8.0;

const LOCATION_MATCH: f64 = 15.0;
const LOCATION_REMOTE_FALLBACK: f64 = 10.0;

const EMPLOYMENT_TYPE_BONUS: f64 = 5.0;

/// Heuristic fit between a candidate profile and a job posting.
///
/// Weighted sum over skills (40), experience (25), salary (20), location
/// (15) and an employment-type bonus (5). A dimension with missing data on
/// either side contributes nothing rather than erroring, so a sparse
/// profile can legitimately score 0. Deterministic, no side effects.
pub fn match_score(candidate: &CandidateProfile, job: &JobPosting) -> i32 {
    let total = score_skills(&candidate.skills, &job.required_skills)
        + score_experience(
            candidate.total_experience_years,
            job.experience_min,
            job.experience_max,
        )
        + score_salary(candidate.expected_compensation, job.salary_min, job.salary_max)
        + score_location(&candidate.preferred_locations, job)
        + score_employment_type(candidate, job);

    // The weight table cannot exceed 100, but clamp anyway so a future
    // weight edit cannot silently leak out of range.
    (total.round() as i32).clamp(0, 100)
}

/// Case-insensitive bidirectional substring test, so "React" matches
/// "React.js" regardless of which side carries the suffix.
fn text_overlaps(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

fn score_skills(candidate_skills: &[String], job_skills: &[String]) -> f64 {
    if candidate_skills.is_empty() || job_skills.is_empty() {
        return 0.0;
    }

    let matched = candidate_skills
        .iter()
        .filter(|skill| job_skills.iter().any(|required| text_overlaps(skill, required)))
        .count();

    let denominator = candidate_skills.len().max(job_skills.len());
    matched as f64 / denominator as f64 * SKILLS_WEIGHT
}

fn score_experience(years: Option<f64>, min: Option<f64>, max: Option<f64>) -> f64 {
    let (years, min, max) = match (years, min, max) {
        (Some(y), Some(lo), Some(hi)) => (y, lo, hi),
        _ => return 0.0,
    };

    if years >= min && years <= max {
        EXPERIENCE_EXACT
    } else if years >= min * 0.8 && years <= max * 1.2 {
        EXPERIENCE_NEAR
    } else if years >= min * 0.6 && years <= max * 1.5 {
        EXPERIENCE_LOOSE
    } else {
        0.0
    }
}

fn score_salary(expected: Option<i64>, min: Option<i64>, max: Option<i64>) -> f64 {
    let (expected, min, max) = match (expected, min, max) {
        (Some(e), Some(lo), Some(hi)) => (e as f64, lo as f64, hi as f64),
        _ => return 0.0,
    };

    if expected >= min && expected <= max {
        SALARY_EXACT
    } else if expected >= min * 0.8 && expected <= max * 1.2 {
        SALARY_NEAR
    } else if expected >= min * 0.6 && expected <= max * 1.5 {
        SALARY_LOOSE
    } else {
        0.0
    }
}

fn score_location(preferred: &[String], job: &JobPosting) -> f64 {
    if preferred.is_empty() || job.locations.is_empty() {
        return 0.0;
    }

    let overlap = preferred
        .iter()
        .any(|wanted| job.locations.iter().any(|loc| text_overlaps(wanted, loc)));

    if overlap {
        LOCATION_MATCH
    } else if job.is_remote_friendly() {
        LOCATION_REMOTE_FALLBACK
    } else {
        0.0
    }
}

fn score_employment_type(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    match candidate.preferred_employment_type {
        Some(preferred) if preferred == job.employment_type => EMPLOYMENT_TYPE_BONUS,
        _ => 0.0,
    }
}
