use jobboard_backend::dto::recommendation_dto::RecommendedJobsResponse;
use jobboard_backend::matching::{
    is_conversation_complete, match_score, needs_intervention, profile_completeness, rank,
    MatchResult, RankOptions,
};
use jobboard_backend::models::candidate::CandidateProfile;
use jobboard_backend::models::job::{EmploymentType, JobPosting, JobStatus, WorkMode};
use sqlx::types::Json;
use uuid::Uuid;

fn candidate() -> CandidateProfile {
    CandidateProfile {
        id: Uuid::new_v4(),
        name: Some("Alice".into()),
        email: "alice@example.com".into(),
        phone: Some("+1 555 0100".into()),
        dob: None,
        total_experience_years: Some(4.0),
        current_role: Some("Frontend Engineer".into()),
        expected_role: None,
        skills: Json(vec!["React".into(), "Node.js".into()]),
        preferred_locations: Json(vec!["Remote".into()]),
        current_compensation: None,
        expected_compensation: Some(95_000),
        notice_period_days: None,
        preferred_employment_type: None,
        preferred_work_mode: None,
        resume_url: None,
        created_at: None,
        updated_at: None,
    }
}

fn job(title: &str, skills: Vec<&str>) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        title: title.into(),
        company: "Acme".into(),
        description: None,
        required_skills: Json(skills.into_iter().map(String::from).collect()),
        experience_min: Some(3.0),
        experience_max: Some(7.0),
        salary_min: Some(80_000),
        salary_max: Some(120_000),
        locations: Json(vec!["Remote".into()]),
        non_negotiables: Json(vec![]),
        employment_type: EmploymentType::FullTime,
        work_mode: WorkMode::Remote,
        status: JobStatus::Active,
        application_deadline: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn spec_example_scores_eighty() {
    let score = match_score(&candidate(), &job("Frontend Engineer", vec!["React", "TypeScript"]));
    assert_eq!(score, 80);
}

#[test]
fn score_stays_in_bounds_for_odd_inputs() {
    let mut c = candidate();
    c.total_experience_years = Some(1000.0);
    c.expected_compensation = Some(0);
    c.skills = Json(vec!["".into(), "  ".into()]);

    let mut j = job("Odd", vec![""]);
    j.experience_min = Some(0.0);
    j.experience_max = Some(0.0);
    j.salary_min = Some(0);
    j.salary_max = Some(0);

    let score = match_score(&c, &j);
    assert!((0..=100).contains(&score));
}

#[test]
fn ranking_filters_sorts_and_caps() {
    let c = candidate();
    let mut jobs = Vec::new();
    // A dozen strong matches and one that cannot clear the threshold.
    for i in 0..12 {
        jobs.push(job(&format!("Job {}", i), vec!["React", "Node.js"]));
    }
    let mut dud = job("Dud", vec!["Embedded C"]);
    dud.experience_min = Some(15.0);
    dud.experience_max = Some(20.0);
    dud.salary_min = Some(10_000);
    dud.salary_max = Some(15_000);
    dud.locations = Json(vec!["Oslo".into()]);
    dud.work_mode = WorkMode::Onsite;
    jobs.push(dud);

    let ranked = rank(&c, &jobs, RankOptions::default());

    assert_eq!(ranked.len(), 10);
    assert!(ranked.iter().all(|r| r.score > 20));
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));

    // Stable: with every strong job scoring the same, input order holds.
    let expected: Vec<Uuid> = jobs.iter().take(10).map(|j| j.id).collect();
    let actual: Vec<Uuid> = ranked.iter().map(|r| r.job_id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn ranking_empty_inputs_is_safe() {
    assert!(rank(&candidate(), &[], RankOptions::default()).is_empty());
}

#[test]
fn intervention_examples_from_the_field() {
    assert!(needs_intervention("Can we negotiate a higher salary?", &[]));
    assert!(!needs_intervention("I love this role, when do I start?", &[]));
    assert!(needs_intervention("Do you sponsor a visa?", &[]));
    assert!(needs_intervention(
        "I don't have a degree, is that a problem?",
        &["Bachelor's degree".to_string()]
    ));
}

#[test]
fn conversation_completion_detection() {
    assert!(is_conversation_complete("I applied, thank you!", ""));
    assert!(is_conversation_complete(
        "ok thanks",
        "Here is the link to apply: https://example.com/jobs/1"
    ));
    assert!(!is_conversation_complete(
        "Can you tell me more about the team?",
        "Sure, the team has five engineers."
    ));
}

#[test]
fn completeness_tracks_populated_fields() {
    let c = candidate();
    let score = profile_completeness(&c);
    // name, phone, experience, current role, skills, locations,
    // expected compensation: 7 of 14. Email never counts.
    assert_eq!(score, 50);
}

#[test]
fn recommendation_response_uses_camel_case_contract() {
    let response = RecommendedJobsResponse {
        jobs: vec![MatchResult {
            job_id: Uuid::nil(),
            score: 42,
        }],
        total_jobs: 7,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["totalJobs"], 7);
    assert_eq!(json["jobs"][0]["score"], 42);
    assert!(json["jobs"][0]["jobId"].is_string());
}
