//! Keyword rules deciding when the chat co-pilot must hand a conversation
//! to a human recruiter, and when a conversation has run its course.
//!
//! This is deliberately a rule list, not a classifier. The rules are OR'd
//! and checked in order against the latest message only; changing the
//! keyword sets changes behavior materially, so additions belong here and
//! nowhere else.

const COMPENSATION_TERMS: &[&str] = &["salary", "compensation", "pay"];
const NEGOTIATION_TERMS: &[&str] = &["negotiat", "higher", "more"];
const BENEFITS_TERMS: &[&str] = &["benefits", "insurance", "401k", "stock"];
const VISA_TERMS: &[&str] = &["visa", "sponsorship", "work authorization"];
const COMPLAINT_TERMS: &[&str] = &["complaint", "unhappy", "issue", "problem"];
const DISQUALIFICATION_PHRASES: &[&str] = &["don't have", "no experience", "not qualified"];

const APPLIED_PHRASES: &[&str] = &["i applied", "i have applied", "i've applied", "submitted"];
const DECLINED_PHRASES: &[&str] = &["not interested", "no thanks", "decline", "found another"];
const ACKNOWLEDGEMENT_PHRASES: &[&str] = &["thank", "got it", "will do", "sounds good", "okay", "ok"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Whether a recruiter has to take over before the bot replies to
/// `last_message_text`. `non_negotiables` are the hard requirements
/// configured for the job; only rule 5 consults them.
pub fn needs_intervention(last_message_text: &str, non_negotiables: &[String]) -> bool {
    let text = last_message_text.to_lowercase();

    // 1. Salary negotiation attempts.
    if contains_any(&text, COMPENSATION_TERMS) && contains_any(&text, NEGOTIATION_TERMS) {
        return true;
    }

    // 2. Benefits questions.
    if contains_any(&text, BENEFITS_TERMS) {
        return true;
    }

    // 3. Visa / work-authorization questions.
    if contains_any(&text, VISA_TERMS) {
        return true;
    }

    // 4. Complaints.
    if contains_any(&text, COMPLAINT_TERMS) {
        return true;
    }

    // 5. Candidate admits missing something while the job carries
    //    non-negotiable requirements.
    if contains_any(&text, DISQUALIFICATION_PHRASES) && !non_negotiables.is_empty() {
        return true;
    }

    false
}

/// Whether the latest candidate turn closes out the conversation: they
/// applied, they declined, or they acknowledged the application link the
/// bot just handed them.
pub fn is_conversation_complete(last_message_text: &str, last_ai_reply_text: &str) -> bool {
    let text = last_message_text.to_lowercase();

    if contains_any(&text, APPLIED_PHRASES) {
        return true;
    }

    if contains_any(&text, DECLINED_PHRASES) {
        return true;
    }

    let reply = last_ai_reply_text.to_lowercase();
    let bot_supplied_link = reply.contains("http") || reply.contains("apply");
    bot_supplied_link && contains_any(&text, ACKNOWLEDGEMENT_PHRASES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_negotiation_triggers_intervention() {
        assert!(needs_intervention("Can we negotiate a higher salary?", &[]));
    }

    #[test]
    fn plain_enthusiasm_does_not_trigger() {
        assert!(!needs_intervention(
            "I love this role, when do I start?",
            &[]
        ));
    }

    #[test]
    fn salary_mention_alone_is_not_enough() {
        assert!(!needs_intervention("What salary does the role list?", &[]));
    }

    #[test]
    fn benefits_questions_always_escalate() {
        assert!(needs_intervention("Does the package include insurance?", &[]));
        assert!(needs_intervention("Is there a 401k match?", &[]));
    }

    #[test]
    fn visa_questions_always_escalate() {
        assert!(needs_intervention(
            "Would you offer visa sponsorship for this position?",
            &[]
        ));
    }

    #[test]
    fn complaints_always_escalate() {
        assert!(needs_intervention(
            "I'm unhappy with how the interview went",
            &[]
        ));
    }

    #[test]
    fn disqualification_needs_non_negotiables_present() {
        let hard_requirements = vec!["5 years of Kubernetes".to_string()];
        assert!(needs_intervention(
            "I don't have that certification",
            &hard_requirements
        ));
        assert!(!needs_intervention("I don't have that certification", &[]));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(needs_intervention("CAN WE NEGOTIATE A HIGHER SALARY?", &[]));
    }

    #[test]
    fn applied_and_declined_close_the_conversation() {
        assert!(is_conversation_complete("I applied just now, thanks!", ""));
        assert!(is_conversation_complete("I've applied via the portal", ""));
        assert!(is_conversation_complete("Sorry, not interested anymore", ""));
    }

    #[test]
    fn acknowledging_an_application_link_closes_it() {
        let reply = "Great! You can apply here: https://jobs.example.com/123";
        assert!(is_conversation_complete("Thanks, got it", reply));
        assert!(!is_conversation_complete("Thanks, got it", "Tell me more about your experience"));
    }

    #[test]
    fn open_questions_keep_the_conversation_going() {
        assert!(!is_conversation_complete(
            "What does the team work on day to day?",
            "The team builds the search stack."
        ));
    }
}
