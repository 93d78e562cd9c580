//! Turn classification.
//!
//! The win/lose heuristics are lower-cased substring matches against fixed
//! phrase sets. The sets live here as plain data behind a trait so the state
//! machine never touches them directly and a real classifier can be swapped
//! in without changing session code.

/// Classifies the two sides of a completed exchange.
pub trait TurnClassifier: Send + Sync {
    /// Did the counterpart concede (acknowledge, apologize, agree)?
    /// A concession ends the scenario in success.
    fn is_concession(&self, reply: &str) -> bool;

    /// Did the user cave in instead of holding a boundary?
    fn is_submissive(&self, user_text: &str) -> bool;

    /// Does the counterpart reply carry a toxic pattern (blame, absolutes,
    /// dismissal)? Toxic replies cost more health than neutral ones.
    fn is_toxic(&self, reply: &str) -> bool;
}

/// The stock keyword-list classifier.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    pub concession_phrases: Vec<String>,
    pub submissive_phrases: Vec<String>,
    pub toxic_phrases: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            concession_phrases: to_owned(&["understand", "sorry", "you're right"]),
            submissive_phrases: to_owned(&[
                "okay",
                "fine",
                "you are right",
                "i will do it",
                "whatever you want",
            ]),
            toxic_phrases: to_owned(&[
                "you always",
                "never",
                "should have",
                "your fault",
                "whatever",
            ]),
        }
    }
}

fn to_owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

fn contains_any(text: &str, phrases: &[String]) -> bool {
    let lowered = text.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
}

impl TurnClassifier for KeywordClassifier {
    fn is_concession(&self, reply: &str) -> bool {
        contains_any(reply, &self.concession_phrases)
    }

    fn is_submissive(&self, user_text: &str) -> bool {
        contains_any(user_text, &self.submissive_phrases)
    }

    fn is_toxic(&self, reply: &str) -> bool {
        contains_any(reply, &self.toxic_phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concession_is_case_insensitive() {
        let c = KeywordClassifier::default();
        assert!(c.is_concession("I'm SORRY, I went too far."));
        assert!(c.is_concession("Maybe you're right about that."));
        assert!(!c.is_concession("That's not how I see it."));
    }

    #[test]
    fn test_submissive_phrases() {
        let c = KeywordClassifier::default();
        assert!(c.is_submissive("Okay, whatever you want."));
        assert!(c.is_submissive("fine."));
        assert!(!c.is_submissive("No. I'm going out with my friends tonight."));
    }

    #[test]
    fn test_toxic_phrases() {
        let c = KeywordClassifier::default();
        assert!(c.is_toxic("You always ruin everything"));
        assert!(c.is_toxic("It's your fault we argue."));
        assert!(!c.is_toxic("Can we talk about this later?"));
    }

    #[test]
    fn test_custom_phrase_sets() {
        let c = KeywordClassifier {
            concession_phrases: vec!["my mistake".into()],
            submissive_phrases: vec![],
            toxic_phrases: vec![],
        };
        assert!(c.is_concession("ok, my mistake."));
        assert!(!c.is_concession("sorry"));
    }
}
