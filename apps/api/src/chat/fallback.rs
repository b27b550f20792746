//! Rule-based assistant replies used when the model host is unavailable.
//!
//! Intent detection is an ordered keyword table; the first intent with a
//! matching cue wins, so broader intents (search) sit above narrower ones.

/// One turn of prior conversation, as sent by the UI.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatTurn {
    pub sender: String,
    pub text: String,
}

const SEARCH_CUES: &[&str] = &["find", "search", "candidate"];

/// Ordered (cues, reply) table for topic intents, checked after the search
/// intent.
const TOPIC_REPLIES: &[(&[&str], &str)] = &[
    (
        &["react", "javascript", "frontend"],
        "Great! I can help you find frontend developers. We have candidates with React, \
         JavaScript, TypeScript, and other frontend technologies. Would you like me to \
         search for React developers specifically?",
    ),
    (
        &["python", "java", "backend"],
        "Excellent! I can help you find backend developers. We have candidates with Python, \
         Java, Node.js, and other backend technologies. Would you like me to search for \
         Python developers specifically?",
    ),
    (
        &["devops", "aws", "cloud"],
        "Perfect! I can help you find DevOps and cloud engineers. We have candidates with \
         AWS, Azure, Kubernetes, Docker, and other DevOps tools. Would you like me to \
         search for DevOps engineers?",
    ),
    (
        &["mobile", "ios", "android"],
        "Great choice! I can help you find mobile developers. We have candidates with iOS, \
         Android, React Native, and Flutter experience. Would you like me to search for \
         mobile developers?",
    ),
    (
        &["data", "machine learning", "ai"],
        "Excellent! I can help you find data scientists and ML engineers. We have candidates \
         with Python, TensorFlow, PyTorch, and other data science tools. Would you like me \
         to search for data scientists?",
    ),
    (
        &["skill", "experience", "requirement"],
        "I can search our candidate database based on skills and experience. Please describe \
         the technical skills, years of experience, or specific requirements you're looking \
         for.",
    ),
    (
        &["help", "how"],
        "I'm your AI talent assistant! I can help you:\n\
         \u{2022} Find candidates with specific skills (React, Python, DevOps, etc.)\n\
         \u{2022} Search by experience level (junior, senior, lead)\n\
         \u{2022} Analyze candidate pools and provide insights\n\
         \u{2022} Suggest search strategies\n\n\
         Just tell me what you're looking for!",
    ),
    (
        &["hello", "hi", "hey"],
        "Hello! I'm your AI talent assistant. I can help you find and analyze candidates. \
         What can I help you with today?",
    ),
    (
        &["thank"],
        "You're welcome! I'm here to help you find the best candidates. Is there anything \
         else you'd like to search for?",
    ),
];

const SEARCH_REPLY: &str = "I can help you find candidates! Try searching for specific \
    skills like 'React developer', 'Python engineer', or 'DevOps specialist'. What type \
    of candidate are you looking for?";

const REFINE_REPLY: &str = "I can help you refine your search! You can search for \
    candidates by specific skills, technologies, or experience levels. What specific \
    requirements are you looking for?";

const DEFAULT_REPLY: &str = "I'm here to help you with candidate search and recruitment. \
    You can ask me to:\n\
    \u{2022} Find candidates with specific skills (e.g., 'React developers', 'Python engineers')\n\
    \u{2022} Search by technology stack (e.g., 'AWS DevOps', 'Mobile developers')\n\
    \u{2022} Get insights about our candidate pool\n\
    \u{2022} Refine your search criteria\n\n\
    What would you like to search for?";

/// Picks a canned reply by keyword intent. Deterministic; the recent
/// conversation only decides whether a search request reads as a refinement.
pub fn fallback_reply(message: &str, history: &[ChatTurn]) -> String {
    let message_lower = message.to_lowercase();

    if SEARCH_CUES.iter().any(|cue| message_lower.contains(cue)) {
        let has_recent_search = history.iter().rev().take(3).any(|turn| {
            let text = turn.text.to_lowercase();
            SEARCH_CUES.iter().any(|cue| text.contains(cue))
        });
        return if has_recent_search {
            REFINE_REPLY.to_string()
        } else {
            SEARCH_REPLY.to_string()
        };
    }

    for (cues, reply) in TOPIC_REPLIES {
        if cues.iter().any(|cue| message_lower.contains(cue)) {
            return reply.to_string();
        }
    }

    DEFAULT_REPLY.to_string()
}
