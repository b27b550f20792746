//! Shared keyword vocabularies for query interpretation and scoring.
//!
//! These are immutable configuration data, built once at startup and carried
//! in `AppState` behind an `Arc`. They are injected rather than referenced as
//! globals so tests can substitute smaller vocabularies.

/// Technologies recognized inside a structured "Requirements:" line.
const REQUIREMENT_TECH: &[&str] = &[
    "java",
    "javascript",
    "python",
    "react",
    "angular",
    "vue",
    "node.js",
    "aws",
    "azure",
    "kubernetes",
    "docker",
    "sql",
    "mongodb",
    "postgresql",
    "redis",
    "git",
    "jenkins",
    "terraform",
    "ansible",
];

/// Technology-stack terms scanned over the entire query text. Broader than
/// `REQUIREMENT_TECH` and kept separate: stack mentions inferred from free
/// text score lower than an explicit skills list.
const STACK_TERMS: &[&str] = &[
    "react",
    "angular",
    "vue",
    "javascript",
    "typescript",
    "node.js",
    "express",
    "python",
    "django",
    "flask",
    "fastapi",
    "java",
    "spring",
    "hibernate",
    "c#",
    ".net",
    "asp.net",
    "php",
    "laravel",
    "symfony",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "terraform",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "react native",
    "flutter",
    "swift",
    "kotlin",
    "android",
    "ios",
    "machine learning",
    "ai",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "blockchain",
    "solidity",
    "web3",
    "ethereum",
    "devops",
    "ci/cd",
    "jenkins",
    "gitlab",
    "github actions",
];

/// High-demand specializations that earn a flat bonus per mention.
const SPECIALIZED_SKILLS: &[&str] = &[
    "aws",
    "azure",
    "kubernetes",
    "docker",
    "machine learning",
    "ai",
    "blockchain",
    "devops",
];

/// Skill terms counted across resumes for the quick-search pool summary.
const SUMMARY_SKILLS: &[&str] = &[
    "react",
    "javascript",
    "python",
    "node.js",
    "typescript",
    "java",
    "c++",
    "c#",
    "aws",
    "docker",
    "kubernetes",
    "postgresql",
    "mongodb",
    "mysql",
    "redis",
    "machine learning",
    "ai",
    "deep learning",
    "tensorflow",
    "pytorch",
    "nlp",
    "devops",
    "ci/cd",
    "terraform",
    "ansible",
    "jenkins",
    "git",
    "github",
    "frontend",
    "backend",
    "full-stack",
    "mobile",
    "ios",
    "android",
    "flutter",
];

/// All vocabulary lists used by the search core.
#[derive(Debug, Clone)]
pub struct SignalVocabulary {
    /// Matched against a structured "Requirements:" line to infer skills.
    pub requirement_tech: Vec<String>,
    /// Matched against the whole lower-cased query to collect stack mentions.
    pub stack_terms: Vec<String>,
    /// Flat-bonus specializations matched against resume text.
    pub specialized_skills: Vec<String>,
    /// Counted across resumes for the quick-search summary.
    pub summary_skills: Vec<String>,
}

impl Default for SignalVocabulary {
    fn default() -> Self {
        let to_owned = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect();
        Self {
            requirement_tech: to_owned(REQUIREMENT_TECH),
            stack_terms: to_owned(STACK_TERMS),
            specialized_skills: to_owned(SPECIALIZED_SKILLS),
            summary_skills: to_owned(SUMMARY_SKILLS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_lowercase() {
        let vocab = SignalVocabulary::default();
        for term in vocab
            .requirement_tech
            .iter()
            .chain(&vocab.stack_terms)
            .chain(&vocab.specialized_skills)
            .chain(&vocab.summary_skills)
        {
            assert_eq!(term, &term.to_lowercase(), "term {term} must be lowercase");
        }
    }

    #[test]
    fn test_specialized_skills_are_a_subset_of_stack_terms() {
        let vocab = SignalVocabulary::default();
        for skill in &vocab.specialized_skills {
            assert!(
                vocab.stack_terms.contains(skill),
                "specialized skill {skill} missing from stack terms"
            );
        }
    }
}
