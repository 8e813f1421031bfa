//! Offline free-text responder.
//!
//! A question is normalised (lower-case ASCII letters and digits only,
//! single spaces) and scored against every [`FaqIntent`]: a keyword found
//! verbatim scores 2, otherwise each of its words found scores 1. The first
//! intent with the highest score wins if that score is above 1.

use serde::Serialize;

/// `matched_intent` of a reply that matched nothing.
pub const FALLBACK_INTENT: &str = "fallback";

const FALLBACK_REPLY: &str = "I may not have that on hand, but I can help with systems, ML methods, skills, or navigation. Try asking: \"Tell me about Immigame\", \"Show ML projects\", \"How do I contact you?\", or \"What models have you used?\"";

/// A canned answer and the words that trigger it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaqIntent {
    /// Stable identifier, reported back in [`FaqReply::matched_intent`].
    pub id: &'static str,
    /// Human-readable name.
    pub title: &'static str,
    /// Lower-case trigger phrases.
    pub keywords: &'static [&'static str],
    /// Answer text.
    pub response: &'static str,
    /// Follow-up questions a front-end may offer.
    pub suggested_questions: &'static [&'static str],
}

/// Answer of the offline responder.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaqReply {
    /// Text to show.
    pub reply: String,
    /// Id of the winning intent, or [`FALLBACK_INTENT`].
    pub matched_intent: String,
    /// Follow-up questions of the winning intent; empty on fallback.
    pub suggestions: Vec<String>,
}

/// All intents, in tie-break order.
pub static FAQ_INTENTS: [FaqIntent; 10] = [
    FaqIntent {
        id: "about_creator",
        title: "About Shravani",
        keywords: &["who", "shravani", "karra", "creator", "about you"],
        response: "Shravani Karra is a Data & AI Systems Engineer and Senior Data Analyst at Rivian, Duke MQM alum, and former Goldman Sachs engineer. She focuses on building reliable data systems, applied ML workflows, and clear interfaces for decision-making.",
        suggested_questions: &["What skills do you use most often?", "How do you approach model evaluation?"],
    },
    FaqIntent {
        id: "about_portfolio",
        title: "About this portfolio",
        keywords: &["portfolio", "site", "navigate", "sections", "structure", "home"],
        response: "This portfolio is organized into Systems, Models, and Writing. Systems highlight end-to-end applications, Models cover ML methods and evidence, and Writing links to essays. Use the top navigation or ask me for a specific area.",
        suggested_questions: &["Show me systems", "What models are documented?", "Where is the writing page?"],
    },
    FaqIntent {
        id: "systems",
        title: "Systems overview",
        keywords: &["systems", "apps", "products", "end-to-end", "portfolio system"],
        response: "Systems are end-to-end applications that connect data, logic, and interfaces. Featured systems include the AI-Powered Portfolio and Immigame. Each system lists the problem, approach, stack, and links to live/GitHub where available.",
        suggested_questions: &["Tell me about Immigame", "What stack does the AI portfolio use?"],
    },
    FaqIntent {
        id: "ml_models",
        title: "ML models overview",
        keywords: &["models", "ml", "methods", "library", "notebooks", "experiments"],
        response: "The Models & Methods library groups work across supervised learning (regression/classification, ensembles, boosting), time series forecasting, clustering and anomaly detection, deep learning for vision, NLP/LLM prompting, and evaluation/interpretability practices. Browse /models for the taxonomy and evidence links to notebooks/repos.",
        suggested_questions: &["Show ML experiments", "How do you handle evaluation?"],
    },
    FaqIntent {
        id: "skills",
        title: "Skills",
        keywords: &["skills", "stack", "tech", "tools", "languages"],
        response: "Data: SQL, Pandas, dbt style modeling. ML: scikit-learn, XGBoost, PyTorch, forecasting, anomaly detection. Engineering: React, TypeScript, Vite, APIs, Firebase/Auth. MLOps/Cloud: basic Docker, CI/CD habits, and reproducible notebooks.",
        suggested_questions: &["What ML libraries do you use?", "How do you deploy?"],
    },
    FaqIntent {
        id: "contact",
        title: "Contact",
        keywords: &["contact", "email", "reach", "connect", "linkedin"],
        response: "You can reach Shravani via email at shravanikarra1@gmail.com or on LinkedIn (linkedin.com/in/shravani-karra). GitHub: github.com/shravanikarra.",
        suggested_questions: &["What is your email?", "Share your LinkedIn"],
    },
    FaqIntent {
        id: "resume",
        title: "Resume",
        keywords: &["resume", "cv"],
        response: "If you need a resume, share a quick note with your context and I\u{2019}ll provide the latest version via email.",
        suggested_questions: &["How do I request your resume?"],
    },
    FaqIntent {
        id: "immigame",
        title: "Immigame",
        keywords: &["immigame", "immigration", "journey", "visa"],
        response: "Immigame is an immigration journey planning platform that turns a user\u{2019}s intent into a structured, trackable plan with AI-assisted guidance. Live: https://immigame.com, GitHub: https://github.com/shravanikarra/immigame.",
        suggested_questions: &["What problem does Immigame solve?", "What stack does Immigame use?"],
    },
    FaqIntent {
        id: "tech_stack",
        title: "Tech stack",
        keywords: &["stack", "tech", "frontend", "backend", "llm"],
        response: "This site uses React + Vite + TypeScript with a lightweight D3 visualization. ML work spans scikit-learn, XGBoost, PyTorch, and LLM prompting experiments. Systems leverage modern frontend patterns and pragmatic APIs.",
        suggested_questions: &["How is the site built?", "What ML stack do you prefer?"],
    },
    FaqIntent {
        id: "help",
        title: "Help",
        keywords: &["help", "what can you do", "examples", "suggestions"],
        response: "Ask about systems, ML methods, skills, or how to navigate. Try: \u{201c}Show ML projects\u{201d}, \u{201c}Tell me about Immigame\u{201d}, \u{201c}What models have you used?\u{201d}, or \u{201c}How do I contact you?\u{201d}",
        suggested_questions: &["Show ML projects", "Tell me about Immigame", "How do I navigate?"],
    },
];

fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn score(input: &str, intent: &FaqIntent) -> u32 {
    intent
        .keywords
        .iter()
        .map(|keyword| {
            if input.contains(keyword) {
                2u32
            } else {
                keyword
                    .split(' ')
                    .filter(|part| !part.is_empty() && input.contains(part))
                    .map(|_| 1u32)
                    .sum::<u32>()
            }
        })
        .sum()
}

/// Answer a free-text question from the intent table.
pub fn offline_reply(question: &str) -> FaqReply {
    let input = normalize(question);

    let mut best: Option<(&FaqIntent, u32)> = None;
    for intent in &FAQ_INTENTS {
        let s = score(&input, intent);
        if s > best.map_or(0, |(_, b)| b) {
            best = Some((intent, s));
        }
    }

    match best {
        Some((intent, s)) if s > 1 => FaqReply {
            reply: intent.response.to_string(),
            matched_intent: intent.id.to_string(),
            suggestions: intent
                .suggested_questions
                .iter()
                .map(|q| (*q).to_string())
                .collect(),
        },
        _ => FaqReply {
            reply: FALLBACK_REPLY.to_string(),
            matched_intent: FALLBACK_INTENT.to_string(),
            suggestions: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_spaces() {
        assert_eq!(normalize("  Tell me   about IMMIGAME?! "), "tell me about immigame");
        assert_eq!(normalize("end-to-end"), "end to end");
    }

    #[test]
    fn matches_immigame() {
        let reply = offline_reply("Tell me about Immigame");
        assert_eq!(reply.matched_intent, "immigame");
        assert!(reply.reply.contains("https://immigame.com"));
        assert_eq!(
            reply.suggestions,
            ["What problem does Immigame solve?", "What stack does Immigame use?"]
        );
    }

    #[test]
    fn matches_contact() {
        let reply = offline_reply("How do I contact you? Email works.");
        assert_eq!(reply.matched_intent, "contact");
    }

    #[test]
    fn ties_go_to_the_earlier_intent() {
        // "stack" and "tech" score equally for skills and tech_stack.
        let reply = offline_reply("tech stack");
        assert_eq!(reply.matched_intent, "skills");
    }

    #[test]
    fn multi_word_keyword_scores_per_word() {
        // "what can you do" is not contained verbatim; "what" "can" "you" "do" are.
        let input = normalize("what do you think I can ask");
        assert_eq!(score(&input, &FAQ_INTENTS[9]), 4);
    }

    #[test]
    fn single_partial_word_is_not_enough() {
        // Only the "about" part of "about you" matches: score 1.
        let reply = offline_reply("about");
        assert_eq!(reply.matched_intent, FALLBACK_INTENT);
        assert!(reply.reply.starts_with("I may not have that on hand"));
        assert!(reply.suggestions.is_empty());
    }

    #[test]
    fn empty_question_falls_back() {
        assert_eq!(offline_reply("").matched_intent, FALLBACK_INTENT);
        assert_eq!(offline_reply("???").matched_intent, FALLBACK_INTENT);
    }

    #[test]
    fn every_intent_offers_follow_ups() {
        for intent in &FAQ_INTENTS {
            assert!(!intent.suggested_questions.is_empty(), "{}", intent.id);
        }
    }

    #[test]
    fn intent_ids_are_unique() {
        let mut ids: Vec<_> = FAQ_INTENTS.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQ_INTENTS.len());
    }
}
