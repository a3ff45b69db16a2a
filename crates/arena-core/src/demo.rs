//! Example history shown to visitors who are not signed in.
//!
//! The set is fixed: four turns alternating between agents, each with full
//! referee scores. Timestamps are relative to the `now` passed in so the
//! examples always look recent.

use chrono::{DateTime, TimeDelta, Utc};

use crate::entities::{HistoryItem, Referee, RefereeScores};
use crate::enums::AgentId;

struct ExampleTurn {
    question: &'static str,
    chosen_agent: AgentId,
    enhanced_answer: &'static str,
    scores: RefereeScores,
    critique: &'static str,
    days_ago: i64,
}

const EXAMPLE_TURNS: [ExampleTurn; 4] = [
    ExampleTurn {
        question: "What are the key differences between React and Vue.js for building modern web applications?",
        chosen_agent: AgentId::AgentA,
        enhanced_answer: "React and Vue.js are both powerful JavaScript frameworks, but they differ in several key aspects. React uses a virtual DOM and JSX syntax, offering more flexibility and a larger ecosystem. Vue.js provides a more opinionated structure with its template syntax, making it easier for beginners. React is maintained by Meta and has stronger corporate backing, while Vue is community-driven. For large-scale applications, React's component architecture and state management solutions like Redux are widely adopted. Vue's progressive framework approach allows gradual adoption. Both support TypeScript, but React has more mature TypeScript integration.",
        scores: RefereeScores {
            correctness: 9,
            clarity: 9,
            usefulness: 9,
        },
        critique: "Agent A provided a comprehensive and balanced comparison covering architecture, syntax, ecosystem, and use cases. The response accurately highlights the strengths of both frameworks without bias.",
        days_ago: 2,
    },
    ExampleTurn {
        question: "How does machine learning differ from traditional programming approaches?",
        chosen_agent: AgentId::AgentB,
        enhanced_answer: "Traditional programming involves explicitly writing rules and logic to solve problems, where developers define every step. Machine learning, however, learns patterns from data without being explicitly programmed. In traditional programming, you write: 'if condition A, then do B.' In ML, you provide examples and the system learns the patterns. Traditional programs are deterministic and predictable, while ML models are probabilistic. ML excels at tasks like image recognition, natural language processing, and pattern detection where writing explicit rules is impractical. Traditional programming is better for well-defined, rule-based tasks. ML requires large datasets for training, while traditional programs need clear specifications.",
        scores: RefereeScores {
            correctness: 9,
            clarity: 10,
            usefulness: 9,
        },
        critique: "Agent B delivered an exceptionally clear explanation with concrete examples. The comparison effectively illustrates the fundamental paradigm shift between the two approaches, making it accessible to both technical and non-technical audiences.",
        days_ago: 5,
    },
    ExampleTurn {
        question: "What are the best practices for securing a REST API?",
        chosen_agent: AgentId::AgentA,
        enhanced_answer: "Securing a REST API requires multiple layers of protection. First, always use HTTPS to encrypt data in transit. Implement robust authentication using OAuth 2.0 or JWT tokens, never relying on API keys alone. Use rate limiting to prevent abuse and DDoS attacks. Validate and sanitize all input to prevent injection attacks. Implement proper authorization checks ensuring users can only access their own resources. Use CORS policies to control which domains can access your API. Keep dependencies updated and scan for vulnerabilities regularly. Log all API access for monitoring and auditing. Implement API versioning to manage changes safely. Use security headers like Content-Security-Policy and X-Frame-Options. Consider API gateways for centralized security management.",
        scores: RefereeScores {
            correctness: 10,
            clarity: 8,
            usefulness: 10,
        },
        critique: "Agent A provided a comprehensive security checklist covering all critical aspects from encryption to monitoring. The response is actionable and follows industry best practices, making it highly valuable for developers.",
        days_ago: 7,
    },
    ExampleTurn {
        question: "Explain the concept of microservices architecture and its advantages over monolithic architecture",
        chosen_agent: AgentId::AgentB,
        enhanced_answer: "Microservices architecture breaks down applications into small, independent services that communicate via APIs. Each service handles a specific business capability and can be developed, deployed, and scaled independently. Advantages include: independent deployment allowing faster releases, technology flexibility where each service can use different tech stacks, better fault isolation preventing system-wide failures, easier scaling of specific components, and improved team autonomy. However, microservices add complexity in deployment, monitoring, and inter-service communication. Monolithic architecture, where all components are tightly coupled in a single codebase, is simpler to develop initially but becomes harder to maintain and scale as the application grows. The choice depends on team size, application complexity, and scalability requirements.",
        scores: RefereeScores {
            correctness: 9,
            clarity: 9,
            usefulness: 8,
        },
        critique: "Agent B provided a balanced explanation covering both architectures' trade-offs. The response acknowledges that microservices aren't always the best choice, showing nuanced understanding of architectural decisions.",
        days_ago: 10,
    },
];

/// Build the example history with timestamps relative to `now`.
#[must_use]
pub fn example_history(now: DateTime<Utc>) -> Vec<HistoryItem> {
    EXAMPLE_TURNS
        .iter()
        .zip(1_i64..)
        .map(|(turn, turn_id)| HistoryItem {
            turn_id,
            question: turn.question.to_string(),
            chosen_agent: turn.chosen_agent,
            enhanced_answer: turn.enhanced_answer.to_string(),
            referee: Referee {
                scores: turn.scores,
                critique: turn.critique.to_string(),
                chosen_agent: turn.chosen_agent,
                extra: serde_json::Map::new(),
            },
            created_at: (now - TimeDelta::days(turn.days_ago))
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            human_label: None,
            extra: serde_json::Map::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_four_consistent_items() {
        let items = example_history(Utc::now());
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(HistoryItem::is_consistent));
        assert!(items.iter().all(|i| i.referee.scores.is_valid()));
        assert!(items.iter().all(|i| i.human_label.is_none()));
    }

    #[test]
    fn turn_ids_are_unique_and_start_at_one() {
        let ids: Vec<i64> = example_history(Utc::now()).iter().map(|i| i.turn_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn first_question_is_react_vs_vue() {
        let items = example_history(Utc::now());
        assert!(
            items[0]
                .question
                .starts_with("What are the key differences between React and Vue.js")
        );
    }

    #[test]
    fn timestamps_are_relative_to_now() {
        let now = Utc::now();
        let items = example_history(now);
        let ages: Vec<i64> = items
            .iter()
            .map(|i| {
                let created = DateTime::parse_from_rfc3339(&i.created_at).unwrap();
                (now - created.with_timezone(&Utc)).num_days()
            })
            .collect();
        assert_eq!(ages, vec![2, 5, 7, 10]);
    }
}
