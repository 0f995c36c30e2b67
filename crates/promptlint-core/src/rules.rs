//! The ten golden rules of prompting used as audit criteria.
//! The catalog is static and versioned with the crate; the judge prompt
//! and both presentation layers all render from this single source.

use crate::model::Rule;

pub const RULE_COUNT: usize = 10;

static GOLDEN_RULES: [Rule; RULE_COUNT] = [
    Rule {
        id: 1,
        name: "Clear and Direct",
        description: "Gets straight to the point without ambiguity.",
    },
    Rule {
        id: 2,
        name: "Persona/Role",
        description: "Assigns the model a specific role, e.g. \"You are a lawyer\" or \"Act as a Python expert\".",
    },
    Rule {
        id: 3,
        name: "Format & Tone",
        description: "Explicitly states the desired output format (table, list, code) and tone (professional, humorous).",
    },
    Rule {
        id: 4,
        name: "Context Priority",
        description: "Places constraints and persona before the main task; the model pays more attention to the start.",
    },
    Rule {
        id: 5,
        name: "Contextual Data",
        description: "Provides the text or data to analyze before asking the question.",
    },
    Rule {
        id: 6,
        name: "Action Verbs",
        description: "Uses strong action verbs such as \"Summarize\", \"Analyze\" or \"Code\".",
    },
    Rule {
        id: 7,
        name: "Context Anchors",
        description: "Uses transition phrases linking data to instructions, e.g. \"Based on the text above...\".",
    },
    Rule {
        id: 8,
        name: "Length Control",
        description: "Specifies the desired length or verbosity, e.g. \"concise\" or \"500 words\".",
    },
    Rule {
        id: 9,
        name: "Iterative Approach",
        description: "Reads like a refined iteration rather than a vague first draft.",
    },
    Rule {
        id: 10,
        name: "Fact Checking",
        description: "For hallucination-prone topics (finance, code, law), asks for citations or careful verification.",
    },
];

pub fn catalog() -> &'static [Rule] {
    &GOLDEN_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_rules_with_sequential_ids() {
        let rules = catalog();
        assert_eq!(rules.len(), RULE_COUNT);
        for (idx, rule) in rules.iter().enumerate() {
            assert_eq!(rule.id as usize, idx + 1);
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let rules = catalog();
        for (i, a) in rules.iter().enumerate() {
            for b in &rules[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn descriptions_are_nonempty() {
        for rule in catalog() {
            assert!(!rule.description.trim().is_empty(), "rule {}", rule.id);
        }
    }
}
