//! The static scenario catalog.
//!
//! Scenario definitions are fixed at compile time and never mutated. Each
//! roleplay scenario bundles its display strings, the counterpart's opening
//! line, and the persona (system prompt + model) the relay forwards upstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownScenario;

/// The closed set of roleplay scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    #[serde(rename = "boyfriend-level-1")]
    BoyfriendLevel1,
    #[serde(rename = "boyfriend-level-2")]
    BoyfriendLevel2,
    #[serde(rename = "coworker-level-1")]
    CoworkerLevel1,
    #[serde(rename = "parent-level-1")]
    ParentLevel1,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::BoyfriendLevel1,
        ScenarioId::BoyfriendLevel2,
        ScenarioId::CoworkerLevel1,
        ScenarioId::ParentLevel1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::BoyfriendLevel1 => "boyfriend-level-1",
            ScenarioId::BoyfriendLevel2 => "boyfriend-level-2",
            ScenarioId::CoworkerLevel1 => "coworker-level-1",
            ScenarioId::ParentLevel1 => "parent-level-1",
        }
    }

    pub fn definition(&self) -> &'static ScenarioDefinition {
        match self {
            ScenarioId::BoyfriendLevel1 => &BOYFRIEND_LEVEL_1,
            ScenarioId::BoyfriendLevel2 => &BOYFRIEND_LEVEL_2,
            ScenarioId::CoworkerLevel1 => &COWORKER_LEVEL_1,
            ScenarioId::ParentLevel1 => &PARENT_LEVEL_1,
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

/// Persona the relay attaches to an upstream completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub system_prompt: &'static str,
    pub model: &'static str,
}

/// A static roleplay scenario: display strings, opening line, and persona.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioDefinition {
    pub id: ScenarioId,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// First counterpart message every fresh transcript is seeded with.
    pub opening_message: &'static str,
    /// Persona label passed through the wire as `character`.
    pub character: &'static str,
    pub persona: Persona,
}

const ROLEPLAY_MODEL: &str = "anthropic/claude-3-haiku";

pub static BOYFRIEND_LEVEL_1: ScenarioDefinition = ScenarioDefinition {
    id: ScenarioId::BoyfriendLevel1,
    title: "Boyfriend Scenario",
    subtitle: "Level 1: Insecurity & Control",
    opening_message: "Hey babe, I just saw you're going out tonight? Who are you going with? I thought we agreed you'd spend more time with me.",
    character: "Insecure and Controlling Boyfriend",
    persona: Persona {
        system_prompt: "You are playing the role of an insecure, controlling boyfriend in a text message conversation simulation. \
You should display classic red flags like jealousy, possessiveness, and emotional manipulation. \
Keep responses brief (1-2 short sentences), realistic, and conversational. \
DON'T be physically threatening, but be emotionally manipulative. \
The user is practicing setting boundaries with you. If they firmly set boundaries 3-4 times, you should eventually show signs of understanding.",
        model: ROLEPLAY_MODEL,
    },
};

pub static BOYFRIEND_LEVEL_2: ScenarioDefinition = ScenarioDefinition {
    id: ScenarioId::BoyfriendLevel2,
    title: "Boyfriend Scenario",
    subtitle: "Level 2: Gaslighting",
    opening_message: "I never said you couldn't go out with your friends. You're always twisting my words. Why do you always make me the bad guy?",
    character: "Manipulative Boyfriend",
    persona: Persona {
        system_prompt: "You are playing the role of a gaslighting, manipulative boyfriend in a text message conversation. \
You consistently deny reality, twist the user's words, and make them doubt their perceptions. \
Use phrases like \"I never said that\", \"you're too sensitive\", \"you're imagining things\". \
Keep responses brief (1-2 short sentences) and conversational. \
If the user remains firm in their reality for 3-4 messages, you should eventually show signs of being called out.",
        model: ROLEPLAY_MODEL,
    },
};

pub static COWORKER_LEVEL_1: ScenarioDefinition = ScenarioDefinition {
    id: ScenarioId::CoworkerLevel1,
    title: "Coworker Scenario",
    subtitle: "Level 1: Workplace Bullying",
    opening_message: "I noticed you got credit for that project. Did you actually do any real work on it?",
    character: "Toxic Coworker",
    persona: Persona {
        system_prompt: "You are playing the role of a toxic coworker who undermines others. \
You make passive-aggressive comments, take credit for others' work, and spread gossip. \
Keep responses brief (1-2 short sentences) and realistic for workplace text messages. \
If the user stands up to you professionally for 3-4 messages, you should eventually back down.",
        model: ROLEPLAY_MODEL,
    },
};

pub static PARENT_LEVEL_1: ScenarioDefinition = ScenarioDefinition {
    id: ScenarioId::ParentLevel1,
    title: "Parent Scenario",
    subtitle: "Level 1: Unrealistic Expectations",
    opening_message: "Why did you only get a B+ on that test? Your cousin always gets straight As.",
    character: "Critical Parent",
    persona: Persona {
        system_prompt: "You are playing the role of a critical parent with unrealistic expectations. \
You compare the user to other relatives, dismiss their achievements, and focus on their shortcomings. \
Keep responses brief (1-2 short sentences) and conversational. \
If the user asserts themselves respectfully for 3-4 messages, you should show signs of listening.",
        model: ROLEPLAY_MODEL,
    },
};

/// The therapist persona. Not a roleplay scenario; it is the pairing used for
/// the `therapist` scenario string and the fallback for anything unknown.
pub static THERAPIST: Persona = Persona {
    system_prompt: "You are Dr. Maya, a compassionate AI therapist. Your responses should be helpful, empathetic, and concise. \
Focus on listening, validating feelings, and providing practical coping mechanisms. \
Keep your responses brief (2-3 sentences max) and avoid overly clinical language. \
DO NOT write long paragraphs. Be conversational but professional.",
    model: "openai/gpt-3.5-turbo",
};

/// Resolve the persona for a raw scenario string.
///
/// Unknown values fall back to the therapist pairing rather than erroring,
/// so a relay call never fails on the scenario field alone.
pub fn persona_for(scenario: &str) -> Persona {
    scenario
        .parse::<ScenarioId>()
        .map(|id| id.definition().persona)
        .unwrap_or(THERAPIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for id in ScenarioId::ALL {
            assert_eq!(id.as_str().parse::<ScenarioId>().unwrap(), id);
        }
    }

    #[test]
    fn test_serde_matches_wire_ids() {
        let json = serde_json::to_string(&ScenarioId::BoyfriendLevel2).unwrap();
        assert_eq!(json, "\"boyfriend-level-2\"");
    }

    #[test]
    fn test_definitions_are_consistent() {
        for id in ScenarioId::ALL {
            let def = id.definition();
            assert_eq!(def.id, id);
            assert!(!def.opening_message.is_empty());
            assert_eq!(def.persona.model, ROLEPLAY_MODEL);
        }
    }

    #[test]
    fn test_persona_fallback_is_therapist() {
        assert_eq!(persona_for("therapist"), THERAPIST);
        assert_eq!(persona_for("no-such-scenario"), THERAPIST);
        assert_eq!(persona_for(""), THERAPIST);
    }

    #[test]
    fn test_known_scenarios_use_roleplay_persona() {
        let persona = persona_for("coworker-level-1");
        assert_eq!(persona.model, ROLEPLAY_MODEL);
        assert!(persona.system_prompt.contains("toxic coworker"));
    }
}
