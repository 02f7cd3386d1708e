//! Tone calibration — maps the selected letter tone to prompt guidance.
//!
//! The guidance fragments deliberately avoid repeating the tone's own name:
//! the name is interpolated into the prompt exactly once, on the `Tone:` line.

use serde::{Deserialize, Serialize};

/// The four letter tones offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Persuasive,
    Formal,
    Friendly,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Persuasive => "Persuasive",
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
        }
    }

    /// Style guidance interpolated into the generation prompt alongside the
    /// tone name.
    pub fn guidance(&self) -> &'static str {
        match self {
            Tone::Professional => {
                "Confident and polished; plain business language, no slang, no hype."
            }
            Tone::Persuasive => {
                "Energetic and outcome-driven; sell the candidate's impact without exaggerating."
            }
            Tone::Formal => {
                "Reserved and traditional; full sentences, no contractions, measured phrasing."
            }
            Tone::Friendly => {
                "Warm and approachable; conversational but still workplace-appropriate."
            }
        }
    }
}
