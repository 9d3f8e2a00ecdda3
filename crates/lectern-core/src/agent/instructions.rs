//! Instruction builders for the two generation modes.
//!
//! Both builders are pure functions of request parameters. The
//! summarizer scales its target length proportionally to the input;
//! the personalizer selects a reader persona from a fixed table keyed
//! by the two proficiency axes.

use lectern_types::proficiency::Proficiency;
use lectern_types::proficiency::Proficiency::{Beginner, Expert, Intermediate, Novice};

/// Fraction of the input word count targeted by a summary.
const SUMMARY_RATIO: f64 = 0.225;

/// Lower bound on the summary target word count.
const SUMMARY_MIN_WORDS: usize = 150;

/// Upper bound on the summary target word count.
const SUMMARY_MAX_WORDS: usize = 500;

/// Compute the target word count for a summary of `word_count` words.
///
/// Proportional (20-25% of the original) with fixed bounds:
/// `clamp(round(0.225 * word_count), 150, 500)`.
pub fn target_word_count(word_count: usize) -> usize {
    (((word_count as f64) * SUMMARY_RATIO).round() as usize)
        .clamp(SUMMARY_MIN_WORDS, SUMMARY_MAX_WORDS)
}

/// Build the summarizer instruction text for the given content.
///
/// The word count is the whitespace-separated token count of the
/// content, matching how the length bound is advertised to clients.
pub fn summarizer_instructions(content: &str) -> String {
    let target = target_word_count(content.split_whitespace().count());
    format!(
        "You are an expert content summarizer. Your task is to create a clear, \
         concise summary of the provided text.\n\
         \n\
         Requirements:\n\
         - Target length: {target} words (plus or minus 10%)\n\
         - Maintain key concepts and insights\n\
         - Use clear, professional language\n\
         - Preserve important technical details\n\
         - Do not add information not present in the original text\n\
         - Structure: brief overview, main points, key takeaways"
    )
}

/// Reader personas keyed by (programming proficiency, AI proficiency).
pub const PERSONA_TABLE: [((Proficiency, Proficiency), &str); 16] = [
    (
        (Novice, Novice),
        "a reader who has never programmed and is entirely new to AI; explain every concept \
         from scratch with everyday analogies and no jargon",
    ),
    (
        (Novice, Beginner),
        "a reader with no programming background who has read a little about AI; keep \
         explanations non-technical and reinforce basic AI vocabulary as it appears",
    ),
    (
        (Novice, Intermediate),
        "a reader who cannot program but follows AI developments closely; lean on their \
         conceptual AI knowledge while avoiding any code-level detail",
    ),
    (
        (Novice, Expert),
        "a reader with deep AI theory knowledge but no programming experience; be precise \
         about AI concepts and translate anything code-related into plain language",
    ),
    (
        (Beginner, Novice),
        "a reader writing their first programs who is new to AI; use short, simple code \
         framing and introduce every AI term before using it",
    ),
    (
        (Beginner, Beginner),
        "a reader early in both programming and AI; build up gradually, connecting new ideas \
         to the simple programming constructs they already know",
    ),
    (
        (Beginner, Intermediate),
        "a reader with basic coding skills and a working grasp of AI concepts; keep code \
         framing simple but discuss AI ideas at practical depth",
    ),
    (
        (Beginner, Expert),
        "a reader fluent in AI theory who is still learning to code; assume strong conceptual \
         understanding and keep implementation details gentle",
    ),
    (
        (Intermediate, Novice),
        "a working programmer who has not yet touched AI; use programming analogies freely \
         and define every AI concept on first use",
    ),
    (
        (Intermediate, Beginner),
        "a working programmer with passing AI exposure; connect AI ideas to familiar \
         engineering patterns and fill in conceptual gaps",
    ),
    (
        (Intermediate, Intermediate),
        "a practitioner comfortable with both code and core AI concepts; focus on practical \
         depth and skip introductory material",
    ),
    (
        (Intermediate, Expert),
        "a solid programmer with expert-level AI understanding; be rigorous about AI content \
         and keep the engineering framing concise",
    ),
    (
        (Expert, Novice),
        "a senior engineer encountering AI for the first time; respect their systems \
         intuition, map AI ideas onto engineering concepts, and define the AI vocabulary",
    ),
    (
        (Expert, Beginner),
        "a senior engineer with light AI exposure; move quickly through fundamentals and \
         emphasize architecture and trade-offs",
    ),
    (
        (Expert, Intermediate),
        "a senior engineer with a practical grasp of AI; go straight to advanced implications \
         and implementation nuance",
    ),
    (
        (Expert, Expert),
        "a specialist fluent in both software engineering and AI; be maximally dense and \
         technical, omitting all introductory framing",
    ),
];

/// Persona used when a proficiency pair has no table entry.
pub const FALLBACK_PERSONA: &str =
    "a general technical reader with mixed experience; keep explanations accessible without \
     sacrificing technical accuracy";

/// Look up the persona for a proficiency pair.
pub fn persona_for(programming: Proficiency, ai: Proficiency) -> &'static str {
    PERSONA_TABLE
        .iter()
        .find(|((p, a), _)| *p == programming && *a == ai)
        .map(|(_, persona)| *persona)
        .unwrap_or(FALLBACK_PERSONA)
}

/// Build the personalizer instruction text for a proficiency pair.
pub fn personalizer_instructions(programming: Proficiency, ai: Proficiency) -> String {
    let persona = persona_for(programming, ai);
    format!(
        "You are an expert technical editor. Rewrite the provided text for {persona}.\n\
         \n\
         Requirements:\n\
         - Preserve every key concept and insight from the original\n\
         - Adjust vocabulary, pacing, and examples to the reader described above\n\
         - Keep roughly the original structure and ordering\n\
         - Do not add information not present in the original text"
    )
}
