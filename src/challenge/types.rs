//! One lesson unit: narrative, concept text, a graded prompt, and the
//! accept rule that decides pass/fail.

use anyhow::Result;
use serde::Deserialize;

use crate::console::{Console, Tone};
use crate::matcher;

/// Graded attempts before the solution is force-revealed.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize)]
pub struct Meta {
    /// Stable identifier, never compared against display text.
    pub id: String,
    pub number: u32,
    pub title: String,
    pub concept: String,
}

#[derive(Debug, Deserialize)]
pub struct Narrative {
    pub story: String,
    pub mentor: String,
    pub mentor_line: String,
}

#[derive(Debug, Deserialize)]
pub struct Lesson {
    pub explanation: String,
    pub prompt: String,
}

/// Hint and reference solution, attached at construction.
#[derive(Debug, Deserialize)]
pub struct Guidance {
    pub hint: String,
    pub solution: String,
}

/// One way a submission can pass: every `all_of` needle must be a literal
/// substring, and when `any_of` is non-empty at least one of its needles
/// must be too.
#[derive(Debug, Clone, Deserialize)]
pub struct Clause {
    #[serde(default)]
    pub all_of: Vec<String>,
    #[serde(default)]
    pub any_of: Vec<String>,
}

impl Clause {
    pub fn matches(&self, text: &str) -> bool {
        matcher::contains_all(text, &self.all_of)
            && (self.any_of.is_empty() || matcher::contains_any(text, &self.any_of))
    }
}

/// How an attempt loop ended. Both variants leave the challenge completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The submission passed the accept rule.
    Solved { attempts: u32, hints_used: u32 },
    /// The solution was shown, either on request or after the last attempt.
    Revealed,
}

impl Outcome {
    /// Experience awarded for this outcome: a base award reduced per hint,
    /// floored so a completed challenge is never worth nothing.
    pub fn experience(&self) -> f64 {
        match self {
            Outcome::Solved { hints_used, .. } => {
                (50.0 - f64::from(*hints_used) * 10.0).max(10.0)
            }
            Outcome::Revealed => 10.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Challenge {
    pub meta: Meta,
    pub narrative: Narrative,
    pub lesson: Lesson,
    pub reward: String,
    pub guidance: Guidance,
    pub accept: Vec<Clause>,
    #[serde(skip)]
    completed: bool,
}

impl Challenge {
    pub fn new(
        meta: Meta,
        narrative: Narrative,
        lesson: Lesson,
        reward: String,
        guidance: Guidance,
        accept: Vec<Clause>,
    ) -> Self {
        Self {
            meta,
            narrative,
            lesson,
            reward,
            guidance,
            accept,
            completed: false,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Terminal: once completed, a challenge never reopens.
    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// True iff the submission passes any accept clause. A challenge with no
    /// clauses never passes.
    pub fn validate(&self, submission: &str) -> bool {
        self.accept.iter().any(|clause| clause.matches(submission))
    }

    /// The per-challenge attempt loop: present the lesson, then grade up to
    /// [`MAX_ATTEMPTS`] submissions, offering retry/hint/solution between
    /// failures and force-revealing the solution after the last one.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Outcome> {
        self.present(console);

        let mut hints_used = 0u32;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            console.say(Tone::Plain, &format!("\n{}", "=".repeat(50)));
            console.say(
                Tone::Banner,
                &format!("Attempt {attempts}/{MAX_ATTEMPTS}"),
            );
            console.say(Tone::Plain, &"=".repeat(50));
            console.say(
                Tone::Plain,
                "\nEnter your C++ code (type 'DONE' on a new line when finished):",
            );

            let submission = console.read_code()?;
            if self.validate(&submission) {
                self.completed = true;
                console.say(
                    Tone::Success,
                    &format!("Excellent! You've mastered {}!", self.meta.concept),
                );
                return Ok(Outcome::Solved {
                    attempts,
                    hints_used,
                });
            }

            tracing::debug!(
                challenge = %self.meta.id,
                attempt = attempts,
                keywords = ?matcher::extract_keywords(&submission),
                "submission rejected"
            );

            if attempts >= MAX_ATTEMPTS {
                console.say(Tone::Failure, "Out of attempts. Let's see the solution.");
                self.show_solution(console);
                self.completed = true;
                return Ok(Outcome::Revealed);
            }

            console.say(Tone::Failure, "Not quite right. Try again!");
            console.say(
                Tone::Plain,
                "\nWould you like:\n1. Try again\n2. Get a hint\n3. See the solution",
            );
            let choice = console.read_line("Choose (1-3): ")?.unwrap_or_default();
            match choice.trim() {
                "2" => {
                    hints_used += 1;
                    console.say(Tone::Hint, &format!("Hint: {}", self.guidance.hint));
                }
                "3" => {
                    self.show_solution(console);
                    self.completed = true;
                    return Ok(Outcome::Revealed);
                }
                _ => {}
            }
        }
    }

    fn present(&self, console: &mut dyn Console) {
        let rule = "=".repeat(60);
        console.say(Tone::Plain, &format!("\n{rule}"));
        console.say(Tone::Banner, &self.meta.title);
        console.say(Tone::Plain, &rule);
        console.say(Tone::Plain, &self.narrative.story);
        console.say(
            Tone::Plain,
            &format!("\n{}: \"{}\"", self.narrative.mentor, self.narrative.mentor_line),
        );
        console.say(Tone::Plain, &rule);

        console.say(
            Tone::Banner,
            &format!("\nC++ Concept: {}", self.meta.concept),
        );
        console.say(Tone::Plain, &"-".repeat(50));
        console.say(Tone::Plain, &self.lesson.explanation);

        console.say(Tone::Banner, "\nYour Challenge:");
        console.say(Tone::Plain, &"-".repeat(30));
        console.say(Tone::Plain, &self.lesson.prompt);
    }

    fn show_solution(&self, console: &mut dyn Console) {
        console.say(Tone::Banner, "\nSolution:");
        console.say(Tone::Plain, &"-".repeat(30));
        console.say(Tone::Plain, &self.guidance.solution);
    }
}
