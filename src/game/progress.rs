//! Linear progression through the curriculum.
//!
//! Invariant: `rewards.len() <= current <= challenges.len()`, and `rewards`
//! holds exactly the reward labels of the completed challenges before
//! `current`, in curriculum order.

use crate::challenge::{Challenge, Outcome};

pub struct ProgressTracker {
    challenges: Vec<Challenge>,
    current: usize,
    rewards: Vec<String>,
    experience: f64,
}

impl ProgressTracker {
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self {
            challenges,
            current: 0,
            rewards: Vec::new(),
            experience: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.challenges.len()
    }

    pub fn current_challenge_mut(&mut self) -> Option<&mut Challenge> {
        self.challenges.get_mut(self.current)
    }

    /// Percentage of the curriculum behind the current index, in integer
    /// percent. Reported after a completion but before [`advance`], so right
    /// after finishing 0-based challenge `i` of `n` it reads `100 * i / n`.
    ///
    /// [`advance`]: ProgressTracker::advance
    pub fn percent_complete(&self) -> u32 {
        if self.challenges.is_empty() {
            return 0;
        }
        (100 * self.current / self.challenges.len()) as u32
    }

    /// Record the current challenge's completion: append its reward label
    /// and credit the outcome's experience. Returns the reward label. Does
    /// nothing the second time around for the same index.
    pub fn record_completion(&mut self, outcome: Outcome) -> Option<&str> {
        let challenge = self.challenges.get(self.current)?;
        if !challenge.completed() || self.rewards.len() > self.current {
            return None;
        }
        self.rewards.push(challenge.reward.clone());
        self.experience += outcome.experience();
        self.rewards.last().map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1).min(self.challenges.len());
    }

    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    /// Restore a saved position: challenges before it count as completed and
    /// the saved rewards/experience are adopted. The position is clamped to
    /// the curriculum length and the reward list to the position.
    pub fn restore(&mut self, position: usize, rewards: Vec<String>, experience: f64) {
        self.current = position.min(self.challenges.len());
        for challenge in &mut self.challenges[..self.current] {
            challenge.mark_completed();
        }
        self.rewards = rewards;
        self.rewards.truncate(self.current);
        self.experience = experience;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::types::{Guidance, Lesson, Meta, Narrative};
    use crate::challenge::Clause;
    use crate::console::ScriptedConsole;

    fn challenge(id: &str, reward: &str, needle: &str) -> Challenge {
        Challenge::new(
            Meta {
                id: id.into(),
                number: 1,
                title: id.into(),
                concept: "Concept".into(),
            },
            Narrative {
                story: "Story.".into(),
                mentor: "Mentor".into(),
                mentor_line: "Line.".into(),
            },
            Lesson {
                explanation: "Explain.".into(),
                prompt: "Prompt.".into(),
            },
            reward.into(),
            Guidance {
                hint: "Hint.".into(),
                solution: needle.into(),
            },
            vec![Clause {
                all_of: vec![needle.into()],
                any_of: vec![],
            }],
        )
    }

    fn curriculum(n: usize) -> Vec<Challenge> {
        (0..n)
            .map(|i| challenge(&format!("ch{i}"), &format!("Reward {i}"), &format!("needle{i}")))
            .collect()
    }

    fn complete_current(tracker: &mut ProgressTracker) -> Option<String> {
        let index = tracker.current_index();
        let ch = tracker.current_challenge_mut().unwrap();
        let mut console = ScriptedConsole::new([format!("needle{index}"), "DONE".to_string()]);
        let outcome = ch.run(&mut console).unwrap();
        tracker.record_completion(outcome).map(str::to_string)
    }

    #[test]
    fn starts_at_zero_with_no_rewards() {
        let tracker = ProgressTracker::new(curriculum(5));
        assert_eq!(tracker.current_index(), 0);
        assert!(tracker.rewards().is_empty());
        assert!(!tracker.is_finished());
    }

    #[test]
    fn percentage_reflects_challenges_before_the_one_just_finished() {
        let mut tracker = ProgressTracker::new(curriculum(5));
        // After completing challenge 0 the reported percentage is still 0.
        complete_current(&mut tracker).unwrap();
        assert_eq!(tracker.percent_complete(), 0);
        tracker.advance();
        // After completing challenge 1 it reads 20.
        complete_current(&mut tracker).unwrap();
        assert_eq!(tracker.percent_complete(), 20);
    }

    #[test]
    fn rewards_accumulate_in_curriculum_order() {
        let mut tracker = ProgressTracker::new(curriculum(3));
        for _ in 0..3 {
            complete_current(&mut tracker).unwrap();
            tracker.advance();
        }
        assert!(tracker.is_finished());
        assert_eq!(
            tracker.rewards(),
            &["Reward 0".to_string(), "Reward 1".to_string(), "Reward 2".to_string()]
        );
        assert_eq!(tracker.experience(), 150.0);
    }

    #[test]
    fn invariant_rewards_never_exceed_index_after_advance() {
        let mut tracker = ProgressTracker::new(curriculum(3));
        complete_current(&mut tracker).unwrap();
        tracker.advance();
        assert!(tracker.rewards().len() <= tracker.current_index());
        assert!(tracker.current_index() <= tracker.len());
    }

    #[test]
    fn double_record_is_ignored() {
        let mut tracker = ProgressTracker::new(curriculum(2));
        complete_current(&mut tracker).unwrap();
        let again = tracker.record_completion(Outcome::Revealed);
        assert_eq!(again, None);
        assert_eq!(tracker.rewards().len(), 1);
    }

    #[test]
    fn incomplete_challenge_earns_nothing() {
        let mut tracker = ProgressTracker::new(curriculum(2));
        assert_eq!(tracker.record_completion(Outcome::Revealed), None);
        assert!(tracker.rewards().is_empty());
    }

    #[test]
    fn restore_clamps_and_marks_completed() {
        let mut tracker = ProgressTracker::new(curriculum(3));
        tracker.restore(
            9,
            vec!["Reward 0".into(), "Reward 1".into(), "Reward 2".into(), "extra".into()],
            75.0,
        );
        assert_eq!(tracker.current_index(), 3);
        assert!(tracker.is_finished());
        assert_eq!(tracker.rewards().len(), 3);
        assert_eq!(tracker.experience(), 75.0);
    }

    #[test]
    fn empty_curriculum_is_immediately_finished() {
        let tracker = ProgressTracker::new(Vec::new());
        assert!(tracker.is_finished());
        assert_eq!(tracker.percent_complete(), 0);
    }
}
