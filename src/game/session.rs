//! Session driver: welcome, resume-or-new, challenge orchestration,
//! continue prompts, victory summary, auto-save.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::challenge::Challenge;
use crate::config::GameConfig;
use crate::console::{Console, Tone};
use crate::game::progress::ProgressTracker;
use crate::save::{self, SavedGame};

const WELCOME: &str = r#"
    ==============================
       C + +   C O D E   Q U E S T
    ==============================

    Welcome, brave programmer!

    Embark on an epic journey through the realms of modern C++!
    Master the ancient arts of:

      - Auto Type Deduction
      - Advanced Lambdas
      - Smart Pointers
      - Move Semantics
      - Structured Bindings

    Your quest begins now...
"#;

pub struct Session<C: Console> {
    tracker: ProgressTracker,
    console: C,
    config: GameConfig,
    save_path: PathBuf,
    player_name: String,
}

impl<C: Console> Session<C> {
    pub fn new(
        challenges: Vec<Challenge>,
        console: C,
        config: GameConfig,
        save_path: PathBuf,
    ) -> Self {
        Self {
            tracker: ProgressTracker::new(challenges),
            console,
            config,
            save_path,
            player_name: String::new(),
        }
    }

    /// Drive the whole run: welcome, then each challenge in order with a
    /// continue prompt in between, then the victory summary. Declining to
    /// continue is a normal early exit.
    pub fn run(&mut self) -> Result<()> {
        self.console.say(Tone::Banner, WELCOME);
        self.console.read_line("Press Enter to continue...")?;
        self.prepare_player()?;

        while !self.tracker.is_finished() {
            let outcome = match self.tracker.current_challenge_mut() {
                Some(challenge) => challenge.run(&mut self.console)?,
                None => break,
            };

            // Both outcomes leave the challenge completed.
            if let Some(reward) = self.tracker.record_completion(outcome) {
                let line = format!("\nLevel completed! You earned: {reward}");
                self.console.say(Tone::Success, &line);
            }
            info!(
                player = %self.player_name,
                level = self.tracker.current_index(),
                experience = self.tracker.experience(),
                "challenge completed"
            );

            // Reported before the index advances; reflects challenges
            // completed prior to this one.
            let percent = self.tracker.percent_complete();
            self.console
                .say(Tone::Plain, &format!("\nProgress: {percent}%"));
            self.show_inventory();

            let go_on = self.console.ask_yes_no("Continue to next level?")?;
            self.tracker.advance();
            if go_on {
                self.console.clear_screen();
            } else {
                self.save_progress();
                self.console
                    .say(Tone::Plain, "Game saved! Thanks for playing!");
                return Ok(());
            }
        }

        self.show_victory();
        self.save_progress();
        Ok(())
    }

    fn prepare_player(&mut self) -> Result<()> {
        let saved = match save::load_progress(&self.save_path) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(error = %err, "could not read save file, starting fresh");
                self.console
                    .say(Tone::Failure, "Could not read the save file; starting fresh.");
                None
            }
        };

        if let Some(saved) = saved {
            let summary = format!(
                "\nFound saved progress for {} (level {}, {:.0} xp).",
                saved.player_name, saved.current_level, saved.experience
            );
            self.console.say(Tone::Plain, &summary);
            if self.console.ask_yes_no("Resume this game?")? {
                self.player_name = saved.player_name;
                self.tracker
                    .restore(saved.current_level, saved.inventory, saved.experience);
                return Ok(());
            }
        }

        let name = self
            .console
            .read_line("\nWhat is your name, adventurer? ")?
            .unwrap_or_default();
        let name = name.trim();
        self.player_name = if name.is_empty() {
            "Adventurer".to_string()
        } else {
            name.to_string()
        };
        Ok(())
    }

    fn show_inventory(&mut self) {
        if self.tracker.rewards().is_empty() {
            return;
        }
        self.console.say(Tone::Banner, "\nYour C++ Arsenal:");
        let items: Vec<String> = self
            .tracker
            .rewards()
            .iter()
            .map(|item| format!("  * {item}"))
            .collect();
        for item in items {
            self.console.say(Tone::Plain, &item);
        }
    }

    fn show_victory(&mut self) {
        self.console.say(Tone::Banner, "\n    CONGRATULATIONS!");
        self.console.say(Tone::Banner, "    =================\n");
        self.console
            .say(Tone::Plain, "    You have become a C++ GRANDMASTER!\n");
        self.console.say(Tone::Plain, "    Your Arsenal:");
        let items: Vec<String> = self
            .tracker
            .rewards()
            .iter()
            .map(|item| format!("      * {item}"))
            .collect();
        for item in items {
            self.console.say(Tone::Plain, &item);
        }
        let total = format!(
            "\n    Experience earned: {:.0}\n\n    You've mastered the advanced concepts of modern C++!\n    Now go forth and build amazing applications!",
            self.tracker.experience()
        );
        self.console.say(Tone::Plain, &total);
    }

    /// Persist the current state. I/O failure is reported, never fatal.
    fn save_progress(&mut self) {
        if !self.config.get_bool("auto_save", true) {
            return;
        }
        let state = SavedGame {
            player_name: self.player_name.clone(),
            current_level: self.tracker.current_index(),
            experience: self.tracker.experience(),
            completed_levels: self.tracker.rewards().len(),
            inventory: self.tracker.rewards().to_vec(),
        };
        if let Err(err) = save::save_progress(&self.save_path, &state) {
            warn!(error = %err, path = %self.save_path.display(), "saving progress failed");
            self.console
                .say(Tone::Failure, "Warning: could not save your progress.");
        }
    }
}
