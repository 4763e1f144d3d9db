//! The fixed curriculum: five lessons walking through modern C++14/17.
//!
//! The default set ships embedded in the binary; a directory of
//! `lesson_*.toml` files can replace it for custom curricula.

use std::path::Path;

use anyhow::{ensure, Context, Result};

use super::types::Challenge;

const BUILTIN: &[&str] = &[
    include_str!("../../curriculum/lesson_01_temple_of_auto.toml"),
    include_str!("../../curriculum/lesson_02_lambda_sanctuary.toml"),
    include_str!("../../curriculum/lesson_03_smart_pointer_forge.toml"),
    include_str!("../../curriculum/lesson_04_valley_of_move_semantics.toml"),
    include_str!("../../curriculum/lesson_05_citadel_of_structured_bindings.toml"),
];

/// The embedded five-lesson curriculum, in teaching order.
pub fn builtin() -> Result<Vec<Challenge>> {
    BUILTIN
        .iter()
        .enumerate()
        .map(|(i, text)| {
            toml::from_str(text).with_context(|| format!("builtin lesson {}", i + 1))
        })
        .collect()
}

pub fn load_lesson(path: &Path) -> Result<Challenge> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading lesson {}", path.display()))?;
    let challenge: Challenge = toml::from_str(&content)
        .with_context(|| format!("parsing lesson {}", path.display()))?;
    Ok(challenge)
}

/// Load every `lesson_*.toml` in `dir`, sorted by filename so
/// `lesson_01`, `lesson_02`, ... keep curriculum order.
pub fn load_dir(dir: &Path) -> Result<Vec<Challenge>> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("reading curriculum directory {}", dir.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with("lesson_") && name.ends_with(".toml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    ensure!(
        !entries.is_empty(),
        "no lesson_*.toml files in {}",
        dir.display()
    );

    entries.iter().map(|e| load_lesson(&e.path())).collect()
}
