//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `scentfinder_core` wiring without a UI shell.
//! - Run the default quiz with first options and print the resulting criteria.
//! - Open the preference database and report stored favorites.

use scentfinder_core::{
    open_db, FavoritesService, QuizSession, QuizStep, SqlitePreferenceStore,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_PATH_ENV: &str = "SCENTFINDER_DB_PATH";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scentfinder error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!(
        "scentfinder_core version={}",
        scentfinder_core::core_version()
    );

    let mut session = QuizSession::with_default_questions();
    let criteria = loop {
        match session.answer(0)? {
            QuizStep::Next(_) => continue,
            QuizStep::Complete(criteria) => break criteria,
        }
    };
    println!("quiz_criteria={}", serde_json::to_string(&criteria)?);

    let db_path = std::env::var_os(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("scentfinder.db"));
    let conn = open_db(&db_path)?;
    let favorites = FavoritesService::new(SqlitePreferenceStore::try_new(&conn)?);
    println!(
        "db_path={} favorites={}",
        db_path.display(),
        favorites.list_favorites()?.len()
    );
    Ok(())
}
