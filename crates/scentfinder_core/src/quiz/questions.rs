//! Built-in quiz question bank.

use crate::model::fragrance::Gender;
use crate::quiz::aggregate::QuizAnswer;
use serde::{Deserialize, Serialize};

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizAnswer>,
}

impl QuizQuestion {
    pub fn new(id: u32, prompt: impl Into<String>, options: Vec<QuizAnswer>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
        }
    }
}

/// Returns the default five-question finder quiz.
///
/// The season question tags every option with `Gender::All`; under
/// first-match-wins it therefore resolves gender before the dedicated
/// gender question is reached.
pub fn default_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            1,
            "What's your preferred scent character?",
            vec![
                option("Fresh & Clean", &["Bergamot", "Lavender", "Citrus"])
                    .with_family("Fresh Aquatic"),
                option("Sweet & Warm", &["Vanilla", "Tonka Bean", "Amber"])
                    .with_family("Oriental"),
                option("Woody & Earthy", &["Sandalwood", "Cedar", "Vetiver"])
                    .with_family("Woody"),
                option("Floral & Romantic", &["Rose", "Jasmine", "Iris"]).with_family("Floral"),
            ],
        ),
        QuizQuestion::new(
            2,
            "When do you plan to wear this perfume?",
            vec![
                option("Daily / Office", &["Lavender", "Bergamot", "Musk"]),
                option("Evening / Date Night", &["Oud", "Rose", "Vanilla"]),
                option("Special Occasions", &["Amber", "Patchouli", "Jasmine"]),
                option("Casual / Anytime", &["Citrus", "Cedar", "Tonka Bean"]),
            ],
        ),
        QuizQuestion::new(
            3,
            "What season do you prefer?",
            vec![
                option("Spring / Summer", &["Bergamot", "Citrus", "Jasmine"])
                    .with_gender(Gender::All),
                option("Fall / Winter", &["Vanilla", "Amber", "Oud"]).with_gender(Gender::All),
                option("All Year Round", &["Musk", "Cedar", "Rose"]).with_gender(Gender::All),
            ],
        ),
        QuizQuestion::new(
            4,
            "Your gender preference?",
            vec![
                QuizAnswer::gender(Gender::Men).with_label("For Men"),
                QuizAnswer::gender(Gender::Women).with_label("For Women"),
                QuizAnswer::gender(Gender::Unisex).with_label("Unisex"),
                QuizAnswer::gender(Gender::All).with_label("No Preference"),
            ],
        ),
        QuizQuestion::new(
            5,
            "How bold do you want your scent?",
            vec![
                option("Subtle & Intimate", &["Musk", "Iris", "Sandalwood"]),
                option("Moderate & Balanced", &["Rose", "Cedar", "Bergamot"]),
                option("Strong & Bold", &["Oud", "Patchouli", "Leather"]),
                option("Very Intense", &["Tobacco", "Amber", "Vanilla"]),
            ],
        ),
    ]
}

fn option(label: &str, notes: &[&str]) -> QuizAnswer {
    QuizAnswer::notes(notes.iter().copied()).with_label(label)
}
