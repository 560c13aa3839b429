use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuiz {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub prompt: String,
    pub options: Vec<NewOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOption {
    pub label: String,
    pub is_correct: bool,
}
