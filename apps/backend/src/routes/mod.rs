//! HTTP route handlers

pub mod daily;
pub mod quizzes;
