//! University records service: JSON CRUD endpoints for classrooms, courses,
//! departments, enrollments, students and professors, a department enrollment report,
//! and a dashboard page that drives them from the browser.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod frontend;
pub mod models;
pub mod resource;
pub mod state;
