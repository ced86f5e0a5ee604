pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::DokkaiApp;
pub use session::QuizSession;
