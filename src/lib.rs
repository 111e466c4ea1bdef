pub mod advisor; // Dose & vitamin K suggestions
pub mod analytics; // Dashboard aggregates
pub mod config;
pub mod models;
pub mod predictor; // Short-horizon INR trend projection
pub mod store;

pub use advisor::{suggest_dose, DoseSuggestion};
pub use models::{AppSettings, LogEntry, VitaminKLevel};
pub use predictor::{predict_inr, InrPrediction};
