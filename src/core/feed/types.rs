use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Local>>,
    pub author: Option<String>,
}
