//! Public-facing content records: users, slider entries, news articles.

use serde::{Deserialize, Serialize};

/// A portal user. Passwords are plaintext in this mock store and are
/// stripped before any record leaves the access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique; matched case-insensitively at login.
    pub username: String,
    pub password: String,
}

/// An image-slider entry. Identified by array position, not by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// A news article on the public content area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub image: String,
    pub title: String,
    pub excerpt: String,
    /// Plain date string, not validated.
    pub date: String,
}
