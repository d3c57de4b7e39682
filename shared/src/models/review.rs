//! Review Model

use serde::{Deserialize, Serialize};

/// Customer review (顾客评价)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Reviewer badge, e.g. "Local Guide · 24 avis"
    pub badge: String,
    pub text: String,
    /// Star rating 1-5
    pub rating: u8,
}
