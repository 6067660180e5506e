//! Static social feed section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSection {
    pub title: String,
    pub subtitle: String,
    pub profile_url: String,
    pub posts: Vec<FeedPost>,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            title: "Project Highlights".to_string(),
            subtitle: "Selected works from my data analysis portfolio".to_string(),
            profile_url: "https://www.instagram.com/liosiva_1006?igsh=MTRmNXI1bjU2anB4ZQ=="
                .to_string(),
            posts: default_feed(),
        }
    }
}

impl FeedSection {
    pub fn post(&self, id: &str) -> Option<&FeedPost> {
        self.posts.iter().find(|post| post.id == id)
    }
}

const POSTS: &[(&str, &str, &str, u32, u32, &str)] = &[
    (
        "1",
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        "Data visualization dashboard showing sales trends and customer insights for Q4 analysis.",
        124,
        18,
        "/projects/sales-dashboard",
    ),
    (
        "2",
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
        "Interactive Power BI report analyzing customer behavior patterns and market segmentation.",
        89,
        7,
        "/projects/customer-analysis",
    ),
    (
        "3",
        "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=800&q=80",
        "Python data analysis project revealing key insights from social media engagement metrics.",
        215,
        32,
        "/projects/social-analytics",
    ),
    (
        "4",
        "https://images.unsplash.com/photo-1543286386-713bdd548da4?w=800&q=80",
        "Machine learning model for predictive analytics in retail forecasting and inventory optimization.",
        167,
        14,
        "/projects/ml-forecasting",
    ),
    (
        "5",
        "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&q=80",
        "Statistical analysis of healthcare data revealing treatment effectiveness and patient outcomes.",
        143,
        21,
        "/projects/healthcare-stats",
    ),
    (
        "6",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&q=80",
        "Financial data modeling and risk assessment dashboard for investment portfolio optimization.",
        178,
        26,
        "/projects/financial-modeling",
    ),
];

/// The six posts shown by default.
pub fn default_feed() -> Vec<FeedPost> {
    POSTS
        .iter()
        .map(|(id, image_url, caption, likes, comments, project_url)| FeedPost {
            id: id.to_string(),
            image_url: image_url.to_string(),
            caption: caption.to_string(),
            likes: *likes,
            comments: *comments,
            project_url: Some(project_url.to_string()),
        })
        .collect()
}
