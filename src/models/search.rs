use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{blog::BlogPost, service::Service, tent::Tent};

/// Fallback image for rows with an empty image list.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.png";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Post,
    Tent,
    Service,
}

/// Uniform shape for a hit from any of the searched tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub title_ar: String,
    pub title_en: String,
    pub slug_ar: String,
    pub slug_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub posts: Vec<SearchResultItem>,
    pub tents: Vec<SearchResultItem>,
    pub services: Vec<SearchResultItem>,
    pub total_count: usize,
}

impl SearchResults {
    pub fn new(
        posts: Vec<SearchResultItem>,
        tents: Vec<SearchResultItem>,
        services: Vec<SearchResultItem>,
    ) -> Self {
        let total_count = posts.len() + tents.len() + services.len();
        Self { posts, tents, services, total_count }
    }
}

/// Query params for GET /search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn first_image(urls: &[String]) -> String {
    urls.first()
        .filter(|u| !u.is_empty())
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

impl From<BlogPost> for SearchResultItem {
    fn from(p: BlogPost) -> Self {
        let image_url = if p.featured_image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            p.featured_image_url
        };
        Self {
            id: p.id,
            kind: SearchKind::Post,
            title_ar: p.title_ar,
            title_en: p.title_en,
            slug_ar: p.slug_ar,
            slug_en: p.slug_en,
            description_ar: p.excerpt_ar,
            description_en: p.excerpt_en,
            image_url,
        }
    }
}

impl From<Tent> for SearchResultItem {
    fn from(t: Tent) -> Self {
        Self {
            id: t.id,
            kind: SearchKind::Tent,
            image_url: first_image(&t.image_urls),
            title_ar: t.name_ar,
            title_en: t.name_en,
            slug_ar: t.slug_ar,
            slug_en: t.slug_en,
            description_ar: t.description_ar,
            description_en: t.description_en,
        }
    }
}

impl From<Service> for SearchResultItem {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            kind: SearchKind::Service,
            image_url: first_image(&s.image_urls),
            title_ar: s.name_ar,
            title_en: s.name_en,
            slug_ar: s.slug_ar,
            slug_en: s.slug_en,
            description_ar: s.description_ar,
            description_en: s.description_en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_image_or_placeholder() {
        assert_eq!(first_image(&[]), PLACEHOLDER_IMAGE);
        assert_eq!(first_image(&["".into(), "/b.jpg".into()]), PLACEHOLDER_IMAGE);
        assert_eq!(first_image(&["/a.jpg".into(), "/b.jpg".into()]), "/a.jpg");
    }

    #[test]
    fn test_empty_results_shape() {
        let json = serde_json::to_value(SearchResults::default()).unwrap();
        assert_eq!(json["total_count"], 0);
        assert_eq!(json["posts"].as_array().map(Vec::len), Some(0));
    }
}
