use sqlx::PgPool;

use crate::models::{
    blog::BlogPost,
    search::{SearchResultItem, SearchResults},
    service::Service,
    tent::Tent,
};

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Per-category cap.
pub const RESULTS_PER_KIND: i64 = 5;

pub struct SearchService;

impl SearchService {
    /// Case-insensitive substring search over posts, tents and services.
    ///
    /// No ranking: each list comes back in whatever order the database
    /// returns, capped at [`RESULTS_PER_KIND`].
    pub async fn search(pool: &PgPool, query: &str) -> anyhow::Result<SearchResults> {
        match like_pattern(query) {
            Some(pattern) => Self::search_pattern(pool, &pattern).await,
            None => Ok(SearchResults::default()),
        }
    }

    /// Run the three capped ILIKE reads for an already built `%..%` pattern.
    pub async fn search_pattern(pool: &PgPool, pattern: &str) -> anyhow::Result<SearchResults> {
        let (posts, tents, services) = tokio::try_join!(
            sqlx::query_as::<_, BlogPost>(
                "SELECT * FROM blog_posts
                 WHERE is_published = TRUE
                   AND (title_ar ILIKE $1 OR title_en ILIKE $1
                        OR excerpt_ar ILIKE $1 OR excerpt_en ILIKE $1)
                 LIMIT $2"
            )
            .bind(pattern)
            .bind(RESULTS_PER_KIND)
            .fetch_all(pool),
            sqlx::query_as::<_, Tent>(
                "SELECT * FROM tents
                 WHERE name_ar ILIKE $1 OR name_en ILIKE $1
                    OR description_ar ILIKE $1 OR description_en ILIKE $1
                 LIMIT $2"
            )
            .bind(pattern)
            .bind(RESULTS_PER_KIND)
            .fetch_all(pool),
            sqlx::query_as::<_, Service>(
                "SELECT * FROM services
                 WHERE name_ar ILIKE $1 OR name_en ILIKE $1
                    OR description_ar ILIKE $1 OR description_en ILIKE $1
                 LIMIT $2"
            )
            .bind(pattern)
            .bind(RESULTS_PER_KIND)
            .fetch_all(pool),
        )?;

        tracing::debug!(
            "search {:?}: {} posts, {} tents, {} services",
            pattern,
            posts.len(),
            tents.len(),
            services.len()
        );

        Ok(SearchResults::new(
            posts.into_iter().map(SearchResultItem::from).collect(),
            tents.into_iter().map(SearchResultItem::from).collect(),
            services.into_iter().map(SearchResultItem::from).collect(),
        ))
    }
}

/// `%query%` for ILIKE, or `None` when the trimmed query is too short.
pub fn like_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(format!("%{trimmed}%"))
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::{
        models::search::{SearchKind, PLACEHOLDER_IMAGE},
        services::blog::tests::post,
    };

    #[test]
    fn test_like_pattern_short_queries() {
        assert_eq!(like_pattern(""), None);
        assert_eq!(like_pattern("a"), None);
        assert_eq!(like_pattern("   b  "), None);
        assert_eq!(like_pattern("خ"), None);
    }

    #[test]
    fn test_like_pattern_trims() {
        assert_eq!(like_pattern("  dome "), Some("%dome%".to_string()));
        assert_eq!(like_pattern("خيمة"), Some("%خيمة%".to_string()));
    }

    #[tokio::test]
    async fn test_short_query_skips_database() {
        // Lazy pool pointing nowhere: any query would fail
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap();
        for q in ["", "a", " x "] {
            let results = SearchService::search(&pool, q).await.unwrap();
            assert!(results.posts.is_empty());
            assert!(results.tents.is_empty());
            assert!(results.services.is_empty());
            assert_eq!(results.total_count, 0);
        }
    }

    #[test]
    fn test_post_maps_excerpt_and_featured_image() {
        let p = post("wedding-tents", 1);
        let id = p.id;
        let item = SearchResultItem::from(p);
        assert_eq!(item.id, id);
        assert_eq!(item.kind, SearchKind::Post);
        assert_eq!(item.description_en, "About wedding-tents");
        assert_eq!(item.image_url, "/blog/wedding-tents.jpg");

        let mut bare = post("bare", 1);
        bare.featured_image_url.clear();
        assert_eq!(SearchResultItem::from(bare).image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_total_count_sums_lists() {
        let items: Vec<SearchResultItem> =
            (0..3).map(|i| SearchResultItem::from(post(&format!("p{i}"), i))).collect();
        let results = SearchResults::new(items.clone(), items[..1].to_vec(), vec![]);
        assert_eq!(results.total_count, 4);
    }

    #[test]
    fn test_result_type_discriminator() {
        let json = serde_json::to_value(SearchResultItem::from(post("x", 0))).unwrap();
        assert_eq!(json["type"], "post");
    }
}
