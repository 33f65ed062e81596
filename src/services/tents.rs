use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    models::tent::{
        MaxDimensions, Tent, TentAccessory, TentDetail, TentListing, TentSize, TentSizeView,
        TentSpecification, TentType,
    },
    services::slug::{decode_slug, SLUG_MATCH},
};

pub struct TentService;

impl TentService {
    pub async fn list_types(pool: &PgPool) -> anyhow::Result<Vec<TentType>> {
        let types = sqlx::query_as::<_, TentType>(
            "SELECT * FROM tent_types ORDER BY created_at",
        )
        .fetch_all(pool)
        .await?;
        Ok(types)
    }

    /// All tents with their type and derived max width / height.
    ///
    /// Tents, types and sizes are three independent reads; the joins happen
    /// in memory.
    pub async fn list(pool: &PgPool) -> anyhow::Result<Vec<TentListing>> {
        let (tents, types, sizes) = tokio::try_join!(
            sqlx::query_as::<_, Tent>("SELECT * FROM tents ORDER BY created_at").fetch_all(pool),
            sqlx::query_as::<_, TentType>("SELECT * FROM tent_types").fetch_all(pool),
            sqlx::query_as::<_, TentSize>("SELECT * FROM tent_sizes").fetch_all(pool),
        )?;

        Ok(assemble_listings(tents, types, &sizes))
    }

    /// Resolve one tent by either locale's slug and load its aggregate.
    pub async fn get_by_slug(pool: &PgPool, raw_slug: &str) -> anyhow::Result<Option<TentDetail>> {
        let slug = decode_slug(raw_slug);
        let tent = sqlx::query_as::<_, Tent>(&format!(
            "SELECT * FROM tents WHERE {SLUG_MATCH} LIMIT 1"
        ))
        .bind(slug.as_ref())
        .fetch_optional(pool)
        .await?;

        let Some(tent) = tent else {
            return Ok(None);
        };

        let (tent_type, sizes, specification, accessories) = tokio::try_join!(
            sqlx::query_as::<_, TentType>("SELECT * FROM tent_types WHERE id = $1")
                .bind(tent.tent_type_id)
                .fetch_optional(pool),
            Self::sizes_for(pool, tent.id),
            Self::specification_for(pool, tent.id),
            Self::accessories_for(pool, tent.id),
        )?;

        let dimensions = MaxDimensions::from_sizes(&sizes);
        Ok(Some(TentDetail {
            tent,
            tent_type,
            sizes: sizes.into_iter().map(TentSizeView::from).collect(),
            specification,
            accessories,
            dimensions,
        }))
    }

    pub async fn sizes_for(pool: &PgPool, tent_id: Uuid) -> Result<Vec<TentSize>, sqlx::Error> {
        sqlx::query_as::<_, TentSize>(
            "SELECT * FROM tent_sizes WHERE tent_id = $1 ORDER BY wide, type_code",
        )
        .bind(tent_id)
        .fetch_all(pool)
        .await
    }

    pub async fn specification_for(
        pool: &PgPool,
        tent_id: Uuid,
    ) -> Result<Option<TentSpecification>, sqlx::Error> {
        sqlx::query_as::<_, TentSpecification>(
            "SELECT * FROM tent_specifications WHERE tent_id = $1 LIMIT 1",
        )
        .bind(tent_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn accessories_for(
        pool: &PgPool,
        tent_id: Uuid,
    ) -> Result<Vec<TentAccessory>, sqlx::Error> {
        sqlx::query_as::<_, TentAccessory>(
            "SELECT * FROM tent_accessories WHERE tent_id = $1 ORDER BY created_at",
        )
        .bind(tent_id)
        .fetch_all(pool)
        .await
    }
}

/// Attach type and max dimensions to every tent.
fn assemble_listings(
    tents: Vec<Tent>,
    types: Vec<TentType>,
    sizes: &[TentSize],
) -> Vec<TentListing> {
    let types_by_id: HashMap<Uuid, TentType> = types.into_iter().map(|t| (t.id, t)).collect();

    let mut dims_by_tent: HashMap<Uuid, MaxDimensions> = HashMap::new();
    for size in sizes {
        dims_by_tent
            .entry(size.tent_id)
            .and_modify(|dims| *dims = dims.absorb(size))
            .or_insert_with(|| MaxDimensions::from_sizes([size]));
    }

    tents
        .into_iter()
        .map(|tent| TentListing {
            tent_type: types_by_id.get(&tent.tent_type_id).cloned(),
            dimensions: dims_by_tent.get(&tent.id).copied().unwrap_or_default(),
            tent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::tent::tests::size;

    fn tent_type(name: &str) -> TentType {
        let now = Utc::now();
        TentType {
            id: Uuid::new_v4(),
            type_name_ar: format!("{name} (ar)"),
            type_name_en: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn tent(slug: &str, tent_type_id: Uuid) -> Tent {
        let now = Utc::now();
        Tent {
            id: Uuid::new_v4(),
            name_ar: format!("خيمة {slug}"),
            name_en: format!("{slug} tent"),
            slug_ar: format!("خيمة-{slug}"),
            slug_en: slug.into(),
            description_ar: String::new(),
            description_en: String::new(),
            image_urls: vec![],
            keywords_ar: vec![],
            keywords_en: vec![],
            tags_ar: vec![],
            tags_en: vec![],
            tent_type_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_assemble_listings_joins_types_and_dimensions() {
        let european = tent_type("European");
        let dome = tent_type("Dome");
        let a = tent("a-frame", european.id);
        let b = tent("geodesic", dome.id);
        let sizes = vec![
            size(a.id, 10.0, "4.60m – 5.60m"),
            size(b.id, 30.0, "15.00m"),
            size(a.id, 20.0, "7.25m"),
        ];

        let listings = assemble_listings(vec![a.clone(), b.clone()], vec![european, dome], &sizes);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].tent.id, a.id);
        assert_eq!(listings[0].tent_type.as_ref().unwrap().type_name_en, "European");
        assert_eq!(listings[0].dimensions.max_width, 20.0);
        assert_eq!(listings[0].dimensions.max_height, 7.25);
        assert_eq!(listings[1].dimensions.max_width, 30.0);
        assert_eq!(listings[1].dimensions.max_height, 15.0);
    }

    #[test]
    fn test_assemble_listings_tent_without_sizes() {
        let kind = tent_type("Pyramid");
        let lonely = tent("pagoda", kind.id);
        let listings = assemble_listings(vec![lonely], vec![kind], &[]);
        assert_eq!(listings[0].dimensions, MaxDimensions::default());
    }

    #[test]
    fn test_assemble_listings_missing_type() {
        let orphan = tent("orphan", Uuid::new_v4());
        let listings = assemble_listings(vec![orphan], vec![], &[]);
        assert!(listings[0].tent_type.is_none());
    }

    #[test]
    fn test_listing_serializes_flat() {
        let kind = tent_type("European");
        let t = tent("a-frame", kind.id);
        let sizes = vec![size(t.id, 10.0, "4.00m")];
        let listing = assemble_listings(vec![t], vec![kind], &sizes).remove(0);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["slug_en"], "a-frame");
        assert_eq!(json["max_width"], 10.0);
        assert_eq!(json["max_height"], 4.0);
        assert_eq!(json["tent_type"]["type_name_en"], "European");
    }
}
