use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    models::{
        locale::Locale,
        quote::{QuoteLink, QuoteSelection},
        tent::{Tent, TentSize, TentType},
    },
    services::slug::{decode_slug, SLUG_MATCH},
};

/// Same set `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resolved configurator choice, ready to be worded.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteSubject {
    Custom {
        type_name: String,
        width: f64,
        height: f64,
    },
    Catalog {
        tent_name: String,
        size: Option<(String, f64)>,
    },
}

pub struct ConfiguratorService;

impl ConfiguratorService {
    /// Turn a configurator selection into a pre-filled WhatsApp message.
    ///
    /// `Ok(None)` when the referenced tent, size or tent type does not exist.
    pub async fn compose(
        pool: &PgPool,
        whatsapp_number: &str,
        locale: Locale,
        selection: &QuoteSelection,
    ) -> anyhow::Result<Option<QuoteLink>> {
        let subject = match selection {
            QuoteSelection::Custom { tent_type_id, width, height } => {
                let Some(kind) = Self::tent_type(pool, *tent_type_id).await? else {
                    return Ok(None);
                };
                QuoteSubject::Custom {
                    type_name: locale.pick(&kind.type_name_ar, &kind.type_name_en).to_string(),
                    width: *width,
                    height: *height,
                }
            }
            QuoteSelection::Catalog { tent_slug, size_id } => {
                let slug = decode_slug(tent_slug);
                let tent = sqlx::query_as::<_, Tent>(&format!(
                    "SELECT * FROM tents WHERE {SLUG_MATCH} LIMIT 1"
                ))
                .bind(slug.as_ref())
                .fetch_optional(pool)
                .await?;
                let Some(tent) = tent else {
                    return Ok(None);
                };

                let size = match size_id {
                    Some(size_id) => {
                        let size = sqlx::query_as::<_, TentSize>(
                            "SELECT * FROM tent_sizes WHERE id = $1 AND tent_id = $2",
                        )
                        .bind(size_id)
                        .bind(tent.id)
                        .fetch_optional(pool)
                        .await?;
                        match size {
                            Some(s) => Some((s.type_code, s.wide)),
                            None => return Ok(None),
                        }
                    }
                    None => None,
                };

                QuoteSubject::Catalog {
                    tent_name: locale.pick(&tent.name_ar, &tent.name_en).to_string(),
                    size,
                }
            }
        };

        let message = quote_message(locale, &subject);
        Ok(Some(QuoteLink {
            whatsapp_url: whatsapp_link(whatsapp_number, &message),
            message,
        }))
    }

    async fn tent_type(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<TentType>> {
        let kind = sqlx::query_as::<_, TentType>("SELECT * FROM tent_types WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(kind)
    }
}

/// Custom dimensions must be positive, finite meters.
pub fn validate_selection(selection: &QuoteSelection) -> Result<(), &'static str> {
    match selection {
        QuoteSelection::Custom { width, height, .. } => {
            if !(width.is_finite() && *width > 0.0) {
                return Err("width must be greater than zero");
            }
            if !(height.is_finite() && *height > 0.0) {
                return Err("height must be greater than zero");
            }
            Ok(())
        }
        QuoteSelection::Catalog { tent_slug, .. } => {
            if tent_slug.trim().is_empty() {
                return Err("tent_slug is required");
            }
            Ok(())
        }
    }
}

pub fn quote_message(locale: Locale, subject: &QuoteSubject) -> String {
    match (locale, subject) {
        (Locale::Ar, QuoteSubject::Custom { type_name, width, height }) => {
            format!("مرحباً، أود طلب خيمة من نوع \"{type_name}\" بمقاسات {width}م × {height}م")
        }
        (Locale::En, QuoteSubject::Custom { type_name, width, height }) => {
            format!("Hello, I would like to order a \"{type_name}\" tent with dimensions {width}m x {height}m")
        }
        (Locale::Ar, QuoteSubject::Catalog { tent_name, size }) => {
            let mut msg = format!("مرحباً، أود الاستفسار عن خيمة \"{tent_name}\"");
            if let Some((code, wide)) = size {
                msg.push_str(&format!(" بمقاس {code} (عرض {wide}م)"));
            }
            msg
        }
        (Locale::En, QuoteSubject::Catalog { tent_name, size }) => {
            let mut msg = format!("Hello, I would like to ask about the \"{tent_name}\" tent");
            if let Some((code, wide)) = size {
                msg.push_str(&format!(" in size {code} ({wide}m wide)"));
            }
            msg
        }
    }
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}
