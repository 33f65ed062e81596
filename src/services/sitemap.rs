use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use sqlx::PgPool;

use crate::models::{
    locale::Locale,
    sitemap::{ChangeFrequency, SitemapEntry, SlugStamp},
};

/// Pages that exist without any database row. "" is the home page.
pub const STATIC_PAGES: [&str; 6] = ["", "/about", "/contact", "/privacy", "/terms", "/cookies"];

/// Characters escaped in a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A slugged section of the site and how it is advertised.
struct Section {
    path: &'static str,
    frequency: ChangeFrequency,
    priority: f32,
}

const TENTS: Section = Section { path: "tents", frequency: ChangeFrequency::Weekly, priority: 0.7 };
const SERVICES: Section = Section { path: "services", frequency: ChangeFrequency::Weekly, priority: 0.7 };
const PROJECTS: Section = Section { path: "projects", frequency: ChangeFrequency::Monthly, priority: 0.6 };
const BLOG: Section = Section { path: "blog", frequency: ChangeFrequency::Weekly, priority: 0.7 };

pub struct SitemapService;

impl SitemapService {
    /// Every public URL in both locales.
    ///
    /// Database failures are logged and the static pages are still returned.
    pub async fn build(pool: &PgPool, base_url: &str) -> Vec<SitemapEntry> {
        let now = Utc::now();
        let mut entries = static_entries(base_url, now);

        match Self::dynamic_entries(pool, base_url).await {
            Ok(dynamic) => entries.extend(dynamic),
            Err(e) => tracing::error!("Error fetching dynamic sitemap data: {e}"),
        }

        entries
    }

    async fn dynamic_entries(pool: &PgPool, base_url: &str) -> anyhow::Result<Vec<SitemapEntry>> {
        let (tents, services, projects, posts) = tokio::try_join!(
            sqlx::query_as::<_, SlugStamp>("SELECT slug_en, slug_ar, updated_at FROM tents")
                .fetch_all(pool),
            sqlx::query_as::<_, SlugStamp>("SELECT slug_en, slug_ar, updated_at FROM services")
                .fetch_all(pool),
            sqlx::query_as::<_, SlugStamp>("SELECT slug_en, slug_ar, updated_at FROM projects")
                .fetch_all(pool),
            sqlx::query_as::<_, SlugStamp>(
                "SELECT slug_en, slug_ar, updated_at FROM blog_posts WHERE is_published = TRUE"
            )
            .fetch_all(pool),
        )?;

        let mut entries = Vec::new();
        for (section, rows) in [(TENTS, tents), (SERVICES, services), (PROJECTS, projects), (BLOG, posts)] {
            for row in &rows {
                entries.extend(item_entries(base_url, &section, row));
            }
        }
        Ok(entries)
    }
}

fn static_entries(base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(Locale::ALL.len() * STATIC_PAGES.len());
    for locale in Locale::ALL {
        for page in STATIC_PAGES {
            let (frequency, priority) = if page.is_empty() {
                (ChangeFrequency::Daily, 1.0)
            } else {
                (ChangeFrequency::Weekly, 0.8)
            };
            entries.push(SitemapEntry {
                url: format!("{base_url}/{locale}{page}"),
                last_modified: now,
                change_frequency: frequency,
                priority,
                alternate_en: format!("{base_url}/en{page}"),
                alternate_ar: format!("{base_url}/ar{page}"),
            });
        }
    }
    entries
}

/// One entry per locale for a slugged row; both carry the same alternates.
fn item_entries(base_url: &str, section: &Section, row: &SlugStamp) -> [SitemapEntry; 2] {
    let en = format!(
        "{base_url}/en/{}/{}",
        section.path,
        utf8_percent_encode(&row.slug_en, SEGMENT)
    );
    let ar = format!(
        "{base_url}/ar/{}/{}",
        section.path,
        utf8_percent_encode(&row.slug_ar, SEGMENT)
    );
    let entry = |url: &str| SitemapEntry {
        url: url.to_string(),
        last_modified: row.updated_at,
        change_frequency: section.frequency,
        priority: section.priority,
        alternate_en: en.clone(),
        alternate_ar: ar.clone(),
    };
    [entry(&en), entry(&ar)]
}

/// Render entries as a sitemaps.org `urlset` with hreflang alternates.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    for e in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n    \
             <xhtml:link rel=\"alternate\" hreflang=\"en\" href=\"{}\"/>\n    \
             <xhtml:link rel=\"alternate\" hreflang=\"ar\" href=\"{}\"/>\n  </url>\n",
            escape_xml(&e.url),
            e.last_modified.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            e.change_frequency.as_str(),
            e.priority,
            escape_xml(&e.alternate_en),
            escape_xml(&e.alternate_ar),
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
