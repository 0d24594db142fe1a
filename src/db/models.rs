use bson::{Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};

/// A news article as stored in the `news_data` collection.
///
/// Field names mirror the stored records. Display fields are optional: the
/// ingestion process does not guarantee them, and defaults are substituted
/// only when a search result is serialized. Absent fields stay absent when
/// the record is serialized back, and fields this type does not name are
/// carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Internal identifier, normalized to a string (ObjectIds become hex).
    #[serde(rename = "_id", default, deserialize_with = "deserialize_record_id")]
    pub id: String,
    #[serde(rename = "Judul", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Tanggal", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Pengarang", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "Kategori", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Url", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "Slug", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "Ringkasan", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Full text. Never loaded into the search candidate set.
    #[serde(rename = "Isi Berita", default, deserialize_with = "deserialize_display_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Remaining stored fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Document,
}

impl Article {
    /// Whether this article is the one addressed by `category` + `slug`.
    ///
    /// `category` must already be canonicalized.
    pub fn matches(&self, category: &str, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug) && self.category.as_deref() == Some(category)
    }
}

/// A record of the `tf_idf` collection: one precomputed weight vector per article.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightRecord {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_record_id")]
    pub id: String,
    /// Join key into the article collection.
    #[serde(rename = "Document_id", deserialize_with = "deserialize_record_id")]
    pub document_id: String,
    #[serde(rename = "tfidf_vector")]
    pub vector: Vec<f64>,
}

/// A record of the `feature` collection holding the ordered vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRecord {
    pub feature_names: Vec<String>,
}

/// Output of the live aggregation: a weight record with its article embedded
/// under `news_data`.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinedRecord {
    #[serde(rename = "Document_id", deserialize_with = "deserialize_record_id")]
    pub document_id: String,
    #[serde(rename = "tfidf_vector")]
    pub vector: Vec<f64>,
    pub news_data: Article,
}

/// An article paired with its precomputed weight vector. The article carries
/// display fields only.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDocument {
    pub article: Article,
    pub vector: Vec<f64>,
}

impl WeightedDocument {
    /// Merge a weight vector with the article it was computed for, keeping
    /// display fields only.
    pub fn merge(document_id: String, vector: Vec<f64>, article: Article) -> Self {
        Self {
            article: Article {
                id: document_id,
                body: None,
                extra: Document::new(),
                ..article
            },
            vector,
        }
    }
}

impl From<JoinedRecord> for WeightedDocument {
    fn from(record: JoinedRecord) -> Self {
        WeightedDocument::merge(record.document_id, record.vector, record.news_data)
    }
}

/// Everything the search index needs, as supplied by a document store.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub vocabulary: Vec<String>,
    pub documents: Vec<WeightedDocument>,
}

/// A scored search hit as returned by `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub url: String,
    pub slug: String,
    pub date: String,
    pub category: String,
    pub score: f64,
}

impl SearchHit {
    /// Build a hit from an article, substituting placeholders for missing fields.
    pub fn from_article(article: &Article, score: f64) -> Self {
        fn or_default(field: &Option<String>, default: &str) -> String {
            field.clone().unwrap_or_else(|| default.to_string())
        }

        Self {
            title: or_default(&article.title, "No title"),
            author: or_default(&article.author, "No author"),
            summary: or_default(&article.summary, "No summary"),
            url: or_default(&article.url, "No Url"),
            slug: or_default(&article.slug, "No slug"),
            date: or_default(&article.date, "No date"),
            category: or_default(&article.category, "No category"),
            score,
        }
    }
}

/// Normalize an identifier (ObjectId, string, number) to its string form.
fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Bson::deserialize(deserializer)?;
    Ok(match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        other => other.to_string(),
    })
}

/// Render any scalar as display text; dates become RFC 3339 and null is absent.
fn deserialize_display_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Bson>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Bson::Null) | Some(Bson::Undefined) => None,
        Some(Bson::String(s)) => Some(s),
        Some(Bson::DateTime(dt)) => Some(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        Some(Bson::Int32(n)) => Some(n.to_string()),
        Some(Bson::Int64(n)) => Some(n.to_string()),
        Some(Bson::Double(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
