use crate::db::models::WeightedDocument;

/// Maximum number of results a single search returns.
pub const MAX_RESULTS: usize = 100;

/// A candidate document with its similarity to the query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    pub document: &'a WeightedDocument,
    pub score: f64,
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Score every candidate against the query and keep the best `limit`.
///
/// Candidates scoring zero or less are dropped. Equal scores keep the
/// candidates' input order.
pub fn rank<'a, I>(query: &[f64], candidates: I, limit: usize) -> Vec<ScoredDocument<'a>>
where
    I: IntoIterator<Item = &'a WeightedDocument>,
{
    let mut scored: Vec<ScoredDocument<'a>> = candidates
        .into_iter()
        .map(|document| ScoredDocument {
            document,
            score: dot(query, &document.vector),
        })
        .filter(|hit| hit.score > 0.0)
        .collect();

    // sort_by is stable.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
