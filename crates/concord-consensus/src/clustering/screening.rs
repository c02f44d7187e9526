//! Screening: decide which statements carry a usable embedding.

use concord_core::models::{ExcludedStatement, ExclusionReason, Statement};

/// Statements split into clusterable and excluded, input order preserved.
#[derive(Debug)]
pub struct Screened<'a> {
    /// Each valid statement paired with its embedding.
    pub valid: Vec<(&'a Statement, &'a [f32])>,
    pub excluded: Vec<ExcludedStatement>,
    /// The embedding length every valid statement shares.
    pub dimensions: Option<usize>,
}

/// Screen `statements` for usable embeddings.
///
/// `expected` fixes the embedding length; when `None`, the first non-empty,
/// all-finite embedding in input order fixes it.
pub fn screen(statements: &[Statement], expected: Option<usize>) -> Screened<'_> {
    let dimensions = expected.or_else(|| {
        statements
            .iter()
            .filter_map(|s| s.embedding.as_deref())
            .find(|e| !e.is_empty() && all_finite(e))
            .map(<[f32]>::len)
    });

    let mut valid = Vec::with_capacity(statements.len());
    let mut excluded = Vec::new();

    for statement in statements {
        match check(statement.embedding.as_deref(), dimensions) {
            Ok(embedding) => valid.push((statement, embedding)),
            Err(reason) => excluded.push(ExcludedStatement {
                statement_id: statement.id.clone(),
                reason,
            }),
        }
    }

    Screened {
        valid,
        excluded,
        dimensions,
    }
}

fn check(embedding: Option<&[f32]>, dimensions: Option<usize>) -> Result<&[f32], ExclusionReason> {
    let embedding = embedding.ok_or(ExclusionReason::Missing)?;
    if embedding.is_empty() {
        return Err(ExclusionReason::Empty);
    }
    if !all_finite(embedding) {
        return Err(ExclusionReason::NonFinite);
    }
    match dimensions {
        Some(expected) if expected != embedding.len() => Err(ExclusionReason::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }),
        _ => Ok(embedding),
    }
}

fn all_finite(embedding: &[f32]) -> bool {
    embedding.iter().all(|x| x.is_finite())
}
