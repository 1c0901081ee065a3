//! Dynamic query assembly for the credits listing endpoint.
//!
//! Every caller-supplied value is a bound parameter; the only text spliced
//! into the statement is column names drawn from fixed allow-lists.

use std::str::FromStr;

use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite};

use crate::error::ApiError;

/// Optional listing parameters, deserialized straight from the query string.
/// The frontend historically sent the sort field as `sort`, the documented
/// name is `sort_by`; both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub min_balance: Option<f64>,
    pub max_balance: Option<f64>,
    #[serde(alias = "sort")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Columns matched by the free-text search, each cast to TEXT.
pub const SEARCHABLE_COLUMNS: [&str; 6] =
    ["id", "limit_balance", "sex", "education", "marriage", "age"];

/// The fixed set of sortable columns. Anything else is rejected up front
/// instead of being spliced into the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    LimitBalance,
    Sex,
    Education,
    Marriage,
    Age,
    DefaultNextMonth,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::LimitBalance => "limit_balance",
            SortField::Sex => "sex",
            SortField::Education => "education",
            SortField::Marriage => "marriage",
            SortField::Age => "age",
            SortField::DefaultNextMonth => "default_next_month",
        }
    }
}

impl FromStr for SortField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "limit_balance" => Ok(SortField::LimitBalance),
            "sex" => Ok(SortField::Sex),
            "education" => Ok(SortField::Education),
            "marriage" => Ok(SortField::Marriage),
            "age" => Ok(SortField::Age),
            "default_next_month" => Ok(SortField::DefaultNextMonth),
            other => Err(ApiError::Validation(format!("Invalid sort field: {other}"))),
        }
    }
}

/// Rows skipped before the page starts. Pages are 1-indexed; values below 1
/// clamp to the first page.
pub fn page_offset(page: u32, limit: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(limit)
}

/// Translate listing parameters into a single SELECT with bound arguments.
///
/// Active filters AND-combine; the search term ORs a case-insensitive
/// substring match across [`SEARCHABLE_COLUMNS`]. Sorting applies only for
/// allow-listed fields, descending only for the exact token `desc`.
/// Pagination applies only when both `page` and `limit` are present.
pub fn build_list_query(params: &ListParams) -> Result<QueryBuilder<'static, Sqlite>, ApiError> {
    let mut qb = QueryBuilder::new("SELECT * FROM credit_default");
    let mut has_where = false;

    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        push_connective(&mut qb, &mut has_where);
        let pattern = format!("%{search}%");
        qb.push("(");
        for (i, col) in SEARCHABLE_COLUMNS.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push("CAST(");
            qb.push(*col);
            qb.push(" AS TEXT) LIKE ");
            qb.push_bind(pattern.clone());
        }
        qb.push(")");
    }
    if let Some(min) = params.min_balance {
        push_connective(&mut qb, &mut has_where);
        qb.push("limit_balance >= ");
        qb.push_bind(min);
    }
    if let Some(max) = params.max_balance {
        push_connective(&mut qb, &mut has_where);
        qb.push("limit_balance <= ");
        qb.push_bind(max);
    }

    if let Some(sort_by) = params.sort_by.as_deref().filter(|s| !s.is_empty()) {
        let field: SortField = sort_by.parse()?;
        qb.push(" ORDER BY ");
        qb.push(field.column());
        // exact token match, anything else (including "DESC") sorts ascending
        qb.push(if params.order.as_deref() == Some("desc") {
            " DESC"
        } else {
            " ASC"
        });
    }

    if let (Some(page), Some(limit)) = (params.page, params.limit) {
        qb.push(" LIMIT ");
        qb.push_bind(i64::from(limit));
        qb.push(" OFFSET ");
        qb.push_bind(page_offset(page, limit));
    }

    Ok(qb)
}

fn push_connective(qb: &mut QueryBuilder<'static, Sqlite>, has_where: &mut bool) {
    if *has_where {
        qb.push(" AND ");
    } else {
        qb.push(" WHERE ");
        *has_where = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(params: &ListParams) -> String {
        build_list_query(params).unwrap().sql().to_string()
    }

    #[test]
    fn no_params_selects_everything() {
        assert_eq!(sql(&ListParams::default()), "SELECT * FROM credit_default");
    }

    #[test]
    fn search_ors_across_the_six_text_casts() {
        let params = ListParams {
            search: Some("2000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            sql(&params),
            "SELECT * FROM credit_default WHERE (\
             CAST(id AS TEXT) LIKE ? OR \
             CAST(limit_balance AS TEXT) LIKE ? OR \
             CAST(sex AS TEXT) LIKE ? OR \
             CAST(education AS TEXT) LIKE ? OR \
             CAST(marriage AS TEXT) LIKE ? OR \
             CAST(age AS TEXT) LIKE ?)"
        );
    }

    #[test]
    fn empty_search_is_ignored() {
        let params = ListParams {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(sql(&params), "SELECT * FROM credit_default");
    }

    #[test]
    fn balance_bounds_and_combine() {
        let params = ListParams {
            min_balance: Some(1000.0),
            max_balance: Some(50000.0),
            ..Default::default()
        };
        assert_eq!(
            sql(&params),
            "SELECT * FROM credit_default WHERE limit_balance >= ? AND limit_balance <= ?"
        );
    }

    #[test]
    fn search_and_bounds_all_combine_with_and() {
        let params = ListParams {
            search: Some("1".to_string()),
            min_balance: Some(0.0),
            max_balance: Some(9.0),
            ..Default::default()
        };
        let sql = sql(&params);
        assert_eq!(sql.matches(" AND ").count(), 2);
        assert_eq!(sql.matches(" WHERE ").count(), 1);
    }

    #[test]
    fn sort_defaults_to_ascending() {
        let params = ListParams {
            sort_by: Some("age".to_string()),
            ..Default::default()
        };
        assert_eq!(sql(&params), "SELECT * FROM credit_default ORDER BY age ASC");
    }

    #[test]
    fn sort_descends_only_for_the_exact_desc_token() {
        let mut params = ListParams {
            sort_by: Some("limit_balance".to_string()),
            order: Some("desc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            sql(&params),
            "SELECT * FROM credit_default ORDER BY limit_balance DESC"
        );

        params.order = Some("DESC".to_string());
        assert_eq!(
            sql(&params),
            "SELECT * FROM credit_default ORDER BY limit_balance ASC"
        );
    }

    #[test]
    fn sort_alias_accepts_frontend_param_name() {
        let params: ListParams =
            serde_urlencoded::from_str("sort=age&order=desc").unwrap();
        assert_eq!(params.sort_by.as_deref(), Some("age"));
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let params = ListParams {
            sort_by: Some("id; DROP TABLE credit_default".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_list_query(&params),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn pagination_requires_both_page_and_limit() {
        let mut params = ListParams {
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(sql(&params), "SELECT * FROM credit_default");

        params.limit = Some(10);
        assert_eq!(
            sql(&params),
            "SELECT * FROM credit_default LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn pages_are_one_indexed_and_clamp_below_one() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(0, 10), 0);
    }
}
