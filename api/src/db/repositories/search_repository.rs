// Image search logging and company matching

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, Set,
    Statement, TransactionTrait,
};
use serde::Serialize;
use serde_json::Value;

use crate::db::error::DbError;
use crate::domain::image_analysis::MatchCriteria;
use crate::entity::{image_search_logs, match_results};

/// Most companies returned for one image search
pub const MAX_MATCHES: u64 = 10;

/// An approved company whose technologies matched an image search
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct MatchedCompany {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub country: String,
    pub established_year: Option<i32>,
    pub annual_revenue: Option<String>,
    pub employee_count: Option<i32>,
    pub cert_count: i64,
    pub patent_count: i64,
}

#[derive(Clone, Debug)]
pub struct SearchRepository {
    conn: DatabaseConnection,
}

impl SearchRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Stores the search log, finds matching companies and records one
    /// match result per company, all in one database transaction
    pub async fn record_search(
        &self,
        log: image_search_logs::ActiveModel,
        criteria: &MatchCriteria,
        match_score: f64,
        match_reason: Value,
    ) -> Result<(image_search_logs::Model, Vec<MatchedCompany>), DbError> {
        let txn = self.conn.begin().await?;

        let log = log.insert(&txn).await?;

        let matches = match match_query_sql(criteria) {
            Some(sql) => {
                let backend = txn.get_database_backend();
                MatchedCompany::find_by_statement(Statement::from_string(backend, sql))
                    .all(&txn)
                    .await?
            }
            None => Vec::new(),
        };

        if !matches.is_empty() {
            let now = Utc::now();
            let rows = matches.iter().map(|company| match_results::ActiveModel {
                search_log_id: Set(Some(log.id)),
                company_id: Set(company.id),
                match_score: Set(match_score),
                match_reason: Set(Some(match_reason.clone())),
                is_contacted: Set(false),
                created_at: Set(now),
                ..Default::default()
            });
            match_results::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;

        Ok((log, matches))
    }
}

/// Escapes a term for use inside a quoted `LIKE '%...%'` literal
fn like_literal(term: &str) -> String {
    format!("'%{}%'", term.replace('\'', "''"))
}

/// Builds the company match query; `None` when there is nothing to match on
fn match_query_sql(criteria: &MatchCriteria) -> Option<String> {
    let conditions: Vec<String> = criteria
        .category_terms
        .iter()
        .map(|term| format!("tc.name LIKE {}", like_literal(term)))
        .chain(
            criteria
                .technology_terms
                .iter()
                .map(|term| format!("ct.technology_name LIKE {}", like_literal(term))),
        )
        .collect();

    if conditions.is_empty() {
        return None;
    }

    Some(format!(
        "SELECT DISTINCT c.id, c.name, c.name_en, c.email, c.phone, c.website, c.country, \
         c.established_year, c.annual_revenue, c.employee_count, \
         (SELECT COUNT(*) FROM company_certifications cc WHERE cc.company_id = c.id) AS cert_count, \
         (SELECT COUNT(*) FROM company_patents cp WHERE cp.company_id = c.id) AS patent_count \
         FROM companies c \
         LEFT JOIN company_technologies ct ON c.id = ct.company_id \
         LEFT JOIN technology_categories tc ON ct.category_id = tc.id \
         WHERE c.status = 'approved' AND ({}) \
         ORDER BY patent_count DESC, cert_count DESC, c.id ASC \
         LIMIT {}",
        conditions.join(" OR "),
        MAX_MATCHES
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_literal_escapes_quotes() {
        assert_eq!(like_literal("RO"), "'%RO%'");
        assert_eq!(like_literal("o'ring"), "'%o''ring%'");
    }

    #[test]
    fn test_match_query_conditions() {
        let criteria = MatchCriteria {
            category_terms: vec!["담수화".to_string()],
            technology_terms: vec!["RO".to_string()],
        };
        let sql = match_query_sql(&criteria).unwrap();

        assert!(sql.contains("(tc.name LIKE '%담수화%' OR ct.technology_name LIKE '%RO%')"));
        assert!(sql.contains("c.status = 'approved'"));
        assert!(sql.ends_with("LIMIT 10"));
    }

    #[test]
    fn test_empty_criteria_has_no_query() {
        let criteria = MatchCriteria {
            category_terms: vec![],
            technology_terms: vec![],
        };
        assert!(match_query_sql(&criteria).is_none());
    }
}
