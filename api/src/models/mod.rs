// API request/response models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::MatchedCompany;
use crate::domain::fees::FeeBreakdown;
use crate::domain::image_analysis::ImageAnalysis;
use crate::entity::{
    companies, company_certifications, company_patents, company_technologies,
    platform_fees, technology_listings, transactions,
};

/// Largest page size any list endpoint will return
pub const MAX_PAGE_SIZE: u64 = 100;

/// Resolves optional `limit`/`offset` query values against an endpoint default
pub fn resolve_page(limit: Option<u64>, offset: Option<u64>, default_limit: u64) -> (u64, u64) {
    let limit = limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_SIZE);
    (limit, offset.unwrap_or(0))
}

/// Response envelope shared by every JSON endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Id of a newly created record
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

// --- Query parameters ---

#[derive(Debug, Deserialize, Default)]
pub struct CompanyListQuery {
    pub status: Option<String>,
    pub country: Option<String>,
    pub lang: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListingListQuery {
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub status: Option<String>,
    pub lang: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CategoryQuery {
    pub level: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConsultationListQuery {
    pub status: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TransactionListQuery {
    pub status: Option<String>,
    pub listing_id: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ExchangeRateQuery {
    pub base: Option<String>,
    pub quote: Option<String>,
}

// --- Request bodies ---

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub name_en: Option<String>,
    pub name_zh: Option<String>,
    pub name_ja: Option<String>,
    pub name_vi: Option<String>,
    pub name_mn: Option<String>,
    pub name_ru: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub description_zh: Option<String>,
    pub description_ja: Option<String>,
    pub description_vi: Option<String>,
    pub description_mn: Option<String>,
    pub description_ru: Option<String>,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<i32>,
    pub annual_revenue: Option<String>,
    pub employee_count: Option<i32>,
    pub address: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCertificationRequest {
    pub certification_type: String,
    pub certification_number: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePatentRequest {
    pub patent_number: String,
    pub patent_title: Option<String>,
    pub patent_title_en: Option<String>,
    pub filed_date: Option<NaiveDate>,
    pub granted_date: Option<NaiveDate>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTechnologyRequest {
    pub category_id: Option<i32>,
    pub technology_name: String,
    pub technology_name_en: Option<String>,
    pub description: Option<String>,
    pub maturity_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub company_id: i32,
    pub technology_id: Option<i32>,
    pub listing_type: String,
    pub title: String,
    pub title_en: Option<String>,
    pub title_zh: Option<String>,
    pub title_ja: Option<String>,
    pub title_vi: Option<String>,
    pub title_mn: Option<String>,
    pub title_ru: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub price_range: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ImageSearchRequest {
    pub image_url: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateConsultationRequest {
    pub company_id: i32,
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsEventRequest {
    pub session_id: Option<String>,
    pub event_type: String,
    pub event_data: Option<Value>,
    pub language: Option<String>,
}

/// Body of the admin status PATCH endpoints
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionStatusUpdateRequest {
    pub status: String,
    pub transaction_hash: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub company_id: Option<i32>,
    pub address: String,
    pub network: Option<String>,
    pub currency: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub listing_id: Option<i32>,
    pub buyer_company_id: Option<i32>,
    pub seller_company_id: Option<i32>,
    pub from_address: String,
    pub to_address: String,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub network: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub amount: Decimal,
    pub quote_currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpsertExchangeRateRequest {
    pub base_currency: String,
    pub quote_currency: String,
    pub rate: Decimal,
    pub source: Option<String>,
}

// --- Response bodies ---

#[derive(Debug, Serialize)]
pub struct CompanySummary {
    #[serde(flatten)]
    pub company: companies::Model,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct TechnologyDetail {
    #[serde(flatten)]
    pub technology: company_technologies::Model,
    pub category_name: Option<String>,
    pub category_name_en: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: companies::Model,
    pub display_name: String,
    pub certifications: Vec<company_certifications::Model>,
    pub patents: Vec<company_patents::Model>,
    pub technologies: Vec<TechnologyDetail>,
}

#[derive(Debug, Serialize)]
pub struct ListingSummary {
    #[serde(flatten)]
    pub listing: technology_listings::Model,
    pub display_title: String,
    pub company_name: Option<String>,
    pub company_name_en: Option<String>,
    pub company_country: Option<String>,
}

/// Seller contact details shown on a listing page
#[derive(Debug, Serialize)]
pub struct ListingCompanyContact {
    pub name: String,
    pub name_en: Option<String>,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub country: String,
}

impl From<companies::Model> for ListingCompanyContact {
    fn from(company: companies::Model) -> Self {
        Self {
            name: company.name,
            name_en: company.name_en,
            contact_person: company.contact_person,
            email: company.email,
            phone: company.phone,
            website: company.website,
            country: company.country,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: technology_listings::Model,
    pub display_title: String,
    pub company: Option<ListingCompanyContact>,
}

#[derive(Debug, Serialize)]
pub struct ImageSearchResponse {
    pub analysis: ImageAnalysis,
    pub matches: Vec<MatchedCompany>,
    pub search_log_id: i32,
}

#[derive(Debug, Serialize)]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: transactions::Model,
    pub fee: Option<platform_fees::Model>,
}

#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub transactions: Vec<transactions::Model>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Quote total expressed in another currency
#[derive(Debug, Serialize)]
pub struct ConvertedAmount {
    pub currency: String,
    pub rate: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub breakdown: FeeBreakdown,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<ConvertedAmount>,
}
