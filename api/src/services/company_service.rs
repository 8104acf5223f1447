// Company directory service: registration, profiles and admin review

use chrono::Utc;
use sea_orm::Set;

use crate::domain::i18n::Language;
use crate::domain::status::{AllowList, CompanyStatus};
use crate::entity::{companies, company_certifications, company_patents, company_technologies};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    resolve_page, CompanyDetail, CompanyListQuery, CompanySummary, CreateCertificationRequest,
    CreateCompanyRequest, CreatePatentRequest, CreateTechnologyRequest, CreatedResponse,
    TechnologyDetail,
};
use crate::services::{non_empty, parse_allowed, require};

const DEFAULT_COMPANY_LIMIT: u64 = 50;
const DEFAULT_COUNTRY: &str = "KR";

pub async fn list_companies(
    state: &AppState,
    query: &CompanyListQuery,
) -> ApiResult<Vec<CompanySummary>> {
    let lang = Language::from_query(query.lang.as_deref());
    let status = query
        .status
        .as_deref()
        .map(parse_allowed::<CompanyStatus>)
        .transpose()?;
    let (limit, offset) = resolve_page(query.limit, query.offset, DEFAULT_COMPANY_LIMIT);

    let companies = state
        .repositories
        .companies
        .find_all(
            status.as_ref().map(CompanyStatus::as_str),
            query.country.as_deref(),
            limit,
            offset,
        )
        .await
        .map_err(|e| {
            tracing::warn!("Database error in list_companies: {:?}", e);
            ApiError::from(e)
        })?;

    Ok(companies
        .into_iter()
        .map(|company| CompanySummary {
            display_name: company.localized_name().pick(lang).to_string(),
            company,
        })
        .collect())
}

pub async fn get_company(state: &AppState, id: i32, lang: Language) -> ApiResult<CompanyDetail> {
    let repo = &state.repositories.companies;

    let company = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Company {} not found", id)))?;

    let certifications = repo.get_certifications(id).await?;
    let patents = repo.get_patents(id).await?;
    let technologies = repo
        .get_technologies(id)
        .await?
        .into_iter()
        .map(|(technology, category)| TechnologyDetail {
            category_name: category.as_ref().map(|c| c.name.clone()),
            category_name_en: category.and_then(|c| c.name_en),
            technology,
        })
        .collect();

    Ok(CompanyDetail {
        display_name: company.localized_name().pick(lang).to_string(),
        company,
        certifications,
        patents,
        technologies,
    })
}

/// Registers a company; every new company waits for admin review
pub async fn create_company(
    state: &AppState,
    request: CreateCompanyRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.name, "name")?;
    require(&request.email, "email")?;

    let now = Utc::now();
    let company = companies::ActiveModel {
        name: Set(request.name.trim().to_string()),
        name_en: Set(non_empty(request.name_en)),
        name_zh: Set(non_empty(request.name_zh)),
        name_ja: Set(non_empty(request.name_ja)),
        name_vi: Set(non_empty(request.name_vi)),
        name_mn: Set(non_empty(request.name_mn)),
        name_ru: Set(non_empty(request.name_ru)),
        description: Set(non_empty(request.description)),
        description_en: Set(non_empty(request.description_en)),
        description_zh: Set(non_empty(request.description_zh)),
        description_ja: Set(non_empty(request.description_ja)),
        description_vi: Set(non_empty(request.description_vi)),
        description_mn: Set(non_empty(request.description_mn)),
        description_ru: Set(non_empty(request.description_ru)),
        contact_person: Set(non_empty(request.contact_person)),
        email: Set(request.email.trim().to_string()),
        phone: Set(non_empty(request.phone)),
        website: Set(non_empty(request.website)),
        established_year: Set(request.established_year),
        annual_revenue: Set(non_empty(request.annual_revenue)),
        employee_count: Set(request.employee_count),
        address: Set(non_empty(request.address)),
        country: Set(non_empty(request.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string())),
        status: Set(CompanyStatus::Pending.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let company = state.repositories.companies.create(company).await?;
    tracing::info!("Registered company {} ({})", company.id, company.name);

    Ok(CreatedResponse { id: company.id })
}

async fn ensure_company(state: &AppState, id: i32) -> ApiResult<()> {
    if state.repositories.companies.exists(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Company {} not found", id)))
    }
}

pub async fn add_certification(
    state: &AppState,
    company_id: i32,
    request: CreateCertificationRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.certification_type, "certification_type")?;
    ensure_company(state, company_id).await?;

    let certification = company_certifications::ActiveModel {
        company_id: Set(company_id),
        certification_type: Set(request.certification_type),
        certification_number: Set(non_empty(request.certification_number)),
        issued_date: Set(request.issued_date),
        expiry_date: Set(request.expiry_date),
        ..Default::default()
    };

    let created = state
        .repositories
        .companies
        .add_certification(certification)
        .await?;
    Ok(CreatedResponse { id: created.id })
}

pub async fn add_patent(
    state: &AppState,
    company_id: i32,
    request: CreatePatentRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.patent_number, "patent_number")?;
    ensure_company(state, company_id).await?;

    let patent = company_patents::ActiveModel {
        company_id: Set(company_id),
        patent_number: Set(request.patent_number),
        patent_title: Set(non_empty(request.patent_title)),
        patent_title_en: Set(non_empty(request.patent_title_en)),
        filed_date: Set(request.filed_date),
        granted_date: Set(request.granted_date),
        country: Set(non_empty(request.country)),
        ..Default::default()
    };

    let created = state.repositories.companies.add_patent(patent).await?;
    Ok(CreatedResponse { id: created.id })
}

pub async fn add_technology(
    state: &AppState,
    company_id: i32,
    request: CreateTechnologyRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.technology_name, "technology_name")?;
    ensure_company(state, company_id).await?;

    let technology = company_technologies::ActiveModel {
        company_id: Set(company_id),
        category_id: Set(request.category_id),
        technology_name: Set(request.technology_name),
        technology_name_en: Set(non_empty(request.technology_name_en)),
        description: Set(non_empty(request.description)),
        maturity_level: Set(non_empty(request.maturity_level)),
        ..Default::default()
    };

    let created = state
        .repositories
        .companies
        .add_technology(technology)
        .await?;
    Ok(CreatedResponse { id: created.id })
}

/// Admin review. Any allowed status may follow any other.
pub async fn update_company_status(state: &AppState, id: i32, status: &str) -> ApiResult<()> {
    let status: CompanyStatus = parse_allowed(status)?;

    let updated = state
        .repositories
        .companies
        .update_status(id, status.as_str())
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound(format!("Company {} not found", id)));
    }

    tracing::info!("Company {} status set to {}", id, status);
    Ok(())
}
