//! Status and type allow-lists for marketplace records.
//!
//! Statuses are stored as plain text columns; these enums are the only
//! place that decides which values are accepted from clients.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Error returned when a value is outside an allow-list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: {value}")]
pub struct NotAllowed {
    pub kind: &'static str,
    pub value: String,
}

/// Text-backed enum whose variants are the accepted column values
pub trait AllowList: FromStr + Copy + Into<&'static str> {
    /// Field name reported when a value is rejected
    const KIND: &'static str;

    fn as_str(&self) -> &'static str {
        (*self).into()
    }

    fn from_text(value: &str) -> Result<Self, NotAllowed> {
        value.parse().map_err(|_| NotAllowed {
            kind: Self::KIND,
            value: value.to_string(),
        })
    }
}

/// Admin review state of a registered company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CompanyStatus {
    Pending,
    Approved,
    Rejected,
}

impl AllowList for CompanyStatus {
    const KIND: &'static str = "status";
}

/// Visibility state of a technology listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Closed,
    Pending,
}

impl AllowList for ListingStatus {
    const KIND: &'static str = "status";
}

/// What the seller offers in a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ListingType {
    TechSale,
    EquitySale,
    Collaboration,
    OemOdm,
}

impl AllowList for ListingType {
    const KIND: &'static str = "listing_type";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ConsultationStatus {
    Pending,
    Responded,
    Closed,
}

impl AllowList for ConsultationStatus {
    const KIND: &'static str = "status";
}

/// Client-driven payment state; nothing here is verified on chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Confirming,
    Completed,
    Failed,
    Refunded,
}

impl AllowList for TransactionStatus {
    const KIND: &'static str = "status";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FeeStatus {
    Pending,
    Collected,
    Cancelled,
}

impl AllowList for FeeStatus {
    const KIND: &'static str = "fee status";
}

impl TransactionStatus {
    /// Fee state implied by a transaction entering this status
    pub fn fee_status(&self) -> FeeStatus {
        match self {
            TransactionStatus::Pending | TransactionStatus::Confirming => FeeStatus::Pending,
            TransactionStatus::Completed => FeeStatus::Collected,
            TransactionStatus::Failed | TransactionStatus::Refunded => FeeStatus::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_company_status_allow_list() {
        assert_eq!(CompanyStatus::from_text("approved"), Ok(CompanyStatus::Approved));
        assert_eq!(CompanyStatus::iter().count(), 3);

        let err = CompanyStatus::from_text("active").unwrap_err();
        assert_eq!(err.to_string(), "Invalid status: active");
    }

    #[test]
    fn test_listing_status_allow_list() {
        for status in ListingStatus::iter() {
            assert_eq!(ListingStatus::from_text(status.as_str()), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert!(ListingStatus::from_text("approved").is_err());
        assert!(ListingStatus::from_text("ACTIVE").is_err());
    }

    #[test]
    fn test_listing_types() {
        assert_eq!(ListingType::from_text("oem_odm"), Ok(ListingType::OemOdm));
        assert_eq!(ListingType::TechSale.as_str(), "tech_sale");
        assert_eq!(ListingType::EquitySale.to_string(), "equity_sale");

        let err = ListingType::from_text("oem").unwrap_err();
        assert_eq!(err.to_string(), "Invalid listing_type: oem");
    }

    #[test]
    fn test_fee_status_kind() {
        let err = FeeStatus::from_text("paid").unwrap_err();
        assert_eq!(err.to_string(), "Invalid fee status: paid");
    }

    #[test]
    fn test_transaction_status_drives_fee_status() {
        assert_eq!(TransactionStatus::Pending.fee_status(), FeeStatus::Pending);
        assert_eq!(TransactionStatus::Confirming.fee_status(), FeeStatus::Pending);
        assert_eq!(TransactionStatus::Completed.fee_status(), FeeStatus::Collected);
        assert_eq!(TransactionStatus::Failed.fee_status(), FeeStatus::Cancelled);
        assert_eq!(TransactionStatus::Refunded.fee_status(), FeeStatus::Cancelled);
        assert!(TransactionStatus::from_text("settled").is_err());
    }

    #[test]
    fn test_consultation_status() {
        assert_eq!(
            ConsultationStatus::from_text("responded"),
            Ok(ConsultationStatus::Responded)
        );
        assert!(ConsultationStatus::from_text("done").is_err());
    }
}
