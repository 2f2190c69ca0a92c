//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it. Conversions back into domain types re-validate stored values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    CompanyName, EmailAddress, Lead, LeadId, Package, PackageId, PackageStatus,
    PackageValidationError, TrackingNumber, User, UserId, UserValidationError,
};

use super::schema::{leads, packages, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub company_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Split the row into the domain user and its stored hash.
    pub fn into_parts(self) -> Result<(User, String), UserValidationError> {
        let user = User::new(
            UserId::new(self.id),
            EmailAddress::new(self.email)?,
            CompanyName::new(self.company_name)?,
            self.created_at,
        );
        Ok((user, self.password_hash))
    }
}

/// Insertable struct for creating account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub company_name: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the packages table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = packages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PackageRow {
    pub id: i32,
    pub tracking_number: String,
    pub sender_name: String,
    pub recipient_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for Package {
    type Error = PackageValidationError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PackageId::new(row.id),
            tracking_number: TrackingNumber::new(row.tracking_number)?,
            sender_name: row.sender_name,
            recipient_address: row.recipient_address,
            status: PackageStatus::new(row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Insertable struct for creating package records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = packages)]
pub(crate) struct NewPackageRow<'a> {
    pub tracking_number: &'a str,
    pub sender_name: &'a str,
    pub recipient_address: &'a str,
    pub status: &'a str,
}

/// Row struct for reading from the leads table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = leads)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LeadRow {
    pub id: i32,
    pub business_name: String,
    pub contact_person: String,
    pub phone: String,
    pub monthly_volume: i32,
    pub created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Self {
            id: LeadId::new(row.id),
            business_name: row.business_name,
            contact_person: row.contact_person,
            phone: row.phone,
            monthly_volume: row.monthly_volume,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating lead records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leads)]
pub(crate) struct NewLeadRow<'a> {
    pub business_name: &'a str,
    pub contact_person: &'a str,
    pub phone: &'a str,
    pub monthly_volume: i32,
}
