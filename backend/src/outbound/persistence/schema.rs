//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `migrations/` exactly; `diesel print-schema` regenerates
//! them from a live database.

diesel::table! {
    /// Registered business accounts.
    users (id) {
        id -> Int4,
        /// Unique login email (max 120 characters).
        email -> Varchar,
        company_name -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Parcels known to the tracking page.
    packages (id) {
        id -> Int4,
        /// Unique, immutable customer-facing identifier.
        tracking_number -> Varchar,
        sender_name -> Varchar,
        recipient_address -> Varchar,
        status -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Onboarding requests from prospective business customers.
    leads (id) {
        id -> Int4,
        business_name -> Varchar,
        contact_person -> Varchar,
        phone -> Varchar,
        monthly_volume -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, packages, leads);
