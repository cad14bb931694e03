//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Directory users.
    ///
    /// `id` is a `BIGSERIAL`; explicit-id inserts resynchronise its sequence.
    users (id) {
        id -> Int8,
        email -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        avatar -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
