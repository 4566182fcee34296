//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` and `username` carry the unique constraints `users_email_key`
    /// and `users_username_key`.
    users (id) {
        /// Serial primary key assigned on insert.
        id -> Int4,
        email -> Varchar,
        username -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Stored credential (PHC string), never the plaintext.
        password -> Varchar,
        created_at -> Timestamptz,
        /// Maintained by the `users_touch_updated_at` trigger.
        updated_at -> Timestamptz,
    }
}
