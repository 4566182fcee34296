//! Diesel row types for the `users` table.
//!
//! Internal to the persistence adapter; the domain only sees [`User`].

use diesel::prelude::*;

use crate::domain::{StoredCredential, User, UserId, UserProfile};

use super::schema::users;

/// Row read back from `users`. Audit timestamps are not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::new(row.id),
            UserProfile::new(row.email, row.username, row.first_name, row.last_name),
            StoredCredential::new(row.password),
        )
    }
}

/// Column values written on insert and on full replacement.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChanges<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
}

impl<'a> UserChanges<'a> {
    pub fn new(profile: &'a UserProfile, credential: &'a StoredCredential) -> Self {
        Self {
            email: &profile.email,
            username: &profile.username,
            first_name: &profile.first_name,
            last_name: &profile.last_name,
            password: credential.as_str(),
        }
    }
}
