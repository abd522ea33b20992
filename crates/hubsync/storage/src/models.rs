//! Diesel row models.

use diesel::prelude::*;

use crate::schema::registrations;

/// Insertable registration row.
#[derive(Insertable)]
#[diesel(table_name = registrations)]
pub struct NewRegistrationRow<'a> {
    pub name: &'a str,
    pub remote_id: &'a str,
    pub updated_at: chrono::NaiveDateTime,
}
