//! Diesel schema definitions.

diesel::table! {
    registrations (name) {
        name -> Text,
        remote_id -> Text,
        updated_at -> Timestamp,
    }
}
