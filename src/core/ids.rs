use uuid::Uuid;

/// Fresh opaque key for a CV list item.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
