use rusqlite::Connection;

use crate::db::queries;
use crate::models::ServiceOffering;

/// Resolves a service identifier to a bookable offering. A numeric identifier
/// is a primary key, anything else is matched against the unique name; either
/// way only active offerings qualify. `None` is a routine outcome, not a fault.
pub fn find_bookable(
    conn: &Connection,
    identifier: &str,
) -> anyhow::Result<Option<ServiceOffering>> {
    let identifier = identifier.trim();

    if let Ok(id) = identifier.parse::<i64>() {
        return queries::get_active_service_by_id(conn, id);
    }
    queries::get_active_service_by_name(conn, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::ServiceOffering;
    use chrono::Utc;

    fn seed_service(conn: &Connection, name: &str, active: bool) -> i64 {
        let now = Utc::now().naive_utc();
        queries::create_service(
            conn,
            &ServiceOffering {
                id: 0,
                name: name.to_string(),
                description: String::new(),
                price_min: Some(10_000.0),
                price_max: Some(25_000.0),
                duration_minutes: 30,
                active,
                display_order: 0,
                created_at: now,
                updated_at: now,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let conn = db::init_db(":memory:").unwrap();
        let id = seed_service(&conn, "Détartrage", true);

        let found = find_bookable(&conn, &id.to_string()).unwrap().unwrap();
        assert_eq!(found.name, "Détartrage");
    }

    #[test]
    fn test_lookup_by_name() {
        let conn = db::init_db(":memory:").unwrap();
        seed_service(&conn, "Orthodontie", true);

        let found = find_bookable(&conn, "Orthodontie").unwrap().unwrap();
        assert_eq!(found.name, "Orthodontie");
    }

    #[test]
    fn test_inactive_service_not_bookable() {
        let conn = db::init_db(":memory:").unwrap();
        let id = seed_service(&conn, "Blanchiment", false);

        assert!(find_bookable(&conn, &id.to_string()).unwrap().is_none());
        assert!(find_bookable(&conn, "Blanchiment").unwrap().is_none());
    }

    #[test]
    fn test_unknown_identifier() {
        let conn = db::init_db(":memory:").unwrap();
        assert!(find_bookable(&conn, "999").unwrap().is_none());
        assert!(find_bookable(&conn, "Implantologie").unwrap().is_none());
    }
}
