//! Order Lookup Invariant Tests
//!
//! - Every fabricated order has status CREATED
//! - The description is the fixed label followed by the id
//! - The service returns the repository's status unchanged

use order_status::dao::{OrderDao, OrderRepository};
use order_status::model::{Order, DESCRIPTION_PREFIX, STATUS_CREATED};
use order_status::service::OrderService;

const SAMPLE_IDS: [i64; 8] = [0, 1, 2, 42, -1, -42, i64::MIN, i64::MAX];

/// Status is the same constant for every id.
#[test]
fn test_fetch_order_status_constant() {
    let dao = OrderDao::new();
    for id in SAMPLE_IDS {
        assert_eq!(dao.fetch_order(id).unwrap().status, STATUS_CREATED);
    }
}

/// Description is an exact prefix + id match.
#[test]
fn test_fetch_order_description_exact() {
    let dao = OrderDao::new();
    for id in SAMPLE_IDS {
        let order = dao.fetch_order(id).unwrap();
        assert_eq!(order.description, format!("{}{}", DESCRIPTION_PREFIX, id));
    }
    assert_eq!(
        dao.fetch_order(5).unwrap().description,
        "Order for customer ID: 5"
    );
}

/// Lookups are pure: same id, same record.
#[test]
fn test_fetch_order_pure() {
    let dao = OrderDao::new();
    for id in SAMPLE_IDS {
        assert_eq!(dao.fetch_order(id).unwrap(), dao.fetch_order(id).unwrap());
    }
}

#[test]
fn test_get_status_matches_dao() {
    let dao = OrderDao::new();
    let service = OrderService::new(dao);
    for id in SAMPLE_IDS {
        assert_eq!(service.get_status(id).unwrap(), dao.fetch_order(id).unwrap().status);
    }
}

/// A cloned service shares the same repository and answers identically.
#[test]
fn test_cloned_service_answers_identically() {
    let service = OrderService::new(OrderDao::new());
    let clone = service.clone();
    assert_eq!(service.get_status(9).unwrap(), clone.get_status(9).unwrap());
}

#[test]
fn test_order_id_round_trip() {
    for id in SAMPLE_IDS {
        assert_eq!(Order::new(id, STATUS_CREATED, Order::describe(id)).id, id);
    }
}
