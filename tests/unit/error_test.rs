//! Tests for error types

use fitting_rooms::core::SimError;

#[test]
fn test_config_error() {
    let err = SimError::Config("room_count must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: room_count must be greater than 0"
    );
}

#[test]
fn test_pool_closed_error() {
    let err = SimError::PoolClosed;
    assert_eq!(format!("{}", err), "room pool closed");
}

#[test]
fn test_customer_task_error() {
    let err = SimError::CustomerTask("panicked".to_string());
    assert_eq!(format!("{}", err), "customer task failed: panicked");
}
