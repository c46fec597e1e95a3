use missions::repositories::{CustomerRepository, ModuleRepository};

use crate::common::{fixture, stored_module};

#[tokio::test]
async fn test_get_customer_by_id() {
    let f = fixture().await;

    let found = CustomerRepository::get_by_id(&f.storage.conn, &f.customer.uuid).await.unwrap();
    assert_eq!(found, Some(f.customer.clone()));
}

#[tokio::test]
async fn test_get_moderators() {
    let f = fixture().await;
    CustomerRepository::create(&f.storage.conn, "mod-0", "Barbara", true).await.unwrap();

    let logins: Vec<String> = CustomerRepository::get_moderators(&f.storage.conn)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.login)
        .collect();
    assert_eq!(logins, vec!["mod-0".to_string(), "mod-1".to_string()]);
}

#[tokio::test]
async fn test_duplicate_login_is_a_storage_error() {
    let f = fixture().await;
    let result = CustomerRepository::create(&f.storage.conn, "cust-1", "Someone", false).await;
    assert!(result.unwrap_err().is_storage());
}

#[tokio::test]
async fn test_modules_ordered_by_name() {
    let f = fixture().await;
    stored_module(&f.storage, "Thruster").await;
    stored_module(&f.storage, "Antenna").await;

    let names: Vec<String> = ModuleRepository::get_all(&f.storage.conn)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Antenna".to_string(), "Thruster".to_string()]);
}
