//! Integration tests for relationship traversal between resources.

use inventree_client::{
    ApiClient, BomItem, ClientConfig, Credentials, FilterSet, HostUrl, Model, Part, ResourceError,
    Secret,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts the handshake mocks and returns a connected client.
async fn connect(server: &MockServer) -> ApiClient {
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server": "InvenTree",
            "version": "0.14.0",
            "apiVersion": 250
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pk": 1})))
        .mount(server)
        .await;

    let config = ClientConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .credentials(Credentials::token(Secret::new("test-token").unwrap()))
        .build()
        .unwrap();

    ApiClient::connect(&config).await.unwrap()
}

async fn mount_part(server: &MockServer, pk: i64, category: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/part/{pk}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pk": pk,
            "name": format!("part-{pk}"),
            "category": category
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_bom_items_filters_by_owning_part() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 10, json!(7)).await;

    Mock::given(method("GET"))
        .and(path("/api/bom/"))
        .and(query_param("part", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "results": [
                {"pk": 101, "part": 10, "sub_part": 4, "quantity": 2},
                {"pk": 102, "part": 10, "sub_part": 9, "quantity": 1}
            ]
        })))
        .mount(&server)
        .await;

    let part = Part::retrieve(&client, 10).await.unwrap();

    // Traversal is a filtered list: both paths must see the same rows
    let via_part = part.bom_items(&client, FilterSet::new()).await.unwrap();
    let via_list = BomItem::list(&client, FilterSet::new().with("part", 10))
        .await
        .unwrap();

    let pks = |items: &[inventree_client::Instance<BomItem>]| {
        items.iter().map(|i| i.pk()).collect::<Vec<_>>()
    };
    assert_eq!(pks(&via_part), vec![101, 102]);
    assert_eq!(pks(&via_part), pks(&via_list));
}

#[tokio::test]
async fn test_relationship_carries_extra_filters() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 10, json!(7)).await;

    Mock::given(method("GET"))
        .and(path("/api/bom/"))
        .and(query_param("part", "10"))
        .and(query_param("validated", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "results": [{"pk": 101, "part": 10, "sub_part": 4, "validated": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let part = Part::retrieve(&client, 10).await.unwrap();
    let bom = part
        .bom_items(&client, FilterSet::new().with("validated", true))
        .await
        .unwrap();

    assert_eq!(bom.len(), 1);
    assert_eq!(bom[0].pk(), 101);
}

#[tokio::test]
async fn test_category_parts_filters_by_category() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/part/category/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pk": 3,
            "name": "Fasteners",
            "parent": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/part/"))
        .and(query_param("category", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "results": [{"pk": 10, "name": "M3 screw", "category": 3}]
        })))
        .mount(&server)
        .await;

    let category = inventree_client::PartCategory::retrieve(&client, 3)
        .await
        .unwrap();
    let parts = category.parts(&client, FilterSet::new()).await.unwrap();

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].get_str("name").unwrap(), Some("M3 screw"));
}

#[tokio::test]
async fn test_part_category_retrieves_the_linked_row() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 10, json!(7)).await;

    Mock::given(method("GET"))
        .and(path("/api/part/category/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pk": 7,
            "name": "Screws",
            "parent": 3
        })))
        .mount(&server)
        .await;

    let part = Part::retrieve(&client, 10).await.unwrap();
    let category = part.category(&client).await.unwrap().unwrap();

    assert_eq!(category.pk(), 7);
    assert_eq!(category.get_str("name").unwrap(), Some("Screws"));
}

#[tokio::test]
async fn test_part_without_category_traverses_to_none() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 11, json!(null)).await;

    let part = Part::retrieve(&client, 11).await.unwrap();
    assert!(part.category(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn test_bom_item_sub_part_retrieves_the_component() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 4, json!(7)).await;

    Mock::given(method("GET"))
        .and(path("/api/bom/101/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pk": 101,
            "part": 10,
            "sub_part": 4,
            "quantity": 2
        })))
        .mount(&server)
        .await;

    let item = BomItem::retrieve(&client, 101).await.unwrap();
    let component = item.sub_part(&client).await.unwrap().unwrap();

    assert_eq!(component.pk(), 4);
    assert_eq!(component.get_str("name").unwrap(), Some("part-4"));
}

#[tokio::test]
async fn test_deleted_instance_cannot_traverse() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_part(&server, 10, json!(7)).await;

    Mock::given(method("DELETE"))
        .and(path("/api/part/10/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut part = Part::retrieve(&client, 10).await.unwrap();
    part.delete(&client).await.unwrap();

    let error = part.bom_items(&client, FilterSet::new()).await.unwrap_err();
    assert!(matches!(error, ResourceError::InvalidInstance { .. }));
}
