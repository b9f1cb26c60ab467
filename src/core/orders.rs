use crate::config::ClientConfig;
use crate::core::request::RequestExecutor;
use crate::domain::model::{Order, OrderId, RequestOptions};
use crate::domain::ports::OrdersApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

const RESOURCE: &str = "pedidos";

/// Client for the `pedidos` resource.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    executor: RequestExecutor,
}

impl OrdersClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::from_executor(RequestExecutor::new(config)?))
    }

    pub fn from_executor(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub async fn list(&self) -> Result<Order> {
        self.executor
            .execute(RESOURCE, RequestOptions::new(Method::GET))
            .await
    }

    pub async fn get(&self, id: &OrderId) -> Result<Order> {
        self.executor
            .execute(&item_path(id), RequestOptions::new(Method::GET))
            .await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<Order> {
        let options = RequestOptions::new(Method::POST).with_json_body(data)?;
        self.executor.execute(RESOURCE, options).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, id: &OrderId, data: &T) -> Result<Order> {
        let options = RequestOptions::new(Method::PUT).with_json_body(data)?;
        self.executor.execute(&item_path(id), options).await
    }

    pub async fn delete(&self, id: &OrderId) -> Result<Order> {
        self.executor
            .execute(&item_path(id), RequestOptions::new(Method::DELETE))
            .await
    }
}

fn item_path(id: &OrderId) -> String {
    format!("{}/{}", RESOURCE, id)
}

#[async_trait]
impl OrdersApi for OrdersClient {
    async fn list_orders(&self) -> Result<Order> {
        self.list().await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order> {
        self.get(id).await
    }

    async fn create_order(&self, data: &Order) -> Result<Order> {
        self.create(data).await
    }

    async fn update_order(&self, id: &OrderId, data: &Order) -> Result<Order> {
        self.update(id, data).await
    }

    async fn delete_order(&self, id: &OrderId) -> Result<Order> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> OrdersClient {
        OrdersClient::new(&ClientConfig::new(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/pedidos");
                then.status(200).json_body(json!([{"id": 1}, {"id": 2}]));
            })
            .await;

        let orders = client_for(&server).list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(orders.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_get_by_numeric_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/pedidos/42");
                then.status(200).json_body(json!({"id": 42, "total": 10.5}));
            })
            .await;

        let order = client_for(&server)
            .get(&OrderId::from(42u64))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(order["total"], 10.5);
    }

    #[tokio::test]
    async fn test_create_sends_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/pedidos")
                    .header("content-type", "application/json")
                    .header("accept", "application/json")
                    .json_body(json!({"name": "x"}));
                then.status(201).json_body(json!({"id": 1, "name": "x"}));
            })
            .await;

        let created = client_for(&server)
            .create(&json!({"name": "x"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created, json!({"id": 1, "name": "x"}));
    }

    #[tokio::test]
    async fn test_create_from_typed_struct() {
        #[derive(Serialize)]
        struct NewOrder<'a> {
            customer: &'a str,
            items: Vec<u32>,
        }

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/pedidos")
                    .json_body(json!({"customer": "ana", "items": [3, 4]}));
                then.status(201).json_body(json!({"id": 9}));
            })
            .await;

        let created = client_for(&server)
            .create(&NewOrder {
                customer: "ana",
                items: vec![3, 4],
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created["id"], 9);
    }

    #[tokio::test]
    async fn test_update() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/pedidos/abc")
                    .json_body(json!({"status": "paid"}));
                then.status(200).json_body(json!({"id": "abc", "status": "paid"}));
            })
            .await;

        let id = OrderId::new("abc").unwrap();
        let updated = client_for(&server)
            .update(&id, &json!({"status": "paid"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(updated["status"], "paid");
    }

    #[tokio::test]
    async fn test_delete_no_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/pedidos/7");
                then.status(204);
            })
            .await;

        let result = client_for(&server)
            .delete(&OrderId::from(7u32))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_null());
    }

    #[tokio::test]
    async fn test_ids_that_would_escape_the_resource_are_rejected() {
        for raw in [".", "..", "a\\b", "%2e%2e"] {
            let err = raw.parse::<OrderId>().unwrap_err();
            assert!(matches!(err, crate::ClientError::InvalidOrderId { .. }), "{}", raw);
        }

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/pedidos/a.b");
                then.status(204);
            })
            .await;

        let id = OrderId::new("a.b").unwrap();
        let result = client_for(&server).delete(&id).await.unwrap();

        mock.assert_async().await;
        assert!(result.is_null());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/pedidos/404");
                then.status(404).body("Not found");
            })
            .await;

        let err = client_for(&server)
            .get(&OrderId::from(404u32))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "HTTP 404 - Not found");
    }

    #[tokio::test]
    async fn test_port_delegates_to_client() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/pedidos");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = client_for(&server);
        let api: &dyn OrdersApi = &client;
        let orders = api.list_orders().await.unwrap();

        mock.assert_async().await;
        assert_eq!(orders, json!([]));
    }
}
