use crate::domain::model::{Order, OrderId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// CRUD surface of the `pedidos` resource.
///
/// Every call resolves to the parsed JSON response, or `Value::Null` when the
/// service answers 204.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn list_orders(&self) -> Result<Order>;
    async fn get_order(&self, id: &OrderId) -> Result<Order>;
    async fn create_order(&self, data: &Order) -> Result<Order>;
    async fn update_order(&self, id: &OrderId, data: &Order) -> Result<Order>;
    async fn delete_order(&self, id: &OrderId) -> Result<Order>;
}
