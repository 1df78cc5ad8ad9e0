//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use whiskyshelf_core::storage::{Result, WhiskyRepository};
use whiskyshelf_core::whisky::{Whisky, WhiskyId};

use super::conversions::{item_to_whisky, whisky_to_item};
use super::error::{
    map_create_error, map_delete_item_error, map_get_item_error, map_scan_error, map_update_error,
};

/// DynamoDB-based repository implementation.
///
/// One table, partition key `id` (string). Table provisioning is handled
/// by deployment tooling, not the service.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the ambient AWS configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_env(table_name: &str) -> Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        Ok(Self::new(client, table_name))
    }
}

#[async_trait]
impl WhiskyRepository for DynamoDbRepository {
    async fn list_all(&self) -> Result<Vec<Whisky>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_whisky).collect()
    }

    async fn create(&self, whisky: Whisky) -> Result<Whisky> {
        // The document's native identifier, assigned exactly once here.
        let id = WhiskyId::new(Uuid::new_v4().to_string());
        let stored = Whisky {
            id: Some(id.clone()),
            ..whisky
        };
        let item = whisky_to_item(&stored)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| map_create_error(e, id.to_string()))?;

        Ok(stored)
    }

    async fn get_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, id.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_whisky(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_by_id(&self, id: &WhiskyId, whisky: Whisky) -> Result<Whisky> {
        let stored = Whisky {
            id: Some(id.clone()),
            ..whisky
        };
        let item = whisky_to_item(&stored)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| map_update_error(e, id.to_string()))?;

        // The document was written from these fields; no re-read needed.
        Ok(stored)
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> Result<()> {
        // No condition expression: deleting an absent document still succeeds.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
