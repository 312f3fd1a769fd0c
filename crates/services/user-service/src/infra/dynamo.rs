//! DynamoDB client initialization and table management.

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use common::StorageConfig;
use domain::ATTR_EMAIL;

/// DynamoDB wrapper for client management.
///
/// Built once at startup; the inner client is cheap to clone and shares its
/// connection pool.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
}

impl Database {
    /// Load AWS configuration and build the client.
    pub async fn connect(config: &StorageConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        tracing::info!(
            region = %config.region,
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "DynamoDB client configured"
        );

        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Get a clone of the client.
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }

    /// Create the users table with `email` as partition key and on-demand billing.
    pub async fn create_table(&self, table_name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(ATTR_EMAIL)
            .key_type(KeyType::Hash)
            .build()?;

        let key_attribute = AttributeDefinition::builder()
            .attribute_name(ATTR_EMAIL)
            .attribute_type(ScalarAttributeType::S)
            .build()?;

        self.client
            .create_table()
            .table_name(table_name)
            .key_schema(key_schema)
            .attribute_definitions(key_attribute)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await?;

        Ok(())
    }

    /// Table status (`ACTIVE`, `CREATING`, ...), or `None` if the table does not exist.
    pub async fn table_status(
        &self,
        table_name: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error>> {
        match self.client.describe_table().table_name(table_name).send().await {
            Ok(output) => Ok(Some(
                output
                    .table()
                    .and_then(|table| table.table_status())
                    .map(|status| status.as_str().to_string())
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
            )),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    Ok(None)
                } else {
                    Err(err.into())
                }
            }
        }
    }
}
