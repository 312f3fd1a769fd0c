//! DynamoDB-backed user repository.

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;

use common::{AppError, AppResult};
use domain::{User, ATTR_EMAIL};

use super::conversions::{from_item, key, to_item, Item};
use super::user_repository::{UserRepository, WriteCondition};

/// Placeholder bound to the key attribute in condition expressions
const KEY_PLACEHOLDER: &str = "#pk";

/// User repository over a single DynamoDB table
pub struct DynamoUserStore {
    client: Client,
    table_name: String,
}

impl DynamoUserStore {
    /// Create new repository instance
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserRepository for DynamoUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_EMAIL, key(email))
            .send()
            .await
            .map_err(|e| AppError::fetch(DisplayErrorContext(e)))?;

        output
            .item()
            .filter(|item| !item.is_empty())
            .map(from_item)
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| AppError::fetch(DisplayErrorContext(e)))?;

            for item in output.items() {
                users.push(from_item(item)?);
            }

            match output.last_evaluated_key() {
                Some(last) if !last.is_empty() => start_key = Some(last.clone()),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = users.len(), "Scanned users");
        Ok(users)
    }

    async fn put(&self, user: &User, condition: WriteCondition) -> AppResult<()> {
        let item = to_item(user)?;

        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item));

        if let Some(expression) = condition.expression() {
            request = request
                .condition_expression(expression)
                .expression_attribute_names(KEY_PLACEHOLDER, ATTR_EMAIL);
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_conditional_check_failed_exception() {
                    Err(condition.violation())
                } else {
                    Err(AppError::write(DisplayErrorContext(err)))
                }
            }
        }
    }

    async fn delete(&self, email: &str) -> AppResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_EMAIL, key(email))
            .send()
            .await
            .map_err(|e| AppError::delete(DisplayErrorContext(e)))?;

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| AppError::fetch(DisplayErrorContext(e)))?;

        Ok(())
    }
}
