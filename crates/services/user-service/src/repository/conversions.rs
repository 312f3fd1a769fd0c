//! Conversions between `User` and DynamoDB items.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use common::{AppError, AppResult};
use domain::{User, ATTR_EMAIL, ATTR_FIRST_NAME, ATTR_LAST_NAME};

/// Native attribute representation of one record
pub type Item = HashMap<String, AttributeValue>;

/// Key attribute value for `email`
pub fn key(email: &str) -> AttributeValue {
    AttributeValue::S(email.to_string())
}

/// Encode a user into an item.
///
/// DynamoDB rejects empty strings in key attributes, so an empty email is
/// refused here rather than by the store.
pub fn to_item(user: &User) -> AppResult<Item> {
    if user.email.is_empty() {
        return Err(AppError::encode(format!(
            "key attribute '{}' must not be empty",
            ATTR_EMAIL
        )));
    }

    Ok(HashMap::from([
        (ATTR_EMAIL.to_string(), key(&user.email)),
        (
            ATTR_FIRST_NAME.to_string(),
            AttributeValue::S(user.first_name.clone()),
        ),
        (
            ATTR_LAST_NAME.to_string(),
            AttributeValue::S(user.last_name.clone()),
        ),
    ]))
}

/// Decode an item into a user. Missing attributes decode as empty strings.
pub fn from_item(item: &Item) -> AppResult<User> {
    Ok(User {
        email: string_attr(item, ATTR_EMAIL)?,
        first_name: string_attr(item, ATTR_FIRST_NAME)?,
        last_name: string_attr(item, ATTR_LAST_NAME)?,
    })
}

fn string_attr(item: &Item, name: &str) -> AppResult<String> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(other) => Err(AppError::decode(format!(
            "attribute '{}' is not a string: {:?}",
            name, other
        ))),
    }
}
