//! Domain-level constants.
//!
//! Attribute names and the fixed client-facing error messages.

// =============================================================================
// Storage Layout
// =============================================================================

/// Partition key attribute of the users table
pub const ATTR_EMAIL: &str = "email";

/// First name attribute
pub const ATTR_FIRST_NAME: &str = "firstName";

/// Last name attribute
pub const ATTR_LAST_NAME: &str = "lastName";

// =============================================================================
// Validation
// =============================================================================

/// Shortest string that can still hold `a@b`
pub const MIN_EMAIL_LENGTH: usize = 3;

/// Longest address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

// =============================================================================
// Error Messages
// =============================================================================

pub const MSG_FETCH_FAILURE: &str = "Failed to fetch record";
pub const MSG_DECODE_FAILURE: &str = "Failed to unmarshal record";
pub const MSG_INVALID_USER_DATA: &str = "Invalid user data";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_ENCODE_FAILURE: &str = "Could not marshal record";
pub const MSG_DELETE_FAILURE: &str = "Could not delete record";
pub const MSG_WRITE_FAILURE: &str = "Could not dynamo put item";
pub const MSG_USER_ALREADY_EXISTS: &str = "User already exists";
pub const MSG_USER_DOES_NOT_EXIST: &str = "User does not exist";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
