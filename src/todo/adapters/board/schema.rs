//! Query documents and typed response schemas for the board GraphQL API.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Login query exchanging a username and password for a session.
pub const AUTHORIZE_QUERY: &str = r"query Authorize($user: String!, $password: String!) {
  authorize(user: $user, password: $password) {
    userId
    token
  }
}";

/// Board query returning the field schema and the cards of one list.
pub const BOARD_CARDS_QUERY: &str = r"query BoardCards(
  $userId: String!
  $token: String!
  $board: String!
  $list: String!
) {
  board(auth: {userId: $userId, token: $token}, title: $board) {
    customFields {
      id: _id
      name
    }
    list(title: $list) {
      cards {
        title
        customFields {
          id: _id
          value
        }
      }
    }
  }
}";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Errors reported by the server; empty on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQlError>,
    /// Query payload.
    pub data: Option<T>,
}

/// One entry of a GraphQL error list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

/// `data` payload of [`AUTHORIZE_QUERY`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizeData {
    /// Session returned by the login, absent when the login failed.
    pub authorize: Option<AuthorizePayload>,
}

/// Session identifiers returned by a successful login.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizePayload {
    /// Board user identifier.
    #[serde(rename = "userId", default)]
    pub user_id: String,
    /// Bearer token.
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for AuthorizePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizePayload")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// `data` payload of [`BOARD_CARDS_QUERY`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardData {
    /// Requested board, absent when no board carries the title.
    pub board: Option<BoardPayload>,
}

/// Board schema and the requested list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoardPayload {
    /// Custom fields defined on the board.
    #[serde(rename = "customFields", default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomFieldDefinition>,
    /// Requested list, absent when no list carries the title.
    pub list: Option<ListPayload>,
}

/// Board-level custom field definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomFieldDefinition {
    /// Stable field identifier.
    pub id: String,
    /// Display name of the field.
    pub name: String,
}

/// Cards of a list, in board order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListPayload {
    /// Cards of the list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<CardPayload>,
}

/// A single card and its custom field values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardPayload {
    /// Card title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Values set on the card, keyed by field identifier.
    #[serde(rename = "customFields", default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CardFieldValue>,
}

/// Value of one custom field on a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardFieldValue {
    /// Identifier of the field definition.
    pub id: String,
    /// Raw value; text fields carry strings.
    #[serde(default)]
    pub value: Option<Value>,
}

impl CardFieldValue {
    /// Returns the value rendered as text.
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON form.
    /// `null`, arrays and objects yield `None`.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
