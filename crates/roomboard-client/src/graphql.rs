//! GraphQL over HTTP.
//!
//! Provides [`GraphqlClient`], a thin layer that posts the four room-board
//! operations to a Hasura-style endpoint and decodes their payloads. Every
//! call is a single POST.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{ApiError, CreatedRoom, DeletedRoom, MessageRecord, RoomRecord, RoomsApi};

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, sent as `operationName`.
    pub name: &'static str,
    /// Query or mutation text.
    pub document: &'static str,
}

/// Rooms with their nested messages.
pub const GET_ROOMS_WITH_MESSAGES: Operation = Operation {
    name: "GetRoomsWithMessages",
    document: "query GetRoomsWithMessages {
  rooms {
    id
    name
    created_at
    user_id
    messages {
      id
      content
      user_id
      created_at
      room_id
    }
  }
}",
};

/// Insert a room by name.
pub const CREATE_ROOM: Operation = Operation {
    name: "CreateRoom",
    document: "mutation CreateRoom($name: String!) {
  insert_rooms_one(object: { name: $name }) {
    id
    name
  }
}",
};

/// Delete a room by primary key.
pub const DELETE_ROOM: Operation = Operation {
    name: "DeleteRoom",
    document: "mutation DeleteRoom($id: uuid!) {
  delete_rooms_by_pk(id: $id) {
    id
  }
}",
};

/// Insert a message into a room.
pub const ADD_COMMENT_TO_ROOM: Operation = Operation {
    name: "AddCommentToRoom",
    document: "mutation AddCommentToRoom($room_id: uuid!, $content: String!) {
  insert_messages_one(object: { room_id: $room_id, content: $content }) {
    id
    content
    user_id
    created_at
    room_id
  }
}",
};

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Standard GraphQL response envelope (`data` plus optional `errors`).
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

impl<T: DeserializeOwned> GraphqlResponse<T> {
    /// Decode an envelope from a response body.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Collapse the envelope into the payload.
    ///
    /// Any entry in `errors` wins over partial data; the first entry's message
    /// becomes the error text.
    pub fn into_result(self) -> Result<T, ApiError> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(ApiError::Graphql(first.message));
        }
        self.data.ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct RoomsData {
    rooms: Vec<RoomRecord>,
}

#[derive(Deserialize)]
struct CreateRoomData {
    insert_rooms_one: Option<CreatedRoom>,
}

#[derive(Deserialize)]
struct AddCommentData {
    insert_messages_one: Option<MessageRecord>,
}

#[derive(Deserialize)]
struct DeleteRoomData {
    delete_rooms_by_pk: Option<DeletedRoom>,
}

/// GraphQL client for the room-board backend.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl GraphqlClient {
    /// Create a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint: endpoint.into(), access_token: None })
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a bearer token is attached to requests.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Value,
    ) -> Result<T, ApiError> {
        tracing::debug!(operation = operation.name, "graphql request");

        let body =
            GraphqlRequest { query: operation.document, variables, operation_name: operation.name };
        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation = operation.name, %status, "graphql request rejected");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        GraphqlResponse::<T>::parse(&body)?.into_result()
    }
}

impl RoomsApi for GraphqlClient {
    async fn rooms_with_messages(&self) -> Result<Vec<RoomRecord>, ApiError> {
        let data: RoomsData = self.execute(GET_ROOMS_WITH_MESSAGES, json!({})).await?;
        Ok(data.rooms)
    }

    async fn create_room(&self, name: &str) -> Result<Option<CreatedRoom>, ApiError> {
        let data: CreateRoomData = self.execute(CREATE_ROOM, json!({ "name": name })).await?;
        Ok(data.insert_rooms_one)
    }

    async fn add_comment(
        &self,
        room_id: &str,
        content: &str,
    ) -> Result<Option<MessageRecord>, ApiError> {
        let variables = json!({ "room_id": room_id, "content": content });
        let data: AddCommentData = self.execute(ADD_COMMENT_TO_ROOM, variables).await?;
        Ok(data.insert_messages_one)
    }

    async fn delete_room(&self, id: &str) -> Result<Option<DeletedRoom>, ApiError> {
        let data: DeleteRoomData = self.execute(DELETE_ROOM, json!({ "id": id })).await?;
        Ok(data.delete_rooms_by_pk)
    }

    fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }
}
