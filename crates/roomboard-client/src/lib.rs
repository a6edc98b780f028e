//! Client
//!
//! Data-access layer for the room board. Everything the application needs
//! from the outside world goes through two traits:
//!
//! - [`RoomsApi`]: the rooms+messages query and the room/comment mutations
//! - [`AuthApi`]: email/password sign-in and sign-up against the hosted auth
//!   service
//!
//! # Implementations
//!
//! - [`GraphqlClient`]: GraphQL over HTTP (reqwest)
//! - [`HostedAuth`]: hosted authentication REST endpoints (reqwest)
//! - [`MemoryBackend`]: in-process backend with fault injection, used by the
//!   demo mode and by tests

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod auth;
mod error;
mod graphql;
mod memory;
mod types;

pub use api::{AuthApi, RoomsApi};
pub use auth::HostedAuth;
pub use error::{ApiError, AuthError};
pub use graphql::{
    ADD_COMMENT_TO_ROOM, CREATE_ROOM, DELETE_ROOM, GET_ROOMS_WITH_MESSAGES, GraphqlClient,
    GraphqlResponse, Operation,
};
pub use memory::{CallCounts, Fault, MemoryBackend};
pub use types::{AuthSession, CreatedRoom, Credentials, DeletedRoom, MessageRecord, RoomRecord};
