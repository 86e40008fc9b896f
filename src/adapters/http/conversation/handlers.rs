//! HTTP handlers for the retention flow endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    GetConversationHandler, GetConversationQuery, ResolveOfferCommand, ResolveOfferHandler,
    SendMessageCommand, SendMessageHandler, StartConversationCommand, StartConversationHandler,
};
use crate::domain::conversation::{CancelReason, FlowError};
use crate::domain::foundation::{ConversationId, OfferId, SubscriptionId, UserId};
use crate::domain::offer::OfferAction;

use super::dto::{
    ApiError, ApiSuccess, ConversationDetail, ConversationWithMessages, ResolveOfferData,
    ResolveOfferRequest, SendMessageData, SendMessageRequest, StartConversationRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RetentionHandlers {
    start_handler: Arc<StartConversationHandler>,
    send_handler: Arc<SendMessageHandler>,
    resolve_handler: Arc<ResolveOfferHandler>,
    get_handler: Arc<GetConversationHandler>,
}

impl RetentionHandlers {
    pub fn new(
        start_handler: Arc<StartConversationHandler>,
        send_handler: Arc<SendMessageHandler>,
        resolve_handler: Arc<ResolveOfferHandler>,
        get_handler: Arc<GetConversationHandler>,
    ) -> Self {
        Self {
            start_handler,
            send_handler,
            resolve_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/conversations - Start a retention conversation
pub async fn start_conversation(
    State(handlers): State<RetentionHandlers>,
    payload: Result<Json<StartConversationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(_) => return invalid_json(),
    };

    let cmd = match start_command(req) {
        Ok(cmd) => cmd,
        Err(e) => return handle_flow_error(e),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => success(ConversationWithMessages {
            conversation: result.conversation,
            messages: vec![result.message],
        }),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/messages - Send a message into a conversation
pub async fn send_message(
    State(handlers): State<RetentionHandlers>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(_) => return invalid_json(),
    };

    let cmd = match send_command(req) {
        Ok(cmd) => cmd,
        Err(e) => return handle_flow_error(e),
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => success(SendMessageData {
            message: result.message,
            offer: result.offer,
        }),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/offers - Accept or reject a pending offer
pub async fn resolve_offer(
    State(handlers): State<RetentionHandlers>,
    payload: Result<Json<ResolveOfferRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(_) => return invalid_json(),
    };

    let cmd = match resolve_command(req) {
        Ok(cmd) => cmd,
        Err(e) => return handle_flow_error(e),
    };

    match handlers.resolve_handler.handle(cmd).await {
        Ok(result) => success(ResolveOfferData {
            outcome: result.outcome,
            message: result.message,
        }),
        Err(e) => handle_flow_error(e),
    }
}

/// GET /api/conversations/:id - Read a conversation with messages and offers
pub async fn get_conversation(
    State(handlers): State<RetentionHandlers>,
    Path(id): Path<String>,
) -> Response {
    // A non-uuid id cannot match any stored conversation.
    let conversation_id = match id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => return handle_flow_error(FlowError::ConversationNotFound),
    };

    let query = GetConversationQuery { conversation_id };

    match handlers.get_handler.handle(query).await {
        Ok(view) => success(ConversationDetail::from(view)),
        Err(e) => handle_flow_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request validation
// ════════════════════════════════════════════════════════════════════════════

/// Presence check preserving the declaration order of required fields.
fn require<T>(value: Option<T>, name: &'static str) -> Result<T, FlowError> {
    value.ok_or(FlowError::MissingField(name))
}

fn start_command(req: StartConversationRequest) -> Result<StartConversationCommand, FlowError> {
    let user_id = require(req.user_id, "userId")?;
    let subscription_id = require(req.subscription_id, "subscriptionId")?;
    let reason = require(req.reason, "reason")?;
    let reason_text = require(req.reason_text, "reasonText")?;

    Ok(StartConversationCommand {
        user_id: UserId::new(user_id),
        subscription_id: SubscriptionId::new(subscription_id),
        reason: CancelReason::parse(&reason),
        reason_text,
    })
}

fn send_command(req: SendMessageRequest) -> Result<SendMessageCommand, FlowError> {
    let conversation_id = require(req.conversation_id, "conversationId")?;
    let message = require(req.message, "message")?;
    let user_id = require(req.user_id, "userId")?;

    Ok(SendMessageCommand {
        conversation_id: parse_conversation_id(&conversation_id)?,
        message,
        user_id: UserId::new(user_id),
    })
}

fn resolve_command(req: ResolveOfferRequest) -> Result<ResolveOfferCommand, FlowError> {
    let conversation_id = require(req.conversation_id, "conversationId")?;
    let offer_id = require(req.offer_id, "offerId")?;
    let action = require(req.action, "action")?;
    let user_id = require(req.user_id, "userId")?;

    let action = OfferAction::parse(&action).ok_or(FlowError::InvalidAction(action))?;

    Ok(ResolveOfferCommand {
        conversation_id: parse_conversation_id(&conversation_id)?,
        offer_id: offer_id
            .parse::<OfferId>()
            .map_err(|_| FlowError::OfferNotFound)?,
        action,
        user_id: UserId::new(user_id),
    })
}

/// Malformed ids cannot match any stored record, so they read as not-found
/// rather than as a validation failure.
fn parse_conversation_id(raw: &str) -> Result<ConversationId, FlowError> {
    raw.parse::<ConversationId>()
        .map_err(|_| FlowError::ConversationNotFound)
}

// ════════════════════════════════════════════════════════════════════════════
// Response construction
// ════════════════════════════════════════════════════════════════════════════

fn success<T: serde::Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiSuccess::new(data))).into_response()
}

fn invalid_json() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new("Invalid JSON in request body")),
    )
        .into_response()
}

fn handle_flow_error(error: FlowError) -> Response {
    let (status, body) = match &error {
        FlowError::MissingField(_) | FlowError::InvalidAction(_) | FlowError::OfferUnavailable => {
            (StatusCode::BAD_REQUEST, ApiError::new(error.to_string()))
        }
        FlowError::ConversationNotFound | FlowError::OfferNotFound => {
            (StatusCode::NOT_FOUND, ApiError::new(error.to_string()))
        }
        FlowError::Store(store_error) => {
            tracing::error!(error = %store_error, "store failure handling retention request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("Internal server error"),
            )
        }
    };

    (status, Json(body)).into_response()
}
