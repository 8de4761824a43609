//! Inbound message normalization and chat-state derivation.
//!
//! Every inbound envelope goes through two pure steps:
//! 1. [`Normalize::normalize`] canonicalizes the identity key and re-expresses keys
//!    referenced by reactions and poll votes from this device's point of view.
//! 2. [`classify`] decides whether the envelope is a user-visible message, which chat it
//!    belongs to, what that means for the chat's persisted state, and which protocol
//!    event (if any) it carries.
//!
//! Nothing here touches storage; applying the resulting [`ChatUpdate`] is up to the caller,
//! which must serialize updates per chat id.

use crate::proto_helpers::{
    get_content_type, normalize_message_content, normalize_message_content_mut,
};
use crate::stub_types;
use crate::types::account::LocalIdentity;
use crate::types::chat::ChatUpdate;
use log::debug;
use serde::Serialize;
use thiserror::Error;
use wacore_binary::jid::{Jid, JidError, JidExt, are_same_user, normalize_jid, parse_user_jid};
use waproto::whatsapp as wa;
use waproto::whatsapp::message::protocol_message;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("invalid {field} in message key: {source}")]
    InvalidIdentity {
        field: &'static str,
        #[source]
        source: JidError,
    },
    #[error("message key has no {0}")]
    MissingIdentity(&'static str),
    #[error("referenced key has neither participant nor remote jid")]
    AmbiguousReference,
}

/// Which kind of content carried a key referring to another message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Reaction,
    PollUpdate,
}

/// An envelope whose keys have been normalized.
///
/// Normalizing again is a no-op, so a `NormalizedMessage` can be handed to anything
/// that accepts [`Normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMessage {
    info: wa::WebMessageInfo,
    unresolved_reference: Option<ReferenceKind>,
}

impl NormalizedMessage {
    pub fn info(&self) -> &wa::WebMessageInfo {
        &self.info
    }

    pub fn key(&self) -> &wa::MessageKey {
        &self.info.key
    }

    /// The message content with future-proof wrappers removed.
    pub fn content(&self) -> Option<&wa::Message> {
        normalize_message_content(self.info.message.as_ref())
    }

    /// Set when a reaction or poll vote pointed at a message it could not identify.
    /// The referenced key was left untouched.
    pub fn unresolved_reference(&self) -> Option<ReferenceKind> {
        self.unresolved_reference
    }

    /// Whether the content is a protocol message announcing a history sync.
    pub fn is_history_sync_notification(&self) -> bool {
        self.content()
            .and_then(|c| c.protocol_message.as_ref())
            .and_then(|protocol| protocol.r#type)
            == Some(protocol_message::Type::HistorySyncNotification as i32)
    }

    pub fn into_inner(self) -> wa::WebMessageInfo {
        self.info
    }
}

pub trait Normalize {
    /// Canonicalizes the identity key and perspective-corrects referenced keys.
    fn normalize(self, me: &str) -> Result<NormalizedMessage, ProcessError>;
}

impl Normalize for wa::WebMessageInfo {
    fn normalize(mut self, me: &str) -> Result<NormalizedMessage, ProcessError> {
        normalize_message_key(&mut self.key)?;

        let outer_key = self.key.clone();
        let mut unresolved_reference = None;
        if let Some(content) = normalize_message_content_mut(self.message.as_mut()) {
            let references = [
                (
                    ReferenceKind::Reaction,
                    content
                        .reaction_message
                        .as_mut()
                        .and_then(|reaction| reaction.key.as_mut()),
                ),
                (
                    ReferenceKind::PollUpdate,
                    content
                        .poll_update_message
                        .as_mut()
                        .and_then(|update| update.poll_creation_message_key.as_mut()),
                ),
            ];
            for (kind, key) in references {
                let Some(key) = key else { continue };
                if let Err(ProcessError::AmbiguousReference) =
                    correct_referenced_key(&outer_key, key, me)
                {
                    unresolved_reference = Some(kind);
                }
            }
        }

        Ok(NormalizedMessage {
            info: self,
            unresolved_reference,
        })
    }
}

impl Normalize for NormalizedMessage {
    fn normalize(self, _me: &str) -> Result<NormalizedMessage, ProcessError> {
        Ok(self)
    }
}

/// Canonicalizes `remote_jid` and `participant` in place.
///
/// A participant that normalizes to nothing is cleared rather than left empty.
pub fn normalize_message_key(key: &mut wa::MessageKey) -> Result<(), ProcessError> {
    let remote_jid = key
        .remote_jid
        .as_deref()
        .ok_or(ProcessError::MissingIdentity("remote_jid"))?;
    let remote_jid = normalize_jid(remote_jid).map_err(|source| ProcessError::InvalidIdentity {
        field: "remote_jid",
        source,
    })?;
    if remote_jid.is_empty() {
        return Err(ProcessError::MissingIdentity("remote_jid"));
    }
    key.remote_jid = Some(remote_jid);

    key.participant = match key.participant.as_deref() {
        Some(participant) => {
            let participant =
                normalize_jid(participant).map_err(|source| ProcessError::InvalidIdentity {
                    field: "participant",
                    source,
                })?;
            Some(participant).filter(|p| !p.is_empty())
        }
        None => None,
    };
    Ok(())
}

/// Re-expresses a key that another user recorded (in a reaction or poll vote) from
/// this device's point of view.
///
/// Only applies when the outer message came from someone else. `fromMe` is resolved
/// against our own identity unless it was already set, in which case it is cleared.
/// The referenced chat becomes the outer chat and the participant defaults to it.
pub fn correct_referenced_key(
    outer: &wa::MessageKey,
    referenced: &mut wa::MessageKey,
    me: &str,
) -> Result<(), ProcessError> {
    if outer.from_me.unwrap_or(false) {
        return Ok(());
    }

    let author = non_empty(referenced.participant.as_deref())
        .or(non_empty(referenced.remote_jid.as_deref()))
        .ok_or(ProcessError::AmbiguousReference)?;

    // A key the original sender marked as their own can't be ours.
    referenced.from_me = Some(match referenced.from_me {
        Some(true) => false,
        _ => are_same_user(author, me),
    });
    referenced.remote_jid = outer.remote_jid.clone();
    if non_empty(referenced.participant.as_deref()).is_none() {
        referenced.participant = referenced.remote_jid.clone();
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The chat an envelope is filed under.
///
/// Status updates from others are filed under their author rather than the shared
/// status broadcast address.
pub fn chat_id_for(key: &wa::MessageKey) -> Result<String, ProcessError> {
    let remote_jid = key
        .remote_jid
        .as_deref()
        .ok_or(ProcessError::MissingIdentity("remote_jid"))?;
    let remote = parse_identity(remote_jid, "remote_jid")?
        .ok_or(ProcessError::MissingIdentity("remote_jid"))?;

    let from_me = key.from_me.unwrap_or(false);
    // Evaluated as one eager conjunction.
    let filed_under_author = remote.is_broadcast() & remote.is_status_broadcast() & !from_me;
    let chat = if filed_under_author {
        let participant = key
            .participant
            .as_deref()
            .ok_or(ProcessError::MissingIdentity("participant"))?;
        parse_identity(participant, "participant")?
            .ok_or(ProcessError::MissingIdentity("participant"))?
    } else {
        remote
    };
    Ok(chat.to_normalized_user().to_string())
}

fn parse_identity(raw: &str, field: &'static str) -> Result<Option<Jid>, ProcessError> {
    parse_user_jid(raw).map_err(|source| ProcessError::InvalidIdentity { field, source })
}

/// Whether the envelope is something the user would see as a message.
///
/// Every leg is computed before combining, with no short-circuiting.
pub fn is_real_message(info: &wa::WebMessageInfo, me: &str) -> bool {
    let content = normalize_message_content(info.message.as_ref());

    let has_content = content.is_some();
    let real_stub = stub_types::is_real_stub(info.message_stub_type);
    let targets_me = stub_types::is_real_if_targets_me_stub(info.message_stub_type)
        & info
            .message_stub_parameters
            .iter()
            .any(|param| are_same_user(me, param));
    let has_content_type = get_content_type(content).is_some();
    let not_protocol = content.is_none_or(|c| c.protocol_message.is_none());
    let not_reaction = content.is_none_or(|c| c.reaction_message.is_none());
    let not_poll_update = content.is_none_or(|c| c.poll_update_message.is_none());

    (has_content | real_stub | targets_me)
        & has_content_type
        & not_protocol
        & not_reaction
        & not_poll_update
}

/// Unread counts only move for messages from others that aren't system stubs.
pub fn should_increment_chat_unread(info: &wa::WebMessageInfo) -> bool {
    !info.key.from_me.unwrap_or(false) & stub_types::is_no_stub(info.message_stub_type)
}

/// The kinds of protocol message handed to dedicated handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolEventKind {
    HistorySyncNotification,
    AppStateSyncKeyShare,
    Revoke,
    EphemeralSetting,
    PeerDataOperationRequest,
}

/// A protocol message recognised in an envelope, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProtocolEvent {
    HistorySyncNotification {
        notification: wa::message::HistorySyncNotification,
        /// No history has been processed yet, so this notification is the newest.
        is_latest: bool,
    },
    AppStateSyncKeyShare {
        share: wa::message::AppStateSyncKeyShare,
    },
    Revoke {
        key: Option<wa::MessageKey>,
    },
    EphemeralSetting {
        expiration: u32,
        setting_timestamp: Option<i64>,
    },
    PeerDataOperationRequest {
        request: wa::message::PeerDataOperationRequestMessage,
    },
}

impl ProtocolEvent {
    /// Recognises the protocol message types that have dedicated handlers.
    /// Anything else yields `None`.
    pub fn from_protocol_message(
        message: &wa::message::ProtocolMessage,
        identity: &LocalIdentity,
    ) -> Option<Self> {
        let Some(raw_type) = message.r#type else {
            debug!("Protocol message without a type, nothing to dispatch");
            return None;
        };
        let Ok(msg_type) = protocol_message::Type::try_from(raw_type) else {
            debug!("Unknown protocol message type {raw_type}, nothing to dispatch");
            return None;
        };

        let event = match msg_type {
            protocol_message::Type::HistorySyncNotification => {
                ProtocolEvent::HistorySyncNotification {
                    notification: message.history_sync_notification.clone().unwrap_or_default(),
                    is_latest: identity.processed_history_count == 0,
                }
            }
            protocol_message::Type::AppStateSyncKeyShare => ProtocolEvent::AppStateSyncKeyShare {
                share: message.app_state_sync_key_share.clone().unwrap_or_default(),
            },
            protocol_message::Type::Revoke => ProtocolEvent::Revoke {
                key: message.key.clone(),
            },
            protocol_message::Type::EphemeralSetting => ProtocolEvent::EphemeralSetting {
                expiration: message.ephemeral_expiration.unwrap_or_default(),
                setting_timestamp: message.ephemeral_setting_timestamp,
            },
            protocol_message::Type::PeerDataOperationRequestMessage => {
                ProtocolEvent::PeerDataOperationRequest {
                    request: message
                        .peer_data_operation_request_message
                        .clone()
                        .unwrap_or_default(),
                }
            }
            other => {
                debug!(
                    "Protocol message type {} has no handler, nothing to dispatch",
                    other.as_str_name()
                );
                return None;
            }
        };
        Some(event)
    }

    pub fn kind(&self) -> ProtocolEventKind {
        match self {
            ProtocolEvent::HistorySyncNotification { .. } => {
                ProtocolEventKind::HistorySyncNotification
            }
            ProtocolEvent::AppStateSyncKeyShare { .. } => ProtocolEventKind::AppStateSyncKeyShare,
            ProtocolEvent::Revoke { .. } => ProtocolEventKind::Revoke,
            ProtocolEvent::EphemeralSetting { .. } => ProtocolEventKind::EphemeralSetting,
            ProtocolEvent::PeerDataOperationRequest { .. } => {
                ProtocolEventKind::PeerDataOperationRequest
            }
        }
    }
}

/// Outcome of classifying one normalized envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub is_real: bool,
    pub chat_update: ChatUpdate,
    pub dispatched: Option<ProtocolEvent>,
}

/// Classifies a normalized envelope and derives the change it implies for its chat.
pub fn classify(
    message: &NormalizedMessage,
    identity: &LocalIdentity,
) -> Result<Classification, ProcessError> {
    let info = message.info();
    let content = message.content();
    let is_real = is_real_message(info, &identity.me);

    let mut chat_update = ChatUpdate::new(chat_id_for(&info.key)?);
    if is_real {
        chat_update.conversation_timestamp = Some(info.message_timestamp.unwrap_or_default());
        if should_increment_chat_unread(info) {
            chat_update.unread_delta = 1;
        }
    }

    // Someone reacting to one of our messages brings the chat back too.
    let reacted_to_mine = content
        .and_then(|c| c.reaction_message.as_ref())
        .and_then(|reaction| reaction.key.as_ref())
        .and_then(|key| key.from_me)
        .unwrap_or(false);
    if (is_real || reacted_to_mine) && identity.settings.unarchive_chats {
        debug!("Unarchiving chat {}", chat_update.id);
        chat_update.archived = Some(false);
        chat_update.read_only = Some(false);
    }

    let dispatched = content
        .and_then(|c| c.protocol_message.as_deref())
        .and_then(|protocol| ProtocolEvent::from_protocol_message(protocol, identity));

    Ok(Classification {
        is_real,
        chat_update,
        dispatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waproto::whatsapp::web_message_info::StubType;

    const ME: &str = "5511999999999:12@s.whatsapp.net";
    const ME_USER: &str = "5511999999999@s.whatsapp.net";
    const ALICE: &str = "5511888888888@s.whatsapp.net";
    const BOB: &str = "5511777777777@s.whatsapp.net";
    const GROUP: &str = "123@g.us";

    fn key(remote_jid: &str, from_me: bool, participant: Option<&str>) -> wa::MessageKey {
        wa::MessageKey {
            remote_jid: Some(remote_jid.to_string()),
            from_me: Some(from_me),
            id: Some("3EB0TEST".to_string()),
            participant: participant.map(str::to_string),
        }
    }

    fn text_message(text: &str) -> wa::Message {
        wa::Message {
            conversation: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn envelope(key: wa::MessageKey, message: Option<wa::Message>) -> wa::WebMessageInfo {
        wa::WebMessageInfo {
            key,
            message,
            message_timestamp: Some(1000),
            ..Default::default()
        }
    }

    fn reaction(referenced: wa::MessageKey) -> wa::Message {
        wa::Message {
            reaction_message: Some(wa::message::ReactionMessage {
                key: Some(referenced),
                text: Some("👍".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn protocol(msg_type: protocol_message::Type) -> wa::Message {
        wa::Message {
            protocol_message: Some(Box::new(wa::message::ProtocolMessage {
                r#type: Some(msg_type as i32),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    fn identity(unarchive: bool) -> LocalIdentity {
        LocalIdentity::new(ME).with_unarchive_chats(unarchive)
    }

    fn run(info: wa::WebMessageInfo, identity: &LocalIdentity) -> Classification {
        let normalized = info.normalize(&identity.me).unwrap();
        classify(&normalized, identity).unwrap()
    }

    #[test]
    fn test_normalize_strips_device_and_clears_empty_participant() {
        let info = envelope(
            key("5511888888888:3@s.whatsapp.net", false, Some("")),
            Some(text_message("hi")),
        );
        let normalized = info.normalize(ME).unwrap();
        assert_eq!(normalized.key().remote_jid.as_deref(), Some(ALICE));
        assert_eq!(normalized.key().participant, None);
    }

    #[test]
    fn test_normalize_canonicalizes_participant() {
        let info = envelope(
            key(GROUP, false, Some("5511888888888:7@c.us")),
            Some(text_message("hi")),
        );
        let normalized = info.normalize(ME).unwrap();
        assert_eq!(normalized.key().participant.as_deref(), Some(ALICE));
    }

    #[test]
    fn test_normalize_rejects_malformed_remote_jid() {
        let info = envelope(key("123:xyz@s.whatsapp.net", false, None), None);
        let err = info.normalize(ME).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::InvalidIdentity {
                field: "remote_jid",
                ..
            }
        ));
    }

    #[test]
    fn test_normalize_requires_remote_jid() {
        let info = envelope(wa::MessageKey::default(), None);
        assert!(matches!(
            info.normalize(ME),
            Err(ProcessError::MissingIdentity("remote_jid"))
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let info = envelope(
            key("5511888888888:3@s.whatsapp.net", false, None),
            Some(reaction(key(ME_USER, false, None))),
        );
        let once = info.normalize(ME).unwrap();
        let twice = once.clone().normalize(ME).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_referenced_key_resolves_to_me() {
        let outer = key(GROUP, false, Some(ALICE));
        let mut referenced = wa::MessageKey {
            from_me: Some(false),
            participant: Some("5511999999999:4@s.whatsapp.net".to_string()),
            ..Default::default()
        };
        correct_referenced_key(&outer, &mut referenced, ME).unwrap();
        assert_eq!(referenced.from_me, Some(true));
        assert_eq!(referenced.remote_jid.as_deref(), Some(GROUP));
        assert_eq!(
            referenced.participant.as_deref(),
            Some("5511999999999:4@s.whatsapp.net")
        );
    }

    #[test]
    fn test_referenced_key_from_someone_else() {
        let outer = key(GROUP, false, Some(ALICE));
        let mut referenced = key(GROUP, false, Some(BOB));
        correct_referenced_key(&outer, &mut referenced, ME).unwrap();
        assert_eq!(referenced.from_me, Some(false));
        assert_eq!(referenced.participant.as_deref(), Some(BOB));
    }

    #[test]
    fn test_referenced_key_claimed_by_sender_is_not_mine() {
        let outer = key(ALICE, false, None);
        let mut referenced = key(ALICE, true, None);
        correct_referenced_key(&outer, &mut referenced, ME).unwrap();
        assert_eq!(referenced.from_me, Some(false));
        assert_eq!(referenced.remote_jid.as_deref(), Some(ALICE));
        assert_eq!(referenced.participant.as_deref(), Some(ALICE));
    }

    #[test]
    fn test_referenced_key_in_direct_chat_defaults_participant() {
        // Alice reacting to our message in our 1:1 chat: she recorded the key under our jid.
        let outer = key(ALICE, false, None);
        let mut referenced = key(ME_USER, false, None);
        correct_referenced_key(&outer, &mut referenced, ME).unwrap();
        assert_eq!(referenced.from_me, Some(true));
        assert_eq!(referenced.remote_jid.as_deref(), Some(ALICE));
        assert_eq!(referenced.participant.as_deref(), Some(ALICE));
    }

    #[test]
    fn test_referenced_key_untouched_when_outer_is_mine() {
        let outer = key(GROUP, true, None);
        let original = key(BOB, false, None);
        let mut referenced = original.clone();
        correct_referenced_key(&outer, &mut referenced, ME).unwrap();
        assert_eq!(referenced, original);
    }

    #[test]
    fn test_ambiguous_reference_is_skipped_but_not_fatal() {
        let info = envelope(
            key(GROUP, false, Some(ALICE)),
            Some(reaction(wa::MessageKey {
                from_me: Some(false),
                id: Some("X".to_string()),
                ..Default::default()
            })),
        );
        let normalized = info.normalize(ME).unwrap();
        assert_eq!(
            normalized.unresolved_reference(),
            Some(ReferenceKind::Reaction)
        );
        let reaction_key = normalized
            .content()
            .and_then(|c| c.reaction_message.as_ref())
            .and_then(|r| r.key.as_ref())
            .unwrap();
        assert_eq!(reaction_key.remote_jid, None);

        let mut bare = wa::MessageKey::default();
        assert!(matches!(
            correct_referenced_key(&key(GROUP, false, Some(ALICE)), &mut bare, ME),
            Err(ProcessError::AmbiguousReference)
        ));
        assert_eq!(bare, wa::MessageKey::default());
    }

    #[test]
    fn test_poll_update_key_is_corrected_inside_wrapper() {
        let poll_vote = wa::Message {
            poll_update_message: Some(wa::message::PollUpdateMessage {
                poll_creation_message_key: Some(key(GROUP, false, Some(ME_USER))),
                ..Default::default()
            }),
            ..Default::default()
        };
        let wrapped = wa::Message {
            ephemeral_message: Some(Box::new(wa::message::FutureProofMessage {
                message: Some(Box::new(poll_vote)),
            })),
            ..Default::default()
        };
        let normalized = envelope(key(GROUP, false, Some(ALICE)), Some(wrapped))
            .normalize(ME)
            .unwrap();
        let poll_key = normalized
            .content()
            .and_then(|c| c.poll_update_message.as_ref())
            .and_then(|p| p.poll_creation_message_key.as_ref())
            .unwrap();
        assert_eq!(poll_key.from_me, Some(true));
        assert_eq!(normalized.unresolved_reference(), None);
    }

    #[test]
    fn test_status_broadcast_is_filed_under_author() {
        let theirs = key("status@broadcast", false, Some("5511888888888:2@s.whatsapp.net"));
        assert_eq!(chat_id_for(&theirs).unwrap(), ALICE);

        let mine = key("status@broadcast", true, Some(ME_USER));
        assert_eq!(chat_id_for(&mine).unwrap(), "status@broadcast");

        let list = key("1600000000@broadcast", false, Some(ALICE));
        assert_eq!(chat_id_for(&list).unwrap(), "1600000000@broadcast");
    }

    #[test]
    fn test_status_broadcast_without_author_is_rejected() {
        let theirs = key("status@broadcast", false, None);
        assert!(matches!(
            chat_id_for(&theirs),
            Err(ProcessError::MissingIdentity("participant"))
        ));
    }

    #[test]
    fn test_ordinary_content_is_real() {
        let info = envelope(key(ALICE, false, None), Some(text_message("hello")));
        assert!(is_real_message(&info, ME));
    }

    #[test]
    fn test_reaction_is_never_real() {
        for stub in [StubType::Unknown, StubType::CallMissedVoice] {
            let mut info = envelope(
                key(ALICE, false, None),
                Some(reaction(key(ALICE, true, None))),
            );
            info.message_stub_type = Some(stub as i32);
            assert!(!is_real_message(&info, ME));
        }
    }

    #[test]
    fn test_protocol_and_poll_update_are_not_real() {
        let info = envelope(
            key(ALICE, false, None),
            Some(protocol(protocol_message::Type::Revoke)),
        );
        assert!(!is_real_message(&info, ME));

        let poll = wa::Message {
            poll_update_message: Some(Default::default()),
            ..Default::default()
        };
        let info = envelope(key(GROUP, false, Some(ALICE)), Some(poll));
        assert!(!is_real_message(&info, ME));
    }

    #[test]
    fn test_stub_without_content_is_not_real() {
        let mut info = envelope(key(ALICE, false, None), None);
        info.message_stub_type = Some(StubType::CallMissedVoice as i32);
        assert!(!is_real_message(&info, ME));

        let mut info = envelope(key(GROUP, false, Some(ALICE)), None);
        info.message_stub_type = Some(StubType::GroupParticipantAdd as i32);
        info.message_stub_parameters = vec![ME_USER.to_string()];
        assert!(!is_real_message(&info, ME));
    }

    #[test]
    fn test_empty_content_is_not_real() {
        let context_only = wa::Message {
            message_context_info: Some(Default::default()),
            ..Default::default()
        };
        let info = envelope(key(ALICE, false, None), Some(context_only));
        assert!(!is_real_message(&info, ME));
    }

    #[test]
    fn test_unread_increments_only_for_incoming_without_stub() {
        let incoming = run(
            envelope(key(ALICE, false, None), Some(text_message("a"))),
            &identity(false),
        );
        assert!(incoming.is_real);
        assert_eq!(incoming.chat_update.unread_delta, 1);
        assert_eq!(incoming.chat_update.conversation_timestamp, Some(1000));

        let outgoing = run(
            envelope(key(ALICE, true, None), Some(text_message("b"))),
            &identity(false),
        );
        assert!(outgoing.is_real);
        assert_eq!(outgoing.chat_update.unread_delta, 0);
        assert_eq!(outgoing.chat_update.conversation_timestamp, Some(1000));

        let mut stubbed = envelope(key(ALICE, false, None), Some(text_message("c")));
        stubbed.message_stub_type = Some(StubType::E2eEncrypted as i32);
        let stubbed = run(stubbed, &identity(false));
        assert!(stubbed.is_real);
        assert_eq!(stubbed.chat_update.unread_delta, 0);
    }

    #[test]
    fn test_group_message_scenario() {
        let classification = run(
            envelope(key(GROUP, false, None), Some(text_message("hello group"))),
            &identity(true),
        );
        assert_eq!(
            classification.chat_update,
            ChatUpdate {
                id: GROUP.to_string(),
                conversation_timestamp: Some(1000),
                unread_delta: 1,
                archived: Some(false),
                read_only: Some(false),
            }
        );
        assert!(classification.dispatched.is_none());
    }

    #[test]
    fn test_reaction_to_my_message_unarchives() {
        let info = envelope(
            key(ALICE, true, None),
            Some(reaction(key(ALICE, true, None))),
        );
        let with_setting = run(info.clone(), &identity(true));
        assert!(!with_setting.is_real);
        assert_eq!(with_setting.chat_update.archived, Some(false));
        assert_eq!(with_setting.chat_update.read_only, Some(false));
        assert_eq!(with_setting.chat_update.conversation_timestamp, None);
        assert_eq!(with_setting.chat_update.unread_delta, 0);

        let without_setting = run(info, &identity(false));
        assert_eq!(without_setting.chat_update.archived, None);
        assert_eq!(without_setting.chat_update.read_only, None);
        assert!(without_setting.chat_update.is_noop());
    }

    #[test]
    fn test_reaction_from_other_to_my_message_unarchives_after_correction() {
        // The referenced key names us, so correction flips it to fromMe.
        let info = envelope(
            key(ALICE, false, None),
            Some(reaction(key(ME_USER, false, None))),
        );
        let classification = run(info, &identity(true));
        assert!(!classification.is_real);
        assert_eq!(classification.chat_update.id, ALICE);
        assert_eq!(classification.chat_update.archived, Some(false));
    }

    #[test]
    fn test_real_message_without_unarchive_setting_keeps_flags_unset() {
        let classification = run(
            envelope(key(ALICE, false, None), Some(text_message("hi"))),
            &identity(false),
        );
        assert_eq!(classification.chat_update.archived, None);
        assert_eq!(classification.chat_update.read_only, None);
    }

    #[test]
    fn test_protocol_events_are_dispatched() {
        let cases = [
            (
                protocol_message::Type::HistorySyncNotification,
                ProtocolEventKind::HistorySyncNotification,
            ),
            (
                protocol_message::Type::AppStateSyncKeyShare,
                ProtocolEventKind::AppStateSyncKeyShare,
            ),
            (protocol_message::Type::Revoke, ProtocolEventKind::Revoke),
            (
                protocol_message::Type::EphemeralSetting,
                ProtocolEventKind::EphemeralSetting,
            ),
            (
                protocol_message::Type::PeerDataOperationRequestMessage,
                ProtocolEventKind::PeerDataOperationRequest,
            ),
        ];
        for (msg_type, kind) in cases {
            let classification = run(
                envelope(key(ME_USER, true, None), Some(protocol(msg_type))),
                &identity(true),
            );
            assert!(!classification.is_real);
            assert_eq!(classification.dispatched.map(|e| e.kind()), Some(kind));
            assert!(classification.chat_update.is_noop());
        }
    }

    #[test]
    fn test_unhandled_protocol_type_is_not_dispatched() {
        let classification = run(
            envelope(
                key(ALICE, false, None),
                Some(protocol(protocol_message::Type::MessageEdit)),
            ),
            &identity(false),
        );
        assert!(classification.dispatched.is_none());

        let untyped = wa::Message {
            protocol_message: Some(Box::new(Default::default())),
            ..Default::default()
        };
        let classification = run(
            envelope(key(ALICE, false, None), Some(untyped)),
            &identity(false),
        );
        assert!(classification.dispatched.is_none());
    }

    #[test]
    fn test_history_sync_is_latest_only_before_any_processed() {
        let message = protocol(protocol_message::Type::HistorySyncNotification);
        let fresh = run(
            envelope(key(ME_USER, true, None), Some(message.clone())),
            &identity(false),
        );
        assert!(matches!(
            fresh.dispatched,
            Some(ProtocolEvent::HistorySyncNotification {
                is_latest: true,
                ..
            })
        ));

        let mut seasoned = identity(false);
        seasoned.processed_history_count = 2;
        let later = run(envelope(key(ME_USER, true, None), Some(message)), &seasoned);
        assert!(matches!(
            later.dispatched,
            Some(ProtocolEvent::HistorySyncNotification {
                is_latest: false,
                ..
            })
        ));
    }

    #[test]
    fn test_history_sync_notification_is_recognised_through_wrappers() {
        let notification = protocol(protocol_message::Type::HistorySyncNotification);
        let wrapped = wa::Message {
            device_sent_message: Some(Box::new(wa::message::DeviceSentMessage {
                message: Some(Box::new(notification.clone())),
                ..Default::default()
            })),
            ..Default::default()
        };
        for message in [notification, wrapped] {
            let normalized = envelope(key(ME_USER, true, None), Some(message))
                .normalize(ME)
                .unwrap();
            assert!(normalized.is_history_sync_notification());
        }

        let revoke = envelope(
            key(ALICE, false, None),
            Some(protocol(protocol_message::Type::Revoke)),
        )
        .normalize(ME)
        .unwrap();
        assert!(!revoke.is_history_sync_notification());

        let plain = envelope(key(ALICE, false, None), Some(text_message("hi")))
            .normalize(ME)
            .unwrap();
        assert!(!plain.is_history_sync_notification());
    }

    #[test]
    fn test_ephemeral_setting_payload() {
        let message = wa::Message {
            protocol_message: Some(Box::new(wa::message::ProtocolMessage {
                r#type: Some(protocol_message::Type::EphemeralSetting as i32),
                ephemeral_expiration: Some(604_800),
                ephemeral_setting_timestamp: Some(1_700_000_000),
                ..Default::default()
            })),
            ..Default::default()
        };
        let classification = run(
            envelope(key(ALICE, false, None), Some(message)),
            &identity(false),
        );
        assert_eq!(
            classification.dispatched,
            Some(ProtocolEvent::EphemeralSetting {
                expiration: 604_800,
                setting_timestamp: Some(1_700_000_000),
            })
        );
    }

    #[test]
    fn test_missing_content_yields_defined_noop() {
        let classification = run(envelope(key(ALICE, false, None), None), &identity(true));
        assert!(!classification.is_real);
        assert!(classification.chat_update.is_noop());
        assert_eq!(classification.chat_update.id, ALICE);
        assert!(classification.dispatched.is_none());
    }
}
