//! System-event (stub) classification tables.
//!
//! Most stubs describe bookkeeping that should never bump a chat, but a few stand in
//! for something the user would expect to see as a message, such as a missed call.

use waproto::whatsapp::web_message_info::StubType;

/// Stubs that count as real messages on their own.
pub const REAL_MSG_STUB_TYPES: &[StubType] = &[
    StubType::CallMissedGroupVideo,
    StubType::CallMissedGroupVoice,
    StubType::CallMissedVideo,
    StubType::CallMissedVoice,
];

/// Stubs that count as real messages only when one of their parameters names us,
/// e.g. being added to a group.
pub const REAL_MSG_REQ_ME_STUB_TYPES: &[StubType] = &[StubType::GroupParticipantAdd];

/// Raw stub value of an envelope. Absent means no stub.
pub fn stub_type_of(raw: Option<i32>) -> i32 {
    raw.unwrap_or(StubType::Unknown as i32)
}

pub fn is_no_stub(raw: Option<i32>) -> bool {
    stub_type_of(raw) == StubType::Unknown as i32
}

pub fn is_real_stub(raw: Option<i32>) -> bool {
    contains(REAL_MSG_STUB_TYPES, raw)
}

pub fn is_real_if_targets_me_stub(raw: Option<i32>) -> bool {
    contains(REAL_MSG_REQ_ME_STUB_TYPES, raw)
}

fn contains(table: &[StubType], raw: Option<i32>) -> bool {
    let raw = stub_type_of(raw);
    table.iter().any(|stub| *stub as i32 == raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missed_calls_are_real() {
        assert!(is_real_stub(Some(StubType::CallMissedVoice as i32)));
        assert!(is_real_stub(Some(StubType::CallMissedGroupVideo as i32)));
        assert!(!is_real_stub(Some(StubType::GroupChangeSubject as i32)));
        assert!(!is_real_stub(None));
    }

    #[test]
    fn test_participant_add_requires_me() {
        assert!(is_real_if_targets_me_stub(Some(
            StubType::GroupParticipantAdd as i32
        )));
        assert!(!is_real_if_targets_me_stub(Some(
            StubType::GroupParticipantRemove as i32
        )));
    }

    #[test]
    fn test_absent_stub_is_no_stub() {
        assert!(is_no_stub(None));
        assert!(is_no_stub(Some(0)));
        assert!(!is_no_stub(Some(StubType::Revoke as i32)));
        // values newer than our schema are still stubs
        assert!(!is_no_stub(Some(9_999)));
    }
}
