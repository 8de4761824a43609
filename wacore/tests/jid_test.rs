use std::str::FromStr;
use wacore_binary::jid::{Jid, JidExt, are_same_user, normalize_jid, parse_user_jid};

#[test]
fn test_jid_parsing_and_serialization() {
    let jid_str = "1234567890@s.whatsapp.net";
    let jid = Jid::from_str(jid_str).unwrap();
    assert_eq!(jid.user, "1234567890");
    assert_eq!(jid.server, "s.whatsapp.net");
    assert_eq!(jid.agent, 0);
    assert_eq!(jid.device, 0);
    assert_eq!(jid.to_string(), jid_str);
    assert!(!jid.is_ad());
    assert!(!jid.is_group());

    let ad_jid_str = "1234567890:12@s.whatsapp.net";
    let ad_jid = Jid::from_str(ad_jid_str).unwrap();
    assert_eq!(ad_jid.device, 12);
    assert!(ad_jid.is_ad());
    assert_eq!(ad_jid.to_string(), ad_jid_str);
    assert_eq!(ad_jid.to_normalized_user().to_string(), jid_str);

    let server_jid = Jid::from_str("s.whatsapp.net").unwrap();
    assert!(server_jid.user.is_empty());
    assert_eq!(server_jid.to_string(), "s.whatsapp.net");
}

#[test]
fn test_user_jid_requires_user_part() {
    assert!(parse_user_jid("s.whatsapp.net").unwrap().is_none());
    assert!(parse_user_jid("@g.us").unwrap().is_none());
    assert!(parse_user_jid("").unwrap().is_none());
    assert!(parse_user_jid("123:x@s.whatsapp.net").is_err());

    let group = parse_user_jid("123-456@g.us").unwrap().unwrap();
    assert!(group.is_group());
    assert!(!group.is_ad());
}

#[test]
fn test_legacy_server_is_folded() {
    let legacy = "5511999999999.0:3@c.us";
    let normalized = normalize_jid(legacy).unwrap();
    assert_eq!(normalized, "5511999999999@s.whatsapp.net");
    assert!(are_same_user(legacy, &normalized));
}

#[test]
fn test_hidden_user_keeps_server() {
    let normalized = normalize_jid("236395184570386.1:4@lid").unwrap();
    assert_eq!(normalized, "236395184570386.1@lid");
    assert_eq!(normalize_jid(&normalized).unwrap(), normalized);
}
