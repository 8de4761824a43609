use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_USER_SERVER: &str = "s.whatsapp.net";
pub const GROUP_SERVER: &str = "g.us";
pub const LEGACY_USER_SERVER: &str = "c.us";
pub const BROADCAST_SERVER: &str = "broadcast";
pub const HIDDEN_USER_SERVER: &str = "lid";
pub const STATUS_BROADCAST_USER: &str = "status";
pub const STATUS_BROADCAST_JID: &str = "status@broadcast";

pub type MessageId = String;

#[derive(Debug, Error)]
pub enum JidError {
    #[error("Invalid JID format: {0}")]
    InvalidFormat(String),
    #[error("Failed to parse component: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

pub trait JidExt {
    fn user(&self) -> &str;
    fn server(&self) -> &str;
    fn device(&self) -> u16;

    fn is_ad(&self) -> bool {
        self.device() > 0
            && (self.server() == DEFAULT_USER_SERVER || self.server() == HIDDEN_USER_SERVER)
    }

    fn is_group(&self) -> bool {
        self.server() == GROUP_SERVER
    }

    /// Any `@broadcast` address, including the status channel.
    fn is_broadcast(&self) -> bool {
        self.server() == BROADCAST_SERVER
    }

    fn is_status_broadcast(&self) -> bool {
        self.is_broadcast() && self.user() == STATUS_BROADCAST_USER
    }

    fn is_broadcast_list(&self) -> bool {
        self.is_broadcast() && self.user() != STATUS_BROADCAST_USER
    }

    fn is_empty(&self) -> bool {
        self.server().is_empty()
    }

    fn is_same_user_as(&self, other: &impl JidExt) -> bool {
        self.user() == other.user()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Jid {
    pub user: String,
    pub server: String,
    pub agent: u8,
    pub device: u16,
}

impl JidExt for Jid {
    fn user(&self) -> &str {
        &self.user
    }
    fn server(&self) -> &str {
        &self.server
    }
    fn device(&self) -> u16 {
        self.device
    }
}

impl Jid {
    pub fn new(user: &str, server: &str) -> Self {
        Self {
            user: user.to_string(),
            server: server.to_string(),
            ..Default::default()
        }
    }

    pub fn status_broadcast() -> Self {
        Self::new(STATUS_BROADCAST_USER, BROADCAST_SERVER)
    }

    /// The bare user address: agent and device are dropped and the legacy
    /// `c.us` server is folded into `s.whatsapp.net`.
    pub fn to_normalized_user(&self) -> Self {
        let server = if self.server == LEGACY_USER_SERVER {
            DEFAULT_USER_SERVER
        } else {
            self.server.as_str()
        };
        Self::new(&self.user, server)
    }
}

impl FromStr for Jid {
    type Err = JidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (user_part, server) = match s.split_once('@') {
            Some((u, s)) => (u, s.to_string()),
            None => ("", s.to_string()),
        };

        if server.contains('@') {
            return Err(JidError::InvalidFormat(s.to_string()));
        }

        if user_part.is_empty() {
            return Ok(Jid::new("", &server));
        }

        let (user, device) = match user_part.rsplit_once(':') {
            Some((u, d_str)) => (u, d_str.parse()?),
            None => (user_part, 0),
        };

        // LID users can contain dots that are part of the identity.
        if server == HIDDEN_USER_SERVER {
            return Ok(Jid {
                user: user.to_string(),
                server,
                agent: 0,
                device,
            });
        }

        let (user, agent) = match user.rsplit_once('.') {
            Some((u, agent_str)) => (u, agent_str.parse()?),
            None => (user, 0),
        };

        if user.is_empty() || user.contains('.') || user.contains(':') {
            return Err(JidError::InvalidFormat(s.to_string()));
        }

        Ok(Jid {
            user: user.to_string(),
            server,
            agent,
            device,
        })
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user.is_empty() {
            write!(f, "{}", self.server)
        } else {
            write!(f, "{}", self.user)?;
            if self.agent > 0 {
                write!(f, ".{}", self.agent)?;
            }
            if self.device > 0 {
                write!(f, ":{}", self.device)?;
            }
            write!(f, "@{}", self.server)
        }
    }
}

impl From<Jid> for String {
    fn from(jid: Jid) -> Self {
        jid.to_string()
    }
}

impl TryFrom<String> for Jid {
    type Error = JidError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Jid::from_str(&value)
    }
}

/// Parses an address that must carry a user part (`user@server`).
///
/// Returns `Ok(None)` for input that names no user at all (empty strings,
/// bare server names), which callers treat as an absent address.
pub fn parse_user_jid(raw: &str) -> Result<Option<Jid>, JidError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.contains('@') {
        return Ok(None);
    }
    let jid = Jid::from_str(raw)?;
    if jid.user.is_empty() {
        return Ok(None);
    }
    Ok(Some(jid))
}

/// Canonical string form of a user, group or broadcast address.
///
/// Idempotent: normalizing an already normalized address returns it
/// unchanged. An empty string means the input carried no address.
pub fn normalize_jid(raw: &str) -> Result<String, JidError> {
    Ok(parse_user_jid(raw)?
        .map(|jid| jid.to_normalized_user().to_string())
        .unwrap_or_default())
}

/// Whether two addresses belong to the same account, ignoring device,
/// agent and server. Unparseable addresses never match.
pub fn are_same_user(a: &str, b: &str) -> bool {
    match (parse_user_jid(a), parse_user_jid(b)) {
        (Ok(Some(a)), Ok(Some(b))) => a.is_same_user_as(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_agent_and_device() {
        let jid: Jid = "5511999.1:23@s.whatsapp.net".parse().unwrap();
        assert_eq!(jid.user, "5511999");
        assert_eq!(jid.agent, 1);
        assert_eq!(jid.device, 23);
        assert_eq!(jid.to_string(), "5511999.1:23@s.whatsapp.net");
    }

    #[test]
    fn test_lid_user_keeps_dots() {
        let jid: Jid = "236395184570386.1:4@lid".parse().unwrap();
        assert_eq!(jid.user, "236395184570386.1");
        assert_eq!(jid.device, 4);
        assert_eq!(jid.agent, 0);
    }

    #[test]
    fn test_malformed_device_is_rejected() {
        assert!(matches!(
            "123:abc@s.whatsapp.net".parse::<Jid>(),
            Err(JidError::Parse(_))
        ));
        assert!(matches!(
            "a.b.c@s.whatsapp.net".parse::<Jid>(),
            Err(JidError::Parse(_))
        ));
        assert!(matches!(
            "1.2.3@s.whatsapp.net".parse::<Jid>(),
            Err(JidError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_strips_decoration() {
        assert_eq!(
            normalize_jid("1234:7@s.whatsapp.net").unwrap(),
            "1234@s.whatsapp.net"
        );
        assert_eq!(normalize_jid("1234@c.us").unwrap(), "1234@s.whatsapp.net");
        assert_eq!(normalize_jid("123-456@g.us").unwrap(), "123-456@g.us");
        assert_eq!(normalize_jid(STATUS_BROADCAST_JID).unwrap(), STATUS_BROADCAST_JID);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "1234.2:7@s.whatsapp.net",
            "1234@c.us",
            "99.1:3@lid",
            "123-456@g.us",
            "status@broadcast",
            "",
        ] {
            let once = normalize_jid(raw).unwrap();
            assert_eq!(normalize_jid(&once).unwrap(), once, "input {raw}");
        }
    }

    #[test]
    fn test_normalize_without_user_is_empty() {
        assert_eq!(normalize_jid("").unwrap(), "");
        assert_eq!(normalize_jid("   ").unwrap(), "");
        assert_eq!(normalize_jid("s.whatsapp.net").unwrap(), "");
        assert_eq!(normalize_jid("@g.us").unwrap(), "");
    }

    #[test]
    fn test_same_user_ignores_device_and_server() {
        assert!(are_same_user("1234:3@s.whatsapp.net", "1234@s.whatsapp.net"));
        assert!(are_same_user("1234@c.us", "1234@s.whatsapp.net"));
        assert!(!are_same_user("1234@s.whatsapp.net", "4321@s.whatsapp.net"));
        assert!(!are_same_user("", ""));
        assert!(!are_same_user("1:x@s.whatsapp.net", "1@s.whatsapp.net"));
    }

    #[test]
    fn test_broadcast_predicates() {
        let status = Jid::status_broadcast();
        assert!(status.is_broadcast());
        assert!(status.is_status_broadcast());
        assert!(!status.is_broadcast_list());

        let list: Jid = "1600000000@broadcast".parse().unwrap();
        assert!(list.is_broadcast());
        assert!(!list.is_status_broadcast());
        assert!(list.is_broadcast_list());

        let group: Jid = "123-456@g.us".parse().unwrap();
        assert!(!group.is_broadcast());
        assert!(group.is_group());
    }
}
