use payloads::UserId;
use serde::Deserialize;
use std::cell::RefCell;

/// Key under which the accounts flow persists the signed-in user.
pub const SESSION_KEY: &str = "user";

/// The part of the persisted session record this form cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

#[derive(Deserialize)]
struct SessionRecord {
    data: SessionData,
}

#[derive(Deserialize)]
struct SessionData {
    #[serde(rename = "_id")]
    id: UserId,
}

impl Session {
    /// Parse a raw record of the form `{"data": {"_id": "..."}, ...}`.
    ///
    /// A record that is not JSON or lacks `data._id` is treated as no
    /// session at all.
    pub fn from_record(raw: &str) -> Option<Self> {
        match serde_json::from_str::<SessionRecord>(raw) {
            Ok(record) => Some(Session {
                user_id: record.data.id,
            }),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session record: {e}");
                None
            }
        }
    }

    /// The smallest record [`Session::from_record`] accepts.
    pub fn to_record(&self) -> String {
        serde_json::json!({ "data": { "_id": self.user_id } }).to_string()
    }
}

/// Access to the externally owned session store.
pub trait SessionProvider {
    /// The raw persisted record, if any.
    fn load(&self) -> Option<String>;

    fn store(&self, record: &str);

    fn clear(&self);

    fn session(&self) -> Option<Session> {
        self.load().and_then(|raw| Session::from_record(&raw))
    }
}

/// Session store held in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySession {
    record: RefCell<Option<String>>,
}

impl InMemorySession {
    pub fn signed_in(user_id: &str) -> Self {
        let session = Session {
            user_id: UserId(user_id.to_string()),
        };
        Self {
            record: RefCell::new(Some(session.to_record())),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

impl SessionProvider for InMemorySession {
    fn load(&self) -> Option<String> {
        self.record.borrow().clone()
    }

    fn store(&self, record: &str) {
        *self.record.borrow_mut() = Some(record.to_string());
    }

    fn clear(&self) {
        self.record.borrow_mut().take();
    }
}
