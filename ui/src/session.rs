//! The session record persisted by the accounts flow in `localStorage`.

use std::rc::Rc;
use vehicle_form::{SessionProvider, session::SESSION_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[derive(Debug, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn store(&self, record: &str) {
        if let Some(storage) = local_storage()
            && let Err(e) = storage.set_item(SESSION_KEY, record)
        {
            tracing::error!("Could not store session: {e:?}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage()
            && let Err(e) = storage.remove_item(SESSION_KEY)
        {
            tracing::error!("Could not clear session: {e:?}");
        }
    }
}

/// Session store handed to pages as a prop, so they never reach for
/// `localStorage` themselves.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionProvider>);

impl SessionHandle {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn local_storage() -> Self {
        Self::new(LocalStorageSession)
    }

    pub fn provider(&self) -> &dyn SessionProvider {
        self.0.as_ref()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
