//! Route Guard
//!
//! Admin pages render only while a token is stored. The token is never
//! checked with the server here; an expired one fails on the first request.

/// Where signed-out visitors are sent
pub const LOGIN_PATH: &str = "/admini";

/// Landing page after sign-in
pub const DASHBOARD_PATH: &str = "/admini/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

pub fn check(has_token: bool) -> Access {
    if has_token {
        Access::Granted
    } else {
        Access::Redirect(LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, Session};

    #[test]
    fn test_check() {
        assert_eq!(check(true), Access::Granted);
        assert_eq!(check(false), Access::Redirect("/admini"));
    }

    #[test]
    fn test_follows_stored_state() {
        let session = Session::new(MemoryStorage::new());
        assert_eq!(check(session.has_token()), Access::Redirect(LOGIN_PATH));
        session.sign_in("t", None);
        assert_eq!(check(session.has_token()), Access::Granted);
        session.sign_out();
        assert_eq!(check(session.has_token()), Access::Redirect(LOGIN_PATH));
    }
}
