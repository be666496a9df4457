use std::sync::RwLock;
use tracing::{debug, info};

use super::token::TokenStorage;
use crate::errors::{ClientError, Result};
use crate::models::auth::entities::UserInfo;

/// 当前会话：令牌与用户信息
///
/// 令牌写入持久化存储后才会在内存中可见，因此登录完成后发出的
/// 任何请求都能带上新令牌。
pub struct SessionStore {
    storage: Box<dyn TokenStorage>,
    token: RwLock<Option<String>>,
    user: RwLock<Option<UserInfo>>,
}

impl SessionStore {
    /// 从持久化存储恢复会话
    pub fn restore(storage: Box<dyn TokenStorage>) -> Self {
        let token = storage.load();
        if token.is_some() {
            debug!("Restored token from storage");
        }
        Self {
            storage,
            token: RwLock::new(token),
            user: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.read().ok().and_then(|guard| guard.clone())
    }

    /// 保存登录结果
    pub fn set_login(&self, token: &str, user: Option<UserInfo>) -> Result<()> {
        self.storage.save(token)?;
        {
            let mut guard = self
                .token
                .write()
                .map_err(|_| ClientError::invalid_state("session lock poisoned"))?;
            *guard = Some(token.to_string());
        }
        self.set_user(user)?;
        info!("Session established");
        Ok(())
    }

    pub fn set_user(&self, user: Option<UserInfo>) -> Result<()> {
        let mut guard = self
            .user
            .write()
            .map_err(|_| ClientError::invalid_state("session lock poisoned"))?;
        *guard = user;
        Ok(())
    }

    /// 清除会话（内存与持久化存储）
    pub fn clear(&self) -> Result<()> {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        if let Ok(mut guard) = self.user.write() {
            *guard = None;
        }
        self.storage.clear()?;
        info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user().map(|u| u.username))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::token::MemoryTokenStorage;

    #[test]
    fn test_restore_reads_persisted_token() {
        let session = SessionStore::restore(Box::new(MemoryTokenStorage::with_token("t-1")));
        assert_eq!(session.token(), Some("t-1".to_string()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_set_login_and_clear() {
        let session = SessionStore::restore(Box::new(MemoryTokenStorage::new()));
        assert!(!session.is_authenticated());

        let user = UserInfo {
            id: 1,
            username: "admin".to_string(),
            ..Default::default()
        };
        session.set_login("t-2", Some(user)).expect("login");
        assert_eq!(session.token(), Some("t-2".to_string()));
        assert_eq!(session.user().map(|u| u.id), Some(1));

        session.clear().expect("clear");
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }
}
