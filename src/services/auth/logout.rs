use serde::de::IgnoredAny;
use tracing::{info, warn};

use super::AuthService;
use crate::errors::Result;

pub async fn handle_logout(service: &AuthService) -> Result<()> {
    let remote: Result<IgnoredAny> = service.http().post_empty("/auth/logout").await;
    if let Err(e) = &remote {
        warn!("Logout request failed, clearing local session anyway: {}", e);
    }

    service.http().session().clear()?;
    info!("Logged out");
    remote.map(|_| ())
}
