use async_trait::async_trait;

/// Frontend boundary for the one decision the core cannot make alone:
/// whether to install a release that only looks older than the wanted game
/// version. A GUI renders a yes/no dialog, a console asks on stdin, tests
/// script the answer.
#[async_trait]
pub trait InteractionPort: Send + Sync {
    /// `true` accepts the offered release, `false` leaves the mod alone.
    async fn accept_fallback(
        &self,
        mod_name: &str,
        wanted_version: &str,
        offered_version: &str,
    ) -> bool;
}
