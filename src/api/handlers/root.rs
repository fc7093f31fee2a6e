/// Plaintext liveness string for `GET /`.
pub async fn root() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " is running!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        assert_eq!(root().await, "authgate is running!");
    }
}
