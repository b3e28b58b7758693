use crate::core::error::WatchError;

/// Map a non-2xx response to [`WatchError::Status`], passing 2xx through.
pub(crate) fn ok(resp: reqwest::Response) -> Result<reqwest::Response, WatchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(WatchError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
