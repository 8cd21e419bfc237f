use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::session::{BrowserSession, SessionSource};

fn url_for(path: &str) -> String {
    format!("{}{path}", config::api_base())
}

/* Bearer token from storage when there is one; the API decides whether it is still good */
async fn send<T>(method: Method, path: &str, body: Option<&T>) -> Result<Response, ApiError>
where
    T: Serialize + ?Sized,
{
    let mut builder = RequestBuilder::new(&url_for(path)).method(method);
    if let Some(token) = BrowserSession.token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let resp = match body {
        Some(b) => builder.json(b)?.send().await?,
        None => builder.send().await?,
    };

    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: resp.status(),
            text: resp.status_text(),
        })
    }
}

/// JSON request → JSON response.
pub async fn fetch_json<T, U>(method: Method, path: &str, body: Option<&T>) -> Result<U, ApiError>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let resp = send(method, path, body).await?;
    Ok(resp.json().await?)
}

/// For endpoints answering 200/204 without a body worth reading.
pub async fn fetch_empty<T>(method: Method, path: &str, body: Option<&T>) -> Result<(), ApiError>
where
    T: Serialize + ?Sized,
{
    send(method, path, body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_the_base() {
        let url = url_for("/auth/login");
        assert!(url.ends_with("/auth/login"));
        assert!(!url.contains("//auth"));
    }
}
