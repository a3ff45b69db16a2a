use std::time::{Duration, Instant};

use crate::error::AuthError;

/// Query parameter names a sign-in page may use for the Google ID token.
const CREDENTIAL_PARAM_NAMES: [&str; 2] = ["id_token", "credential"];

/// Run the browser half of Google sign-in and return the Google ID token.
///
/// 1. Start `tiny_http` on `127.0.0.1:0` (random port)
/// 2. Open the browser to `sign_in_page_url` with a localhost redirect
/// 3. Wait for the callback carrying the credential (in `spawn_blocking`,
///    `tiny_http::recv` blocks)
///
/// # Errors
///
/// Returns `AuthError::BrowserFlowFailed` if the server cannot bind, the state
/// nonce does not match, or the callback times out.
pub async fn obtain_google_credential(
    sign_in_page_url: &str,
    timeout: Duration,
) -> Result<String, AuthError> {
    let server = tiny_http::Server::http("127.0.0.1:0")
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

    let state = random_state()?;
    let redirect_uri = format!("http://127.0.0.1:{port}/callback");
    let separator = if sign_in_page_url.contains('?') { '&' } else { '?' };
    let sign_in_url = format!(
        "{sign_in_page_url}{separator}redirect_uri={redirect}&state={state}",
        redirect = urlencoding::encode(&redirect_uri)
    );

    eprintln!("Opening browser to: {sign_in_url}");
    if let Err(error) = open::that(&sign_in_url) {
        eprintln!("Failed to open browser: {error}");
        eprintln!("Open the URL above manually, then return here.");
    }

    tokio::task::spawn_blocking(move || wait_for_callback(&server, timeout, &state))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))?
}

/// 16 random bytes, hex encoded.
fn random_state() -> Result<String, AuthError> {
    let mut nonce_bytes = [0u8; 16];
    getrandom::fill(&mut nonce_bytes)
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to generate state: {e}")))?;
    Ok(nonce_bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// What a `/callback` query string carried.
#[derive(Debug, Default, PartialEq, Eq)]
struct CallbackParams {
    credential: Option<String>,
    state: Option<String>,
}

fn parse_callback_query(query: &str) -> Result<CallbackParams, AuthError> {
    let mut params = CallbackParams::default();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = || {
            urlencoding::decode(value)
                .map(std::borrow::Cow::into_owned)
                .map_err(|e| AuthError::BrowserFlowFailed(format!("URL decode: {e}")))
        };
        if CREDENTIAL_PARAM_NAMES.contains(&key) {
            params.credential = Some(decoded()?);
        } else if key == "state" {
            params.state = Some(decoded()?);
        }
    }
    Ok(params)
}

fn html_response(body: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(body);
    match tiny_http::Header::from_bytes("Content-Type", "text/html") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

/// Block until the callback server receives a request with a credential.
///
/// Requests that are not `/callback?...` (favicon, preflight) get a 204 and are
/// ignored. A callback without a credential is treated as an intermediate
/// redirect and waited past.
fn wait_for_callback(
    server: &tiny_http::Server,
    timeout: Duration,
    expected_state: &str,
) -> Result<String, AuthError> {
    let deadline = Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser callback timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(req)) => req,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        let url = request.url().to_string();
        let Some(query) = url.strip_prefix("/callback?") else {
            let _ = request.respond(tiny_http::Response::from_string("").with_status_code(204));
            continue;
        };

        let params = match parse_callback_query(query) {
            Ok(params) => params,
            Err(error) => {
                let _ = request.respond(html_response(
                    "<html><body><h1>Sign-in failed</h1><p>Malformed callback. Check CLI output.</p></body></html>",
                ));
                return Err(error);
            }
        };

        let Some(credential) = params.credential else {
            let _ = request.respond(html_response(
                "<html><body><h1>Waiting for sign-in…</h1><p>Redirecting, please wait.</p></body></html>",
            ));
            continue;
        };

        if params.state.as_deref() != Some(expected_state) {
            let _ = request.respond(html_response(
                "<html><body><h1>Sign-in failed</h1><p>State mismatch. Check CLI output.</p></body></html>",
            ));
            return Err(AuthError::BrowserFlowFailed(
                "state mismatch in callback".into(),
            ));
        }

        let _ = request.respond(html_response(
            "<html><body><h1>Signed in!</h1><p>You can close this tab.</p></body></html>",
        ));
        return Ok(credential);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_token_and_state() {
        let params = parse_callback_query("id_token=abc.def&state=1234").unwrap();
        assert_eq!(params.credential.as_deref(), Some("abc.def"));
        assert_eq!(params.state.as_deref(), Some("1234"));
    }

    #[test]
    fn accepts_credential_alias() {
        let params = parse_callback_query("state=s&credential=eyJ%2Bx").unwrap();
        assert_eq!(params.credential.as_deref(), Some("eyJ+x"));
    }

    #[test]
    fn ignores_unknown_and_valueless_params() {
        let params = parse_callback_query("foo=bar&flag&state=s").unwrap();
        assert_eq!(
            params,
            CallbackParams {
                credential: None,
                state: Some("s".into()),
            }
        );
    }

    #[test]
    fn random_state_is_32_hex_chars() {
        let state = random_state().unwrap();
        assert_eq!(state.len(), 32);
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(state, random_state().unwrap());
    }

    #[test]
    fn callback_with_matching_state_returns_credential() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        let client = std::thread::spawn(move || {
            use std::io::{Read, Write};
            let mut stream = std::net::TcpStream::connect(("127.0.0.1", port)).unwrap();
            write!(
                stream,
                "GET /callback?id_token=tok&state=nonce HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
            )
            .unwrap();
            let mut body = String::new();
            let _ = stream.read_to_string(&mut body);
            body
        });

        let credential = wait_for_callback(&server, Duration::from_secs(5), "nonce").unwrap();
        assert_eq!(credential, "tok");
        assert!(client.join().unwrap().contains("Signed in!"));
    }

    #[test]
    fn callback_with_wrong_state_fails() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        let client = std::thread::spawn(move || {
            use std::io::{Read, Write};
            let mut stream = std::net::TcpStream::connect(("127.0.0.1", port)).unwrap();
            write!(
                stream,
                "GET /callback?id_token=tok&state=other HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
            )
            .unwrap();
            let mut body = String::new();
            let _ = stream.read_to_string(&mut body);
        });

        let err = wait_for_callback(&server, Duration::from_secs(5), "nonce").unwrap_err();
        assert!(err.to_string().contains("state mismatch"));
        client.join().unwrap();
    }

    #[test]
    fn times_out_without_callback() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let err = wait_for_callback(&server, Duration::from_millis(50), "nonce").unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }
}
