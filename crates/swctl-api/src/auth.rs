// Session authentication
//
// The switch has no JSON login endpoint. Fetching the login page hands out
// a session cookie, and the `authorize` endpoint binds it to a user. Both
// the username and password travel as hex MD5 digests in the query string.

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;

const LOGIN_PAGE: &str = "login.html";
const AUTHORIZE: &str = "authorize";

/// Lowercase hex MD5 digest, the form the firmware expects for credentials.
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", Md5::digest(input.as_bytes()))
}

impl SwitchClient {
    /// Authenticate with the switch using username/password.
    ///
    /// On success the session cookie is stored in the client's cookie jar
    /// and used for all subsequent requests. Only the status of the final
    /// `authorize` request decides the outcome.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let page = self.endpoint_url(LOGIN_PAGE)?;
        debug!("priming session at {}", page);
        self.http().get(page).send().await?;

        let mut url = self.endpoint_url(AUTHORIZE)?;
        url.query_pairs_mut()
            .append_pair("loginusr", &md5_hex(username))
            .append_pair("loginpwd", &md5_hex(password.expose_secret()));

        debug!(username, "logging in");

        let resp = self.http().get(url).send().await?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Authentication {
                message: format!("invalid username or password (HTTP {status})"),
            });
        }

        debug!("login successful");
        Ok(())
    }
}
