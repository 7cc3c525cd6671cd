use crate::{Result, spotify::SpotifyClient, types::User};

impl SpotifyClient {
    /// Fetches the profile of the user the token belongs to (`GET /me`).
    pub async fn current_user(&self) -> Result<User> {
        self.get(&self.url("/me")).await
    }
}
