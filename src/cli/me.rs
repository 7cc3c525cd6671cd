use crate::{
    Result,
    cli::print_json,
    config::Config,
    management::LocalStore,
    types::User,
};

/// Shows the profile stored at login. No network call is made.
pub async fn me(config: &Config, json: bool) -> Result<User> {
    let user = LocalStore::from_config(config).load_user().await?;

    if json {
        print_json(&user)?;
    } else {
        println!("{}", render_user(&user));
    }

    Ok(user)
}

pub fn render_user(user: &User) -> String {
    format!(
        "Display Name: {}\nID: {}",
        user.display_name.as_deref().unwrap_or_default(),
        user.id
    )
}
