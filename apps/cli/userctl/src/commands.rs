use crate::cli::Command;
use crate::error::UserCtlError;

use models::AuthToken;
use user_client::UserProxy;

use std::fmt;

use log::info;

/// What a successful command produced.
#[derive(Debug)]
pub enum Outcome {
    UserCreated { email: String },
    TokenIssued(AuthToken),
}

/// Prints what the command's caller needs on stdout. For a token that is the
/// raw token, so it can be piped.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::UserCreated { email } => write!(f, "created user {email}"),
            Outcome::TokenIssued(token) => write!(f, "{}", token.as_str()),
        }
    }
}

/// Run `command` through `proxy`.
///
/// Credentials are validated locally first; invalid input never reaches the proxy.
pub async fn execute<P>(proxy: &P, command: &Command) -> Result<Outcome, UserCtlError>
where
    P: UserProxy,
{
    let user = command.credentials().to_user()?;

    match command {
        Command::CreateUser(_) => {
            proxy.create_user(&user).await?;
            info!("Created user {}", user.email);
            Ok(Outcome::UserCreated { email: user.email })
        }
        Command::CreateToken(_) => {
            let token = proxy.create_token(&user).await?;
            info!("Issued token for {} ({} bytes)", user.email, token.len());
            Ok(Outcome::TokenIssued(token))
        }
    }
}
