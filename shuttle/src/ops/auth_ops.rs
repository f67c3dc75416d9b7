use itertools::Itertools;

use crate::{
    api::{LoginRequest, RegisterRequest, ShuttleApi},
    session::{Session, SessionStore},
};

use super::OpsError;

/// result of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub message: String,
    pub wallet_balance: f64,
}

/// what the profile menu shows for the logged-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub wallet_balance: f64,
}

/// creates an account. does not log in.
pub fn register(
    api: &dyn ShuttleApi,
    email: &str,
    name: &str,
    password: &str,
) -> Result<String, OpsError> {
    require_fields(&[("email", email), ("name", name), ("password", password)])?;
    let request = RegisterRequest {
        email: email.trim().to_string(),
        name: name.trim().to_string(),
        password: password.to_string(),
    };
    let response = api.register(&request)?;
    log::info!("registered {}", request.email);
    Ok(response.message)
}

/// authenticates with the backend and stores the resulting session. a failed login
/// leaves any previously stored session untouched.
pub fn login(
    api: &dyn ShuttleApi,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, OpsError> {
    require_fields(&[("email", email), ("password", password)])?;
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let response = api.login(&request)?;
    let session = Session::new(&response.email, &response.name);
    store.save(&session)?;
    log::info!("logged in as {}", session.email);
    Ok(LoginOutcome {
        session,
        message: response.message,
        wallet_balance: response.wallet_balance,
    })
}

/// forgets the stored session. returns false if nobody was logged in.
pub fn logout(store: &SessionStore) -> Result<bool, OpsError> {
    Ok(store.clear()?)
}

pub fn profile(api: &dyn ShuttleApi, session: &Session) -> Result<Profile, OpsError> {
    let balance = api.wallet_balance(&session.email)?;
    Ok(Profile {
        display_name: session.display_name.clone(),
        email: session.email.clone(),
        wallet_balance: balance.wallet_balance,
    })
}

fn require_fields(fields: &[(&str, &str)]) -> Result<(), OpsError> {
    let missing = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .join(", ");
    if missing.is_empty() {
        Ok(())
    } else {
        Err(OpsError::MissingFields(missing))
    }
}
