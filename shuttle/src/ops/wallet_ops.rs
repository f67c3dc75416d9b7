use crate::{
    api::{RechargeRequest, ShuttleApi},
    session::Session,
};

use super::OpsError;

pub fn wallet_balance(api: &dyn ShuttleApi, session: &Session) -> Result<f64, OpsError> {
    Ok(api.wallet_balance(&session.email)?.wallet_balance)
}

/// adds `amount` to the session user's wallet and returns the new balance.
/// non-positive or non-finite amounts are refused before any request is sent.
pub fn recharge(api: &dyn ShuttleApi, session: &Session, amount: f64) -> Result<f64, OpsError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(OpsError::InvalidAmount(amount));
    }
    let response = api.recharge_wallet(&session.email, &RechargeRequest { amount })?;
    log::info!(
        "recharged wallet of {} by {amount}, balance now {}",
        session.email,
        response.new_balance
    );
    Ok(response.new_balance)
}
