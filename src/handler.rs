use crate::error::PayloadError;
use crate::invocation::InvocationSummary;
use crate::payload::RequestPayload;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

pub const SUCCESS: &str = "Payload logged successfully";

/// Logs the JSON form of `payload`.
///
/// Fails only if `payload` refuses to serialize; the returned error then
/// carries the failure response.
pub fn log_payload<T: Serialize>(payload: &T) -> Result<&'static str, PayloadError> {
    let json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Error marshalling payload: {}", e);
            return Err(PayloadError::Serialization(e));
        }
    };
    log::info!("Received payload: {}", json);

    Ok(SUCCESS)
}

pub async fn function_handler(event: LambdaEvent<RequestPayload>) -> Result<&'static str, Error> {
    let (payload, ctx) = event.into_parts();

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&InvocationSummary::from_context(&ctx)) {
            Ok(summary) => log::debug!("Invocation context: {}", summary),
            Err(e) => log::warn!("Can't render invocation context: {}", e),
        }
    }

    Ok(log_payload(&payload)?)
}
