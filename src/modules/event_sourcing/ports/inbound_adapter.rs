// Inbound adapters translate a transport-specific request (API Gateway event, HTTP
// request, queue message) into a domain command. They do not decide anything.

use crate::modules::event_sourcing::core::command::Command;
use crate::shared::errors::api_error::ApiError;

pub trait InboundAdapter<Request> {
    type Command: Command;

    fn to_command(&self, request: Request) -> Result<Self::Command, ApiError>;
}
