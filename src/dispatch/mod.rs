// ABOUTME: Dispatch module - argument marshalling, invocation, and structured payloads.
// ABOUTME: Every dispatch operation ends in a success or error payload.

mod dispatcher;
mod marshal;
mod payload;

pub use dispatcher::*;
pub use marshal::*;
pub use payload::*;
