use lambda_runtime::Context;
use serde::Serialize;

/// The parts of the runtime context worth putting in the logs.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct InvocationSummary<'a> {
    pub aws_request_id: &'a str,
    pub function_name: &'a str,
    pub function_version: &'a str,
    pub memory_limit_in_mb: i32,
    pub invoked_function_arn: &'a str,
    pub log_group_name: &'a str,
    pub log_stream_name: &'a str,
}

impl<'a> InvocationSummary<'a> {
    pub fn from_context(ctx: &'a Context) -> Self {
        let env = &ctx.env_config;
        InvocationSummary {
            aws_request_id: &ctx.request_id,
            function_name: &env.function_name,
            function_version: &env.version,
            memory_limit_in_mb: env.memory,
            invoked_function_arn: &ctx.invoked_function_arn,
            log_group_name: &env.log_group,
            log_stream_name: &env.log_stream,
        }
    }
}
