use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.warnings.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
