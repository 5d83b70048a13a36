//! Validate command

use std::process::ExitCode;

use cubesolve::core::services::validate as validate_cube;
use cubesolve::output::{OutputMode, ValidateReport};

/// Run the cube string checks and report the first failure
pub fn validate(cube: &str, mode: OutputMode) -> ExitCode {
    let report = ValidateReport::from_result(&validate_cube(cube));
    report.render(mode);

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
