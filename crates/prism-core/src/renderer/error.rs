// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the error types for the rendering subsystem.

use std::fmt;

/// An error raised by a render context while accepting recorded commands.
#[derive(Debug)]
pub enum RenderError {
    /// The context refused or failed to submit a command buffer.
    SubmissionFailed {
        /// The name the command buffer was acquired with.
        buffer: String,
        /// Backend-provided details.
        details: String,
    },
    /// The graphics device was lost (e.g., GPU driver crashed or was updated).
    /// This is a catastrophic error that typically requires reinitialization.
    DeviceLost,
    /// An unexpected or internal error occurred.
    Internal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SubmissionFailed { buffer, details } => {
                write!(f, "Failed to submit command buffer '{buffer}': {details}")
            }
            RenderError::DeviceLost => write!(
                f,
                "The graphics device was lost and needs to be reinitialized."
            ),
            RenderError::Internal(msg) => {
                write!(f, "An internal or unexpected error occurred: {msg}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_failed_display() {
        let err = RenderError::SubmissionFailed {
            buffer: "Transparent Settings Pass".to_string(),
            details: "queue full".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to submit command buffer 'Transparent Settings Pass': queue full"
        );
    }

    #[test]
    fn device_lost_display() {
        assert_eq!(
            RenderError::DeviceLost.to_string(),
            "The graphics device was lost and needs to be reinitialized."
        );
    }
}
