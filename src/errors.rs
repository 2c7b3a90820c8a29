// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! Re-exports the workspace error types from `fridge-core` so library code and
//! binaries share one `AppError` and one set of error codes.

pub use fridge_core::errors::{AppError, AppResult, ErrorCode};
