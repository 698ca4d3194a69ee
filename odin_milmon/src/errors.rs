/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinMilmonError>;

#[derive(Error,Debug)]
pub enum OdinMilmonError {

    /// network, HTTP status or timeout failure while fetching the feed
    #[error("transport error: {0}")]
    TransportError(String),

    /// the feed document parsed but does not have the expected structure
    #[error("malformed data: {0}")]
    MalformedDataError(String),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("channel error {0}")]
    ChannelError(String),
}

impl OdinMilmonError {
    /// fetch errors are the ones that clear the snapshot, everything else is a local problem
    pub fn is_fetch_error (&self)->bool {
        matches!( self, OdinMilmonError::TransportError(_) | OdinMilmonError::MalformedDataError(_))
    }
}

impl From<reqwest::Error> for OdinMilmonError {
    fn from (e: reqwest::Error)->Self {
        if e.is_timeout() {
            OdinMilmonError::TransportError( format!("request timed out: {e}"))
        } else if e.is_decode() {
            OdinMilmonError::MalformedDataError( e.to_string())
        } else {
            OdinMilmonError::TransportError( e.to_string())
        }
    }
}

impl From<serde_json::Error> for OdinMilmonError {
    fn from (e: serde_json::Error)->Self {
        OdinMilmonError::MalformedDataError( e.to_string())
    }
}

macro_rules! transport_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinMilmonError::TransportError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use transport_error;

macro_rules! malformed_data {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinMilmonError::MalformedDataError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use malformed_data;
