// B2 Rust Library for Backblaze B2 Cloud Storage
// Copyright 2026 The b2-rs Authors
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

use super::B2Client;
use crate::b2::builders::{DeleteKey, DeleteKeyBldr};

impl B2Client {
    /// Creates a [`DeleteKey`] request builder.
    ///
    /// To execute the request, call [`DeleteKey::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a [`DeleteKeyResponse`](crate::b2::response::DeleteKeyResponse).
    pub fn delete_key<S: Into<String>>(&self, application_key_id: S) -> DeleteKeyBldr {
        DeleteKey::builder()
            .client(self.clone())
            .application_key_id(application_key_id)
    }
}
