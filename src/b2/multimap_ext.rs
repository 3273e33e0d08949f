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

use crate::b2::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Adds the pair only when a value is present
    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.into());
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_encodes_values() {
        let mut m = Multimap::new();
        m.add("fileId", "4_z27c88f1d182b150646ff0b16_f1004ba650fe24e6b_d20180809_m012456_c002_v0001099_t0010");
        assert_eq!(
            m.to_query_string(),
            "fileId=4_z27c88f1d182b150646ff0b16_f1004ba650fe24e6b_d20180809_m012456_c002_v0001099_t0010"
        );

        let mut m = Multimap::new();
        m.add("prefix", "a b&c");
        assert_eq!(m.to_query_string(), "prefix=a%20b%26c");
    }

    #[test]
    fn test_add_opt_skips_none() {
        let mut m = Multimap::new();
        m.add_opt("a", Some("1"));
        m.add_opt::<_, String>("b", None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_add_multimap_keeps_all_values() {
        let mut m = Multimap::new();
        m.add("k", "1");
        let mut other = Multimap::new();
        other.add("k", "2");
        other.add("j", "3");
        m.add_multimap(other);
        assert_eq!(m.get_vec("k").map(Vec::len), Some(2));
        assert_eq!(m.get("j").map(String::as_str), Some("3"));
    }
}
