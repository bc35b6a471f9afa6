#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A single API call: method, path relative to the client origin, trailing
/// path segments taken from caller input, query pairs and an optional JSON
/// body. Each client method builds exactly one of these.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: &str) -> Endpoint {
        return Endpoint {
            method,
            path: path.to_string(),
            segments: vec![],
            query: vec![],
            headers: vec![],
            body: None,
        };
    }

    pub fn get(path: &str) -> Endpoint {
        return Endpoint::new(HttpMethod::Get, path);
    }

    pub fn post(path: &str) -> Endpoint {
        return Endpoint::new(HttpMethod::Post, path);
    }

    pub fn put(path: &str) -> Endpoint {
        return Endpoint::new(HttpMethod::Put, path);
    }

    pub fn delete(path: &str) -> Endpoint {
        return Endpoint::new(HttpMethod::Delete, path);
    }

    /// Appends one path segment. The client percent-encodes it, so `/`, `?`
    /// and `#` stay inside the segment.
    pub fn segment<V: ToString>(mut self, value: V) -> Endpoint {
        self.segments.push(value.to_string());
        return self;
    }

    pub fn query<V: ToString>(mut self, key: &str, value: V) -> Endpoint {
        self.query.push((key.to_string(), value.to_string()));
        return self;
    }

    /// Adds the query pair only when a value is supplied.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Endpoint {
        if let Some(val) = value {
            return self.query(key, val);
        }

        return self;
    }

    pub fn header(mut self, key: &str, value: &str) -> Endpoint {
        self.headers.push((key.to_string(), value.to_string()));
        return self;
    }

    pub fn body(mut self, body: Value) -> Endpoint {
        self.body = Some(body);
        return self;
    }
}
