mod api_key;

pub use api_key::{API_KEY_HEADER, API_KEY_MISSING, UNAUTHORIZED_CLIENT, api_key_middleware};
