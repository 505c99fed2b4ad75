use once_cell::sync::Lazy;
use reqwest::Url;

pub static API_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://127.0.0.1:8001/api/").unwrap());
