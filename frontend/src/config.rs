/// Base URL of the gateway in front of the microservices. Set `API_GATEWAY`
/// at build time to point the front-end elsewhere.
pub const API_GATEWAY: &str = match option_env!("API_GATEWAY") {
    Some(url) => url,
    None => "http://127.0.0.1:8002",
};

pub fn url(path: &str) -> String {
    format!("{}{}", API_GATEWAY, path)
}
