use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn success_line<T: Serialize>(data: T) -> serde_json::Result<String> {
    serde_json::to_string(&CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    })
}

pub fn error_line(message: &str) -> serde_json::Result<String> {
    serde_json::to_string(&CliResponse::<()> {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    })
}

pub fn output_list<T: Serialize>(items: Vec<T>) -> serde_json::Result<()> {
    let count = items.len();
    println!("{}", success_line(ListResponse { items, count })?);
    Ok(())
}
