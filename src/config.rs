use dotenv::dotenv;
use std::env;

pub struct Config {
    pub spreadsheet_id: String,
    pub sheets_api_key: String,
    pub frontend_url: String,
    pub server_address: String,
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    dotenv().ok();

    let spreadsheet_id = env::var("GOOGLE_SHEETS_ID")?;
    let sheets_api_key = env::var("GOOGLE_SHEETS_API_KEY")?;
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
    let server_address = env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    Ok(Config {
        spreadsheet_id,
        sheets_api_key,
        frontend_url,
        server_address,
    })
}
